//! ルート分類
//!
//! パス文字列をアプリのルート種別に分類する。
//! 部分文字列マッチではなくセグメント単位で判定する
//! （"/winemaker/7" が "/wine/" 扱いにならないように）。

/// アプリ内ルートの種別
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteKind {
    /// ワインギャラリー（ルート "/"）
    Home,
    /// コレクション一覧（"/collection"）
    Collection,
    /// ワインメーカー一覧（"/winemakers"）
    Winemakers,
    /// ワイン詳細（"/wine/:id"）
    WineDetail(String),
    /// ワインメーカー詳細（"/winemaker/:id"）
    WinemakerDetail(String),
    /// その他（"/about" など）
    Other,
}

impl RouteKind {
    /// パスを分類する
    pub fn classify(path: &str) -> Self {
        let segments: Vec<&str> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => RouteKind::Home,
            ["collection"] => RouteKind::Collection,
            ["winemakers"] => RouteKind::Winemakers,
            ["wine", id] => RouteKind::WineDetail((*id).to_string()),
            ["winemaker", id] => RouteKind::WinemakerDetail((*id).to_string()),
            _ => RouteKind::Other,
        }
    }

    /// 詳細ページかどうか
    pub fn is_detail(&self) -> bool {
        matches!(
            self,
            RouteKind::WineDetail(_) | RouteKind::WinemakerDetail(_)
        )
    }

    /// コレクション系の一覧ページかどうか（"/" または "/collection"）
    pub fn is_collection_listing(&self) -> bool {
        matches!(self, RouteKind::Home | RouteKind::Collection)
    }
}
