//! ナビゲーションコンテキストトラッカー
//!
//! ページ遷移をまたいで「どこから来たか」を追跡する状態コンテナ:
//! - 最後に訪れた一覧ページのパス（previous_path）
//! - 現在の閲覧セクション（source_context: collection / winemakers）
//! - 最後に表示したワイン / ワインメーカーの ID と表示名
//!
//! すべての更新は本モジュールのセッターを経由し、各セッターが
//! 永続ストアへのミラーを明示的な副作用として行う。戻りリンクの
//! 決定は [`back_link`] の遷移表に集約してある。

use crate::route::RouteKind;
use crate::store::ContextStore;

/// 永続ストレージのキー
pub const KEY_PREVIOUS_PATH: &str = "previousPath";
pub const KEY_NAVIGATION_CONTEXT: &str = "navigationContext";
pub const KEY_SPECIFIC_WINEMAKER_ID: &str = "specificWinemakerId";
pub const KEY_SPECIFIC_WINEMAKER_NAME: &str = "specificWinemakerName";
pub const KEY_SPECIFIC_WINE_ID: &str = "specificWineId";
pub const KEY_SPECIFIC_WINE_NAME: &str = "specificWineName";

/// ユーザーが閲覧中のトップレベルセクション
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceContext {
    /// ワインコレクション（"/" / "/collection" 系）
    #[default]
    Collection,
    /// ワインメーカー一覧（"/winemakers" 系）
    Winemakers,
    /// どちらでもない
    Other,
}

impl SourceContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceContext::Collection => "collection",
            SourceContext::Winemakers => "winemakers",
            SourceContext::Other => "other",
        }
    }

    /// ストアに保存された値から復元する
    ///
    /// "collection" / "winemakers" 以外の値は不正として None を返す
    /// （呼び出し側はデフォルトにフォールバックする）。
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "collection" => Some(SourceContext::Collection),
            "winemakers" => Some(SourceContext::Winemakers),
            _ => None,
        }
    }
}

/// 最後に表示したエンティティの ID と表示名
///
/// ID が存在するときだけペアとして保持される（表示名は欠けることがある）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRef {
    pub id: String,
    pub name: Option<String>,
}

/// ナビゲーション状態のスナップショット
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    /// 最後に訪れた一覧系ルート（詳細ページは含めない）
    pub previous_path: String,
    pub source_context: SourceContext,
    pub specific_winemaker: Option<EntityRef>,
    pub specific_wine: Option<EntityRef>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            previous_path: "/".to_string(),
            source_context: SourceContext::default(),
            specific_winemaker: None,
            specific_wine: None,
        }
    }
}

/// ナビゲーションコンテキストトラッカー
///
/// 状態と永続ストアを一体で所有し、更新規則をセッターに集約する。
/// ストアへの書き込みは各セッター内で同期的に行われ、メモリ上の
/// 状態と保存値は常に一致する。
#[derive(Debug, Clone)]
pub struct NavigationTracker<S: ContextStore> {
    state: NavigationState,
    store: S,
}

impl<S: ContextStore> NavigationTracker<S> {
    /// ストアから状態を復元してトラッカーを生成する
    ///
    /// 保存値が無い（または空文字列の）項目はデフォルトのまま。
    /// navigationContext は有効値のみ受け入れる。
    pub fn load(store: S) -> Self {
        let mut state = NavigationState::default();

        if let Some(path) = read_nonempty(&store, KEY_PREVIOUS_PATH) {
            state.previous_path = path;
        }
        if let Some(context) = read_nonempty(&store, KEY_NAVIGATION_CONTEXT)
            .and_then(|v| SourceContext::from_stored(&v))
        {
            state.source_context = context;
        }
        if let Some(id) = read_nonempty(&store, KEY_SPECIFIC_WINEMAKER_ID) {
            state.specific_winemaker = Some(EntityRef {
                id,
                name: read_nonempty(&store, KEY_SPECIFIC_WINEMAKER_NAME),
            });
        }
        if let Some(id) = read_nonempty(&store, KEY_SPECIFIC_WINE_ID) {
            state.specific_wine = Some(EntityRef {
                id,
                name: read_nonempty(&store, KEY_SPECIFIC_WINE_NAME),
            });
        }

        Self { state, store }
    }

    /// 現在の状態
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// ストアを取り出す（再読込のシミュレーション用）
    pub fn into_store(self) -> S {
        self.store
    }

    /// ルート変更通知
    ///
    /// 詳細ページ以外への遷移で previous_path を更新し、一覧ページへの
    /// 遷移では source_context の切り替えと反対側のエンティティペアの
    /// クリアを行う。
    pub fn handle_route_change(&mut self, path: &str) {
        let route = RouteKind::classify(path);
        if route.is_detail() {
            return;
        }

        self.state.previous_path = path.to_string();
        self.store.set(KEY_PREVIOUS_PATH, path);

        match route {
            RouteKind::Home | RouteKind::Collection => {
                self.set_source_context(SourceContext::Collection);
                self.clear_specific_winemaker();
            }
            RouteKind::Winemakers => {
                self.set_source_context(SourceContext::Winemakers);
                self.clear_specific_wine();
            }
            _ => {}
        }
    }

    /// previous_path の明示的な設定
    ///
    /// パスから source_context も推定する: ルートまたはワイン詳細なら
    /// collection、ワインメーカー一覧または詳細なら winemakers。
    pub fn set_previous_path(&mut self, path: &str) {
        self.state.previous_path = path.to_string();
        self.store.set(KEY_PREVIOUS_PATH, path);

        match RouteKind::classify(path) {
            RouteKind::Home | RouteKind::WineDetail(_) => {
                self.set_source_context(SourceContext::Collection);
            }
            RouteKind::Winemakers | RouteKind::WinemakerDetail(_) => {
                self.set_source_context(SourceContext::Winemakers);
            }
            _ => {}
        }
    }

    /// 最後に表示したワインメーカーを記録する
    ///
    /// id が None ならペアをクリアし、保存キーも削除する。
    pub fn set_specific_winemaker(&mut self, id: Option<&str>, name: Option<&str>) {
        match id {
            Some(id) => {
                self.store.set(KEY_SPECIFIC_WINEMAKER_ID, id);
                if let Some(name) = name {
                    self.store.set(KEY_SPECIFIC_WINEMAKER_NAME, name);
                }
                self.state.specific_winemaker = Some(EntityRef {
                    id: id.to_string(),
                    name: name.map(str::to_string),
                });
            }
            None => self.clear_specific_winemaker(),
        }
    }

    /// 最後に表示したワインを記録する（set_specific_winemaker と同じ契約）
    pub fn set_specific_wine(&mut self, id: Option<&str>, name: Option<&str>) {
        match id {
            Some(id) => {
                self.store.set(KEY_SPECIFIC_WINE_ID, id);
                if let Some(name) = name {
                    self.store.set(KEY_SPECIFIC_WINE_NAME, name);
                }
                self.state.specific_wine = Some(EntityRef {
                    id: id.to_string(),
                    name: name.map(str::to_string),
                });
            }
            None => self.clear_specific_wine(),
        }
    }

    fn set_source_context(&mut self, context: SourceContext) {
        self.state.source_context = context;
        self.store.set(KEY_NAVIGATION_CONTEXT, context.as_str());
    }

    fn clear_specific_winemaker(&mut self) {
        self.state.specific_winemaker = None;
        self.store.remove(KEY_SPECIFIC_WINEMAKER_ID);
        self.store.remove(KEY_SPECIFIC_WINEMAKER_NAME);
    }

    fn clear_specific_wine(&mut self) {
        self.state.specific_wine = None;
        self.store.remove(KEY_SPECIFIC_WINE_ID);
        self.store.remove(KEY_SPECIFIC_WINE_NAME);
    }
}

fn read_nonempty<S: ContextStore>(store: &S, key: &str) -> Option<String> {
    store.get(key).filter(|value| !value.is_empty())
}

/// 戻りリンクを表示する詳細ページの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPage {
    Wine,
    Winemaker,
}

/// 詳細ページの「戻る」リンク
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackLink {
    pub href: String,
    pub label: String,
}

/// 戻りリンクの決定表
///
/// (ページ種別, source_context, エンティティペアの有無) の組ごとに
/// 遷移先とラベルを定める。描画から独立して検証できる。
pub fn back_link(page: DetailPage, state: &NavigationState) -> BackLink {
    match page {
        DetailPage::Wine => match (state.source_context, state.specific_winemaker.as_ref()) {
            (SourceContext::Winemakers, Some(maker)) => BackLink {
                href: format!("/winemaker/{}", maker.id),
                label: match maker.name.as_deref() {
                    Some(name) => format!("Back to {}", name),
                    None => "Back to winemaker".to_string(),
                },
            },
            (SourceContext::Winemakers, None) => BackLink {
                href: "/winemakers".to_string(),
                label: "Back to winemakers".to_string(),
            },
            (SourceContext::Collection | SourceContext::Other, _) => BackLink {
                href: "/".to_string(),
                label: "Back to collection".to_string(),
            },
        },
        DetailPage::Winemaker => match (state.source_context, state.specific_wine.as_ref()) {
            (SourceContext::Collection, Some(wine)) => BackLink {
                href: format!("/wine/{}", wine.id),
                label: match wine.name.as_deref() {
                    Some(name) => format!("Back to {}", name),
                    None => "Back to wine".to_string(),
                },
            },
            _ => BackLink {
                href: "/winemakers".to_string(),
                label: "Back to winemakers".to_string(),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn tracker() -> NavigationTracker<MemoryStore> {
        NavigationTracker::load(MemoryStore::new())
    }

    #[test]
    fn test_default_state() {
        let t = tracker();
        assert_eq!(t.state().previous_path, "/");
        assert_eq!(t.state().source_context, SourceContext::Collection);
        assert!(t.state().specific_winemaker.is_none());
        assert!(t.state().specific_wine.is_none());
    }

    #[test]
    fn test_route_change_updates_previous_path() {
        let mut t = tracker();
        t.handle_route_change("/winemakers");
        assert_eq!(t.state().previous_path, "/winemakers");
        assert_eq!(t.store.get(KEY_PREVIOUS_PATH), Some("/winemakers".into()));
    }

    #[test]
    fn test_route_change_ignores_detail_routes() {
        let mut t = tracker();
        t.handle_route_change("/winemakers");
        t.handle_route_change("/winemaker/42");
        t.handle_route_change("/wine/7");

        // 詳細ページは previous_path に記録しない
        assert_eq!(t.state().previous_path, "/winemakers");
        assert_eq!(t.state().source_context, SourceContext::Winemakers);
    }

    #[test]
    fn test_route_change_switches_context() {
        let mut t = tracker();
        t.handle_route_change("/winemakers");
        assert_eq!(t.state().source_context, SourceContext::Winemakers);
        assert_eq!(
            t.store.get(KEY_NAVIGATION_CONTEXT),
            Some("winemakers".into())
        );

        t.handle_route_change("/");
        assert_eq!(t.state().source_context, SourceContext::Collection);
        assert_eq!(
            t.store.get(KEY_NAVIGATION_CONTEXT),
            Some("collection".into())
        );

        t.handle_route_change("/collection");
        assert_eq!(t.state().source_context, SourceContext::Collection);
    }

    #[test]
    fn test_route_change_to_other_keeps_context() {
        let mut t = tracker();
        t.handle_route_change("/winemakers");
        t.handle_route_change("/about");

        assert_eq!(t.state().previous_path, "/about");
        // "/about" はどちらのセクションでもないので context は保持
        assert_eq!(t.state().source_context, SourceContext::Winemakers);
    }

    #[test]
    fn test_visiting_root_clears_specific_winemaker() {
        let mut t = tracker();
        t.set_specific_winemaker(Some("42"), Some("Chateau X"));
        t.handle_route_change("/");

        assert!(t.state().specific_winemaker.is_none());
        assert_eq!(t.store.get(KEY_SPECIFIC_WINEMAKER_ID), None);
        assert_eq!(t.store.get(KEY_SPECIFIC_WINEMAKER_NAME), None);
        assert_eq!(t.state().source_context, SourceContext::Collection);
    }

    #[test]
    fn test_visiting_winemakers_clears_specific_wine() {
        let mut t = tracker();
        t.set_specific_wine(Some("7"), Some("Gran Reserva 2015"));
        t.handle_route_change("/winemakers");

        assert!(t.state().specific_wine.is_none());
        assert_eq!(t.store.get(KEY_SPECIFIC_WINE_ID), None);
        assert_eq!(t.store.get(KEY_SPECIFIC_WINE_NAME), None);
        assert_eq!(t.state().source_context, SourceContext::Winemakers);
    }

    #[test]
    fn test_set_previous_path_infers_collection() {
        let mut t = tracker();
        t.set_previous_path("/wine/7");

        assert_eq!(t.state().previous_path, "/wine/7");
        assert_eq!(t.state().source_context, SourceContext::Collection);
        assert_eq!(
            t.store.get(KEY_NAVIGATION_CONTEXT),
            Some("collection".into())
        );
    }

    #[test]
    fn test_set_previous_path_infers_winemakers() {
        let mut t = tracker();
        t.set_previous_path("/winemaker/42");
        assert_eq!(t.state().source_context, SourceContext::Winemakers);

        t.set_previous_path("/winemakers");
        assert_eq!(t.state().source_context, SourceContext::Winemakers);
    }

    #[test]
    fn test_set_previous_path_unknown_keeps_context() {
        let mut t = tracker();
        t.handle_route_change("/winemakers");
        t.set_previous_path("/about");

        assert_eq!(t.state().previous_path, "/about");
        assert_eq!(t.state().source_context, SourceContext::Winemakers);
    }

    #[test]
    fn test_set_specific_wine_then_clear() {
        let mut t = tracker();
        t.set_specific_wine(Some("7"), Some("Gran Reserva 2015"));

        let wine = t.state().specific_wine.as_ref().expect("wine not set");
        assert_eq!(wine.id, "7");
        assert_eq!(wine.name.as_deref(), Some("Gran Reserva 2015"));
        assert_eq!(t.store.get(KEY_SPECIFIC_WINE_ID), Some("7".into()));

        t.set_specific_wine(None, None);
        assert!(t.state().specific_wine.is_none());
        assert_eq!(t.store.get(KEY_SPECIFIC_WINE_ID), None);
        assert_eq!(t.store.get(KEY_SPECIFIC_WINE_NAME), None);
    }

    #[test]
    fn test_set_specific_winemaker_without_name() {
        let mut t = tracker();
        t.set_specific_winemaker(Some("42"), None);

        let maker = t.state().specific_winemaker.as_ref().expect("not set");
        assert_eq!(maker.id, "42");
        assert!(maker.name.is_none());
        // 名前が無いときは名前キーを書かない
        assert_eq!(t.store.get(KEY_SPECIFIC_WINEMAKER_NAME), None);
    }

    #[test]
    fn test_rehydration_roundtrip() {
        let mut t = tracker();
        t.handle_route_change("/winemakers");
        t.set_specific_winemaker(Some("42"), Some("Chateau X"));

        let reloaded = NavigationTracker::load(t.store.clone());
        assert_eq!(reloaded.state(), t.state());
    }

    #[test]
    fn test_rehydration_rejects_invalid_context() {
        let mut store = MemoryStore::new();
        store.set(KEY_NAVIGATION_CONTEXT, "bogus");
        store.set(KEY_PREVIOUS_PATH, "/winemakers");

        let t = NavigationTracker::load(store);
        assert_eq!(t.state().source_context, SourceContext::Collection);
        assert_eq!(t.state().previous_path, "/winemakers");
    }

    #[test]
    fn test_rehydration_ignores_empty_values() {
        let mut store = MemoryStore::new();
        store.set(KEY_PREVIOUS_PATH, "");
        store.set(KEY_SPECIFIC_WINE_ID, "");

        let t = NavigationTracker::load(store);
        assert_eq!(t.state().previous_path, "/");
        assert!(t.state().specific_wine.is_none());
    }

    #[test]
    fn test_store_mirrors_state_after_each_setter() {
        let mut t = tracker();
        t.handle_route_change("/winemakers");
        t.set_specific_winemaker(Some("42"), Some("Chateau X"));
        t.set_previous_path("/winemaker/42");
        t.set_specific_wine(Some("7"), Some("Gran Reserva 2015"));

        assert_eq!(
            t.store.get(KEY_PREVIOUS_PATH),
            Some("/winemaker/42".into())
        );
        assert_eq!(
            t.store.get(KEY_NAVIGATION_CONTEXT),
            Some("winemakers".into())
        );
        assert_eq!(t.store.get(KEY_SPECIFIC_WINEMAKER_ID), Some("42".into()));
        assert_eq!(
            t.store.get(KEY_SPECIFIC_WINEMAKER_NAME),
            Some("Chateau X".into())
        );
        assert_eq!(t.store.get(KEY_SPECIFIC_WINE_ID), Some("7".into()));
    }

    #[test]
    fn test_back_link_wine_page_with_specific_winemaker() {
        let state = NavigationState {
            source_context: SourceContext::Winemakers,
            specific_winemaker: Some(EntityRef {
                id: "42".into(),
                name: Some("Chateau X".into()),
            }),
            ..Default::default()
        };

        let link = back_link(DetailPage::Wine, &state);
        assert_eq!(link.href, "/winemaker/42");
        assert_eq!(link.label, "Back to Chateau X");
    }

    #[test]
    fn test_back_link_wine_page_winemaker_name_missing() {
        let state = NavigationState {
            source_context: SourceContext::Winemakers,
            specific_winemaker: Some(EntityRef {
                id: "42".into(),
                name: None,
            }),
            ..Default::default()
        };

        let link = back_link(DetailPage::Wine, &state);
        assert_eq!(link.href, "/winemaker/42");
        assert_eq!(link.label, "Back to winemaker");
    }

    #[test]
    fn test_back_link_wine_page_winemakers_without_specific() {
        let state = NavigationState {
            source_context: SourceContext::Winemakers,
            ..Default::default()
        };

        let link = back_link(DetailPage::Wine, &state);
        assert_eq!(link.href, "/winemakers");
        assert_eq!(link.label, "Back to winemakers");
    }

    #[test]
    fn test_back_link_wine_page_collection() {
        let link = back_link(DetailPage::Wine, &NavigationState::default());
        assert_eq!(link.href, "/");
        assert_eq!(link.label, "Back to collection");

        // collection では specific_winemaker が残っていても無視する
        let state = NavigationState {
            specific_winemaker: Some(EntityRef {
                id: "42".into(),
                name: Some("Chateau X".into()),
            }),
            ..Default::default()
        };
        assert_eq!(back_link(DetailPage::Wine, &state).href, "/");
    }

    #[test]
    fn test_back_link_winemaker_page_with_specific_wine() {
        let state = NavigationState {
            source_context: SourceContext::Collection,
            specific_wine: Some(EntityRef {
                id: "7".into(),
                name: Some("Gran Reserva 2015".into()),
            }),
            ..Default::default()
        };

        let link = back_link(DetailPage::Winemaker, &state);
        assert_eq!(link.href, "/wine/7");
        assert_eq!(link.label, "Back to Gran Reserva 2015");
    }

    #[test]
    fn test_back_link_winemaker_page_wine_name_missing() {
        let state = NavigationState {
            source_context: SourceContext::Collection,
            specific_wine: Some(EntityRef {
                id: "7".into(),
                name: None,
            }),
            ..Default::default()
        };

        assert_eq!(
            back_link(DetailPage::Winemaker, &state).label,
            "Back to wine"
        );
    }

    #[test]
    fn test_back_link_winemaker_page_defaults_to_directory() {
        // specific_wine があっても context が winemakers なら一覧に戻る
        let state = NavigationState {
            source_context: SourceContext::Winemakers,
            specific_wine: Some(EntityRef {
                id: "7".into(),
                name: Some("Gran Reserva 2015".into()),
            }),
            ..Default::default()
        };

        let link = back_link(DetailPage::Winemaker, &state);
        assert_eq!(link.href, "/winemakers");
        assert_eq!(link.label, "Back to winemakers");
    }

    #[test]
    fn test_source_context_from_stored() {
        assert_eq!(
            SourceContext::from_stored("collection"),
            Some(SourceContext::Collection)
        );
        assert_eq!(
            SourceContext::from_stored("winemakers"),
            Some(SourceContext::Winemakers)
        );
        assert_eq!(SourceContext::from_stored("other"), None);
        assert_eq!(SourceContext::from_stored("Collection"), None);
        assert_eq!(SourceContext::from_stored(""), None);
    }
}
