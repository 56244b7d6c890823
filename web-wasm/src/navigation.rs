//! ナビゲーションコンテキストプロバイダ
//!
//! 共通クレートのトラッカーをリアクティブなシグナルに載せ、
//! ルート変更を自動で流し込む。ページ・カードは use_navigation()
//! で取得したハンドルのセッター経由でのみ状態を更新する
//! （ストレージへの直接書き込みはしない）。

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use wine_catalog_common::navigation::{
    back_link, BackLink, DetailPage, NavigationState, NavigationTracker,
};

use crate::storage::BrowserStore;

/// ナビゲーション状態へのハンドル
///
/// Copy なのでクロージャや async ブロックにそのまま渡せる。
#[derive(Clone, Copy)]
pub struct NavigationHandle {
    tracker: RwSignal<NavigationTracker<BrowserStore>>,
}

impl NavigationHandle {
    /// 現在の状態のスナップショット（リアクティブ）
    pub fn snapshot(&self) -> NavigationState {
        self.tracker.with(|t| t.state().clone())
    }

    /// 詳細ページの「戻る」リンクを決定表から引く
    pub fn back_link(&self, page: DetailPage) -> BackLink {
        back_link(page, &self.snapshot())
    }

    pub fn set_previous_path(&self, path: &str) {
        let path = path.to_string();
        self.tracker.update(|t| t.set_previous_path(&path));
    }

    pub fn set_specific_wine(&self, id: Option<&str>, name: Option<&str>) {
        let id = id.map(str::to_string);
        let name = name.map(str::to_string);
        self.tracker
            .update(|t| t.set_specific_wine(id.as_deref(), name.as_deref()));
    }

    pub fn set_specific_winemaker(&self, id: Option<&str>, name: Option<&str>) {
        let id = id.map(str::to_string);
        let name = name.map(str::to_string);
        self.tracker
            .update(|t| t.set_specific_winemaker(id.as_deref(), name.as_deref()));
    }
}

/// プロバイダ配下のどこからでもハンドルを取得する
pub fn use_navigation() -> NavigationHandle {
    expect_context::<NavigationHandle>()
}

/// ナビゲーション状態を所有し、ルート変更をトラッカーへ通知する
#[component]
pub fn NavigationProvider(children: Children) -> impl IntoView {
    let tracker = RwSignal::new(NavigationTracker::load(BrowserStore));
    provide_context(NavigationHandle { tracker });

    let location = use_location();
    Effect::new(move |_| {
        let path = location.pathname.get();
        tracker.update(|t| t.handle_route_change(&path));
    });

    children()
}
