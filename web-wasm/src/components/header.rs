//! ヘッダーコンポーネント

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use wine_catalog_common::RouteKind;

/// 現在のルートが属するタブ
fn active_tab(path: &str) -> &'static str {
    match RouteKind::classify(path) {
        RouteKind::Home | RouteKind::Collection | RouteKind::WineDetail(_) => "home",
        RouteKind::Winemakers | RouteKind::WinemakerDetail(_) => "winemakers",
        RouteKind::Other if path == "/about" => "contact",
        RouteKind::Other => "",
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let location = use_location();
    let tab = Memo::new(move |_| active_tab(&location.pathname.get()).to_string());

    view! {
        <header class="header">
            <div class="header-inner">
                <a href="/" class="brand">"Elegant Wine"</a>
                <nav class="tabs">
                    <a href="/" class="tab" class:active=move || tab.get() == "home">
                        "Home"
                    </a>
                    <a
                        href="/winemakers"
                        class="tab"
                        class:active=move || tab.get() == "winemakers"
                    >
                        "Winemakers"
                    </a>
                    <a href="/about" class="tab" class:active=move || tab.get() == "contact">
                        "Contact"
                    </a>
                </nav>
            </div>
        </header>
    }
}
