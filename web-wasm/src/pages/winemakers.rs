//! ワインメーカー一覧ページ（"/winemakers"）

use leptos::prelude::*;
use leptos::task::spawn_local;
use wine_catalog_common::Winemaker;

use crate::api;
use crate::components::winemaker_card::WinemakerCard;

#[component]
pub fn Winemakers() -> impl IntoView {
    let (winemakers, set_winemakers) = signal(Vec::<Winemaker>::new());
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        set_winemakers.set(api::winemakers::get_all_winemakers().await);
        set_loading.set(false);
    });

    view! {
        <div class="page winemakers">
            <h1 class="page-title">"Winemakers"</h1>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading"><div class="spinner"></div></div> }
            >
                {move || {
                    let makers = winemakers.get();
                    if makers.is_empty() {
                        view! { <p class="empty-message">"No winemakers found."</p> }.into_any()
                    } else {
                        view! {
                            <div class="winemaker-grid">
                                {makers
                                    .into_iter()
                                    .map(|maker| view! { <WinemakerCard winemaker=maker/> })
                                    .collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }}
            </Show>
        </div>
    }
}
