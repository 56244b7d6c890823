//! ワイングリッドコンポーネント

use leptos::prelude::*;
use wine_catalog_common::Wine;

use super::wine_card::WineCard;

#[component]
pub fn WineGrid(wines: Vec<Wine>) -> impl IntoView {
    if wines.is_empty() {
        return view! {
            <p class="empty-message">"No wines found in the gallery."</p>
        }
        .into_any();
    }

    view! {
        <div class="wine-grid">
            {wines
                .into_iter()
                .map(|wine| view! { <WineCard wine=wine/> })
                .collect_view()}
        </div>
    }
    .into_any()
}
