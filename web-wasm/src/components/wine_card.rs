//! ワインカードコンポーネント

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use wine_catalog_common::Wine;

use crate::navigation::use_navigation;

#[component]
pub fn WineCard(wine: Wine) -> impl IntoView {
    let nav = use_navigation();
    let navigate = StoredValue::new(use_navigate());
    let location = use_location();

    let first_image = wine.first_image().cloned();
    let vintage = wine
        .vintage_year()
        .map(str::to_string)
        .unwrap_or_else(|| "N/A".to_string());
    let owner_line = if wine.owner.is_empty() {
        wine.grape.clone()
    } else {
        format!("{}, {}", wine.owner, wine.grape)
    };

    let wine_id = wine.id.clone();
    let on_click = move |_| {
        // 遷移前に現在位置をトラッカーへ記録してから詳細へ移動する
        nav.set_previous_path(&location.pathname.get_untracked());
        navigate.with_value(|nav| {
            nav(
                &format!("/wine/{}", wine_id),
                leptos_router::NavigateOptions::default(),
            );
        });
    };

    view! {
        <div class="card wine-card" on:click=on_click>
            {first_image.map(|media| {
                view! { <img class="card-media" src=media.url alt=wine.name.clone()/> }
            })}
            <div class="card-body">
                <h3 class="card-title">{wine.name.clone()}</h3>
                <p class="card-subtitle">{owner_line}</p>
                <div class="card-meta">
                    <span class="card-type">{wine.wine_type.clone()}</span>
                    <span class="card-year">{vintage}</span>
                </div>
            </div>
        </div>
    }
}
