//! ワインメーカーカードコンポーネント

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use wine_catalog_common::Winemaker;

use crate::navigation::use_navigation;

#[component]
pub fn WinemakerCard(winemaker: Winemaker) -> impl IntoView {
    let nav = use_navigation();
    let navigate = StoredValue::new(use_navigate());
    let location = use_location();

    // 長い経歴はカードでは先頭だけ見せる
    let bio_preview = winemaker.bio.as_deref().map(|bio| {
        if bio.chars().count() > 140 {
            let cut: String = bio.chars().take(140).collect();
            format!("{}...", cut.trim_end())
        } else {
            bio.to_string()
        }
    });

    let maker_id = winemaker.id.clone();
    let on_click = move |_| {
        nav.set_previous_path(&location.pathname.get_untracked());
        navigate.with_value(|nav| {
            nav(
                &format!("/winemaker/{}", maker_id),
                leptos_router::NavigateOptions::default(),
            );
        });
    };

    view! {
        <div class="card winemaker-card" on:click=on_click>
            {winemaker.photo_url.clone().map(|url| {
                view! { <img class="card-media" src=url alt=winemaker.name.clone()/> }
            })}
            <div class="card-body">
                <h3 class="card-title">{winemaker.name.clone()}</h3>
                {bio_preview.map(|bio| view! { <p class="card-subtitle">{bio}</p> })}
            </div>
        </div>
    }
}
