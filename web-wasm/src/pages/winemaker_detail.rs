//! ワインメーカー詳細ページ（"/winemaker/:id"）

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;
use wine_catalog_common::{DetailPage, Wine, Winemaker};

use crate::api;
use crate::components::wine_grid::WineGrid;
use crate::navigation::use_navigation;

#[derive(Params, PartialEq, Clone, Debug)]
struct WinemakerParams {
    id: Option<String>,
}

#[component]
pub fn WinemakerDetail() -> impl IntoView {
    let params = use_params::<WinemakerParams>();
    let nav = use_navigation();

    let (winemaker, set_winemaker) = signal(None::<Winemaker>);
    let (wines, set_wines) = signal(Vec::<Wine>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let id = params.get().ok().and_then(|p| p.id).unwrap_or_default();
        if id.is_empty() {
            return;
        }

        set_loading.set(true);
        spawn_local(async move {
            let fetched = api::winemakers::get_winemaker_by_id(&id).await;

            if let Some(maker) = &fetched {
                // ページ表示をナビゲーション文脈に記録する
                nav.set_specific_winemaker(Some(&maker.id), Some(&maker.name));
                set_wines.set(api::wines::get_wines_by_winemaker(&maker.id).await);
            }

            set_winemaker.set(fetched);
            set_loading.set(false);
        });
    });

    view! {
        <div class="page winemaker-detail">
            {move || {
                if loading.get() {
                    return view! {
                        <div class="loading"><div class="spinner"></div></div>
                    }
                    .into_any();
                }

                match winemaker.get() {
                    None => view! {
                        <div class="not-found">
                            <h2>"Winemaker not found"</h2>
                            <a href="/winemakers" class="back-link">"Back to winemakers"</a>
                        </div>
                    }
                    .into_any(),
                    Some(maker) => {
                        let back = nav.back_link(DetailPage::Winemaker);
                        view! {
                            <a href=back.href class="back-link">{back.label}</a>

                            <div class="detail-columns">
                                <div class="detail-media">
                                    {match maker.photo_url.clone() {
                                        Some(url) => view! {
                                            <img
                                                class="detail-image"
                                                src=url
                                                alt=maker.name.clone()
                                            />
                                        }
                                        .into_any(),
                                        None => view! {
                                            <div class="detail-image-placeholder">
                                                "No image available"
                                            </div>
                                        }
                                        .into_any(),
                                    }}
                                    {maker.region.clone().map(|region| view! {
                                        <p class="detail-region">{region}</p>
                                    })}
                                </div>

                                <div class="detail-info">
                                    <h1 class="detail-title">{maker.name.clone()}</h1>
                                    {maker.bio.clone().map(|bio| view! {
                                        <section class="detail-section">
                                            <h2>"Biography"</h2>
                                            <p>{bio}</p>
                                        </section>
                                    })}

                                    <section class="detail-section">
                                        <h2>{format!("Wines by {}", maker.name)}</h2>
                                        {move || {
                                            let maker_wines = wines.get();
                                            if maker_wines.is_empty() {
                                                view! {
                                                    <p class="muted">
                                                        "No wines found for this winemaker."
                                                    </p>
                                                }
                                                .into_any()
                                            } else {
                                                view! { <WineGrid wines=maker_wines/> }
                                                    .into_any()
                                            }
                                        }}
                                    </section>
                                </div>
                            </div>
                        }
                        .into_any()
                    }
                }
            }}
        </div>
    }
}
