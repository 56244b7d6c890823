//! ワイン詳細ページ（"/wine/:id"）
//!
//! 読み込み完了後にトラッカーへ「最後に表示したワイン」を記録し、
//! 戻りリンクは決定表から引く。

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;
use wine_catalog_common::{DetailPage, Place, Wine, Winemaker};

use crate::api;
use crate::navigation::use_navigation;

#[derive(Params, PartialEq, Clone, Debug)]
struct WineParams {
    id: Option<String>,
}

#[component]
pub fn WineDetail() -> impl IntoView {
    let params = use_params::<WineParams>();
    let nav = use_navigation();

    let (wine, set_wine) = signal(None::<Wine>);
    let (winemaker, set_winemaker) = signal(None::<Winemaker>);
    let (place, set_place) = signal(None::<Place>);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let id = params.get().ok().and_then(|p| p.id).unwrap_or_default();
        if id.is_empty() {
            return;
        }

        set_loading.set(true);
        spawn_local(async move {
            let fetched = api::wines::get_wine_by_id(&id).await;

            if let Some(w) = &fetched {
                // ページ表示をナビゲーション文脈に記録する
                nav.set_specific_wine(Some(&w.id), Some(&w.name));

                if let Some(maker_id) = w.winemaker_id.as_deref() {
                    set_winemaker.set(api::winemakers::get_winemaker_by_id(maker_id).await);
                } else {
                    set_winemaker.set(None);
                }
                if let Some(place_id) = w.place_id.as_deref() {
                    set_place.set(api::wines::get_wine_place(place_id).await);
                } else {
                    set_place.set(None);
                }
            }

            set_wine.set(fetched);
            set_loading.set(false);
        });
    });

    view! {
        <div class="page wine-detail">
            {move || {
                if loading.get() {
                    return view! {
                        <div class="loading"><div class="spinner"></div></div>
                    }
                    .into_any();
                }

                match wine.get() {
                    None => view! {
                        <div class="not-found">
                            <h2>"Wine not found"</h2>
                            <a href="/" class="back-link">"Back to collection"</a>
                        </div>
                    }
                    .into_any(),
                    Some(w) => {
                        let back = nav.back_link(DetailPage::Wine);
                        view! {
                            <a href=back.href class="back-link">{back.label}</a>
                            <WineDetailBody wine=w winemaker=winemaker place=place/>
                        }
                        .into_any()
                    }
                }
            }}
        </div>
    }
}

#[component]
fn WineDetailBody(
    wine: Wine,
    winemaker: ReadSignal<Option<Winemaker>>,
    place: ReadSignal<Option<Place>>,
) -> impl IntoView {
    let main_image = wine.first_image().cloned();
    let additional_images: Vec<_> = wine
        .wine_media
        .iter()
        .filter(|m| m.is_image())
        .skip(1)
        .take(3)
        .cloned()
        .collect();
    let vintage = wine
        .vintage_year()
        .map(str::to_string)
        .unwrap_or_else(|| "Year not specified".to_string());

    view! {
        <div class="detail-columns">
            <div class="detail-media">
                {match main_image {
                    Some(media) => view! {
                        <img class="detail-image" src=media.url alt=wine.name.clone()/>
                    }
                    .into_any(),
                    None => view! {
                        <div class="detail-image-placeholder">"No image available"</div>
                    }
                    .into_any(),
                }}
                {(!additional_images.is_empty())
                    .then(|| view! {
                        <div class="thumbnail-row">
                            {additional_images
                                .into_iter()
                                .map(|media| view! {
                                    <img class="thumbnail" src=media.url alt=wine.name.clone()/>
                                })
                                .collect_view()}
                        </div>
                    })}
            </div>

            <div class="detail-info">
                <h1 class="detail-title">{wine.name.clone()}</h1>
                <p class="detail-owner">{wine.owner.clone()}</p>

                <ul class="detail-facts">
                    <li>
                        {move || place
                            .get()
                            .map(|p| p.region)
                            .unwrap_or_else(|| "Region not specified".to_string())}
                    </li>
                    <li>{vintage}</li>
                    <li>{wine.wine_type.clone()}</li>
                    <li>
                        {move || winemaker.get().map(|m| m.name).unwrap_or_default()}
                    </li>
                </ul>

                {wine.story.clone().map(|story| view! {
                    <section class="detail-section">
                        <h2>"The Story"</h2>
                        <p>{story}</p>
                    </section>
                })}
                {wine.production.clone().map(|production| view! {
                    <section class="detail-section">
                        <h2>"Production Process"</h2>
                        <p>{production}</p>
                    </section>
                })}
                {wine.tasting_notes.clone().map(|notes| view! {
                    <section class="detail-section">
                        <h2>"Tasting Notes"</h2>
                        <p>{notes}</p>
                    </section>
                })}
            </div>
        </div>

        <div class="detail-extra">
            <section class="detail-section">
                <h2>"About the Winemaker"</h2>
                {move || match winemaker.get() {
                    Some(maker) => view! {
                        <h3>{maker.name.clone()}</h3>
                        <p>
                            {maker.bio.clone().unwrap_or_else(|| format!(
                                "{} is a dedicated winemaker committed to producing \
                                 exceptional wines that reflect the unique terroir \
                                 of the region.",
                                maker.name
                            ))}
                        </p>
                        <a href=format!("/winemaker/{}", maker.id) class="profile-link">
                            {format!("View {}'s profile", maker.name)}
                        </a>
                    }
                    .into_any(),
                    None => view! {
                        <p class="muted">"No winemaker information available."</p>
                    }
                    .into_any(),
                }}
            </section>

            <section class="detail-section">
                <h2>"Region"</h2>
                {move || match place.get() {
                    Some(p) => view! {
                        <h3>{format!("{}, {}", p.region, p.country)}</h3>
                        <p>
                            {p.story.clone().unwrap_or_else(|| format!(
                                "The {} wine region is renowned for its distinctive \
                                 terroir, which contributes to the unique character \
                                 of the wines produced there.",
                                p.region
                            ))}
                        </p>
                    }
                    .into_any(),
                    None => view! {
                        <p class="muted">"No region information available."</p>
                    }
                    .into_any(),
                }}
            </section>
        </div>
    }
}
