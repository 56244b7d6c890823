//! ワインギャラリーページ（"/"）

use leptos::prelude::*;
use leptos::task::spawn_local;
use wine_catalog_common::Wine;

use crate::api;
use crate::components::wine_grid::WineGrid;

#[component]
pub fn WineGallery() -> impl IntoView {
    let (wines, set_wines) = signal(Vec::<Wine>::new());
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        set_wines.set(api::wines::get_all_wines().await);
        set_loading.set(false);
    });

    view! {
        <div class="page wine-gallery">
            <h1 class="page-title">"The Collection"</h1>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading"><div class="spinner"></div></div> }
            >
                {move || view! { <WineGrid wines=wines.get()/> }}
            </Show>
        </div>
    }
}
