//! ワイン未発見ページ（"/wine-not-found"）

use leptos::prelude::*;

#[component]
pub fn WineNotFound() -> impl IntoView {
    view! {
        <div class="page not-found">
            <h1>"Wine not found"</h1>
            <p class="muted">"The wine you are looking for is not in the collection."</p>
            <a href="/" class="back-link">"Back to collection"</a>
        </div>
    }
}
