//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::header::Header;
use crate::navigation::NavigationProvider;
use crate::pages::{
    contact::Contact, wine_detail::WineDetail, wine_gallery::WineGallery,
    wine_not_found::WineNotFound, winemaker_detail::WinemakerDetail, winemakers::Winemakers,
};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Header/>
            <NavigationProvider>
                <main class="content">
                    <Routes fallback=|| view! {
                        <div class="page not-found">
                            <h1>"Page not found"</h1>
                            <a href="/" class="back-link">"Back to collection"</a>
                        </div>
                    }>
                        <Route path=path!("/") view=WineGallery/>
                        <Route path=path!("/wine/:id") view=WineDetail/>
                        <Route path=path!("/wine-not-found") view=WineNotFound/>
                        <Route path=path!("/winemakers") view=Winemakers/>
                        <Route path=path!("/winemaker/:id") view=WinemakerDetail/>
                        <Route path=path!("/about") view=Contact/>
                    </Routes>
                </main>
            </NavigationProvider>
        </Router>
    }
}
