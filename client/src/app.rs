//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{
    auth_modals::AuthModals, basket_modal::BasketModal, navbar::Navbar, toast::Toast, user_menu::InfoModal,
};
use crate::pages::{
    about::AboutPage,
    contact::ContactPage,
    home::HomePage,
    menu::MenuPage,
    payment::PaymentPage,
    service::{CollectionPage, DeliveryPage},
};
use crate::state::{shop::ShopState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the single [`ShopState`] controller for the page view and hands it to
/// children through context. Browser state is loaded after hydration so the
/// first client render matches the server's.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let shop = RwSignal::new(ShopState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(shop);
    provide_context(ui);

    // Effects only run in the browser, after hydration.
    Effect::new(move || shop.update(|s| s.hydrate()));

    let theme = Memo::new(move |_| shop.with(|s| s.theme));
    Effect::new(move || crate::util::theme::apply(theme.get()));

    view! {
        <Stylesheet id="leptos" href="/pkg/ichiraku.css"/>
        <Title text="Ichiraku Ramen"/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("menu") view=MenuPage/>
                    <Route path=StaticSegment("delivery") view=DeliveryPage/>
                    <Route path=StaticSegment("collection") view=CollectionPage/>
                    <Route path=StaticSegment("payment") view=PaymentPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </main>
            <BasketModal/>
            <AuthModals/>
            <InfoModal/>
            <Toast/>
        </Router>
    }
}
