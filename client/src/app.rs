//! Root application component with routing and site chrome.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{site_footer::SiteFooter, site_header::SiteHeader};
use crate::net::api::ApiConfig;
use crate::pages::{
    about::AboutPage, contact::ContactPage, dashboard::DashboardPage, home::HomePage,
    how_it_works::HowItWorksPage,
};

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
/// Provides the API endpoint configuration and lays every route out between
/// the shared header and footer.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiConfig::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/veritas.css"/>
        <Title text="VERITAS"/>
        <Meta name="description" content="Verify news across all platforms, instantly."/>

        <Router>
            <div class="site">
                <SiteHeader/>
                <main class="site__main">
                    <Routes fallback=|| view! { <p class="page page--missing">"Page not found."</p> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("about") view=AboutPage/>
                        <Route path=StaticSegment("how-it-works") view=HowItWorksPage/>
                        <Route path=StaticSegment("contact") view=ContactPage/>
                        <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    </Routes>
                </main>
                <SiteFooter/>
            </div>
        </Router>
    }
}
