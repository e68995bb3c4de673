//! Site header with brand mark and primary navigation.

use leptos::prelude::*;
use leptos_router::components::A;

/// Primary navigation entries as `(label, path)`.
pub const NAV_LINKS: [(&str, &str); 4] =
    [("Home", "/"), ("About", "/about"), ("How It Works", "/how-it-works"), ("Contact", "/contact")];

/// Header bar. The router marks the active link with `aria-current="page"`.
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <a href="/" class="site-header__brand">
                    <span class="site-header__mark" aria-hidden="true">"✓"</span>
                    <span class="site-header__name">"VERITAS"</span>
                </a>
                <nav class="site-header__nav">
                    <ul>
                        {NAV_LINKS
                            .into_iter()
                            .map(|(label, path)| {
                                view! {
                                    <li>
                                        <A href=path exact=true>{label}</A>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
            </div>
        </header>
    }
}
