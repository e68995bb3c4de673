//! Site footer.

use leptos::prelude::*;

const SOCIAL_LINKS: [(&str, &str); 3] = [("Twitter", "𝕏"), ("Facebook", "f"), ("LinkedIn", "in")];

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p class="site-footer__copy">"© 2024 VERITAS. All news reserved."</p>
            <div class="site-footer__social">
                {SOCIAL_LINKS
                    .into_iter()
                    .map(|(name, glyph)| {
                        view! {
                            <a class="site-footer__icon" href="#" title=name aria-label=name>
                                {glyph}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </footer>
    }
}
