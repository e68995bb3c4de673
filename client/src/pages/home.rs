//! Landing page: hero banner followed by the verification form.

use leptos::prelude::*;

use crate::components::verifier_form::VerifierForm;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__card">
                <div class="hero__text">
                    <h1 class="hero__headline">
                        "SEEK " <span class="hero__accent">"TRUTH"</span> " IN A" <br/> "NOISY WORLD"
                    </h1>
                    <p class="hero__tagline">"Verify News Across All Platforms, Instantly."</p>
                    <div class="hero__actions">
                        <a href="#verify" class="btn btn--primary hero__cta">"Start Verifying"</a>
                        <a href="/how-it-works" class="btn btn--ghost">"Learn how"</a>
                    </div>
                </div>
                <div class="hero__globe" aria-hidden="true">"🌐"</div>
            </div>
        </section>
        <section class="page page--narrow">
            <VerifierForm/>
        </section>
    }
}
