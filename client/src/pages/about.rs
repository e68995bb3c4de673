//! About page describing the product.

use leptos::prelude::*;

/// Feature cards as `(icon, title, description)`.
const FEATURES: [(&str, &str, &str); 3] = [
    ("⚡", "Fast Verification", "Instantly analyze news across text, images, audio, and more."),
    ("🌐", "Local Language Support", "Verify news in your own language with AI-powered translations."),
    ("🔒", "Trusted Sources", "Results are backed by verified and reliable information sources."),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page">
            <h1 class="page__title">"About This Project"</h1>
            <p class="page__lead">
                <strong>"Multi-Media News Verifier"</strong>
                " is an AI-powered platform that helps you quickly check whether news is fake or real. "
                "It supports multiple languages, making verification accessible to everyone, and ensures "
                "results are backed by trusted sources."
            </p>
            <div class="card-grid">
                {FEATURES
                    .into_iter()
                    .map(|(icon, title, desc)| {
                        view! {
                            <div class="card">
                                <div class="card__icon" aria-hidden="true">{icon}</div>
                                <h3 class="card__title">{title}</h3>
                                <p class="card__body">{desc}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
