//! Result panel for a completed verification.

#[cfg(test)]
#[path = "verdict_panel_test.rs"]
mod verdict_panel_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use wire::{Verdict, VerdictTone, VerificationResult};

/// Renders the verdict block for a success, only the message for a
/// failure, and nothing while there is no completed result.
#[component]
pub fn VerdictPanel(#[prop(into)] result: Signal<Option<VerificationResult>>) -> impl IntoView {
    move || {
        result.get().map(|result| match result {
            VerificationResult::Success(verdict) => verdict_view(verdict).into_any(),
            VerificationResult::Failure { message } => view! {
                <div class="verdict verdict--failure">
                    <p class="verdict__error" role="alert">{message}</p>
                </div>
            }
            .into_any(),
        })
    }
}

fn verdict_view(verdict: Verdict) -> impl IntoView {
    let class = format!("verdict verdict--{}", VerdictTone::of(&verdict.verdict).modifier());
    view! {
        <div class=class>
            <h2 class="verdict__title">"🎯 Verdict: " {verdict.verdict}</h2>
            <p class="verdict__analysis">{verdict.analysis}</p>
            <p class="verdict__evidence">{verdict.evidence}</p>
            {verdict
                .extracted_text
                .map(|text| view! { <p class="verdict__extracted">"📝 Extracted Text: " {text}</p> })}
        </div>
    }
}
