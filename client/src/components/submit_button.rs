//! Submit control of the verification form.

#[cfg(test)]
#[path = "submit_button_test.rs"]
mod submit_button_test;

use leptos::prelude::*;

use crate::state::verify::submit_label;

/// Disabled and relabelled while a request is outstanding.
#[component]
pub fn SubmitButton(#[prop(into)] busy: Signal<bool>) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="btn btn--primary verifier__submit"
            disabled=move || busy.get()
            aria-busy=move || if busy.get() { "true" } else { "false" }
        >
            {move || submit_label(busy.get())}
        </button>
    }
}
