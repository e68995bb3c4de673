//! Verification request form: text, file and output language in, verdict out.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form owns its draft and request lifecycle (`VerifyState`) for its
//! whole lifetime; nothing is shared through context except the API base
//! URL. The browser `File` handle lives next to the state in a local
//! `StoredValue` because it is not `Send`; the state keeps only its
//! metadata.

#[cfg(test)]
#[path = "verifier_form_test.rs"]
mod verifier_form_test;

use leptos::prelude::*;
use wire::{ACCEPTED_UPLOADS, Language};

use crate::components::submit_button::SubmitButton;
use crate::components::verdict_panel::VerdictPanel;
use crate::net::api::ApiConfig;
use crate::state::verify::{SelectedFile, VerifyState};

/// The "Check News" form with its result panel.
#[component]
pub fn VerifierForm() -> impl IntoView {
    let api = use_context::<ApiConfig>().unwrap_or_default();
    let state = RwSignal::new(VerifyState::default());
    #[cfg(feature = "hydrate")]
    let upload = StoredValue::new_local(None::<web_sys::File>);

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let file = event_target::<web_sys::HtmlInputElement>(&ev)
                .files()
                .and_then(|files| files.get(0));
            state.update(|s| s.draft.file = file.as_ref().map(selected_file));
            upload.set_value(file);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // The disabled button is the visible guard; this one also covers
        // programmatic submits while a request is outstanding.
        let Some(ticket) = state.try_update(VerifyState::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let request = state.with_untracked(|s| s.draft.to_request(upload.get_value()));
            let url = api.verify_url();
            log::info!("submitting verification request to {url}");
            leptos::task::spawn_local(async move {
                let result = crate::net::api::submit_verification(&url, request).await;
                state.update(|s| {
                    if !s.complete(ticket, result) {
                        log::debug!("dropped completion for superseded submission");
                    }
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ticket, &api);
    };

    let on_lang_change = move |ev: leptos::ev::Event| {
        if let Ok(lang) = event_target_value(&ev).parse::<Language>() {
            state.update(|s| s.draft.target_lang = lang);
        }
    };

    view! {
        <div class="verifier" id="verify">
            <h1 class="verifier__title">"📰 Multi-Media News Verifier"</h1>
            <form class="verifier__form" on:submit=on_submit>
                <textarea
                    class="verifier__text"
                    placeholder="Type or paste forward messages here..."
                    prop:value=move || state.with(|s| s.draft.news_text.clone())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        state.update(|s| s.draft.news_text = text);
                    }
                ></textarea>

                <div class="verifier__field">
                    <label class="verifier__label" for="verifier-file">"Upload file:"</label>
                    <input id="verifier-file" type="file" accept=ACCEPTED_UPLOADS on:change=on_file_change/>
                    <Show when=move || state.with(|s| s.draft.file.is_some())>
                        <p class="verifier__file">
                            {move || state.with(|s| s.draft.file.as_ref().map(SelectedFile::summary).unwrap_or_default())}
                        </p>
                    </Show>
                </div>

                <div class="verifier__field verifier__field--inline">
                    <label class="verifier__label" for="verifier-lang">"Output language:"</label>
                    <select id="verifier-lang" class="verifier__select" on:change=on_lang_change>
                        {Language::ALL
                            .into_iter()
                            .map(|lang| {
                                view! {
                                    <option
                                        value=lang.code()
                                        selected=move || state.with(|s| s.draft.target_lang == lang)
                                    >
                                        {lang.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <SubmitButton busy=Signal::derive(move || state.with(VerifyState::is_busy))/>
            </form>

            <VerdictPanel result=Signal::derive(move || state.with(|s| s.shown_result().cloned()))/>
        </div>
    }
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn selected_file(file: &web_sys::File) -> SelectedFile {
    SelectedFile { name: file.name(), media_type: file.type_(), size: file.size() as u64 }
}
