#![cfg(feature = "ssr")]

use super::*;
use leptos::tachys::view::RenderHtml;

fn render() -> String {
    let owner = Owner::new();
    owner.with(|| view! { <VerifierForm/> }.to_html())
}

#[test]
fn idle_form_offers_every_language_and_an_enabled_button() {
    let html = render();
    assert!(html.contains("Check News"));
    assert!(!html.contains("Checking..."));
    assert!(html.contains(r#"aria-busy="false""#));
    for lang in Language::ALL {
        assert!(html.contains(&format!(r#"value="{}""#, lang.code())), "missing option {lang}");
        assert!(html.contains(lang.label()));
    }
}

#[test]
fn idle_form_renders_no_result() {
    let html = render();
    assert!(!html.contains("verdict"));
}
