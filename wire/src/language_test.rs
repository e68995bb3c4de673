use super::*;

#[test]
fn default_is_auto() {
    assert_eq!(Language::default(), Language::Auto);
    assert_eq!(Language::default().code(), "auto");
}

#[test]
fn all_codes_parse_back_to_same_language() {
    for lang in Language::ALL {
        assert_eq!(lang.code().parse::<Language>(), Ok(lang), "code {}", lang.code());
    }
}

#[test]
fn menu_order_matches_supported_set() {
    let codes: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
    assert_eq!(codes, ["auto", "en", "hi", "gu", "bn", "mr", "ta", "te", "pa", "kn"]);
}

#[test]
fn parse_is_case_insensitive_and_trims() {
    assert_eq!(" HI ".parse::<Language>(), Ok(Language::Hi));
}

#[test]
fn parse_rejects_unknown_code() {
    assert_eq!("fr".parse::<Language>(), Err(WireError::UnknownLanguage("fr".to_owned())));
    assert!("".parse::<Language>().is_err());
}

#[test]
fn serde_uses_wire_codes() {
    assert_eq!(serde_json::to_string(&Language::Ta).expect("serialize"), "\"ta\"");
    let lang: Language = serde_json::from_str("\"kn\"").expect("deserialize");
    assert_eq!(lang, Language::Kn);
}

#[test]
fn labels_carry_english_names() {
    assert_eq!(Language::Auto.label(), "Auto");
    assert_eq!(Language::En.label(), "English");
    assert!(Language::Gu.label().ends_with("(Gujarati)"));
    assert_eq!(Language::Pa.to_string(), "pa");
}
