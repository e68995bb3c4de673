use super::*;

#[test]
fn endpoint_with_empty_base_is_relative() {
    assert_eq!(endpoint("", VERIFY_PATH), "/api/verify");
}

#[test]
fn endpoint_trims_trailing_slashes() {
    assert_eq!(endpoint("http://localhost:5000/", VERIFY_PATH), "http://localhost:5000/api/verify");
    assert_eq!(endpoint(" http://gw:3000// ", DASHBOARD_PATH), "http://gw:3000/api/dashboard");
}

#[test]
fn field_names_match_backend_form() {
    assert_eq!(FIELD_NEWS_TEXT, "news_text");
    assert_eq!(FIELD_TARGET_LANG, "target_lang");
    assert_eq!(FIELD_FILE_UPLOAD, "file_upload");
}

#[test]
fn wire_error_formats_code() {
    let err = WireError::UnknownLanguage("xx".to_owned());
    assert_eq!(err.to_string(), "unsupported output language: xx");
}
