//! Unit tests for the bookmarklet template.

use linkkeeper_client::services::bookmarklet::{bookmarklet_code, BOOKMARKLET_LABEL};

#[test]
fn test_label_names_the_app() {
    assert_eq!(BOOKMARKLET_LABEL, "Save to LinkKeeper");
}

#[test]
fn test_code_is_deterministic_for_a_given_url() {
    let a = bookmarklet_code("https://app.example.com");
    let b = bookmarklet_code("https://app.example.com");
    assert_eq!(a, b);
}

#[test]
fn test_code_reads_page_url_title_and_description() {
    let code = bookmarklet_code("https://app.example.com");
    assert!(code.contains("window.location.href"));
    assert!(code.contains("document.title"));
    assert!(code.contains(r#"meta[name="description"]"#));
}

#[test]
fn test_code_passes_values_as_query_parameters() {
    let code = bookmarklet_code("https://app.example.com");
    assert!(code.contains("URLSearchParams"));
    assert!(code.contains("url:url"));
    assert!(code.contains("title:title"));
    assert!(code.contains("description:description"));
}

#[test]
fn test_code_opens_popup_on_the_configured_origin() {
    let code = bookmarklet_code("https://my-deployment.example.org");
    assert!(code.contains("'https://my-deployment.example.org/add-bookmark?'"));
    assert!(code.contains("window.open"));
    assert!(code.contains("width=800,height=600"));
}

#[test]
fn test_code_contains_no_raw_newlines() {
    // The whole script must fit in a single bookmark URL field
    let code = bookmarklet_code("https://app.example.com");
    assert!(!code.contains('\n'));
}
