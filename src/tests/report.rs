use super::Report;
use crate::section::Section;

#[test]
fn test_display_lists_titled_sections() {
    let report = Report::new(
        vec![Section::titled("A", 2), Section::titled("B", 1)],
        4,
    );

    assert_eq!(
        report.to_string(),
        "Count of words\nA: 2 words\nB: 1 words\n(Total 3 words, 4 code lines)"
    );
}

#[test]
fn test_display_hides_untitled_section() {
    let report = Report::new(vec![Section::untitled(4)], 0);

    assert_eq!(
        report.to_string(),
        "Count of words\n(Total 4 words, 0 code lines)"
    );
}

#[test]
fn test_json_shape() {
    let report = Report::new(vec![Section::titled("Intro", 7)], 2);

    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["total_words"], 7);
    assert_eq!(value["code_lines"], 2);
    assert_eq!(value["sections"][0]["title"], "Intro");
    assert_eq!(value["sections"][0]["word_count"], 7);
}

#[test]
fn test_untitled_serialises_null_title() {
    let report = Report::new(vec![Section::untitled(0)], 0);

    let value = serde_json::to_value(&report).unwrap();

    assert!(value["sections"][0]["title"].is_null());
}
