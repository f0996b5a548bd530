use anyhow::Result;
use notewall::domain::{EditorForm, NotePage, NoteSummary};

#[test]
fn given_summary_when_serializing_to_json_then_contains_all_fields() -> Result<()> {
    // Arrange
    let summary = NoteSummary::from_filename("reading_list", "reading_list.md");

    // Act
    let json = serde_json::to_string_pretty(&summary)?;

    // Assert
    assert!(json.contains(r#""slug": "reading_list""#));
    assert!(json.contains(r#""name": "Reading List""#));
    assert!(json.contains(r#""filename": "reading_list.md""#));
    Ok(())
}

#[test]
fn given_page_when_serializing_then_html_is_escaped_as_json_string() -> Result<()> {
    // Arrange
    let page = NotePage {
        slug: "quote".to_string(),
        title: "Quote".to_string(),
        html: "<p>\"hi\"</p>\n".to_string(),
    };

    // Act
    let json = serde_json::to_string(&page)?;

    // Assert
    assert_eq!(
        json,
        r#"{"slug":"quote","title":"Quote","html":"<p>\"hi\"</p>\n"}"#
    );
    Ok(())
}

#[test]
fn given_editor_form_when_serializing_then_uses_snake_case_fields() -> Result<()> {
    // Arrange
    let form = EditorForm {
        title: "Edit: Draft".to_string(),
        slug: "draft".to_string(),
        content: String::new(),
        is_new: true,
    };

    // Act
    let json = serde_json::to_string(&form)?;

    // Assert
    assert!(json.contains(r#""is_new":true"#));
    assert!(!json.contains(r#""isNew""#));
    Ok(())
}
