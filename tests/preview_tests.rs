mod common;

use common::{TestResult, TestStudio};
use placard::dom::Selector;
use placard::page::{CONTENT_ID, DATE_ID, LOGO_ID, NOTICE_TYPE_ID, TITLE_ID};
use placard::render::paragraph_texts;
use placard::{Field, Language};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn content_children(t: &TestStudio) -> Vec<String> {
    let content = t.studio.page().element_by_id(CONTENT_ID).unwrap();
    content.child_elements().map(|c| c.tag.clone()).collect()
}

#[test]
fn two_paragraphs_become_two_p_elements() -> TestResult {
    init_logger();
    let mut t = TestStudio::new()?;
    t.studio.set_field(Field::Content, "First line\nsecond line\n\nSecond paragraph")?;

    assert_eq!(content_children(&t), vec!["p", "p"]);
    let content = t.studio.page().element_by_id(CONTENT_ID).unwrap();
    assert_eq!(
        content.inner_html(),
        "<p>First line<br>second line</p><p>Second paragraph</p>"
    );
    Ok(())
}

#[test]
fn restructuring_layouts_round_trip_paragraph_text() -> TestResult {
    init_logger();
    let mut t = TestStudio::new()?;
    t.studio.set_field(Field::Content, "Alpha\n\nBeta\nGamma\n\nDelta")?;
    let plain = paragraph_texts(t.studio.page().element_by_id(CONTENT_ID).unwrap());

    t.studio.select_layout("grid")?;
    assert_eq!(content_children(&t), vec!["div", "div", "div"]);
    t.studio.select_layout("magazine")?;
    assert_eq!(content_children(&t), vec!["div", "div"]);
    t.studio.select_layout("default")?;

    assert_eq!(
        paragraph_texts(t.studio.page().element_by_id(CONTENT_ID).unwrap()),
        plain
    );
    assert_eq!(content_children(&t), vec!["p", "p", "p"]);
    Ok(())
}

#[test]
fn neon_then_standard_leaves_no_trace() -> TestResult {
    init_logger();
    let mut t = TestStudio::new()?;
    t.studio.select_template("neon")?;
    let preview = t.studio.preview()?;
    assert!(preview.has_class("template-neon"));
    assert!(preview.find(&Selector::class("neon-border")).is_some());

    t.studio.select_template("standard")?;
    let preview = t.studio.preview()?;
    assert!(!preview.classes().iter().any(|c| c.contains("neon")));
    assert!(preview.find(&Selector::class("effect-overlay")).is_none());
    assert!(!preview.style.contains("animation"));
    assert!(!preview.style.contains("box-shadow"));
    assert_eq!(preview.style.get("--template-primary"), Some("#2a3b4c"));
    Ok(())
}

#[test]
fn unknown_template_in_document_falls_back_to_standard() -> TestResult {
    init_logger();
    let mut t = TestStudio::new()?;
    t.studio.select_template("formal")?;
    t.studio.import_json(r#"{"template": "no-such-template"}"#)?;
    assert_eq!(t.studio.form().template, "standard");
    assert!(t.studio.preview()?.has_class("template-standard"));
    Ok(())
}

#[test]
fn theme_sets_root_variables() -> TestResult {
    init_logger();
    let mut t = TestStudio::new()?;
    t.studio.apply_theme("navy-gold")?;
    let root = &t.studio.page().root_style;
    assert_eq!(root.get("--secondary-color"), Some("#b4975a"));
    assert_eq!(root.get("--secondary-color-rgb"), Some("180, 151, 90"));
    Ok(())
}

#[test]
fn preset_fills_fields_and_label() -> TestResult {
    init_logger();
    let mut t = TestStudio::new()?;
    t.studio.load_preset("meeting")?;
    let page = t.studio.page();
    assert_eq!(page.element_by_id(TITLE_ID).unwrap().text_content(), "Meeting Notice");
    assert_eq!(page.element_by_id(NOTICE_TYPE_ID).unwrap().text_content(), "MEETING");
    assert_eq!(t.studio.form().template, "formal");
    Ok(())
}

#[test]
fn assamese_date_and_class() -> TestResult {
    init_logger();
    let mut t = TestStudio::new()?;
    t.studio.set_language(Language::Assamese)?;
    let page = t.studio.page();
    assert_eq!(page.element_by_id(DATE_ID).unwrap().text_content(), "Date: ১৭ অক্টোবৰ, ২০২৬");
    assert!(page.element_by_id(TITLE_ID).unwrap().has_class("assamese-text"));
    Ok(())
}

#[test]
fn logo_upload_and_reset() -> TestResult {
    init_logger();
    let mut t = TestStudio::new()?;
    t.studio.upload_logo(b"GIF89a\x01\x00\x01\x00\x00\x00\x00;", "image/gif")?;
    let logo = t.studio.page().element_by_id(LOGO_ID).unwrap();
    assert!(logo.has_class("has-image"));
    assert!(t.studio.state().logo_loaded);
    assert!(t.studio.upload_logo(b"%PDF-1.7", "application/pdf").is_err());

    t.studio.set_field(Field::Title, "Temporary")?;
    t.studio.reset()?;
    let page = t.studio.page();
    assert_eq!(page.element_by_id(LOGO_ID).unwrap().text_content(), "PA");
    assert_eq!(page.element_by_id(TITLE_ID).unwrap().text_content(), "Announcement Title");
    assert!(!t.studio.state().logo_loaded);
    Ok(())
}
