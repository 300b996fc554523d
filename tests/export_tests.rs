mod common;

use common::pdf_assertions::image_sizes;
use common::{GeneratedPdf, TestResult, TestStudio};
use placard::dom::Selector;
use placard::export::decode_image;
use placard::page::{DEBUG_CLASS, HIDDEN_CLASS, LOADING_CLASS, preview_selector};
use placard::render_core::PageSpec;
use placard::style::{Orientation, PageSize};
use placard::traits::{RasterImage, StaticRasterizer, ToastKind};
use placard::{ExportError, ExportKind, StudioConfig, StudioError};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn debug_config() -> StudioConfig {
    StudioConfig {
        debug: true,
        ..StudioConfig::default()
    }
}

fn loading_hidden(t: &TestStudio) -> bool {
    t.studio
        .page()
        .query(&Selector::class(LOADING_CLASS))
        .is_some_and(|el| el.has_class(HIDDEN_CLASS))
}

#[test]
fn png_export_hides_debug_overlay_during_capture() -> TestResult {
    init_logger();
    let mut t = TestStudio::with_config(debug_config())?;
    let download = t.studio.export_png()?;

    assert_eq!(download.filename, "announcement-2026-10-17.png");
    let captured = t.rasterizer.captured();
    assert_eq!(captured.len(), 1);
    let overlay = captured[0].find(&Selector::class(DEBUG_CLASS)).unwrap();
    assert_eq!(overlay.style.get("display"), Some("none"));

    let live = t.studio.page().query(&Selector::class(DEBUG_CLASS)).unwrap();
    assert_eq!(live.style.get("display"), None);
    assert!(loading_hidden(&t));

    let image = decode_image(&download.bytes)?;
    assert_eq!((image.width(), image.height()), (300, 400));
    Ok(())
}

#[test]
fn pdf_has_one_a4_page_with_the_capture() -> TestResult {
    init_logger();
    let mut t = TestStudio::new()?;
    let download = t.studio.export_pdf()?;
    assert_eq!(download.filename, "announcement-2026-10-17.pdf");
    assert_eq!(download.mime, "application/pdf");

    let pdf = GeneratedPdf::from_bytes(download.bytes)?;
    assert_pdf_page_count!(pdf, 1);
    assert_pdf_page_size!(pdf, 1, 595.28, 841.89);
    assert_eq!(image_sizes(&pdf.doc), vec![(300, 400)]);
    assert_eq!(t.last_toast(), "PDF downloaded successfully!");
    Ok(())
}

#[test]
fn pdf_follows_configured_page() -> TestResult {
    init_logger();
    let config = StudioConfig {
        page: PageSpec::new(PageSize::Legal, Orientation::Portrait),
        filename_prefix: "notice".to_string(),
        ..StudioConfig::default()
    };
    let mut t = TestStudio::with_config(config)?;
    let download = t.studio.export_pdf()?;
    assert_eq!(download.filename, "notice-2026-10-17.pdf");
    let pdf = GeneratedPdf::from_bytes(download.bytes)?;
    assert_pdf_page_size!(pdf, 1, 612.0, 1008.0);
    Ok(())
}

#[test]
fn failed_capture_restores_overlays_and_reports() -> TestResult {
    init_logger();
    let rasterizer = StaticRasterizer::failing("tainted canvas");
    let mut t = TestStudio::with_rasterizer(debug_config(), rasterizer)?;
    let err = t.studio.export_png().unwrap_err();
    assert!(matches!(err, StudioError::Export(ExportError::Capture(_))));

    let toast = t.notifier.last().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "Error generating image. Please try again.");
    let overlay = t.studio.page().query(&Selector::class(DEBUG_CLASS)).unwrap();
    assert_eq!(overlay.style.get("display"), None);
    assert!(loading_hidden(&t));
    assert!(!t.studio.is_exporting());
    assert!(t.downloads.is_empty());
    Ok(())
}

#[test]
fn missing_preview_is_a_handled_error() -> TestResult {
    init_logger();
    let mut t = TestStudio::new()?;
    t.studio.page_mut().body.remove_matching(&preview_selector());

    let err = t.studio.export_png().unwrap_err();
    assert!(matches!(err, StudioError::Export(ExportError::MissingElement(_))));
    assert!(loading_hidden(&t));
    assert!(!t.studio.is_exporting());
    assert_eq!(t.last_toast(), "Error generating image. Please try again.");
    Ok(())
}

#[test]
fn second_export_is_busy_while_capture_pending() -> TestResult {
    init_logger();
    let mut t = TestStudio::new()?;
    let ticket = t.studio.begin_capture(ExportKind::Png)?;
    assert!(!loading_hidden(&t));

    let err = t.studio.export_pdf().unwrap_err();
    assert!(err.is_busy());
    assert!(t.downloads.is_empty());

    let image = RasterImage::filled(8, 8, [255, 0, 0, 255])?;
    t.studio.complete_capture(ticket, image)?;
    assert!(loading_hidden(&t));
    assert_eq!(t.downloads.len(), 1);
    t.studio.export_pdf()?;
    assert_eq!(t.downloads.len(), 2);
    Ok(())
}

#[test]
fn json_export_is_pretty_and_dated() -> TestResult {
    init_logger();
    let mut t = TestStudio::new()?;
    let download = t.studio.export_json()?;
    assert_eq!(download.filename, "announcement-2026-10-17.json");
    let text = String::from_utf8(download.bytes)?;
    let value: serde_json::Value = serde_json::from_str(&text)?;
    assert_eq!(value["exportDate"], "2026-10-17T12:00:00.000Z");
    assert_eq!(value["template"], "standard");
    assert!(text.contains("\n  \"layout\": \"default\""));
    assert_eq!(t.last_toast(), "Announcement data saved successfully!");
    Ok(())
}

#[test]
fn print_opens_document_without_debug_overlay() -> TestResult {
    init_logger();
    let mut t = TestStudio::with_config(debug_config())?;
    t.studio.print()?;
    let opened = t.print_target.opened();
    assert_eq!(opened.len(), 1);
    assert!(opened[0].contains("announcement-preview"));
    assert!(!opened[0].contains("Template: standard | Layout: default"));
    assert!(opened[0].contains("window.print()"));
    Ok(())
}
