//! The page skeleton the preview lives in.
//!
//! Element ids and classes match the stylesheet in `assets/preview.css` and
//! the markup a browser host mirrors.

use placard_dom::{Document, Element, Selector};

pub const PREVIEW_STYLESHEET: &str = include_str!("../assets/preview.css");

pub const PREVIEW_CLASS: &str = "announcement-preview";
pub const LOGO_ID: &str = "announcementLogo";
pub const NOTICE_TYPE_ID: &str = "noticeType";
pub const TITLE_ID: &str = "announcementTitle";
pub const DATE_ID: &str = "announcementDate";
pub const CONTENT_ID: &str = "announcementContent";
pub const SIGNER_NAME_ID: &str = "signerName";
pub const SIGNER_TITLE_ID: &str = "signerTitle";
pub const CONTACT_INFO_ID: &str = "contactInfo";
pub const TOAST_ID: &str = "toast";
pub const LOADING_CLASS: &str = "loading";
pub const DEBUG_CLASS: &str = "debug-info";
pub const HIDDEN_CLASS: &str = "hidden";
pub const ASSAMESE_CLASS: &str = "assamese-text";
pub const HAS_IMAGE_CLASS: &str = "has-image";

/// Text shown while a field is empty.
pub mod placeholder {
    pub const TITLE: &str = "Announcement Title";
    pub const CONTENT: &str = "Your announcement content will appear here.";
    pub const SIGNER_NAME: &str = "Signer Name";
    pub const SIGNER_TITLE: &str = "Signer Title";
    pub const CONTACT_INFO: &str = "Contact Information";
}

pub fn preview_selector() -> Selector {
    Selector::class(PREVIEW_CLASS)
}

/// Builds a fresh page: the preview card, the loading overlay and the toast.
pub fn build_page() -> Document {
    let header = Element::new("div")
        .with_class("announcement-header")
        .with_child(
            Element::new("div")
                .with_id(LOGO_ID)
                .with_class("announcement-logo")
                .with_text("PA"),
        )
        .with_child(
            Element::new("div")
                .with_id(NOTICE_TYPE_ID)
                .with_class("notice-type")
                .with_text("STANDARD"),
        );

    let footer = Element::new("div")
        .with_class("announcement-footer")
        .with_child(
            Element::new("div")
                .with_class("signature")
                .with_child(
                    Element::new("div")
                        .with_id(SIGNER_NAME_ID)
                        .with_class("signer-name")
                        .with_text(placeholder::SIGNER_NAME),
                )
                .with_child(
                    Element::new("div")
                        .with_id(SIGNER_TITLE_ID)
                        .with_class("signer-title")
                        .with_text(placeholder::SIGNER_TITLE),
                ),
        )
        .with_child(
            Element::new("div")
                .with_id(CONTACT_INFO_ID)
                .with_class("contact-info")
                .with_text(placeholder::CONTACT_INFO),
        );

    let preview = Element::new("div")
        .with_class(PREVIEW_CLASS)
        .with_child(header)
        .with_child(
            Element::new("h1")
                .with_id(TITLE_ID)
                .with_class("announcement-title")
                .with_text(placeholder::TITLE),
        )
        .with_child(Element::new("div").with_id(DATE_ID).with_class("announcement-date"))
        .with_child(
            Element::new("div")
                .with_id(CONTENT_ID)
                .with_class("announcement-content")
                .with_child(Element::new("p").with_text(placeholder::CONTENT)),
        )
        .with_child(footer);

    let body = Element::new("body")
        .with_child(Element::new("div").with_class("preview-container").with_child(preview))
        .with_child(
            Element::new("div")
                .with_class(LOADING_CLASS)
                .with_class(HIDDEN_CLASS)
                .with_child(Element::new("div").with_class("loading-spinner")),
        )
        .with_child(Element::new("div").with_id(TOAST_ID).with_class("toast"));

    Document::new("Announcement Generator", body).with_stylesheet(PREVIEW_STYLESHEET)
}
