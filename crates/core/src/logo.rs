//! Logo uploads become `data:` URIs the preview can reference directly.

use crate::error::StudioError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;

/// Encodes uploaded logo bytes as a `data:` URI.
///
/// The MIME type must be an `image/*` type. Raster payloads are sniffed and
/// must be a format the image decoder recognizes; SVG is passed through.
pub fn logo_data_uri(bytes: &[u8], mime: &str) -> Result<String, StudioError> {
    let mime = mime.trim().to_ascii_lowercase();
    if !mime.starts_with("image/") {
        return Err(StudioError::Logo(format!("'{}' is not an image type", mime)));
    }
    if bytes.is_empty() {
        return Err(StudioError::Logo("file is empty".to_string()));
    }
    if mime != "image/svg+xml" {
        let format = image::guess_format(bytes)
            .map_err(|e| StudioError::Logo(format!("unrecognized image data: {}", e)))?;
        log::debug!("Logo upload sniffed as {:?} ({} bytes)", format, bytes.len());
        if ImageFormat::from_mime_type(&mime).is_some_and(|declared| declared != format) {
            log::warn!("Logo declared as {} but contains {:?} data", mime, format);
        }
    }
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    #[test]
    fn png_bytes_become_data_uri() {
        let uri = logo_data_uri(PNG_MAGIC, "image/png").unwrap();
        assert!(uri.starts_with("data:image/png;base64,iVBORw0KGgo"));
    }

    #[test]
    fn svg_is_passed_through() {
        let uri = logo_data_uri(b"<svg/>", "image/svg+xml").unwrap();
        assert_eq!(uri, "data:image/svg+xml;base64,PHN2Zy8+");
    }

    #[test]
    fn rejects_non_image_mime_and_garbage() {
        assert!(matches!(logo_data_uri(PNG_MAGIC, "application/pdf"), Err(StudioError::Logo(_))));
        assert!(matches!(logo_data_uri(b"hello", "image/png"), Err(StudioError::Logo(_))));
        assert!(matches!(logo_data_uri(b"", "image/png"), Err(StudioError::Logo(_))));
    }
}
