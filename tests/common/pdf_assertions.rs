use lopdf::{Document as LopdfDocument, Object};

/// Width and height of a page's MediaBox, in points.
pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let page_id = *doc.get_pages().get(&page_num)?;
    let page = doc.get_dictionary(page_id).ok()?;
    let media_box = page.get(b"MediaBox").ok()?.as_array().ok()?;
    if media_box.len() < 4 {
        return None;
    }
    let width = media_box[2].as_float().ok()? - media_box[0].as_float().ok()?;
    let height = media_box[3].as_float().ok()? - media_box[1].as_float().ok()?;
    Some((width, height))
}

/// Width and height of every image XObject in the document.
pub fn image_sizes(doc: &LopdfDocument) -> Vec<(i64, i64)> {
    doc.objects
        .values()
        .filter_map(|object| match object {
            Object::Stream(stream) => Some(stream),
            _ => None,
        })
        .filter(|stream| {
            stream
                .dict
                .get(b"Subtype")
                .and_then(|v| v.as_name())
                .is_ok_and(|name| name == b"Image")
        })
        .filter_map(|stream| {
            let width = stream.dict.get(b"Width").ok()?.as_i64().ok()?;
            let height = stream.dict.get(b"Height").ok()?.as_i64().ok()?;
            Some((width, height))
        })
        .collect()
}

/// Assert the size of a page in points, within one point.
#[macro_export]
macro_rules! assert_pdf_page_size {
    ($pdf:expr, $page:expr, $width:expr, $height:expr) => {
        let dims = $crate::common::pdf_assertions::get_page_dimensions(&$pdf.doc, $page);
        assert!(dims.is_some(), "Could not get dimensions for page {}", $page);
        let (w, h) = dims.unwrap();
        assert!(
            (w - $width).abs() < 1.0,
            "Page {} width expected ~{}, got {}",
            $page,
            $width,
            w
        );
        assert!(
            (h - $height).abs() < 1.0,
            "Page {} height expected ~{}, got {}",
            $page,
            $height,
            h
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}
