use crate::error::RenderError;
use crate::page::PageSpec;
use placard_traits::RasterImage;
use std::fmt::Debug;

/// Builds a paginated document around a captured raster of the preview.
pub trait DocumentAssembler: Debug {
    /// Places `image` on a single page described by `page` and returns the
    /// encoded document bytes.
    fn assemble(&self, image: &RasterImage, page: &PageSpec) -> Result<Vec<u8>, RenderError>;

    /// MIME type of the produced bytes.
    fn mime_type(&self) -> &'static str;

    /// File extension without the dot.
    fn extension(&self) -> &'static str;
}
