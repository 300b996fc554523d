use crate::helpers;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::{Document, Object, Stream, dictionary};
use placard_render_core::{DocumentAssembler, PageSpec, RenderError};
use placard_traits::RasterImage;
use std::io::Write;

const IMAGE_NAME: &str = "Im1";

/// Writes the captured preview onto a single page.
#[derive(Debug, Clone)]
pub struct LopdfAssembler {
    producer: String,
    title: Option<String>,
}

impl Default for LopdfAssembler {
    fn default() -> Self {
        Self {
            producer: format!("Placard {}", env!("CARGO_PKG_VERSION")),
            title: None,
        }
    }
}

impl LopdfAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl DocumentAssembler for LopdfAssembler {
    fn assemble(&self, image: &RasterImage, page: &PageSpec) -> Result<Vec<u8>, RenderError> {
        let (page_width, page_height) = page.dimensions_pt();
        let placement = page.place_image(image.width(), image.height());
        log::debug!(
            "Placing {}x{} capture at {:.1}x{:.1}pt on a {:.1}x{:.1}pt page",
            image.width(),
            image.height(),
            placement.width,
            placement.height,
            page_width,
            page_height
        );

        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();

        let image_id = document.add_object(helpers::image_xobject(image)?);
        let resources_id = document.add_object(dictionary! {
            "XObject" => dictionary! { IMAGE_NAME => image_id },
        });

        let content = helpers::placement_content(IMAGE_NAME, &placement);
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&content.encode()?)?;
        let compressed_content = encoder.finish()?;
        let content_id = document.add_object(
            Stream::new(dictionary! { "Filter" => "FlateDecode" }, compressed_content)
                .with_compression(false),
        );

        let page_id = document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), page_width.into(), page_height.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });

        document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );

        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        document.trailer.set("Root", catalog_id);

        let mut info = dictionary! { "Producer" => Object::string_literal(self.producer.as_str()) };
        if let Some(title) = &self.title {
            info.set("Title", Object::string_literal(title.as_str()));
        }
        let info_id = document.add_object(info);
        document.trailer.set("Info", info_id);

        let mut buffer = Vec::new();
        document.save_to(&mut buffer)?;
        Ok(buffer)
    }

    fn mime_type(&self) -> &'static str {
        "application/pdf"
    }

    fn extension(&self) -> &'static str {
        "pdf"
    }
}
