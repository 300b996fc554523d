use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::content::{Content, Operation};
use lopdf::{Stream, dictionary};
use placard_render_core::utils::flatten_rgba_onto_white;
use placard_render_core::{ImagePlacement, RenderError};
use placard_traits::RasterImage;
use std::io::Write;

/// Encodes a raster as a `/DeviceRGB` image XObject. Transparent pixels are
/// composited onto white since the page has no backdrop.
pub fn image_xobject(image: &RasterImage) -> Result<Stream, RenderError> {
    let rgb = flatten_rgba_onto_white(image.rgba());

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&rgb)?;
    let compressed = encoder.finish()?;

    let dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => image.width() as i64,
        "Height" => image.height() as i64,
        "ColorSpace" => "DeviceRGB",
        "BitsPerComponent" => 8,
        "Filter" => "FlateDecode",
    };
    Ok(Stream::new(dict, compressed).with_compression(false))
}

/// Content stream operations that paint the named XObject at `placement`.
pub fn placement_content(name: &str, placement: &ImagePlacement) -> Content {
    Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    placement.width.into(),
                    0.into(),
                    0.into(),
                    placement.height.into(),
                    placement.x.into(),
                    placement.y.into(),
                ],
            ),
            Operation::new("Do", vec![name.into()]),
            Operation::new("Q", vec![]),
        ],
    }
}
