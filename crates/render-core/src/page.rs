use placard_style::{Orientation, PageSize};
use serde::{Deserialize, Serialize};

/// Output page size and orientation for paginated exports.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageSpec {
    pub size: PageSize,
    pub orientation: Orientation,
}

/// Where an image lands on a page, in PDF points with a bottom-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePlacement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PageSpec {
    pub fn new(size: PageSize, orientation: Orientation) -> Self {
        Self { size, orientation }
    }

    /// Width and height in points after orientation.
    pub fn dimensions_pt(&self) -> (f32, f32) {
        self.size.oriented_pt(self.orientation)
    }

    /// Fits an image to the page width keeping its aspect ratio, anchored at
    /// the top edge. Images taller than the page are scaled down to the page
    /// height instead and centered horizontally.
    pub fn place_image(&self, pixel_width: u32, pixel_height: u32) -> ImagePlacement {
        let (page_w, page_h) = self.dimensions_pt();
        let aspect = pixel_height as f32 / pixel_width.max(1) as f32;

        let (width, height) = if page_w * aspect <= page_h {
            (page_w, page_w * aspect)
        } else {
            (page_h / aspect, page_h)
        };
        ImagePlacement {
            x: (page_w - width) / 2.0,
            y: crate::utils::flip_y(height, page_h),
            width,
            height,
        }
    }
}
