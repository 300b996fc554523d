/// Convert a top-left based Y coordinate to PDF's bottom-left origin.
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Composites one straight-alpha channel value over white.
pub fn over_white(channel: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((channel as u32 * a + 255 * (255 - a) + 127) / 255) as u8
}

/// Drops the alpha channel of an RGBA buffer by compositing onto white.
pub fn flatten_rgba_onto_white(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    for px in rgba.chunks_exact(4) {
        let alpha = px[3];
        rgb.extend(px[..3].iter().map(|&c| over_white(c, alpha)));
    }
    rgb
}
