//! Module responsible for rendering the text of a lockup box.

use image::{GenericImage, RgbaImage};
use rusttype::{point, Font, Scale};

use model::Color;


/// Check whether the font has glyphs for all characters of the text.
/// Missing glyphs are logged, they will simply not be drawn.
pub fn check(font: &Font, text: &str) {
    for ch in text.chars() {
        if font.glyph(ch).is_none() {
            warn!("Font has no glyph for {:?}, it will be omitted", ch);
        }
    }
}

/// Horizontal advance of every character of the text, in order.
///
/// Characters the font has no glyph for get a zero advance.
pub fn char_advances(font: &Font, text: &str, scale: Scale) -> Vec<f32> {
    text.chars()
        .map(|ch| font.glyph(ch)
            .map(|g| g.scaled(scale).h_metrics().advance_width)
            .unwrap_or(0.0))
        .collect()
}

/// Total width of a line of text laid out with the given letter tracking.
///
/// Tracking is applied between characters, so a single character
/// (or an empty line) is unaffected by it.
pub fn tracked_width(advances: &[f32], tracking: f32) -> f32 {
    if advances.is_empty() {
        return 0.0;
    }
    let total: f32 = advances.iter().sum();
    total + tracking * (advances.len() - 1) as f32
}

/// Draw a line of text onto the image, one glyph at a time,
/// with the given tracking added between consecutive characters.
///
/// `start` is the position of the first glyph's origin (on the baseline).
pub fn draw_line(img: &mut RgbaImage,
                 text: &str, font: &Font, scale: Scale, color: Color,
                 start: (f32, f32), advances: &[f32], tracking: f32) {
    let (width, height) = img.dimensions();
    let (start_x, start_y) = start;

    let mut caret = start_x;
    for (i, ch) in text.chars().enumerate() {
        let glyph = match font.glyph(ch) {
            Some(g) => g,
            None => continue,
        };
        let positioned = glyph.scaled(scale).positioned(point(caret, start_y));
        if let Some(bbox) = positioned.pixel_bounding_box() {
            positioned.draw(|x, y, v| {
                let x = bbox.min.x + x as i32;
                let y = bbox.min.y + y as i32;
                if x >= 0 && y >= 0 && (x as u32) < width && (y as u32) < height {
                    let alpha = (v * 255f32) as u8;
                    img.blend_pixel(x as u32, y as u32, color.to_rgba(alpha));
                }
            });
        }
        caret += advances[i] + tracking;
    }
}
