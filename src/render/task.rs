//! Module with the rendering task, turning a single lockup
//! into a finished raster image.

use std::io;
use std::sync::Arc;

use image::{ColorType, GenericImage, ImageFormat, Rgba, RgbaImage};
use image::png::PNGEncoder;
use rusttype::Scale;

use model::{Background, BoxIndex, Lockup, Stacking};
use model::constants::{BASELINE_NUDGE_RATIO, SHADOW_BLUR, SHADOW_OFFSET_Y,
                       SHADOW_OPACITY, TRACKING_RATIO};
use resources::{Font, FontLoader, Loader};
use style::{resolve, theme_colors, Geometry, ThemeColors};
use super::engine::Inner;
use super::error::RenderError;
use super::output::RenderOutput;
use super::text;


/// Represents a single rendering task.
pub(super) struct RenderTask<Fl = FontLoader>
    where Fl: Loader<Item=Font>
{
    lockup: Lockup,
    engine: Arc<Inner<Fl>>,
}

impl<Fl> RenderTask<Fl>
    where Fl: Loader<Item=Font>
{
    #[inline]
    pub fn new(lockup: Lockup, engine: Arc<Inner<Fl>>) -> Self {
        RenderTask{lockup: lockup, engine: engine}
    }

    /// Render the lockup into an encoded PNG image.
    pub fn perform(self) -> Result<RenderOutput, RenderError<Fl>> {
        debug!("Rendering lockup {:?}", self.lockup);

        let font = self.load_font()?;
        let (width, height) = {
            let config = self.engine.config.read();
            (config.width, config.height)
        };

        let geometry = resolve(&self.lockup);
        let mut frame = new_frame(width, height, self.lockup.background);
        for &index in self.draw_order().iter() {
            self.draw_box(&mut frame, &*font, &geometry, index);
        }

        let bytes = encode_png(&frame).map_err(RenderError::Encode)?;
        Ok(RenderOutput::new(ImageFormat::PNG, width, height, bytes))
    }
}

impl<Fl> RenderTask<Fl>
    where Fl: Loader<Item=Font>
{
    fn load_font(&self) -> Result<Arc<Font>, RenderError<Fl>> {
        let name = &self.lockup.font;
        debug!("Loading font `{}` for rendering", name);
        self.engine.font_loader.load(name)
            .map_err(|e| RenderError::Font(name.clone(), e))
    }

    /// Paint order of the boxes. The box on top is drawn last.
    fn draw_order(&self) -> [BoxIndex; 2] {
        match self.lockup.stacking {
            Stacking::Box1 => [BoxIndex::Second, BoxIndex::First],
            Stacking::Box2 => [BoxIndex::First, BoxIndex::Second],
        }
    }

    /// Draw a single box (its shadow, fill & text) onto the frame.
    fn draw_box(&self, frame: &mut RgbaImage,
                font: &Font, geometry: &Geometry, index: BoxIndex) {
        let text = match self.lockup.text(index) {
            "" => " ",
            text => text,
        };
        text::check(font, text);

        let scale = self.lockup.scale;
        let colors = theme_colors(self.lockup.theme, index);
        let angle = geometry.angle_for(index).to_radians();

        let scaled_fs = self.lockup.font_size * scale;
        let scaled_bh = geometry.box_height * scale;
        let scaled_pad = geometry.padding * scale;
        let h_shift = match index {
            BoxIndex::First => 0.0,
            BoxIndex::Second => geometry.horizontal_shift * scale,
        };

        // The group is centered within the frame;
        // each box is positioned by its center point.
        let group_height = geometry.group_height() * scale;
        let center_x = frame.width() as f32 / 2.0 + h_shift;
        let center_y = frame.height() as f32 / 2.0;
        let v_base = match index {
            BoxIndex::First => center_y - group_height / 2.0 + scaled_bh / 2.0,
            BoxIndex::Second => center_y + group_height / 2.0 - scaled_bh / 2.0,
        };

        let font_scale = Scale::uniform(scaled_fs);
        let advances = text::char_advances(font, text, font_scale);
        let tracking = TRACKING_RATIO * scaled_fs;
        let box_width = text::tracked_width(&advances, tracking) + 2.0 * scaled_pad;

        trace!("Drawing {:?} of size {}x{} at ({}, {}), rotated {} deg",
            index, box_width, scaled_bh, center_x, v_base, angle.to_degrees());

        // The shadow offset is not subject to the box rotation.
        draw_shadow(frame, (center_x, v_base + SHADOW_OFFSET_Y),
                    (box_width, scaled_bh), angle);

        let layer = render_box_layer(font, text, &advances, tracking, font_scale,
                                     colors, box_width, scaled_bh, scaled_pad);
        blit_rotated(frame, &layer, (center_x, v_base), angle);
    }
}


/// Create the target frame, filled with the background (if any).
fn new_frame(width: u32, height: u32, background: Background) -> RgbaImage {
    let fill = match background.color() {
        Some(color) => color.to_rgba(0xff),
        None => Rgba{data: [0, 0, 0, 0]},
    };
    RgbaImage::from_pixel(width, height, fill)
}

/// Render a single box, upright, into its own image:
/// the colored fill with the tracked text on top of it.
fn render_box_layer(font: &Font, text: &str,
                    advances: &[f32], tracking: f32, scale: Scale,
                    colors: ThemeColors,
                    box_width: f32, box_height: f32, padding: f32) -> RgbaImage {
    let width = box_width.ceil().max(1.0) as u32;
    let height = box_height.ceil().max(1.0) as u32;
    let mut layer = RgbaImage::from_pixel(width, height,
                                          colors.background.to_rgba(0xff));

    // Vertically center the text on its em box, with the same slight
    // downward nudge the interactive preview applies.
    let v_metrics = font.v_metrics(scale);
    let baseline = box_height / 2.0
        + (v_metrics.ascent + v_metrics.descent) / 2.0
        + BASELINE_NUDGE_RATIO * scale.y;

    text::draw_line(&mut layer, text, font, scale, colors.text,
                    (padding, baseline), advances, tracking);
    layer
}

/// Draw the soft shadow of a rotated box onto the frame.
///
/// The shadow is computed analytically: the opacity falls off with the
/// distance from the (rotated) box rectangle over the blur radius.
fn draw_shadow(img: &mut RgbaImage,
               center: (f32, f32), size: (f32, f32), angle: f32) {
    let (cx, cy) = center;
    let (hw, hh) = (size.0 / 2.0, size.1 / 2.0);
    let (sin, cos) = angle.sin_cos();

    let reach_x = hw * cos.abs() + hh * sin.abs() + SHADOW_BLUR;
    let reach_y = hw * sin.abs() + hh * cos.abs() + SHADOW_BLUR;
    let (x0, x1) = pixel_span(cx - reach_x, cx + reach_x, img.width());
    let (y0, y1) = pixel_span(cy - reach_y, cy + reach_y, img.height());

    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            // Distance from the box rectangle, in its own (rotated) frame.
            let lx = dx * cos + dy * sin;
            let ly = -dx * sin + dy * cos;
            let qx = (lx.abs() - hw).max(0.0);
            let qy = (ly.abs() - hh).max(0.0);
            let distance = (qx * qx + qy * qy).sqrt();
            if distance >= SHADOW_BLUR {
                continue;
            }
            let t = 1.0 - distance / SHADOW_BLUR;
            let coverage = t * t * (3.0 - 2.0 * t);
            let alpha = (SHADOW_OPACITY * coverage * 255.0) as u8;
            if alpha > 0 {
                img.blend_pixel(x, y, Rgba{data: [0, 0, 0, alpha]});
            }
        }
    }
}

/// Blit the layer onto the frame, rotated by `angle` (in radians,
/// clockwise) around the layer's center placed at `center`.
fn blit_rotated(img: &mut RgbaImage, layer: &RgbaImage,
                center: (f32, f32), angle: f32) {
    let (cx, cy) = center;
    let (layer_width, layer_height) = layer.dimensions();
    let (hw, hh) = (layer_width as f32 / 2.0, layer_height as f32 / 2.0);
    let (sin, cos) = angle.sin_cos();

    let reach_x = hw * cos.abs() + hh * sin.abs() + 1.0;
    let reach_y = hw * sin.abs() + hh * cos.abs() + 1.0;
    let (x0, x1) = pixel_span(cx - reach_x, cx + reach_x, img.width());
    let (y0, y1) = pixel_span(cy - reach_y, cy + reach_y, img.height());

    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            // Inverse rotation takes the frame pixel back into layer space.
            let lx = dx * cos + dy * sin + hw;
            let ly = -dx * sin + dy * cos + hh;
            if let Some(pixel) = sample_bilinear(layer, lx, ly) {
                if pixel.data[3] > 0 {
                    img.blend_pixel(x, y, pixel);
                }
            }
        }
    }
}

/// Clamp a floating-point coordinate range to a pixel span within the image.
fn pixel_span(min: f32, max: f32, limit: u32) -> (u32, u32) {
    let lo = min.floor().max(0.0) as u32;
    let hi = (max.ceil().max(0.0) as u32).min(limit);
    (lo.min(limit), hi)
}

/// Sample the layer at a fractional position, bilinearly.
///
/// Colors of the four neighboring texels are weighted by their alpha,
/// so fully transparent texels (incl. those outside the layer)
/// never bleed their color into the edges.
fn sample_bilinear(layer: &RgbaImage, x: f32, y: f32) -> Option<Rgba<u8>> {
    let (width, height) = layer.dimensions();
    if x < -1.0 || y < -1.0 || x > width as f32 + 1.0 || y > height as f32 + 1.0 {
        return None;
    }

    let fx = x - 0.5;
    let fy = y - 0.5;
    let x0 = fx.floor();
    let y0 = fy.floor();
    let tx = fx - x0;
    let ty = fy - y0;

    let taps = [
        (0, 0, (1.0 - tx) * (1.0 - ty)),
        (1, 0, tx * (1.0 - ty)),
        (0, 1, (1.0 - tx) * ty),
        (1, 1, tx * ty),
    ];

    let mut color = [0.0f32; 3];
    let mut alpha = 0.0f32;
    for &(i, j, weight) in taps.iter() {
        let px = x0 as i32 + i;
        let py = y0 as i32 + j;
        if px < 0 || py < 0 || px >= width as i32 || py >= height as i32 {
            continue;
        }
        let pixel = layer.get_pixel(px as u32, py as u32);
        let a = pixel.data[3] as f32 / 255.0;
        alpha += weight * a;
        for c in 0..3 {
            color[c] += weight * a * pixel.data[c] as f32;
        }
    }

    if alpha <= 0.0 {
        return None;
    }
    Some(Rgba{data: [
        (color[0] / alpha).min(255.0) as u8,
        (color[1] / alpha).min(255.0) as u8,
        (color[2] / alpha).min(255.0) as u8,
        (alpha * 255.0).min(255.0) as u8,
    ]})
}

/// Encode the finished frame as a (lossless) PNG.
fn encode_png(img: &RgbaImage) -> io::Result<Vec<u8>> {
    let (width, height) = img.dimensions();
    let mut bytes = vec![];
    PNGEncoder::new(&mut bytes).encode(&**img, width, height, ColorType::RGBA(8))?;
    Ok(bytes)
}


#[cfg(test)]
mod tests {
    use std::path::Path;
    use image::{self, Rgba, RgbaImage};
    use model::{Background, Lockup};
    use render::{Engine, EngineBuilder};
    use super::{blit_rotated, draw_shadow, new_frame};

    #[test]
    fn new_frame_honors_background() {
        let white = new_frame(4, 4, Background::White);
        assert_eq!([0xff, 0xff, 0xff, 0xff], white.get_pixel(0, 0).data);

        let transparent = new_frame(4, 4, Background::Transparent);
        assert_eq!(0, transparent.get_pixel(0, 0).data[3]);
    }

    #[test]
    fn blit_without_rotation_is_a_plain_copy() {
        let mut frame = new_frame(10, 10, Background::Transparent);
        let layer = RgbaImage::from_pixel(4, 4, Rgba{data: [0xff, 0, 0, 0xff]});
        blit_rotated(&mut frame, &layer, (5.0, 5.0), 0.0);

        assert_eq!([0xff, 0, 0, 0xff], frame.get_pixel(5, 5).data);
        assert_eq!(0, frame.get_pixel(0, 0).data[3]);
        assert_eq!(0, frame.get_pixel(9, 9).data[3]);
    }

    #[test]
    fn blit_by_half_turn_flips_the_layer() {
        use std::f32::consts::PI;

        let mut layer = RgbaImage::from_pixel(8, 4, Rgba{data: [0xff, 0, 0, 0xff]});
        for y in 0..4 {
            for x in 4..8 {
                layer.put_pixel(x, y, Rgba{data: [0, 0, 0xff, 0xff]});
            }
        }

        let mut frame = new_frame(20, 20, Background::Transparent);
        blit_rotated(&mut frame, &layer, (10.0, 10.0), PI);

        // Red was on the left of the layer; after a half turn
        // it lands on the right side of the frame.
        assert_eq!([0xff, 0, 0, 0xff], frame.get_pixel(12, 10).data);
        assert_eq!([0, 0, 0xff, 0xff], frame.get_pixel(7, 10).data);
    }

    #[test]
    fn shadow_darkens_under_the_box_but_not_far_away() {
        let mut frame = new_frame(200, 200, Background::White);
        draw_shadow(&mut frame, (100.0, 100.0), (80.0, 40.0), 0.0);

        // 10% black over white.
        let inside = frame.get_pixel(100, 100).data;
        assert!(inside[0] < 240 && inside[0] > 200, "inside = {:?}", inside);
        assert_eq!([0xff, 0xff, 0xff, 0xff], frame.get_pixel(2, 2).data);
    }

    #[test]
    fn exported_frame_is_png_with_transparent_corners() {
        // Needs an actual font file to run.
        if !Path::new("fonts/Poppins-Black.ttf").exists() {
            eprintln!("fonts/Poppins-Black.ttf not found, skipping the export test");
            return;
        }

        let engine: Engine = EngineBuilder::new()
            .font_directory("fonts")
            .export_size(192, 108)
            .build().unwrap();
        let lockup = Lockup::build()
            .text1("builders").text2("club")
            .background(Background::Transparent)
            .scale(0.4)
            .build();

        let output = engine.render(lockup).unwrap();
        assert_eq!(192, output.width());
        assert_eq!(108, output.height());
        assert_eq!(b"\x89PNG", &output.bytes()[..4]);

        let decoded = image::load_from_memory(output.bytes()).unwrap().to_rgba();
        assert_eq!(0, decoded.get_pixel(0, 0).data[3]);
        assert_eq!(0, decoded.get_pixel(191, 107).data[3]);
    }
}
