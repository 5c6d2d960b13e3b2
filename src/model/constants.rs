//! Module defining constants relevant to the data model.
//!
//! The metric ratios and correction factors below are brand constants:
//! they were tuned by eye against the reference lockups, not derived
//! from any font metric or physical model.

use super::types::Color;


/// Rotation applied to the lockup boxes, in degrees.
/// Box 1 rotates by `+ANGLE_DEGREES`, box 2 by `-ANGLE_DEGREES`.
pub const ANGLE_DEGREES: f32 = 1.5;

/// Ratio of the cap height to the nominal font size.
pub const CAP_HEIGHT_RATIO: f32 = 0.72;
/// Ratio of the box padding to the cap height.
pub const PADDING_RATIO: f32 = 0.65;
/// Ratio of the standard inter-box distance unit to the cap height.
pub const OFFSET_RATIO: f32 = 0.25;
/// Ratio of the "bionic shift" horizontal offset to the cap height.
pub const SHIFT_RATIO: f32 = 1.6;

/// Span (in pixels) of the compensation for the visual gap that the
/// equal-and-opposite box rotations open up at the seam.
/// The effective correction is `|sin(ANGLE_DEGREES)| * ROTATION_COMP_SPAN`.
pub const ROTATION_COMP_SPAN: f32 = 400.0;

/// Inter-character tracking, as a ratio of the scaled font size.
/// Negative: the brand typography is set tight.
pub const TRACKING_RATIO: f32 = -0.04;
/// Baseline nudge (as a ratio of the scaled font size) that optically
/// centers uppercase text within its box.
pub const BASELINE_NUDGE_RATIO: f32 = 0.05;

/// Blur radius of the box drop shadow, in pixels.
pub const SHADOW_BLUR: f32 = 40.0;
/// Vertical offset of the box drop shadow, in pixels.
pub const SHADOW_OFFSET_Y: f32 = 15.0;
/// Opacity of the box drop shadow.
pub const SHADOW_OPACITY: f32 = 0.1;


// The brand palette.
pub const NAVY: Color = Color(0x18, 0x28, 0x65);
pub const ORANGE: Color = Color(0xff, 0x67, 0x41);
pub const BLUE: Color = Color(0x2d, 0x6a, 0xe3);
pub const GREY: Color = Color(0xd9, 0xdd, 0xe6);
pub const WHITE: Color = Color(0xff, 0xff, 0xff);


/// Name of the default font.
pub const DEFAULT_FONT: &'static str = "Poppins-Black";

/// Default nominal font size, in pixels.
pub const DEFAULT_FONT_SIZE: f32 = 100.0;
/// Range of the font size, as constrained by the input surface.
pub const MIN_FONT_SIZE: f32 = 40.0;
pub const MAX_FONT_SIZE: f32 = 160.0;

/// Default asset scale ("frame fit" zoom).
pub const DEFAULT_SCALE: f32 = 1.0;
/// Range of the asset scale, as constrained by the input surface.
pub const MIN_SCALE: f32 = 0.4;
pub const MAX_SCALE: f32 = 2.0;

/// Width of the exported master, in pixels.
pub const EXPORT_WIDTH: u32 = 1920;
/// Height of the exported master, in pixels.
pub const EXPORT_HEIGHT: u32 = 1080;
