//! Style resolver module.
//!
//! Turns the declarative knobs of a `Lockup` into concrete numbers
//! (the `Geometry`) and concrete colors (the `ThemeColors`).
//! Everything in here is pure arithmetic over the lockup parameters.

mod geometry;
mod palette;

pub use self::geometry::{Geometry, resolve};
pub use self::palette::{ThemeColors, theme_colors};
