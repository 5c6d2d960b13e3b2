//! Module with rendering engine configuration.

use model::constants::{EXPORT_HEIGHT, EXPORT_WIDTH};


/// Structure holding configuration for the `Engine`.
///
/// This is shared with `RenderTask`s.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Width of exported images, in pixels.
    pub width: u32,
    /// Height of exported images, in pixels.
    pub height: u32,
}

impl Default for Config {
    /// Initialize Config with the default (full HD) export size.
    fn default() -> Self {
        Config{
            width: EXPORT_WIDTH,
            height: EXPORT_HEIGHT,
        }
    }
}
