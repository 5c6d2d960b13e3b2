//! Defines the output of a rendering operation.

use std::ops::Deref;

use image::ImageFormat;
use mime::{self, Mime};
use time;


/// Output of the rendering process: a complete, encoded image.
#[derive(Clone, Debug)]
#[must_use = "unused render output which must be used"]
pub struct RenderOutput {
    format: ImageFormat,
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl RenderOutput {
    #[inline]
    pub(super) fn new(format: ImageFormat, width: u32, height: u32, bytes: Vec<u8>) -> Self {
        RenderOutput{format: format, width: width, height: height, bytes: bytes}
    }
}

impl RenderOutput {
    /// Image format of the output.
    #[inline]
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Width of the output image, in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the output image, in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw bytes of the output.
    ///
    /// See `RenderOutput::format` for how to interpret it.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes[..]
    }

    /// Convert the output into a vector of bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// The MIME type that matches output's format.
    pub fn mime_type(&self) -> Option<Mime> {
        match self.format {
            ImageFormat::PNG => Some(mime::IMAGE_PNG),
            _ => None,
        }
    }

    /// File extension that matches output's format.
    pub fn extension(&self) -> &'static str {
        match self.format {
            ImageFormat::PNG => "png",
            _ => "img",
        }
    }

    /// A timestamped file name suitable for saving this output under.
    pub fn suggested_filename(&self) -> String {
        format!("bionic-{}.{}", time::get_time().sec, self.extension())
    }
}

impl Deref for RenderOutput {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.bytes()
    }
}

impl Into<Vec<u8>> for RenderOutput {
    fn into(self) -> Vec<u8> {
        self.into_bytes()
    }
}


#[cfg(test)]
mod tests {
    use image::ImageFormat;
    use mime;
    use super::RenderOutput;

    #[test]
    fn png_output_is_image_png() {
        let output = RenderOutput::new(ImageFormat::PNG, 4, 4, vec![0u8; 16]);
        assert_eq!(Some(mime::IMAGE_PNG), output.mime_type());
        assert_eq!("png", output.extension());
        assert!(output.suggested_filename().ends_with(".png"));
    }
}
