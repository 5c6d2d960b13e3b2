//! Rendering error.

use std::error::Error;
use std::fmt;
use std::io;

use resources::{Loader, Font, FontLoader};


/// Error that may occur during rendering.
pub enum RenderError<Fl = FontLoader>
    where Fl: Loader<Item=Font>
{
    /// Error while loading the lockup's font.
    Font(String, Fl::Err),
    /// Another export is already in progress on this engine.
    Busy,
    /// Error while encoding the final image.
    Encode(io::Error),
}

impl<Fl> Error for RenderError<Fl>
    where Fl: Loader<Item=Font>, Fl::Err: Error
{
    fn description(&self) -> &str { "rendering error" }
    fn cause(&self) -> Option<&Error> {
        match *self {
            RenderError::Font(_, ref e) => Some(e),
            RenderError::Busy => None,
            RenderError::Encode(ref e) => Some(e),
        }
    }
}

impl<Fl> fmt::Debug for RenderError<Fl>
    where Fl: Loader<Item=Font>
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RenderError::Font(ref f, _) => write!(fmt, "RenderError::Font({:?})", f),
            RenderError::Busy => write!(fmt, "RenderError::Busy"),
            RenderError::Encode(ref e) => write!(fmt, "RenderError::Encode({:?})", e),
        }
    }
}

impl<Fl> fmt::Display for RenderError<Fl>
    where Fl: Loader<Item=Font>, Fl::Err: fmt::Display
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RenderError::Font(ref f, ref e) => write!(fmt, "cannot load font `{}`: {}", f, e),
            RenderError::Busy => write!(fmt, "an export is already in progress"),
            RenderError::Encode(ref e) => write!(fmt, "failed to encode the final image: {}", e),
        }
    }
}


impl<Fl> RenderError<Fl>
    where Fl: Loader<Item=Font>
{
    /// Whether the error means the engine was merely busy
    /// and the same render can be retried later.
    #[inline]
    pub fn is_busy(&self) -> bool {
        match *self {
            RenderError::Busy => true,
            _ => false,
        }
    }
}
