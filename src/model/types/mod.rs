//! Module defining the model types.

mod align;
mod color;
mod lockup;
mod style;
mod theme;

pub use self::align::Alignment;
pub use self::color::Color;
pub use self::lockup::{Lockup, Builder as LockupBuilder};
pub use self::style::{BoxIndex, Composition, Stacking, Style};
pub use self::theme::{Background, Theme};
