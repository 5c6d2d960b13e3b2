//! Module implementing the `Lockup` type,
//! the complete description of a two-line brand lockup.

use model::constants::{DEFAULT_FONT, DEFAULT_FONT_SIZE, DEFAULT_SCALE,
                       MAX_FONT_SIZE, MAX_SCALE, MIN_FONT_SIZE, MIN_SCALE};
use super::align::Alignment;
use super::style::{BoxIndex, Composition, Stacking, Style};
use super::theme::{Background, Theme};


/// Describes a complete lockup: two lines of text plus all the knobs
/// that decide how they are styled and arranged.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Lockup {
    /// Text of the first (upper) box.
    pub text1: String,
    /// Text of the second (lower) box.
    pub text2: String,
    /// Overall style of the stack.
    pub style: Style,
    /// Horizontal composition of the boxes.
    pub composition: Composition,
    /// Which box paints on top at the seam.
    pub stacking: Stacking,
    /// Alignment of the group within the frame.
    pub alignment: Alignment,
    /// Brand color theme.
    pub theme: Theme,
    /// Background of the exported frame.
    pub background: Background,
    /// Name of the font face to set the text in.
    pub font: String,
    /// Base font size, in pixels, before the export scale.
    pub font_size: f32,
    /// Scale factor applied to the whole group on export.
    pub scale: f32,
}

impl Lockup {
    /// Create a `Builder` for this type.
    #[inline]
    pub fn build() -> Builder {
        Builder::new()
    }

    /// Text of the given box.
    #[inline]
    pub fn text(&self, index: BoxIndex) -> &str {
        match index {
            BoxIndex::First => &self.text1,
            BoxIndex::Second => &self.text2,
        }
    }
}

impl Default for Lockup {
    fn default() -> Self {
        Lockup {
            text1: String::new(),
            text2: String::new(),
            style: Style::Overlapping,
            composition: Composition::Range,
            stacking: Stacking::Box2,
            alignment: Alignment::Center,
            theme: Theme::Primary,
            background: Background::White,
            font: DEFAULT_FONT.into(),
            font_size: DEFAULT_FONT_SIZE,
            scale: DEFAULT_SCALE,
        }
    }
}


/// Builder for `Lockup`.
///
/// Texts are always uppercased and the numeric knobs clamped to their
/// slider ranges, so building cannot fail.
#[derive(Clone, Debug, Default)]
#[must_use = "unused builder which must be used"]
pub struct Builder {
    lockup: Lockup,
}

impl Builder {
    /// Create a new `Builder` with the default lockup.
    #[inline]
    pub fn new() -> Self {
        Builder::default()
    }
}

// Builder methods.
impl Builder {
    /// Set the text of the first box. It will be uppercased.
    pub fn text1<S: Into<String>>(mut self, text: S) -> Self {
        self.lockup.text1 = text.into().to_uppercase();
        self
    }

    /// Set the text of the second box. It will be uppercased.
    pub fn text2<S: Into<String>>(mut self, text: S) -> Self {
        self.lockup.text2 = text.into().to_uppercase();
        self
    }

    /// Set the style of the stack.
    #[inline]
    pub fn style(mut self, style: Style) -> Self {
        self.lockup.style = style;
        self
    }

    /// Set the horizontal composition.
    #[inline]
    pub fn composition(mut self, composition: Composition) -> Self {
        self.lockup.composition = composition;
        self
    }

    /// Set the stacking (paint) order.
    #[inline]
    pub fn stacking(mut self, stacking: Stacking) -> Self {
        self.lockup.stacking = stacking;
        self
    }

    /// Set the alignment of the group.
    #[inline]
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.lockup.alignment = alignment;
        self
    }

    /// Set the color theme.
    #[inline]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.lockup.theme = theme;
        self
    }

    /// Set the background of the frame.
    #[inline]
    pub fn background(mut self, background: Background) -> Self {
        self.lockup.background = background;
        self
    }

    /// Set the font face.
    #[inline]
    pub fn font<S: Into<String>>(mut self, font: S) -> Self {
        self.lockup.font = font.into();
        self
    }

    /// Set the base font size, clamped to the allowed range.
    pub fn font_size(mut self, size: f32) -> Self {
        self.lockup.font_size = size.max(MIN_FONT_SIZE).min(MAX_FONT_SIZE);
        self
    }

    /// Set the export scale, clamped to the allowed range.
    pub fn scale(mut self, scale: f32) -> Self {
        self.lockup.scale = scale.max(MIN_SCALE).min(MAX_SCALE);
        self
    }

    /// Finalize the lockup.
    #[inline]
    pub fn build(self) -> Lockup {
        self.lockup
    }
}
