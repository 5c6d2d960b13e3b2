//! Module defining the brand theme & background enums.

#![allow(missing_docs)]  // Because IterVariants! produces undocumented methods.

use model::constants::{NAVY, ORANGE, WHITE};
use super::color::Color;


macro_attr! {
    /// Brand color theme of the lockup.
    ///
    /// The theme decides the fill & text colors of both boxes;
    /// see `style::theme_colors` for the actual pairs.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
             Deserialize, IterVariants!(Themes))]
    #[serde(rename_all = "lowercase")]
    pub enum Theme {
        /// Promotional: orange over navy.
        Primary,
        /// Secondary: navy over orange.
        Alt,
        /// Product: blue over navy.
        Blue,
        /// Editorial: grey over white.
        Grey,
    }
}

macro_attr! {
    /// Background of the exported frame.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
             Deserialize, IterVariants!(Backgrounds))]
    #[serde(rename_all = "lowercase")]
    pub enum Background {
        White,
        Navy,
        Orange,
        /// No fill at all: every background pixel stays at zero alpha.
        Transparent,
    }
}

impl Background {
    /// The fill color of this background, if any.
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Background::White => Some(WHITE),
            Background::Navy => Some(NAVY),
            Background::Orange => Some(ORANGE),
            Background::Transparent => None,
        }
    }
}


#[cfg(test)]
mod tests {
    use model::constants::NAVY;
    use super::Background;

    #[test]
    fn only_transparent_has_no_fill() {
        assert_eq!(None, Background::Transparent.color());
        assert_eq!(Some(NAVY), Background::Navy.color());
        for bg in Background::iter_variants() {
            assert_eq!(bg == Background::Transparent, bg.color().is_none());
        }
    }
}
