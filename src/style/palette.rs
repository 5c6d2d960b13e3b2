//! Mapping themes to the concrete colors of each box.

use model::{BoxIndex, Color, Theme};
use model::constants::{BLUE, GREY, NAVY, ORANGE, WHITE};


/// Colors of a single lockup box under some theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ThemeColors {
    /// Fill color of the box.
    pub background: Color,
    /// Color of the text inside it.
    pub text: Color,
}

/// Look up the colors of given box under given theme.
pub fn theme_colors(theme: Theme, index: BoxIndex) -> ThemeColors {
    let (background, text) = match (theme, index) {
        (Theme::Primary, BoxIndex::First) => (ORANGE, NAVY),
        (Theme::Primary, BoxIndex::Second) => (NAVY, WHITE),
        (Theme::Alt, BoxIndex::First) => (NAVY, WHITE),
        (Theme::Alt, BoxIndex::Second) => (ORANGE, NAVY),
        (Theme::Blue, BoxIndex::First) => (BLUE, WHITE),
        (Theme::Blue, BoxIndex::Second) => (NAVY, WHITE),
        (Theme::Grey, BoxIndex::First) => (GREY, NAVY),
        (Theme::Grey, BoxIndex::Second) => (WHITE, NAVY),
    };
    ThemeColors{background: background, text: text}
}


#[cfg(test)]
mod tests {
    use model::{BoxIndex, Theme};
    use super::theme_colors;

    #[test]
    fn every_theme_has_colors_for_both_boxes() {
        for theme in Theme::iter_variants() {
            for index in BoxIndex::iter_variants() {
                let colors = theme_colors(theme, index);
                // Text must stay legible against the box fill.
                assert_ne!(colors.background, colors.text,
                           "theme {:?}, box {:?}", theme, index);
            }
        }
    }

    #[test]
    fn alt_theme_swaps_the_primary_boxes() {
        for index in BoxIndex::iter_variants() {
            let other = match index {
                BoxIndex::First => BoxIndex::Second,
                BoxIndex::Second => BoxIndex::First,
            };
            assert_eq!(theme_colors(Theme::Primary, index),
                       theme_colors(Theme::Alt, other));
        }
    }
}
