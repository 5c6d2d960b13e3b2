//! Deriving the lockup geometry from its parameters.

use std::f32::consts::PI;

use model::{Alignment, BoxIndex, Composition, Lockup, Style};
use model::constants::{ANGLE_DEGREES, CAP_HEIGHT_RATIO, OFFSET_RATIO,
                       PADDING_RATIO, ROTATION_COMP_SPAN, SHIFT_RATIO};


/// Derived geometry of a lockup, in unscaled (base) pixels.
///
/// All lengths are proportional to the font size,
/// so the same lockup at a bigger size keeps its proportions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// Height of capital letters at the lockup's font size.
    pub cap_height: f32,
    /// Padding between the text and the box edge, on every side.
    pub padding: f32,
    /// Total height of a single box.
    pub box_height: f32,
    /// Vertical distance from the top of box 1 to the top of box 2.
    /// Smaller than `box_height` when the boxes overlap.
    pub stack_offset: f32,
    /// Sideways displacement of box 2. Zero unless composed as offset.
    pub horizontal_shift: f32,
    /// Magnitude of the box rotation, in degrees.
    pub angle: f32,
}

impl Geometry {
    /// Rotation angle of the given box, in degrees.
    /// The boxes counter-rotate: box 1 tilts one way, box 2 the other.
    #[inline]
    pub fn angle_for(&self, index: BoxIndex) -> f32 {
        match index {
            BoxIndex::First => self.angle,
            BoxIndex::Second => -self.angle,
        }
    }

    /// Total height of the two-box group.
    #[inline]
    pub fn group_height(&self) -> f32 {
        self.box_height + self.stack_offset
    }
}


/// Resolve the geometry of given lockup.
pub fn resolve(lockup: &Lockup) -> Geometry {
    let cap_height = lockup.font_size * CAP_HEIGHT_RATIO;
    let padding = cap_height * PADDING_RATIO;
    let box_height = cap_height + 2.0 * padding;

    // The counter-rotation pulls the boxes' near corners apart,
    // so the vertical offset gets a small compensation term
    // to keep the seam visually tight.
    let distance_unit = cap_height * OFFSET_RATIO;
    let rotation_comp =
        (ANGLE_DEGREES * PI / 180.0).sin().abs() * ROTATION_COMP_SPAN;
    let stack_offset = match lockup.style {
        Style::Standard => box_height + distance_unit + rotation_comp,
        Style::Overlapping => box_height - distance_unit + rotation_comp,
    };

    let shift = cap_height * SHIFT_RATIO;
    let horizontal_shift = match lockup.composition {
        Composition::Range => 0.0,
        Composition::Offset => match lockup.alignment {
            Alignment::Left => shift,
            Alignment::Right => -shift,
            Alignment::Center => 0.0,
        },
    };

    Geometry {
        cap_height: cap_height,
        padding: padding,
        box_height: box_height,
        stack_offset: stack_offset,
        horizontal_shift: horizontal_shift,
        angle: ANGLE_DEGREES,
    }
}


#[cfg(test)]
mod tests {
    use spectral::prelude::*;
    use model::{Alignment, BoxIndex, Composition, Lockup, Style};
    use super::resolve;

    fn lockup_with_size(font_size: f32) -> Lockup {
        Lockup::build().text1("A").text2("B").font_size(font_size).build()
    }

    #[test]
    fn resolving_is_deterministic() {
        let lockup = lockup_with_size(100.0);
        assert_eq!(resolve(&lockup), resolve(&lockup));
    }

    #[test]
    fn box_height_grows_with_font_size() {
        let small = resolve(&lockup_with_size(60.0));
        let large = resolve(&lockup_with_size(140.0));
        assert_that!(small.box_height).is_less_than(large.box_height);
        assert_that!(small.cap_height).is_less_than(large.cap_height);
        assert_that!(small.padding).is_less_than(large.padding);
    }

    #[test]
    fn overlapping_boxes_sit_closer_than_standard() {
        let mut lockup = lockup_with_size(100.0);
        lockup.style = Style::Overlapping;
        let overlapping = resolve(&lockup);
        lockup.style = Style::Standard;
        let standard = resolve(&lockup);
        assert_that!(overlapping.stack_offset).is_less_than(standard.stack_offset);
        // Overlapping means box 2 starts before box 1 ends.
        assert_that!(overlapping.stack_offset).is_less_than(overlapping.box_height);
        assert_that!(standard.stack_offset).is_greater_than(standard.box_height);
    }

    #[test]
    fn shift_requires_offset_composition() {
        let mut lockup = lockup_with_size(100.0);
        lockup.composition = Composition::Range;
        for &alignment in &[Alignment::Left, Alignment::Center, Alignment::Right] {
            lockup.alignment = alignment;
            assert_eq!(0.0, resolve(&lockup).horizontal_shift);
        }
    }

    #[test]
    fn shift_direction_follows_alignment() {
        let mut lockup = lockup_with_size(100.0);
        lockup.composition = Composition::Offset;
        lockup.alignment = Alignment::Left;
        assert!(resolve(&lockup).horizontal_shift > 0.0);
        lockup.alignment = Alignment::Right;
        assert!(resolve(&lockup).horizontal_shift < 0.0);
        lockup.alignment = Alignment::Center;
        assert_eq!(0.0, resolve(&lockup).horizontal_shift);
    }

    #[test]
    fn boxes_counter_rotate() {
        let geometry = resolve(&lockup_with_size(100.0));
        assert_eq!(geometry.angle_for(BoxIndex::First),
                   -geometry.angle_for(BoxIndex::Second));
        assert!(geometry.angle_for(BoxIndex::First) > 0.0);
    }

    #[test]
    fn group_height_spans_both_boxes() {
        let geometry = resolve(&lockup_with_size(100.0));
        assert_eq!(geometry.box_height + geometry.stack_offset,
                   geometry.group_height());
    }
}
