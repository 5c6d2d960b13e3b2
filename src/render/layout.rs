//! Module implementing the live (unscaled) layout of a lockup.
//!
//! The layout is what an interactive preview needs to position the two
//! boxes: per-box colors, heights, rotations, and relative offsets.
//! It involves no rasterization and no font access.

use model::{Alignment, BoxIndex, Lockup};
use style::{resolve, theme_colors, ThemeColors};


/// One positioned box of a laid-out lockup.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutBox {
    /// Text of the box. Always at least a single space.
    pub text: String,
    /// Colors of the box.
    pub colors: ThemeColors,
    /// Height of the box, in pixels.
    pub height: f32,
    /// Font size of the box text, in pixels.
    pub font_size: f32,
    /// Rotation of the box, in degrees.
    pub angle: f32,
    /// Horizontal offset from the first box's position.
    pub offset_x: f32,
    /// Vertical offset from the first box's position.
    pub offset_y: f32,
    /// Whether this box paints over the other one.
    pub on_top: bool,
}

/// The complete live layout of a lockup.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    /// Alignment of the group within its container.
    pub alignment: Alignment,
    /// The two boxes, in lockup order (first box at index 0).
    pub boxes: [LayoutBox; 2],
}

impl Layout {
    /// Total height of the laid-out group.
    pub fn group_height(&self) -> f32 {
        self.boxes[1].offset_y + self.boxes[1].height
    }
}


/// Lay out given lockup for a live preview.
pub fn lay_out(lockup: &Lockup) -> Layout {
    let geometry = resolve(lockup);
    let top = lockup.stacking.top();

    let make_box = |index: BoxIndex| {
        let text = match lockup.text(index) {
            "" => " ".to_owned(),
            text => text.to_owned(),
        };
        let (offset_x, offset_y) = match index {
            BoxIndex::First => (0.0, 0.0),
            BoxIndex::Second => (geometry.horizontal_shift, geometry.stack_offset),
        };
        LayoutBox{
            text: text,
            colors: theme_colors(lockup.theme, index),
            height: geometry.box_height,
            font_size: lockup.font_size,
            angle: geometry.angle_for(index),
            offset_x: offset_x,
            offset_y: offset_y,
            on_top: index == top,
        }
    };

    Layout{
        alignment: lockup.alignment,
        boxes: [make_box(BoxIndex::First), make_box(BoxIndex::Second)],
    }
}


#[cfg(test)]
mod tests {
    use model::{Composition, Lockup, Stacking, Style};
    use super::lay_out;

    #[test]
    fn empty_text_becomes_a_space() {
        let layout = lay_out(&Lockup::default());
        assert_eq!(" ", layout.boxes[0].text);
        assert_eq!(" ", layout.boxes[1].text);
    }

    #[test]
    fn second_box_carries_the_offsets() {
        let lockup = Lockup::build()
            .text1("HELLO").text2("WORLD")
            .style(Style::Overlapping)
            .build();
        let layout = lay_out(&lockup);
        assert_eq!(0.0, layout.boxes[0].offset_x);
        assert_eq!(0.0, layout.boxes[0].offset_y);
        assert!(layout.boxes[1].offset_y > 0.0);
        // Overlapping: box 2 starts above box 1's bottom edge.
        assert!(layout.boxes[1].offset_y < layout.boxes[0].height);
        assert_eq!(layout.boxes[1].offset_y + layout.boxes[1].height,
                   layout.group_height());
    }

    #[test]
    fn stacking_marks_the_top_box() {
        let mut lockup = Lockup::build().text1("A").text2("B").build();
        lockup.stacking = Stacking::Box1;
        let layout = lay_out(&lockup);
        assert!(layout.boxes[0].on_top);
        assert!(!layout.boxes[1].on_top);

        lockup.stacking = Stacking::Box2;
        let layout = lay_out(&lockup);
        assert!(!layout.boxes[0].on_top);
        assert!(layout.boxes[1].on_top);
    }

    #[test]
    fn stacking_never_moves_a_box() {
        let mut lockup = Lockup::build()
            .text1("A").text2("B")
            .composition(Composition::Offset)
            .build();
        lockup.stacking = Stacking::Box1;
        let one = lay_out(&lockup);
        lockup.stacking = Stacking::Box2;
        let two = lay_out(&lockup);
        for i in 0..2 {
            assert_eq!(one.boxes[i].offset_x, two.boxes[i].offset_x);
            assert_eq!(one.boxes[i].offset_y, two.boxes[i].offset_y);
        }
    }

    #[test]
    fn promotional_heading_scenario() {
        use model::constants::{CAP_HEIGHT_RATIO, NAVY, ORANGE, SHIFT_RATIO, WHITE};
        use model::{Alignment, Theme};

        let lockup = Lockup::build()
            .text1("promotional").text2("heading style")
            .style(Style::Overlapping)
            .theme(Theme::Primary)
            .font_size(100.0)
            .build();
        let centered = lay_out(&lockup);

        assert_eq!(ORANGE, centered.boxes[0].colors.background);
        assert_eq!(NAVY, centered.boxes[0].colors.text);
        assert_eq!(NAVY, centered.boxes[1].colors.background);
        assert_eq!(WHITE, centered.boxes[1].colors.text);
        assert_eq!(0.0, centered.boxes[1].offset_x);

        // The offset composition with left alignment moves only box 2,
        // to the right, by the full bionic shift.
        let mut shifted_lockup = lockup.clone();
        shifted_lockup.composition = Composition::Offset;
        shifted_lockup.alignment = Alignment::Left;
        let shifted = lay_out(&shifted_lockup);
        let shift = 100.0 * CAP_HEIGHT_RATIO * SHIFT_RATIO;
        assert_eq!(0.0, shifted.boxes[0].offset_x);
        assert_eq!(shift, shifted.boxes[1].offset_x);
        assert_eq!(centered.boxes[1].offset_y, shifted.boxes[1].offset_y);
    }

    #[test]
    fn boxes_counter_rotate() {
        let layout = lay_out(&Lockup::build().text1("A").text2("B").build());
        assert_eq!(layout.boxes[0].angle, -layout.boxes[1].angle);
        assert!(layout.boxes[0].angle != 0.0);
    }
}
