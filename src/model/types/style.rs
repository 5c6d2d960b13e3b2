//! Module defining the lockup architecture enums.

#![allow(missing_docs)]  // Because IterVariants! produces undocumented methods.


macro_attr! {
    /// Overall style of the two-box stack.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
             Deserialize, IterVariants!(Styles))]
    #[serde(rename_all = "lowercase")]
    pub enum Style {
        /// The boxes sit apart, separated by the standard distance unit.
        Standard,
        /// The second box is pulled up under the first for the bionic overlap.
        Overlapping,
    }
}

macro_attr! {
    /// Horizontal composition of the two boxes.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
             Deserialize, IterVariants!(Compositions))]
    #[serde(rename_all = "lowercase")]
    pub enum Composition {
        /// Both boxes share the same horizontal center.
        Range,
        /// The second box is shifted sideways per the alignment
        /// (the "bionic shift").
        Offset,
    }
}

macro_attr! {
    /// Which of the two boxes paints on top at their shared seam.
    ///
    /// Stacking only controls the paint order; it never moves a box.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
             Deserialize, IterVariants!(Stackings))]
    #[serde(rename_all = "lowercase")]
    pub enum Stacking {
        /// Box 1 paints over box 2.
        Box1,
        /// Box 2 paints over box 1.
        Box2,
    }
}

impl Stacking {
    /// The box that paints on top under this stacking.
    #[inline]
    pub fn top(self) -> BoxIndex {
        match self {
            Stacking::Box1 => BoxIndex::First,
            Stacking::Box2 => BoxIndex::Second,
        }
    }
}

macro_attr! {
    /// Identifies one of the two lockup boxes.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
             IterVariants!(BoxIndexes))]
    pub enum BoxIndex {
        /// The first (upper) box.
        First,
        /// The second (lower) box.
        Second,
    }
}


#[cfg(test)]
mod tests {
    use super::{BoxIndex, Stacking};

    #[test]
    fn stacking_picks_the_top_box() {
        assert_eq!(BoxIndex::First, Stacking::Box1.top());
        assert_eq!(BoxIndex::Second, Stacking::Box2.top());
    }
}
