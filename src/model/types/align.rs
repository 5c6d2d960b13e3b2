//! Module defining the alignment enum.

#![allow(missing_docs)]  // Because IterVariants! produces undocumented methods.


macro_attr! {
    /// Horizontal alignment of the lockup group within the frame.
    ///
    /// Under the `Offset` composition, the alignment also decides
    /// which way the second box is shifted.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
             Deserialize, IterVariants!(Alignments))]
    #[serde(rename_all = "lowercase")]
    pub enum Alignment {
        /// Left alignment.
        Left,
        /// Horizontal centering.
        Center,
        /// Right alignment.
        Right,
    }
}
