//! Options for a single layout pass

use std::ops::{BitOr, BitOrAssign};

/// Set of flags that suppress contributions to one layout pass
///
/// The flags never change the stored configuration of the layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LayoutOptions(u8);

impl LayoutOptions {
    /// No flags set
    pub const NONE: LayoutOptions = LayoutOptions(0);
    /// Leave no space for the legend
    pub const IGNORE_LEGEND: LayoutOptions = LayoutOptions(0x01);
    /// Do not reserve room for legend scrollbars
    pub const IGNORE_SCROLLBARS: LayoutOptions = LayoutOptions(0x02);
    /// Ignore frames and content margins of title, footer and canvas
    pub const IGNORE_FRAMES: LayoutOptions = LayoutOptions(0x04);
    /// Leave no space for the title
    pub const IGNORE_TITLE: LayoutOptions = LayoutOptions(0x08);
    /// Leave no space for the footer
    pub const IGNORE_FOOTER: LayoutOptions = LayoutOptions(0x10);

    pub fn contains(self, other: LayoutOptions) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, other: LayoutOptions) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: LayoutOptions) {
        self.0 &= !other.0;
    }
}

impl BitOr for LayoutOptions {
    type Output = LayoutOptions;

    fn bitor(self, rhs: LayoutOptions) -> LayoutOptions {
        LayoutOptions(self.0 | rhs.0)
    }
}

impl BitOrAssign for LayoutOptions {
    fn bitor_assign(&mut self, rhs: LayoutOptions) {
        self.0 |= rhs.0;
    }
}
