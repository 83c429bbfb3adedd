//! Axis identities and per-axis storage

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// The four axis positions around the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    YLeft,
    YRight,
    XBottom,
    XTop,
}

impl Axis {
    /// All axes, in index order
    pub const ALL: [Axis; 4] = [Axis::YLeft, Axis::YRight, Axis::XBottom, Axis::XTop];

    /// Look up an axis by its numeric index; out-of-range indices yield `None`
    pub fn from_index(index: usize) -> Option<Axis> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Axis::YLeft => 0,
            Axis::YRight => 1,
            Axis::XBottom => 2,
            Axis::XTop => 3,
        }
    }

    /// True for the horizontal scales above and below the canvas
    pub fn is_x_axis(self) -> bool {
        matches!(self, Axis::XBottom | Axis::XTop)
    }

    /// True for the vertical scales left and right of the canvas
    pub fn is_y_axis(self) -> bool {
        !self.is_x_axis()
    }
}

/// One value per axis, stored in named slots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisMap<T> {
    pub y_left: T,
    pub y_right: T,
    pub x_bottom: T,
    pub x_top: T,
}

impl<T> AxisMap<T> {
    pub fn new(y_left: T, y_right: T, x_bottom: T, x_top: T) -> Self {
        Self {
            y_left,
            y_right,
            x_bottom,
            x_top,
        }
    }

    /// Build a map by evaluating `f` for every axis
    pub fn from_fn(mut f: impl FnMut(Axis) -> T) -> Self {
        Self {
            y_left: f(Axis::YLeft),
            y_right: f(Axis::YRight),
            x_bottom: f(Axis::XBottom),
            x_top: f(Axis::XTop),
        }
    }

    /// Iterate over `(axis, value)` pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (Axis, &T)> {
        Axis::ALL.into_iter().map(move |axis| (axis, &self[axis]))
    }

    pub fn map<U>(&self, mut f: impl FnMut(Axis, &T) -> U) -> AxisMap<U> {
        AxisMap::from_fn(|axis| f(axis, &self[axis]))
    }
}

impl<T: Clone> AxisMap<T> {
    /// The same value for every axis
    pub fn splat(value: T) -> Self {
        Self::new(value.clone(), value.clone(), value.clone(), value)
    }
}

impl<T> Index<Axis> for AxisMap<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        match axis {
            Axis::YLeft => &self.y_left,
            Axis::YRight => &self.y_right,
            Axis::XBottom => &self.x_bottom,
            Axis::XTop => &self.x_top,
        }
    }
}

impl<T> IndexMut<Axis> for AxisMap<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::YLeft => &mut self.y_left,
            Axis::YRight => &mut self.y_right,
            Axis::XBottom => &mut self.x_bottom,
            Axis::XTop => &mut self.x_top,
        }
    }
}
