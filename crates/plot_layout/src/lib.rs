//! Plot Layout - Geometry of 2-D plot widgets
//!
//! This crate distributes the area of a plot among its components:
//! - A title above and a footer below the plot
//! - A legend in a strip along one of the edges
//! - Up to four axis scales around the canvas
//! - The canvas the data is drawn on
//!
//! Title, footer and axis labels wrap depending on the space they get, so
//! their sizes are resolved together before the scales are aligned to the
//! canvas. The plot itself is only seen through the traits in
//! [`components`]; [`scene`] provides a plain value description of a plot
//! that can be loaded from JSON.

mod align;
mod axis;
pub mod components;
mod config;
mod error;
mod expand;
mod geometry;
mod layout;
mod legend;
mod options;
pub mod scene;
mod size_hint;
mod snapshot;

pub use align::*;
pub use axis::*;
pub use config::*;
pub use error::*;
pub use expand::*;
pub use geometry::*;
pub use layout::*;
pub use legend::*;
pub use options::*;
pub use size_hint::*;
pub use snapshot::*;
