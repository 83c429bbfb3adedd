//! Line break expansion
//!
//! Title, footer and axis labels wrap depending on the space they get, and
//! the space each of them gets depends on the others: a taller x axis leaves
//! less height for the y axes, a y axis title that wraps gets wider and leaves
//! less width for the x axes, and so on. The expansion repeats measuring all
//! of them until a full pass changes nothing.

use crate::axis::{Axis, AxisMap};
use crate::components::{title_height_for_width, TextMetrics};
use crate::config::LayoutConfig;
use crate::geometry::LayoutRect;
use crate::options::LayoutOptions;
use crate::snapshot::{LabelData, LayoutData};

/// Upper bound for expansion passes
pub const MAX_EXPAND_PASSES: usize = 64;

/// Expanded dimensions of title, footer and axes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineBreakExpansion {
    /// Height of the title
    pub title: i32,
    /// Height of the footer
    pub footer: i32,
    /// Thickness of each axis, across its backbone
    pub axes: AxisMap<i32>,
    /// Number of passes until nothing grew, the final pass included
    pub passes: usize,
}

/// Distance between the canvas border and the backbone of each axis
pub fn backbone_offsets(
    config: &LayoutConfig,
    data: &LayoutData,
    options: LayoutOptions,
) -> AxisMap<i32> {
    AxisMap::from_fn(|axis| {
        let mut offset = 0;
        if !options.contains(LayoutOptions::IGNORE_FRAMES) {
            offset += data.canvas.contents_margins[axis];
        }
        if !config.align_canvas_to_scales[axis] {
            offset += config.canvas_margins[axis];
        }
        offset
    })
}

/// Find the dimensions of title, footer and axes including all line breaks
///
/// Dimensions only ever grow, so the loop stops once the labels have all the
/// room they ask for. A pass limit guards against measurements that keep
/// growing.
pub fn expand_line_breaks(
    config: &LayoutConfig,
    data: &LayoutData,
    metrics: &dyn TextMetrics,
    options: LayoutOptions,
    rect: &LayoutRect,
) -> LineBreakExpansion {
    let backbone = backbone_offsets(config, data, options);
    let mut dims = LineBreakExpansion::default();

    loop {
        dims.passes += 1;
        let mut done = true;

        if !options.contains(LayoutOptions::IGNORE_TITLE) && !data.title.text.is_empty() {
            let d = label_dim(&data.title, data, &dims.axes, metrics, options, rect);
            if d > dims.title {
                dims.title = d;
                done = false;
            }
        }

        if !options.contains(LayoutOptions::IGNORE_FOOTER) && !data.footer.text.is_empty() {
            let d = label_dim(&data.footer, data, &dims.axes, metrics, options, rect);
            if d > dims.footer {
                dims.footer = d;
                done = false;
            }
        }

        for axis in Axis::ALL {
            let scale = &data.scales[axis];
            if !scale.enabled {
                continue;
            }

            let length = if axis.is_x_axis() {
                x_axis_length(axis, data, &dims, &backbone, rect)
            } else {
                y_axis_length(axis, config, data, &dims, &backbone, rect)
            };

            let d = scale.dim_without_title
                + title_height_for_width(metrics, &scale.title, scale.title_spacing, length.floor());

            if d > dims.axes[axis] {
                dims.axes[axis] = d;
                done = false;
            }
        }

        tracing::trace!(
            target: "plot_layout::expand",
            pass = dims.passes,
            title = dims.title,
            footer = dims.footer,
            y_left = dims.axes.y_left,
            y_right = dims.axes.y_right,
            x_bottom = dims.axes.x_bottom,
            x_top = dims.axes.x_top,
            "expansion pass"
        );

        if done {
            break;
        }
        if dims.passes >= MAX_EXPAND_PASSES {
            tracing::warn!(
                "Line break expansion did not settle after {} passes, using current dimensions",
                dims.passes
            );
            break;
        }
    }

    dims
}

/// Height of a title or footer label
fn label_dim(
    label: &LabelData,
    data: &LayoutData,
    axes: &AxisMap<i32>,
    metrics: &dyn TextMetrics,
    options: LayoutOptions,
    rect: &LayoutRect,
) -> i32 {
    let mut width = rect.width;

    // with a single y axis the label is centered on the canvas
    if data.y_axes_asymmetric() {
        width -= (axes[Axis::YLeft] + axes[Axis::YRight]) as f64;
    }

    let mut d = metrics.height_for_width(&label.text, width).ceil() as i32;
    if !options.contains(LayoutOptions::IGNORE_FRAMES) {
        d += 2 * label.frame_width;
    }
    d
}

/// Backbone length available to a horizontal axis
fn x_axis_length(
    axis: Axis,
    data: &LayoutData,
    dims: &LineBreakExpansion,
    backbone: &AxisMap<i32>,
    rect: &LayoutRect,
) -> f64 {
    let scale = &data.scales[axis];
    let left = dims.axes[Axis::YLeft];
    let right = dims.axes[Axis::YRight];

    let mut length = rect.width - (left + right) as f64;
    length -= (scale.start + scale.end) as f64;

    if right > 0 {
        length -= 1.0;
    }

    length += left.min(scale.start - backbone[Axis::YLeft]) as f64;
    length += right.min(scale.end - backbone[Axis::YRight]) as f64;
    length
}

/// Backbone length available to a vertical axis
fn y_axis_length(
    axis: Axis,
    config: &LayoutConfig,
    data: &LayoutData,
    dims: &LineBreakExpansion,
    backbone: &AxisMap<i32>,
    rect: &LayoutRect,
) -> f64 {
    let scale = &data.scales[axis];
    let bottom = dims.axes[Axis::XBottom];
    let top = dims.axes[Axis::XTop];

    let mut length = rect.height - (top + bottom) as f64;
    length -= (scale.start + scale.end) as f64;
    length -= 1.0;

    if bottom <= 0 {
        length -= 1.0;
    }
    if top <= 0 {
        length -= 1.0;
    }

    if bottom > 0 {
        length += data.scales[Axis::XBottom]
            .tick_offset
            .min((scale.start - backbone[Axis::XBottom]) as f64);
    }
    if top > 0 {
        length += data.scales[Axis::XTop]
            .tick_offset
            .min((scale.end - backbone[Axis::XTop]) as f64);
    }

    if dims.title > 0 {
        length -= (dims.title + config.spacing) as f64;
    }
    length
}
