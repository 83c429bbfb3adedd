//! Plot layout state and activation
//!
//! [`PlotLayout`] owns the layout configuration, the snapshot of the last pass
//! and the resulting rectangles. [`PlotLayout::activate`] distributes a plot
//! rectangle among the components:
//!
//! ```text
//! +---+-----------+---+
//! |       Title       |
//! +---+-----------+---+
//! |   |   Axis    |   |
//! +---+-----------+---+
//! | A |           | A |
//! | x |  Canvas   | x |
//! | i |           | i |
//! | s |           | s |
//! +---+-----------+---+
//! |   |   Axis    |   |
//! +---+-----------+---+
//! |      Footer       |
//! +---+-----------+---+
//! ```
//!
//! with the legend in a strip along one of the edges.

use crate::align::align_scales;
use crate::axis::{Axis, AxisMap};
use crate::components::{PlotComponents, TextMetrics};
use crate::config::{LayoutConfig, LegendPosition};
use crate::expand::{expand_line_breaks, LineBreakExpansion};
use crate::geometry::{LayoutRect, LayoutSize};
use crate::legend::{align_legend, layout_legend};
use crate::options::LayoutOptions;
use crate::size_hint::minimum_size_hint;
use crate::snapshot::LayoutData;
use serde::{Deserialize, Serialize};

/// Geometry computed by a layout pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub title_rect: LayoutRect,
    pub footer_rect: LayoutRect,
    pub legend_rect: LayoutRect,
    pub canvas_rect: LayoutRect,
    pub scale_rects: AxisMap<LayoutRect>,
}

/// Layout engine of a plot
#[derive(Debug, Clone, Default)]
pub struct PlotLayout {
    config: LayoutConfig,
    data: LayoutData,
    result: LayoutResult,
}

impl PlotLayout {
    /// Create a layout with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a layout with a given configuration
    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            config: config.sanitized(),
            ..Self::default()
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Set the canvas margin of all axes; -1 means no margin
    pub fn set_canvas_margin(&mut self, margin: i32) {
        self.config.canvas_margins = AxisMap::splat(margin.max(-1));
    }

    /// Set the canvas margin of one axis; -1 means no margin
    pub fn set_axis_canvas_margin(&mut self, axis: Axis, margin: i32) {
        self.config.canvas_margins[axis] = margin.max(-1);
    }

    pub fn canvas_margin(&self, axis: Axis) -> i32 {
        self.config.canvas_margins[axis]
    }

    /// Align the canvas to the backbone of all scales
    pub fn set_align_canvas_to_scales(&mut self, on: bool) {
        self.config.align_canvas_to_scales = AxisMap::splat(on);
    }

    /// Align the canvas border next to `axis` to its scale backbone
    ///
    /// The ends of the other scales are moved so that they line up with the
    /// aligned border.
    pub fn set_align_canvas_to_scale(&mut self, axis: Axis, on: bool) {
        self.config.align_canvas_to_scales[axis] = on;
    }

    pub fn align_canvas_to_scale(&self, axis: Axis) -> bool {
        self.config.align_canvas_to_scales[axis]
    }

    /// Set the legend position, resetting the ratio to its default
    pub fn set_legend_position(&mut self, position: LegendPosition) {
        self.set_legend_position_with_ratio(position, 0.0);
    }

    /// Set the legend position and the ratio it may take from the plot
    ///
    /// Ratios above 1 are clamped to 1, non-positive ratios take the default
    /// of the position.
    pub fn set_legend_position_with_ratio(&mut self, position: LegendPosition, ratio: f64) {
        self.config.legend_position = position;
        self.config.legend_ratio = position.clamp_ratio(ratio);
    }

    pub fn legend_position(&self) -> LegendPosition {
        self.config.legend_position
    }

    pub fn set_legend_ratio(&mut self, ratio: f64) {
        let position = self.config.legend_position;
        self.set_legend_position_with_ratio(position, ratio);
    }

    pub fn legend_ratio(&self) -> f64 {
        self.config.legend_ratio
    }

    /// Set the distance between the components, never negative
    pub fn set_spacing(&mut self, spacing: i32) {
        self.config.spacing = spacing.max(0);
    }

    pub fn spacing(&self) -> i32 {
        self.config.spacing
    }

    pub fn result(&self) -> &LayoutResult {
        &self.result
    }

    /// Snapshot taken by the last layout pass
    pub fn layout_data(&self) -> &LayoutData {
        &self.data
    }

    pub fn title_rect(&self) -> LayoutRect {
        self.result.title_rect
    }

    pub fn set_title_rect(&mut self, rect: LayoutRect) {
        self.result.title_rect = rect;
    }

    pub fn footer_rect(&self) -> LayoutRect {
        self.result.footer_rect
    }

    pub fn set_footer_rect(&mut self, rect: LayoutRect) {
        self.result.footer_rect = rect;
    }

    pub fn legend_rect(&self) -> LayoutRect {
        self.result.legend_rect
    }

    pub fn set_legend_rect(&mut self, rect: LayoutRect) {
        self.result.legend_rect = rect;
    }

    pub fn canvas_rect(&self) -> LayoutRect {
        self.result.canvas_rect
    }

    pub fn set_canvas_rect(&mut self, rect: LayoutRect) {
        self.result.canvas_rect = rect;
    }

    pub fn scale_rect(&self, axis: Axis) -> LayoutRect {
        self.result.scale_rects[axis]
    }

    pub fn set_scale_rect(&mut self, axis: Axis, rect: LayoutRect) {
        self.result.scale_rects[axis] = rect;
    }

    /// Scale rectangle by axis index; unknown indices give an empty rectangle
    pub fn scale_rect_by_index(&self, index: usize) -> LayoutRect {
        Axis::from_index(index)
            .map(|axis| self.scale_rect(axis))
            .unwrap_or_default()
    }

    /// Set a scale rectangle by axis index; unknown indices are ignored
    pub fn set_scale_rect_by_index(&mut self, index: usize, rect: LayoutRect) {
        if let Some(axis) = Axis::from_index(index) {
            self.set_scale_rect(axis, rect);
        }
    }

    /// Reset all result rectangles; the configuration is kept
    pub fn invalidate(&mut self) {
        self.result = LayoutResult::default();
    }

    /// Minimum size needed to lay out `plot`
    pub fn minimum_size_hint(&self, plot: &dyn PlotComponents) -> LayoutSize {
        minimum_size_hint(&self.config, plot)
    }

    /// Legend strip inside `rect`, based on the current snapshot
    pub fn layout_legend(&self, options: LayoutOptions, rect: &LayoutRect) -> LayoutRect {
        layout_legend(&self.config, &self.data.legend, options, rect)
    }

    /// Legend strip aligned to the canvas, based on the current snapshot
    pub fn align_legend(&self, canvas_rect: &LayoutRect, legend_rect: &LayoutRect) -> LayoutRect {
        align_legend(&self.config, &self.data.legend, canvas_rect, legend_rect)
    }

    /// Dimensions of title, footer and axes inside `rect`, based on the
    /// current snapshot
    pub fn expand_line_breaks(
        &self,
        options: LayoutOptions,
        rect: &LayoutRect,
        metrics: &dyn TextMetrics,
    ) -> LineBreakExpansion {
        expand_line_breaks(&self.config, &self.data, metrics, options, rect)
    }

    /// Align scale rectangles and canvas, based on the current snapshot
    pub fn align_scales(
        &self,
        options: LayoutOptions,
        canvas_rect: &mut LayoutRect,
        scale_rects: &mut AxisMap<LayoutRect>,
    ) {
        align_scales(&self.config, &self.data, options, canvas_rect, scale_rects);
    }

    /// Recalculate the geometry of all components of `plot` inside `plot_rect`
    pub fn activate(
        &mut self,
        plot: &dyn PlotComponents,
        plot_rect: &LayoutRect,
        options: LayoutOptions,
    ) {
        self.invalidate();

        // undistributed rest of the plot rectangle
        let mut rect = *plot_rect;
        self.data = LayoutData::extract(plot, &rect);

        let spacing = self.config.spacing as f64;
        let mut result = LayoutResult::default();

        if !options.contains(LayoutOptions::IGNORE_LEGEND) && plot.visible_legend().is_some() {
            result.legend_rect = self.layout_legend(options, &rect);
            rect = rect.subtracted(&result.legend_rect);

            match self.config.legend_position {
                LegendPosition::Left => rect.set_left(rect.left() + spacing),
                LegendPosition::Right => rect.set_right(rect.right() - spacing),
                LegendPosition::Top => rect.set_top(rect.top() + spacing),
                LegendPosition::Bottom => rect.set_bottom(rect.bottom() - spacing),
            }
        }

        let dims = self.expand_line_breaks(options, &rect, plot.text_metrics());
        let axes = dims.axes;

        // with a single y axis title and footer are centered on the canvas
        let center_on_canvas = self.data.y_axes_asymmetric();
        let canvas_columns = |rect: &LayoutRect, label: &mut LayoutRect| {
            label.x = rect.left() + axes[Axis::YLeft] as f64;
            label.width = rect.width - (axes[Axis::YLeft] + axes[Axis::YRight]) as f64;
        };

        if dims.title > 0 {
            result
                .title_rect
                .set_rect(rect.left(), rect.top(), rect.width, dims.title as f64);
            rect.set_top(result.title_rect.bottom() + spacing);

            if center_on_canvas {
                canvas_columns(&rect, &mut result.title_rect);
            }
        }

        if dims.footer > 0 {
            result.footer_rect.set_rect(
                rect.left(),
                rect.bottom() - dims.footer as f64,
                rect.width,
                dims.footer as f64,
            );
            rect.set_bottom(result.footer_rect.top() - spacing);

            if center_on_canvas {
                canvas_columns(&rect, &mut result.footer_rect);
            }
        }

        result.canvas_rect = LayoutRect::new(
            rect.x + axes[Axis::YLeft] as f64,
            rect.y + axes[Axis::XTop] as f64,
            rect.width - (axes[Axis::YRight] + axes[Axis::YLeft]) as f64,
            rect.height - (axes[Axis::XBottom] + axes[Axis::XTop]) as f64,
        );

        let canvas = result.canvas_rect;
        for axis in Axis::ALL {
            let dim = axes[axis];
            if dim == 0 {
                continue;
            }

            let dim = dim as f64;
            let mut scale_rect = canvas;
            match axis {
                Axis::YLeft => {
                    scale_rect.x = canvas.left() - dim;
                    scale_rect.width = dim;
                }
                Axis::YRight => {
                    scale_rect.x = canvas.right();
                    scale_rect.width = dim;
                }
                Axis::XBottom => {
                    scale_rect.y = canvas.bottom();
                    scale_rect.height = dim;
                }
                Axis::XTop => {
                    scale_rect.y = canvas.top() - dim;
                    scale_rect.height = dim;
                }
            }
            result.scale_rects[axis] = scale_rect.normalized();
        }

        // the ticks, not the labels, line up with the canvas; scale ends
        // move into the free corners
        self.align_scales(options, &mut result.canvas_rect, &mut result.scale_rects);

        if !result.legend_rect.is_empty() {
            result.legend_rect = self.align_legend(&result.canvas_rect, &result.legend_rect);
        }

        tracing::debug!(
            canvas = ?result.canvas_rect,
            passes = dims.passes,
            "plot layout activated"
        );

        self.result = result;
    }
}
