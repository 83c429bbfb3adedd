//! Legend placement
//!
//! The legend first gets a strip at one edge of the plot rectangle, bounded by
//! the legend ratio. Once the canvas is known the strip is aligned to it.

use crate::config::{LayoutConfig, LegendPosition};
use crate::geometry::LayoutRect;
use crate::options::LayoutOptions;
use crate::snapshot::LegendData;

/// Find the strip for the legend inside `rect`
pub fn layout_legend(
    config: &LayoutConfig,
    legend: &LegendData,
    options: LayoutOptions,
    rect: &LayoutRect,
) -> LayoutRect {
    let hint = legend.hint;

    let dim = if config.legend_position.is_beside() {
        let mut dim = hint.width.min((rect.width * config.legend_ratio) as i32);

        // a legend taller than the plot needs room for its scrollbar
        if !options.contains(LayoutOptions::IGNORE_SCROLLBARS) && hint.height as f64 > rect.height {
            dim += legend.h_scroll_extent;
        }
        dim
    } else {
        hint.height
            .min((rect.height * config.legend_ratio) as i32)
            .max(legend.v_scroll_extent)
    };
    let dim = dim as f64;

    let mut legend_rect = *rect;
    match config.legend_position {
        LegendPosition::Left => {
            legend_rect.set_width(dim);
        }
        LegendPosition::Right => {
            legend_rect.set_left(rect.right() - dim);
            legend_rect.set_width(dim);
        }
        LegendPosition::Top => {
            legend_rect.set_height(dim);
        }
        LegendPosition::Bottom => {
            legend_rect.set_top(rect.bottom() - dim);
            legend_rect.set_height(dim);
        }
    }
    legend_rect
}

/// Align the legend strip to the canvas when the legend fits beside it
pub fn align_legend(
    config: &LayoutConfig,
    legend: &LegendData,
    canvas_rect: &LayoutRect,
    legend_rect: &LayoutRect,
) -> LayoutRect {
    let mut aligned = *legend_rect;

    if config.legend_position.is_beside() {
        if (legend.hint.height as f64) < canvas_rect.height {
            aligned.y = canvas_rect.y;
            aligned.height = canvas_rect.height;
        }
    } else if (legend.hint.width as f64) < canvas_rect.width {
        aligned.x = canvas_rect.x;
        aligned.width = canvas_rect.width;
    }
    aligned
}
