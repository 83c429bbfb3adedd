//! Read-only view of the plot components the layout is computed for
//!
//! The layout never talks to concrete widgets. Everything it needs from the
//! legend, the title and footer labels, the four scales and the canvas is
//! queried through the traits in this module, and text is measured through
//! [`TextMetrics`].

use crate::axis::Axis;
use crate::geometry::{LayoutSize, Margins};
use serde::{Deserialize, Serialize};

/// Extent used when a scale is asked for its thickness without a length limit
pub const UNBOUNDED_LENGTH: i32 = 16_777_215;

/// Scroll direction of a legend scrollbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Font description passed to text measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub point_size: f64,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            point_size: 10.0,
        }
    }
}

impl Font {
    pub fn new(family: impl Into<String>, point_size: f64) -> Self {
        Self {
            family: family.into(),
            point_size,
        }
    }
}

/// A piece of label text, optionally carrying its own font
///
/// Text without a font is rendered with the font of the widget showing it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelText {
    pub text: String,
    #[serde(default)]
    pub font: Option<Font>,
}

impl LabelText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: None,
        }
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Copy of this text that uses `font` unless it already has its own
    pub fn resolved(&self, font: &Font) -> LabelText {
        LabelText {
            text: self.text.clone(),
            font: Some(self.font.clone().unwrap_or_else(|| font.clone())),
        }
    }
}

/// External text measurement capability
pub trait TextMetrics {
    /// Height needed to render `text` when wrapped to `width`
    fn height_for_width(&self, text: &LabelText, width: f64) -> f64;
}

/// Height of a scale title wrapped to `width`, including the scale spacing
///
/// Empty titles take no space.
pub fn title_height_for_width(
    metrics: &dyn TextMetrics,
    title: &LabelText,
    spacing: i32,
    width: f64,
) -> i32 {
    if title.is_empty() {
        return 0;
    }
    metrics.height_for_width(title, width).ceil() as i32 + spacing
}

/// Legend queries used by the layout
pub trait LegendInfo {
    fn frame_width(&self) -> i32;

    /// Extent of the scrollbar for the given orientation
    fn scroll_extent(&self, orientation: Orientation) -> i32;

    fn size_hint(&self) -> LayoutSize;

    /// Height the legend needs when it is `width` pixels wide
    fn height_for_width(&self, width: i32) -> i32;

    fn is_empty(&self) -> bool;
}

/// Title and footer label queries used by the layout
pub trait TextLabelInfo {
    fn text(&self) -> &LabelText;

    /// Font of the label widget, used for text without its own font
    fn font(&self) -> &Font;

    fn frame_width(&self) -> i32;

    /// Height of the whole label, frame included, for the given width
    fn height_for_width(&self, width: i32) -> i32;
}

/// Axis scale queries used by the layout
pub trait ScaleInfo {
    fn font(&self) -> &Font;

    /// Distance from the start of the widget to the first tick position
    fn start_border_dist(&self) -> i32;

    /// Distance from the last tick position to the end of the widget
    fn end_border_dist(&self) -> i32;

    /// Minimum `(start, end)` border distances the labels need
    fn border_dist_hint(&self) -> (i32, i32);

    /// Distance between the widget edge and the backbone
    fn margin(&self) -> i32;

    /// Distance between the labels and the title
    fn spacing(&self) -> i32;

    fn has_ticks(&self) -> bool;

    fn max_tick_length(&self) -> f64;

    /// Thickness of the scale, title included, for a given length
    fn dim_for_length(&self, length: i32, font: &Font) -> i32;

    fn title(&self) -> &LabelText;

    fn minimum_size_hint(&self) -> LayoutSize;
}

/// Canvas queries used by the layout
pub trait CanvasInfo {
    /// Frame and padding of the canvas on each edge
    fn contents_margins(&self) -> Margins;

    fn minimum_size(&self) -> LayoutSize;
}

/// Everything a layout pass needs to know about a plot
pub trait PlotComponents {
    fn legend(&self) -> Option<&dyn LegendInfo>;

    fn title_label(&self) -> Option<&dyn TextLabelInfo>;

    fn footer_label(&self) -> Option<&dyn TextLabelInfo>;

    fn axis_enabled(&self, axis: Axis) -> bool;

    fn axis_widget(&self, axis: Axis) -> Option<&dyn ScaleInfo>;

    fn canvas(&self) -> &dyn CanvasInfo;

    fn text_metrics(&self) -> &dyn TextMetrics;

    /// The scale widget of an axis, if the axis is enabled
    fn enabled_scale(&self, axis: Axis) -> Option<&dyn ScaleInfo> {
        if self.axis_enabled(axis) {
            self.axis_widget(axis)
        } else {
            None
        }
    }

    /// A legend that is present and has something to show
    fn visible_legend(&self) -> Option<&dyn LegendInfo> {
        self.legend().filter(|legend| !legend.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLines(f64);

    impl TextMetrics for FixedLines {
        fn height_for_width(&self, _text: &LabelText, width: f64) -> f64 {
            if width < 100.0 {
                self.0 * 2.0
            } else {
                self.0
            }
        }
    }

    #[test]
    fn test_resolved_font_prefers_own_font() {
        let widget_font = Font::new("serif", 12.0);
        let own = LabelText::new("a").with_font(Font::new("mono", 8.0));
        assert_eq!(own.resolved(&widget_font).font, Some(Font::new("mono", 8.0)));

        let plain = LabelText::new("b");
        assert_eq!(plain.resolved(&widget_font).font, Some(widget_font));
    }

    #[test]
    fn test_title_height_for_width() {
        let metrics = FixedLines(10.5);
        let title = LabelText::new("Time");
        assert_eq!(title_height_for_width(&metrics, &title, 2, 500.0), 13);
        assert_eq!(title_height_for_width(&metrics, &title, 2, 50.0), 23);
        assert_eq!(title_height_for_width(&metrics, &LabelText::default(), 2, 50.0), 0);
    }
}
