//! Static plot descriptions
//!
//! A [`PlotScene`] describes the components of a plot with plain values and
//! implements every component trait on top of them. Text is measured with
//! [`HeuristicTextMetrics`], which is good enough to exercise the layout
//! without a font backend.

use crate::axis::{Axis, AxisMap};
use crate::components::{
    title_height_for_width, CanvasInfo, Font, LabelText, LegendInfo, Orientation,
    PlotComponents, ScaleInfo, TextLabelInfo, TextMetrics, UNBOUNDED_LENGTH,
};
use crate::geometry::{LayoutSize, Margins};
use crate::{LayoutError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Text measurement based on average glyph metrics
///
/// Glyphs are assumed to be 0.6em wide and lines 1.2em high. Text is wrapped
/// greedily at whitespace; words longer than a line are broken.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeuristicTextMetrics;

impl HeuristicTextMetrics {
    pub const GLYPH_WIDTH_EM: f64 = 0.6;
    pub const LINE_HEIGHT_EM: f64 = 1.2;

    /// Number of lines `text` takes when at most `max_chars` fit on a line
    pub fn line_count(text: &str, max_chars: usize) -> usize {
        let max_chars = max_chars.max(1);
        let mut lines = 0;

        for paragraph in text.split('\n') {
            lines += 1;
            let mut current = 0;

            for word in paragraph.split_whitespace() {
                let mut len = word.chars().count();
                if current > 0 && current + 1 + len <= max_chars {
                    current += 1 + len;
                    continue;
                }
                if current > 0 {
                    lines += 1;
                }
                while len > max_chars {
                    lines += 1;
                    len -= max_chars;
                }
                current = len;
            }
        }
        lines
    }
}

impl TextMetrics for HeuristicTextMetrics {
    fn height_for_width(&self, text: &LabelText, width: f64) -> f64 {
        if text.is_empty() {
            return 0.0;
        }

        let point_size = text
            .font
            .as_ref()
            .map_or_else(|| Font::default().point_size, |font| font.point_size);

        let glyph_width = point_size * Self::GLYPH_WIDTH_EM;
        let max_chars = (width / glyph_width).floor().max(1.0) as usize;

        Self::line_count(&text.text, max_chars) as f64 * point_size * Self::LINE_HEIGHT_EM
    }
}

/// A legend made of equally sized items flowing into a grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendSpec {
    pub item_width: i32,
    pub item_height: i32,
    pub item_count: usize,
    /// Maximum number of columns, 0 for no limit
    pub max_columns: usize,
    pub frame_width: i32,
    pub h_scroll_extent: i32,
    pub v_scroll_extent: i32,
}

impl Default for LegendSpec {
    fn default() -> Self {
        Self {
            item_width: 80,
            item_height: 20,
            item_count: 0,
            max_columns: 0,
            frame_width: 0,
            h_scroll_extent: 0,
            v_scroll_extent: 0,
        }
    }
}

/// Largest legend extent a scene description may ask for
pub const MAX_LEGEND_EXTENT: i64 = 1 << 24;

/// Extent of `cells` items of size `cell` inside a frame, saturating at `i32::MAX`
fn grid_extent(cells: usize, cell: i32, frame_width: i32) -> i32 {
    i32::try_from(cells)
        .unwrap_or(i32::MAX)
        .saturating_mul(cell)
        .saturating_add(frame_width.saturating_mul(2))
}

impl LegendSpec {
    /// Width and height of the legend laid out as a single row or column
    fn widest_extents(&self) -> (i64, i64) {
        let count = i64::try_from(self.item_count).unwrap_or(i64::MAX);
        let frame = 2 * self.frame_width as i64;
        (
            count.saturating_mul(self.item_width as i64).saturating_add(frame),
            count.saturating_mul(self.item_height as i64).saturating_add(frame),
        )
    }

    fn column_limit(&self) -> usize {
        if self.max_columns == 0 {
            self.item_count
        } else {
            self.max_columns.min(self.item_count)
        }
    }
}

impl LegendInfo for LegendSpec {
    fn frame_width(&self) -> i32 {
        self.frame_width
    }

    fn scroll_extent(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.h_scroll_extent,
            Orientation::Vertical => self.v_scroll_extent,
        }
    }

    fn size_hint(&self) -> LayoutSize {
        let columns = self.column_limit();
        let rows = if columns == 0 {
            0
        } else {
            self.item_count.div_ceil(columns)
        };
        LayoutSize::new(
            grid_extent(columns, self.item_width, self.frame_width),
            grid_extent(rows, self.item_height, self.frame_width),
        )
    }

    fn height_for_width(&self, width: i32) -> i32 {
        if self.is_empty() {
            return 0;
        }

        let inner = width.saturating_sub(self.frame_width.saturating_mul(2)).max(0);
        let fitting = (inner / self.item_width.max(1)).max(1) as usize;
        let columns = fitting.min(self.column_limit().max(1));
        let rows = self.item_count.div_ceil(columns);

        grid_extent(rows, self.item_height, self.frame_width)
    }

    fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

/// A title or footer label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSpec {
    pub text: LabelText,
    #[serde(default)]
    pub font: Font,
    #[serde(default)]
    pub frame_width: i32,
    /// Space between the frame and the text
    #[serde(default)]
    pub margin: i32,
}

impl LabelSpec {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: LabelText::new(text),
            font: Font::new("sans-serif", 14.0),
            frame_width: 0,
            margin: 0,
        }
    }

    pub fn with_frame_width(mut self, frame_width: i32) -> Self {
        self.frame_width = frame_width;
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }
}

impl TextLabelInfo for LabelSpec {
    fn text(&self) -> &LabelText {
        &self.text
    }

    fn font(&self) -> &Font {
        &self.font
    }

    fn frame_width(&self) -> i32 {
        self.frame_width
    }

    fn height_for_width(&self, width: i32) -> i32 {
        let border = 2 * (self.frame_width + self.margin);
        let text = self.text.resolved(&self.font);
        let height = HeuristicTextMetrics.height_for_width(&text, (width - border) as f64);
        height.ceil() as i32 + border
    }
}

/// An axis scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleSpec {
    pub enabled: bool,
    pub font: Font,
    pub start_border_dist: i32,
    pub end_border_dist: i32,
    pub margin: i32,
    pub spacing: i32,
    pub ticks: bool,
    pub max_tick_length: f64,
    /// Thickness of the tick labels across the scale
    pub label_extent: i32,
    /// Shortest backbone the scale accepts
    pub min_length: i32,
    pub title: LabelText,
    /// Set from the axis position when the scale is added to a scene
    #[serde(skip)]
    pub(crate) vertical: bool,
}

impl Default for ScaleSpec {
    fn default() -> Self {
        Self {
            enabled: true,
            font: Font::default(),
            start_border_dist: 0,
            end_border_dist: 0,
            margin: 2,
            spacing: 2,
            ticks: true,
            max_tick_length: 8.0,
            label_extent: 18,
            min_length: 50,
            title: LabelText::default(),
            vertical: false,
        }
    }
}

impl ScaleSpec {
    /// A scale without ticks and labels whose thickness is exactly `dim`
    pub fn with_thickness(dim: i32) -> Self {
        Self {
            margin: 0,
            spacing: 0,
            ticks: false,
            max_tick_length: 0.0,
            label_extent: dim,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = LabelText::new(title);
        self
    }

    pub fn with_border_dists(mut self, start: i32, end: i32) -> Self {
        self.start_border_dist = start;
        self.end_border_dist = end;
        self
    }
}

impl ScaleInfo for ScaleSpec {
    fn font(&self) -> &Font {
        &self.font
    }

    fn start_border_dist(&self) -> i32 {
        self.start_border_dist
    }

    fn end_border_dist(&self) -> i32 {
        self.end_border_dist
    }

    fn border_dist_hint(&self) -> (i32, i32) {
        (self.start_border_dist, self.end_border_dist)
    }

    fn margin(&self) -> i32 {
        self.margin
    }

    fn spacing(&self) -> i32 {
        self.spacing
    }

    fn has_ticks(&self) -> bool {
        self.ticks
    }

    fn max_tick_length(&self) -> f64 {
        self.max_tick_length
    }

    fn dim_for_length(&self, length: i32, font: &Font) -> i32 {
        let mut dim = self.margin + self.spacing + self.label_extent;
        if self.ticks {
            dim += self.max_tick_length.ceil() as i32;
        }
        dim + title_height_for_width(
            &HeuristicTextMetrics,
            &self.title.resolved(font),
            self.spacing,
            length as f64,
        )
    }

    fn title(&self) -> &LabelText {
        &self.title
    }

    fn minimum_size_hint(&self) -> LayoutSize {
        let length = self.min_length + self.start_border_dist + self.end_border_dist;
        let dim = self.dim_for_length(UNBOUNDED_LENGTH, &self.font);
        if self.vertical {
            LayoutSize::new(dim, length)
        } else {
            LayoutSize::new(length, dim)
        }
    }
}

/// The plot canvas
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSpec {
    pub contents_margins: Margins,
    pub minimum_size: LayoutSize,
}

impl CanvasInfo for CanvasSpec {
    fn contents_margins(&self) -> Margins {
        self.contents_margins
    }

    fn minimum_size(&self) -> LayoutSize {
        self.minimum_size
    }
}

/// A complete plot described by plain values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotScene {
    pub legend: Option<LegendSpec>,
    pub title: Option<LabelSpec>,
    pub footer: Option<LabelSpec>,
    pub scales: AxisMap<Option<ScaleSpec>>,
    pub canvas: CanvasSpec,
    #[serde(skip)]
    metrics: HeuristicTextMetrics,
}

impl PlotScene {
    /// A plot with a left and a bottom scale
    pub fn standard() -> Self {
        Self::default()
            .with_axis(Axis::YLeft, ScaleSpec::default())
            .with_axis(Axis::XBottom, ScaleSpec::default())
    }

    pub fn with_legend(mut self, legend: LegendSpec) -> Self {
        self.legend = Some(legend);
        self
    }

    pub fn with_title(mut self, title: LabelSpec) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_footer(mut self, footer: LabelSpec) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn with_axis(mut self, axis: Axis, mut scale: ScaleSpec) -> Self {
        scale.vertical = axis.is_y_axis();
        self.scales[axis] = Some(scale);
        self
    }

    pub fn without_axis(mut self, axis: Axis) -> Self {
        self.scales[axis] = None;
        self
    }

    pub fn with_canvas_margins(mut self, margins: Margins) -> Self {
        self.canvas.contents_margins = margins;
        self
    }

    /// Parse and validate a scene description
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut scene: PlotScene = serde_json::from_str(json)?;
        for axis in Axis::ALL {
            if let Some(scale) = scene.scales[axis].as_mut() {
                scale.vertical = axis.is_y_axis();
            }
        }
        scene.validate()?;
        Ok(scene)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Reject descriptions no real plot could produce
    pub fn validate(&self) -> Result<()> {
        if let Some(legend) = &self.legend {
            if legend.item_width <= 0 || legend.item_height < 0 {
                return Err(LayoutError::Scene(
                    "legend items need a positive width and a non-negative height".to_string(),
                ));
            }
            if legend.frame_width < 0 || legend.h_scroll_extent < 0 || legend.v_scroll_extent < 0 {
                return Err(LayoutError::Scene(
                    "legend frame and scroll extents must not be negative".to_string(),
                ));
            }
            let (width, height) = legend.widest_extents();
            if width > MAX_LEGEND_EXTENT || height > MAX_LEGEND_EXTENT {
                return Err(LayoutError::Scene(format!(
                    "legend of {} items does not fit into {} pixels",
                    legend.item_count, MAX_LEGEND_EXTENT
                )));
            }
        }

        for (name, label) in [("title", &self.title), ("footer", &self.footer)] {
            if let Some(label) = label {
                check_font(name, &label.font)?;
                if let Some(font) = &label.text.font {
                    check_font(&format!("{} text", name), font)?;
                }
                if label.frame_width < 0 || label.margin < 0 {
                    return Err(LayoutError::Scene(format!(
                        "{} frame width and margin must not be negative",
                        name
                    )));
                }
            }
        }

        for (axis, scale) in self.scales.iter() {
            if let Some(scale) = scale {
                let name = format!("{:?} scale", axis);
                check_font(&name, &scale.font)?;
                if let Some(font) = &scale.title.font {
                    check_font(&format!("{} title", name), font)?;
                }
                if scale.margin < 0
                    || scale.spacing < 0
                    || scale.label_extent < 0
                    || scale.min_length < 0
                    || scale.start_border_dist < 0
                    || scale.end_border_dist < 0
                    || scale.max_tick_length < 0.0
                {
                    return Err(LayoutError::Scene(format!(
                        "{} has a negative extent",
                        name
                    )));
                }
            }
        }

        let margins = self.canvas.contents_margins;
        if margins.left < 0 || margins.top < 0 || margins.right < 0 || margins.bottom < 0 {
            return Err(LayoutError::Scene(
                "canvas contents margins must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_font(name: &str, font: &Font) -> Result<()> {
    if font.point_size > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::Scene(format!(
            "{} font size must be positive",
            name
        )))
    }
}

impl PlotComponents for PlotScene {
    fn legend(&self) -> Option<&dyn LegendInfo> {
        self.legend.as_ref().map(|legend| legend as &dyn LegendInfo)
    }

    fn title_label(&self) -> Option<&dyn TextLabelInfo> {
        self.title.as_ref().map(|label| label as &dyn TextLabelInfo)
    }

    fn footer_label(&self) -> Option<&dyn TextLabelInfo> {
        self.footer.as_ref().map(|label| label as &dyn TextLabelInfo)
    }

    fn axis_enabled(&self, axis: Axis) -> bool {
        self.scales[axis].as_ref().is_some_and(|scale| scale.enabled)
    }

    fn axis_widget(&self, axis: Axis) -> Option<&dyn ScaleInfo> {
        self.scales[axis].as_ref().map(|scale| scale as &dyn ScaleInfo)
    }

    fn canvas(&self) -> &dyn CanvasInfo {
        &self.canvas
    }

    fn text_metrics(&self) -> &dyn TextMetrics {
        &self.metrics
    }
}
