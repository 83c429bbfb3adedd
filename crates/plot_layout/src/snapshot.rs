//! Layout snapshot
//!
//! All values a layout pass needs from the plot components are copied into a
//! [`LayoutData`] once at the start of the pass. The rest of the pass only
//! reads the snapshot, so the components cannot change underneath it.

use crate::axis::{Axis, AxisMap};
use crate::components::{
    title_height_for_width, Font, LabelText, Orientation, PlotComponents, TextLabelInfo,
    UNBOUNDED_LENGTH,
};
use crate::geometry::{LayoutRect, LayoutSize};

/// Legend values used for placement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegendData {
    pub frame_width: i32,
    pub h_scroll_extent: i32,
    pub v_scroll_extent: i32,
    /// Preferred size, with the width limited to the layout rectangle
    pub hint: LayoutSize,
}

/// Title or footer values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelData {
    /// Text with its font resolved against the label font
    pub text: LabelText,
    pub frame_width: i32,
}

/// Values of one axis scale; all zero when the axis is disabled
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScaleData {
    pub enabled: bool,
    pub font: Font,
    /// Start border distance
    pub start: i32,
    /// End border distance
    pub end: i32,
    pub baseline_offset: i32,
    /// Distance from the backbone to the end of the longest tick
    pub tick_offset: f64,
    /// Thickness of the scale without its title
    pub dim_without_title: i32,
    pub title: LabelText,
    pub title_spacing: i32,
}

/// Canvas values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanvasData {
    /// Content margin of the canvas edge next to each axis
    pub contents_margins: AxisMap<i32>,
}

/// Snapshot of all layout relevant values of a plot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutData {
    pub legend: LegendData,
    pub title: LabelData,
    pub footer: LabelData,
    pub scales: AxisMap<ScaleData>,
    pub canvas: CanvasData,
}

impl LayoutData {
    /// Extract the snapshot for a layout of `plot` inside `rect`
    pub fn extract(plot: &dyn PlotComponents, rect: &LayoutRect) -> Self {
        let metrics = plot.text_metrics();

        let legend = plot
            .legend()
            .map(|legend| {
                let hint = legend.size_hint();
                let width = hint.width.min(rect.width.floor() as i32);

                let mut height = legend.height_for_width(width);
                if height <= 0 {
                    height = hint.height;
                }

                LegendData {
                    frame_width: legend.frame_width(),
                    h_scroll_extent: legend.scroll_extent(Orientation::Horizontal),
                    v_scroll_extent: legend.scroll_extent(Orientation::Vertical),
                    hint: LayoutSize::new(width, height),
                }
            })
            .unwrap_or_default();

        let scales = AxisMap::from_fn(|axis| match plot.enabled_scale(axis) {
            Some(scale) => {
                let font = scale.font().clone();
                let title = scale.title().resolved(&font);
                let spacing = scale.spacing();

                let mut tick_offset = scale.margin() as f64;
                if scale.has_ticks() {
                    tick_offset += scale.max_tick_length();
                }

                let dim_without_title = scale.dim_for_length(UNBOUNDED_LENGTH, &font)
                    - title_height_for_width(metrics, &title, spacing, UNBOUNDED_LENGTH as f64);

                ScaleData {
                    enabled: true,
                    font,
                    start: scale.start_border_dist(),
                    end: scale.end_border_dist(),
                    baseline_offset: scale.margin(),
                    tick_offset,
                    dim_without_title,
                    title,
                    title_spacing: spacing,
                }
            }
            None => ScaleData::default(),
        });

        let margins = plot.canvas().contents_margins();
        let canvas = CanvasData {
            contents_margins: AxisMap::new(margins.left, margins.right, margins.bottom, margins.top),
        };

        Self {
            legend,
            title: label_data(plot.title_label()),
            footer: label_data(plot.footer_label()),
            scales,
            canvas,
        }
    }

    /// True when exactly one of the two y axes is enabled
    pub fn y_axes_asymmetric(&self) -> bool {
        self.scales[Axis::YLeft].enabled != self.scales[Axis::YRight].enabled
    }
}

fn label_data(label: Option<&dyn TextLabelInfo>) -> LabelData {
    match label {
        Some(label) => LabelData {
            text: label.text().resolved(label.font()),
            frame_width: label.frame_width(),
        },
        None => LabelData::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ScaleInfo;
    use crate::geometry::Margins;
    use crate::scene::{LabelSpec, LegendSpec, PlotScene, ScaleSpec};

    fn rect() -> LayoutRect {
        LayoutRect::new(0.0, 0.0, 400.0, 300.0)
    }

    #[test]
    fn test_disabled_axes_are_zeroed() {
        let scene = PlotScene::default()
            .with_axis(Axis::YLeft, ScaleSpec::default())
            .with_axis(Axis::XTop, ScaleSpec {
                enabled: false,
                ..ScaleSpec::default()
            });

        let data = LayoutData::extract(&scene, &rect());
        assert!(data.scales[Axis::YLeft].enabled);
        assert_eq!(data.scales[Axis::XTop], ScaleData::default());
        assert_eq!(data.scales[Axis::YRight], ScaleData::default());
        assert_eq!(data.scales[Axis::XBottom].dim_without_title, 0);
    }

    #[test]
    fn test_scale_values() {
        let spec = ScaleSpec {
            start_border_dist: 6,
            end_border_dist: 9,
            margin: 2,
            max_tick_length: 8.0,
            title: LabelText::new("Amplitude"),
            ..ScaleSpec::default()
        };
        let without_title = ScaleSpec {
            title: LabelText::default(),
            ..spec.clone()
        };
        let scene = PlotScene::default().with_axis(Axis::YLeft, spec);

        let data = LayoutData::extract(&scene, &rect());
        let scale = &data.scales[Axis::YLeft];
        assert_eq!(scale.start, 6);
        assert_eq!(scale.end, 9);
        assert_eq!(scale.baseline_offset, 2);
        assert_eq!(scale.tick_offset, 10.0);
        assert_eq!(scale.title.font, Some(scale.font.clone()));
        assert_eq!(
            scale.dim_without_title,
            without_title.dim_for_length(UNBOUNDED_LENGTH, &without_title.font)
        );
    }

    #[test]
    fn test_ticks_off_keep_margin_only() {
        let scene = PlotScene::default().with_axis(Axis::XBottom, ScaleSpec {
            ticks: false,
            margin: 3,
            ..ScaleSpec::default()
        });
        let data = LayoutData::extract(&scene, &rect());
        assert_eq!(data.scales[Axis::XBottom].tick_offset, 3.0);
    }

    #[test]
    fn test_legend_hint_clamped_to_rect() {
        let scene = PlotScene::default().with_legend(LegendSpec {
            item_width: 100,
            item_height: 20,
            item_count: 6,
            ..LegendSpec::default()
        });

        let data = LayoutData::extract(&scene, &rect());
        // six items in a row would need 600 pixels
        assert_eq!(data.legend.hint.width, 400);
        assert_eq!(data.legend.hint.height, 40);
    }

    #[test]
    fn test_legend_height_falls_back_to_hint() {
        let scene = PlotScene::default().with_legend(LegendSpec {
            item_width: 100,
            item_height: 20,
            item_count: 0,
            frame_width: 1,
            ..LegendSpec::default()
        });
        // an empty legend reports no height for any width
        let data = LayoutData::extract(&scene, &rect());
        assert_eq!(data.legend.hint, LayoutSize::new(2, 2));
    }

    #[test]
    fn test_labels_and_canvas_margins() {
        let scene = PlotScene::default()
            .with_title(LabelSpec::new("Pressure").with_frame_width(2))
            .with_canvas_margins(Margins::new(1, 2, 3, 4));

        let data = LayoutData::extract(&scene, &rect());
        assert_eq!(data.title.text.text, "Pressure");
        assert_eq!(data.title.frame_width, 2);
        assert!(data.title.text.font.is_some());
        assert!(data.footer.text.is_empty());

        let margins = &data.canvas.contents_margins;
        assert_eq!(margins[Axis::YLeft], 1);
        assert_eq!(margins[Axis::XTop], 2);
        assert_eq!(margins[Axis::YRight], 3);
        assert_eq!(margins[Axis::XBottom], 4);
    }
}
