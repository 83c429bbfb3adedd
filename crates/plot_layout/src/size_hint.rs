//! Minimum size estimation
//!
//! Estimates the smallest size at which every component of a plot still gets
//! its minimum size. Scale ends may overlap the neighbouring axis in the plot
//! corners, which is taken into account.

use crate::axis::{Axis, AxisMap};
use crate::components::{Orientation, PlotComponents};
use crate::config::LayoutConfig;
use crate::geometry::LayoutSize;

#[derive(Debug, Clone, Copy, Default)]
struct ScaleHint {
    width: i32,
    height: i32,
    min_start: i32,
    min_end: i32,
    tick_offset: i32,
}

/// Minimum size needed to lay out `plot` with `config`
pub fn minimum_size_hint(config: &LayoutConfig, plot: &dyn PlotComponents) -> LayoutSize {
    let canvas = plot.canvas();
    let margins = canvas.contents_margins();

    let mut hints = AxisMap::from_fn(|axis| match plot.enabled_scale(axis) {
        Some(scale) => {
            let hint = scale.minimum_size_hint();
            let (min_start, min_end) = scale.border_dist_hint();

            let mut tick_offset = scale.margin();
            if scale.has_ticks() {
                tick_offset += scale.max_tick_length().ceil() as i32;
            }

            ScaleHint {
                width: hint.width,
                height: hint.height,
                min_start,
                min_end,
                tick_offset,
            }
        }
        None => ScaleHint::default(),
    });

    let canvas_border = config
        .canvas_margins
        .map(|_, margin| margins.left + margin + 1);

    // scale ends reaching into the plot corners share space with the
    // neighbouring axis
    for axis in Axis::ALL {
        let neighbours = hints;
        let hint = &mut hints[axis];

        if axis.is_x_axis() && hint.width != 0 {
            let left = neighbours[Axis::YLeft];
            if hint.min_start > canvas_border[Axis::YLeft] && left.width != 0 {
                hint.width -= (hint.min_start - canvas_border[Axis::YLeft]).min(left.width);
            }

            let right = neighbours[Axis::YRight];
            if hint.min_end > canvas_border[Axis::YRight] && right.width != 0 {
                hint.width -= (hint.min_end - canvas_border[Axis::YRight]).min(right.width);
            }
        }

        if axis.is_y_axis() && hint.height != 0 {
            let bottom = neighbours[Axis::XBottom];
            if hint.min_end > canvas_border[Axis::XBottom] && bottom.height != 0 {
                hint.height -=
                    (hint.min_end - canvas_border[Axis::XBottom]).min(bottom.tick_offset);
            }

            let top = neighbours[Axis::XTop];
            if hint.min_start > canvas_border[Axis::XTop] && top.height != 0 {
                hint.height -= (hint.min_start - canvas_border[Axis::XTop]).min(top.tick_offset);
            }
        }
    }

    let min_canvas = canvas.minimum_size();
    let y_axes_width = hints[Axis::YLeft].width + hints[Axis::YRight].width;

    let canvas_width = hints[Axis::XBottom].width.max(hints[Axis::XTop].width)
        + margins.left
        + 1
        + margins.right
        + 1;
    let mut width = y_axes_width + canvas_width.max(min_canvas.width);

    let canvas_height = hints[Axis::YLeft].height.max(hints[Axis::YRight].height)
        + margins.top
        + 1
        + margins.bottom
        + 1;
    let mut height = hints[Axis::XBottom].height + hints[Axis::XTop].height
        + canvas_height.max(min_canvas.height);

    // a single y axis centers title and footer on the canvas
    let center_on_canvas = !(plot.axis_enabled(Axis::YLeft) && plot.axis_enabled(Axis::YRight));

    for label in [plot.title_label(), plot.footer_label()].into_iter().flatten() {
        if label.text().is_empty() {
            continue;
        }

        let mut label_width = width;
        if center_on_canvas {
            label_width -= y_axes_width;
        }

        let mut label_height = label.height_for_width(label_width);
        if label_height > label_width {
            // a long title in a narrow plot
            label_width = label_height;
            width = label_width;
            if center_on_canvas {
                width += y_axes_width;
            }
            label_height = label.height_for_width(label_width);
        }
        height += label_height + config.spacing;
    }

    if let Some(legend) = plot.visible_legend() {
        if config.legend_position.is_beside() {
            let mut legend_width = legend.size_hint().width;
            let legend_height = legend.height_for_width(legend_width);

            if legend.frame_width() > 0 {
                width += config.spacing;
            }
            if legend_height > height {
                legend_width =
                    legend_width.saturating_add(legend.scroll_extent(Orientation::Horizontal));
            }
            if config.legend_ratio < 1.0 {
                legend_width =
                    legend_width.min((width as f64 / (1.0 - config.legend_ratio)) as i32);
            }
            width = width.saturating_add(legend_width).saturating_add(config.spacing);
        } else {
            let legend_width = legend.size_hint().width.min(width);
            let mut legend_height = legend.height_for_width(legend_width);

            if legend.frame_width() > 0 {
                height += config.spacing;
            }
            if config.legend_ratio < 1.0 {
                legend_height =
                    legend_height.min((height as f64 / (1.0 - config.legend_ratio)) as i32);
            }
            height = height.saturating_add(legend_height).saturating_add(config.spacing);
        }
    }

    tracing::debug!(width, height, "minimum plot size");
    LayoutSize::new(width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LegendPosition;
    use crate::geometry::Margins;
    use crate::scene::{LabelSpec, LegendSpec, PlotScene, ScaleSpec};

    fn four_axes() -> PlotScene {
        Axis::ALL.iter().fold(PlotScene::default(), |scene, axis| {
            scene.with_axis(*axis, ScaleSpec::with_thickness(30))
        })
    }

    fn legend(frame_width: i32) -> LegendSpec {
        LegendSpec {
            item_count: 3,
            frame_width,
            ..LegendSpec::default()
        }
    }

    #[test]
    fn test_scales_and_canvas() {
        let config = LayoutConfig::default();
        assert_eq!(minimum_size_hint(&config, &four_axes()), LayoutSize::new(112, 112));

        let mut scene = four_axes();
        scene.canvas.minimum_size = LayoutSize::new(200, 150);
        assert_eq!(minimum_size_hint(&config, &scene), LayoutSize::new(260, 210));

        let framed = four_axes().with_canvas_margins(Margins::uniform(3));
        assert_eq!(minimum_size_hint(&config, &framed), LayoutSize::new(118, 118));
    }

    #[test]
    fn test_empty_plot() {
        let hint = minimum_size_hint(&LayoutConfig::default(), &PlotScene::default());
        assert_eq!(hint, LayoutSize::new(2, 2));
    }

    #[test]
    fn test_corner_shared_with_left_axis() {
        let scene = PlotScene::default()
            .with_axis(Axis::YLeft, ScaleSpec::with_thickness(30))
            .with_axis(Axis::XBottom, ScaleSpec::with_thickness(30).with_border_dists(20, 0));
        assert_eq!(
            minimum_size_hint(&LayoutConfig::default(), &scene),
            LayoutSize::new(87, 82)
        );

        let alone = scene.without_axis(Axis::YLeft);
        assert_eq!(
            minimum_size_hint(&LayoutConfig::default(), &alone),
            LayoutSize::new(72, 32)
        );
    }

    #[test]
    fn test_corner_shared_with_x_axis_ticks() {
        let config = LayoutConfig::default();
        let y_axis = |start, end| ScaleSpec::with_thickness(30).with_border_dists(start, end);

        // the start of a y axis reaches into the top corner
        let top = PlotScene::default()
            .with_axis(Axis::YLeft, y_axis(20, 0))
            .with_axis(Axis::XTop, ScaleSpec::default());
        assert_eq!(minimum_size_hint(&config, &top), LayoutSize::new(82, 92));

        let bottom_only = top.clone().without_axis(Axis::XTop).with_axis(Axis::XBottom, ScaleSpec::default());
        assert_eq!(minimum_size_hint(&config, &bottom_only), LayoutSize::new(82, 102));

        // the end of a y axis reaches into the bottom corner
        let bottom = PlotScene::default()
            .with_axis(Axis::YLeft, y_axis(0, 20))
            .with_axis(Axis::XBottom, ScaleSpec::default());
        assert_eq!(minimum_size_hint(&config, &bottom), LayoutSize::new(82, 92));

        let top_only = bottom.clone().without_axis(Axis::XBottom).with_axis(Axis::XTop, ScaleSpec::default());
        assert_eq!(minimum_size_hint(&config, &top_only), LayoutSize::new(82, 102));

        // tickless x axes leave no room to share
        let tickless = PlotScene::default()
            .with_axis(Axis::YLeft, y_axis(20, 20))
            .with_axis(Axis::XBottom, ScaleSpec::with_thickness(30))
            .with_axis(Axis::XTop, ScaleSpec::with_thickness(30));
        assert_eq!(minimum_size_hint(&config, &tickless), LayoutSize::new(82, 152));
    }

    #[test]
    fn test_huge_legend_saturates() {
        let scene = four_axes().with_legend(LegendSpec {
            item_count: 100_000_000,
            ..LegendSpec::default()
        });
        let config = LayoutConfig {
            legend_position: LegendPosition::Right,
            legend_ratio: 1.0,
            ..LayoutConfig::default()
        };
        assert_eq!(minimum_size_hint(&config, &scene).width, i32::MAX);
    }

    #[test]
    fn test_title_adds_height() {
        let scene = four_axes().with_title(LabelSpec::new("Title"));
        assert_eq!(
            minimum_size_hint(&LayoutConfig::default(), &scene),
            LayoutSize::new(112, 134)
        );

        let empty = four_axes().with_title(LabelSpec::new(""));
        assert_eq!(
            minimum_size_hint(&LayoutConfig::default(), &empty),
            LayoutSize::new(112, 112)
        );
    }

    #[test]
    fn test_long_title_widens_narrow_plot() {
        let scene = PlotScene::default().with_title(LabelSpec::new("Title"));
        assert_eq!(
            minimum_size_hint(&LayoutConfig::default(), &scene),
            LayoutSize::new(84, 24)
        );
    }

    #[test]
    fn test_legend_beside_bounded_by_ratio() {
        let scene = four_axes().with_legend(legend(0));
        let config = LayoutConfig {
            legend_position: LegendPosition::Right,
            legend_ratio: 0.5,
            ..LayoutConfig::default()
        };
        assert_eq!(minimum_size_hint(&config, &scene), LayoutSize::new(341, 112));
    }

    #[test]
    fn test_legend_below() {
        let config = LayoutConfig::default();

        let scene = four_axes().with_legend(legend(0));
        assert_eq!(minimum_size_hint(&config, &scene), LayoutSize::new(112, 177));

        let framed = four_axes().with_legend(legend(1));
        assert_eq!(minimum_size_hint(&config, &framed), LayoutSize::new(112, 184));

        let empty = four_axes().with_legend(LegendSpec::default());
        assert_eq!(minimum_size_hint(&config, &empty), LayoutSize::new(112, 112));
    }
}
