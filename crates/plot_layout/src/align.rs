//! Scale and canvas alignment
//!
//! After the strips are carved out, the ends of each scale are trimmed so its
//! backbone lines up with the canvas, taking the border distances of the
//! scale labels into account. When the canvas is aligned to a scale, the
//! canvas shrinks instead of the scale wherever the labels need more room.

use crate::axis::{Axis, AxisMap};
use crate::config::LayoutConfig;
use crate::expand::backbone_offsets;
use crate::geometry::LayoutRect;
use crate::options::LayoutOptions;
use crate::snapshot::LayoutData;

/// Align the scale rectangles and the canvas to each other
pub fn align_scales(
    config: &LayoutConfig,
    data: &LayoutData,
    options: LayoutOptions,
    canvas: &mut LayoutRect,
    scales: &mut AxisMap<LayoutRect>,
) {
    let backbone = backbone_offsets(config, data, options);
    let align = &config.align_canvas_to_scales;

    for axis in Axis::ALL {
        if !scales[axis].is_valid() {
            continue;
        }

        if axis.is_x_axis() {
            trim_x_scale(axis, data, &backbone, align, canvas, scales);
        } else {
            trim_y_scale(axis, data, &backbone, align, canvas, scales);
        }
    }

    // the canvas now fits the scale with the largest border distances,
    // realign the others to it
    for axis in Axis::ALL {
        let scale = &data.scales[axis];
        let rect = &mut scales[axis];

        if !rect.is_valid() {
            continue;
        }

        if axis.is_x_axis() {
            if align[Axis::YLeft] {
                let mut left = canvas.left() - scale.start as f64;
                if !options.contains(LayoutOptions::IGNORE_FRAMES) {
                    left += data.canvas.contents_margins[Axis::YLeft] as f64;
                }
                rect.set_left(left);
            }
            if align[Axis::YRight] {
                let mut right = canvas.right() - 1.0 + scale.end as f64;
                if !options.contains(LayoutOptions::IGNORE_FRAMES) {
                    right -= data.canvas.contents_margins[Axis::YRight] as f64;
                }
                rect.set_right(right);
            }

            if align[axis] {
                if axis == Axis::XTop {
                    rect.set_bottom(canvas.top());
                } else {
                    rect.set_top(canvas.bottom());
                }
            }
        } else {
            if align[Axis::XTop] {
                let mut top = canvas.top() - scale.start as f64;
                if !options.contains(LayoutOptions::IGNORE_FRAMES) {
                    top += data.canvas.contents_margins[Axis::XTop] as f64;
                }
                rect.set_top(top);
            }
            if align[Axis::XBottom] {
                let mut bottom = canvas.bottom() - 1.0 + scale.end as f64;
                if !options.contains(LayoutOptions::IGNORE_FRAMES) {
                    bottom -= data.canvas.contents_margins[Axis::XBottom] as f64;
                }
                rect.set_bottom(bottom);
            }

            if align[axis] {
                if axis == Axis::YLeft {
                    rect.set_right(canvas.left());
                } else {
                    rect.set_left(canvas.right());
                }
            }
        }
    }
}

/// Trim the ends of a horizontal scale against the y axes
fn trim_x_scale(
    axis: Axis,
    data: &LayoutData,
    backbone: &AxisMap<i32>,
    align: &AxisMap<bool>,
    canvas: &mut LayoutRect,
    scales: &mut AxisMap<LayoutRect>,
) {
    let scale = &data.scales[axis];
    let left_rect = scales[Axis::YLeft];
    let right_rect = scales[Axis::YRight];
    let rect = &mut scales[axis];

    let left_offset = (backbone[Axis::YLeft] - scale.start) as f64;
    if left_rect.is_valid() {
        let dx = left_offset + left_rect.width;
        if align[Axis::YLeft] && dx < 0.0 {
            // the scale needs more room than the left axis is wide
            canvas.set_left(canvas.left().max(rect.left() - dx));
        } else {
            rect.set_left((rect.left() + left_offset).max(left_rect.left()));
        }
    } else if align[Axis::YLeft] && left_offset < 0.0 {
        canvas.set_left(canvas.left().max(rect.left() - left_offset));
    } else if left_offset > 0.0 {
        rect.set_left(rect.left() + left_offset);
    }

    let right_offset = (backbone[Axis::YRight] - scale.end + 1) as f64;
    if right_rect.is_valid() {
        let dx = right_offset + right_rect.width;
        if align[Axis::YRight] && dx < 0.0 {
            canvas.set_right(canvas.right().min(rect.right() + dx));
        }
        rect.set_right((rect.right() - right_offset).min(right_rect.right()));
    } else if align[Axis::YRight] && right_offset < 0.0 {
        canvas.set_right(canvas.right().min(rect.right() + right_offset));
    } else if right_offset > 0.0 {
        rect.set_right(rect.right() - right_offset);
    }
}

/// Trim the ends of a vertical scale against the x axes
fn trim_y_scale(
    axis: Axis,
    data: &LayoutData,
    backbone: &AxisMap<i32>,
    align: &AxisMap<bool>,
    canvas: &mut LayoutRect,
    scales: &mut AxisMap<LayoutRect>,
) {
    let scale = &data.scales[axis];
    let bottom_rect = scales[Axis::XBottom];
    let top_rect = scales[Axis::XTop];
    let rect = &mut scales[axis];

    let bottom_offset = (backbone[Axis::XBottom] - scale.end + 1) as f64;
    if bottom_rect.is_valid() {
        let dy = bottom_offset + bottom_rect.height;
        if align[Axis::XBottom] && dy < 0.0 {
            canvas.set_bottom(canvas.bottom().min(rect.bottom() + dy));
        } else {
            let max_bottom = bottom_rect.top() + data.scales[Axis::XBottom].tick_offset;
            rect.set_bottom((rect.bottom() - bottom_offset).min(max_bottom));
        }
    } else if align[Axis::XBottom] && bottom_offset < 0.0 {
        canvas.set_bottom(canvas.bottom().min(rect.bottom() + bottom_offset));
    } else if bottom_offset > 0.0 {
        rect.set_bottom(rect.bottom() - bottom_offset);
    }

    let top_offset = (backbone[Axis::XTop] - scale.start) as f64;
    if top_rect.is_valid() {
        let dy = top_offset + top_rect.height;
        if align[Axis::XTop] && dy < 0.0 {
            canvas.set_top(canvas.top().max(rect.top() - dy));
        } else {
            let min_top = top_rect.bottom() - data.scales[Axis::XTop].tick_offset;
            rect.set_top((rect.top() + top_offset).max(min_top));
        }
    } else if align[Axis::XTop] && top_offset < 0.0 {
        canvas.set_top(canvas.top().max(rect.top() - top_offset));
    } else if top_offset > 0.0 {
        rect.set_top(rect.top() + top_offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::ScaleData;

    fn data(enabled: AxisMap<bool>) -> LayoutData {
        LayoutData {
            scales: enabled.map(|_, enabled| ScaleData {
                enabled: *enabled,
                ..ScaleData::default()
            }),
            ..LayoutData::default()
        }
    }

    fn four_strips() -> (LayoutRect, AxisMap<LayoutRect>) {
        let canvas = LayoutRect::new(30.0, 30.0, 740.0, 540.0);
        let scales = AxisMap::new(
            LayoutRect::new(0.0, 30.0, 30.0, 540.0),
            LayoutRect::new(770.0, 30.0, 30.0, 540.0),
            LayoutRect::new(30.0, 570.0, 740.0, 30.0),
            LayoutRect::new(30.0, 0.0, 740.0, 30.0),
        );
        (canvas, scales)
    }

    #[test]
    fn test_unaligned_scales_trimmed_by_canvas_margin() {
        let (mut canvas, mut scales) = four_strips();
        align_scales(
            &LayoutConfig::default(),
            &data(AxisMap::splat(true)),
            LayoutOptions::NONE,
            &mut canvas,
            &mut scales,
        );

        assert_eq!(canvas, LayoutRect::new(30.0, 30.0, 740.0, 540.0));
        assert_eq!(scales[Axis::XBottom], LayoutRect::new(34.0, 570.0, 731.0, 30.0));
        assert_eq!(scales[Axis::XTop], LayoutRect::new(34.0, 0.0, 731.0, 30.0));
        assert_eq!(scales[Axis::YLeft], LayoutRect::new(0.0, 34.0, 30.0, 531.0));
        assert_eq!(scales[Axis::YRight], LayoutRect::new(770.0, 34.0, 30.0, 531.0));
    }

    #[test]
    fn test_aligned_scales_flush_with_canvas() {
        let (mut canvas, mut scales) = four_strips();
        let config = LayoutConfig {
            align_canvas_to_scales: AxisMap::splat(true),
            ..LayoutConfig::default()
        };
        align_scales(
            &config,
            &data(AxisMap::splat(true)),
            LayoutOptions::NONE,
            &mut canvas,
            &mut scales,
        );

        assert_eq!(canvas, LayoutRect::new(30.0, 30.0, 740.0, 540.0));
        assert_eq!(scales[Axis::XBottom], LayoutRect::new(30.0, 570.0, 739.0, 30.0));
        assert_eq!(scales[Axis::XTop].bottom(), canvas.top());
        assert_eq!(scales[Axis::YLeft], LayoutRect::new(0.0, 30.0, 30.0, 539.0));
        assert_eq!(scales[Axis::YRight].left(), canvas.right());
    }

    #[test]
    fn test_label_overhang_shrinks_aligned_canvas() {
        let (mut canvas, mut scales) = four_strips();
        let mut data = data(AxisMap::splat(true));
        data.scales[Axis::XBottom].start = 40;

        let mut config = LayoutConfig::default();
        config.align_canvas_to_scales[Axis::YLeft] = true;

        align_scales(&config, &data, LayoutOptions::NONE, &mut canvas, &mut scales);

        assert_eq!(canvas.left(), 40.0);
        assert_eq!(canvas.right(), 770.0);
        assert_eq!(scales[Axis::XBottom].left(), 0.0);
        assert_eq!(scales[Axis::XBottom].right(), 765.0);
        assert_eq!(scales[Axis::YLeft].right(), 40.0);
    }

    #[test]
    fn test_single_axis_without_neighbours() {
        let mut canvas = LayoutRect::new(0.0, 0.0, 800.0, 570.0);
        let mut scales = AxisMap::splat(LayoutRect::default());
        scales[Axis::XBottom] = LayoutRect::new(0.0, 570.0, 800.0, 30.0);
        let data = data(AxisMap::new(false, false, true, false));

        align_scales(
            &LayoutConfig::default(),
            &data,
            LayoutOptions::NONE,
            &mut canvas,
            &mut scales,
        );
        assert_eq!(scales[Axis::XBottom], LayoutRect::new(4.0, 570.0, 791.0, 30.0));
        assert_eq!(scales[Axis::YLeft], LayoutRect::default());
    }

    #[test]
    fn test_aligned_canvas_makes_room_for_border_distance() {
        let mut canvas = LayoutRect::new(0.0, 0.0, 800.0, 570.0);
        let mut scales = AxisMap::splat(LayoutRect::default());
        scales[Axis::XBottom] = LayoutRect::new(0.0, 570.0, 800.0, 30.0);
        let mut data = data(AxisMap::new(false, false, true, false));
        data.scales[Axis::XBottom].start = 10;

        let mut config = LayoutConfig::default();
        config.align_canvas_to_scales[Axis::YLeft] = true;

        align_scales(&config, &data, LayoutOptions::NONE, &mut canvas, &mut scales);
        assert_eq!(canvas.left(), 10.0);
        assert_eq!(scales[Axis::XBottom].left(), 0.0);
    }

    #[test]
    fn test_contents_margins_respected_unless_ignored() {
        let mut data = data(AxisMap::splat(true));
        data.canvas.contents_margins = AxisMap::splat(2);
        let config = LayoutConfig {
            align_canvas_to_scales: AxisMap::splat(true),
            ..LayoutConfig::default()
        };

        let (mut canvas, mut scales) = four_strips();
        align_scales(&config, &data, LayoutOptions::NONE, &mut canvas, &mut scales);
        assert_eq!(scales[Axis::XBottom].left(), 32.0);
        assert_eq!(scales[Axis::XBottom].right(), 767.0);

        let (mut canvas, mut scales) = four_strips();
        align_scales(&config, &data, LayoutOptions::IGNORE_FRAMES, &mut canvas, &mut scales);
        assert_eq!(scales[Axis::XBottom].left(), 30.0);
        assert_eq!(scales[Axis::XBottom].right(), 769.0);
    }
}
