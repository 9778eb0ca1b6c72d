//! Indicator measurement along the bar's layout axis.
//!
//! The indicator is derived state: it is recomputed from the measured item
//! areas whenever the active item, the layout axis, or the terminal size
//! changes, and is never a source of truth itself.

use ratatui::layout::Rect;

use pillnav_types::Axis;

/// Position and size of the indicator along the layout axis, relative to the
/// container's origin. The cross axis always stretches to the container's
/// full extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorGeometry {
    pub axis_offset: u16,
    pub axis_extent: u16,
}

/// Two-state latch for the indicator measurement.
///
/// `AwaitingMount` holds until the first successful measurement. A recompute
/// without a target rect (the active id has no rendered control yet) leaves
/// the latch untouched, so the previous geometry survives until the target
/// appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndicatorLatch {
    #[default]
    AwaitingMount,
    Ready(IndicatorGeometry),
}

impl IndicatorLatch {
    /// Re-measures the indicator against the target item's rect.
    ///
    /// `container` is the inner area holding the items; `target` is the
    /// active item's rect, or `None` when the active id has no rendered
    /// control. The missing-target case is a deliberate no-op.
    pub fn recompute(&mut self, axis: Axis, container: Rect, target: Option<Rect>) {
        let Some(target) = target else {
            return;
        };
        let geometry = match axis {
            Axis::Horizontal => IndicatorGeometry {
                axis_offset: target.x.saturating_sub(container.x),
                axis_extent: target.width,
            },
            Axis::Vertical => IndicatorGeometry {
                axis_offset: target.y.saturating_sub(container.y),
                axis_extent: target.height,
            },
        };
        *self = IndicatorLatch::Ready(geometry);
    }

    pub fn geometry(&self) -> Option<IndicatorGeometry> {
        match self {
            IndicatorLatch::AwaitingMount => None,
            IndicatorLatch::Ready(geometry) => Some(*geometry),
        }
    }

    /// Projects the latched geometry back into screen space, stretching the
    /// cross axis over the container's full extent.
    ///
    /// Returns `None` when the geometry falls entirely outside the container,
    /// which happens when the container shrank since the last re-measure.
    pub fn rect_within(&self, axis: Axis, container: Rect) -> Option<Rect> {
        let geometry = self.geometry()?;
        let rect = match axis {
            Axis::Horizontal => Rect {
                x: container.x.saturating_add(geometry.axis_offset),
                y: container.y,
                width: geometry.axis_extent,
                height: container.height,
            },
            Axis::Vertical => Rect {
                x: container.x,
                y: container.y.saturating_add(geometry.axis_offset),
                width: container.width,
                height: geometry.axis_extent,
            },
        };
        let rect = rect.intersection(container);
        (rect.width > 0 && rect.height > 0).then_some(rect)
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use pillnav_types::Axis;

    use super::{IndicatorGeometry, IndicatorLatch};

    #[test]
    fn horizontal_measurement_is_relative_to_container_origin() {
        let container = Rect::new(10, 5, 40, 1);
        let target = Rect::new(18, 5, 9, 1);
        let mut latch = IndicatorLatch::default();

        latch.recompute(Axis::Horizontal, container, Some(target));
        assert_eq!(
            latch.geometry(),
            Some(IndicatorGeometry {
                axis_offset: 8,
                axis_extent: 9,
            })
        );
    }

    #[test]
    fn vertical_measurement_uses_rows() {
        let container = Rect::new(2, 4, 5, 10);
        let target = Rect::new(2, 7, 5, 1);
        let mut latch = IndicatorLatch::default();

        latch.recompute(Axis::Vertical, container, Some(target));
        assert_eq!(
            latch.geometry(),
            Some(IndicatorGeometry {
                axis_offset: 3,
                axis_extent: 1,
            })
        );
    }

    #[test]
    fn missing_target_keeps_previous_state() {
        let container = Rect::new(0, 0, 30, 1);
        let mut latch = IndicatorLatch::default();

        latch.recompute(Axis::Horizontal, container, None);
        assert_eq!(latch, IndicatorLatch::AwaitingMount);

        latch.recompute(Axis::Horizontal, container, Some(Rect::new(5, 0, 8, 1)));
        let ready = latch;
        latch.recompute(Axis::Horizontal, container, None);
        assert_eq!(latch, ready);
    }

    #[test]
    fn projection_stretches_the_cross_axis() {
        let container = Rect::new(10, 5, 40, 3);
        let mut latch = IndicatorLatch::default();
        latch.recompute(Axis::Horizontal, container, Some(Rect::new(14, 6, 6, 1)));

        let rect = latch.rect_within(Axis::Horizontal, container).unwrap();
        assert_eq!(rect, Rect::new(14, 5, 6, 3));
    }

    #[test]
    fn projection_is_clamped_inside_the_container() {
        let container = Rect::new(0, 0, 10, 1);
        let mut latch = IndicatorLatch::default();
        // Latched against a wider container, then projected into a narrower
        // one after a shrink, before the next re-measure lands.
        latch.recompute(Axis::Horizontal, Rect::new(0, 0, 40, 1), Some(Rect::new(6, 0, 8, 1)));

        let rect = latch.rect_within(Axis::Horizontal, container).unwrap();
        assert_eq!(rect, Rect::new(6, 0, 4, 1));
        assert!(rect.right() <= container.right());
    }

    #[test]
    fn projection_beyond_a_shrunken_container_yields_nothing() {
        let container = Rect::new(0, 0, 10, 1);
        let mut latch = IndicatorLatch::default();
        // The latched offset lies entirely past the shrunken container's
        // right edge; there is nowhere in-bounds to draw.
        latch.recompute(Axis::Horizontal, Rect::new(0, 0, 40, 1), Some(Rect::new(30, 0, 8, 1)));

        assert_eq!(latch.rect_within(Axis::Horizontal, container), None);
    }

    #[test]
    fn awaiting_mount_projects_nothing() {
        let latch = IndicatorLatch::default();
        assert_eq!(latch.rect_within(Axis::Horizontal, Rect::new(0, 0, 10, 1)), None);
    }
}
