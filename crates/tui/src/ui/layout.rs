//! Anchored placement for the floating bar.
//!
//! The bar is not part of a layout tree; it floats over the host content,
//! anchored to a screen edge the way a fixed-position element would be.

use ratatui::layout::Rect;

use pillnav_types::Position;

/// Rows kept between a bottom pill and the bottom edge.
const BOTTOM_MARGIN: u16 = 1;
/// Columns kept between a left rail and the left edge.
const LEFT_MARGIN: u16 = 2;

/// Computes the bar's screen rect for the requested placement.
///
/// `Bottom` centers the bar horizontally just above the bottom edge; `Left`
/// centers it vertically just right of the left edge. The result is clamped
/// to the frame when the terminal is too small for the requested size.
pub fn anchored_rect(position: Position, width: u16, height: u16, frame: Rect) -> Rect {
    let width = width.min(frame.width);
    let height = height.min(frame.height);
    match position {
        Position::Bottom => {
            let x = frame.x + (frame.width - width) / 2;
            let bottom_gap = BOTTOM_MARGIN.min(frame.height - height);
            let y = frame.y + frame.height - height - bottom_gap;
            Rect::new(x, y, width, height)
        }
        Position::Left => {
            let left_gap = LEFT_MARGIN.min(frame.width - width);
            let x = frame.x + left_gap;
            let y = frame.y + (frame.height - height) / 2;
            Rect::new(x, y, width, height)
        }
    }
}
