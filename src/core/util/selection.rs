use crate::core::data::point::Point;
use crate::core::data::region::Region;

/// Expands the shorter axis of a screen-space rectangle symmetrically so
/// the rectangle becomes square, assuming a 1:1 display aspect ratio.
fn square_up(mut min: Point, mut max: Point) -> (Point, Point) {
    let width = max.x - min.x;
    let height = max.y - min.y;

    if width < height {
        let diff = (height - width) / 2;
        min.x -= diff;
        max.x += diff;
    } else if height < width {
        let diff = (width - height) / 2;
        min.y -= diff;
        max.y += diff;
    }

    (min, max)
}

/// Maps a screen-space selection onto the currently displayed region.
///
/// The two points may be given in any drag order. The shorter screen axis
/// is expanded symmetrically to preserve the aspect ratio, then both
/// corners are mapped through the current region using the same linear
/// per-pixel step the renderer applies.
///
/// Returns `None` when the expanded selection is degenerate (zero pixels
/// on either axis), which callers treat as "keep the current view".
#[must_use]
pub fn region_from_selection(
    p1: Point,
    p2: Point,
    screen_width: u32,
    screen_height: u32,
    current: Region,
) -> Option<Region> {
    let min = p1.min_components(p2);
    let max = p1.max_components(p2);
    let (min, max) = square_up(min, max);

    let step_x = current.width() / screen_width as f64;
    let step_y = current.height() / screen_height as f64;

    let x = min.x as f64 * step_x + current.x();
    let y = min.y as f64 * step_y + current.y();
    let width = (max.x - min.x) as f64 * step_x;
    let height = (max.y - min.y) as f64 * step_y;

    Region::new(x, y, width, height).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_selection_maps_through_current_region() {
        let current = Region::new(-2.0, -2.0, 4.0, 4.0).unwrap();

        let region = region_from_selection(
            Point { x: 100, y: 100 },
            Point { x: 300, y: 300 },
            400,
            400,
            current,
        )
        .unwrap();

        // Step is 0.01 per pixel on both axes.
        assert_eq!(region.x(), -1.0);
        assert_eq!(region.y(), -1.0);
        assert_eq!(region.width(), 2.0);
        assert_eq!(region.height(), 2.0);
    }

    #[test]
    fn test_point_order_does_not_matter() {
        let current = Region::home();

        let forward = region_from_selection(
            Point { x: 10, y: 20 },
            Point { x: 200, y: 210 },
            512,
            512,
            current,
        );
        let backward = region_from_selection(
            Point { x: 200, y: 210 },
            Point { x: 10, y: 20 },
            512,
            512,
            current,
        );

        assert_eq!(forward, backward);
        assert!(forward.is_some());
    }

    #[test]
    fn test_short_horizontal_axis_is_expanded_symmetrically() {
        let current = Region::new(0.0, 0.0, 400.0, 400.0).unwrap();

        // 100 wide, 200 tall: the x axis gains 50 pixels on each side.
        let region = region_from_selection(
            Point { x: 100, y: 100 },
            Point { x: 200, y: 300 },
            400,
            400,
            current,
        )
        .unwrap();

        assert_eq!(region.x(), 50.0);
        assert_eq!(region.y(), 100.0);
        assert_eq!(region.width(), 200.0);
        assert_eq!(region.height(), 200.0);
    }

    #[test]
    fn test_short_vertical_axis_is_expanded_symmetrically() {
        let current = Region::new(0.0, 0.0, 400.0, 400.0).unwrap();

        let region = region_from_selection(
            Point { x: 100, y: 100 },
            Point { x: 300, y: 200 },
            400,
            400,
            current,
        )
        .unwrap();

        assert_eq!(region.x(), 100.0);
        assert_eq!(region.y(), 50.0);
        assert_eq!(region.width(), 200.0);
        assert_eq!(region.height(), 200.0);
    }

    #[test]
    fn test_degenerate_selection_returns_none() {
        let current = Region::home();
        let p = Point { x: 50, y: 50 };

        assert_eq!(region_from_selection(p, p, 512, 512, current), None);
    }

    #[test]
    fn test_selection_of_whole_screen_reproduces_current_region() {
        let current = Region::new(-1.5, -1.5, 3.0, 3.0).unwrap();

        let region = region_from_selection(
            Point { x: 0, y: 0 },
            Point { x: 512, y: 512 },
            512,
            512,
            current,
        )
        .unwrap();

        assert_eq!(region, current);
    }
}
