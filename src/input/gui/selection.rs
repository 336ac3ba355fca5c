use crate::core::data::point::Point;

/// Tracks an in-progress drag selection in screen coordinates.
///
/// The press anchors the rectangle, cursor motion moves the opposite
/// corner, and release yields the captured pair exactly once.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    dragging: bool,
    start: Point,
    end: Point,
}

impl SelectionState {
    pub fn on_press(&mut self, cursor: Point) {
        self.dragging = true;
        self.start = cursor;
        self.end = cursor;
    }

    pub fn on_move(&mut self, cursor: Point) {
        if self.dragging {
            self.end = cursor;
        }
    }

    /// Finishes the drag, returning the selected pair, or `None` when no
    /// drag was in progress.
    pub fn on_release(&mut self, cursor: Point) -> Option<(Point, Point)> {
        if !self.dragging {
            return None;
        }

        self.dragging = false;
        self.end = cursor;

        Some((self.start, self.end))
    }

    /// The rectangle to draw while dragging, as (min, max) corners.
    #[must_use]
    pub fn active_rect(&self) -> Option<(Point, Point)> {
        if !self.dragging {
            return None;
        }

        Some((
            self.start.min_components(self.end),
            self.start.max_components(self.end),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_drag_release_yields_captured_pair_once() {
        let mut selection = SelectionState::default();

        selection.on_press(Point { x: 10, y: 20 });
        selection.on_move(Point { x: 50, y: 60 });

        let released = selection.on_release(Point { x: 70, y: 80 });
        assert_eq!(
            released,
            Some((Point { x: 10, y: 20 }, Point { x: 70, y: 80 }))
        );

        // A second release without a press yields nothing.
        assert_eq!(selection.on_release(Point { x: 70, y: 80 }), None);
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut selection = SelectionState::default();

        selection.on_move(Point { x: 50, y: 60 });

        assert_eq!(selection.active_rect(), None);
        assert_eq!(selection.on_release(Point { x: 50, y: 60 }), None);
    }

    #[test]
    fn active_rect_normalises_corner_order() {
        let mut selection = SelectionState::default();

        selection.on_press(Point { x: 100, y: 10 });
        selection.on_move(Point { x: 20, y: 90 });

        assert_eq!(
            selection.active_rect(),
            Some((Point { x: 20, y: 10 }, Point { x: 100, y: 90 }))
        );
    }

    #[test]
    fn active_rect_is_cleared_by_release() {
        let mut selection = SelectionState::default();

        selection.on_press(Point { x: 1, y: 1 });
        selection.on_move(Point { x: 5, y: 5 });
        let _ = selection.on_release(Point { x: 5, y: 5 });

        assert_eq!(selection.active_rect(), None);
    }
}
