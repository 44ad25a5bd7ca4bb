//! Swipe-to-delete gesture state
//!
//! A row slides left while the mouse drags it. Releasing past
//! [`REVEAL_THRESHOLD`] columns leaves the delete button showing; anything
//! shorter snaps back. At most one row is revealed at a time.

/// Columns a drag must travel before release reveals the delete button
pub const REVEAL_THRESHOLD: u16 = 6;

/// Width of the delete button behind a revealed row
pub const DELETE_BUTTON_WIDTH: u16 = 10;

/// What happened when the drag was released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Revealed(usize),
    Reset,
    /// Pressed and released without moving
    Tap(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Drag {
    row: usize,
    start_x: u16,
    offset: u16,
    moved: bool,
    /// Row was already open when the drag began
    from_revealed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwipeState {
    drag: Option<Drag>,
    revealed: Option<usize>,
}

impl SwipeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start dragging `row` from column `x`
    pub fn begin(&mut self, row: usize, x: u16) {
        let from_revealed = self.revealed == Some(row);
        if !from_revealed {
            self.revealed = None;
        }
        self.drag = Some(Drag {
            row,
            start_x: x,
            offset: if from_revealed { DELETE_BUTTON_WIDTH } else { 0 },
            moved: false,
            from_revealed,
        });
    }

    /// Follow the pointer
    ///
    /// A closed row opens with leftward travel; an open row closes with
    /// rightward travel. The offset never exceeds the button width.
    pub fn drag_to(&mut self, x: u16) {
        if let Some(drag) = self.drag.as_mut() {
            drag.moved |= x != drag.start_x;
            drag.offset = if drag.from_revealed {
                DELETE_BUTTON_WIDTH.saturating_sub(x.saturating_sub(drag.start_x))
            } else {
                drag.start_x.saturating_sub(x).min(DELETE_BUTTON_WIDTH)
            };
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn release(&mut self) -> SwipeOutcome {
        match self.drag.take() {
            Some(drag) if drag.offset >= REVEAL_THRESHOLD => {
                self.revealed = Some(drag.row);
                SwipeOutcome::Revealed(drag.row)
            }
            Some(drag) if !drag.moved => SwipeOutcome::Tap(drag.row),
            _ => {
                self.revealed = None;
                SwipeOutcome::Reset
            }
        }
    }

    /// Reveal `row` directly (keyboard)
    pub fn reveal(&mut self, row: usize) {
        self.drag = None;
        self.revealed = Some(row);
    }

    pub fn reset(&mut self) {
        self.drag = None;
        self.revealed = None;
    }

    pub fn revealed(&self) -> Option<usize> {
        self.revealed
    }

    pub fn is_revealed(&self, row: usize) -> bool {
        self.revealed == Some(row)
    }

    /// How many columns `row` is currently shifted left
    pub fn offset_for(&self, row: usize) -> u16 {
        match self.drag {
            Some(drag) if drag.row == row => drag.offset,
            _ if self.revealed == Some(row) => DELETE_BUTTON_WIDTH,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_drag_snaps_back() {
        let mut swipe = SwipeState::new();
        swipe.begin(1, 40);
        swipe.drag_to(37);
        assert_eq!(swipe.offset_for(1), 3);
        assert_eq!(swipe.release(), SwipeOutcome::Reset);
        assert_eq!(swipe.offset_for(1), 0);
        assert_eq!(swipe.revealed(), None);
    }

    #[test]
    fn test_long_drag_reveals() {
        let mut swipe = SwipeState::new();
        swipe.begin(2, 40);
        swipe.drag_to(20);
        assert_eq!(swipe.offset_for(2), DELETE_BUTTON_WIDTH);
        assert_eq!(swipe.release(), SwipeOutcome::Revealed(2));
        assert!(swipe.is_revealed(2));
        assert_eq!(swipe.offset_for(0), 0);
    }

    #[test]
    fn test_rightward_drag_does_nothing() {
        let mut swipe = SwipeState::new();
        swipe.begin(0, 10);
        swipe.drag_to(30);
        assert_eq!(swipe.offset_for(0), 0);
        assert_eq!(swipe.release(), SwipeOutcome::Reset);
    }

    #[test]
    fn test_press_without_motion_is_tap() {
        let mut swipe = SwipeState::new();
        swipe.begin(4, 12);
        assert_eq!(swipe.release(), SwipeOutcome::Tap(4));
        assert_eq!(swipe.revealed(), None);
    }

    #[test]
    fn test_drag_back_to_start_resets() {
        let mut swipe = SwipeState::new();
        swipe.begin(0, 30);
        swipe.drag_to(20);
        swipe.drag_to(30);
        assert_eq!(swipe.release(), SwipeOutcome::Reset);
    }

    #[test]
    fn test_other_row_closes_revealed() {
        let mut swipe = SwipeState::new();
        swipe.reveal(0);
        swipe.begin(3, 40);
        assert_eq!(swipe.revealed(), None);
        assert_eq!(swipe.release(), SwipeOutcome::Tap(3));
        assert_eq!(swipe.revealed(), None);
    }

    #[test]
    fn test_click_on_revealed_row_keeps_it() {
        let mut swipe = SwipeState::new();
        swipe.reveal(1);
        swipe.begin(1, 20);
        assert_eq!(swipe.release(), SwipeOutcome::Revealed(1));
        assert!(swipe.is_revealed(1));
    }

    #[test]
    fn test_drag_revealed_row_back_closes_it() {
        let mut swipe = SwipeState::new();
        swipe.reveal(1);
        swipe.begin(1, 20);
        assert_eq!(swipe.offset_for(1), DELETE_BUTTON_WIDTH);
        swipe.drag_to(28);
        assert_eq!(swipe.offset_for(1), 2);
        assert_eq!(swipe.release(), SwipeOutcome::Reset);
        assert_eq!(swipe.revealed(), None);
    }
}
