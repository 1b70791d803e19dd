//! # Batched Plant List
//!
//! The grid never shows a whole list at once. It shows fixed-size batches and
//! grows by one batch each time the user scrolls near the bottom.
//!
//! ```text
//! list:     [p0 p1 p2 p3 p4 p5 | p6 p7 p8 p9 p10 p11 | p12 p13]
//! show(reset)   ───────────────▶ loaded = 6
//! load_more()                    ────────────────────▶ loaded = 12
//! load_more()                                          ─────────▶ loaded = 14 (end)
//! load_more()                                                     no-op
//! ```
//!
//! Changing the filter always calls `show(list, true)`, so pagination
//! restarts from the top of the new list.

use std::ops::Range;

use crate::catalog::Plant;

/// Number of cards rendered per pagination step.
pub const BATCH_SIZE: usize = 6;

/// How many items of the displayed list have been rendered so far.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ViewCursor {
    loaded: usize,
}

impl ViewCursor {
    pub fn loaded(&self) -> usize {
        self.loaded
    }

    pub fn reset(&mut self) {
        self.loaded = 0;
    }

    /// Advance by up to `batch` items of a list of `len`, returning the
    /// range that became visible. Never moves past `len`.
    pub fn advance(&mut self, len: usize, batch: usize) -> Range<usize> {
        let start = self.loaded.min(len);
        let end = start.saturating_add(batch).min(len);
        self.loaded = end;
        start..end
    }
}

/// The currently displayed (possibly filtered) list and how much of it is
/// rendered.
#[derive(Debug, Default)]
pub struct PlantListView {
    list: Vec<Plant>,
    cursor: ViewCursor,
    /// Bumped on every reset so adapters can drop per-card presentation state.
    generation: u64,
}

impl PlantListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the next batch of `list`. With `reset`, previous output is
    /// discarded and the cursor restarts at zero first.
    ///
    /// Returns the range of newly rendered indices.
    pub fn show(&mut self, list: Vec<Plant>, reset: bool) -> Range<usize> {
        if reset {
            self.cursor.reset();
            self.generation = self.generation.wrapping_add(1);
        }
        self.list = list;
        self.cursor.advance(self.list.len(), BATCH_SIZE)
    }

    /// `show` with the current list and no reset.
    pub fn load_more(&mut self) -> Range<usize> {
        self.cursor.advance(self.list.len(), BATCH_SIZE)
    }

    /// Items rendered so far, in display order.
    pub fn rendered(&self) -> &[Plant] {
        &self.list[..self.cursor.loaded()]
    }

    pub fn loaded(&self) -> usize {
        self.cursor.loaded()
    }

    pub fn total(&self) -> usize {
        self.list.len()
    }

    pub fn has_more(&self) -> bool {
        self.cursor.loaded() < self.list.len()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::numbered_plants;

    #[test]
    fn test_first_show_renders_one_batch() {
        let mut view = PlantListView::new();
        let range = view.show(numbered_plants(14), true);
        assert_eq!(range, 0..6);
        assert_eq!(view.rendered().len(), 6);
        assert!(view.has_more());
    }

    #[test]
    fn test_repeated_loads_never_exceed_list() {
        for len in [0usize, 1, 5, 6, 7, 12, 13, 20] {
            let mut view = PlantListView::new();
            view.show(numbered_plants(len), true);
            let mut previous = view.loaded();
            assert_eq!(previous, len.min(BATCH_SIZE));

            for requests in 2..=6 {
                view.show(numbered_plants(len), false);
                let loaded = view.loaded();
                assert_eq!(loaded, len.min(requests * BATCH_SIZE), "len={len}");
                assert!(loaded >= previous);
                assert!(loaded <= len);
                previous = loaded;
            }
        }
    }

    #[test]
    fn test_short_final_batch() {
        let mut view = PlantListView::new();
        view.show(numbered_plants(8), true);
        assert_eq!(view.load_more(), 6..8);
        assert_eq!(view.load_more(), 8..8);
        assert!(!view.has_more());
    }

    #[test]
    fn test_reset_restarts_from_zero() {
        let mut view = PlantListView::new();
        view.show(numbered_plants(20), true);
        view.load_more();
        assert_eq!(view.loaded(), 12);
        let before = view.generation();

        let range = view.show(numbered_plants(3), true);
        assert_eq!(range, 0..3);
        assert_eq!(view.loaded(), 3);
        assert_eq!(view.generation(), before + 1);
    }

    #[test]
    fn test_cursor_clamps_when_list_shrinks_without_reset() {
        let mut cursor = ViewCursor::default();
        cursor.advance(10, 6);
        assert_eq!(cursor.advance(4, 6), 4..4);
        assert_eq!(cursor.loaded(), 4);
    }
}
