use super::*;
use unicode_segmentation::UnicodeSegmentation;

impl App {
    pub fn push_search_char(&mut self, c: char) {
        self.search.push(c);
        self.clamp_cursor();
    }

    /// Remove the last user-perceived character so combined glyphs are
    /// deleted as a unit.
    pub fn pop_search_grapheme(&mut self) {
        if let Some((idx, _)) = self.search.grapheme_indices(true).next_back() {
            self.search.truncate(idx);
        }
        self.clamp_cursor();
    }
}
