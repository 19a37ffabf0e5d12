//! Accordion state for the FAQ page

/// At most one answer is open at a time. Activating the open question
/// closes it; activating another closes the rest first.
#[derive(Debug, Default)]
pub struct FaqState {
    pub selected: usize,
    open: Option<usize>,
}

impl FaqState {
    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}
