use std::cell::Cell;

/// Selection and scroll state shared by the menu, queue and history lists.
#[derive(Debug, Default)]
pub struct ListViewState {
    /// Currently selected item index.
    selected_index: usize,
    /// Index of the first visible item.
    viewport_offset: usize,
    /// Total number of items in the list.
    item_count: usize,
    /// Last rendered viewport height. Set in UI rendering, needs interior mutability.
    viewport_height: Cell<usize>,
}

impl ListViewState {
    pub fn new_with_count(count: usize) -> Self {
        let mut state = Self::default();
        state.set_item_count(count);
        state
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Gets the current viewport offset.
    ///
    /// Recomputed against the last rendered height so that a resize keeps
    /// the selection visible.
    pub fn viewport_offset(&self) -> usize {
        Self::offset_for(
            self.selected_index,
            self.viewport_offset,
            self.item_count,
            self.viewport_height.get(),
        )
    }

    /// Sets the viewport height (called from UI rendering).
    pub fn set_viewport_height(&self, height: usize) {
        self.viewport_height.set(height);
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Sets the total item count, clamping the selection.
    pub fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
        if count > 0 && self.selected_index >= count {
            self.selected_index = count - 1;
        } else if count == 0 {
            self.selected_index = 0;
        }
        self.adjust_viewport();
    }

    fn offset_for(selected: usize, offset: usize, count: usize, height: usize) -> usize {
        if count == 0 || height == 0 {
            return 0;
        }
        let mut offset = offset;
        // Scroll up if selection moved above viewport
        if selected < offset {
            offset = selected;
        }
        // Scroll down if selection moved below viewport
        if selected >= offset + height {
            offset = selected + 1 - height;
        }
        offset.min(count.saturating_sub(height))
    }

    fn adjust_viewport(&mut self) {
        self.viewport_offset = self.viewport_offset();
    }

    /// Moves selection up by 1 without wrapping.
    pub fn move_up(&mut self) {
        if self.item_count > 0 && self.selected_index > 0 {
            self.selected_index -= 1;
            self.adjust_viewport();
        }
    }

    /// Moves selection down by 1 without wrapping.
    pub fn move_down(&mut self) {
        if self.item_count > 0 && self.selected_index < self.item_count - 1 {
            self.selected_index += 1;
            self.adjust_viewport();
        }
    }

    /// Moves selection up by 1 with wrapping.
    pub fn move_up_wrap(&mut self) {
        if self.item_count > 0 {
            self.selected_index = if self.selected_index == 0 {
                self.item_count - 1
            } else {
                self.selected_index - 1
            };
            self.adjust_viewport();
        }
    }

    /// Moves selection down by 1 with wrapping.
    pub fn move_down_wrap(&mut self) {
        if self.item_count > 0 {
            self.selected_index = (self.selected_index + 1) % self.item_count;
            self.adjust_viewport();
        }
    }

    /// Selects a specific index (clamped to valid range).
    pub fn select_index(&mut self, index: usize) {
        if self.item_count > 0 {
            self.selected_index = index.min(self.item_count - 1);
            self.adjust_viewport();
        }
    }
}
