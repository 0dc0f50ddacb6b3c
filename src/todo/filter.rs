use crate::todo::item::Item;

/// Active tab of the item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Pending,
    Done,
}

impl FilterMode {
    pub const TABS: [FilterMode; 3] = [FilterMode::All, FilterMode::Pending, FilterMode::Done];

    pub fn matches(self, item: &Item) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Pending => !item.is_done(),
            FilterMode::Done => item.is_done(),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Pending => "not yet done",
            FilterMode::Done => "done",
        }
    }

    pub fn index(self) -> usize {
        match self {
            FilterMode::All => 0,
            FilterMode::Pending => 1,
            FilterMode::Done => 2,
        }
    }

    /// Tab at `index`; out-of-range indexes fall back to `All`.
    pub fn from_index(index: usize) -> Self {
        Self::TABS.get(index).copied().unwrap_or_default()
    }

    pub fn next(self) -> Self {
        Self::from_index((self.index() + 1) % Self::TABS.len())
    }

    pub fn prev(self) -> Self {
        Self::from_index((self.index() + Self::TABS.len() - 1) % Self::TABS.len())
    }
}

/// Items shown for `mode`, in their original relative order.
pub fn visible(items: &[Item], mode: FilterMode) -> Vec<&Item> {
    items.iter().filter(|item| mode.matches(item)).collect()
}

/// Per-tab item counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    pub all: usize,
    pub pending: usize,
    pub done: usize,
}

impl Counts {
    pub fn of(items: &[Item]) -> Self {
        let done = items.iter().filter(|item| item.is_done()).count();
        Self {
            all: items.len(),
            pending: items.len() - done,
            done,
        }
    }

    pub fn for_mode(&self, mode: FilterMode) -> usize {
        match mode {
            FilterMode::All => self.all,
            FilterMode::Pending => self.pending,
            FilterMode::Done => self.done,
        }
    }
}
