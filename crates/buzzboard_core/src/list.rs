use crate::Article;

/// Description of the last mutation of the backing list. A renderer can
/// keep existing rows anchored on `Appended` instead of redrawing from
/// scratch; that distinction is why `append` and `replace` are separate
/// operations rather than one "set" call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChange {
    /// The whole visible range changed.
    Replaced { len: usize },
    /// A contiguous tail range was inserted.
    Appended { start: usize, len: usize },
}

/// Backing list of the visible headlines, kept in page-arrival order.
/// Mutated only wholesale (`replace`) or at the tail (`append`), never by
/// partial edits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeadlineList {
    items: Vec<Article>,
}

impl HeadlineList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards the old backing list and installs `articles`.
    pub fn replace(&mut self, articles: Vec<Article>) -> ListChange {
        self.items = articles;
        ListChange::Replaced {
            len: self.items.len(),
        }
    }

    /// Extends the backing list. An empty page changes nothing and reports
    /// no range change.
    pub fn append(&mut self, articles: Vec<Article>) -> Option<ListChange> {
        if articles.is_empty() {
            return None;
        }
        let start = self.items.len();
        let len = articles.len();
        self.items.extend(articles);
        Some(ListChange::Appended { start, len })
    }

    pub fn get(&self, index: usize) -> Option<&Article> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[Article] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
