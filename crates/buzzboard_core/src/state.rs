use crate::view_model::{AppViewModel, HeadlineRowView};
use crate::{Article, Category, HeadlineList, ListChange};

pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InFlight {
    request_id: RequestId,
    /// A fresh load replaces the list; a continuation appends.
    fresh: bool,
}

/// Fetch-coordinator state plus the backing list of visible headlines.
/// Starts as (default category, no cursor, idle, can load).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    category: Category,
    headlines: HeadlineList,
    next_page: Option<String>,
    in_flight: Option<InFlight>,
    can_load_more: bool,
    next_request_id: RequestId,
    notice: Option<String>,
    last_change: Option<ListChange>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            category: Category::default(),
            headlines: HeadlineList::new(),
            next_page: None,
            in_flight: None,
            can_load_more: true,
            next_request_id: 1,
            notice: None,
            last_change: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn can_load_more(&self) -> bool {
        self.can_load_more
    }

    pub fn next_page(&self) -> Option<&str> {
        self.next_page.as_deref()
    }

    pub fn headlines(&self) -> &HeadlineList {
        &self.headlines
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            category: self.category,
            rows: self
                .headlines
                .items()
                .iter()
                .map(HeadlineRowView::bind)
                .collect(),
            is_loading: self.is_loading(),
            can_load_more: self.can_load_more,
            notice: self.notice.clone(),
            last_change: self.last_change,
            dirty: self.dirty,
        }
    }

    /// Reports whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Hands out the pending transient notice, at most once.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    pub(crate) fn switch_category(&mut self, category: Category) {
        self.category = category;
        self.next_page = None;
        self.can_load_more = true;
        self.dirty = true;
    }

    pub(crate) fn begin_request(&mut self, fresh: bool) -> RequestId {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight = Some(InFlight { request_id, fresh });
        self.dirty = true;
        request_id
    }

    /// Clears the in-flight marker if `request_id` matches it, returning
    /// whether that request was a fresh load. A completion for any other id
    /// belongs to torn-down work and is ignored by the caller.
    pub(crate) fn finish_request(&mut self, request_id: RequestId) -> Option<bool> {
        match self.in_flight {
            Some(current) if current.request_id == request_id => {
                self.in_flight = None;
                self.dirty = true;
                Some(current.fresh)
            }
            _ => None,
        }
    }

    pub(crate) fn store_cursor(&mut self, next_page: Option<String>) {
        self.can_load_more = next_page.is_some();
        self.next_page = next_page;
        self.dirty = true;
    }

    pub(crate) fn stop_paging(&mut self) {
        self.can_load_more = false;
        self.dirty = true;
    }

    pub(crate) fn replace_headlines(&mut self, articles: Vec<Article>) {
        self.last_change = Some(self.headlines.replace(articles));
        self.dirty = true;
    }

    pub(crate) fn append_headlines(&mut self, articles: Vec<Article>) {
        if let Some(change) = self.headlines.append(articles) {
            self.last_change = Some(change);
            self.dirty = true;
        }
    }

    pub(crate) fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
        self.dirty = true;
    }
}
