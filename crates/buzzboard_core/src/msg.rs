#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Drawer selection. The shell also sends this once at startup for the
    /// default category.
    CategorySelected(crate::Category),
    /// The scroll observer saw the last backing-list row.
    EndReached,
    /// Row tap.
    RowActivated { index: usize },
    /// Engine delivered a page.
    PageLoaded {
        request_id: crate::RequestId,
        articles: Vec<crate::Article>,
        next_page: Option<String>,
    },
    /// Engine gave up on a page; all failure kinds arrive collapsed.
    PageFailed {
        request_id: crate::RequestId,
        message: String,
    },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
