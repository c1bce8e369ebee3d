#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one outbound request. The coordinator guard guarantees at most
    /// one of these is outstanding.
    FetchPage {
        request_id: crate::RequestId,
        category: crate::Category,
        page: Option<String>,
    },
    /// Open the detail viewer on an article link.
    OpenArticle { url: String },
}
