use crate::{Article, Category, ListChange};

/// Placeholder text for a row whose article has no title.
pub const NO_TITLE: &str = "No Title";
/// Placeholder text for a row whose article has no description.
pub const NO_DESCRIPTION: &str = "No Description";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub category: Category,
    pub rows: Vec<HeadlineRowView>,
    pub is_loading: bool,
    pub can_load_more: bool,
    pub notice: Option<String>,
    pub last_change: Option<ListChange>,
    pub dirty: bool,
}

/// One bound row: optional article fields resolved to displayable values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineRowView {
    pub title: String,
    pub summary: String,
    /// Handed to the renderer's image slot; `None` means show a placeholder.
    pub image_url: Option<String>,
    /// Rows without a usable link are inert on tap.
    pub has_link: bool,
}

impl HeadlineRowView {
    pub fn bind(article: &Article) -> Self {
        Self {
            title: article
                .title
                .clone()
                .unwrap_or_else(|| NO_TITLE.to_string()),
            summary: article
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            image_url: article.image_url.clone(),
            has_link: article.usable_link().is_some(),
        }
    }
}
