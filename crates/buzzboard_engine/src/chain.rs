use reader_logging::reader_warn;

use crate::fetch::{CategoryQuery, FetchSettings, HeadlineSource};
use crate::{FetchError, HeadlinePage, NewsDataClient, TopHeadlinesClient};

/// Provider selection: try the primary; on any failure or empty success try
/// the secondary; give up after that. Only fresh loads fall back, since a
/// continuation cursor belongs to the primary and means nothing to the
/// fallback. Paginated requests go to the primary alone.
pub struct SourceChain {
    primary: NewsDataClient,
    fallback: TopHeadlinesClient,
}

impl SourceChain {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        Ok(Self {
            primary: NewsDataClient::new(settings.clone())?,
            fallback: TopHeadlinesClient::new(settings)?,
        })
    }
}

#[async_trait::async_trait]
impl HeadlineSource for SourceChain {
    async fn fetch_page(
        &self,
        category: &CategoryQuery,
        page: Option<&str>,
    ) -> Result<HeadlinePage, FetchError> {
        if page.is_some() {
            return self.primary.fetch_page(category, page).await;
        }

        match self.primary.fetch_page(category, None).await {
            Ok(page) if !page.headlines.is_empty() => Ok(page),
            Ok(_) => {
                reader_warn!(
                    "primary returned no usable results for {}, consulting fallback",
                    category.primary
                );
                self.fallback.fetch_page(category, None).await
            }
            Err(err) => {
                reader_warn!(
                    "primary fetch failed for {} ({}), consulting fallback",
                    category.primary,
                    err
                );
                self.fallback.fetch_page(category, None).await
            }
        }
    }
}
