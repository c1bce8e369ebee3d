use reader_logging::{reader_debug, reader_warn};
use serde::Deserialize;

use crate::fetch::{build_client, check_status, map_reqwest_error, CategoryQuery, FetchSettings};
use crate::{FailureKind, FetchError, Headline, HeadlinePage, HeadlineSource, ProviderKind};

/// Primary provider: `GET {base}/news?apikey=&category=&language=&country=`
/// with an optional `page=` continuation cursor.
#[derive(Debug, Clone)]
pub struct NewsDataClient {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl NewsDataClient {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = build_client(&settings)?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, category: &CategoryQuery, page: Option<&str>) -> Result<reqwest::Url, FetchError> {
        let mut url = reqwest::Url::parse(&format!("{}/news", self.settings.primary_base_url))
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.query_pairs_mut()
            .append_pair("apikey", &self.settings.primary_api_key)
            .append_pair("category", &category.primary)
            .append_pair("language", &self.settings.language)
            .append_pair("country", &self.settings.country);
        if let Some(page) = page {
            url.query_pairs_mut().append_pair("page", page);
        }
        Ok(url)
    }
}

#[async_trait::async_trait]
impl HeadlineSource for NewsDataClient {
    async fn fetch_page(
        &self,
        category: &CategoryQuery,
        page: Option<&str>,
    ) -> Result<HeadlinePage, FetchError> {
        reader_debug!(
            "primary fetch category={} page={:?}",
            category.primary,
            page
        );
        let url = self.endpoint(category, page)?;
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;
        check_status(&response)?;
        let body: NewsDataResponse = response.json().await.map_err(map_reqwest_error)?;

        // An unsuccessful body collapses into an empty page; the chain
        // decides whether that warrants the fallback.
        if body.status != "success" {
            reader_warn!("primary reported status {:?}", body.status);
            return Ok(HeadlinePage {
                headlines: Vec::new(),
                next_page: None,
                provider: ProviderKind::Primary,
            });
        }

        let headlines = body
            .results
            .unwrap_or_default()
            .into_iter()
            .map(Headline::from)
            .collect();
        Ok(HeadlinePage {
            headlines,
            next_page: body.next_page,
            provider: ProviderKind::Primary,
        })
    }
}

#[derive(Debug, Deserialize)]
struct NewsDataResponse {
    status: String,
    results: Option<Vec<NewsDataArticle>>,
    #[serde(rename = "nextPage")]
    next_page: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NewsDataArticle {
    title: Option<String>,
    description: Option<String>,
    image_url: Option<String>,
    link: Option<String>,
}

impl From<NewsDataArticle> for Headline {
    fn from(article: NewsDataArticle) -> Self {
        Self {
            title: article.title,
            description: article.description,
            image_url: article.image_url,
            link: article.link,
        }
    }
}
