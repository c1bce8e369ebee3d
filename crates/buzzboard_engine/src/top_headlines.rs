use reader_logging::reader_debug;
use serde::Deserialize;

use crate::fetch::{build_client, check_status, map_reqwest_error, CategoryQuery, FetchSettings};
use crate::{FailureKind, FetchError, Headline, HeadlinePage, HeadlineSource, ProviderKind};

/// Fallback provider: `GET {base}/top-headlines?category=&apiKey=&country=`.
/// A different endpoint and article shape; results are mapped into the
/// common record. No pagination.
#[derive(Debug, Clone)]
pub struct TopHeadlinesClient {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl TopHeadlinesClient {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = build_client(&settings)?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, category: &CategoryQuery) -> Result<reqwest::Url, FetchError> {
        let mut url = reqwest::Url::parse(&format!(
            "{}/top-headlines",
            self.settings.fallback_base_url
        ))
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.query_pairs_mut()
            .append_pair("category", &category.fallback)
            .append_pair("apiKey", &self.settings.fallback_api_key)
            .append_pair("country", &self.settings.country);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl HeadlineSource for TopHeadlinesClient {
    async fn fetch_page(
        &self,
        category: &CategoryQuery,
        _page: Option<&str>,
    ) -> Result<HeadlinePage, FetchError> {
        reader_debug!("fallback fetch category={}", category.fallback);
        let url = self.endpoint(category)?;
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;
        check_status(&response)?;
        let body: TopHeadlinesResponse = response.json().await.map_err(map_reqwest_error)?;

        let headlines = if body.status == "ok" {
            body.articles
                .unwrap_or_default()
                .into_iter()
                .map(Headline::from)
                .collect()
        } else {
            Vec::new()
        };
        Ok(HeadlinePage {
            headlines,
            next_page: None,
            provider: ProviderKind::Fallback,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TopHeadlinesResponse {
    status: String,
    #[allow(dead_code)]
    total_results: Option<u32>,
    articles: Option<Vec<TopHeadlinesArticle>>,
}

#[derive(Debug, Deserialize)]
struct TopHeadlinesArticle {
    title: Option<String>,
    description: Option<String>,
    #[serde(rename = "urlToImage")]
    url_to_image: Option<String>,
    url: Option<String>,
}

impl From<TopHeadlinesArticle> for Headline {
    fn from(article: TopHeadlinesArticle) -> Self {
        Self {
            title: article.title,
            description: article.description,
            image_url: article.url_to_image,
            link: article.url,
        }
    }
}
