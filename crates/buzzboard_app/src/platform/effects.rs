use buzzboard_core::{Article, Category, Effect, Msg};
use buzzboard_engine::{CategoryQuery, EngineEvent, EngineHandle, Headline};
use reader_logging::{reader_info, reader_warn};

use super::viewer::ArticleViewer;

/// Executes core effects against the engine and the article viewer, and
/// translates engine events back into core messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>, viewer: &mut ArticleViewer) {
        for effect in effects {
            match effect {
                Effect::FetchPage {
                    request_id,
                    category,
                    page,
                } => {
                    reader_info!(
                        "FetchPage request_id={} category={} page={:?}",
                        request_id,
                        category,
                        page
                    );
                    self.engine
                        .request(request_id, category_query(category), page);
                }
                Effect::OpenArticle { url } => {
                    reader_info!("OpenArticle url={}", url);
                    viewer.open(&url);
                    println!("Viewing article: {url}");
                    println!("(type 'back' to step back)");
                }
            }
        }
    }

    /// Drains at most one engine event into a core message.
    pub fn try_msg(&self) -> Option<Msg> {
        let EngineEvent::PageCompleted { request_id, result } = self.engine.try_recv()?;
        Some(match result {
            Ok(page) => Msg::PageLoaded {
                request_id,
                articles: page.headlines.into_iter().map(article_from).collect(),
                next_page: page.next_page,
            },
            Err(err) => {
                reader_warn!("fetch request {} failed: {}", request_id, err);
                Msg::PageFailed {
                    request_id,
                    message: err.kind.to_string(),
                }
            }
        })
    }
}

fn category_query(category: Category) -> CategoryQuery {
    CategoryQuery::new(category.primary_slug(), category.fallback_slug())
}

fn article_from(headline: Headline) -> Article {
    Article {
        title: headline.title,
        description: headline.description,
        image_url: headline.image_url,
        link: headline.link,
    }
}
