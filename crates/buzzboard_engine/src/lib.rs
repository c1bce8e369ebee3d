//! Buzzboard engine: remote headline sources and effect execution.
mod chain;
mod engine;
mod fetch;
mod newsdata;
mod top_headlines;
mod types;

pub use chain::SourceChain;
pub use engine::EngineHandle;
pub use fetch::{CategoryQuery, FetchSettings, HeadlineSource};
pub use newsdata::NewsDataClient;
pub use top_headlines::TopHeadlinesClient;
pub use types::{
    EngineEvent, FailureKind, FetchError, Headline, HeadlinePage, ProviderKind, RequestId,
};
