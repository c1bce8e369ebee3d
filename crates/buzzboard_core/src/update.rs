use crate::{AppState, Article, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// At most one `Effect::FetchPage` is ever outstanding: while a request is
/// in flight both triggers (`CategorySelected`, `EndReached`) are dropped,
/// not queued. That in-flight marker is the only concurrency control.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::CategorySelected(category) => {
            if state.is_loading() {
                return (state, Vec::new());
            }
            // Re-selecting the current category reloads it.
            state.switch_category(category);
            let request_id = state.begin_request(true);
            vec![Effect::FetchPage {
                request_id,
                category,
                page: None,
            }]
        }
        Msg::EndReached => {
            if state.is_loading() || !state.can_load_more() || state.headlines().is_empty() {
                return (state, Vec::new());
            }
            let Some(page) = state.next_page().map(ToOwned::to_owned) else {
                return (state, Vec::new());
            };
            let request_id = state.begin_request(false);
            vec![Effect::FetchPage {
                request_id,
                category: state.category(),
                page: Some(page),
            }]
        }
        Msg::PageLoaded {
            request_id,
            articles,
            next_page,
        } => {
            let Some(fresh) = state.finish_request(request_id) else {
                return (state, Vec::new());
            };
            state.store_cursor(next_page);
            if fresh {
                let count = articles.len();
                state.replace_headlines(articles);
                if count == 0 {
                    state.set_notice("No news found for this category.");
                } else {
                    state.set_notice(format!("Loaded {count} headlines."));
                }
            } else {
                state.append_headlines(articles);
            }
            Vec::new()
        }
        Msg::PageFailed {
            request_id,
            message,
        } => {
            if state.finish_request(request_id).is_none() {
                return (state, Vec::new());
            }
            // Last-good contents stay; the failure only ends pagination.
            state.stop_paging();
            state.set_notice(format!("Failed to fetch news: {message}"));
            Vec::new()
        }
        Msg::RowActivated { index } => {
            match state
                .headlines()
                .get(index)
                .and_then(Article::usable_link)
            {
                Some(url) => vec![Effect::OpenArticle {
                    url: url.to_owned(),
                }],
                None => Vec::new(),
            }
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
