use std::sync::Once;

use buzzboard_core::{update, AppState, Article, Category, Effect, ListChange, Msg};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(reader_logging::initialize_for_tests);
}

fn page(prefix: &str, count: usize) -> Vec<Article> {
    (0..count)
        .map(|i| Article {
            title: Some(format!("{prefix}-{i}")),
            ..Article::default()
        })
        .collect()
}

#[test]
fn business_first_page_then_continuation() {
    init_logging();
    let state = AppState::new();

    // First page: 10 articles, cursor "p2".
    let (state, effects) = update(state, Msg::CategorySelected(Category::Business));
    assert_eq!(effects.len(), 1);
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            request_id: 1,
            articles: page("first", 10),
            next_page: Some("p2".to_string()),
        },
    );

    // Scrolling to the end requests the continuation with that cursor.
    let (state, effects) = update(state, Msg::EndReached);
    assert_eq!(
        effects,
        vec![Effect::FetchPage {
            request_id: 2,
            category: Category::Business,
            page: Some("p2".to_string()),
        }]
    );

    // Continuation: 5 articles, no further cursor.
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            request_id: 2,
            articles: page("second", 5),
            next_page: None,
        },
    );

    let view = state.view();
    assert_eq!(view.rows.len(), 15);
    assert_eq!(view.rows[0].title, "first-0");
    assert_eq!(view.rows[9].title, "first-9");
    assert_eq!(view.rows[10].title, "second-0");
    assert_eq!(view.last_change, Some(ListChange::Appended { start: 10, len: 5 }));
    assert!(!view.can_load_more);

    // End of data: a further trigger issues nothing.
    let (_, effects) = update(state, Msg::EndReached);
    assert!(effects.is_empty());
}

#[test]
fn sequential_pages_accumulate_in_arrival_order() {
    init_logging();
    let mut state = AppState::new();
    let counts = [3usize, 2, 4];

    let (next, _) = update(state, Msg::CategorySelected(Category::Technology));
    state = next;

    let mut expected_len = 0;
    for (i, count) in counts.iter().enumerate() {
        let request_id = (i + 1) as u64;
        let last = i + 1 == counts.len();
        let next_page = (!last).then(|| format!("p{}", i + 2));

        let (next, _) = update(
            state,
            Msg::PageLoaded {
                request_id,
                articles: page(&format!("page{i}"), *count),
                next_page,
            },
        );
        state = next;
        expected_len += count;

        let view = state.view();
        assert_eq!(view.rows.len(), expected_len);
        // The end-of-data flag flips only once the cursorless page lands.
        assert_eq!(view.can_load_more, !last);

        if !last {
            let (next, effects) = update(state, Msg::EndReached);
            state = next;
            assert_eq!(effects.len(), 1);
        }
    }

    assert_eq!(state.view().rows.len(), 9);
}

#[test]
fn empty_continuation_changes_nothing_visible() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::CategorySelected(Category::General));
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            request_id: 1,
            articles: page("g", 2),
            next_page: Some("p2".to_string()),
        },
    );

    let (state, _) = update(state, Msg::EndReached);
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            request_id: 2,
            articles: Vec::new(),
            next_page: None,
        },
    );

    let view = state.view();
    assert_eq!(view.rows.len(), 2);
    // No tail insertion was reported; the last visible change is still the
    // original full replace.
    assert_eq!(view.last_change, Some(ListChange::Replaced { len: 2 }));
    assert!(!view.can_load_more);
}

#[test]
fn end_reached_is_inert_without_a_cursor() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::CategorySelected(Category::General));
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            request_id: 1,
            articles: page("g", 5),
            next_page: None,
        },
    );

    let (_, effects) = update(state, Msg::EndReached);
    assert!(effects.is_empty());
}

#[test]
fn end_reached_is_inert_on_an_empty_list() {
    init_logging();
    let (_, effects) = update(AppState::new(), Msg::EndReached);
    assert!(effects.is_empty());
}
