use buzzboard_engine::{
    CategoryQuery, FailureKind, FetchSettings, HeadlineSource, ProviderKind, SourceChain,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(primary: &MockServer, fallback: &MockServer) -> FetchSettings {
    FetchSettings {
        primary_base_url: primary.uri(),
        fallback_base_url: fallback.uri(),
        primary_api_key: "primary-key".to_string(),
        fallback_api_key: "fallback-key".to_string(),
        ..FetchSettings::default()
    }
}

fn general() -> CategoryQuery {
    CategoryQuery::new("top", "general")
}

fn fallback_body() -> serde_json::Value {
    json!({
        "status": "ok",
        "totalResults": 3,
        "articles": [
            {
                "title": "One",
                "description": "first",
                "urlToImage": "https://cdn.example.com/one.jpg",
                "url": "https://fallback.example.com/one"
            },
            { "title": "Two", "url": "https://fallback.example.com/two" },
            { "title": "Three" }
        ]
    })
}

#[tokio::test]
async fn falls_back_when_primary_fails() {
    let primary = MockServer::start().await;
    let fallback = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/news"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&primary)
        .await;
    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .and(query_param("category", "general"))
        .and(query_param("apiKey", "fallback-key"))
        .and(query_param("country", "us"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fallback_body()))
        .mount(&fallback)
        .await;

    let chain = SourceChain::new(settings(&primary, &fallback)).expect("chain");
    let page = chain.fetch_page(&general(), None).await.expect("fetch ok");

    assert_eq!(page.provider, ProviderKind::Fallback);
    assert_eq!(page.next_page, None);
    assert_eq!(page.headlines.len(), 3);
    // The secondary shape is mapped into the common record.
    assert_eq!(
        page.headlines[0].image_url.as_deref(),
        Some("https://cdn.example.com/one.jpg")
    );
    assert_eq!(
        page.headlines[0].link.as_deref(),
        Some("https://fallback.example.com/one")
    );
}

#[tokio::test]
async fn falls_back_when_primary_is_empty() {
    let primary = MockServer::start().await;
    let fallback = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/news"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "results": []
        })))
        .mount(&primary)
        .await;
    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fallback_body()))
        .mount(&fallback)
        .await;

    let chain = SourceChain::new(settings(&primary, &fallback)).expect("chain");
    let page = chain.fetch_page(&general(), None).await.expect("fetch ok");

    assert_eq!(page.provider, ProviderKind::Fallback);
    assert_eq!(page.headlines.len(), 3);
}

#[tokio::test]
async fn primary_results_win_without_fallback_traffic() {
    let primary = MockServer::start().await;
    let fallback = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/news"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "results": [ { "title": "Primary story" } ],
            "nextPage": "p2"
        })))
        .mount(&primary)
        .await;
    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fallback_body()))
        .expect(0)
        .mount(&fallback)
        .await;

    let chain = SourceChain::new(settings(&primary, &fallback)).expect("chain");
    let page = chain.fetch_page(&general(), None).await.expect("fetch ok");

    assert_eq!(page.provider, ProviderKind::Primary);
    assert_eq!(page.next_page.as_deref(), Some("p2"));
}

#[tokio::test]
async fn gives_up_when_both_fail() {
    let primary = MockServer::start().await;
    let fallback = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/news"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&primary)
        .await;
    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&fallback)
        .await;

    let chain = SourceChain::new(settings(&primary, &fallback)).expect("chain");
    let err = chain.fetch_page(&general(), None).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(401));
}

#[tokio::test]
async fn continuations_never_consult_the_fallback() {
    let primary = MockServer::start().await;
    let fallback = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/news"))
        .and(query_param("page", "p2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&primary)
        .await;
    Mock::given(method("GET"))
        .and(path("/top-headlines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fallback_body()))
        .expect(0)
        .mount(&fallback)
        .await;

    let chain = SourceChain::new(settings(&primary, &fallback)).expect("chain");
    let err = chain.fetch_page(&general(), Some("p2")).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}
