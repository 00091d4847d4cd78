use socialscrape_core::{ApiKeyCredentials, SecretKey};
use socialscrape_generate::{MockSocialClient, ScrapeClient};

fn credentials() -> ApiKeyCredentials {
    ApiKeyCredentials::new(
        "test-cred",
        "social_scraper",
        Some("Social Scraper API Key".to_string()),
        SecretKey::new("mock-key"),
    )
}

#[tokio::test]
async fn mock_client_scrapes_single_target() {
    let client = MockSocialClient::new(credentials());
    let data = client
        .scrape_social_media(&["https://twitter.com/example".to_string()], 2, false)
        .await
        .expect("mock scrape");

    assert_eq!(data.users.len(), 1);
    assert_eq!(data.posts.len(), 2);
    assert!(data.comments.is_empty());
    assert_eq!(data.total_items(), 2);
}

#[tokio::test]
async fn mock_client_is_usable_as_trait_object() {
    let client: Box<dyn ScrapeClient> = Box::new(MockSocialClient::new(credentials()));
    let data = client
        .scrape_social_media(&[], 10, true)
        .await
        .expect("mock scrape");
    assert!(data.is_empty());
}
