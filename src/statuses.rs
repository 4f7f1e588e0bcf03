//! Convenience wrappers for the `statuses/` resource group.
//!
//! Each operation pairs an endpoint with its allow-list of query or body
//! parameters; options outside the list are dropped before the request is
//! built.

use crate::client::Client;
use crate::error::Result;
use crate::params::filter;

const RETRIEVE_PARAMS: &[&str] = &["trim_user", "include_my_retweet", "include_entities"];

const MENTIONS_PARAMS: &[&str] = &[
    "contributor_details",
    "count",
    "include_entities",
    "max_id",
    "since_id",
    "trim_user",
];

const USER_TIMELINE_PARAMS: &[&str] = &[
    "user_id",
    "screen_name",
    "since_id",
    "count",
    "max_id",
    "trim_user",
    "exclude_replies",
    "contributor_details",
    "include_rts",
];

const HOME_TIMELINE_PARAMS: &[&str] = &[
    "count",
    "since_id",
    "max_id",
    "include_entities",
    "exclude_replies",
    "contributor_details",
];

const MY_RETWEETS_PARAMS: &[&str] = &[
    "count",
    "include_entities",
    "include_user_entities",
    "max_id",
    "since_id",
    "trim_user",
];

const RETWEETS_PARAMS: &[&str] = &["count", "trim_user"];

const CREATE_PARAMS: &[&str] = &[
    "in_reply_to_status_id",
    "possibly_sensitive",
    "lat",
    "long",
    "place_id",
    "display_coordinates",
    "trim_user",
    "media_ids",
];

const RETWEET_PARAMS: &[&str] = &["trim_user"];

const DESTROY_PARAMS: &[&str] = &["trim_user"];

/// Wrapper for the status (tweet) endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Statuses<'a> {
    client: &'a Client,
}

impl<'a> Statuses<'a> {
    #[must_use]
    pub const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Retrieve a single tweet by id.
    pub async fn retrieve(&self, id: u64, options: &[(&str, &str)]) -> Result<String> {
        self.client
            .get(
                &format!("statuses/show/{id}.json"),
                &filter(RETRIEVE_PARAMS, options),
            )
            .await
    }

    /// Retrieve mentions of the authenticated user.
    pub async fn retrieve_mentions(&self, options: &[(&str, &str)]) -> Result<String> {
        self.client
            .get(
                "statuses/mentions_timeline.json",
                &filter(MENTIONS_PARAMS, options),
            )
            .await
    }

    /// Retrieve a user's timeline.
    pub async fn retrieve_user_timeline(&self, options: &[(&str, &str)]) -> Result<String> {
        self.client
            .get(
                "statuses/user_timeline.json",
                &filter(USER_TIMELINE_PARAMS, options),
            )
            .await
    }

    /// Retrieve the authenticated user's home timeline.
    pub async fn retrieve_home_timeline(&self, options: &[(&str, &str)]) -> Result<String> {
        self.client
            .get(
                "statuses/home_timeline.json",
                &filter(HOME_TIMELINE_PARAMS, options),
            )
            .await
    }

    /// Retrieve the authenticated user's tweets that were retweeted.
    pub async fn retrieve_my_retweets(&self, options: &[(&str, &str)]) -> Result<String> {
        self.client
            .get(
                "statuses/retweets_of_me.json",
                &filter(MY_RETWEETS_PARAMS, options),
            )
            .await
    }

    /// Retrieve the retweets of a tweet.
    pub async fn retrieve_retweets(&self, id: u64, options: &[(&str, &str)]) -> Result<String> {
        self.client
            .get(
                &format!("statuses/retweets/{id}.json"),
                &filter(RETWEETS_PARAMS, options),
            )
            .await
    }

    /// Post a new tweet.
    ///
    /// The status text leads the body field order; filtered options follow.
    pub async fn create(&self, status: &str, options: &[(&str, &str)]) -> Result<String> {
        let mut params = vec![("status".to_string(), status.to_string())];
        params.extend(filter(CREATE_PARAMS, options));
        self.client.post("statuses/update.json", &params).await
    }

    /// Retweet a tweet by id.
    pub async fn retweet(&self, id: u64, options: &[(&str, &str)]) -> Result<String> {
        self.client
            .post(
                &format!("statuses/retweet/{id}.json"),
                &filter(RETWEET_PARAMS, options),
            )
            .await
    }

    /// Delete one of the authenticated user's tweets by id.
    pub async fn destroy(&self, id: u64, options: &[(&str, &str)]) -> Result<String> {
        self.client
            .post(
                &format!("statuses/destroy/{id}.json"),
                &filter(DESTROY_PARAMS, options),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use wiremock::matchers::{body_string, header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn test_client(mock_server: &MockServer) -> Client {
        Client::new(&Config {
            consumer_key: "test_consumer_key".into(),
            consumer_secret: "test_consumer_secret".into(),
            access_token: "test_access_token".into(),
            access_token_secret: "test_access_token_secret".into(),
            api_url: mock_server.uri(),
            ..Default::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn retrieve_hits_show_endpoint() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/statuses/show/460095281871073282.json"))
            .and(header_exists("Authorization"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":460095281871073282}"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server).await;
        let body = Statuses::new(&client)
            .retrieve(460_095_281_871_073_282, &[])
            .await
            .unwrap();
        assert_eq!(body, r#"{"id":460095281871073282}"#);
    }

    #[tokio::test]
    async fn user_timeline_drops_unknown_options() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/statuses/user_timeline.json"))
            .and(query_param("count", "20"))
            .and(header_exists("Authorization"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server).await;
        Statuses::new(&client)
            .retrieve_user_timeline(&[("count", "20"), ("bogus", "x")])
            .await
            .unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), Some("count=20"));
    }

    #[tokio::test]
    async fn mentions_without_options_has_bare_url() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/statuses/mentions_timeline.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server).await;
        Statuses::new(&client).retrieve_mentions(&[]).await.unwrap();

        let requests = mock_server.received_requests().await.unwrap();
        assert!(requests[0].url.query().is_none());
    }

    #[tokio::test]
    async fn home_timeline_passes_allowed_options() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/statuses/home_timeline.json"))
            .and(query_param("count", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server).await;
        Statuses::new(&client)
            .retrieve_home_timeline(&[("count", "20")])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn my_retweets_hits_retweets_of_me() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/statuses/retweets_of_me.json"))
            .and(query_param("count", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server).await;
        Statuses::new(&client)
            .retrieve_my_retweets(&[("count", "20")])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn retweets_hits_id_endpoint() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/statuses/retweets/1.json"))
            .and(query_param("count", "20"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server).await;
        Statuses::new(&client)
            .retrieve_retweets(1, &[("count", "20")])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn create_injects_status_first_and_filters_options() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/statuses/update.json"))
            .and(header_exists("Authorization"))
            .and(body_string("status=hello%20world&trim_user=1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server).await;
        Statuses::new(&client)
            .create("hello world", &[("trim_user", "1"), ("bogus", "x")])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn retweet_posts_to_id_endpoint() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/statuses/retweet/1.json"))
            .and(body_string("trim_user=1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server).await;
        Statuses::new(&client)
            .retweet(1, &[("trim_user", "1")])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn destroy_posts_to_id_endpoint() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/statuses/destroy/1.json"))
            .and(body_string(""))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server).await;
        Statuses::new(&client).destroy(1, &[]).await.unwrap();
    }
}
