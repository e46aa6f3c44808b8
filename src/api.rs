use crate::config::ClientConfig;
use crate::error::JokeError;
use crate::models::JokeRecord;
use log::{ debug, warn };
use reqwest::header;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub struct JokeClient {
    client: reqwest::blocking::Client,
    config: ClientConfig,
}

impl JokeClient {
    pub fn new(config: ClientConfig) -> Result<Self, JokeError> {
        let client = reqwest::blocking::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Jokes listed by the search endpoint, in the order the service sent them.
    pub fn search(&self) -> Result<Vec<JokeRecord>, JokeError> {
        let body = self.get("search")?;
        extract(&body, "results")
    }

    /// The `joke` value of one random joke.
    pub fn random(&self) -> Result<JokeRecord, JokeError> {
        let body = self.get("")?;
        extract(&body, "joke")
    }

    fn get(&self, path: &str) -> Result<String, JokeError> {
        let url = self.config.url(path);
        debug!("GET {}", url);

        let resp = self.client
            .get(&url)
            .header(header::ACCEPT, self.config.accept.clone())
            .send()?;
        if !resp.status().is_success() {
            warn!("{} answered with status {}", url, resp.status());
        }

        Ok(resp.text()?)
    }
}

/// Parses `body` as JSON and deserializes the value under `key` into `T`.
/// A missing key is an error, never a default.
fn extract<T: DeserializeOwned>(body: &str, key: &str) -> Result<T, JokeError> {
    let mut json: Value = serde_json::from_str(body).map_err(|e| {
        warn!("response body is not JSON: {}", e);
        JokeError::MalformedResponse(format!("body is not valid JSON: {}", e))
    })?;

    let value = json
        .get_mut(key)
        .map(Value::take)
        .ok_or_else(|| {
            warn!("response body has no `{}` key", key);
            JokeError::MalformedResponse(format!("missing `{}` key", key))
        })?;
    debug!("extracted `{}`", key);

    serde_json::from_value(value).map_err(|e|
        JokeError::MalformedResponse(format!("unexpected `{}` value: {}", key, e))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::net::TcpListener;
    use std::time::Duration;

    fn client_for(server: &mockito::Server) -> JokeClient {
        JokeClient::new(ClientConfig::default().with_base_url(server.url())).unwrap()
    }

    #[test]
    fn search_returns_results_unmodified() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/search")
            .match_header("accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"results": [{"id":"1","joke":"x"}], "total_pages":1}"#)
            .expect(2)
            .create();

        let client = client_for(&server);
        assert_eq!(client.search().unwrap(), vec![json!({"id": "1", "joke": "x"})]);
        assert_eq!(client.search().unwrap(), vec![json!({"id": "1", "joke": "x"})]);
        mock.assert();
    }

    #[test]
    fn random_returns_the_joke_value() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/")
            .match_header("accept", "application/json")
            .with_body(r#"{"id":"2","joke":"y","status":200}"#)
            .create();

        assert_eq!(client_for(&server).random().unwrap(), json!("y"));
        mock.assert();
    }

    #[test]
    fn network_failure_is_remote_unavailable() {
        // Bind then drop to get a port nobody listens on.
        let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
        let config = ClientConfig::default().with_base_url(format!("http://127.0.0.1:{}", port));
        let client = JokeClient::new(config).unwrap();

        assert!(matches!(client.search(), Err(JokeError::RemoteUnavailable(_))));
        assert!(matches!(client.random(), Err(JokeError::RemoteUnavailable(_))));
    }

    fn slow_server(path: &str, body: &'static [u8]) -> (mockito::ServerGuard, mockito::Mock) {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", path)
            .with_chunked_body(move |w| {
                std::thread::sleep(Duration::from_millis(1500));
                w.write_all(body)
            })
            .expect(1)
            .create();
        (server, mock)
    }

    fn impatient_client(server: &mockito::Server) -> JokeClient {
        let config = ClientConfig::default()
            .with_base_url(server.url())
            .with_timeout(Duration::from_millis(200));
        JokeClient::new(config).unwrap()
    }

    #[test]
    fn slow_search_times_out_without_retry() {
        let (server, mock) = slow_server("/search", br#"{"results":[]}"#);

        assert!(matches!(impatient_client(&server).search(), Err(JokeError::RemoteUnavailable(_))));
        mock.assert();
    }

    #[test]
    fn slow_random_times_out_without_retry() {
        let (server, mock) = slow_server("/", br#"{"joke":"late"}"#);

        assert!(matches!(impatient_client(&server).random(), Err(JokeError::RemoteUnavailable(_))));
        mock.assert();
    }

    #[test]
    fn records_keep_key_order_and_number_text() {
        let record = r#"{"zeta":1,"alpha":2,"n":12345678901234567890123,"big":1e400}"#;
        let mut server = mockito::Server::new();
        let _search = server
            .mock("GET", "/search")
            .with_body(format!(r#"{{"results":[{}],"total_pages":1}}"#, record))
            .create();

        let results = client_for(&server).search().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].to_string(), record);
    }

    #[test]
    fn invalid_json_is_malformed_and_not_retried() {
        let mut server = mockito::Server::new();
        let search = server.mock("GET", "/search").with_body("<html>oops</html>").expect(1).create();
        let random = server.mock("GET", "/").with_body("not json").expect(1).create();

        let client = client_for(&server);
        assert!(matches!(client.search(), Err(JokeError::MalformedResponse(_))));
        assert!(matches!(client.random(), Err(JokeError::MalformedResponse(_))));
        search.assert();
        random.assert();
    }

    #[test]
    fn missing_key_is_malformed() {
        let mut server = mockito::Server::new();
        let _search = server.mock("GET", "/search").with_body(r#"{"total_pages":1}"#).create();
        let _random = server.mock("GET", "/").with_body(r#"{"id":"2"}"#).create();

        let client = client_for(&server);
        match client.search() {
            Err(JokeError::MalformedResponse(msg)) => assert!(msg.contains("results")),
            other => panic!("expected MalformedResponse, got {:?}", other),
        }
        match client.random() {
            Err(JokeError::MalformedResponse(msg)) => assert!(msg.contains("joke")),
            other => panic!("expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn error_status_without_key_is_malformed() {
        let mut server = mockito::Server::new();
        let _random = server
            .mock("GET", "/")
            .with_status(404)
            .with_body(r#"{"status":404,"message":"Joke not found"}"#)
            .create();

        assert!(matches!(client_for(&server).random(), Err(JokeError::MalformedResponse(_))));
    }

    #[test]
    fn results_must_be_an_array() {
        assert!(matches!(
            extract::<Vec<JokeRecord>>(r#"{"results": {"id":"1"}}"#, "results"),
            Err(JokeError::MalformedResponse(_))
        ));
        assert_eq!(extract::<JokeRecord>(r#"{"joke": null}"#, "joke").unwrap(), Value::Null);
    }
}
