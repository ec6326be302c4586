use serde::{Deserialize, Serialize};

use super::{ToolError, ToolResult};
use crate::http::HttpClient;

pub const DEFAULT_TAVILY_BASE_URL: &str = "https://api.tavily.com";

/// Tavily search with the synthesized-answer toggle switched on.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: HttpClient,
    api_key: Option<String>,
    base_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub results: Vec<SearchHit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl SearchResponse {
    /// The synthesized answer, when the service produced a non-blank one.
    pub fn answer(&self) -> Option<&str> {
        self.answer
            .as_deref()
            .map(str::trim)
            .filter(|answer| !answer.is_empty())
    }
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    search_depth: &'static str,
    include_answer: bool,
}

impl SearchClient {
    pub fn new(http: HttpClient, api_key: Option<String>, base_url: String) -> Self {
        Self {
            http,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn api_key(&self) -> ToolResult<&str> {
        self.api_key
            .as_deref()
            .ok_or(ToolError::MissingApiKey("TAVILY_API_KEY"))
    }

    /// `context` names the activity in failure messages, e.g. "executing Tavily search".
    pub async fn search(&self, query: &str, context: &'static str) -> ToolResult<SearchResponse> {
        let api_key = self.api_key()?;
        let payload = SearchRequest {
            api_key,
            query,
            search_depth: "basic",
            include_answer: true,
        };
        let failed = |message: String| ToolError::Search { context, message };

        let resp = self
            .http
            .post_json(&format!("{}/search", self.base_url), None, &payload)
            .await
            .map_err(|err| failed(err.to_string()))?;

        if !resp.is_success() {
            let body = resp.body.chars().take(200).collect::<String>();
            return Err(failed(format!("HTTP status {}: {body}", resp.status)));
        }

        serde_json::from_str::<SearchResponse>(&resp.body).map_err(|err| failed(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{SearchClient, SearchHit};
    use crate::http::{HttpClient, HttpDebugConfig};
    use crate::tools::ToolError;
    use reqwest::Client;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn search_client(server: &MockServer, key: Option<&str>) -> SearchClient {
        SearchClient::new(
            HttpClient::new(Client::new(), HttpDebugConfig::disabled()),
            key.map(ToString::to_string),
            server.uri(),
        )
    }

    #[tokio::test]
    async fn search_sends_key_and_answer_toggle() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search"))
            .and(body_partial_json(serde_json::json!({
                "api_key": "tvly-test",
                "query": "Rome metro day pass",
                "search_depth": "basic",
                "include_answer": true
            })))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"answer":null,"results":[{"title":"ATAC","content":"7 EUR day pass","url":"https://atac.roma.it"}]}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let resp = search_client(&server, Some("tvly-test"))
            .search("Rome metro day pass", "executing Tavily search")
            .await
            .expect("search");

        assert_eq!(resp.answer(), None);
        assert_eq!(
            resp.results,
            vec![SearchHit {
                title: "ATAC".to_string(),
                content: "7 EUR day pass".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn search_without_key_fails_before_any_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = search_client(&server, Some("  "))
            .search("anything", "executing Tavily search")
            .await
            .expect_err("missing key");

        assert_eq!(err, ToolError::MissingApiKey("TAVILY_API_KEY"));
    }

    #[tokio::test]
    async fn search_maps_http_failure_with_context() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(432).set_body_string("usage limit"))
            .mount(&server)
            .await;

        let err = search_client(&server, Some("tvly-test"))
            .search("anything", "querying budget information")
            .await
            .expect_err("432");

        assert_eq!(
            err.to_string(),
            "Problem occurred while querying budget information - HTTP status 432: usage limit"
        );
    }
}
