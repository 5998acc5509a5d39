use std::sync::OnceLock;

use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use toolshed_core::{Error, Schema, Tool};

const DEFAULT_ENDPOINT: &str = "https://duckduckgo.com/html/";

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.3.1 Safari/605.1.15";

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new("<[^>]*>").expect("tag pattern compiles"))
}

fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Web search over a DuckDuckGo-compatible HTML endpoint.
///
/// Result snippets are scraped line-wise from the HTML response; upstream
/// failures surface as execution errors and never take the registry down.
pub struct SearchTool {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Deserialize)]
struct SearchParams {
    query: String,
}

impl SearchTool {
    #[must_use]
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Point the tool at a different endpoint (used by tests).
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for SearchTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for SearchTool {
    fn name(&self) -> &str {
        "search_web"
    }

    fn description(&self) -> &str {
        "Search online if the requested information cannot be found in the language model \
         or the information could be present in a time after the language model was trained."
    }

    fn schema(&self) -> Schema {
        Schema::object(
            vec![(
                "query",
                Schema::string()
                    .describe("the text to search online to get the necessary information"),
            )],
            &["query"],
        )
    }

    async fn execute(&self, parameters: Value) -> Result<String, Error> {
        let params: SearchParams = serde_json::from_value(parameters)
            .map_err(|error| Error::InvalidParameters(error.to_string()))?;

        tracing::debug!(query = %params.query, "searching");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", params.query.as_str())])
            .header("User-Agent", USER_AGENT)
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|error| Error::Execution(error.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Execution(format!(
                "search endpoint returned {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|error| Error::Execution(error.to_string()))?;

        let snippets: Vec<String> = body
            .lines()
            .filter(|line| line.contains("result__snippet"))
            .map(|line| normalize(&tag_pattern().replace_all(line, "")))
            .filter(|snippet| !snippet.is_empty())
            .collect();

        if snippets.is_empty() {
            return Ok("no results found".to_string());
        }

        Ok(snippets.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const RESULTS_PAGE: &str = concat!(
        "<html><body>\n",
        "<div class=\"result\">\n",
        "<a class=\"result__snippet\" href=\"/x\">Paris is the <b>capital</b>   of France.</a>\n",
        "</div>\n",
        "<div class=\"result\">\n",
        "<a class=\"result__snippet\" href=\"/y\">It has a population of 2 million.</a>\n",
        "</div>\n",
        "</body></html>\n",
    );

    #[tokio::test]
    async fn extracts_snippets_from_results() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/html/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(RESULTS_PAGE)
            .create_async()
            .await;

        let tool = SearchTool::with_endpoint(format!("{}/html/", server.url()));
        let data = tool.execute(json!({"query": "paris"})).await.unwrap();

        mock.assert_async().await;
        assert!(data.contains("Paris is the capital of France."));
        assert!(data.contains("population of 2 million"));
    }

    #[tokio::test]
    async fn reports_when_nothing_matches() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/html/")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body("<html><body>nothing here</body></html>")
            .create_async()
            .await;

        let tool = SearchTool::with_endpoint(format!("{}/html/", server.url()));
        let data = tool.execute(json!({"query": "paris"})).await.unwrap();
        assert_eq!(data, "no results found");
    }

    #[tokio::test]
    async fn upstream_failure_is_an_execution_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/html/")
            .match_query(mockito::Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let tool = SearchTool::with_endpoint(format!("{}/html/", server.url()));
        let error = tool.execute(json!({"query": "paris"})).await.unwrap_err();
        assert!(matches!(error, Error::Execution(_)));
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize("  a \t b\n c  "), "a b c");
    }
}
