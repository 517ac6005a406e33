//! Maven Central search API adapter
//!
//! Queries https://search.maven.org/solrsearch/select with a term built
//! from a coordinate (`g:... AND a:...`). Request parameters are an
//! explicit ordered key-value list.

use crate::domain::Coordinate;
use crate::error::LookupError;
use crate::registry::HttpClient;
use serde::{Deserialize, Serialize};

/// Maven Central search API base URL
const SOLR_SEARCH_URL: &str = "https://search.maven.org/solrsearch/select";

/// A search request
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Query term, e.g. `g:org.slf4j AND a:slf4j-api`
    pub q: String,
    /// Search core; `gav` lists individual versions
    pub core: Option<String>,
    /// Result offset
    pub start: u32,
    /// Maximum rows
    pub rows: u32,
}

impl SearchRequest {
    /// Creates a request for a raw query term
    pub fn new(q: impl Into<String>, core: Option<&str>, start: u32, rows: u32) -> Self {
        Self {
            q: q.into(),
            core: core.map(str::to_string),
            start,
            rows,
        }
    }

    /// Creates a request for a coordinate, searching the gav core
    pub fn for_coordinate(coord: &Coordinate, rows: u32) -> Self {
        Self::new(query_term(coord), Some("gav"), 0, rows)
    }

    /// The request parameters as an ordered key-value list
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("q", self.q.clone())];
        if let Some(ref core) = self.core {
            pairs.push(("core", core.clone()));
        }
        pairs.push(("start", self.start.to_string()));
        pairs.push(("rows", self.rows.to_string()));
        pairs.push(("wt", "json".to_string()));
        pairs
    }

    /// The full request URL with encoded parameters
    pub fn to_url(&self) -> Result<String, LookupError> {
        reqwest::Url::parse_with_params(SOLR_SEARCH_URL, self.query_pairs())
            .map(String::from)
            .map_err(|e| LookupError::transport(SOLR_SEARCH_URL, e.to_string()))
    }
}

/// Builds the search term for a coordinate
pub fn query_term(coord: &Coordinate) -> String {
    let mut parts = Vec::new();
    if let Some(ref group) = coord.group_id {
        parts.push(format!("g:{}", group));
    }
    parts.push(format!("a:{}", coord.artifact_id));
    if let Some(ref version) = coord.version {
        parts.push(format!("v:{}", version));
    }
    parts.join(" AND ")
}

/// Search response envelope
#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub response: SearchResponseBody,
}

/// Search response body
#[derive(Debug, Deserialize)]
pub struct SearchResponseBody {
    #[serde(rename = "numFound")]
    pub num_found: u64,
    pub docs: Vec<SearchDoc>,
}

/// One search result document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchDoc {
    /// Document id, `group:artifact[:version]`
    pub id: String,
    /// Group id
    pub g: String,
    /// Artifact id
    pub a: String,
    /// Version (gav core only)
    #[serde(default)]
    pub v: Option<String>,
    /// Latest version (artifact core only)
    #[serde(rename = "latestVersion", default)]
    pub latest_version: Option<String>,
    /// Release timestamp in milliseconds since the epoch
    pub timestamp: i64,
}

/// Maven Central search client
pub struct SearchClient {
    client: HttpClient,
}

impl SearchClient {
    /// Create a new search client
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Run a search request
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResult, LookupError> {
        let url = request.to_url()?;
        self.client.get_json(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_term_full() {
        let coord = Coordinate::new(Some("org.slf4j"), "slf4j-api", Some("2.0.17"));
        assert_eq!(query_term(&coord), "g:org.slf4j AND a:slf4j-api AND v:2.0.17");
    }

    #[test]
    fn test_query_term_artifact_only() {
        let coord = Coordinate::new(None::<String>, "slf4j-api", None::<String>);
        assert_eq!(query_term(&coord), "a:slf4j-api");
    }

    #[test]
    fn test_query_pairs_order() {
        let request = SearchRequest::new("a:wicket", Some("gav"), 0, 40);
        let pairs = request.query_pairs();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["q", "core", "start", "rows", "wt"]);
    }

    #[test]
    fn test_query_pairs_without_core() {
        let request = SearchRequest::new("a:wicket", None, 0, 40);
        let keys: Vec<&str> = request.query_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["q", "start", "rows", "wt"]);
    }

    #[test]
    fn test_to_url_encodes_term() {
        let coord = Coordinate::new(Some("org.slf4j"), "slf4j-api", None::<String>);
        let request = SearchRequest::for_coordinate(&coord, 40);
        let url = request.to_url().unwrap();
        assert!(url.starts_with(SOLR_SEARCH_URL));
        assert!(url.contains("core=gav"));
        assert!(url.contains("rows=40"));
        assert!(url.contains("wt=json"));
        // the AND separators are percent-encoded
        assert!(!url.contains(" AND "));
    }

    #[test]
    fn test_deserialize_response() {
        let json = r#"
        {
            "response": {
                "numFound": 2,
                "docs": [
                    {"id": "org.apache.wicket:wicket-core:9.12.0",
                     "g": "org.apache.wicket", "a": "wicket-core",
                     "v": "9.12.0", "timestamp": 1705314600000},
                    {"id": "org.apache.wicket:wicket-core:9.11.0",
                     "g": "org.apache.wicket", "a": "wicket-core",
                     "v": "9.11.0", "timestamp": 1702722600000}
                ]
            }
        }
        "#;

        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.response.num_found, 2);
        assert_eq!(result.response.docs.len(), 2);
        assert_eq!(result.response.docs[0].v.as_deref(), Some("9.12.0"));
    }

    #[test]
    fn test_deserialize_artifact_core_doc() {
        let json = r#"
        {
            "response": {
                "numFound": 1,
                "docs": [
                    {"id": "org.slf4j:slf4j-api", "g": "org.slf4j",
                     "a": "slf4j-api", "latestVersion": "2.0.17",
                     "timestamp": 1705314600000}
                ]
            }
        }
        "#;

        let result: SearchResult = serde_json::from_str(json).unwrap();
        let doc = &result.response.docs[0];
        assert_eq!(doc.latest_version.as_deref(), Some("2.0.17"));
        assert_eq!(doc.v, None);
    }
}
