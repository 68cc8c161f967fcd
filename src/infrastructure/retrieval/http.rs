//! HTTP passage retriever for ColBERT-style search servers

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;

use crate::domain::{DomainError, PassageRetriever};
use crate::infrastructure::http_client::HttpClientTrait;

/// Retriever issuing `GET {url}?query=..&k=..`.
///
/// Accepts either `{"topk": [{"text": ..} | {"long_text": ..} | ".."]}` or
/// `{"passages": [".."]}`.
#[derive(Debug)]
pub struct HttpPassageRetriever<C: HttpClientTrait> {
    client: C,
    url: Url,
}

impl<C: HttpClientTrait> HttpPassageRetriever<C> {
    pub fn new(client: C, url: &str) -> Result<Self, DomainError> {
        let url = Url::parse(url).map_err(|e| {
            DomainError::configuration(format!("Invalid retrieval endpoint '{}': {}", url, e))
        })?;

        Ok(Self { client, url })
    }

    fn search_url(&self, query: &str, k: usize) -> String {
        let mut url = self.url.clone();
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("k", &k.to_string());
        url.into()
    }
}

fn passage_text(item: &Value) -> Option<String> {
    match item {
        Value::String(text) => Some(text.clone()),
        Value::Object(fields) => fields
            .get("text")
            .or_else(|| fields.get("long_text"))
            .and_then(Value::as_str)
            .map(String::from),
        _ => None,
    }
}

fn parse_passages(body: &Value) -> Result<Vec<String>, DomainError> {
    let items = body
        .get("topk")
        .or_else(|| body.get("passages"))
        .and_then(Value::as_array)
        .ok_or_else(|| DomainError::retrieval("Unexpected response shape from retrieval endpoint"))?;

    Ok(items
        .iter()
        .filter_map(passage_text)
        .filter(|text| !text.trim().is_empty())
        .collect())
}

#[async_trait]
impl<C: HttpClientTrait> PassageRetriever for HttpPassageRetriever<C> {
    async fn retrieve(&self, query: &str, k: usize) -> Result<Vec<String>, DomainError> {
        let response = self.client.get_json(&self.search_url(query, k), vec![]).await?;

        if !response.is_success() {
            return Err(DomainError::retrieval(format!(
                "Retrieval endpoint returned status {}",
                response.status
            )));
        }

        let mut passages = parse_passages(&response.body)?;
        passages.truncate(k);
        Ok(passages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http_client::HttpClient;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_retrieve_topk() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/search"))
            .and(query_param("query", "coral bleaching"))
            .and(query_param("k", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "topk": [
                    { "text": "Coral bleaching occurs when...", "score": 20.1 },
                    { "long_text": "Marine heatwaves | ...", "score": 18.0 },
                    { "text": "A third passage", "score": 10.0 }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let retriever =
            HttpPassageRetriever::new(HttpClient::new(), &format!("{}/api/search", server.uri()))
                .unwrap();

        let passages = retriever.retrieve("coral bleaching", 2).await.unwrap();

        assert_eq!(
            passages,
            vec!["Coral bleaching occurs when...", "Marine heatwaves | ..."]
        );
    }

    #[tokio::test]
    async fn test_retrieve_plain_passages() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "passages": ["one", "", "two"]
            })))
            .mount(&server)
            .await;

        let retriever = HttpPassageRetriever::new(HttpClient::new(), &server.uri()).unwrap();

        let passages = retriever.retrieve("anything", 5).await.unwrap();
        assert_eq!(passages, vec!["one", "two"]);
    }

    #[tokio::test]
    async fn test_retrieve_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let retriever = HttpPassageRetriever::new(HttpClient::new(), &server.uri()).unwrap();

        let result = retriever.retrieve("anything", 5).await;
        assert!(matches!(result, Err(DomainError::Retrieval { .. })));
    }

    #[test]
    fn test_unexpected_shape() {
        let result = parse_passages(&serde_json::json!({ "results": [] }));
        assert!(result.is_err());
    }
}
