use crate::models::{Dog, DogSearchQuery, MatchResponse, SearchResponse};
use crate::services::client::{ApiClient, ApiError};

const SEARCH_PATH: &str = "/dogs/search";

impl ApiClient {
    /// Fetch every breed name known to the service
    pub async fn fetch_breeds(&self) -> Result<Vec<String>, ApiError> {
        self.get_json("/dogs/breeds").await
    }

    /// Fetch the first page of a dog search
    pub async fn search_dogs(&self, query: &DogSearchQuery) -> Result<SearchResponse, ApiError> {
        let path = format!("{}{}", SEARCH_PATH, query.to_query_string());
        self.fetch_search_page(&path).await
    }

    /// Fetch a page addressed by the `next` cursor of an earlier response
    ///
    /// The cursor is normally a full `/dogs/search?...` path; anything else is
    /// treated as a query suffix of the search endpoint.
    pub async fn fetch_search_page(&self, cursor: &str) -> Result<SearchResponse, ApiError> {
        let path = if cursor.starts_with(SEARCH_PATH) {
            cursor.to_string()
        } else {
            format!("{}{}", SEARCH_PATH, cursor)
        };

        let response: SearchResponse = self.get_json(&path).await?;
        tracing::debug!(
            "Search page returned {} ids (total: {}, more: {})",
            response.result_ids.len(),
            response.total,
            response.next.is_some()
        );
        Ok(response)
    }

    /// Fetch full records for a batch of dog ids
    pub async fn fetch_dog_details(&self, ids: &[String]) -> Result<Vec<Dog>, ApiError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.post_json("/dogs", ids).await
    }

    /// Ask the service to pick one dog from `favorite_ids`
    ///
    /// Returns `None` when the service chose nothing.
    pub async fn fetch_match(&self, favorite_ids: &[String]) -> Result<Option<String>, ApiError> {
        if favorite_ids.is_empty() {
            return Err(ApiError::Validation("No favorites selected".to_string()));
        }

        let response: MatchResponse = self.post_json("/dogs/match", favorite_ids).await?;
        Ok(response.matched.filter(|id| !id.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_cursor_path_used_verbatim() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/dogs/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("size".into(), "25".into()),
                Matcher::UrlEncoded("from".into(), "25".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"resultIds":["x"],"total":26}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url()).unwrap();
        let page = client
            .fetch_search_page("/dogs/search?size=25&from=25")
            .await
            .unwrap();

        assert_eq!(page.result_ids, vec!["x"]);
        assert!(page.next.is_none());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_bare_query_cursor_is_prefixed() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/dogs/search")
            .match_query(Matcher::UrlEncoded("from".into(), "50".into()))
            .with_status(200)
            .with_body(r#"{"resultIds":[],"next":null,"total":50}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url()).unwrap();
        client.fetch_search_page("?from=50").await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_empty_detail_batch_skips_network() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("POST", "/dogs").expect(0).create_async().await;

        let client = ApiClient::new(server.url()).unwrap();
        assert!(client.fetch_dog_details(&[]).await.unwrap().is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_match_without_favorites_is_validation_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server.mock("POST", "/dogs/match").expect(0).create_async().await;

        let client = ApiClient::new(server.url()).unwrap();
        let result = client.fetch_match(&[]).await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_match_null_is_none() {
        let mut server = mockito::Server::new_async().await;
        let _matched = server
            .mock("POST", "/dogs/match")
            .with_status(200)
            .with_body(r#"{"match":null}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url()).unwrap();
        let matched = client.fetch_match(&["a".to_string()]).await.unwrap();
        assert_eq!(matched, None);
    }
}
