//! HTTP access to a jService-compatible trivia API.

use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use trivia_core::{
    CategoryId, CategoryProvider, CategorySummary, GameError, RawCategory, Result,
};

pub(crate) const DEFAULT_BASE_URL: &str = "https://jservice.io/api/";

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpProvider {
    base_url: String,
}

impl HttpProvider {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    fn categories_url(&self, count: usize) -> String {
        format!("{}categories?count={}", self.base_url, count)
    }

    fn category_url(&self, id: CategoryId) -> String {
        format!("{}category?id={}", self.base_url, id.0)
    }

    async fn get_json<T: DeserializeOwned>(url: &str) -> std::result::Result<T, String> {
        log::debug!("GET {}", url);
        let response = Request::get(url)
            .send()
            .await
            .map_err(|err| err.to_string())?;

        if !response.ok() {
            return Err(format!(
                "HTTP {} {}",
                response.status(),
                response.status_text()
            ));
        }

        response.json::<T>().await.map_err(|err| err.to_string())
    }
}

impl CategoryProvider for HttpProvider {
    async fn list_categories(&self, count: usize) -> Result<Vec<CategorySummary>> {
        Self::get_json(&self.categories_url(count))
            .await
            .map_err(|reason| GameError::PoolFetch { reason })
    }

    async fn category(&self, id: CategoryId) -> Result<RawCategory> {
        Self::get_json(&self.category_url(id))
            .await
            .map_err(|reason| GameError::CategoryFetch { id, reason })
    }
}
