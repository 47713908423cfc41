use std::time::Duration;

use reqwest::{Client, Url};
use tracing::{debug, error};

use crate::category::Category;
use crate::state::FetchPlan;

/// Articles per upstream page. The free GNews tier caps this at 10.
pub const PAGE_SIZE: u32 = 10;

const LANG: &str = "en";
const COUNTRY: &str = "us";

/// Failure talking to the news API. The display form never includes the
/// API key or the raw upstream body; those stay in server-side logs.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("upstream request failed")]
    Transport(#[source] reqwest::Error),
    #[error("upstream returned status {status}")]
    Status { status: reqwest::StatusCode },
    #[error("upstream returned malformed JSON")]
    Decode(#[source] reqwest::Error),
    #[error("invalid upstream base URL")]
    BadBaseUrl(#[source] url::ParseError),
}

/// Client for the GNews REST API.
pub struct NewsClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl NewsClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("aconews/0.1 (news proxy)")
            .build()
            .map_err(FetchError::Transport)?;

        Ok(Self {
            client,
            base_url: Url::parse(base_url).map_err(FetchError::BadBaseUrl)?,
            api_key: api_key.to_string(),
        })
    }

    /// `GET {base}/top-headlines?category=&lang=en&country=us&max=10&page=&apikey=`
    pub fn headlines_url(&self, category: Category, page: u32) -> Result<Url, FetchError> {
        let mut url = self.endpoint("top-headlines")?;
        url.query_pairs_mut()
            .append_pair("category", category.as_str())
            .append_pair("lang", LANG)
            .append_pair("country", COUNTRY)
            .append_pair("max", &PAGE_SIZE.to_string())
            .append_pair("page", &page.to_string())
            .append_pair("apikey", &self.api_key);
        Ok(url)
    }

    /// `GET {base}/search?q=&lang=en&max=10&page=&apikey=`
    pub fn search_url(&self, query: &str, page: u32) -> Result<Url, FetchError> {
        let mut url = self.endpoint("search")?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("lang", LANG)
            .append_pair("max", &PAGE_SIZE.to_string())
            .append_pair("page", &page.to_string())
            .append_pair("apikey", &self.api_key);
        Ok(url)
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        // Url::join treats a missing trailing slash as a file component.
        let mut base = self.base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Url::parse(&base)
            .and_then(|b| b.join(path))
            .map_err(FetchError::BadBaseUrl)
    }

    pub async fn top_headlines(
        &self,
        category: Category,
        page: u32,
    ) -> Result<serde_json::Value, FetchError> {
        let url = self.headlines_url(category, page)?;
        self.fetch(url).await
    }

    pub async fn search(&self, query: &str, page: u32) -> Result<serde_json::Value, FetchError> {
        let url = self.search_url(query, page)?;
        self.fetch(url).await
    }

    /// Issue the single upstream request a [`FetchPlan`] resolves to.
    pub async fn execute(&self, plan: &FetchPlan) -> Result<serde_json::Value, FetchError> {
        match plan {
            FetchPlan::Search { query, page } => self.search(query, *page).await,
            FetchPlan::TopHeadlines { category, page } => {
                self.top_headlines(*category, *page).await
            }
        }
    }

    /// One attempt, no retries. The response body is relayed verbatim as
    /// JSON; callers expect the upstream `{ "articles": [...] }` shape but
    /// nothing here depends on it.
    async fn fetch(&self, url: Url) -> Result<serde_json::Value, FetchError> {
        debug!(endpoint = url.path(), "fetching news from upstream");

        let response = self.client.get(url).send().await.map_err(|e| {
            error!("upstream request failed: {e}");
            FetchError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!(%status, "upstream error response: {detail}");
            return Err(FetchError::Status { status });
        }

        response.json().await.map_err(|e| {
            error!("failed to decode upstream body: {e}");
            FetchError::Decode(e)
        })
    }
}
