use std::time::Duration;
use async_trait::async_trait;
use awardscout_core::{Airport, SearchRequest, SearchResponse};
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// Non-2xx answer. `message` is the server's `error` field when it sent one.
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("{0}")]
    InvalidForm(String),
}

/// The two calls the search screen makes against the backend.
#[async_trait]
pub trait SearchApi: Send + Sync {
    async fn airports(&self) -> Result<Vec<Airport>, ClientError>;

    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ClientError>;
}

#[derive(Deserialize)]
struct AirportsBody {
    airports: Vec<Airport>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

pub struct HttpSearchApi {
    client: Client,
    base_url: String,
}

impl HttpSearchApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl SearchApi for HttpSearchApi {
    async fn airports(&self) -> Result<Vec<Airport>, ClientError> {
        let res = self.client.get(self.url("/api/airports")).send().await?;
        let body: AirportsBody = ensure_success(res).await?.json().await?;
        debug!("Fetched {} airports", body.airports.len());
        Ok(body.airports)
    }

    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ClientError> {
        let res = self
            .client
            .post(self.url("/api/search"))
            .json(request)
            .send()
            .await?;
        Ok(ensure_success(res).await?.json().await?)
    }
}

/// Turn a non-2xx response into `ClientError::Status`, preferring the
/// `error` field of a JSON body over the bare status line.
async fn ensure_success(res: Response) -> Result<Response, ClientError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let text = res.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));

    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}
