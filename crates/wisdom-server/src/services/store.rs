//! REST client for the remote wisdom store
//!
//! Talks to the store's PostgREST-style query interface. Every method is one
//! request/response cycle; there is no pooling contract, no retry, and no
//! state shared between calls beyond the reqwest client itself.

use reqwest::header::CONTENT_RANGE;
use reqwest::{Client as ReqwestClient, RequestBuilder, StatusCode};
use thiserror::Error;
use wisdom_types::{WisdomRecord, COUNT_UNKNOWN};

use crate::config::Config;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("store returned status {0}")]
    Status(StatusCode),

    #[error("store returned no representation of the inserted row")]
    EmptyRepresentation,
}

pub struct StoreClient {
    http: ReqwestClient,
    base_url: String,
    api_key: String,
}

impl StoreClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: ReqwestClient::new(),
            base_url: config.store_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    fn get(&self, path_and_query: &str) -> RequestBuilder {
        self.authed(self.http.get(format!("{}{}", self.base_url, path_and_query)))
    }

    fn authed(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// All approved records, in whatever order the store returns them.
    pub async fn approved(&self) -> Result<Vec<WisdomRecord>, StoreError> {
        let resp = self
            .get("/rest/v1/wisdoms?select=*&approved=eq.true")
            .send()
            .await?;
        if resp.status() != StatusCode::OK {
            return Err(StoreError::Status(resp.status()));
        }
        Ok(resp.json().await?)
    }

    /// All approved records, newest first.
    pub async fn approved_newest_first(&self) -> Result<Vec<WisdomRecord>, StoreError> {
        let resp = self
            .get("/rest/v1/wisdoms?select=*&approved=eq.true&order=created_at.desc")
            .send()
            .await?;
        if resp.status() != StatusCode::OK {
            return Err(StoreError::Status(resp.status()));
        }
        Ok(resp.json().await?)
    }

    /// Inserts one record and returns the row the store wrote.
    ///
    /// Everything this service writes is approved; there is no pending pile.
    pub async fn insert(&self, wisdom: &str, author: &str) -> Result<WisdomRecord, StoreError> {
        let resp = self
            .authed(self.http.post(format!("{}/rest/v1/wisdoms", self.base_url)))
            .header("Prefer", "return=representation")
            .json(&serde_json::json!({
                "wisdom": wisdom,
                "author": author,
                "approved": true,
            }))
            .send()
            .await?;

        let status = resp.status();
        if status != StatusCode::OK && status != StatusCode::CREATED {
            return Err(StoreError::Status(status));
        }

        // The representation comes back as an array of inserted rows.
        let rows: Vec<WisdomRecord> = resp.json().await?;
        rows.into_iter()
            .next()
            .ok_or(StoreError::EmptyRepresentation)
    }

    /// Exact count of approved records, reported as a string.
    ///
    /// The total sits after the final `/` of the `Content-Range` response
    /// header (`"0-4/5"` -> `"5"`). A missing header degrades to `"?"`
    /// instead of failing; only transport errors surface as `Err`.
    pub async fn approved_count(&self) -> Result<String, StoreError> {
        let resp = self
            .get("/rest/v1/wisdoms?select=count&approved=eq.true")
            .header("Prefer", "count=exact")
            .send()
            .await?;

        let count = resp
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .and_then(|range| range.rsplit('/').next())
            .unwrap_or(COUNT_UNKNOWN)
            .to_string();

        Ok(count)
    }
}
