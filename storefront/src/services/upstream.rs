// gamevault/storefront/src/services/upstream.rs

//! HTTP client for the external game catalog service.
//!
//! Two actions are used: `GET <base>/ping` lists every game and
//! `POST <base>/echo` runs a keyword search. Both authenticate with a static
//! `x-api-key` header. Responses must be JSON; anything else is an error and
//! nothing is retried.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{header, Client, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, instrument};

use gamevault::{CatalogSource, VaultError, VaultResult};

use crate::config::AppConfig;

pub const API_KEY_HEADER: &str = "x-api-key";
pub const SEARCH_ACTION: &str = "search_gameitems";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequest<'a> {
  post_body: &'a str,
  action: &'static str,
}

#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
  client: Client,
  base_url: String,
  api_key: String,
}

impl HttpCatalogSource {
  pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> VaultResult<Self> {
    let client = Client::builder()
      .user_agent(concat!("gamevault-storefront/", env!("CARGO_PKG_VERSION")))
      .build()
      .context("building upstream HTTP client")?;
    Ok(Self {
      client,
      base_url: base_url.into().trim_end_matches('/').to_string(),
      api_key: api_key.into(),
    })
  }

  pub fn from_config(config: &AppConfig) -> VaultResult<Self> {
    Self::new(config.upstream_base_url.clone(), config.upstream_api_key.clone())
  }

  fn url(&self, action: &str) -> String {
    format!("{}/{}", self.base_url, action)
  }

  fn headers(&self) -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));
    match header::HeaderValue::from_str(&self.api_key) {
      Ok(value) => {
        headers.insert(API_KEY_HEADER, value);
      }
      Err(e) => error!(error = %e, "Upstream API key is not a valid header value; sending request without it."),
    }
    headers
  }
}

/// Reads a response body as JSON, rejecting anything whose content-type is not JSON.
async fn read_json(response: Response) -> VaultResult<Value> {
  let status = response.status();
  let content_type = response
    .headers()
    .get(header::CONTENT_TYPE)
    .and_then(|v| v.to_str().ok())
    .map(str::to_string);

  if !content_type.as_deref().is_some_and(|ct| ct.contains("application/json")) {
    let body = response.text().await.unwrap_or_default();
    error!(%status, content_type = ?content_type, "Upstream returned a non-JSON response.");
    return Err(VaultError::NonJsonResponse { content_type, body });
  }

  let body = response
    .json::<Value>()
    .await
    .with_context(|| format!("decoding upstream JSON body (status {})", status))?;
  debug!(%status, "Upstream JSON response received.");
  Ok(body)
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
  #[instrument(name = "upstream::fetch_catalog", skip(self))]
  async fn fetch_catalog(&self) -> VaultResult<Value> {
    let response = self
      .client
      .get(self.url("ping"))
      .headers(self.headers())
      .send()
      .await
      .context("requesting upstream catalog listing")?;
    read_json(response).await
  }

  #[instrument(name = "upstream::search_catalog", skip(self))]
  async fn search_catalog(&self, keyword: &str) -> VaultResult<Value> {
    let response = self
      .client
      .post(self.url("echo"))
      .headers(self.headers())
      .json(&SearchRequest {
        post_body: keyword,
        action: SEARCH_ACTION,
      })
      .send()
      .await
      .context("requesting upstream catalog search")?;
    read_json(response).await
  }
}
