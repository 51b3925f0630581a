use crate::core::{Karigar, KarigarSource, Order, OrderSource};
use crate::utils::error::{BoardError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Pulls orders from an HTTP endpoint that answers GET with a JSON array.
#[derive(Debug, Clone)]
pub struct HttpOrderSource {
    client: Client,
    orders_endpoint: String,
    karigars_endpoint: Option<String>,
    timeout: Duration,
}

impl HttpOrderSource {
    pub fn new(orders_endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            orders_endpoint: orders_endpoint.into(),
            karigars_endpoint: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }

    pub fn with_karigars(mut self, karigars_endpoint: impl Into<String>) -> Self {
        self.karigars_endpoint = Some(karigars_endpoint.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        tracing::debug!("Making API request to: {}", endpoint);
        let response = self
            .client
            .get(endpoint)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(BoardError::ApiStatusError {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl OrderSource for HttpOrderSource {
    async fn fetch_orders(&self) -> Result<Vec<Order>> {
        let orders: Vec<Order> = self.get_json(&self.orders_endpoint).await?;
        tracing::info!("🌐 Fetched {} orders from {}", orders.len(), self.orders_endpoint);
        Ok(orders)
    }
}

#[async_trait]
impl KarigarSource for HttpOrderSource {
    async fn fetch_karigars(&self) -> Result<Vec<Karigar>> {
        let Some(endpoint) = &self.karigars_endpoint else {
            return Ok(Vec::new());
        };
        let karigars: Vec<Karigar> = self.get_json(endpoint).await?;
        tracing::info!("🌐 Fetched {} karigars from {}", karigars.len(), endpoint);
        Ok(karigars)
    }
}
