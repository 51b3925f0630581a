use crate::core::{Karigar, KarigarSource, Order, OrderSource, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Orders (and optionally karigars) from JSON arrays on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource<S: Storage> {
    storage: S,
    orders_path: String,
    karigars_path: Option<String>,
}

impl<S: Storage> JsonFileSource<S> {
    pub fn new(storage: S, orders_path: impl Into<String>) -> Self {
        Self {
            storage,
            orders_path: orders_path.into(),
            karigars_path: None,
        }
    }

    /// Source used only for its karigar file; `fetch_orders` yields nothing.
    pub fn karigars_only(storage: S, karigars_path: impl Into<String>) -> Self {
        Self {
            storage,
            orders_path: String::new(),
            karigars_path: Some(karigars_path.into()),
        }
    }

    pub fn with_karigars(mut self, karigars_path: impl Into<String>) -> Self {
        self.karigars_path = Some(karigars_path.into());
        self
    }
}

#[async_trait]
impl<S: Storage> OrderSource for JsonFileSource<S> {
    async fn fetch_orders(&self) -> Result<Vec<Order>> {
        if self.orders_path.is_empty() {
            return Ok(Vec::new());
        }
        let data = self.storage.read_file(&self.orders_path).await?;
        let orders: Vec<Order> = serde_json::from_slice(&data)?;
        tracing::info!("📥 Loaded {} orders from {}", orders.len(), self.orders_path);
        Ok(orders)
    }
}

#[async_trait]
impl<S: Storage> KarigarSource for JsonFileSource<S> {
    async fn fetch_karigars(&self) -> Result<Vec<Karigar>> {
        let Some(path) = &self.karigars_path else {
            return Ok(Vec::new());
        };
        let data = self.storage.read_file(path).await?;
        let karigars: Vec<Karigar> = serde_json::from_slice(&data)?;
        tracing::info!("📥 Loaded {} karigars from {}", karigars.len(), path);
        Ok(karigars)
    }
}
