use crate::core::{Karigar, KarigarSource, Order, OrderSource};
use crate::utils::error::Result;
use async_trait::async_trait;

/// In-memory source for embedding callers and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    orders: Vec<Order>,
    karigars: Vec<Karigar>,
}

impl StaticSource {
    pub fn new(orders: Vec<Order>, karigars: Vec<Karigar>) -> Self {
        Self { orders, karigars }
    }
}

#[async_trait]
impl OrderSource for StaticSource {
    async fn fetch_orders(&self) -> Result<Vec<Order>> {
        Ok(self.orders.clone())
    }
}

#[async_trait]
impl KarigarSource for StaticSource {
    async fn fetch_karigars(&self) -> Result<Vec<Karigar>> {
        Ok(self.karigars.clone())
    }
}
