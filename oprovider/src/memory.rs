//! In-memory order client for embedders and tests.
//!
//! ```rust
//! use oprovider::{InMemoryOrderClient, Item, Order, OrderHistoryClient, OrderQuery};
//!
//! let client = InMemoryOrderClient::new(vec![
//!     Order::new("111-1").with_item(Item::new("Desk lamp")),
//! ]);
//!
//! let runtime = tokio::runtime::Builder::new_current_thread()
//!     .build()
//!     .expect("runtime should build");
//! let orders = runtime
//!     .block_on(client.get_order_history(OrderQuery::year(2024)))
//!     .expect("history should load");
//!
//! assert_eq!(orders.len(), 1);
//! assert_eq!(client.queries(), vec![OrderQuery::year(2024)]);
//! ```

use std::sync::Mutex;

use crate::{Order, OrderHistoryClient, OrderQuery, ProviderError, ProviderFuture};

/// Serves a fixed set of orders and records every history query it receives.
#[derive(Debug, Default)]
pub struct InMemoryOrderClient {
    orders: Vec<Order>,
    queries: Mutex<Vec<OrderQuery>>,
}

impl InMemoryOrderClient {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<OrderQuery> {
        self.queries
            .lock()
            .map(|queries| queries.clone())
            .unwrap_or_default()
    }
}

impl OrderHistoryClient for InMemoryOrderClient {
    fn get_order_history<'a>(
        &'a self,
        query: OrderQuery,
    ) -> ProviderFuture<'a, Result<Vec<Order>, ProviderError>> {
        Box::pin(async move {
            self.queries
                .lock()
                .map_err(|_| ProviderError::other("order client lock poisoned"))?
                .push(query);
            Ok(self.orders.clone())
        })
    }

    fn get_order<'a>(
        &'a self,
        order_id: &'a str,
    ) -> ProviderFuture<'a, Result<Order, ProviderError>> {
        Box::pin(async move {
            self.orders
                .iter()
                .find(|order| order.order_number == order_id)
                .cloned()
                .ok_or_else(|| ProviderError::not_found(format!("order '{order_id}' not found")))
        })
    }
}
