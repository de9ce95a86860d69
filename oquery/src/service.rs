//! Order history, lookup, and title search over an authenticated client.

use std::sync::Arc;

use chrono::{Datelike, Local};
use oprovider::{Order, OrderQuery, TimeFilter, TimeSelection};
use osession::AuthManager;

use crate::{OrderRecord, QueryError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryRequest {
    pub year: Option<i32>,
    pub time_filter: Option<String>,
    pub full_details: bool,
}

impl HistoryRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_time_filter(mut self, time_filter: impl Into<String>) -> Self {
        self.time_filter = Some(time_filter.into());
        self
    }

    pub fn with_full_details(mut self, full_details: bool) -> Self {
        self.full_details = full_details;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub term: String,
    pub year: Option<i32>,
    pub time_filter: Option<String>,
}

impl SearchRequest {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            year: None,
            time_filter: None,
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_time_filter(mut self, time_filter: impl Into<String>) -> Self {
        self.time_filter = Some(time_filter.into());
        self
    }
}

/// Filter token wins over year; with neither, the current year is used.
///
/// ```rust
/// use oprovider::{TimeFilter, TimeSelection};
/// use oquery::resolve_selection;
///
/// assert_eq!(resolve_selection(None, None, 2025), Ok(TimeSelection::Year(2025)));
/// assert_eq!(
///     resolve_selection(Some(2021), Some("last30"), 2025),
///     Ok(TimeSelection::Filter(TimeFilter::Last30Days))
/// );
/// ```
pub fn resolve_selection(
    year: Option<i32>,
    time_filter: Option<&str>,
    current_year: i32,
) -> Result<TimeSelection, QueryError> {
    if let Some(token) = time_filter.filter(|token| !token.trim().is_empty()) {
        let filter = token.parse::<TimeFilter>()?;
        return Ok(TimeSelection::Filter(filter));
    }

    Ok(TimeSelection::Year(year.unwrap_or(current_year)))
}

/// Untitled items never match, so an empty needle selects orders with titled items.
pub fn order_matches_title(order: &Order, needle_lowercase: &str) -> bool {
    order.items.iter().any(|item| {
        !item.title.is_empty() && item.title.to_lowercase().contains(needle_lowercase)
    })
}

type YearSource = dyn Fn() -> i32 + Send + Sync;

#[derive(Clone)]
pub struct OrderQueryService {
    auth: Arc<AuthManager>,
    current_year: Arc<YearSource>,
}

impl OrderQueryService {
    pub fn new(auth: Arc<AuthManager>) -> Self {
        Self {
            auth,
            current_year: Arc::new(|| Local::now().year()),
        }
    }

    pub fn with_year_source<F>(mut self, current_year: F) -> Self
    where
        F: Fn() -> i32 + Send + Sync + 'static,
    {
        self.current_year = Arc::new(current_year);
        self
    }

    pub fn auth(&self) -> Arc<AuthManager> {
        Arc::clone(&self.auth)
    }

    pub async fn history(&self, request: HistoryRequest) -> Result<Vec<OrderRecord>, QueryError> {
        let client = self.auth.ensure_authenticated().await?;
        let selection = self.selection(request.year, request.time_filter.as_deref())?;

        let orders = client
            .get_order_history(OrderQuery {
                selection,
                full_details: request.full_details,
            })
            .await?;

        Ok(orders.iter().map(OrderRecord::from).collect())
    }

    pub async fn get_one(&self, order_id: &str) -> Result<OrderRecord, QueryError> {
        let client = self.auth.ensure_authenticated().await?;

        let order_id = order_id.trim();
        if order_id.is_empty() {
            return Err(QueryError::invalid_request("order_id must not be empty"));
        }

        let order = client.get_order(order_id).await?;
        Ok(OrderRecord::from(&order))
    }

    /// Returns whole orders in which any item title contains `term` as given.
    pub async fn search(&self, request: SearchRequest) -> Result<Vec<OrderRecord>, QueryError> {
        let client = self.auth.ensure_authenticated().await?;

        let needle = request.term.to_lowercase();
        let selection = self.selection(request.year, request.time_filter.as_deref())?;

        // Item titles are only populated with full details.
        let orders = client
            .get_order_history(OrderQuery {
                selection,
                full_details: true,
            })
            .await?;

        Ok(orders
            .iter()
            .filter(|order| order_matches_title(order, &needle))
            .map(OrderRecord::from)
            .collect())
    }

    fn selection(
        &self,
        year: Option<i32>,
        time_filter: Option<&str>,
    ) -> Result<TimeSelection, QueryError> {
        resolve_selection(year, time_filter, (self.current_year)())
    }
}
