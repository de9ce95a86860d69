//! Order query façade that turns provider orders into stable output records.
//!
//! Every operation checks authentication first and never logs in on its own;
//! an unauthenticated caller gets a [`QueryError`] describing what to call next.

mod error;
mod record;
mod service;

pub mod prelude {
    pub use crate::{
        HistoryRequest, ItemRecord, OrderQueryService, OrderRecord, QueryError, QueryErrorKind,
        SearchRequest,
    };
}

pub use error::{QueryError, QueryErrorKind};
pub use record::{ItemRecord, OrderRecord, RecipientRecord};
pub use service::{
    HistoryRequest, OrderQueryService, SearchRequest, order_matches_title, resolve_selection,
};
