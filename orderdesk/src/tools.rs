//! The `amazon_*` tool set registered on a [`ToolRegistry`].
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use oprovider::{InMemoryOrderClient, StaticCredentialSource};
//! use oquery::OrderQueryService;
//! use orderdesk::register_amazon_tools;
//! use osession::AuthManager;
//! use otooling::ToolRegistry;
//!
//! # use oprovider::{AccountSession, AccountSessionProvider, Credentials, PromptIo, ProviderError, ProviderFuture};
//! # struct Offline;
//! # impl AccountSessionProvider for Offline {
//! #     fn login<'a>(&'a self, _: &'a Credentials, _: &'a dyn PromptIo, _: bool)
//! #         -> ProviderFuture<'a, Result<Arc<dyn AccountSession>, ProviderError>> {
//! #         Box::pin(async { Err(ProviderError::unavailable("offline")) })
//! #     }
//! # }
//! let auth = AuthManager::builder(Arc::new(Offline))
//!     .credentials(Arc::new(StaticCredentialSource::new()))
//!     .build();
//! let service = Arc::new(OrderQueryService::new(Arc::new(auth)));
//!
//! let mut registry = ToolRegistry::new();
//! register_amazon_tools(&mut registry, service);
//! assert_eq!(
//!     registry.names(),
//!     vec![
//!         "amazon_get_order",
//!         "amazon_get_order_history",
//!         "amazon_login",
//!         "amazon_search_orders"
//!     ]
//! );
//! ```

use std::sync::Arc;

use oquery::{HistoryRequest, OrderQueryService, QueryError, SearchRequest};
use osession::LoginRequest;
use otooling::{
    ToolDefinition, ToolError, ToolRegistry, optional_bool, optional_i32, optional_string,
    parse_json_object, required_string,
};
use serde::Serialize;
use serde_json::json;

use crate::render::{render_login_outcome, render_query_error};

pub const LOGIN_TOOL: &str = "amazon_login";
pub const ORDER_HISTORY_TOOL: &str = "amazon_get_order_history";
pub const GET_ORDER_TOOL: &str = "amazon_get_order";
pub const SEARCH_ORDERS_TOOL: &str = "amazon_search_orders";

pub fn register_amazon_tools(registry: &mut ToolRegistry, service: Arc<OrderQueryService>) {
    let login_service = Arc::clone(&service);
    registry.register_fn(login_definition(), move |args, _context| {
        let service = Arc::clone(&login_service);
        async move { login(&service, &args).await }
    });

    let history_service = Arc::clone(&service);
    registry.register_fn(order_history_definition(), move |args, _context| {
        let service = Arc::clone(&history_service);
        async move { order_history(&service, &args).await }
    });

    let order_service = Arc::clone(&service);
    registry.register_fn(get_order_definition(), move |args, _context| {
        let service = Arc::clone(&order_service);
        async move { get_order(&service, &args).await }
    });

    registry.register_fn(search_orders_definition(), move |args, _context| {
        let service = Arc::clone(&service);
        async move { search_orders(&service, &args).await }
    });
}

async fn login(service: &OrderQueryService, args_json: &str) -> Result<String, ToolError> {
    let args = parse_json_object(args_json)?;
    let otp_code = optional_string(&args, "otp_code")?
        .map(|code| code.trim().to_string())
        .filter(|code| !code.is_empty());
    let debug = optional_bool(&args, "debug")?.unwrap_or(false);

    let mut request = LoginRequest::new().with_debug(debug);
    if let Some(code) = otp_code {
        request = request.with_otp_code(code);
    }

    let outcome = service.auth().login(request).await;
    Ok(render_login_outcome(&outcome, debug))
}

async fn order_history(service: &OrderQueryService, args_json: &str) -> Result<String, ToolError> {
    let args = parse_json_object(args_json)?;
    let request = HistoryRequest {
        year: optional_i32(&args, "year")?,
        time_filter: optional_string(&args, "time_filter")?,
        full_details: optional_bool(&args, "full_details")?.unwrap_or(false),
    };

    respond(service.history(request).await)
}

async fn get_order(service: &OrderQueryService, args_json: &str) -> Result<String, ToolError> {
    let args = parse_json_object(args_json)?;
    let order_id = required_string(&args, "order_id")?;

    respond(service.get_one(&order_id).await)
}

async fn search_orders(service: &OrderQueryService, args_json: &str) -> Result<String, ToolError> {
    let args = parse_json_object(args_json)?;
    let request = SearchRequest {
        term: required_string(&args, "search_term")?,
        year: optional_i32(&args, "year")?,
        time_filter: optional_string(&args, "time_filter")?,
    };

    respond(service.search(request).await)
}

fn respond<T: Serialize>(result: Result<T, QueryError>) -> Result<String, ToolError> {
    match result {
        Ok(value) => serde_json::to_string_pretty(&value)
            .map_err(|err| ToolError::execution(format!("failed to encode result: {err}"))),
        Err(error) => {
            render_query_error(&error).ok_or_else(|| ToolError::invalid_arguments(error.message))
        }
    }
}

fn login_definition() -> ToolDefinition {
    ToolDefinition::new(
        LOGIN_TOOL,
        "Login to Amazon. CALL THIS FIRST before using other amazon tools. \
         If 2FA is enabled, provide the current OTP code from the authenticator app.",
        json!({
            "type": "object",
            "properties": {
                "otp_code": {
                    "type": "string",
                    "description": "Current 6-digit OTP code from the authenticator app (required if 2FA is enabled)."
                },
                "debug": {
                    "type": "boolean",
                    "description": "Include provider diagnostics in failure messages.",
                    "default": false
                }
            }
        }),
    )
}

fn order_history_definition() -> ToolDefinition {
    ToolDefinition::new(
        ORDER_HISTORY_TOOL,
        "Get Amazon order history. Requires amazon_login to be called first.",
        json!({
            "type": "object",
            "properties": {
                "year": {
                    "type": "integer",
                    "description": "Year to get orders from (e.g. 2024). Defaults to the current year."
                },
                "time_filter": {
                    "type": "string",
                    "description": "Alternative to year: \"last30\" for the past 30 days or \"months-3\" for the past 3 months."
                },
                "full_details": {
                    "type": "boolean",
                    "description": "Fetch item-level details for each order (slower but more complete).",
                    "default": false
                }
            }
        }),
    )
}

fn get_order_definition() -> ToolDefinition {
    ToolDefinition::new(
        GET_ORDER_TOOL,
        "Get details for a specific Amazon order. Requires amazon_login to be called first.",
        json!({
            "type": "object",
            "properties": {
                "order_id": {
                    "type": "string",
                    "description": "The Amazon order number (e.g. \"111-1234567-1234567\")."
                }
            },
            "required": ["order_id"]
        }),
    )
}

fn search_orders_definition() -> ToolDefinition {
    ToolDefinition::new(
        SEARCH_ORDERS_TOOL,
        "Search Amazon orders by item title. Requires amazon_login to be called first.",
        json!({
            "type": "object",
            "properties": {
                "search_term": {
                    "type": "string",
                    "description": "Text to search for in item titles (case-insensitive)."
                },
                "year": {
                    "type": "integer",
                    "description": "Year to search in. Defaults to the current year."
                },
                "time_filter": {
                    "type": "string",
                    "description": "Alternative to year: \"last30\" or \"months-3\"."
                }
            },
            "required": ["search_term"]
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definitions_use_object_schemas_with_required_fields() {
        let definitions = [
            login_definition(),
            order_history_definition(),
            get_order_definition(),
            search_orders_definition(),
        ];

        for definition in &definitions {
            assert_eq!(definition.input_schema["type"], "object", "{}", definition.name);
            assert!(definition.name.starts_with("amazon_"));
        }

        assert_eq!(definitions[0].input_schema.get("required"), None);
        assert_eq!(definitions[2].input_schema["required"], json!(["order_id"]));
        assert_eq!(definitions[3].input_schema["required"], json!(["search_term"]));
    }

    #[test]
    fn invalid_query_requests_become_argument_errors() {
        let error = respond::<Vec<u8>>(Err(QueryError::invalid_request("bad time_filter")))
            .expect_err("argument error");
        assert_eq!(error.kind, otooling::ToolErrorKind::InvalidArguments);

        let text = respond::<Vec<u8>>(Err(QueryError::not_logged_in("x"))).expect("tagged text");
        assert!(text.starts_with("NOT_LOGGED_IN:"));
    }
}
