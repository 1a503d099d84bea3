//! `POST /orders`: validate, price and identify a device configuration.
//!
//! ## Request / Response
//! ```text
//! POST /orders {"components": ["A", "D", "F", "I", "K"]}
//!      │
//!      ▼
//! OrderRequest::decode ──► OrderDesk::place
//!      │                        │
//!      │ shape error            ├── Ok  ──► 201 {"order_id", "total_price", "ordered_parts"}
//!      ▼                        └── Err ──► 400 {"error", "code"}
//! 400 INVALID_REQUEST_SHAPE
//! ```

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use configurator_core::{OrderError, OrderRequest, OrderResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ts_rs::TS;

use crate::error::ApiError;
use crate::AppState;

/// Successful order response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderResponse {
    pub order_id: String,

    /// Order total in major currency units (e.g. `142.3`)
    pub total_price: f64,

    /// Part names in ascending component-code order
    pub ordered_parts: Vec<String>,
}

impl From<OrderResult> for OrderResponse {
    fn from(result: OrderResult) -> Self {
        OrderResponse {
            order_id: result.order_id,
            total_price: result.total.to_major_units(),
            ordered_parts: result.ordered_parts,
        }
    }
}

/// Handles `POST /orders`.
///
/// The body is taken as raw bytes so that every decode failure, including
/// a wrong content type or malformed JSON, is reported in the order error
/// format rather than axum's default rejection.
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<OrderResponse>), ApiError> {
    let request = OrderRequest::decode(&body).map_err(|err| {
        debug!(%err, "order body rejected");
        OrderError::from(err)
    })?;

    let result = state
        .desk
        .place(&request)
        .inspect_err(|err| debug!(components = ?request.components, %err, "order rejected"))?;

    info!(
        order_id = %result.order_id,
        total_cents = result.total.cents(),
        parts = result.ordered_parts.len(),
        "order accepted"
    );

    Ok((StatusCode::CREATED, Json(OrderResponse::from(result))))
}
