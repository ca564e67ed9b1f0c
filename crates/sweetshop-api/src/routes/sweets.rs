//! Routes for the sweets catalog.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{
    Json, Router,
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sweetshop_catalog::application::{command_handlers, query_handlers};
use sweetshop_catalog::domain::{commands, queries};
use sweetshop_core::sweet::Sweet;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::error::{ApiError, Operation};
use crate::state::AppState;

/// Request body for POST /add.
///
/// Every field is optional here so that missing or mistyped values reach
/// validation and get the catalog's own error messages.
#[derive(Debug, Default, Deserialize)]
pub struct CreateSweetRequest {
    /// Name of the sweet.
    pub name: Option<Value>,
    /// Category label.
    pub category: Option<Value>,
    /// Unit price.
    pub price: Option<Value>,
    /// Opening stock.
    pub quantity: Option<Value>,
}

/// Request body for POST /purchase/{id} and POST /restock/{id}.
#[derive(Debug, Default, Deserialize)]
pub struct StockRequest {
    /// Amount to move.
    pub quantity: Option<Value>,
}

/// Query string for GET /search.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Case-insensitive name substring.
    pub name: Option<String>,
    /// Exact category.
    pub category: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<String>,
    /// Inclusive upper price bound.
    pub max_price: Option<String>,
}

/// Response body carrying only a message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable outcome.
    pub message: String,
}

/// Response body for a stock movement.
#[derive(Debug, Serialize)]
pub struct StockResponse {
    /// Human-readable outcome.
    pub message: String,
    /// The sweet after the movement.
    pub sweet: Sweet,
}

/// A body that is absent, not JSON, or not an object reads as `T::default()`,
/// leaving validation to report what is missing.
fn body_or_default<T: Default>(body: Result<Json<T>, JsonRejection>) -> T {
    match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!(reason = %rejection, "unreadable request body treated as empty");
            T::default()
        }
    }
}

/// POST /add
#[instrument(skip_all)]
async fn add_sweet(
    State(state): State<AppState>,
    body: Result<Json<CreateSweetRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Sweet>), ApiError> {
    let request = body_or_default(body);
    let command = commands::CreateSweet {
        correlation_id: Uuid::new_v4(),
        name: request.name,
        category: request.category,
        price: request.price,
        quantity: request.quantity,
    };

    info!(correlation_id = %command.correlation_id, "handling create_sweet command");

    let sweet = command_handlers::handle_create_sweet(&command, &*state.sweet_repository)
        .await
        .map_err(ApiError::during(Operation::Create))?;

    Ok((StatusCode::CREATED, Json(sweet)))
}

/// GET /view-all
#[instrument(skip_all)]
async fn view_sweets(State(state): State<AppState>) -> Result<Json<Vec<Sweet>>, ApiError> {
    let sweets = query_handlers::list_sweets(&*state.sweet_repository)
        .await
        .map_err(ApiError::during(Operation::List))?;

    Ok(Json(sweets))
}

/// GET /search
#[instrument(skip_all)]
async fn search_sweets(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Sweet>>, ApiError> {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            debug!(reason = %rejection, "undecodable query string treated as empty");
            SearchParams::default()
        }
    };
    let query = queries::SearchSweets {
        name: params.name,
        category: params.category,
        min_price: params.min_price,
        max_price: params.max_price,
    };

    let sweets = query_handlers::search_sweets(&query, &*state.sweet_repository)
        .await
        .map_err(ApiError::during(Operation::Search))?;

    Ok(Json(sweets))
}

/// DELETE /delete/{id}
#[instrument(skip(state))]
async fn delete_sweet(
    State(state): State<AppState>,
    Path(sweet_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let command = commands::DeleteSweet {
        correlation_id: Uuid::new_v4(),
        sweet_id,
    };

    info!(correlation_id = %command.correlation_id, "handling delete_sweet command");

    command_handlers::handle_delete_sweet(&command, &*state.sweet_repository)
        .await
        .map_err(ApiError::during(Operation::Delete))?;

    Ok(Json(MessageResponse {
        message: "Sweet deleted successfully".to_owned(),
    }))
}

/// POST /purchase/{id}
#[instrument(skip(state, body))]
async fn purchase_sweet(
    State(state): State<AppState>,
    Path(sweet_id): Path<String>,
    body: Result<Json<StockRequest>, JsonRejection>,
) -> Result<Json<StockResponse>, ApiError> {
    let request = body_or_default(body);
    let command = commands::PurchaseSweet {
        correlation_id: Uuid::new_v4(),
        sweet_id,
        quantity: request.quantity,
    };

    info!(correlation_id = %command.correlation_id, "handling purchase_sweet command");

    let sweet = command_handlers::handle_purchase_sweet(&command, &*state.sweet_repository)
        .await
        .map_err(ApiError::during(Operation::Purchase))?;

    Ok(Json(StockResponse {
        message: "Purchase successful".to_owned(),
        sweet,
    }))
}

/// POST /restock/{id}
#[instrument(skip(state, body))]
async fn restock_sweet(
    State(state): State<AppState>,
    Path(sweet_id): Path<String>,
    body: Result<Json<StockRequest>, JsonRejection>,
) -> Result<Json<StockResponse>, ApiError> {
    let request = body_or_default(body);
    let command = commands::RestockSweet {
        correlation_id: Uuid::new_v4(),
        sweet_id,
        quantity: request.quantity,
    };

    info!(correlation_id = %command.correlation_id, "handling restock_sweet command");

    let sweet = command_handlers::handle_restock_sweet(&command, &*state.sweet_repository)
        .await
        .map_err(ApiError::during(Operation::Restock))?;

    Ok(Json(StockResponse {
        message: "Restock successful".to_owned(),
        sweet,
    }))
}

/// GET /categories
#[instrument(skip_all)]
async fn get_categories(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let categories = query_handlers::list_categories(&*state.sweet_repository)
        .await
        .map_err(ApiError::during(Operation::Categories))?;

    Ok(Json(categories))
}

/// Returns the router for the sweets catalog.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_sweet))
        .route("/view-all", get(view_sweets))
        .route("/search", get(search_sweets))
        .route("/delete/{id}", delete(delete_sweet))
        .route("/purchase/{id}", post(purchase_sweet))
        .route("/restock/{id}", post(restock_sweet))
        .route("/categories", get(get_categories))
}
