use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        order::{ChangeOrderStatusDto, CreateOrderDto, OrderDto},
    },
    server::{
        error::AppError,
        model::order::{ChangeOrderStatusParam, CreateOrderParam},
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Place a new order on an occupied table.
///
/// The status defaults to `COOKING` and the ordered time to the current time.
///
/// # Returns
/// - `201 Created` - Successfully placed order
/// - `400 Bad Request` - No line items, invalid quantity or empty table
/// - `404 Not Found` - Menu or order table not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Successfully placed order", body = OrderDto),
        (status = 400, description = "Order cannot be placed", body = ErrorDto),
        (status = 404, description = "Menu or order table not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let order = OrderService::new(&state.db)
        .create(CreateOrderParam::from(payload))
        .await?;

    let location = format!("/api/orders/{}", order.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(order.into_dto()),
    ))
}

/// List all orders in insertion order with their line items.
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved orders", body = Vec<OrderDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_orders(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let orders = OrderService::new(&state.db).list().await?;

    let dto: Vec<OrderDto> = orders.into_iter().map(|o| o.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Change the status of an order that has not been completed.
///
/// # Returns
/// - `200 OK` - Successfully updated order
/// - `400 Bad Request` - Order is already completed
/// - `404 Not Found` - Order not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/orders/{order_id}/order-status",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    request_body = ChangeOrderStatusDto,
    responses(
        (status = 200, description = "Successfully updated order", body = OrderDto),
        (status = 400, description = "Order is already completed", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_order_status(
    State(state): State<AppState>,
    Path(order_id): Path<i32>,
    Json(payload): Json<ChangeOrderStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let order = OrderService::new(&state.db)
        .change_order_status(order_id, ChangeOrderStatusParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}
