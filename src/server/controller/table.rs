use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        table::{ChangeEmptyDto, ChangeNumberOfGuestsDto, CreateOrderTableDto, OrderTableDto},
    },
    server::{
        error::AppError, model::table::CreateOrderTableParam, service::table::TableService,
        state::AppState,
    },
};

/// Tag for grouping order table endpoints in OpenAPI documentation
pub static TABLE_TAG: &str = "table";

/// Create a new order table.
///
/// A new table never belongs to a table group.
///
/// # Returns
/// - `201 Created` - Successfully created order table
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/tables",
    tag = TABLE_TAG,
    request_body = CreateOrderTableDto,
    responses(
        (status = 201, description = "Successfully created order table", body = OrderTableDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_table(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderTableDto>,
) -> Result<impl IntoResponse, AppError> {
    let order_table = TableService::new(&state.db)
        .create(CreateOrderTableParam::from(payload))
        .await?;

    let location = format!("/api/tables/{}", order_table.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(order_table.into_dto()),
    ))
}

/// List all order tables in insertion order.
///
/// # Returns
/// - `200 OK` - Successfully retrieved order tables
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/tables",
    tag = TABLE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved order tables", body = Vec<OrderTableDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tables(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let order_tables = TableService::new(&state.db).list().await?;

    let dto: Vec<OrderTableDto> = order_tables.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Mark an order table as empty or occupied.
///
/// # Returns
/// - `200 OK` - Successfully updated order table
/// - `400 Bad Request` - Table is grouped or has an order in progress
/// - `404 Not Found` - Order table not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/tables/{order_table_id}/empty",
    tag = TABLE_TAG,
    params(
        ("order_table_id" = i32, Path, description = "Order table ID")
    ),
    request_body = ChangeEmptyDto,
    responses(
        (status = 200, description = "Successfully updated order table", body = OrderTableDto),
        (status = 400, description = "Table is grouped or has an order in progress", body = ErrorDto),
        (status = 404, description = "Order table not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_empty(
    State(state): State<AppState>,
    Path(order_table_id): Path<i32>,
    Json(payload): Json<ChangeEmptyDto>,
) -> Result<impl IntoResponse, AppError> {
    let order_table = TableService::new(&state.db)
        .change_empty(order_table_id, payload.empty)
        .await?;

    Ok((StatusCode::OK, Json(order_table.into_dto())))
}

/// Record the number of guests seated at an occupied table.
///
/// # Returns
/// - `200 OK` - Successfully updated order table
/// - `400 Bad Request` - Negative number of guests or empty table
/// - `404 Not Found` - Order table not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/tables/{order_table_id}/number-of-guests",
    tag = TABLE_TAG,
    params(
        ("order_table_id" = i32, Path, description = "Order table ID")
    ),
    request_body = ChangeNumberOfGuestsDto,
    responses(
        (status = 200, description = "Successfully updated order table", body = OrderTableDto),
        (status = 400, description = "Negative number of guests or empty table", body = ErrorDto),
        (status = 404, description = "Order table not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_number_of_guests(
    State(state): State<AppState>,
    Path(order_table_id): Path<i32>,
    Json(payload): Json<ChangeNumberOfGuestsDto>,
) -> Result<impl IntoResponse, AppError> {
    let order_table = TableService::new(&state.db)
        .change_number_of_guests(order_table_id, payload.number_of_guests)
        .await?;

    Ok((StatusCode::OK, Json(order_table.into_dto())))
}
