use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        table_group::{CreateTableGroupDto, TableGroupDto},
    },
    server::{
        error::AppError, model::table_group::CreateTableGroupParam,
        service::table_group::TableGroupService, state::AppState,
    },
};

/// Tag for grouping table group endpoints in OpenAPI documentation
pub static TABLE_GROUP_TAG: &str = "table_group";

/// Group two or more empty, ungrouped order tables.
///
/// # Returns
/// - `201 Created` - Successfully created table group
/// - `400 Bad Request` - Fewer than two tables, or a table is occupied or already grouped
/// - `404 Not Found` - Order table not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/table-groups",
    tag = TABLE_GROUP_TAG,
    request_body = CreateTableGroupDto,
    responses(
        (status = 201, description = "Successfully created table group", body = TableGroupDto),
        (status = 400, description = "Tables cannot be grouped", body = ErrorDto),
        (status = 404, description = "Order table not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_table_group(
    State(state): State<AppState>,
    Json(payload): Json<CreateTableGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let table_group = TableGroupService::new(&state.db)
        .create(CreateTableGroupParam::from(payload))
        .await?;

    let location = format!("/api/table-groups/{}", table_group.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(table_group.into_dto()),
    ))
}

/// Release every table of a table group.
///
/// # Returns
/// - `204 No Content` - Successfully ungrouped
/// - `400 Bad Request` - A member table has an order in progress
/// - `404 Not Found` - Table group not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/table-groups/{table_group_id}",
    tag = TABLE_GROUP_TAG,
    params(
        ("table_group_id" = i32, Path, description = "Table group ID")
    ),
    responses(
        (status = 204, description = "Successfully ungrouped tables"),
        (status = 400, description = "A member table has an order in progress", body = ErrorDto),
        (status = 404, description = "Table group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn ungroup(
    State(state): State<AppState>,
    Path(table_group_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    TableGroupService::new(&state.db)
        .ungroup(table_group_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
