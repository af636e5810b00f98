use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        menu_group::{CreateMenuGroupDto, MenuGroupDto},
    },
    server::{
        error::AppError, model::menu_group::CreateMenuGroupParam,
        service::menu_group::MenuGroupService, state::AppState,
    },
};

/// Tag for grouping menu group endpoints in OpenAPI documentation
pub static MENU_GROUP_TAG: &str = "menu_group";

/// Create a new menu group.
///
/// # Returns
/// - `201 Created` - Successfully created menu group
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/menu-groups",
    tag = MENU_GROUP_TAG,
    request_body = CreateMenuGroupDto,
    responses(
        (status = 201, description = "Successfully created menu group", body = MenuGroupDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_menu_group(
    State(state): State<AppState>,
    Json(payload): Json<CreateMenuGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let menu_group = MenuGroupService::new(&state.db)
        .create(CreateMenuGroupParam::from(payload))
        .await?;

    let location = format!("/api/menu-groups/{}", menu_group.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(menu_group.into_dto()),
    ))
}

/// List all menu groups in insertion order.
#[utoipa::path(
    get,
    path = "/api/menu-groups",
    tag = MENU_GROUP_TAG,
    responses(
        (status = 200, description = "Successfully retrieved menu groups", body = Vec<MenuGroupDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_menu_groups(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let menu_groups = MenuGroupService::new(&state.db).list().await?;

    let dto: Vec<MenuGroupDto> = menu_groups.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}
