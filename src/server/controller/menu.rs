use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        menu::{CreateMenuDto, MenuDto},
    },
    server::{
        error::AppError, model::menu::CreateMenuParam, service::menu::MenuService,
        state::AppState,
    },
};

/// Tag for grouping menu endpoints in OpenAPI documentation
pub static MENU_TAG: &str = "menu";

/// Register a new menu.
///
/// The menu must reference an existing menu group and existing products, and its price
/// may not exceed the summed price of its products.
///
/// # Returns
/// - `201 Created` - Successfully created menu
/// - `400 Bad Request` - Negative price or quantity, or price higher than its products
/// - `404 Not Found` - Menu group or product not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/menus",
    tag = MENU_TAG,
    request_body = CreateMenuDto,
    responses(
        (status = 201, description = "Successfully created menu", body = MenuDto),
        (status = 400, description = "Invalid menu price or quantity", body = ErrorDto),
        (status = 404, description = "Menu group or product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_menu(
    State(state): State<AppState>,
    Json(payload): Json<CreateMenuDto>,
) -> Result<impl IntoResponse, AppError> {
    let menu = MenuService::new(&state.db)
        .create(CreateMenuParam::from(payload))
        .await?;

    let location = format!("/api/menus/{}", menu.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(menu.into_dto()),
    ))
}

/// List all menus in insertion order with their menu products.
#[utoipa::path(
    get,
    path = "/api/menus",
    tag = MENU_TAG,
    responses(
        (status = 200, description = "Successfully retrieved menus", body = Vec<MenuDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_menus(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let menus = MenuService::new(&state.db).list().await?;

    let dto: Vec<MenuDto> = menus.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}
