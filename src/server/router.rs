use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        menu::{self, MENU_TAG},
        menu_group::{self, MENU_GROUP_TAG},
        order::{self, ORDER_TAG},
        product::{self, PRODUCT_TAG},
        table::{self, TABLE_TAG},
        table_group::{self, TABLE_GROUP_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Kitchen POS API", description = "Restaurant point-of-sale backend"),
    tags(
        (name = MENU_GROUP_TAG, description = "Menu group catalog"),
        (name = PRODUCT_TAG, description = "Product catalog"),
        (name = MENU_TAG, description = "Menus composed of products"),
        (name = TABLE_TAG, description = "Order tables"),
        (name = TABLE_GROUP_TAG, description = "Grouping of order tables"),
        (name = ORDER_TAG, description = "Order lifecycle"),
    )
)]
struct ApiDoc;

/// Builds the API router with OpenAPI documentation served under `/api/docs`.
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(menu_group::create_menu_group, menu_group::list_menu_groups))
        .routes(routes!(product::create_product, product::list_products))
        .routes(routes!(menu::create_menu, menu::list_menus))
        .routes(routes!(table::create_table, table::list_tables))
        .routes(routes!(table::change_empty))
        .routes(routes!(table::change_number_of_guests))
        .routes(routes!(table_group::create_table_group))
        .routes(routes!(table_group::ungroup))
        .routes(routes!(order::create_order, order::list_orders))
        .routes(routes!(order::change_order_status))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
