use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        product::{CreateProductDto, ProductDto},
    },
    server::{
        error::AppError, model::product::CreateProductParam, service::product::ProductService,
        state::AppState,
    },
};

pub static PRODUCT_TAG: &str = "product";

#[utoipa::path(
    post,
    path = "/api/products",
    tag = PRODUCT_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Successfully created product", body = ProductDto),
        (status = 400, description = "Negative product price", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let product = ProductService::new(&state.db)
        .create(CreateProductParam::from(payload))
        .await?;

    let location = format!("/api/products/{}", product.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product.into_dto()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/products",
    tag = PRODUCT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved products", body = Vec<ProductDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = ProductService::new(&state.db).list().await?;

    let dto: Vec<ProductDto> = products.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}
