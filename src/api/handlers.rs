use crate::{
    api::models::*,
    auth::jwt::Claims,
    constants::SCAN_BODY_LIMIT,
    core::{
        analytics::{DashboardStats, MonthlyGroup},
        errors::SpendlensError,
        models::{Receipt, SpendingInsight, User},
        service::SpendlensService,
    },
    infrastructure::{
        cache::in_memory::InMemoryCache, llm::groq::GroqGateway, storage::in_memory::InMemoryStorage,
    },
};
use axum::{
    Extension, Json, Router,
    extract::{DefaultBodyLimit, Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::IntoResponse,
};
use http::header;

use std::sync::Arc;

type AppService = SpendlensService<InMemoryStorage, GroqGateway, InMemoryCache>;

/// Middleware to validate JWT
async fn auth_middleware(
    State(service): State<Arc<AppService>>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| SpendlensError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| SpendlensError::Unauthorized("Invalid Authorization header".to_string()))?;

    let claims = service.validate_token(token)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

async fn session_user(service: &AppService, claims: &Claims) -> Result<User, ApiError> {
    Ok(service
        .get_user(&claims.sub)
        .await?
        .ok_or_else(|| SpendlensError::UserNotFound(claims.sub.clone()))?)
}

// Define API routes
pub fn api_routes(service: Arc<AppService>) -> Router {
    let protected_routes = Router::new()
        .route("/me", axum::routing::get(get_me))
        .route(
            "/receipts/scan",
            axum::routing::post(scan_receipt).layer(DefaultBodyLimit::max(SCAN_BODY_LIMIT)),
        )
        .route("/receipts", axum::routing::get(list_receipts))
        .route("/receipts/history", axum::routing::get(receipt_history))
        .route(
            "/receipts/{receipt_id}",
            axum::routing::delete(delete_receipt),
        )
        .route("/dashboard", axum::routing::get(dashboard))
        .route("/insights", axum::routing::get(get_insights))
        .route("/insights/refresh", axum::routing::post(refresh_insights))
        .route_layer(middleware::from_fn_with_state(
            service.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/login", axum::routing::post(login))
        .route("/users", axum::routing::post(register)) // Unprotected
        .merge(protected_routes)
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created successfully", body = User),
        (status = 400, description = "Email missing", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn register(
    State(service): State<Arc<AppService>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = service
        .register_user(req.email, &req.password, req.name)
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn login(
    State(service): State<Arc<AppService>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let token = service.authenticate(&req.email, &req.password).await?;
    Ok(Json(LoginResponse { token }))
}

#[utoipa::path(
    get,
    path = "/api/me",
    responses(
        (status = 200, description = "Session user", body = User),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub(crate) async fn get_me(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<User>, ApiError> {
    let user = session_user(&service, &claims).await?;
    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/api/receipts/scan",
    request_body = ScanRequest,
    responses(
        (status = 201, description = "Receipt extracted and stored", body = Receipt),
        (status = 400, description = "Empty image payload", body = ErrorResponse),
        (status = 422, description = "Extraction violated receipt invariants", body = ErrorResponse),
        (status = 502, description = "Model unavailable or reply unusable", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub(crate) async fn scan_receipt(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<ScanRequest>,
) -> Result<(StatusCode, Json<Receipt>), ApiError> {
    let user = session_user(&service, &claims).await?;
    let receipt = service
        .scan_receipt(&user, &req.image, req.source_ref)
        .await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

#[utoipa::path(
    get,
    path = "/api/receipts",
    responses(
        (status = 200, description = "Receipts, newest transaction first", body = [Receipt]),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub(crate) async fn list_receipts(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<Receipt>>, ApiError> {
    let user = session_user(&service, &claims).await?;
    let receipts = service.list_receipts(&user).await?;
    Ok(Json(receipts))
}

#[utoipa::path(
    get,
    path = "/api/receipts/history",
    responses(
        (status = 200, description = "Receipts grouped by month, items partitioned by category", body = [MonthlyGroup]),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub(crate) async fn receipt_history(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<MonthlyGroup>>, ApiError> {
    let user = session_user(&service, &claims).await?;
    let groups = service.monthly_history(&user).await?;
    Ok(Json(groups))
}

#[utoipa::path(
    delete,
    path = "/api/receipts/{receipt_id}",
    params(
        ("receipt_id" = String, Path, description = "ID of the receipt to delete")
    ),
    responses(
        (status = 200, description = "Receipt deleted"),
        (status = 403, description = "Receipt owned by another user", body = ErrorResponse),
        (status = 404, description = "Receipt not found", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub(crate) async fn delete_receipt(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
    Path(receipt_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let user = session_user(&service, &claims).await?;
    service.delete_receipt(&user, &receipt_id).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Aggregated spending statistics", body = DashboardStats),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub(crate) async fn dashboard(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<DashboardStats>, ApiError> {
    let user = session_user(&service, &claims).await?;
    let stats = service.dashboard(&user).await?;
    Ok(Json(stats))
}

#[utoipa::path(
    get,
    path = "/api/insights",
    responses(
        (status = 200, description = "Up to 3 advisory entries; empty when no receipts or advice unavailable", body = [SpendingInsight]),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub(crate) async fn get_insights(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<SpendingInsight>>, ApiError> {
    let user = session_user(&service, &claims).await?;
    let insights = service.spending_insights(&user, false).await?;
    Ok(Json(insights))
}

#[utoipa::path(
    post,
    path = "/api/insights/refresh",
    responses(
        (status = 200, description = "Freshly generated advisory entries", body = [SpendingInsight]),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub(crate) async fn refresh_insights(
    State(service): State<Arc<AppService>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<SpendingInsight>>, ApiError> {
    let user = session_user(&service, &claims).await?;
    let insights = service.spending_insights(&user, true).await?;
    Ok(Json(insights))
}
