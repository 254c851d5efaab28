use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::{
    api::models::{ErrorResponse, LoginRequest, LoginResponse, RegisterRequest, ScanRequest},
    core::{
        analytics::{CategoryGroup, CategorySlice, DashboardStats, MonthlyGroup, ReceiptBreakdown, TrendPoint},
        models::{Category, InsightKind, Receipt, ReceiptItem, SpendingInsight, User},
    },
};

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "Bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::register,
        super::handlers::login,
        super::handlers::get_me,
        super::handlers::scan_receipt,
        super::handlers::list_receipts,
        super::handlers::receipt_history,
        super::handlers::delete_receipt,
        super::handlers::dashboard,
        super::handlers::get_insights,
        super::handlers::refresh_insights
    ),
    components(schemas(
        RegisterRequest,
        LoginRequest,
        LoginResponse,
        ScanRequest,
        ErrorResponse,
        User,
        Receipt,
        ReceiptItem,
        Category,
        SpendingInsight,
        InsightKind,
        DashboardStats,
        CategorySlice,
        TrendPoint,
        MonthlyGroup,
        ReceiptBreakdown,
        CategoryGroup
    )),
    modifiers(&BearerAuth),
    info(
        title = "Spendlens API",
        description = "API for scanning receipts and analyzing spending",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
