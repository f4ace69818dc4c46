use crate::models::*;
use crate::services::AdminCodeService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/api/generate-daily-codes",
    tag = "admin",
    responses(
        (status = 200, description = "Batch stored; delivery outcome included", body = DailyBatchResponse),
        (status = 500, description = "Codes could not be stored")
    )
)]
pub async fn generate_daily_codes(
    admin_code_service: web::Data<AdminCodeService>,
) -> Result<HttpResponse> {
    match admin_code_service.generate_daily_batch().await {
        Ok(batch) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": batch
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/daily-codes",
    tag = "admin",
    params(
        ("limit" = Option<u64>, Query, description = "Max codes to return (default 100)")
    ),
    responses(
        (status = 200, description = "Most recent admin codes first", body = AdminCodeListResponse)
    )
)]
pub async fn list_daily_codes(
    admin_code_service: web::Data<AdminCodeService>,
    query: web::Query<LimitQuery>,
) -> Result<HttpResponse> {
    match admin_code_service.list_recent_codes(query.limit).await {
        Ok(codes) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": AdminCodeListResponse { codes }
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn admin_code_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/generate-daily-codes", web::post().to(generate_daily_codes))
        .route("/daily-codes", web::get().to(list_daily_codes));
}
