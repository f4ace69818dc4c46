use crate::models::*;
use crate::services::TicketService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    post,
    path = "/api/tickets",
    tag = "ticket",
    request_body = CreateTicketRequest,
    responses(
        (status = 200, description = "Ticket created", body = CreateTicketResponse),
        (status = 400, description = "Missing ticket code"),
        (status = 409, description = "Ticket code already exists")
    )
)]
pub async fn create_ticket(
    ticket_service: web::Data<TicketService>,
    request: web::Json<CreateTicketRequest>,
) -> Result<HttpResponse> {
    match ticket_service.create_ticket(request.into_inner()).await {
        Ok(id) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": CreateTicketResponse { id }
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/api/tickets",
    tag = "ticket",
    params(
        ("limit" = Option<u64>, Query, description = "Max tickets to return (default 1000)")
    ),
    responses(
        (status = 200, description = "Most recent tickets first", body = TicketListResponse)
    )
)]
pub async fn list_tickets(
    ticket_service: web::Data<TicketService>,
    query: web::Query<LimitQuery>,
) -> Result<HttpResponse> {
    match ticket_service.list_tickets(query.limit).await {
        Ok(tickets) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": TicketListResponse { tickets }
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/api/deactivate-ticket",
    tag = "ticket",
    request_body = TicketCodeRequest,
    responses(
        (status = 200, description = "Number of tickets deactivated by this call", body = DeactivateTicketResponse)
    )
)]
pub async fn deactivate_ticket(
    ticket_service: web::Data<TicketService>,
    request: web::Json<TicketCodeRequest>,
) -> Result<HttpResponse> {
    match ticket_service.deactivate_ticket(&request.code).await {
        Ok(changed) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": DeactivateTicketResponse { changed }
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/api/double-scan",
    tag = "ticket",
    request_body = TicketCodeRequest,
    responses(
        (status = 200, description = "Alert sent, failed, or fallback link generated", body = DoubleScanResponse)
    )
)]
pub async fn double_scan(
    ticket_service: web::Data<TicketService>,
    request: web::Json<TicketCodeRequest>,
) -> Result<HttpResponse> {
    match ticket_service.report_double_scan(&request.code).await {
        Ok(sent) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": DoubleScanResponse { sent }
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn ticket_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/tickets", web::post().to(create_ticket))
        .route("/tickets", web::get().to(list_tickets))
        .route("/deactivate-ticket", web::post().to(deactivate_ticket))
        .route("/double-scan", web::post().to(double_scan));
}
