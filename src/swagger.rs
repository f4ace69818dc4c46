use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::external::DeliveryResult;
use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::ticket::create_ticket,
        handlers::ticket::list_tickets,
        handlers::ticket::deactivate_ticket,
        handlers::ticket::double_scan,
        handlers::admin_code::generate_daily_codes,
        handlers::admin_code::list_daily_codes,
    ),
    components(
        schemas(
            CreateTicketRequest,
            CreateTicketResponse,
            TicketResponse,
            TicketListResponse,
            TicketCodeRequest,
            DeactivateTicketResponse,
            DoubleScanResponse,
            AdminCodeResponse,
            AdminCodeListResponse,
            DailyBatchResponse,
            DeliveryResult,
        )
    ),
    tags(
        (name = "ticket", description = "Ticket lifecycle and double-scan alerts"),
        (name = "admin", description = "Daily admin code rotation")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
