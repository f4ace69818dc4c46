use crate::entities::ticket_entity as tickets;
use crate::external::DeliveryResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTicketRequest {
    pub code: String,
    #[serde(rename = "type", default)]
    pub ticket_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub phones: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateTicketResponse {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketResponse {
    pub id: i64,
    pub code: String,
    #[serde(rename = "type")]
    pub ticket_type: String,
    pub name: String,
    pub surname: String,
    pub phones: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub used: bool,
    pub active: bool,
}

impl From<tickets::Model> for TicketResponse {
    fn from(t: tickets::Model) -> Self {
        let phones = t.phone_list();
        Self {
            id: t.id,
            code: t.code,
            ticket_type: t.ticket_type,
            name: t.name,
            surname: t.surname,
            phones,
            created_at: t.created_at,
            used: t.used,
            active: t.active,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TicketListResponse {
    pub tickets: Vec<TicketResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LimitQuery {
    pub limit: Option<u64>,
}

/// 停用票 / 重复扫码上报共用的请求体
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TicketCodeRequest {
    pub code: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeactivateTicketResponse {
    pub changed: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DoubleScanResponse {
    pub sent: DeliveryResult,
}
