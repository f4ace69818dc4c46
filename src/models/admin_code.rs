use crate::entities::admin_code_entity as admin_codes;
use crate::external::DeliveryResult;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminCodeResponse {
    pub id: i64,
    pub code: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<admin_codes::Model> for AdminCodeResponse {
    fn from(m: admin_codes::Model) -> Self {
        Self {
            id: m.id,
            code: m.code,
            date: m.date,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminCodeListResponse {
    pub codes: Vec<AdminCodeResponse>,
}

/// 一次批量生成的结果，推送失败也会照常返回
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DailyBatchResponse {
    pub date: NaiveDate,
    pub codes: Vec<String>,
    pub send: DeliveryResult,
}
