use crate::entities::ticket_entity as tickets;
use crate::error::{AppError, AppResult};
use crate::external::{DeliveryResult, Notifier, deliver};
use crate::models::*;
use crate::utils::clamp_limit;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use std::sync::Arc;

pub const DEFAULT_TICKET_LIST_LIMIT: u64 = 1000;

#[derive(Clone)]
pub struct TicketService {
    pool: DatabaseConnection,
    notifier: Arc<dyn Notifier>,
    superadmin_phone: String,
}

fn require_code(code: &str) -> AppResult<()> {
    if code.trim().is_empty() {
        return Err(AppError::ValidationError("Ticket code is required".to_string()));
    }
    Ok(())
}

impl TicketService {
    pub fn new(
        pool: DatabaseConnection,
        notifier: Arc<dyn Notifier>,
        superadmin_phone: String,
    ) -> Self {
        Self {
            pool,
            notifier,
            superadmin_phone,
        }
    }

    /// 创建门票，票码重复时返回 DuplicateCode
    pub async fn create_ticket(&self, request: CreateTicketRequest) -> AppResult<i64> {
        require_code(&request.code)?;
        let phones = serde_json::to_string(&request.phones)?;

        // 不做预查询，依赖唯一约束判定冲突
        let ticket = tickets::ActiveModel {
            code: Set(request.code.clone()),
            ticket_type: Set(request.ticket_type),
            name: Set(request.name),
            surname: Set(request.surname),
            phones: Set(phones),
            created_at: Set(Utc::now()),
            used: Set(false),
            active: Set(true),
            ..Default::default()
        }
        .insert(&self.pool)
        .await
        .map_err(|e| AppError::from_insert_error(e, &request.code))?;

        log::info!("Ticket created: id={} code={}", ticket.id, ticket.code);
        Ok(ticket.id)
    }

    /// 最新创建的在前
    pub async fn list_tickets(&self, limit: Option<u64>) -> AppResult<Vec<TicketResponse>> {
        let list = tickets::Entity::find()
            .order_by_desc(tickets::Column::CreatedAt)
            .order_by_desc(tickets::Column::Id)
            .limit(clamp_limit(limit, DEFAULT_TICKET_LIST_LIMIT))
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    /// 停用门票，返回本次实际变更的行数。
    ///
    /// 只更新仍处于启用状态的记录，重复停用返回 0；不存在的票码 (包括空票码) 也返回 0。
    pub async fn deactivate_ticket(&self, code: &str) -> AppResult<u64> {
        let result = tickets::Entity::update_many()
            .col_expr(tickets::Column::Active, Expr::value(false))
            .filter(tickets::Column::Code.eq(code))
            .filter(tickets::Column::Active.eq(true))
            .exec(&self.pool)
            .await?;

        if result.rows_affected > 0 {
            log::info!("Ticket deactivated: {code}");
        }
        Ok(result.rows_affected)
    }

    /// 扫码端发现重复扫码时调用，只发告警，不查询也不修改门票
    pub async fn report_double_scan(&self, code: &str) -> AppResult<DeliveryResult> {
        log::warn!("Double scan reported for ticket {code}");

        let message = format!("⚠️ Double scan détecté pour le billet : {code}");
        Ok(deliver(self.notifier.clone(), self.superadmin_phone.clone(), message).await)
    }
}
