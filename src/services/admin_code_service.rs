use crate::entities::admin_code_entity as admin_codes;
use crate::error::AppResult;
use crate::external::{Notifier, deliver};
use crate::models::*;
use crate::utils::{clamp_limit, generate_six_digit_code};
use chrono::{Local, NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};
use std::sync::Arc;

pub const DAILY_BATCH_SIZE: usize = 5;
pub const DEFAULT_ADMIN_CODE_LIST_LIMIT: u64 = 100;

#[derive(Clone)]
pub struct AdminCodeService {
    pool: DatabaseConnection,
    notifier: Arc<dyn Notifier>,
    superadmin_phone: String,
}

pub fn batch_message(date: NaiveDate, codes: &[String]) -> String {
    format!("🔐 Codes admin pour {date}:\n{}", codes.join(" - "))
}

impl AdminCodeService {
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

    /// 生成当天的一批管理员验证码并推送给超级管理员。
    ///
    /// 逻辑:
    /// 1. 取本地日期
    /// 2. 独立生成 5 个 6 位数字码 (同批允许重复)
    /// 3. 同一事务写入 admin_codes
    /// 4. 提交后再推送，推送失败只记录在结果里
    ///
    /// 同一天多次调用会追加多批，不做去重。
    pub async fn generate_daily_batch(&self) -> AppResult<DailyBatchResponse> {
        let date = Local::now().date_naive();
        let codes: Vec<String> = (0..DAILY_BATCH_SIZE)
            .map(|_| generate_six_digit_code())
            .collect();

        let txn = self.pool.begin().await?;
        for code in &codes {
            admin_codes::ActiveModel {
                code: Set(code.clone()),
                date: Set(date),
                created_at: Set(Utc::now()),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }
        txn.commit().await?;

        let message = batch_message(date, &codes);
        let send = deliver(self.notifier.clone(), self.superadmin_phone.clone(), message).await;
        if send.is_delivered() {
            log::info!("Daily admin codes for {date} sent");
        } else {
            log::warn!("Daily admin codes for {date} stored but not delivered: {send:?}");
        }

        Ok(DailyBatchResponse { date, codes, send })
    }

    /// 最近生成的验证码，最新的在前
    pub async fn list_recent_codes(&self, limit: Option<u64>) -> AppResult<Vec<AdminCodeResponse>> {
        let list = admin_codes::Entity::find()
            .order_by_desc(admin_codes::Column::CreatedAt)
            .order_by_desc(admin_codes::Column::Id)
            .limit(clamp_limit(limit, DEFAULT_ADMIN_CODE_LIST_LIMIT))
            .all(&self.pool)
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::DeliveryResult;
    use crate::mocks::{MockNotifier, in_memory_database};
    use sea_orm::PaginatorTrait;

    const SUPERADMIN: &str = "+237680371957";

    async fn service_with(notifier: Arc<dyn Notifier>) -> (AdminCodeService, DatabaseConnection) {
        let pool = in_memory_database().await.unwrap();
        let service = AdminCodeService::new(pool.clone(), notifier, SUPERADMIN.to_string());
        (service, pool)
    }

    #[tokio::test]
    async fn test_batch_shape_and_notification() {
        let notifier = Arc::new(MockNotifier::delivered());
        let (service, _pool) = service_with(notifier.clone()).await;

        let batch = service.generate_daily_batch().await.unwrap();
        assert_eq!(batch.date, Local::now().date_naive());
        assert_eq!(batch.codes.len(), DAILY_BATCH_SIZE);
        for code in &batch.codes {
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
        assert!(batch.send.is_delivered());

        let calls = notifier.sent();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, SUPERADMIN);
        assert_eq!(calls[0].1, batch_message(batch.date, &batch.codes));
    }

    #[tokio::test]
    async fn test_two_batches_same_day_are_both_kept() {
        let (service, pool) = service_with(Arc::new(MockNotifier::delivered())).await;

        let first = service.generate_daily_batch().await.unwrap();
        let second = service.generate_daily_batch().await.unwrap();
        assert_eq!(first.date, second.date);

        let total = admin_codes::Entity::find().count(&pool).await.unwrap();
        assert_eq!(total, 10);

        let recent = service.list_recent_codes(None).await.unwrap();
        assert_eq!(recent.len(), 10);
        assert!(recent.iter().all(|c| c.date == first.date));
        // 最新一批排在最前
        let newest: Vec<String> = recent[..5].iter().rev().map(|c| c.code.clone()).collect();
        assert_eq!(newest, second.codes);
    }

    #[tokio::test]
    async fn test_delivery_failure_keeps_codes() {
        let (service, pool) =
            service_with(Arc::new(MockNotifier::failing("connection refused"))).await;

        let batch = service.generate_daily_batch().await.unwrap();
        assert_eq!(
            batch.send,
            DeliveryResult::Failed {
                error: "connection refused".to_string()
            }
        );
        assert_eq!(admin_codes::Entity::find().count(&pool).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_list_limit() {
        let (service, _pool) = service_with(Arc::new(MockNotifier::delivered())).await;
        service.generate_daily_batch().await.unwrap();
        assert_eq!(service.list_recent_codes(Some(3)).await.unwrap().len(), 3);
    }

    #[test]
    fn test_batch_message() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let codes: Vec<String> = ["000123", "456789", "111111", "222222", "333333"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            batch_message(date, &codes),
            "🔐 Codes admin pour 2026-10-19:\n000123 - 456789 - 111111 - 222222 - 333333"
        );
    }
}
