use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// 门票实体
/// - code 全局唯一 (数据库唯一约束)
/// - phones 以 JSON 数组字符串保存
/// - active 只允许 true -> false
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub code: String,
    #[sea_orm(column_name = "type")]
    pub ticket_type: String,
    pub name: String,
    pub surname: String,
    #[sea_orm(column_type = "Text")]
    pub phones: String,
    pub created_at: DateTime<Utc>,
    pub used: bool,
    pub active: bool,
}

impl Model {
    pub fn phone_list(&self) -> Vec<String> {
        serde_json::from_str(&self.phones).unwrap_or_else(|e| {
            log::warn!("Ticket {} has unreadable phones {:?}: {e}", self.id, self.phones);
            Vec::new()
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
