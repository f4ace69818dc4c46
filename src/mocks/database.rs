use crate::database::{DbPool, run_migrations};
use crate::error::AppResult;
use sea_orm::{ConnectOptions, Database};

/// 内存 SQLite，已执行迁移。
///
/// 每个连接都是独立的内存库，所以连接池固定为 1。
pub async fn in_memory_database() -> AppResult<DbPool> {
    let mut opt = ConnectOptions::new("sqlite::memory:".to_string());
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let pool = Database::connect(opt).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}
