use sea_orm_migration::prelude::*;

/// 门票表
#[derive(DeriveIden)]
enum Tickets {
    Table,
    Id,
    Code,
    Type,
    Name,
    Surname,
    Phones,
    CreatedAt,
    Used,
    Active,
}

/// 每日管理员验证码 (每批 5 个，只追加)
#[derive(DeriveIden)]
enum AdminCodes {
    Table,
    Id,
    Code,
    Date,
    CreatedAt,
}

/// 管理员表，目前没有接口读写，预留给后续授权使用
#[derive(DeriveIden)]
enum Admins {
    Table,
    Id,
    Name,
    Phone,
    Role,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tickets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tickets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // 唯一约束是票码唯一性的唯一保障，应用层不加锁
                    .col(ColumnDef::new(Tickets::Code).string().not_null().unique_key())
                    .col(ColumnDef::new(Tickets::Type).string().not_null().default(""))
                    .col(ColumnDef::new(Tickets::Name).string().not_null().default(""))
                    .col(ColumnDef::new(Tickets::Surname).string().not_null().default(""))
                    .col(ColumnDef::new(Tickets::Phones).text().not_null().default("[]"))
                    .col(
                        ColumnDef::new(Tickets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Tickets::Used).boolean().not_null().default(false))
                    .col(ColumnDef::new(Tickets::Active).boolean().not_null().default(true))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tickets_created_at")
                    .table(Tickets::Table)
                    .col(Tickets::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AdminCodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AdminCodes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AdminCodes::Code).string_len(6).not_null())
                    .col(ColumnDef::new(AdminCodes::Date).date().not_null())
                    .col(
                        ColumnDef::new(AdminCodes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_admin_codes_date")
                    .table(AdminCodes::Table)
                    .col(AdminCodes::Date)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Admins::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Admins::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Admins::Name).string().not_null())
                    .col(ColumnDef::new(Admins::Phone).string().not_null())
                    .col(ColumnDef::new(Admins::Role).string().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Admins::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AdminCodes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tickets::Table).to_owned())
            .await?;
        Ok(())
    }
}
