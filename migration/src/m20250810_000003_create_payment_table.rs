use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 支払いテーブルを作成
        manager
            .create_table(
                Table::create()
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Payment::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Payment::TenantId).integer().not_null())
                    .col(ColumnDef::new(Payment::Period).string_len(20).not_null())
                    .col(ColumnDef::new(Payment::Amount).integer().not_null())
                    .col(ColumnDef::new(Payment::PaymentDate).date().not_null())
                    .col(ColumnDef::new(Payment::Method).string_len(16).not_null())
                    .col(ColumnDef::new(Payment::ProofUrl).string_len(255))
                    .col(ColumnDef::new(Payment::Status).string_len(16).not_null())
                    .col(ColumnDef::new(Payment::Remarks).text())
                    .col(
                        ColumnDef::new(Payment::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_tenant")
                            .from(Payment::Table, Payment::TenantId)
                            .to(Alias::new("tenants"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Payment {
    #[sea_orm(iden = "payments")]
    Table,
    Id,
    TenantId,
    Period,
    Amount,
    PaymentDate,
    Method,
    ProofUrl,
    Status,
    Remarks,
    CreatedAt,
}
