use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 入居者テーブルを作成
        // 部屋の削除はサービス層で明示的にカスケードするため、FKはRestrictのまま
        manager
            .create_table(
                Table::create()
                    .table(Tenant::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tenant::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tenant::FullName).string_len(100).not_null())
                    .col(ColumnDef::new(Tenant::Phone).string_len(15).not_null())
                    .col(ColumnDef::new(Tenant::Email).string_len(100).not_null())
                    .col(ColumnDef::new(Tenant::NationalId).string_len(20).not_null())
                    .col(ColumnDef::new(Tenant::HomeAddress).text().not_null())
                    .col(ColumnDef::new(Tenant::RoomId).integer().not_null())
                    .col(ColumnDef::new(Tenant::MoveInDate).date().not_null())
                    .col(ColumnDef::new(Tenant::MoveOutDate).date())
                    .col(ColumnDef::new(Tenant::Status).string_len(16).not_null())
                    .col(
                        ColumnDef::new(Tenant::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tenant_room")
                            .from(Tenant::Table, Tenant::RoomId)
                            .to(Alias::new("rooms"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tenant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Tenant {
    #[sea_orm(iden = "tenants")]
    Table,
    Id,
    FullName,
    Phone,
    Email,
    NationalId,
    HomeAddress,
    RoomId,
    MoveInDate,
    MoveOutDate,
    Status,
    CreatedAt,
}
