use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 部屋テーブルを作成
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Room::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Room::RoomNumber).string_len(10).not_null())
                    .col(ColumnDef::new(Room::MonthlyRent).integer().not_null())
                    .col(ColumnDef::new(Room::Capacity).integer().not_null())
                    .col(ColumnDef::new(Room::Facilities).text())
                    .col(ColumnDef::new(Room::Status).string_len(16).not_null())
                    .col(ColumnDef::new(Room::Notes).text())
                    .col(
                        ColumnDef::new(Room::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Room {
    #[sea_orm(iden = "rooms")]
    Table,
    Id,
    RoomNumber,
    MonthlyRent,
    Capacity,
    Facilities,
    Status,
    Notes,
    CreatedAt,
}
