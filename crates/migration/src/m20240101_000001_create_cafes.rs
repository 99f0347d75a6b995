//! Create `cafes` table.
//!
//! `name` carries a unique index; `coffee_price` is the only nullable column.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cafes::Table)
                    .if_not_exists()
                    .col(pk_auto(Cafes::Id))
                    .col(string_len(Cafes::Name, 250).unique_key().not_null())
                    .col(string_len(Cafes::MapUrl, 500).not_null())
                    .col(string_len(Cafes::ImgUrl, 500).not_null())
                    .col(string_len(Cafes::Location, 250).not_null())
                    .col(string_len(Cafes::Seats, 250).not_null())
                    .col(boolean(Cafes::HasToilet).not_null())
                    .col(boolean(Cafes::HasWifi).not_null())
                    .col(boolean(Cafes::HasSockets).not_null())
                    .col(boolean(Cafes::CanTakeCalls).not_null())
                    .col(string_len_null(Cafes::CoffeePrice, 250))
                    .to_owned(),
            )
            .await?;

        // Search filters on location
        manager
            .create_index(
                Index::create()
                    .name("idx_cafes_location")
                    .table(Cafes::Table)
                    .col(Cafes::Location)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Cafes::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Cafes {
    Table,
    Id,
    Name,
    MapUrl,
    ImgUrl,
    Location,
    Seats,
    HasToilet,
    HasWifi,
    HasSockets,
    CanTakeCalls,
    CoffeePrice,
}
