//! Initial schema migration.
//!
//! - `item_types`: category names for stock
//! - `stock_items`: purchased units and their sale status
//! - `transactions`: sells, purchases and spendings per payment channel
//! - `customers_suppliers`: named parties keyed by (name, kind)
//! - `counters`: named sequences (stock item numbers, transaction order)
//!
//! References between tables are by convention only (a transaction's
//! `stock_code` holds an item number), so there are no foreign keys.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum ItemTypes {
    Table,
    Name,
}

#[derive(Iden)]
enum StockItems {
    Table,
    ItemNumber,
    DateOfPurchase,
    ItemType,
    Description,
    SupplierName,
    Phone,
    PriceMinor,
    Status,
}

#[derive(Iden)]
enum Transactions {
    Table,
    Id,
    Date,
    TransactionType,
    Name,
    AmountMinor,
    PaymentMethod,
    StockCode,
    Seq,
    RecordedAt,
}

#[derive(Iden)]
enum CustomersSuppliers {
    Table,
    Name,
    Kind,
}

#[derive(Iden)]
enum Counters {
    Table,
    Name,
    Value,
}

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // 1. Item types
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(ItemTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ItemTypes::Name)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 2. Stock items
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(StockItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StockItems::ItemNumber)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StockItems::DateOfPurchase)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StockItems::ItemType).string().not_null())
                    .col(ColumnDef::new(StockItems::Description).string().not_null())
                    .col(ColumnDef::new(StockItems::SupplierName).string().not_null())
                    .col(ColumnDef::new(StockItems::Phone).string().not_null())
                    .col(
                        ColumnDef::new(StockItems::PriceMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StockItems::Status)
                            .string()
                            .not_null()
                            .default("current"),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-stock_items-status")
                    .table(StockItems::Table)
                    .col(StockItems::Status)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 3. Transactions
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Transactions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Transactions::Date).string().not_null())
                    .col(
                        ColumnDef::new(Transactions::TransactionType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Transactions::Name).string().not_null())
                    .col(
                        ColumnDef::new(Transactions::AmountMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::PaymentMethod)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Transactions::StockCode).string())
                    .col(
                        ColumnDef::new(Transactions::Seq)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Transactions::RecordedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-transactions-date-name")
                    .table(Transactions::Table)
                    .col(Transactions::Date)
                    .col(Transactions::Name)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 4. Customers and suppliers
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(CustomersSuppliers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CustomersSuppliers::Name)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CustomersSuppliers::Kind)
                            .string()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CustomersSuppliers::Name)
                            .col(CustomersSuppliers::Kind),
                    )
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 5. Counters
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Counters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Counters::Name)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Counters::Value).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Counters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CustomersSuppliers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StockItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ItemTypes::Table).to_owned())
            .await?;
        Ok(())
    }
}
