//! Stock items: single purchased units tracked from purchase to sale.
//!
//! A stock item is created `current` with a sequence-assigned
//! `item_number` and flips to `sold` at most once. Sold items are kept.

use sea_orm::{ActiveValue, entity::prelude::*};

use crate::{EngineError, MoneyCents};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StockStatus {
    #[default]
    Current,
    Sold,
}

impl StockStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Sold => "sold",
        }
    }
}

impl TryFrom<&str> for StockStatus {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "current" => Ok(Self::Current),
            "sold" => Ok(Self::Sold),
            other => Err(EngineError::InvalidKind(format!(
                "invalid stock status: {other}"
            ))),
        }
    }
}

/// Fields supplied by the caller when a unit enters the shop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewStockItem {
    pub date_of_purchase: String,
    pub item_type: String,
    pub description: String,
    pub supplier_name: String,
    pub phone: String,
    pub price: MoneyCents,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StockItem {
    pub item_number: String,
    pub date_of_purchase: String,
    pub item_type: String,
    pub description: String,
    pub supplier_name: String,
    pub phone: String,
    pub price: MoneyCents,
    pub status: StockStatus,
}

impl StockItem {
    pub(crate) fn new(item_number: String, fields: NewStockItem) -> Self {
        Self {
            item_number,
            date_of_purchase: fields.date_of_purchase,
            item_type: fields.item_type,
            description: fields.description,
            supplier_name: fields.supplier_name,
            phone: fields.phone,
            price: fields.price,
            status: StockStatus::Current,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "stock_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub item_number: String,
    pub date_of_purchase: String,
    pub item_type: String,
    pub description: String,
    pub supplier_name: String,
    pub phone: String,
    pub price_minor: i64,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&StockItem> for ActiveModel {
    fn from(item: &StockItem) -> Self {
        Self {
            item_number: ActiveValue::Set(item.item_number.clone()),
            date_of_purchase: ActiveValue::Set(item.date_of_purchase.clone()),
            item_type: ActiveValue::Set(item.item_type.clone()),
            description: ActiveValue::Set(item.description.clone()),
            supplier_name: ActiveValue::Set(item.supplier_name.clone()),
            phone: ActiveValue::Set(item.phone.clone()),
            price_minor: ActiveValue::Set(item.price.cents()),
            status: ActiveValue::Set(item.status.as_str().to_string()),
        }
    }
}

impl TryFrom<Model> for StockItem {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            status: StockStatus::try_from(model.status.as_str())?,
            item_number: model.item_number,
            date_of_purchase: model.date_of_purchase,
            item_type: model.item_type,
            description: model.description,
            supplier_name: model.supplier_name,
            phone: model.phone,
            price: MoneyCents::new(model.price_minor),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_storage_string() {
        for status in [StockStatus::Current, StockStatus::Sold] {
            assert_eq!(StockStatus::try_from(status.as_str()).unwrap(), status);
        }
        assert_eq!(
            StockStatus::try_from("lost"),
            Err(EngineError::InvalidKind(
                "invalid stock status: lost".to_string()
            ))
        );
    }

    #[test]
    fn new_item_starts_current() {
        let item = StockItem::new(
            "1000".to_string(),
            NewStockItem {
                date_of_purchase: "2024-01-15".to_string(),
                item_type: "Laptop".to_string(),
                description: "ThinkPad T14".to_string(),
                supplier_name: "Acme".to_string(),
                phone: "555-0100".to_string(),
                price: MoneyCents::new(4_500_000),
            },
        );
        assert_eq!(item.status, StockStatus::Current);
        assert_eq!(item.item_number, "1000");
    }
}
