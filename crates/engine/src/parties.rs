//! Named customers and suppliers.
//!
//! A party is keyed by the `(name, kind)` pair: "Acme" may be both a
//! customer and a supplier, each registered once.

use sea_orm::{ActiveValue, entity::prelude::*};

use crate::EngineError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartyKind {
    Customer,
    Supplier,
}

impl PartyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Supplier => "supplier",
        }
    }

    /// Capitalized label used in conflict messages ("Customer already exists").
    pub fn label(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Supplier => "Supplier",
        }
    }
}

impl TryFrom<&str> for PartyKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "customer" => Ok(Self::Customer),
            "supplier" => Ok(Self::Supplier),
            other => Err(EngineError::InvalidKind(format!(
                "invalid party type: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Party {
    pub name: String,
    pub kind: PartyKind,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "customers_suppliers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub kind: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Party> for ActiveModel {
    fn from(party: &Party) -> Self {
        Self {
            name: ActiveValue::Set(party.name.clone()),
            kind: ActiveValue::Set(party.kind.as_str().to_string()),
        }
    }
}

impl TryFrom<Model> for Party {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            kind: PartyKind::try_from(model.kind.as_str())?,
            name: model.name,
        })
    }
}
