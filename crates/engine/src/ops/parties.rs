use sea_orm::{QueryFilter, prelude::*};

use crate::{EngineError, Party, PartyKind, ResultEngine, parties};

use super::{Engine, require_name};

impl Engine {
    /// Registers a customer or a supplier.
    ///
    /// Fails with `ExistingKey` when the same `(name, kind)` pair exists. The
    /// same name registered under the other kind is a different party.
    pub async fn create_party(&self, name: &str, kind: PartyKind) -> ResultEngine<Party> {
        require_name(name, kind.as_str())?;

        let party = Party {
            name: name.to_string(),
            kind,
        };
        parties::Entity::insert(parties::ActiveModel::from(&party))
            .exec(&self.database)
            .await
            .map_err(|err| EngineError::from_insert(err, format!("{} {name}", kind.label())))?;

        Ok(party)
    }

    /// Lists parties, optionally only customers or only suppliers.
    pub async fn list_parties(&self, kind: Option<PartyKind>) -> ResultEngine<Vec<Party>> {
        let mut query = parties::Entity::find();
        if let Some(kind) = kind {
            query = query.filter(parties::Column::Kind.eq(kind.as_str()));
        }

        query
            .all(&self.database)
            .await?
            .into_iter()
            .map(Party::try_from)
            .collect()
    }

    /// Deletes the party with exactly this `(name, kind)` pair.
    pub async fn delete_party(&self, name: &str, kind: PartyKind) -> ResultEngine<()> {
        let result = parties::Entity::delete_many()
            .filter(parties::Column::Name.eq(name))
            .filter(parties::Column::Kind.eq(kind.as_str()))
            .exec(&self.database)
            .await?;
        if result.rows_affected == 0 {
            return Err(EngineError::KeyNotFound(format!(
                "{} {name}",
                kind.label()
            )));
        }
        Ok(())
    }
}
