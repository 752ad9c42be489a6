use sea_orm::{ActiveValue, prelude::*};

use crate::{EngineError, ItemType, ResultEngine, item_types};

use super::{Engine, require_name};

impl Engine {
    /// Registers an item type. Names are unique.
    pub async fn create_item_type(&self, name: &str) -> ResultEngine<ItemType> {
        require_name(name, "item type")?;

        let model = item_types::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
        };
        item_types::Entity::insert(model)
            .exec(&self.database)
            .await
            .map_err(|err| EngineError::from_insert(err, format!("item type {name}")))?;

        Ok(ItemType {
            name: name.to_string(),
        })
    }

    pub async fn list_item_types(&self) -> ResultEngine<Vec<ItemType>> {
        Ok(item_types::Entity::find()
            .all(&self.database)
            .await?
            .into_iter()
            .map(ItemType::from)
            .collect())
    }

    pub async fn delete_item_type(&self, name: &str) -> ResultEngine<()> {
        let result = item_types::Entity::delete_by_id(name.to_string())
            .exec(&self.database)
            .await?;
        if result.rows_affected == 0 {
            return Err(EngineError::KeyNotFound(format!("item type {name}")));
        }
        Ok(())
    }
}
