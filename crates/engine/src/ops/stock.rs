use sea_orm::{
    ConnectionTrait, Order, QueryFilter, QueryOrder, TransactionTrait, prelude::*, sea_query::Expr,
};

use crate::{
    EngineError, NewStockItem, ResultEngine, StockItem, StockStatus, stock_items,
};

use super::{Engine, sequence::next_number, with_tx};

/// Flips a stock item to `sold`.
///
/// Selling an item that is already sold matches the row again and succeeds
/// without changing anything.
pub(super) async fn set_sold<C>(db: &C, item_number: &str) -> ResultEngine<()>
where
    C: ConnectionTrait,
{
    let result = stock_items::Entity::update_many()
        .col_expr(
            stock_items::Column::Status,
            Expr::value(StockStatus::Sold.as_str()),
        )
        .filter(stock_items::Column::ItemNumber.eq(item_number))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(EngineError::KeyNotFound(format!(
            "stock item {item_number}"
        )));
    }
    Ok(())
}

impl Engine {
    /// Registers a new unit in stock.
    ///
    /// The item gets the next number from the stock counter and starts as
    /// `current`. Counter bump and insert share one DB transaction, so a
    /// failed insert does not burn a number.
    pub async fn create_stock_item(&self, fields: NewStockItem) -> ResultEngine<StockItem> {
        if fields.price.is_negative() {
            return Err(EngineError::InvalidAmount(
                "price must be >= 0".to_string(),
            ));
        }

        with_tx!(self, |db_tx| {
            let item_number = next_number(&db_tx).await?;
            let item = StockItem::new(item_number, fields);
            stock_items::ActiveModel::from(&item).insert(&db_tx).await?;
            tracing::info!(item_number = %item.item_number, "stock item created");
            Ok(item)
        })
    }

    /// Marks a stock item as sold. Unknown numbers are `KeyNotFound`.
    pub async fn mark_sold(&self, item_number: &str) -> ResultEngine<()> {
        set_sold(&self.database, item_number).await?;
        tracing::info!(item_number, "stock item sold");
        Ok(())
    }

    /// Deletes a stock item whatever its status.
    ///
    /// Its number is not handed out again.
    pub async fn delete_stock_item(&self, item_number: &str) -> ResultEngine<()> {
        let result = stock_items::Entity::delete_by_id(item_number.to_string())
            .exec(&self.database)
            .await?;
        if result.rows_affected == 0 {
            return Err(EngineError::KeyNotFound(format!(
                "stock item {item_number}"
            )));
        }
        Ok(())
    }

    /// Lists the stock items with the given status, by ascending item number.
    ///
    /// Item numbers are digit strings, so ordering by length first keeps
    /// `9999` ahead of `10000`.
    pub async fn list_stock_items(&self, status: StockStatus) -> ResultEngine<Vec<StockItem>> {
        stock_items::Entity::find()
            .filter(stock_items::Column::Status.eq(status.as_str()))
            .order_by(Expr::cust("LENGTH(item_number)"), Order::Asc)
            .order_by_asc(stock_items::Column::ItemNumber)
            .all(&self.database)
            .await?
            .into_iter()
            .map(StockItem::try_from)
            .collect()
    }
}
