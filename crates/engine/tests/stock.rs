use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

use engine::{
    Engine, EngineError, MoneyCents, NewStockItem, NewTransaction, StockStatus, TransactionKind,
};
use migration::MigratorTrait;

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

fn laptop(description: &str) -> NewStockItem {
    NewStockItem {
        date_of_purchase: "2024-01-15".to_string(),
        item_type: "Laptop".to_string(),
        description: description.to_string(),
        supplier_name: "Tech Supplier Inc".to_string(),
        phone: "555-0123".to_string(),
        price: MoneyCents::new(4_500_000),
    }
}

fn numbers(items: &[engine::StockItem]) -> Vec<String> {
    let mut numbers: Vec<String> = items.iter().map(|i| i.item_number.clone()).collect();
    numbers.sort();
    numbers
}

#[tokio::test]
async fn item_numbers_start_at_1000_and_increase() {
    let (engine, _db) = engine_with_db().await;

    let mut assigned = Vec::new();
    for i in 0..5 {
        let item = engine
            .create_stock_item(laptop(&format!("unit {i}")))
            .await
            .unwrap();
        assert_eq!(item.status, StockStatus::Current);
        assigned.push(item.item_number);
    }

    assert_eq!(assigned, vec!["1000", "1001", "1002", "1003", "1004"]);
}

#[tokio::test]
async fn deleted_numbers_are_never_reused() {
    let (engine, _db) = engine_with_db().await;

    let a = engine.create_stock_item(laptop("A")).await.unwrap();
    let b = engine.create_stock_item(laptop("B")).await.unwrap();
    let c = engine.create_stock_item(laptop("C")).await.unwrap();
    assert_eq!(
        (a.item_number.as_str(), b.item_number.as_str(), c.item_number.as_str()),
        ("1000", "1001", "1002")
    );

    engine.delete_stock_item(&a.item_number).await.unwrap();
    let d = engine.create_stock_item(laptop("D")).await.unwrap();
    assert_eq!(d.item_number, "1003");

    let current = engine.list_stock_items(StockStatus::Current).await.unwrap();
    assert_eq!(numbers(&current), vec!["1001", "1002", "1003"]);
}

#[tokio::test]
async fn created_item_echoes_fields() {
    let (engine, _db) = engine_with_db().await;

    let item = engine.create_stock_item(laptop("Dell XPS 13")).await.unwrap();
    let listed = engine.list_stock_items(StockStatus::Current).await.unwrap();

    assert_eq!(listed, vec![item.clone()]);
    assert_eq!(item.description, "Dell XPS 13");
    assert_eq!(item.price, MoneyCents::new(4_500_000));
}

#[tokio::test]
async fn negative_price_is_rejected_without_consuming_a_number() {
    let (engine, _db) = engine_with_db().await;

    let mut fields = laptop("broken");
    fields.price = MoneyCents::new(-1);
    let err = engine.create_stock_item(fields).await.unwrap_err();
    assert!(matches!(err, EngineError::InvalidAmount(_)));

    let item = engine.create_stock_item(laptop("ok")).await.unwrap();
    assert_eq!(item.item_number, "1000");
}

#[tokio::test]
async fn mark_sold_moves_item_between_lists() {
    let (engine, _db) = engine_with_db().await;

    let kept = engine.create_stock_item(laptop("kept")).await.unwrap();
    let sold = engine.create_stock_item(laptop("sold")).await.unwrap();

    engine.mark_sold(&sold.item_number).await.unwrap();

    let current = engine.list_stock_items(StockStatus::Current).await.unwrap();
    let sold_list = engine.list_stock_items(StockStatus::Sold).await.unwrap();
    assert_eq!(numbers(&current), vec![kept.item_number.clone()]);
    assert_eq!(numbers(&sold_list), vec![sold.item_number.clone()]);
    assert_eq!(sold_list[0].status, StockStatus::Sold);
}

#[tokio::test]
async fn mark_sold_unknown_item_is_not_found() {
    let (engine, _db) = engine_with_db().await;

    let err = engine.mark_sold("9999").await.unwrap_err();
    assert_eq!(err, EngineError::KeyNotFound("stock item 9999".to_string()));
}

#[tokio::test]
async fn selling_twice_is_a_no_op() {
    let (engine, _db) = engine_with_db().await;

    let item = engine.create_stock_item(laptop("twice")).await.unwrap();
    engine.mark_sold(&item.item_number).await.unwrap();
    engine.mark_sold(&item.item_number).await.unwrap();

    let sold = engine.list_stock_items(StockStatus::Sold).await.unwrap();
    assert_eq!(sold.len(), 1);
}

#[tokio::test]
async fn delete_works_in_either_status_and_reports_missing() {
    let (engine, _db) = engine_with_db().await;

    let current = engine.create_stock_item(laptop("current")).await.unwrap();
    let sold = engine.create_stock_item(laptop("sold")).await.unwrap();
    engine.mark_sold(&sold.item_number).await.unwrap();

    engine.delete_stock_item(&current.item_number).await.unwrap();
    engine.delete_stock_item(&sold.item_number).await.unwrap();

    assert!(engine.list_stock_items(StockStatus::Current).await.unwrap().is_empty());
    assert!(engine.list_stock_items(StockStatus::Sold).await.unwrap().is_empty());

    let err = engine.delete_stock_item(&sold.item_number).await.unwrap_err();
    assert!(matches!(err, EngineError::KeyNotFound(_)));
}

#[tokio::test]
async fn counter_is_shared_with_item_creation() {
    let (engine, _db) = engine_with_db().await;

    assert_eq!(engine.next_stock_number().await.unwrap(), "1000");
    assert_eq!(engine.next_stock_number().await.unwrap(), "1001");

    let item = engine.create_stock_item(laptop("after")).await.unwrap();
    assert_eq!(item.item_number, "1002");
}

#[tokio::test]
async fn concurrent_creations_get_distinct_numbers() {
    let (engine, _db) = engine_with_db().await;

    let (a, b, c, d, e) = tokio::join!(
        engine.create_stock_item(laptop("a")),
        engine.create_stock_item(laptop("b")),
        engine.create_stock_item(laptop("c")),
        engine.create_stock_item(laptop("d")),
        engine.create_stock_item(laptop("e")),
    );
    let items: Vec<_> = [a, b, c, d, e].into_iter().map(Result::unwrap).collect();

    assert_eq!(numbers(&items), vec!["1000", "1001", "1002", "1003", "1004"]);
}

#[tokio::test]
async fn listing_orders_numbers_numerically() {
    let (engine, db) = engine_with_db().await;

    engine.create_stock_item(laptop("first")).await.unwrap();
    db.execute(Statement::from_string(
        db.get_database_backend(),
        "UPDATE counters SET value = 9998 WHERE name = 'stock_counter'",
    ))
    .await
    .unwrap();
    engine.create_stock_item(laptop("second")).await.unwrap();
    engine.create_stock_item(laptop("third")).await.unwrap();

    let listed: Vec<String> = engine
        .list_stock_items(StockStatus::Current)
        .await
        .unwrap()
        .into_iter()
        .map(|item| item.item_number)
        .collect();
    assert_eq!(listed, vec!["1000", "9999", "10000"]);
}

#[tokio::test]
async fn failed_sale_insert_leaves_item_current() {
    let (engine, db) = engine_with_db().await;

    let item = engine.create_stock_item(laptop("kept")).await.unwrap();
    db.execute(Statement::from_string(
        db.get_database_backend(),
        "DROP TABLE transactions",
    ))
    .await
    .unwrap();

    let err = engine
        .record_transaction(NewTransaction {
            date: "2024-01-20".to_string(),
            kind: TransactionKind::Sell,
            name: "John Doe".to_string(),
            amount: MoneyCents::new(7_500_000),
            payment_method: "cash".to_string(),
            stock_code: Some(item.item_number.clone()),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Database(_)));

    let current = engine.list_stock_items(StockStatus::Current).await.unwrap();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].item_number, item.item_number);
    assert!(engine.list_stock_items(StockStatus::Sold).await.unwrap().is_empty());
}
