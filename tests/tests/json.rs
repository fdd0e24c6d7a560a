use pretty_assertions::assert_eq;
use serde::Deserialize;
use sqltag::{build_json_select, Config, Context, Expr, Record, Rows, Value, JSON_OUTPUT};
use tests::{setup, RecordingExecutor};

#[derive(Debug, PartialEq, Record, Deserialize)]
struct Store {
    #[record(dbselect = "s.id;table=stores s;groupby=s.id", json = "id")]
    id: i64,

    #[record(dbselect = "s.name")]
    name: String,

    #[record(dbselect = "-;join=LEFT JOIN products p ON p.store_id = s.id")]
    products: Vec<Product>,

    #[record(dbselect = "-;join=LEFT JOIN addresses ad ON ad.store_id = s.id;selectif=with_address")]
    address: Option<Address>,
}

#[derive(Debug, PartialEq, Record, Deserialize)]
struct Product {
    #[record(dbselect = "p.id")]
    id: i64,

    #[record(dbselect = "p.title", json = "title,omitempty")]
    title: String,
}

#[derive(Debug, PartialEq, Record, Deserialize)]
struct Address {
    #[record(dbselect = "ad.city")]
    city: String,
}

const STORE_JSON: &str = r#"{
    "id": 1,
    "name": "Main",
    "products": [{ "id": 10, "title": "Pen" }, { "id": 11, "title": "Ink" }],
    "address": { "city": "Lisbon" }
}"#;

#[test]
fn nested_projection() {
    let select = build_json_select::<Store>(&Config::default(), &Context::new(), |select| {
        select.filter(Expr::eq("s.id", 1))
    })
    .unwrap();

    let (sql, args) = select.to_sql().unwrap();
    assert_eq!(
        sql,
        "SELECT JSON_OBJECT('id', s.id, 'name', s.name, \
         'products', JSON_ARRAYAGG(JSON_OBJECT('id', p.id, 'title', p.title)), \
         'address', JSON_OBJECT('city', ad.city)) AS json_output \
         FROM stores s \
         LEFT JOIN products p ON p.store_id = s.id \
         LEFT JOIN addresses ad ON ad.store_id = s.id \
         WHERE s.id = ? GROUP BY s.id"
    );
    assert_eq!(args, [Value::I32(1)]);
}

#[test]
fn gated_parent_drops_its_children() {
    let cx = Context::new().with_flag("with_address", false);
    let set = Config::default()
        .scan(sqltag::Operation::Select, &None::<Store>, &[])
        .unwrap();

    assert_eq!(
        set.select_json(&cx),
        "JSON_OBJECT('id', s.id, 'name', s.name, \
         'products', JSON_ARRAYAGG(JSON_OBJECT('id', p.id, 'title', p.title))) AS json_output"
    );
}

#[tokio::test]
async fn json_get_round_trip() {
    let rows = Rows::new([JSON_OUTPUT]).with_row([STORE_JSON]);
    let (db, log) = setup(RecordingExecutor::new().with_rows(rows));

    let store: Store = db
        .json_get(&Context::new(), |select| select.filter(Expr::eq("s.id", 1)))
        .await
        .unwrap();

    assert_eq!(
        store,
        Store {
            id: 1,
            name: "Main".to_string(),
            products: vec![
                Product {
                    id: 10,
                    title: "Pen".to_string(),
                },
                Product {
                    id: 11,
                    title: "Ink".to_string(),
                },
            ],
            address: Some(Address {
                city: "Lisbon".to_string(),
            }),
        }
    );

    let op = log.pop().unwrap();
    assert!(op.sql.starts_with("SELECT JSON_OBJECT('id', s.id"));
    assert_eq!(op.args, [Value::I32(1)]);
}

#[tokio::test]
async fn json_select_drops_undecodable_rows() {
    let rows = Rows::new([JSON_OUTPUT])
        .with_row([STORE_JSON])
        .with_row(["{ not json"]);
    let (db, _log) = setup(RecordingExecutor::new().with_rows(rows));

    let stores: Vec<Store> = db.json_select(&Context::new(), |select| select).await.unwrap();

    assert_eq!(stores.len(), 1);
    assert_eq!(stores[0].products.len(), 2);
}

#[tokio::test]
async fn json_select_fails_when_every_row_fails() {
    let rows = Rows::new([JSON_OUTPUT])
        .with_row(["{ not json"])
        .with_row([serde_json::json!({ "id": "one" }).to_string()]);
    let (db, _log) = setup(RecordingExecutor::new().with_rows(rows));

    let err = db
        .json_select::<Store>(&Context::new(), |select| select)
        .await
        .unwrap_err();

    assert!(err.is_json());
}

#[tokio::test]
async fn json_select_without_rows() {
    let (db, _log) = setup(RecordingExecutor::new());

    let stores: Vec<Store> = db.json_select(&Context::new(), |select| select).await.unwrap();
    assert!(stores.is_empty());
}
