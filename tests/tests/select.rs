use pretty_assertions::assert_eq;
use serde::Deserialize;
use sqltag::{build_select, Config, Context, Error, Expr, Operation, Record, Rows, Value};
use tests::{setup, RecordingExecutor};

#[derive(Debug, Record, Deserialize)]
struct Agent {
    #[record(db = "id,table=agents")]
    id: i64,

    #[record(db = "name")]
    name: String,
}

#[derive(Debug, Record, Deserialize)]
struct Account {
    #[record(db = "id,table=accounts act,select=act.id")]
    id: i32,

    #[record(db = "name,select=act.full_name AS name")]
    name: String,

    #[record(db = "score,select=ascore.score,join=LEFT JOIN accounts_score ascore ON ascore.account_id=act.id")]
    score: i32,
}

#[test]
fn select_with_external_filter() {
    let select = build_select::<Agent>(&Config::default(), &Context::new(), |select| {
        select.filter(Expr::new("id=?", [1]))
    })
    .unwrap();

    let (sql, args) = select.to_sql().unwrap();
    assert_eq!(sql, "SELECT id, name FROM agents WHERE id=?");
    assert_eq!(args, [Value::I32(1)]);
}

#[test]
fn select_overrides_and_joins() {
    let select = build_select::<Account>(&Config::default(), &Context::new(), |select| {
        select
            .filter(Expr::new("full_name LIKE ?", ["A%"]))
            .order_by("id ASC")
            .order_by("name ASC")
    })
    .unwrap();

    let (sql, args) = select.to_sql().unwrap();
    assert_eq!(
        sql,
        "SELECT act.id, act.full_name AS name, ascore.score FROM accounts act \
         LEFT JOIN accounts_score ascore ON ascore.account_id=act.id \
         WHERE full_name LIKE ? ORDER BY id ASC, name ASC"
    );
    assert_eq!(args, [Value::from("A%")]);
}

#[test]
fn first_table_in_walk_order_wins() {
    #[derive(Debug, Record)]
    struct Report {
        #[record(dbselect = "id;table=a")]
        id: i64,

        #[record(dbselect = "total;table=b")]
        total: i64,

        #[record(dbselect = "label;select_table=reports r")]
        label: String,
    }

    #[derive(Debug, Record)]
    struct Plain {
        #[record(dbselect = "id;table=a")]
        id: i64,

        #[record(dbselect = "total;table=b")]
        total: i64,
    }

    let cx = Context::new();

    let select = build_select::<Report>(&Config::default(), &cx, |select| select).unwrap();
    assert_eq!(select.from.as_deref(), Some("reports r"));

    let select = build_select::<Plain>(&Config::default(), &cx, |select| select).unwrap();
    assert_eq!(select.from.as_deref(), Some("a"));
}

#[test]
fn hidden_columns_are_not_selected() {
    #[derive(Debug, Record)]
    struct Order {
        #[record(db = "id,table=orders o")]
        id: i64,

        #[record(db = "-,join=JOIN customers c ON c.id = o.customer_id")]
        customer_join: String,

        #[record(db = "")]
        note: String,

        #[record(db = "-,select=c.name")]
        customer: String,

        internal: String,
    }

    let select = build_select::<Order>(&Config::default(), &Context::new(), |select| select).unwrap();
    let (sql, _) = select.to_sql().unwrap();

    assert_eq!(
        sql,
        "SELECT id, c.name FROM orders o JOIN customers c ON c.id = o.customer_id"
    );
}

#[test]
fn context_gates_columns_joins_and_group_by() {
    #[derive(Debug, Record)]
    struct Agent {
        #[record(db = "a.id,table=agents a")]
        id: i64,

        #[record(
            db = "-,select=COUNT(o.id) AS orders,join=LEFT JOIN {orders} o ON o.agent_id = a.id,joinif=with_orders,groupby=a.id,groupif=with_orders"
        )]
        orders: i64,

        #[record(db = "-,recursiveif=with_store")]
        store: Option<Store>,
    }

    #[derive(Debug, Record)]
    struct Store {
        #[record(db = "s.name,join=stores s")]
        name: String,
    }

    let config = Config::default();

    let cx = Context::new()
        .with_flag("with_orders", true)
        .with_flag("with_store", false)
        .with_join_replace("{orders}", "orders_2024");
    let (sql, _) = build_select::<Agent>(&config, &cx, |select| select)
        .unwrap()
        .to_sql()
        .unwrap();
    assert_eq!(
        sql,
        "SELECT a.id, COUNT(o.id) AS orders FROM agents a \
         LEFT JOIN orders_2024 o ON o.agent_id = a.id GROUP BY a.id"
    );

    // Absent flags default to enabled; a bare table joins with `JOIN`
    let cx = Context::new().with_flag("with_orders", false);
    let (sql, _) = build_select::<Agent>(&config, &cx, |select| select)
        .unwrap()
        .to_sql()
        .unwrap();
    assert_eq!(sql, "SELECT a.id, s.name FROM agents a JOIN stores s");
}

#[test]
fn missing_table() {
    #[derive(Debug, Record)]
    struct Orphan {
        #[record(db = "id")]
        id: i64,
    }

    let err = build_select::<Orphan>(&Config::default(), &Context::new(), |select| select).unwrap_err();

    assert!(err.is_missing_table());
    assert_eq!(err.to_string(), "select table not found");
}

#[tokio::test]
async fn select_decodes_rows() {
    let rows = Rows::new(["id", "name", "score"])
        .with_row([Value::I64(1), Value::from("Alice"), Value::I64(1000)])
        .with_row([Value::I64(2), Value::from("Anne"), Value::I64(500)]);
    let (db, log) = setup(RecordingExecutor::new().with_rows(rows));

    let accounts: Vec<Account> = db
        .select(&Context::new(), |select| {
            select.filter(Expr::new("full_name LIKE ?", ["A%"]))
        })
        .await
        .unwrap();

    assert_eq!(accounts.len(), 2);
    assert_eq!((accounts[0].id, accounts[0].name.as_str(), accounts[0].score), (1, "Alice", 1000));
    assert_eq!((accounts[1].id, accounts[1].name.as_str(), accounts[1].score), (2, "Anne", 500));

    let op = log.pop().unwrap();
    assert!(op.sql.starts_with("SELECT act.id, act.full_name AS name, ascore.score FROM accounts act"));
    assert_eq!(op.args, [Value::from("A%")]);
}

#[tokio::test]
async fn get_matches_columns_by_label() {
    // The extra column pushes the counts apart, so columns map by label
    let rows = Rows::new(["name", "id", "extra"]).with_row([
        Value::from("Alice"),
        Value::I64(7),
        Value::Bool(true),
    ]);
    let (db, _log) = setup(RecordingExecutor::new().with_rows(rows));

    let agent: Agent = db
        .get(&Context::new(), |select| select.column("1 AS extra"))
        .await
        .unwrap();

    assert_eq!(agent.id, 7);
    assert_eq!(agent.name, "Alice");
}

#[tokio::test]
async fn get_without_rows() {
    let (db, log) = setup(RecordingExecutor::new());

    let err = db
        .get::<Agent>(&Context::new(), |select| select.filter(Expr::eq("id", 99)))
        .await
        .unwrap_err();

    assert!(err.is_record_not_found());
    assert_eq!(log.len(), 1);
}

#[tokio::test]
async fn executor_errors_carry_the_query_name() {
    let executor = RecordingExecutor::new().with_error(sqltag::err!("connection reset"));
    let (db, _log) = setup(executor);

    let err = db
        .select::<Agent>(&Context::new(), |select| select)
        .await
        .unwrap_err();

    assert!(err.is_query());
    assert_eq!(err.to_string(), "agents.select: connection reset");
}

#[tokio::test]
async fn driver_errors_stay_in_the_chain() {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset by peer");
    let executor = RecordingExecutor::new().with_error(Error::driver(io));
    let (db, _log) = setup(executor);

    let err = db
        .select::<Agent>(&Context::new(), |select| select)
        .await
        .unwrap_err();

    assert!(err.is_query());
    assert!(err.is_driver());
    assert_eq!(err.query_message(), Some("agents.select failed"));
    assert_eq!(err.to_string(), "agents.select: connection reset by peer");
}

#[test]
fn qualified_columns() {
    #[derive(Debug, Record)]
    struct Order {
        #[record(dbselect = "id;table=orders o")]
        id: i64,

        #[record(dbselect = "name")]
        name: String,

        #[record(dbselect = "o.total")]
        total: i64,

        #[record(dbselect = "-;select=COUNT(x)")]
        lines: i64,

        #[record(dbselect = "label;select=UPPER(name) AS label")]
        label: String,

        #[record(dbselect = "notes;joinif=with_notes")]
        notes: String,
    }

    let set = Config::default()
        .scan(Operation::Select, &None::<Order>, &[])
        .unwrap();
    let cx = Context::new().with_flag("with_notes", false);

    assert_eq!(
        set.select_columns_qualified(&cx, "o"),
        ["o.id", "o.name", "o.total", "COUNT(x)", "UPPER(name) AS label"]
    );
    assert_eq!(
        set.select_columns_qualified(&cx, ""),
        ["id", "name", "o.total", "COUNT(x)", "UPPER(name) AS label"]
    );
    assert_eq!(
        set.select_columns_qualified(&Context::new(), "o").last().map(String::as_str),
        Some("o.notes")
    );
}
