use pretty_assertions::assert_eq;
use sqltag::{build_upsert, Config, Context, Record, Value};
use tests::{setup, RecordingExecutor};

#[derive(Debug, Record)]
struct User {
    #[record(dbinsert = "name;table=users", dbupdate = "name")]
    name: String,

    #[record(dbinsert = "age", dbupdate = "age")]
    age: i32,
}

fn users() -> Vec<User> {
    vec![
        User {
            name: "Tom".to_string(),
            age: 20,
        },
        User {
            name: "John".to_string(),
            age: 30,
        },
    ]
}

#[test]
fn two_rows() {
    let (sql, args) = build_upsert(&Config::default(), &Context::new(), &users(), |insert| insert, &[])
        .unwrap()
        .to_sql()
        .unwrap();

    assert_eq!(
        sql,
        "INSERT INTO users (name,age) VALUES (?,?),(?,?) \
         ON DUPLICATE KEY UPDATE name = VALUES(name), age = VALUES(age)"
    );
    assert_eq!(
        args,
        [
            Value::from("Tom"),
            Value::I32(20),
            Value::from("John"),
            Value::I32(30)
        ]
    );
}

#[test]
fn explicit_update_columns() {
    let user = User {
        name: "Tom".to_string(),
        age: 21,
    };

    let (sql, _) = build_upsert(&Config::default(), &Context::new(), &user, |insert| insert, &["age"])
        .unwrap()
        .to_sql()
        .unwrap();

    assert_eq!(
        sql,
        "INSERT INTO users (name,age) VALUES (?,?) ON DUPLICATE KEY UPDATE age = VALUES(age)"
    );
}

#[test]
fn conflict_clause_follows_the_modifier() {
    let (sql, _) = build_upsert(
        &Config::default(),
        &Context::new(),
        &users(),
        |insert| insert.suffix("/* batch */"),
        &["age"],
    )
    .unwrap()
    .to_sql()
    .unwrap();

    assert!(sql.ends_with("/* batch */ ON DUPLICATE KEY UPDATE age = VALUES(age)"));
}

#[test]
fn no_update_columns_means_plain_insert() {
    #[derive(Debug, Record)]
    struct Event {
        #[record(dbinsert = "kind;table=events")]
        kind: String,
    }

    let event = Event {
        kind: "login".to_string(),
    };

    let (sql, _) = build_upsert(&Config::default(), &Context::new(), &event, |insert| insert, &[])
        .unwrap()
        .to_sql()
        .unwrap();

    assert_eq!(sql, "INSERT INTO events (kind) VALUES (?)");
}

#[tokio::test]
async fn upsert_runs_through_the_executor() {
    let (db, log) = setup(RecordingExecutor::new());

    db.upsert(&Context::new(), &users(), |insert| insert, &[])
        .await
        .unwrap();

    let op = log.pop().unwrap();
    assert!(op.sql.starts_with("INSERT INTO users (name,age) VALUES (?,?),(?,?) ON DUPLICATE KEY"));
    assert_eq!(op.args.len(), 4);
}
