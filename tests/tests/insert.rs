use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use sqltag::{build_insert, Config, Context, ExecResult, Int32Value, Record, Value};
use tests::{setup, RecordingExecutor};

#[derive(Debug, Record)]
struct Member {
    #[record(dbinsert = "name;table=members")]
    name: String,

    #[record(dbinsert = "age;skipzerovalue=true")]
    age: i32,
}

impl Member {
    fn new(name: &str, age: i32) -> Member {
        Member {
            name: name.to_string(),
            age,
        }
    }
}

fn render(insert: sqltag::Insert) -> (String, Vec<Value>) {
    insert.to_sql().unwrap()
}

#[test]
fn skipzerovalue_leaves_the_column_out() {
    let config = Config::default();
    let cx = Context::new();

    let (sql, args) = render(build_insert(&config, &cx, &Member::new("Tom", 0), |insert| insert).unwrap());
    assert_eq!(sql, "INSERT INTO members (name) VALUES (?)");
    assert_eq!(args, [Value::from("Tom")]);

    let (sql, args) = render(build_insert(&config, &cx, &Member::new("Tom", 20), |insert| insert).unwrap());
    assert_eq!(sql, "INSERT INTO members (name,age) VALUES (?,?)");
    assert_eq!(args, [Value::from("Tom"), Value::I32(20)]);
}

#[test]
fn multi_row_falls_back_to_default() {
    let rows = vec![Member::new("Ann", 0), Member::new("Bob", 30)];

    let (sql, args) = render(
        build_insert(&Config::default(), &Context::new(), &rows, |insert| insert).unwrap(),
    );

    assert_eq!(
        sql,
        "INSERT INTO members (name,age) VALUES (?,DEFAULT(age)),(?,?)"
    );
    assert_eq!(args, [Value::from("Ann"), Value::from("Bob"), Value::I32(30)]);
}

#[test]
fn multi_row_from_slice() {
    let rows = [Member::new("Ann", 41), Member::new("Bob", 0)];

    let (sql, args) = render(
        build_insert(&Config::default(), &Context::new(), &rows[..], |insert| {
            insert.options("IGNORE")
        })
        .unwrap(),
    );

    assert_eq!(
        sql,
        "INSERT IGNORE INTO members (name,age) VALUES (?,?),(?,DEFAULT(age))"
    );
    assert_eq!(args, [Value::from("Ann"), Value::I32(41), Value::from("Bob")]);
}

#[test]
fn nil_and_zero_replacements() {
    #[derive(Debug, Record)]
    struct Signup {
        #[record(db = "email,table=signups")]
        email: String,

        #[record(db = "nickname,nilval=anonymous")]
        nickname: Option<String>,

        #[record(db = "referrer_id,zeronil=true")]
        referrer_id: i64,

        #[record(db = "-")]
        internal: String,
    }

    let signup = Signup {
        email: "a@example.com".to_string(),
        nickname: None,
        referrer_id: 0,
        internal: "x".to_string(),
    };

    let (sql, args) = render(
        build_insert(&Config::default(), &Context::new(), &signup, |insert| insert).unwrap(),
    );

    assert_eq!(
        sql,
        "INSERT INTO signups (email,nickname,referrer_id) VALUES (?,?,?)"
    );
    assert_eq!(
        args,
        [Value::from("a@example.com"), Value::from("anonymous"), Value::Null]
    );
}

#[test]
fn optional_wrappers() {
    #[derive(Debug, Record)]
    struct Score {
        #[record(dbinsert = "player;table=scores")]
        player: String,

        #[record(dbinsert = "points;skipnil=true;skipzero=true")]
        points: Option<Int32Value>,
    }

    let config = Config::default();
    let cx = Context::new();

    // An explicitly set zero is still written
    let set = Score {
        player: "p1".to_string(),
        points: Some(Int32Value::new(0)),
    };
    let (sql, args) = render(build_insert(&config, &cx, &set, |insert| insert).unwrap());
    assert_eq!(sql, "INSERT INTO scores (player,points) VALUES (?,?)");
    assert_eq!(args, [Value::from("p1"), Value::I32(0)]);

    let unset = Score {
        player: "p2".to_string(),
        points: None,
    };
    let (sql, _) = render(build_insert(&config, &cx, &unset, |insert| insert).unwrap());
    assert_eq!(sql, "INSERT INTO scores (player) VALUES (?)");

    // Rows of a multi-row insert normalize the wrapper the same way
    let (sql, args) = render(build_insert(&config, &cx, &vec![set, unset], |insert| insert).unwrap());
    assert_eq!(
        sql,
        "INSERT INTO scores (player,points) VALUES (?,?),(?,DEFAULT(points))"
    );
    assert_eq!(args, [Value::from("p1"), Value::I32(0), Value::from("p2")]);
}

#[test]
fn unset_timestamp_is_zero() {
    #[derive(Debug, Record)]
    struct Login {
        #[record(dbinsert = "user_id;table=logins")]
        user_id: i64,

        #[record(dbinsert = "at;skipzero=true")]
        at: DateTime<Utc>,
    }

    let config = Config::default();
    let cx = Context::new();

    let unset = Login {
        user_id: 1,
        at: DateTime::default(),
    };
    let (sql, _) = render(build_insert(&config, &cx, &unset, |insert| insert).unwrap());
    assert_eq!(sql, "INSERT INTO logins (user_id) VALUES (?)");

    let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
    let set = Login { user_id: 1, at };
    let (sql, args) = render(build_insert(&config, &cx, &set, |insert| insert).unwrap());
    assert_eq!(sql, "INSERT INTO logins (user_id,at) VALUES (?,?)");
    assert_eq!(args, [Value::I64(1), Value::DateTime(at)]);
}

#[test]
fn loaded_config_keeps_db_separator() {
    #[derive(Debug, Record)]
    struct Agent {
        #[record(db = "id,table=agents")]
        id: i64,

        #[record(dbinsert = "name|skipzero=true")]
        name: String,
    }

    let config: Config =
        serde_json::from_str(r#"{ "separators": { "default": "|" } }"#).unwrap();

    let agent = Agent {
        id: 7,
        name: String::new(),
    };
    let (sql, args) = render(build_insert(&config, &Context::new(), &agent, |insert| insert).unwrap());

    assert_eq!(sql, "INSERT INTO agents (id) VALUES (?)");
    assert_eq!(args, [Value::I64(7)]);
}

#[test]
fn empty_collection_is_an_error() {
    let err = build_insert(&Config::default(), &Context::new(), &Vec::<Member>::new(), |insert| insert)
        .unwrap_err();

    assert_eq!(err.to_string(), "needs at least one row to insert");
}

#[test]
fn nil_item_is_an_error() {
    let err = build_insert(&Config::default(), &Context::new(), &None::<Member>, |insert| insert)
        .unwrap_err();

    assert_eq!(err.to_string(), "item is nil");
}

#[test]
fn missing_table() {
    #[derive(Debug, Record)]
    struct Untabled {
        #[record(dbinsert = "name")]
        name: String,
    }

    let err = build_insert(
        &Config::default(),
        &Context::new(),
        &Untabled {
            name: "x".to_string(),
        },
        |insert| insert,
    )
    .unwrap_err();

    assert!(err.is_missing_table());
    assert_eq!(err.to_string(), "insert table not found");
}

#[tokio::test]
async fn insert_runs_through_the_executor() {
    let executor = RecordingExecutor::new().with_exec_result(ExecResult::new(1).with_last_insert_id(42));
    let (db, log) = setup(executor);

    let result = db
        .insert(&Context::new(), &Member::new("Tom", 20), |insert| insert)
        .await
        .unwrap();
    assert_eq!(result.last_insert_id, Some(42));

    let op = log.pop().unwrap();
    assert_eq!(op.sql, "INSERT INTO members (name,age) VALUES (?,?)");
    assert_eq!(op.args, [Value::from("Tom"), Value::I32(20)]);
    assert!(log.is_empty());
}
