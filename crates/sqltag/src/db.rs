mod builder;
pub use builder::Builder;

use crate::{
    build, row, Config, Context, Error, ExecResult, Executor, Insert, Result, Rows, Select,
    Statement, Update,
};

use sqltag_core::schema::Reflect;

use serde::de::DeserializeOwned;

/// Maps records to statements and runs them through an [`Executor`].
///
/// Every call walks the record type again: nothing extracted from a walk
/// outlives the call.
#[derive(Debug)]
pub struct Db<E> {
    executor: E,
    config: Config,
}

impl<E: Executor> Db<E> {
    /// A handle using the default [`Config`].
    pub fn new(executor: E) -> Db<E> {
        Builder::new().build(executor)
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Loads a single row of `T`.
    ///
    /// Fails with a record-not-found error when the query returns no row.
    pub async fn get<T>(&self, cx: &Context, modify: impl FnOnce(Select) -> Select) -> Result<T>
    where
        T: Reflect + DeserializeOwned,
    {
        let set = build::scan_select::<T>(&self.config)?;
        let fields = set.select_fields(cx);
        let select = build::assemble(&set, cx, set.select_columns(cx), modify)?;

        let name = query_name(select.from.as_deref(), "get");
        let rows = self.query(&name, select.into()).await?;

        if rows.is_empty() {
            return Err(Error::record_not_found(name));
        }

        row::decode(&set, &fields, &rows, 0)
    }

    /// Loads every row of `T` the query returns.
    pub async fn select<T>(
        &self,
        cx: &Context,
        modify: impl FnOnce(Select) -> Select,
    ) -> Result<Vec<T>>
    where
        T: Reflect + DeserializeOwned,
    {
        let set = build::scan_select::<T>(&self.config)?;
        let fields = set.select_fields(cx);
        let select = build::assemble(&set, cx, set.select_columns(cx), modify)?;

        let name = query_name(select.from.as_deref(), "select");
        let rows = self.query(&name, select.into()).await?;

        (0..rows.len())
            .map(|index| row::decode(&set, &fields, &rows, index))
            .collect()
    }

    /// Loads a single row of `T` through the JSON projection.
    pub async fn json_get<T>(
        &self,
        cx: &Context,
        modify: impl FnOnce(Select) -> Select,
    ) -> Result<T>
    where
        T: Reflect + DeserializeOwned,
    {
        let select = build::build_json_select::<T>(&self.config, cx, modify)?;

        let name = query_name(select.from.as_deref(), "json_get");
        let rows = self.query(&name, select.into()).await?;

        if rows.is_empty() {
            return Err(Error::record_not_found(name));
        }

        row::decode_json(&rows, 0)
    }

    /// Loads every row of `T` through the JSON projection.
    ///
    /// Rows are decoded independently. A row failing to decode is logged
    /// and dropped; the last decode error is returned only when no row
    /// decodes.
    pub async fn json_select<T>(
        &self,
        cx: &Context,
        modify: impl FnOnce(Select) -> Select,
    ) -> Result<Vec<T>>
    where
        T: Reflect + DeserializeOwned,
    {
        let select = build::build_json_select::<T>(&self.config, cx, modify)?;

        let name = query_name(select.from.as_deref(), "json_select");
        let rows = self.query(&name, select.into()).await?;

        let mut records = Vec::with_capacity(rows.len());
        let mut last_err = None;

        for index in 0..rows.len() {
            match row::decode_json(&rows, index) {
                Ok(record) => records.push(record),
                Err(err) => {
                    tracing::warn!(query = %name, row = index, error = %err, "dropping undecodable JSON row");
                    last_err = Some(err);
                }
            }
        }

        match last_err {
            Some(err) if records.is_empty() => Err(err),
            _ => Ok(records),
        }
    }

    /// Inserts `items`, a record or a collection of records.
    pub async fn insert<T: Reflect + ?Sized>(
        &self,
        cx: &Context,
        items: &T,
        modify: impl FnOnce(Insert) -> Insert,
    ) -> Result<ExecResult> {
        let insert = build::build_insert(&self.config, cx, items, modify)?;

        let name = query_name(Some(insert.into.as_str()), "insert");
        self.execute(&name, insert.into()).await
    }

    /// Updates the row of `item`, leaving out the columns in
    /// `skip_columns`.
    pub async fn update<T: Reflect + ?Sized>(
        &self,
        cx: &Context,
        item: &T,
        modify: impl FnOnce(Update) -> Update,
        skip_columns: &[&str],
    ) -> Result<ExecResult> {
        let update = build::build_update(&self.config, cx, item, modify, skip_columns)?;

        let name = query_name(Some(update.table.as_str()), "update");
        self.execute(&name, update.into()).await
    }

    /// Inserts `items`, updating `update_columns` of the existing rows on a
    /// key conflict. See [`build_upsert`](crate::build_upsert).
    pub async fn upsert<T: Reflect + ?Sized>(
        &self,
        cx: &Context,
        items: &T,
        modify: impl FnOnce(Insert) -> Insert,
        update_columns: &[&str],
    ) -> Result<ExecResult> {
        let insert = build::build_upsert(&self.config, cx, items, modify, update_columns)?;

        let name = query_name(Some(insert.into.as_str()), "upsert");
        self.execute(&name, insert.into()).await
    }

    async fn query(&self, name: &str, stmt: Statement) -> Result<Rows> {
        let (sql, args) = stmt.to_sql()?;
        tracing::debug!(query = name, %sql, args = args.len(), "running query");

        self.executor
            .query(&sql, &args)
            .await
            .map_err(|err| Error::query(format!("{name} failed"), name, err))
    }

    async fn execute(&self, name: &str, stmt: Statement) -> Result<ExecResult> {
        let (sql, args) = stmt.to_sql()?;
        tracing::debug!(query = name, %sql, args = args.len(), "running statement");

        self.executor
            .execute(&sql, &args)
            .await
            .map_err(|err| Error::query(format!("{name} failed"), name, err))
    }
}

/// `<table>.<operation>`, identifying a statement in logs and errors.
fn query_name(table: Option<&str>, operation: &str) -> String {
    match table {
        Some(table) => format!("{table}.{operation}"),
        None => operation.to_string(),
    }
}
