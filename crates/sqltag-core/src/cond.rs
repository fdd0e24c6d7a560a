use indexmap::IndexMap;

/// Name of a conditional flag looked up in a [`Context`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConditionalKey(String);

impl ConditionalKey {
    pub fn new(key: impl Into<String>) -> ConditionalKey {
        ConditionalKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ConditionalKey {
    fn from(key: &str) -> Self {
        ConditionalKey::new(key)
    }
}

impl From<String> for ConditionalKey {
    fn from(key: String) -> Self {
        ConditionalKey(key)
    }
}

impl core::fmt::Display for ConditionalKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request-scoped values consulted while assembling a statement.
///
/// Holds the conditional-flag namespace and the join token substitutions.
/// A context is built per call and never shared between statements.
#[derive(Debug, Clone, Default)]
pub struct Context {
    values: IndexMap<ConditionalKey, serde_json::Value>,
    join_replace: IndexMap<String, String>,
}

impl Context {
    pub fn new() -> Context {
        Context::default()
    }

    /// Sets the boolean flag `key`.
    pub fn with_flag(mut self, key: impl Into<ConditionalKey>, value: bool) -> Context {
        self.set_flag(key, value);
        self
    }

    pub fn set_flag(&mut self, key: impl Into<ConditionalKey>, value: bool) {
        self.values.insert(key.into(), serde_json::Value::Bool(value));
    }

    /// Stores an arbitrary value under `key`. Only boolean values take part
    /// in flag evaluation.
    pub fn with_value(
        mut self,
        key: impl Into<ConditionalKey>,
        value: impl Into<serde_json::Value>,
    ) -> Context {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn value(&self, key: &ConditionalKey) -> Option<&serde_json::Value> {
        self.values.get(key)
    }

    /// Registers a substitution applied to every join clause: occurrences of
    /// `from` are replaced with `to`. Substitutions run in registration
    /// order.
    pub fn with_join_replace(mut self, from: impl Into<String>, to: impl Into<String>) -> Context {
        self.join_replace.insert(from.into(), to.into());
        self
    }

    pub fn join_replace(&self) -> &IndexMap<String, String> {
        &self.join_replace
    }

    /// Evaluates the flag `key`, falling back to `default` when the flag is
    /// absent or not a boolean.
    pub fn resolve(&self, key: &ConditionalKey, default: bool) -> bool {
        match self.values.get(key) {
            Some(serde_json::Value::Bool(value)) => *value,
            _ => default,
        }
    }

    /// Applies the join substitutions to `join`.
    pub fn replace_joins(&self, join: &str) -> String {
        self.join_replace
            .iter()
            .fold(join.to_string(), |acc, (from, to)| acc.replace(from.as_str(), to))
    }
}

/// Evaluates the flag `key` in `cx`. See [`Context::resolve`].
pub fn resolve(cx: &Context, key: &ConditionalKey, default: bool) -> bool {
    cx.resolve(key, default)
}
