use super::Db;
use crate::{Config, Executor};

/// Configures a [`Db`] before handing it an executor.
#[derive(Debug, Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    pub fn new() -> Builder {
        Builder::default()
    }

    /// Replaces the whole configuration.
    pub fn config(&mut self, config: Config) -> &mut Self {
        self.config = config;
        self
    }

    /// Tags read by selects, highest priority first.
    pub fn select_tags<S: Into<String>>(&mut self, tags: impl IntoIterator<Item = S>) -> &mut Self {
        self.config.select_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Tags read by inserts, highest priority first.
    pub fn insert_tags<S: Into<String>>(&mut self, tags: impl IntoIterator<Item = S>) -> &mut Self {
        self.config.insert_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Tags read by updates, highest priority first.
    pub fn update_tags<S: Into<String>>(&mut self, tags: impl IntoIterator<Item = S>) -> &mut Self {
        self.config.update_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Separator between the options of tags without an override.
    pub fn default_separator(&mut self, separator: impl Into<String>) -> &mut Self {
        self.config.separators.default = separator.into();
        self
    }

    /// Separator between the options of the tag `tag`.
    pub fn separator(&mut self, tag: impl Into<String>, separator: impl Into<String>) -> &mut Self {
        self.config
            .separators
            .overrides
            .insert(tag.into(), separator.into());
        self
    }

    pub fn build<E: Executor>(&self, executor: E) -> Db<E> {
        Db {
            executor,
            config: self.config.clone(),
        }
    }
}
