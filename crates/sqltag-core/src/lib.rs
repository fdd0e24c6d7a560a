pub mod cond;
pub use cond::{ConditionalKey, Context};

mod config;
pub use config::Config;

pub mod driver;
pub use driver::Executor;

mod error;
pub use error::{Error, IntoError};

pub mod extract;
pub use extract::{ColumnSet, FieldDescriptor};

pub mod projection;

pub mod resolve;

pub mod schema;
pub use schema::{Record, Reflect};

pub mod stmt;

/// A Result type alias that uses sqltag's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
