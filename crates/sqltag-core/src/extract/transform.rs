use crate::{
    schema::{Record, Reflect},
    Result,
};

use indexmap::IndexMap;
use std::any::Any;

type Rule = Box<dyn Fn(&mut dyn Any) -> bool + Send + Sync>;

/// Named rewrites for fields tagged `transform = "<name>"`.
///
/// Applies to the fields of a record, of an `Option`/`Box` around one, or
/// of each element of a collection. Nested records are left alone.
/// Fields naming a transform that is not registered are left unchanged.
#[derive(Default)]
pub struct Transforms {
    rules: IndexMap<String, Rule>,
}

impl Transforms {
    pub fn new() -> Transforms {
        Transforms::default()
    }

    /// Registers `f` under `name` for fields of type `T`.
    pub fn with<T, F>(mut self, name: impl Into<String>, f: F) -> Transforms
    where
        T: Any,
        F: Fn(&mut T) + Send + Sync + 'static,
    {
        let rule: Rule = Box::new(move |value| match value.downcast_mut::<T>() {
            Some(value) => {
                f(value);
                true
            }
            None => false,
        });

        self.rules.insert(name.into(), rule);
        self
    }

    /// Rewrites the tagged fields of `value` in place.
    ///
    /// Fails when a registered transform does not accept the type of the
    /// field naming it. Fields visited before the failure stay rewritten.
    pub fn apply<T: Reflect + ?Sized>(&self, value: &mut T) -> Result<()> {
        for record in value.records_mut() {
            self.apply_record(record)?;
        }

        Ok(())
    }

    fn apply_record(&self, record: &mut dyn Record) -> Result<()> {
        let model = record.model();

        for (index, def) in model.fields.iter().enumerate() {
            let Some(name) = def.tag("transform").filter(|name| !name.is_empty()) else {
                continue;
            };
            let Some(rule) = self.rules.get(name) else {
                continue;
            };
            let Some(value) = record.field_mut(index) else {
                continue;
            };

            if !rule(value) {
                crate::bail!(
                    "transform `{name}` does not accept {}.{} of type {}",
                    model.name,
                    def.ident,
                    def.ty
                );
            }
        }

        Ok(())
    }
}

impl core::fmt::Debug for Transforms {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Transforms")
            .field("rules", &self.rules.keys().collect::<Vec<_>>())
            .finish()
    }
}
