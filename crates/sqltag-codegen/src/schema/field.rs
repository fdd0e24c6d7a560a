use super::{type_name, ErrorSet};

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Innermost type name, e.g. `Store` for `Option<Box<Store>>`
    pub(crate) ty_name: String,

    /// Field attributes
    pub(crate) attrs: FieldAttr,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// `(tag, value)` pairs from `#[record(...)]`, in attribute order
    pub(crate) tags: Vec<(String, String)>,

    /// `#[record(skip)]`
    pub(crate) skip: bool,

    /// `#[serde(rename = "...")]`, used as the JSON name when no `json`
    /// tag is given
    pub(crate) serde_rename: Option<String>,
}

impl Field {
    /// Returns `None` for fields marked `#[record(skip)]`.
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Option<Self>> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("record") {
                if let Err(err) = attrs.populate_record(attr) {
                    errs.push(err);
                }
            } else if attr.path().is_ident("serde") {
                attrs.populate_serde(attr);
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        if attrs.skip {
            return Ok(None);
        }

        if let Some(rename) = &attrs.serde_rename {
            if !attrs.tags.iter().any(|(tag, _)| tag == "json") {
                attrs.tags.push(("json".to_string(), rename.clone()));
            }
        }

        Ok(Some(Self {
            ident: ident.clone(),
            ty: field.ty.clone(),
            ty_name: type_name(&field.ty),
            attrs,
        }))
    }
}

impl FieldAttr {
    fn populate_record(&mut self, attr: &syn::Attribute) -> syn::Result<()> {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                if self.skip {
                    return Err(meta.error("duplicate `skip`"));
                }
                self.skip = true;
                return Ok(());
            }

            let Some(tag) = meta.path.get_ident().map(|ident| ident.to_string()) else {
                return Err(meta.error("expected `tag = \"value\"` or `skip`"));
            };

            if self.tags.iter().any(|(existing, _)| *existing == tag) {
                return Err(meta.error(format!("duplicate tag `{tag}`")));
            }

            let value: syn::LitStr = meta.value()?.parse()?;
            self.tags.push((tag, value.value()));
            Ok(())
        })
    }

    /// Picks up `rename = "..."`. Everything else belongs to serde, which
    /// reports its own errors.
    fn populate_serde(&mut self, attr: &syn::Attribute) {
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") && meta.input.peek(syn::Token![=]) {
                let value: syn::LitStr = meta.value()?.parse()?;
                self.serde_rename = Some(value.value());
            } else if meta.input.peek(syn::Token![=]) {
                let _: syn::Expr = meta.value()?.parse()?;
            } else if meta.input.peek(syn::token::Paren) {
                meta.parse_nested_meta(|nested| {
                    if nested.input.peek(syn::Token![=]) {
                        let _: syn::Expr = nested.value()?.parse()?;
                    }
                    Ok(())
                })?;
            }
            Ok(())
        });
    }
}
