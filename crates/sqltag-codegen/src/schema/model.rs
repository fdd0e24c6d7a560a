use super::{ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Model {
    /// Struct identifier
    pub(crate) ident: syn::Ident,

    /// Walked fields, in declaration order. Fields marked
    /// `#[record(skip)]` are left out.
    pub(crate) fields: Vec<Field>,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "#[derive(Record)] does not support generic structs",
            ));
        }

        let syn::Fields::Named(named) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "#[derive(Record)] requires a struct with named fields",
            ));
        };

        let mut errs = ErrorSet::new();
        let mut fields = vec![];

        for field in &named.named {
            match Field::from_ast(field) {
                Ok(Some(field)) => fields.push(field),
                Ok(None) => {}
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ast.ident.clone(),
            fields,
        })
    }
}
