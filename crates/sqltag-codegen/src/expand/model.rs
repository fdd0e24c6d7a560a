use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// `static MODEL`: the record's type description.
    pub(super) fn expand_model_static(&self) -> TokenStream {
        let sqltag = &self.sqltag;
        let name = self.model.ident.to_string();

        let fields = self.model.fields.iter().map(|field| {
            let ident = field.ident.to_string();
            let ty = &field.ty;
            let ty_name = &field.ty_name;
            let tags = field
                .attrs
                .tags
                .iter()
                .map(|(tag, value)| quote!((#tag, #value)));

            quote! {
                #sqltag::FieldDef {
                    ident: #ident,
                    ty: #ty_name,
                    tags: &[ #( #tags ),* ],
                    shape: <#ty as #sqltag::Reflect>::SHAPE,
                    model: <#ty as #sqltag::Reflect>::model,
                }
            }
        });

        quote! {
            static MODEL: #sqltag::Model = #sqltag::Model {
                name: #name,
                fields: &[ #( #fields ),* ],
                nullable: #sqltag::Option::None,
            };
        }
    }
}
