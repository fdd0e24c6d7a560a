use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let sqltag = &self.sqltag;
        let model_ident = &self.model.ident;

        let arms = self.model.fields.iter().enumerate().map(|(index, field)| {
            let ident = &field.ident;
            quote!(#index => #sqltag::Reflect::reflect(&self.#ident),)
        });

        let mut_arms = self.model.fields.iter().enumerate().map(|(index, field)| {
            let ident = &field.ident;
            quote!(#index => #sqltag::Option::Some(&mut self.#ident as &mut dyn #sqltag::Any),)
        });

        quote! {
            impl #sqltag::Record for #model_ident {
                fn model(&self) -> &'static #sqltag::Model {
                    &MODEL
                }

                fn field(&self, index: usize) -> #sqltag::Reflected<'_> {
                    match index {
                        #( #arms )*
                        _ => #sqltag::Reflected::Nil,
                    }
                }

                fn field_mut(&mut self, index: usize) -> #sqltag::Option<&mut dyn #sqltag::Any> {
                    match index {
                        #( #mut_arms )*
                        _ => #sqltag::Option::None,
                    }
                }
            }
        }
    }

    pub(super) fn expand_reflect_impl(&self) -> TokenStream {
        let sqltag = &self.sqltag;
        let model_ident = &self.model.ident;

        quote! {
            impl #sqltag::Reflect for #model_ident {
                const SHAPE: #sqltag::Shape = #sqltag::Shape::Struct;

                fn model() -> #sqltag::Option<&'static #sqltag::Model> {
                    #sqltag::Option::Some(&MODEL)
                }

                fn reflect(&self) -> #sqltag::Reflected<'_> {
                    #sqltag::Reflected::Record(self)
                }

                fn records_mut(&mut self) -> #sqltag::Vec<&mut dyn #sqltag::Record> {
                    #sqltag::Vec::from([self as &mut dyn #sqltag::Record])
                }
            }
        }
    }
}
