mod model;
mod record;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    model: &'a Model,

    /// Path prefix for sqltag types
    sqltag: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let model_static = self.expand_model_static();
        let record_impl = self.expand_record_impl();
        let reflect_impl = self.expand_reflect_impl();

        wrap_in_const(quote! {
            #model_static
            #record_impl
            #reflect_impl
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        sqltag: quote!(_sqltag::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use sqltag as _sqltag;
            #code
        };
    }
}
