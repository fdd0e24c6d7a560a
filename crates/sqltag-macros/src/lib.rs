extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives the type description the walker reads.
///
/// Field tags are given as `#[record(tag = "value", ...)]`, any identifier
/// being a tag name. `#[record(skip)]` leaves a field out entirely.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match sqltag_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
