/// Wrappers the walker sees through.
const TRANSPARENT: &[&str] = &["Option", "Box", "Vec"];

/// Last path segment of the innermost type, looking through `Option`,
/// `Box` and `Vec`. Generic arguments are dropped.
pub(crate) fn type_name(ty: &syn::Type) -> String {
    match ty {
        syn::Type::Path(path) => {
            let Some(segment) = path.path.segments.last() else {
                return String::new();
            };

            let ident = segment.ident.to_string();
            if TRANSPARENT.contains(&ident.as_str()) {
                if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                    if let Some(syn::GenericArgument::Type(inner)) = args.args.first() {
                        return type_name(inner);
                    }
                }
            }
            ident
        }
        syn::Type::Reference(reference) => type_name(&reference.elem),
        syn::Type::Paren(paren) => type_name(&paren.elem),
        syn::Type::Group(group) => type_name(&group.elem),
        _ => quote::quote!(#ty).to_string(),
    }
}
