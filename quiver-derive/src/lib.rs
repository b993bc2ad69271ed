mod util;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, Error};

/// Implements `quiver::core::Edge` for a struct with one field marked
/// `#[source]` and one field marked `#[target]`. Both fields must have the same
/// type, which becomes the vertex type of the edge.
///
/// ```ignore
/// #[derive(Edge)]
/// struct Road {
///     #[source]
///     from: City,
///     #[target]
///     to: City,
///     length: u32,
/// }
/// ```
#[proc_macro_derive(Edge, attributes(source, target, quiver_crate))]
pub fn edge(tokens: TokenStream) -> TokenStream {
    let input = parse_macro_input!(tokens as DeriveInput);

    match derive_edge(&input) {
        Ok(implemented) => TokenStream::from(implemented),
        Err(error) => TokenStream::from(error.to_compile_error()),
    }
}

fn derive_edge(input: &DeriveInput) -> Result<proc_macro2::TokenStream, Error> {
    let quiver = util::get_quiver_path(input);

    let name = &input.ident;
    let (source, source_type) = util::get_marked_field(input, "source")?;
    let (target, target_type) = util::get_marked_field(input, "target")?;

    if !util::same_type(source_type, target_type) {
        return Err(Error::new_spanned(
            target_type,
            "source and target must have the same type",
        ));
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #quiver::core::Edge<#source_type> for #name #ty_generics #where_clause {
            fn source(&self) -> &#source_type {
                &self.#source
            }

            fn target(&self) -> &#source_type {
                &self.#target
            }
        }
    })
}
