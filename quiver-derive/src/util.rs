use quote::ToTokens;
use syn::{
    parse_quote, spanned::Spanned, Data, DataStruct, DeriveInput, Error, Field, Fields, Index,
    Member, Path, Type,
};

pub fn get_quiver_path(input: &DeriveInput) -> Path {
    let is_quiver_crate = input
        .attrs
        .iter()
        .any(|attr| attr.path.is_ident("quiver_crate"));

    if is_quiver_crate {
        parse_quote! { crate }
    } else {
        parse_quote! { ::quiver }
    }
}

fn get_fields(input: &DeriveInput) -> Result<&Fields, Error> {
    match input.data {
        Data::Struct(DataStruct { ref fields, .. }) => Ok(fields),
        _ => Err(Error::new(
            input.ident.span(),
            "unsupported type (use struct)",
        )),
    }
}

fn is_marked(field: &Field, attr: &str) -> bool {
    field.attrs.iter().any(|a| a.path.is_ident(attr))
}

/// Finds the only field marked with given attribute. Returns the expression
/// member for accessing the field and its type.
pub fn get_marked_field<'a>(
    input: &'a DeriveInput,
    attr: &str,
) -> Result<(Member, &'a Type), Error> {
    let mut marked = get_fields(input)?
        .iter()
        .enumerate()
        .filter(|(_, field)| is_marked(field, attr));

    let (index, field) = marked.next().ok_or_else(|| {
        Error::new(
            input.ident.span(),
            format!("{attr} attribute is required"),
        )
    })?;

    if let Some((_, duplicate)) = marked.next() {
        return Err(Error::new(
            duplicate.span(),
            format!("{attr} attribute can be used only once"),
        ));
    }

    let member = match field.ident {
        Some(ref ident) => Member::Named(ident.clone()),
        None => Member::Unnamed(Index::from(index)),
    };

    Ok((member, &field.ty))
}

pub fn same_type(lhs: &Type, rhs: &Type) -> bool {
    lhs.to_token_stream().to_string() == rhs.to_token_stream().to_string()
}
