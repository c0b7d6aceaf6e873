extern crate proc_macro;
use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, ext::IdentExt, parse_macro_input};

/// Derives `flat_json::FromDocument` for a struct with named fields.
///
/// Each field is looked up by its name (raw identifiers lose the `r#`). `Option` fields may be
/// absent, every other field is required. Keys that match no field are ignored.
#[proc_macro_derive(FromDocument)]
pub fn derive_from_document(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let schema = if let Data::Struct(data) = &input.data {
        data
    } else {
        return Error::new_spanned(&input, "FromDocument can only be derived for structs")
            .to_compile_error()
            .into();
    };

    let fields = if let Fields::Named(data) = &schema.fields {
        data
    } else {
        return Error::new_spanned(
            &input,
            "FromDocument can only be derived for named field structs",
        )
        .to_compile_error()
        .into();
    };

    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let field_inits = fields.named.iter().filter_map(|f| {
        let field_name = f.ident.as_ref()?;
        let field_type = &f.ty;
        let key = field_name.unraw().to_string();

        Some(quote! {
            #field_name: ::flat_json::field::<#field_type>(document, #key)?
        })
    });

    let expanded = quote! {
        impl #impl_generics ::flat_json::FromDocument for #struct_name #ty_generics #where_clause {
            fn from_document(
                document: &::flat_json::Document,
            ) -> ::std::result::Result<Self, ::flat_json::ConvertErr> {
                ::std::result::Result::Ok(Self {
                    #( #field_inits, )*
                })
            }
        }
    };

    expanded.into()
}
