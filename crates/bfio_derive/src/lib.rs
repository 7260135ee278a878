use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DataStruct, DeriveInput, Fields, Index, Member, parse_macro_input, parse_quote};

/// Derives `bfio::Encode` and `bfio::Decode` for a struct.
///
/// The field list is the struct's own declaration order, used for both
/// directions. Reordering fields changes the wire format.
#[proc_macro_derive(Serialize)]
pub fn derive_serialize(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;

    let fields = match &input.data {
        Data::Struct(DataStruct { fields, .. }) => fields,
        _ => {
            return syn::Error::new_spanned(
                &input.ident,
                "Serialize can only be derived for structs",
            )
            .to_compile_error()
            .into();
        }
    };

    let members = members(fields);
    let field_types: Vec<_> = fields.iter().map(|field| &field.ty).collect();

    // Bound field types only when there are generics to bound; concrete
    // field types are checked by the generated calls themselves.
    let has_generics = !input.generics.params.is_empty();

    let mut encode_generics = input.generics.clone();
    let mut decode_generics = input.generics.clone();
    if has_generics {
        let encode_where = encode_generics.make_where_clause();
        for ty in &field_types {
            encode_where
                .predicates
                .push(parse_quote! { #ty: ::bfio::Encode });
        }
        let decode_where = decode_generics.make_where_clause();
        for ty in &field_types {
            decode_where
                .predicates
                .push(parse_quote! { #ty: ::bfio::Decode });
        }
    }

    let (encode_impl_generics, ty_generics, encode_where_clause) =
        encode_generics.split_for_impl();
    let (decode_impl_generics, _, decode_where_clause) = decode_generics.split_for_impl();

    let expanded = quote! {
        impl #encode_impl_generics ::bfio::Encode for #struct_name #ty_generics #encode_where_clause {
            const SHAPE: ::bfio::Shape = ::bfio::Shape::Aggregate;

            #[allow(unused_variables)]
            fn encode<__S>(&self, writer: &mut ::bfio::Writer<'_, __S>) -> ::bfio::Result<()>
            where
                __S: ::bfio::Sink + ?Sized,
            {
                #(::bfio::Encode::encode(&self.#members, writer)?;)*
                ::core::result::Result::Ok(())
            }
        }

        impl #decode_impl_generics ::bfio::Decode for #struct_name #ty_generics #decode_where_clause {
            const MIN_SIZE: usize = 0usize #(.saturating_add(<#field_types as ::bfio::Decode>::MIN_SIZE))*;

            #[allow(unused_variables)]
            fn decode<__S>(&mut self, reader: &mut ::bfio::Reader<'_, __S>) -> ::bfio::Result<()>
            where
                __S: ::bfio::Source + ?Sized,
            {
                #(::bfio::Decode::decode(&mut self.#members, reader)?;)*
                ::core::result::Result::Ok(())
            }
        }
    };

    TokenStream::from(expanded)
}

/// Field accessors in declaration order: names for named fields, indices for
/// tuple structs, nothing for unit structs.
fn members(fields: &Fields) -> Vec<TokenStream2> {
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let member = match &field.ident {
                Some(ident) => Member::Named(ident.clone()),
                None => Member::Unnamed(Index::from(index)),
            };
            quote! { #member }
        })
        .collect()
}
