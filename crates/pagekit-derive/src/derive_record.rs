use darling::{FromDeriveInput, FromField};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Generics, Ident};

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(record), supports(struct_named))]
pub struct Input {
    ident: Ident,
    generics: Generics,
    data: darling::ast::Data<(), InputField>,
}

#[derive(Clone, Debug, FromField)]
#[darling(attributes(record))]
pub struct InputField {
    ident: Option<Ident>,

    /// 自定义匹配名，缺省时使用字段名
    #[darling(default)]
    rename: Option<String>,

    /// 对字段访问不可见
    #[darling(default)]
    skip: bool,

    /// 只读字段，field_mut 返回 ReadOnly
    #[darling(default)]
    read_only: bool,
}

pub fn derive_record_impl(input: Input) -> Result<TokenStream2, darling::Error> {
    let name = input.ident;
    let generics = input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let data = input.data.take_struct().expect("only named structs are supported");

    let mut names = Vec::new();
    let mut field_arms = Vec::new();
    let mut field_mut_arms = Vec::new();
    for field in data.fields.iter().filter(|field| !field.skip) {
        let ident = field.ident.clone().expect("darling guarantees named fields");
        let field_name = field.rename.clone().unwrap_or_else(|| ident.to_string());

        field_arms.push(quote! {
            #field_name => ::core::option::Option::Some(pagekit::FieldValue::as_field(&self.#ident)),
        });
        if field.read_only {
            field_mut_arms.push(quote! {
                #field_name => ::core::option::Option::Some(pagekit::FieldMut::ReadOnly),
            });
        } else {
            field_mut_arms.push(quote! {
                #field_name => ::core::option::Option::Some(pagekit::FieldValue::as_field_mut(&mut self.#ident)),
            });
        }
        names.push(field_name);
    }

    Ok(quote! {
        impl #impl_generics pagekit::Record for #name #ty_generics #where_clause {
            fn field_names(&self) -> &'static [&'static str] {
                &[#( #names ),*]
            }

            fn field(&self, name: &str) -> ::core::option::Option<pagekit::FieldRef<'_>> {
                match name {
                    #( #field_arms )*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> ::core::option::Option<pagekit::FieldMut<'_>> {
                match name {
                    #( #field_mut_arms )*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl #impl_generics pagekit::FieldValue for #name #ty_generics #where_clause {
            fn as_field(&self) -> pagekit::FieldRef<'_> {
                pagekit::FieldRef::Record(self)
            }

            fn as_field_mut(&mut self) -> pagekit::FieldMut<'_> {
                pagekit::FieldMut::Record(self)
            }
        }
    })
}
