use darling::FromDeriveInput;
use derive_record::derive_record_impl;
use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

use crate::derive_record::Input;

mod derive_record;

#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(tokens: TokenStream) -> TokenStream {
    let input = parse_macro_input!(tokens as DeriveInput);
    let input = match Input::from_derive_input(&input) {
        Ok(v) => v,
        Err(e) => return e.write_errors().into(),
    };

    match derive_record_impl(input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(e) => TokenStream::from(e.write_errors()),
    }
}
