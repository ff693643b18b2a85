use crate::component::expand_component;
use proc_macro::TokenStream;
use syn::spanned::Spanned;
use syn::{parse_macro_input, Error, ItemImpl};

mod attributes;
mod component;

/// Implements `Component` for the type of an inherent `impl` block, using every associated
/// function returning `Self` or `Result<Self, E>` as a constructor.
#[proc_macro_attribute]
pub fn component(args: TokenStream, input: TokenStream) -> TokenStream {
    let args = proc_macro2::TokenStream::from(args);
    if !args.is_empty() {
        return Error::new(args.span(), "Component impl blocks don't accept arguments!")
            .into_compile_error()
            .into();
    }

    let mut item = parse_macro_input!(input as ItemImpl);
    expand_component(&mut item)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}
