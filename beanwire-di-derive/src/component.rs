use crate::attributes::{ConstructorAttributes, COMPONENT};
use itertools::Itertools;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::spanned::Spanned;
use syn::{
    Error, FnArg, GenericArgument, ImplItem, ImplItemFn, ItemImpl, PathArguments, Result,
    ReturnType, Signature, Type, TypePath,
};

enum ReturnKind {
    Instance,
    Result,
}

fn is_self_type(ty: &Type, self_ty: &Type) -> bool {
    if let Type::Path(TypePath { qself: None, path }) = ty {
        if path.is_ident("Self") {
            return true;
        }
    }

    quote!(#ty).to_string() == quote!(#self_ty).to_string()
}

fn return_kind(output: &ReturnType, self_ty: &Type) -> Option<ReturnKind> {
    let ReturnType::Type(_, ty) = output else {
        return None;
    };

    if is_self_type(ty, self_ty) {
        return Some(ReturnKind::Instance);
    }

    let Type::Path(TypePath { qself: None, path }) = ty.as_ref() else {
        return None;
    };

    let segment = path.segments.last()?;
    if segment.ident != "Result" {
        return None;
    }

    if let PathArguments::AngleBracketed(arguments) = &segment.arguments {
        if let Some(GenericArgument::Type(ty)) = arguments.args.first() {
            if is_self_type(ty, self_ty) {
                return Some(ReturnKind::Result);
            }
        }
    }

    None
}

fn is_constructor_candidate(signature: &Signature) -> bool {
    signature.receiver().is_none()
        && signature.generics.params.is_empty()
        && signature.asyncness.is_none()
        && signature.unsafety.is_none()
}

fn extract_constructor_attributes(function: &mut ImplItemFn) -> Result<ConstructorAttributes> {
    let attributes = function
        .attrs
        .iter()
        .filter(|attribute| attribute.path().is_ident(COMPONENT))
        .map(ConstructorAttributes::try_from)
        .fold_ok(ConstructorAttributes::default(), |result, attributes| {
            ConstructorAttributes {
                ignore: result.ignore || attributes.ignore,
            }
        })?;

    // helper attributes are not valid outside of this macro
    function
        .attrs
        .retain(|attribute| !attribute.path().is_ident(COMPONENT));

    Ok(attributes)
}

fn generate_constructor(
    function: &mut ImplItemFn,
    self_ty: &Type,
) -> Result<Option<TokenStream>> {
    let attributes = extract_constructor_attributes(function)?;
    if attributes.ignore || !is_constructor_candidate(&function.sig) {
        return Ok(None);
    }

    let Some(kind) = return_kind(&function.sig.output, self_ty) else {
        return Ok(None);
    };

    let types: Vec<_> = function
        .sig
        .inputs
        .iter()
        .map(|input| match input {
            FnArg::Typed(argument) => Ok(argument.ty.as_ref()),
            FnArg::Receiver(receiver) => Err(Error::new(
                receiver.span(),
                "Constructors cannot take self!",
            )),
        })
        .try_collect()?;

    let arguments: Vec<_> = (0..types.len())
        .map(|index| format_ident!("argument_{}", index))
        .collect();

    let ident = &function.sig.ident;
    let call = quote!(Self::#ident(#(#arguments),*));
    let body = match kind {
        ReturnKind::Instance => quote!(Ok(#call)),
        ReturnKind::Result => {
            quote!(#call.map_err(::beanwire_di::instance_provider::convert_error))
        }
    };

    Ok(Some(match types.as_slice() {
        [] => quote! {
            ::beanwire_di::component::Constructor::no_args(|| #body)
        },
        [ty] => quote! {
            ::beanwire_di::component::Constructor::injected(|argument_0: #ty| #body)
        },
        types => quote! {
            ::beanwire_di::component::Constructor::new(
                vec![#(::beanwire_di::component::ParameterType::of::<#types>()),*],
                |arguments| {
                    let mut arguments = arguments.into_iter();
                    #(let #arguments = ::beanwire_di::component::take_argument::<#types>(&mut arguments)?;)*
                    #body
                },
            )
        },
    }))
}

pub fn expand_component(item: &mut ItemImpl) -> Result<TokenStream> {
    if let Some((_, path, _)) = &item.trait_ {
        return Err(Error::new(
            path.span(),
            "Only inherent impl blocks can be marked as a component!",
        ));
    }

    let self_ty = item.self_ty.as_ref().clone();
    let constructors: Vec<TokenStream> = item
        .items
        .iter_mut()
        .filter_map(|item| match item {
            ImplItem::Fn(function) => Some(function),
            _ => None,
        })
        .map(|function| generate_constructor(function, &self_ty))
        .flatten_ok()
        .try_collect()?;

    if constructors.is_empty() {
        return Err(Error::new(
            self_ty.span(),
            "No constructors found for component!",
        ));
    }

    let (impl_generics, _, where_clause) = item.generics.split_for_impl();

    Ok(quote! {
        #item

        #[automatically_derived]
        impl #impl_generics ::beanwire_di::component::Component for #self_ty #where_clause {
            fn constructors() -> Vec<::beanwire_di::component::Constructor<Self>> {
                vec![#(#constructors),*]
            }
        }
    })
}
