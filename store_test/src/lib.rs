use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, FnArg, ItemFn, Pat, Signature, Type};

#[proc_macro_attribute]
/// Provides a fresh [`crate::store::Store`] to the function and instruments it as a `#[test]`.
///
/// The store points at `voting_data.json` inside a temporary directory that is created
/// before the test runs and removed when it finishes, WHETHER OR NOT the test passes,
/// fails or otherwise panics. Test logging is initialised for the `polling_station` target.
///
/// Note: this attribute requires that the `tempfile` and `log4rs_test_utils` crates are
/// available as dev-dependencies.
pub fn store_test(_: TokenStream, input: TokenStream) -> TokenStream {
    let mut item_fn = parse_macro_input!(input as ItemFn);
    let sig = item_fn.sig.clone();
    let name = sig.ident.clone();
    if let Err(err) = check_sig(sig) {
        return err.into_compile_error().into();
    }
    let new_name = format_ident!("{}_test", name);
    item_fn.sig.ident = new_name.clone();
    quote! {
        #[test]
        fn #name() {
            log4rs_test_utils::test_logging::init_logging_once_for(
                ["polling_station"],
                None,
                None,
            );

            /// The test itself.
            #item_fn

            // Dropping the directory deletes it, including during unwinding.
            let dir = tempfile::tempdir().unwrap();
            let store = crate::store::Store::new(dir.path().join("voting_data.json"));

            #new_name(store);
        }
    }
    .into()
}

fn check_sig(sig: Signature) -> Result<(), syn::Error> {
    let inputs = sig.inputs;
    if inputs.len() != 1 {
        return Err(syn::Error::new(
            inputs.span(),
            "The tagged function must accept exactly one argument, a `Store`",
        ));
    }

    for input in &inputs {
        if let FnArg::Typed(pat_type) = input {
            if let Pat::Ident(_) = &*pat_type.pat {
                if let Type::Path(type_path) = &*pat_type.ty {
                    let ty_ident = type_path
                        .path
                        .segments
                        .last()
                        .map(|segment| segment.ident.to_string())
                        .unwrap_or_default();
                    if ty_ident != "Store" {
                        return Err(syn::Error::new(
                            type_path.span(),
                            format!("Expected `Store`, got `{ty_ident}` instead"),
                        ));
                    }
                } else {
                    return Err(syn::Error::new(
                        pat_type.ty.span(),
                        "Function argument type must be a type path",
                    ));
                }
            } else {
                return Err(syn::Error::new(
                    pat_type.pat.span(),
                    "Function argument pattern must be an identifier",
                ));
            }
        } else {
            return Err(syn::Error::new(
                input.span(),
                "Function argument must not be a receiver type",
            ));
        }
    }

    Ok(())
}
