use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use crate::support::{attrs, diag, utils};

const FIELD_KEYS: &[&str] = &[
    "validate", "rules", "label", "labels", "message", "nested", "each", "skip",
];
const CONTAINER_KEYS: &[&str] = &["check"];

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(input) {
        Ok(ts) => ts.into(),
        Err(e) => diag::to_compile_error(e),
    }
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let fields = utils::require_named_fields(&input)?;

    let mut statements = Vec::new();
    for field in &fields.named {
        let Some(args) = attrs::parse_attrs(&field.attrs, "validate")? else {
            continue;
        };
        args.ensure_known(FIELD_KEYS)?;
        if args.has_flag("skip") {
            continue;
        }
        // Named fields always carry an ident.
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        statements.push(expand_field(ident, &args)?);
    }

    let checks = match attrs::parse_attrs(&input.attrs, "validate")? {
        Some(args) => {
            args.ensure_known(CONTAINER_KEYS)?;
            args.get_paths("check")?
        }
        None => Vec::new(),
    };
    let checks = checks.iter().map(|check| {
        quote! {
            record.check(|_| #check(self));
        }
    });

    Ok(quote! {
        impl #impl_generics ::ruleval_validator::record::Validate for #struct_name #ty_generics #where_clause {
            fn describe(&self, record: &mut ::ruleval_validator::record::RecordBuilder) {
                #(#statements)*
                #(#checks)*
            }
        }
    })
}

fn expand_field(ident: &syn::Ident, args: &attrs::AttrArgs) -> syn::Result<TokenStream2> {
    let name = ident.to_string();
    let rules = args.get_string("rules")?;
    let nested = args.has_flag("nested");
    let each = args.has_flag("each");

    if nested && each {
        return Err(diag::error_spanned(
            ident,
            "`nested` and `each` cannot be combined on one field",
        ));
    }
    if nested {
        if rules.is_some() {
            return Err(diag::error_spanned(
                ident,
                "a `nested` field cannot carry `rules`; put them on the inner fields",
            ));
        }
        return Ok(quote! {
            record.nested_record(#name, &self.#ident);
        });
    }

    let presentation = presentation(args)?;

    if each {
        let placeholder = rules.map(|rules| {
            quote! {
                record.field(
                    ::ruleval_validator::record::Field::with_kind(
                        #name,
                        ::ruleval_validator::value::Value::Seq(
                            ::core::iter::IntoIterator::into_iter(&self.#ident)
                                .map(|_| ::ruleval_validator::value::Value::Nil)
                                .collect(),
                        ),
                        ::ruleval_validator::value::ValueKind::Seq,
                    )
                    .rules(#rules)
                    #presentation
                );
            }
        });
        return Ok(quote! {
            #placeholder
            record.each(#name, &self.#ident);
        });
    }

    let rules = rules.unwrap_or_default();
    Ok(quote! {
        record.field(
            ::ruleval_validator::record::Field::of(#name, &self.#ident)
                .rules(#rules)
                #presentation
        );
    })
}

/// Label, localized labels and override message as builder calls.
fn presentation(args: &attrs::AttrArgs) -> syn::Result<TokenStream2> {
    let mut calls = TokenStream2::new();

    if let Some(label) = args.get_string("label")? {
        calls.extend(quote!(.label(#label)));
    }
    if let Some(labels) = args.get_nested("labels") {
        for (locale, label) in labels.string_pairs()? {
            calls.extend(quote!(.label_in(#locale, #label)));
        }
    }
    if let Some(message) = args.get_string("message")? {
        calls.extend(quote!(.message(#message)));
    }

    Ok(calls)
}
