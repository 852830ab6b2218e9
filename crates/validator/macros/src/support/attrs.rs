use syn::{
    Attribute, Ident, Lit, Meta, Path, Result, Token,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

use crate::support::diag;

/// Parsed `#[validate(...)]` arguments.
#[derive(Debug, Clone, Default)]
pub struct AttrArgs {
    pub items: Vec<AttrItem>,
}

/// A single attribute item.
#[derive(Debug, Clone)]
pub enum AttrItem {
    /// A flag like `nested` or `skip`
    Flag(Ident),
    /// Key-value pair like `rules = "required"` or `check = path::to::fn`
    KeyValue { key: Ident, value: AttrValue },
    /// Nested arguments like `labels(zh = "评分")`
    Nested { key: Ident, args: AttrArgs },
}

/// Right-hand side of a key-value pair.
#[derive(Debug, Clone)]
pub enum AttrValue {
    Lit(Lit),
    Path(Path),
}

impl AttrItem {
    pub fn key(&self) -> &Ident {
        match self {
            Self::Flag(key) | Self::KeyValue { key, .. } | Self::Nested { key, .. } => key,
        }
    }
}

impl AttrArgs {
    /// Find a key-value pair by key name.
    pub fn get_value(&self, key: &str) -> Option<&AttrValue> {
        self.items.iter().find_map(|item| match item {
            AttrItem::KeyValue { key: k, value } if k == key => Some(value),
            _ => None,
        })
    }

    /// Get a string value by key; a non-string value is an error.
    pub fn get_string(&self, key: &str) -> Result<Option<String>> {
        match self.get_value(key) {
            None => Ok(None),
            Some(AttrValue::Lit(Lit::Str(s))) => Ok(Some(s.value())),
            Some(AttrValue::Lit(other)) => Err(diag::error_spanned(
                other,
                format!("`{key}` expects a string literal"),
            )),
            Some(AttrValue::Path(path)) => Err(diag::error_spanned(
                path,
                format!("`{key}` expects a string literal"),
            )),
        }
    }

    /// Every path given under a repeatable key, in attribute order.
    pub fn get_paths(&self, key: &str) -> Result<Vec<Path>> {
        self.items
            .iter()
            .filter_map(|item| match item {
                AttrItem::KeyValue { key: k, value } if k == key => Some(value),
                _ => None,
            })
            .map(|value| match value {
                AttrValue::Path(path) => Ok(path.clone()),
                AttrValue::Lit(Lit::Str(s)) => s
                    .parse::<Path>()
                    .map_err(|e| diag::error_spanned(s, format!("invalid path for `{key}`: {e}"))),
                AttrValue::Lit(other) => Err(diag::error_spanned(
                    other,
                    format!("`{key}` expects a path"),
                )),
            })
            .collect()
    }

    /// Get nested arguments by key.
    pub fn get_nested(&self, key: &str) -> Option<&AttrArgs> {
        self.items.iter().find_map(|item| match item {
            AttrItem::Nested { key: k, args } if k == key => Some(args),
            _ => None,
        })
    }

    /// All string pairs of a nested list like `labels(zh = "..", en = "..")`.
    pub fn string_pairs(&self) -> Result<Vec<(String, String)>> {
        self.items
            .iter()
            .map(|item| match item {
                AttrItem::KeyValue {
                    key,
                    value: AttrValue::Lit(Lit::Str(s)),
                } => Ok((key.to_string(), s.value())),
                other => Err(diag::error_spanned(
                    other.key(),
                    "expected `locale = \"text\"`",
                )),
            })
            .collect()
    }

    /// Check if a flag is present.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.items
            .iter()
            .any(|item| matches!(item, AttrItem::Flag(f) if f == flag))
    }

    /// Reject keys outside `known`.
    pub fn ensure_known(&self, known: &[&str]) -> Result<()> {
        for item in &self.items {
            let key = item.key();
            if !known.iter().any(|k| key == k) {
                return Err(diag::error_spanned(
                    key,
                    format!("unknown validate attribute `{key}`; expected one of: {}", known.join(", ")),
                ));
            }
        }
        Ok(())
    }
}

/// Parse attribute like `#[validate(...)]` (the whole Attribute, not only args).
pub fn parse_attr(attr: &Attribute, expected: &str) -> Result<Option<AttrArgs>> {
    if !attr.path().is_ident(expected) {
        return Ok(None);
    }

    match &attr.meta {
        Meta::Path(path) => Ok(Some(AttrArgs {
            items: vec![AttrItem::Flag(Ident::new(expected, path_span(path)))],
        })),
        Meta::List(list) => {
            let args = syn::parse2::<AttrArgsParser>(list.tokens.clone())?;
            Ok(Some(args.0))
        }
        Meta::NameValue(nv) => Err(diag::error_spanned(
            nv,
            format!("#[{expected}] must be #[{expected}(...)] or #[{expected}] (not name-value)"),
        )),
    }
}

/// Parse all attributes of a given type and merge them.
///
/// Returns `None` when no such attribute is present.
pub fn parse_attrs(attrs: &[Attribute], name: &str) -> Result<Option<AttrArgs>> {
    let mut result: Option<AttrArgs> = None;

    for attr in attrs {
        if let Some(args) = parse_attr(attr, name)? {
            result.get_or_insert_with(AttrArgs::default).items.extend(args.items);
        }
    }

    Ok(result)
}

fn path_span(path: &Path) -> proc_macro2::Span {
    path.segments
        .last()
        .map_or_else(proc_macro2::Span::call_site, |s| s.ident.span())
}

struct AttrArgsParser(AttrArgs);

impl Parse for AttrArgsParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let items = if input.is_empty() {
            vec![]
        } else {
            Punctuated::<AttrItemParser, Token![,]>::parse_terminated(input)?
                .into_iter()
                .map(|x| x.0)
                .collect()
        };
        Ok(Self(AttrArgs { items }))
    }
}

struct AttrItemParser(AttrItem);

impl Parse for AttrItemParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: Ident = input.parse()?;

        if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            let value = if input.peek(Lit) {
                AttrValue::Lit(input.parse()?)
            } else {
                AttrValue::Path(input.parse()?)
            };
            return Ok(Self(AttrItem::KeyValue { key, value }));
        }

        if input.peek(syn::token::Paren) {
            let content;
            syn::parenthesized!(content in input);
            let args = content.parse::<AttrArgsParser>()?.0;
            return Ok(Self(AttrItem::Nested { key, args }));
        }

        Ok(Self(AttrItem::Flag(key)))
    }
}
