//! Emit a Rust kind enumeration from a kind table.
//!
//! The generated file contains, in order:
//!
//! - the enumeration, `#[repr(i32)]` with an explicit discriminant per member,
//! - the lookup error (value plus inclusive bounds) with `Display` and `Error`,
//! - `FIRST_CODE`/`LAST_CODE`/`ALL`, `code`, `from_code` and `as_str`,
//! - `TryFrom<i32>`, `From<Kind> for i32` and `Display`.
//!
//! ## Notes
//!
//! - `from_code` indexes the constant `ALL` table by `value - FIRST_CODE`. The table is built at compile time, so
//!   lookups need no runtime initialization or synchronization.
//! - Discriminants are pinned explicitly; nothing relies on Rust's implicit numbering.
//! - An empty table emits an uninhabited enum without `#[repr(i32)]` (not allowed on zero-variant enums) and a
//!   `from_code` that always fails.
//! - Generated paths are fully qualified (`::std::...`) so the output can be `include!`d anywhere.

use proc_macro2::{Ident, Literal, TokenStream};
use quote::{format_ident, quote};

use kindgen_core::KindTable;

use super::{EmitConfig, EmitError};
use crate::version::KINDGEN_VERSION;

/// Renders kind tables into Rust source.
#[derive(Debug, Clone, Default)]
pub struct EnumEmitter {
    config: EmitConfig,
}

impl EnumEmitter {
    pub fn new(config: EmitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmitConfig {
        &self.config
    }

    /// Emit the complete, formatted source file for `table`.
    ///
    /// `source_label` names the kinds header in the leading comment.
    #[tracing::instrument(skip_all, fields(kinds = table.len()))]
    pub fn emit(&self, table: &KindTable, source_label: &str) -> Result<String, EmitError> {
        let tokens = self.emit_tokens(table)?;
        let syntax_tree: syn::File = syn::parse2(tokens).map_err(|e| EmitError::SynParse(e.to_string()))?;
        let formatted = prettyplease::unparse(&syntax_tree);

        let header = format!(
            "// Generated by kindgen v{} from {}. Do not edit.\n\n",
            KINDGEN_VERSION,
            comment_safe(source_label)
        );
        tracing::debug!(bytes = formatted.len(), "formatted kind enumeration");
        Ok(format!("{}{}", header, formatted))
    }

    /// Emit the items for `table` as an unformatted token stream.
    pub fn emit_tokens(&self, table: &KindTable) -> Result<TokenStream, EmitError> {
        self.config.validate()?;
        table.validate()?;

        let kind = format_ident!("{}", self.config.enum_name);
        let error = format_ident!("{}", self.config.error_name);

        let variants: Vec<Ident> = table.iter().map(|r| format_ident!("{}", r.name)).collect();
        let codes: Vec<TokenStream> = table.iter().map(|r| code_literal(r.code)).collect();
        let identifiers: Vec<&str> = table.iter().map(|r| r.identifier.as_str()).collect();
        let variant_docs: Vec<String> = table
            .iter()
            .map(|r| format!(" `{}` (code {}).", r.identifier, r.code))
            .collect();

        let count = Literal::usize_unsuffixed(table.len());
        let first_code = code_literal(table.start());
        let last_code = code_literal(table.last_code());

        let repr = if table.is_empty() {
            quote! {}
        } else {
            quote! { #[repr(i32)] }
        };

        let enum_doc = format!(
            " API kinds. Each member is pinned to the code every language binding uses for it; see [`{}::from_code`].",
            self.config.enum_name
        );
        let error_doc = format!(
            " Returned by [`{}::from_code`] for a value outside `FIRST_CODE..=LAST_CODE`.",
            self.config.enum_name
        );
        let range_message = format!(
            "{} value {{}} is outside the valid range [{{}},{{}}]",
            self.config.enum_name
        );
        let empty_message = format!(
            "{kind} value {{}} is invalid: the {kind} range is empty",
            kind = self.config.enum_name
        );

        let from_code_body = if table.is_empty() {
            quote! {
                Err(#error { value, low: Self::FIRST_CODE, high: Self::LAST_CODE })
            }
        } else {
            quote! {
                if value < Self::FIRST_CODE || value > Self::LAST_CODE {
                    return Err(#error { value, low: Self::FIRST_CODE, high: Self::LAST_CODE });
                }
                Ok(Self::ALL[(value - Self::FIRST_CODE) as usize])
            }
        };

        Ok(quote! {
            #[doc = #enum_doc]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
            #repr
            pub enum #kind {
                #(
                    #[doc = #variant_docs]
                    #variants = #codes,
                )*
            }

            #[doc = #error_doc]
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct #error {
                /// The code that was looked up.
                pub value: i32,
                /// Lowest valid code.
                pub low: i32,
                /// Highest valid code (`low - 1` when there are no kinds).
                pub high: i32,
            }

            impl ::std::fmt::Display for #error {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    if self.low > self.high {
                        write!(f, #empty_message, self.value)
                    } else {
                        write!(f, #range_message, self.value, self.low, self.high)
                    }
                }
            }

            impl ::std::error::Error for #error {}

            impl #kind {
                /// Code of the first member.
                pub const FIRST_CODE: i32 = #first_code;
                /// Code of the last member.
                pub const LAST_CODE: i32 = #last_code;
                /// Every member, in code order. `ALL[i]` has code `FIRST_CODE + i`.
                pub const ALL: [Self; #count] = [#(Self::#variants),*];

                /// The code bound to this kind.
                pub const fn code(self) -> i32 {
                    match self {
                        #(Self::#variants => #codes,)*
                    }
                }

                /// The kind bound to `value`, or an error carrying the valid bounds.
                pub const fn from_code(value: i32) -> ::std::result::Result<Self, #error> {
                    #from_code_body
                }

                /// The identifier this kind is declared with in the API header.
                pub const fn as_str(self) -> &'static str {
                    match self {
                        #(Self::#variants => #identifiers,)*
                    }
                }
            }

            impl ::std::convert::TryFrom<i32> for #kind {
                type Error = #error;

                fn try_from(value: i32) -> ::std::result::Result<Self, Self::Error> {
                    Self::from_code(value)
                }
            }

            impl ::std::convert::From<#kind> for i32 {
                fn from(kind: #kind) -> i32 {
                    kind.code()
                }
            }

            impl ::std::fmt::Display for #kind {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        })
    }
}

/// `label` with control characters escaped, so it cannot end the header line comment.
fn comment_safe(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        if c.is_control() {
            escaped.extend(c.escape_default());
        } else {
            escaped.push(c);
        }
    }
    escaped
}

/// Integer literal tokens for a code. Negative codes become `-` followed by the magnitude.
fn code_literal(code: i32) -> TokenStream {
    let magnitude = Literal::u32_unsuffixed(code.unsigned_abs());
    if code < 0 {
        quote! { -#magnitude }
    } else {
        quote! { #magnitude }
    }
}

// ============================================================================
// Tests
// ============================================================================
