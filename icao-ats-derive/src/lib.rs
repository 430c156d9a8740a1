// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Derive macros for the ICAO ATS message catalogs.
//!
//! This crate allows to `derive` a `Catalog` implementation on the enums that
//! name error kinds, fields and subfields. Each variant carries an explicit
//! discriminant which becomes its stable code. Codes must be unique and are
//! never renumbered, since downstream systems may store them.
//!
//! # Example
//!
//! Deriving an implementation on an error catalog:
//!
//! ```ignore
//! #[derive(Catalog)]
//! #[repr(u16)]
//! pub enum ErrorId {
//!     MalformedMessage = 1,
//!     #[catalog(name = "EMPTY")]  // Use another symbolic name
//!     EmptyField = 2,
//! }
//! ```

use std::collections::HashSet;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Expr, ExprLit, Fields, Lit, Meta, Variant};

fn parse_variant_name(variant: &Variant) -> Option<String> {
    for attr in &variant.attrs {
        if !attr.path().is_ident("catalog") {
            continue;
        }

        if let Ok(Meta::NameValue(nv)) = attr.parse_args::<Meta>() {
            // Handle #[catalog(name = "...")]
            if nv.path.is_ident("name") {
                if let Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) = nv.value
                {
                    return Some(s.value());
                }
            }
        }
    }
    None
}

fn parse_variant_code(variant: &Variant) -> u16 {
    match &variant.discriminant {
        Some((
            _,
            Expr::Lit(ExprLit {
                lit: Lit::Int(int_lit),
                ..
            }),
        )) => int_lit
            .base10_parse::<u16>()
            .expect("catalog codes must fit into an u16"),
        _ => panic!(
            "catalog entry {} needs an explicit code (e.g. `{} = 1`)",
            variant.ident, variant.ident
        ),
    }
}

/// Derive macro for implementing the `Catalog` trait.
///
/// Generates the `Catalog` trait implementation and `Display` which prints
/// the symbolic name.
#[proc_macro_derive(Catalog, attributes(catalog))]
pub fn derive_catalog(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => panic!("Catalog derive only supports enums"),
    };

    let mut idents = Vec::new();
    let mut codes = Vec::new();
    let mut names = Vec::new();
    let mut seen = HashSet::new();

    for variant in variants {
        if !matches!(variant.fields, Fields::Unit) {
            panic!("Catalog derive only supports unit variants");
        }

        let code = parse_variant_code(variant);
        if !seen.insert(code) {
            panic!("catalog code {code} of {} is used twice", variant.ident);
        }

        let text = parse_variant_name(variant).unwrap_or_else(|| variant.ident.to_string());

        idents.push(&variant.ident);
        codes.push(code);
        names.push(text);
    }

    let expanded = quote! {
        impl crate::catalog::Catalog for #name {
            const ALL: &'static [Self] = &[#(Self::#idents),*];

            fn code(&self) -> u16 {
                match self {
                    #(Self::#idents => #codes),*
                }
            }

            fn name(&self) -> &'static str {
                match self {
                    #(Self::#idents => #names),*
                }
            }

            fn from_code(code: u16) -> Option<Self> {
                match code {
                    #(#codes => Some(Self::#idents),)*
                    _ => None,
                }
            }

            fn from_name(name: &str) -> Option<Self> {
                match name {
                    #(#names => Some(Self::#idents),)*
                    _ => None,
                }
            }
        }

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(crate::catalog::Catalog::name(self))
            }
        }
    };

    TokenStream::from(expanded)
}
