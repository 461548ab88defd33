//! Parsing, validation and expansion for `strong_typedef!`.
//!
//! Everything here works on `proc_macro2` tokens so it can be exercised by
//! unit tests without a compiler session.

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{
    Attribute, Ident, Token, Type, Visibility,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

/// A single `[attrs] [vis] Name: Type` entry.
pub struct Declaration {
    attrs: Vec<Attribute>,
    vis: Visibility,
    name: Ident,
    ty: Type,
}

impl Parse for Declaration {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis = input.parse()?;
        let name = input.parse()?;

        let lookahead = input.lookahead1();
        if lookahead.peek(Token![:]) {
            input.parse::<Token![:]>()?;
        } else if lookahead.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        } else {
            return Err(lookahead.error());
        }

        let ty = input.parse()?;

        Ok(Declaration {
            attrs,
            vis,
            name,
            ty,
        })
    }
}

impl Declaration {
    fn tag(&self) -> Ident {
        format_ident!("{}Tag", self.name)
    }

    fn expand(&self) -> TokenStream {
        let Declaration {
            attrs,
            vis,
            name,
            ty,
        } = self;
        let tag = self.tag();
        let tag_doc = format!(" Marker tag distinguishing [`{name}`] from other strong typedefs.");

        // the tag follows the alias in and out of compilation
        let cfgs = attrs.iter().filter(|attr| attr.path().is_ident("cfg"));

        quote! {
            #(#cfgs)*
            #[doc = #tag_doc]
            #vis enum #tag {}

            #(#attrs)*
            #vis type #name = ::strong_typedef::StrongTypedef<#tag, #ty>;
        }
    }
}

/// The whole macro input: declarations separated by `;`.
pub struct Declarations(Vec<Declaration>);

impl Parse for Declarations {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let parsed = Punctuated::<Declaration, Token![;]>::parse_terminated(input)?;
        Ok(Declarations(parsed.into_iter().collect()))
    }
}

impl Declarations {
    pub fn validate(&self) -> syn::Result<()> {
        if self.0.is_empty() {
            return Err(syn::Error::new(
                Span::call_site(),
                "expected at least one strong typedef declaration",
            ));
        }

        for decl in &self.0 {
            if let Some(attr) = decl.attrs.iter().find(|a| a.path().is_ident("derive")) {
                return Err(syn::Error::new_spanned(
                    attr,
                    "strong typedefs cannot derive traits; capabilities follow the payload type",
                ));
            }
        }

        Ok(())
    }

    pub fn expand(&self) -> TokenStream {
        let items = self.0.iter().map(Declaration::expand);
        quote! { #(#items)* }
    }
}
