use convert_case::{Case, Casing};
use proc_macro2::{Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::{spanned::Spanned, Ident};

use crate::{
    dom,
    parse::{NodeBodyMacro, NodeStmt},
};

const KEYWORDS: &[&str] = &["as", "async", "for", "loop", "type"];

pub fn node_body(NodeBodyMacro { target, body }: NodeBodyMacro) -> TokenStream {
    let stmts = create_stmts(&target, body.stmts);

    let parent = body
        .parent
        .map(|parent| {
            quote! {
                ::std::option::Option::Some(#parent)
            }
        })
        .unwrap_or(quote! { ::std::option::Option::None });

    quote! {{
        #(#stmts)*

        #parent
    }}
}

fn create_stmts(target: &syn::Expr, stmts: Vec<NodeStmt>) -> Vec<TokenStream> {
    stmts
        .into_iter()
        .map(|stmt| match stmt {
            NodeStmt::Child(expr) => {
                let child = Ident::new("__child", Span::mixed_site());
                quote_spanned! {expr.span() => {
                    let #child = heading_nodes::IntoNode::into_node(#expr);
                    heading_nodes::Node::insert(#target, &#child, ::std::option::Option::None);
                }}
            }
            NodeStmt::Macro(mut expr) => {
                let tokens = expr.mac.tokens.clone();
                expr.mac.tokens = quote_spanned! {tokens.span() =>
                    #tokens ;* #target
                };

                quote_spanned! {expr.span() =>
                    #expr;
                }
            }
            NodeStmt::Fragment(brace, stmts) => {
                let fragment = Ident::new("__fragment", Span::mixed_site());
                let stmts = create_stmts(&syn::parse_quote!(&#fragment), stmts);

                quote_spanned! {brace.span.join() => {
                    let #fragment = heading_nodes::Node::fragment();

                    #(#stmts)*

                    heading_nodes::Node::insert(#target, &#fragment, ::std::option::Option::None);
                }}
            }
            NodeStmt::Text(expr) => {
                let text = Ident::new("__text", Span::mixed_site());
                quote_spanned! {expr.span() => {
                    let #text = heading_nodes::Node::text();
                    let value = ::std::string::ToString::to_string(&#expr);
                    heading_nodes::Node::set_text(&#text, &value);
                    heading_nodes::Node::insert(#target, &#text, ::std::option::Option::None);
                }}
            }
            NodeStmt::Attr { name, value } => {
                let attr = Ident::new("__attr", Span::mixed_site());
                quote_spanned! {value.span() => {
                    let #attr = {
                        #[allow(unused_imports)]
                        use heading_nodes::attributes::*;
                        ::std::string::ToString::to_string(&#name)
                    };
                    let value = ::std::string::ToString::to_string(&#value);
                    heading_nodes::Node::set_attr(#target, &#attr, &value);
                }}
            }
        })
        .collect()
}

pub fn tagged_macros(path: syn::Path) -> TokenStream {
    let macros: Vec<_> = dom::elements()
        .iter()
        .map(|elem| {
            let ident = Ident::new(elem, Span::call_site());
            let lit = syn::LitStr::new(elem, Span::call_site());

            quote! {
                #[doc = concat!("`<", #lit, ">`")]
                #[macro_export]
                macro_rules! #ident {
                    ($($body:tt)*) => {
                        #path!(#lit, $($body)*)
                    };
                }
            }
        })
        .collect();

    quote! { #(#macros)* }
}

pub fn attribute_consts() -> TokenStream {
    let consts: Vec<_> = dom::attributes()
        .iter()
        .filter(|attr| !KEYWORDS.contains(&attr.as_str()))
        .map(|attr| {
            let ident = Ident::new(&attr.to_case(Case::Snake), Span::call_site());

            quote! {
                #[allow(non_upper_case_globals)]
                pub const #ident: &str = #attr;
            }
        })
        .collect();

    quote! { #(#consts)* }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_names_are_snake_case() {
        let tokens = attribute_consts().to_string();
        assert!(tokens.contains("aria_label"));
        assert!(tokens.contains("\"aria-label\""));
        assert!(!tokens.contains("const for"));
    }

    #[test]
    fn tagged_macro_per_element() {
        let path: syn::Path = syn::parse_quote!(heading_nodes::element);
        let tokens = tagged_macros(path).to_string();
        assert!(tokens.contains("macro_rules ! h1"));
        assert!(tokens.contains("heading_nodes :: element !"));
    }

    #[test]
    fn parent_expression_is_returned() {
        let body: NodeBodyMacro = syn::parse_quote!(&node, "text" ;* &parent);
        let tokens = node_body(body).to_string();
        assert!(tokens.contains("Some (& parent)"));
        assert!(tokens.contains("IntoNode :: into_node"));
    }
}
