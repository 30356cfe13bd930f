use syn::parse_macro_input;

mod dom;
mod generate;
mod parse;

use parse::NodeBodyMacro;

/// Expands a node body (`child; +text; #attr => value; { fragment }`) into
/// insertions on the target node, yielding the optional `;* parent`.
#[proc_macro]
pub fn node_body(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let node_body = parse_macro_input!(input as NodeBodyMacro);

    generate::node_body(node_body).into()
}

#[proc_macro]
pub fn create_tagged_macros(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let path = parse_macro_input!(input as syn::Path);

    generate::tagged_macros(path).into()
}

#[proc_macro]
pub fn create_attribute_consts(_input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    generate::attribute_consts().into()
}
