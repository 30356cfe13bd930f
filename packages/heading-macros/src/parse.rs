use syn::{
    braced,
    parse::{Parse, ParseStream},
    token, Error, Result, Token,
};

/// Macros that expand to plain values rather than nodes.
const VALUE_MACROS: &[&str] = &[
    "concat",
    "env",
    "file",
    "format",
    "include_str",
    "line",
    "module_path",
    "stringify",
    "vec",
];

pub struct NodeBodyMacro {
    pub target: syn::Expr,
    pub body: NodeBody,
}

impl Parse for NodeBodyMacro {
    fn parse(input: ParseStream) -> Result<Self> {
        let target = input.parse()?;
        input.parse::<Token![,]>()?;
        let body = input.parse()?;
        Ok(Self { target, body })
    }
}

pub struct NodeBody {
    pub stmts: Vec<NodeStmt>,
    pub parent: Option<syn::Expr>,
}

impl Parse for NodeBody {
    fn parse(input: ParseStream) -> Result<Self> {
        let stmts = parse_stmts(input)?;

        let parent = if input.peek(Token![*]) {
            input.parse::<Token![*]>()?;
            Some(input.parse()?)
        } else {
            None
        };

        if !input.is_empty() {
            return Err(input.error("unexpected tokens after parent node"));
        }

        Ok(Self { stmts, parent })
    }
}

fn parse_stmts(input: ParseStream) -> Result<Vec<NodeStmt>> {
    let mut stmts = vec![];

    while !input.is_empty() && !input.peek(Token![*]) {
        if input.peek(Token![;]) {
            input.parse::<Token![;]>()?;
            continue;
        }

        stmts.push(input.parse()?);

        if !input.is_empty() && !input.peek(Token![;]) {
            return Err(input.error("expected `;`"));
        }
    }

    Ok(stmts)
}

pub enum NodeStmt {
    Macro(syn::ExprMacro),
    Child(syn::Expr),
    Fragment(token::Brace, Vec<NodeStmt>),
    Text(syn::Expr),
    Attr { name: syn::Expr, value: syn::Expr },
}

impl Parse for NodeStmt {
    fn parse(input: ParseStream) -> Result<Self> {
        let stmt = if input.peek(token::Brace) {
            let body;
            let brace = braced!(body in input);

            let stmts = parse_stmts(&body)?;
            if !body.is_empty() {
                return Err(body.error("a fragment cannot name a parent node"));
            }

            NodeStmt::Fragment(brace, stmts)
        } else if input.peek(Token![+]) {
            input.parse::<Token![+]>()?;
            NodeStmt::Text(input.parse()?)
        } else if input.peek(Token![#]) {
            input.parse::<Token![#]>()?;
            let name = input.parse()?;
            input.parse::<Token![=>]>()?;
            let value = input.parse()?;

            NodeStmt::Attr { name, value }
        } else {
            let expr: syn::Expr = input
                .parse()
                .map_err(|err| Error::new(err.span(), "expected `+`, `#`, `{`, or an expression"))?;

            match expr {
                syn::Expr::Macro(expr) if !is_value_macro(&expr) => NodeStmt::Macro(expr),
                expr => NodeStmt::Child(expr),
            }
        };

        Ok(stmt)
    }
}

fn is_value_macro(expr: &syn::ExprMacro) -> bool {
    expr.mac
        .path
        .segments
        .last()
        .is_some_and(|segment| VALUE_MACROS.contains(&segment.ident.to_string().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_body(src: &str) -> NodeBody {
        syn::parse_str(src).expect("body failed to parse")
    }

    #[test]
    fn single_child() {
        let body = parse_body("content");
        assert_eq!(body.stmts.len(), 1);
        assert!(matches!(body.stmts[0], NodeStmt::Child(_)));
        assert!(body.parent.is_none());
    }

    #[test]
    fn mixed_statements() {
        let body = parse_body(r#"#id => "root"; +count; "literal"; span!("x"); { a; b }"#);
        let kinds: Vec<_> = body
            .stmts
            .iter()
            .map(|stmt| match stmt {
                NodeStmt::Macro(_) => "macro",
                NodeStmt::Child(_) => "child",
                NodeStmt::Fragment(_, _) => "fragment",
                NodeStmt::Text(_) => "text",
                NodeStmt::Attr { .. } => "attr",
            })
            .collect();

        assert_eq!(kinds, ["attr", "text", "child", "macro", "fragment"]);
    }

    #[test]
    fn value_macros_are_children() {
        let body = parse_body(r#"format!("{}", 1); vec!["a"]; std::format!("b")"#);
        assert!(body
            .stmts
            .iter()
            .all(|stmt| matches!(stmt, NodeStmt::Child(_))));
    }

    #[test]
    fn trailing_parent() {
        let body = parse_body("child ;* &parent");
        assert_eq!(body.stmts.len(), 1);
        assert!(body.parent.is_some());

        let body = parse_body(";* &parent");
        assert!(body.stmts.is_empty());
        assert!(body.parent.is_some());
    }

    #[test]
    fn missing_separator() {
        assert!(syn::parse_str::<NodeBody>("a b").is_err());
    }

    #[test]
    fn parent_inside_fragment() {
        assert!(syn::parse_str::<NodeBody>("{ a ;* &p }").is_err());
    }
}
