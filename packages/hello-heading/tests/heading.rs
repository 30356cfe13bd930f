use ::heading::{
    prelude::*,
    render::{render, NodeRef},
};
use hello_heading::components::heading;
use regex::Regex;

const HELLO_YOUTUBE: &str = "<h1>\n  Hello YouTube!\n</h1>";

#[test]
fn renders_hello_youtube() {
    let screen = render(|| heading("Hello YouTube!"));

    let name = Regex::new("Hello YouTube").unwrap();
    let found = screen
        .get_by_role(Role::Heading, &ByRole::new().name(name))
        .unwrap();

    assert!(screen.is_in_document(&found));
    assert_eq!(query::heading_level(&found), Some(1));
    assert_eq!(query::accessible_name(&found), "Hello YouTube!");
}

#[test]
fn matches_snapshot() {
    let node: NodeRef = heading("Hello YouTube!");
    assert_eq!(node.to_string(), HELLO_YOUTUBE);

    let screen = render(|| heading("Hello YouTube!"));
    assert_eq!(
        screen.to_string(),
        format!("<div>\n{}\n</div>", indent(HELLO_YOUTUBE))
    );
}

#[test]
fn exactly_one_heading() {
    let screen = render(|| heading("Hello world!"));

    let headings = screen.query_all_by_role(Role::Heading, &ByRole::new());
    assert_eq!(headings.len(), 1);
    assert_eq!(headings[0].text_content(), "Hello world!");
}

#[test]
fn name_matches_content() {
    for content in ["Hello world!", "Hello YouTube!", "42"] {
        let screen = render(|| heading(content));
        assert!(screen
            .get_by_role(Role::Heading, &ByRole::new().name(content).level(1))
            .is_ok());
    }
}

#[test]
fn rendering_is_idempotent() {
    let first = render(|| heading("Hello world!"));
    let second = render(|| heading("Hello world!"));

    assert_eq!(first.to_string(), second.to_string());
    assert!(first.container().same_structure(second.container()));
}

fn indent(html: &str) -> String {
    html.lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
