//! Role-based lookups over a node tree, in the manner of DOM testing tools:
//! elements are found by their ARIA role and accessible name rather than by
//! tag or structure.

use std::fmt;

use regex::Regex;
use thiserror::Error;

use crate::{Node, NodeType};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    Article,
    Banner,
    ContentInfo,
    Emphasis,
    Generic,
    Heading,
    List,
    ListItem,
    Main,
    Navigation,
    Paragraph,
    Strong,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Banner => "banner",
            Self::ContentInfo => "contentinfo",
            Self::Emphasis => "emphasis",
            Self::Generic => "generic",
            Self::Heading => "heading",
            Self::List => "list",
            Self::ListItem => "listitem",
            Self::Main => "main",
            Self::Navigation => "navigation",
            Self::Paragraph => "paragraph",
            Self::Strong => "strong",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        let role = match name {
            "article" => Self::Article,
            "banner" => Self::Banner,
            "contentinfo" => Self::ContentInfo,
            "emphasis" => Self::Emphasis,
            "generic" => Self::Generic,
            "heading" => Self::Heading,
            "list" => Self::List,
            "listitem" => Self::ListItem,
            "main" => Self::Main,
            "navigation" => Self::Navigation,
            "paragraph" => Self::Paragraph,
            "strong" => Self::Strong,
            _ => return None,
        };
        Some(role)
    }

    // Reference: https://www.w3.org/TR/html-aria/#docconformance
    fn implicit(tag: &str) -> Option<Self> {
        let role = match tag {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Self::Heading,
            "article" => Self::Article,
            "header" => Self::Banner,
            "footer" => Self::ContentInfo,
            "em" => Self::Emphasis,
            "div" | "span" | "b" | "i" | "u" | "s" | "small" | "samp" => Self::Generic,
            "ol" | "ul" => Self::List,
            "li" => Self::ListItem,
            "main" => Self::Main,
            "nav" => Self::Navigation,
            "p" => Self::Paragraph,
            "strong" => Self::Strong,
            _ => return None,
        };
        Some(role)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug)]
pub enum NameMatcher {
    Exact(String),
    Pattern(Regex),
}

impl NameMatcher {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Exact(expected) => name == expected,
            Self::Pattern(pattern) => pattern.is_match(name),
        }
    }
}

impl fmt::Display for NameMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(expected) => write!(f, "{expected:?}"),
            Self::Pattern(pattern) => write!(f, "/{pattern}/"),
        }
    }
}

impl From<&str> for NameMatcher {
    fn from(name: &str) -> Self {
        Self::Exact(name.to_string())
    }
}

impl From<String> for NameMatcher {
    fn from(name: String) -> Self {
        Self::Exact(name)
    }
}

impl From<Regex> for NameMatcher {
    fn from(pattern: Regex) -> Self {
        Self::Pattern(pattern)
    }
}

/// Filters for [`get_by_role`] and [`query_all_by_role`].
#[derive(Clone, Debug, Default)]
pub struct ByRole {
    name: Option<NameMatcher>,
    level: Option<u8>,
}

impl ByRole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<NameMatcher>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Only meaningful for [`Role::Heading`].
    pub fn level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    fn matches<N: Node>(&self, node: &N) -> bool {
        if let Some(name) = &self.name {
            if !name.matches(&accessible_name(node)) {
                return false;
            }
        }

        match self.level {
            Some(level) => heading_level(node) == Some(level),
            None => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("no accessible element with role `{role}` and name {name}")]
    NotFound { role: Role, name: String },

    #[error("found {count} accessible elements with role `{role}`, expected exactly one")]
    Multiple { role: Role, count: usize },
}

pub fn role_of<N: Node>(node: &N) -> Option<Role> {
    if node.ty() != NodeType::Element {
        return None;
    }

    let explicit = node
        .attr("role")
        .and_then(|roles| roles.split_whitespace().find_map(Role::from_name));

    explicit.or_else(|| node.name().as_deref().and_then(Role::implicit))
}

/// Level of a heading: `aria-level` if set, otherwise taken from the tag.
pub fn heading_level<N: Node>(node: &N) -> Option<u8> {
    if role_of(node) != Some(Role::Heading) {
        return None;
    }

    if let Some(level) = node
        .attr("aria-level")
        .and_then(|level| level.trim().parse().ok())
    {
        return Some(level);
    }

    let level = match node.name()?.as_str() {
        "h1" => 1,
        "h3" => 3,
        "h4" => 4,
        "h5" => 5,
        "h6" => 6,
        // `h2` and explicit `role="heading"` both default to level 2
        _ => 2,
    };
    Some(level)
}

/// The `aria-label` of an element, falling back to its text content, with
/// whitespace collapsed.
pub fn accessible_name<N: Node>(node: &N) -> String {
    let label = match node.ty() {
        NodeType::Element => node
            .attr("aria-label")
            .filter(|label| !label.trim().is_empty()),
        NodeType::Text | NodeType::Fragment => None,
    };

    let raw = label.unwrap_or_else(|| node.text_content());
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn is_hidden<N: Node>(node: &N) -> bool {
    node.ty() == NodeType::Element
        && (node.attr("hidden").is_some()
            || node.attr("aria-hidden").as_deref() == Some("true"))
}

/// Every accessible node under (and including) `root` with the given role.
///
/// Hidden subtrees are skipped.
pub fn query_all_by_role<N: Node>(root: &N, role: Role, options: &ByRole) -> Vec<N> {
    let mut found = vec![];
    collect(root, &mut |node| {
        if role_of(node) == Some(role) && options.matches(node) {
            found.push(node.clone());
        }
    });
    found
}

pub fn get_by_role<N: Node>(root: &N, role: Role, options: &ByRole) -> Result<N, QueryError> {
    let mut found = query_all_by_role(root, role, options);
    match found.len() {
        0 => Err(QueryError::NotFound {
            role,
            name: options
                .name
                .as_ref()
                .map_or_else(|| "(any)".to_string(), ToString::to_string),
        }),
        1 => Ok(found.remove(0)),
        count => Err(QueryError::Multiple { role, count }),
    }
}

/// Depth-first search for the element whose `id` attribute equals `id`.
pub fn find_by_id<N: Node>(root: &N, id: &str) -> Option<N> {
    if root.ty() == NodeType::Element && root.attr("id").as_deref() == Some(id) {
        return Some(root.clone());
    }

    root.children()
        .iter()
        .find_map(|child| find_by_id(child, id))
}

fn collect<N, F>(node: &N, f: &mut F)
where
    N: Node,
    F: FnMut(&N),
{
    if is_hidden(node) {
        return;
    }

    f(node);
    for child in node.children() {
        collect(&child, f);
    }
}
