use std::sync::OnceLock;

use serde::Deserialize;

const DATA_SOURCE: &str = include_str!("../dom.toml");

static DOM: OnceLock<Dom> = OnceLock::new();

#[derive(Deserialize)]
struct Dom {
    elements: Vec<String>,
    attributes: Vec<String>,
}

impl Dom {
    fn get() -> &'static Self {
        DOM.get_or_init(|| toml::from_str(DATA_SOURCE).expect("malformed dom.toml"))
    }
}

pub fn elements() -> &'static [String] {
    &Dom::get().elements
}

pub fn attributes() -> &'static [String] {
    &Dom::get().attributes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_headings() {
        for level in 1..=6 {
            let tag = format!("h{level}");
            assert!(elements().contains(&tag), "missing `{tag}`");
        }
    }

    #[test]
    fn lists_accessibility_attributes() {
        let attrs = attributes();
        assert!(attrs.iter().any(|attr| attr == "role"));
        assert!(attrs.iter().any(|attr| attr == "aria-label"));
    }
}
