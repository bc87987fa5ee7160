//! Starter files written by `arbor init`.
//!
//! The sources under `templates/` are live TOML so they stay checked against the config
//! schema. They are emitted fully commented out, so a fresh file changes nothing until
//! the user opts in line by line.

/// Which starter file to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Template {
    /// A project-level `.arbor.toml`.
    Local,
    /// `~/.arbor.toml`.
    Global,
}

impl Template {
    /// The uncommented TOML source.
    const fn source(self) -> &'static str {
        match self {
            Self::Local => include_str!("../templates/config.toml"),
            Self::Global => include_str!("../templates/config-global.toml"),
        }
    }

    /// The source with every setting commented out.
    fn render(self) -> String {
        let mut out = String::new();
        for line in self.source().lines() {
            let settled = line.is_empty() || line.starts_with('#');
            if !settled {
                out.push_str("# ");
            }
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Returns the starter contents for a project config.
pub fn local_template() -> String {
    Template::Local.render()
}

/// Returns the starter contents for the global config.
pub fn global_template() -> String {
    Template::Global.render()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::parse::parse_config_str;

    #[test]
    fn sources_match_the_schema() {
        for template in [Template::Local, Template::Global] {
            let parsed = parse_config_str(template.source(), Path::new("template.toml"));
            assert!(parsed.is_ok(), "{template:?} template: {parsed:?}");
        }
    }

    #[test]
    fn rendered_template_sets_nothing() {
        let config = parse_config_str(&local_template(), Path::new("x.toml")).unwrap();
        assert!(config.dataset.is_none());
        assert!(config.display.is_none());
        assert!(config.log.is_none());
    }

    #[test]
    fn local_template_offers_a_dataset() {
        assert!(local_template().contains("# [dataset]"));
        assert!(!global_template().contains("\n[dataset]"));
    }

    #[test]
    fn comments_and_blank_lines_pass_through() {
        let rendered = Template::Local.render();
        for (src, out) in Template::Local.source().lines().zip(rendered.lines()) {
            if src.is_empty() || src.starts_with('#') {
                assert_eq!(src, out);
            } else {
                assert_eq!(out, format!("# {src}"));
            }
        }
    }
}
