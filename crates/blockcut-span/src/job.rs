//! Removal jobs.
//!
//! A [`RemovalJob`] bundles every setting of a single block removal. Jobs are
//! read from TOML/JSON/YAML files and can be overlaid with command-line
//! values through [`RemovalJob::merge`].

use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;

use crate::{DEFAULT_CLOSING_TOKEN, Error, IndentPrefix, MatchStrategy, Result, SpanResolver};

/// Name of a [`MatchStrategy`], as written in job files and on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    First,
    Balanced,
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "first" => Ok(Self::First),
            "balanced" => Ok(Self::Balanced),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}

/// Settings for one block removal. Every field is optional so that partial
/// jobs can be merged; [`RemovalJob::resolver`] checks what is required.
///
/// ```toml
/// file = "src/components/pipeline/ProjectPipeline.tsx"
/// start_marker = "{/* Mode Toggle & Actions */}"
/// boundary_marker = "{/* Answer Area */}"
/// indent_width = 32
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RemovalJob {
    pub file: Option<PathBuf>,
    pub start_marker: Option<String>,
    pub boundary_marker: Option<String>,
    /// Literal indent prefix of the closing line.
    pub indent: Option<String>,
    /// Indent prefix given as a number of spaces.
    pub indent_width: Option<usize>,
    pub closing_token: Option<String>,
    pub strategy: Option<StrategyKind>,
    /// Opening token for the balanced strategy. Derived from the closing
    /// token (`</div>` -> `<div`) when absent.
    pub open_token: Option<String>,
    pub expect_opening: Option<String>,
}

impl RemovalJob {
    /// Overlay `overrides` on top of `self`. Set fields in `overrides` win.
    ///
    /// An indent given in either form on the override side replaces both
    /// indent forms of the base job.
    pub fn merge(self, overrides: RemovalJob) -> RemovalJob {
        let override_indent = overrides.indent.is_some() || overrides.indent_width.is_some();
        let (indent, indent_width) = if override_indent {
            (overrides.indent, overrides.indent_width)
        } else {
            (self.indent, self.indent_width)
        };

        RemovalJob {
            file: overrides.file.or(self.file),
            start_marker: overrides.start_marker.or(self.start_marker),
            boundary_marker: overrides.boundary_marker.or(self.boundary_marker),
            indent,
            indent_width,
            closing_token: overrides.closing_token.or(self.closing_token),
            strategy: overrides.strategy.or(self.strategy),
            open_token: overrides.open_token.or(self.open_token),
            expect_opening: overrides.expect_opening.or(self.expect_opening),
        }
    }

    /// The validated indent prefix.
    pub fn indent_prefix(&self) -> Result<IndentPrefix> {
        match (&self.indent, self.indent_width) {
            (Some(indent), None) => IndentPrefix::new(indent.as_str()),
            (None, Some(width)) => IndentPrefix::spaces(width),
            (Some(indent), Some(_)) => Err(Error::InvalidIndent {
                indent: indent.clone(),
                reason: "`indent` and `indent_width` are mutually exclusive",
            }),
            (None, None) => Err(Error::MissingField { field: "indent" }),
        }
    }

    /// Build a resolver from this job.
    ///
    /// # Errors
    /// Returns `MissingField` for an absent marker or indent, `InvalidIndent`
    /// for a bad indent, `MissingField("open_token")` when the balanced
    /// strategy is chosen and no opening token can be derived, and
    /// `InvalidOpenToken` when the given one is blank.
    pub fn resolver(&self) -> Result<SpanResolver> {
        let start_marker = self.start_marker.as_deref().ok_or(Error::MissingField {
            field: "start_marker",
        })?;
        let boundary_marker = self.boundary_marker.as_deref().ok_or(Error::MissingField {
            field: "boundary_marker",
        })?;
        let closing_token = self
            .closing_token
            .as_deref()
            .unwrap_or(DEFAULT_CLOSING_TOKEN);

        let strategy = match self.strategy.unwrap_or_default() {
            StrategyKind::First => {
                if let Some(open_token) = &self.open_token {
                    tracing::warn!(open_token, "opening token only applies to the balanced strategy");
                }
                MatchStrategy::FirstExact
            }
            StrategyKind::Balanced => {
                let open_token = self
                    .open_token
                    .clone()
                    .or_else(|| derive_open_token(closing_token))
                    .ok_or(Error::MissingField {
                        field: "open_token",
                    })?;
                if open_token.trim().is_empty() {
                    return Err(Error::InvalidOpenToken);
                }
                MatchStrategy::Balanced { open_token }
            }
        };

        let mut resolver = SpanResolver::new(start_marker, boundary_marker, self.indent_prefix()?)
            .closing_token(closing_token)
            .strategy(strategy);
        if let Some(expected) = &self.expect_opening {
            resolver = resolver.expect_opening(expected.as_str());
        }
        Ok(resolver)
    }
}

/// `</tag>` -> `<tag`
fn derive_open_token(closing_token: &str) -> Option<String> {
    let name = closing_token.strip_prefix("</")?.strip_suffix('>')?.trim();
    (!name.is_empty()).then(|| format!("<{name}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn job() -> RemovalJob {
        RemovalJob {
            start_marker: Some("START".into()),
            boundary_marker: Some("END".into()),
            indent_width: Some(2),
            ..Default::default()
        }
    }

    #[test]
    fn test_derive_open_token() {
        assert_eq!(derive_open_token("</div>").as_deref(), Some("<div"));
        assert_eq!(derive_open_token("</ Section >").as_deref(), Some("<Section"));
        assert_eq!(derive_open_token("</>"), None);
        assert_eq!(derive_open_token("}"), None);
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("first".parse::<StrategyKind>().unwrap(), StrategyKind::First);
        assert_eq!("Balanced".parse::<StrategyKind>().unwrap(), StrategyKind::Balanced);
        assert!("greedy".parse::<StrategyKind>().is_err());
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let base = RemovalJob {
            closing_token: Some("</section>".into()),
            ..job()
        };
        let overrides = RemovalJob {
            start_marker: Some("OTHER".into()),
            ..Default::default()
        };

        let merged = base.merge(overrides);
        assert_eq!(merged.start_marker.as_deref(), Some("OTHER"));
        assert_eq!(merged.boundary_marker.as_deref(), Some("END"));
        assert_eq!(merged.closing_token.as_deref(), Some("</section>"));
        assert_eq!(merged.indent_width, Some(2));
    }

    #[test]
    fn test_merge_indent_replaces_both_forms() {
        let overrides = RemovalJob {
            indent: Some("\t".into()),
            ..Default::default()
        };

        let merged = job().merge(overrides);
        assert_eq!(merged.indent.as_deref(), Some("\t"));
        assert_eq!(merged.indent_width, None);
        assert!(merged.indent_prefix().is_ok());
    }

    #[test]
    fn test_both_indent_forms_rejected() {
        let conflicting = RemovalJob {
            indent: Some("  ".into()),
            ..job()
        };
        assert!(matches!(
            conflicting.indent_prefix(),
            Err(Error::InvalidIndent { .. })
        ));
    }

    #[test]
    fn test_missing_fields() {
        let no_start = RemovalJob {
            start_marker: None,
            ..job()
        };
        assert!(matches!(
            no_start.resolver(),
            Err(Error::MissingField { field: "start_marker" })
        ));

        let no_indent = RemovalJob {
            indent_width: None,
            ..job()
        };
        assert!(matches!(
            no_indent.resolver(),
            Err(Error::MissingField { field: "indent" })
        ));
    }

    #[test]
    fn test_balanced_needs_derivable_open_token() {
        let balanced = RemovalJob {
            strategy: Some(StrategyKind::Balanced),
            closing_token: Some("}".into()),
            ..job()
        };
        assert!(matches!(
            balanced.resolver(),
            Err(Error::MissingField { field: "open_token" })
        ));

        let with_token = RemovalJob {
            open_token: Some("{".into()),
            ..balanced
        };
        assert!(with_token.resolver().is_ok());
    }

    #[test]
    fn test_blank_open_token_rejected() {
        let balanced = RemovalJob {
            strategy: Some(StrategyKind::Balanced),
            open_token: Some(String::new()),
            ..job()
        };
        assert!(matches!(balanced.resolver(), Err(Error::InvalidOpenToken)));

        let whitespace = RemovalJob {
            open_token: Some("  ".into()),
            ..balanced
        };
        assert!(matches!(whitespace.resolver(), Err(Error::InvalidOpenToken)));
    }

    #[test]
    fn test_open_token_ignored_by_first_strategy() {
        let first = RemovalJob {
            open_token: Some("<div".into()),
            ..job()
        };
        let span = first
            .resolver()
            .unwrap()
            .resolve(&["START\n", "  <div>\n", "  </div>\n", "END\n"])
            .unwrap();
        assert_eq!((span.start, span.end), (0, 2));
    }
}
