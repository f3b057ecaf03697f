//! UniFFI bindings for mathdown
//!
//! Lets native hosts (Kotlin, Swift) render message bodies with the Rust
//! engine. Everything crossing the boundary is a plain record or enum of
//! strings and numbers; hosts insert each run's `text` through their normal
//! escaping text views.

use mathdown_config::{Config, ConfigError};
use mathdown_engine::{
    BlockKind, BlockNode, EquationForm, InlineKind, InlineRun, ListItem, RenderOptions,
    parsing::render_with,
};

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Unknown profile: {reason}")]
    UnknownProfile { reason: String },
    #[error("Config error: {reason}")]
    ConfigUnavailable { reason: String },
}

impl From<ConfigError> for FfiError {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::UnknownProfile { .. } => FfiError::UnknownProfile {
                reason: e.to_string(),
            },
            ConfigError::ConfigReadError { .. } | ConfigError::ConfigParseError { .. } => {
                FfiError::ConfigUnavailable {
                    reason: e.to_string(),
                }
            }
        }
    }
}

// ============ DTOs ============

/// Feature switches, mirroring the engine's render options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Record)]
pub struct RenderOptionsDto {
    pub allow_equations: bool,
    pub allow_code_fences: bool,
}

impl From<RenderOptionsDto> for RenderOptions {
    fn from(dto: RenderOptionsDto) -> Self {
        Self {
            allow_equations: dto.allow_equations,
            allow_code_fences: dto.allow_code_fences,
        }
    }
}

/// A top-level block of the rendered document.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct BlockDto {
    /// Order-based id; identical input always gives identical ids
    pub id: u32,
    pub first_line: u32,
    pub last_line: u32,
    pub kind: BlockKindDto,
}

#[derive(Debug, Clone, PartialEq, uniffi::Enum)]
pub enum BlockKindDto {
    Heading { level: u8, runs: Vec<RunDto> },
    Paragraph { runs: Vec<RunDto> },
    CodeBlock {
        language: Option<String>,
        raw_lines: Vec<String>,
    },
    List {
        ordered: bool,
        items: Vec<ListItemDto>,
    },
    Rule,
    Blank,
}

#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct ListItemDto {
    pub id: u32,
    pub line: u32,
    /// Literal number for ordered items ("7" for `7. foo`)
    pub label: Option<String>,
    pub runs: Vec<RunDto>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum RunKindDto {
    Text,
    Bold,
    Italic,
    Code,
    BlockEquation,
    InlineEquation,
}

/// A styled piece of text. `text` is data, never markup.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct RunDto {
    pub id: u32,
    pub kind: RunKindDto,
    pub text: String,
}

impl BlockDto {
    fn from_engine(block: BlockNode) -> Self {
        let kind = match block.kind {
            BlockKind::Heading { level, content } => BlockKindDto::Heading {
                level: level.depth(),
                runs: runs(content),
            },
            BlockKind::Paragraph { content } => BlockKindDto::Paragraph {
                runs: runs(content),
            },
            BlockKind::CodeBlock {
                language,
                raw_lines,
            } => BlockKindDto::CodeBlock {
                language,
                raw_lines,
            },
            BlockKind::List { ordered, items } => BlockKindDto::List {
                ordered,
                items: items.into_iter().map(ListItemDto::from_engine).collect(),
            },
            BlockKind::Rule => BlockKindDto::Rule,
            BlockKind::Blank => BlockKindDto::Blank,
        };
        Self {
            id: block.id.0,
            first_line: block.lines.first,
            last_line: block.lines.last,
            kind,
        }
    }
}

impl ListItemDto {
    fn from_engine(item: ListItem) -> Self {
        Self {
            id: item.id.0,
            line: item.line,
            label: item.label,
            runs: runs(item.content),
        }
    }
}

impl RunDto {
    fn from_engine(run: InlineRun) -> Self {
        let (kind, text) = match run.kind {
            InlineKind::Text(s) => (RunKindDto::Text, s),
            InlineKind::Bold(s) => (RunKindDto::Bold, s),
            InlineKind::Italic(s) => (RunKindDto::Italic, s),
            InlineKind::Code(s) => (RunKindDto::Code, s),
            InlineKind::Equation {
                form: EquationForm::Block,
                transcoded,
            } => (RunKindDto::BlockEquation, transcoded),
            InlineKind::Equation {
                form: EquationForm::Inline,
                transcoded,
            } => (RunKindDto::InlineEquation, transcoded),
        };
        Self {
            id: run.id.0,
            kind,
            text,
        }
    }
}

fn runs(content: Vec<InlineRun>) -> Vec<RunDto> {
    content.into_iter().map(RunDto::from_engine).collect()
}

fn to_dtos(blocks: Vec<BlockNode>) -> Vec<BlockDto> {
    blocks.into_iter().map(BlockDto::from_engine).collect()
}

// ============ Standalone Functions ============

/// Render with every capability enabled.
#[uniffi::export]
pub fn render(text: String) -> Vec<BlockDto> {
    to_dtos(render_with(&text, &RenderOptions::full()))
}

#[uniffi::export]
pub fn render_with_options(text: String, options: RenderOptionsDto) -> Vec<BlockDto> {
    to_dtos(render_with(&text, &options.into()))
}

/// Render with a named profile from the user's config file (or a built-in
/// one: `full`, `digest`).
#[uniffi::export]
pub fn render_with_profile(text: String, profile: String) -> Result<Vec<BlockDto>, FfiError> {
    let config = Config::load()?.unwrap_or_default();
    render_with_config(&text, &profile, &config)
}

fn render_with_config(text: &str, profile: &str, config: &Config) -> Result<Vec<BlockDto>, FfiError> {
    let options = config.profile(profile)?;
    Ok(to_dtos(render_with(text, &options)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph_runs(blocks: &[BlockDto]) -> &[RunDto] {
        match &blocks[0].kind {
            BlockKindDto::Paragraph { runs } => runs,
            other => panic!("expected paragraph, got {other:?}"),
        }
    }

    #[test]
    fn test_render_heading() {
        let blocks = render("## Notes".to_string());
        assert_eq!(
            blocks,
            vec![BlockDto {
                id: 0,
                first_line: 0,
                last_line: 0,
                kind: BlockKindDto::Heading {
                    level: 2,
                    runs: vec![RunDto {
                        id: 1,
                        kind: RunKindDto::Text,
                        text: "Notes".to_string(),
                    }],
                },
            }]
        );
    }

    #[test]
    fn test_equation_forms_map_to_run_kinds() {
        let blocks = render("$$a$$ $b$".to_string());
        let kinds: Vec<_> = paragraph_runs(&blocks).iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RunKindDto::BlockEquation,
                RunKindDto::Text,
                RunKindDto::InlineEquation
            ]
        );
    }

    #[test]
    fn test_list_items_keep_labels() {
        let blocks = render("4. four\n9. nine".to_string());
        let BlockKindDto::List { ordered, items } = &blocks[0].kind else {
            panic!("expected list");
        };
        assert!(ordered);
        let labels: Vec<_> = items.iter().map(|i| i.label.as_deref()).collect();
        assert_eq!(labels, vec![Some("4"), Some("9")]);
    }

    #[test]
    fn test_render_with_options_disables_fences() {
        let options = RenderOptionsDto {
            allow_equations: true,
            allow_code_fences: false,
        };
        let blocks = render_with_options("```\n$x$".to_string(), options);
        let runs = paragraph_runs(&blocks);
        assert_eq!(runs[0].text, "```\n");
        assert_eq!(runs[1].kind, RunKindDto::InlineEquation);
    }

    #[test]
    fn test_markup_is_plain_text() {
        let blocks = render("<img src=x onerror=alert(1)>".to_string());
        let runs = paragraph_runs(&blocks);
        assert_eq!(runs[0].kind, RunKindDto::Text);
        assert_eq!(runs[0].text, "<img src=x onerror=alert(1)>");
    }

    #[test]
    fn test_builtin_profile_without_config() {
        let blocks = render_with_config("$x$", "digest", &Config::default()).unwrap();
        let runs = paragraph_runs(&blocks);
        assert_eq!(runs[0].kind, RunKindDto::Text);
        assert_eq!(runs[0].text, "$x$");
    }

    #[test]
    fn test_unknown_profile_is_an_error() {
        let err = render_with_config("x", "nope", &Config::default()).unwrap_err();
        assert!(matches!(err, FfiError::UnknownProfile { .. }));
    }
}
