//! The `lex` command: tokenize a file and print the token stream.

use std::fmt::Write as _;

use ariadne::{Config, Label, Report, ReportKind, Source};
use rill_ir::TokenList;
use rill_lexer::LexError;
use rill_lexer_core::SourceBuffer;

use super::load_source;

/// How `rillc lex` prints tokens.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum TokenFormat {
    /// One `Token: ... | Type: ... | Line: ... | Column: ...` line per token.
    #[default]
    Table,
    /// Debug form with byte spans.
    Debug,
}

impl TokenFormat {
    fn parse(text: &str) -> Option<Self> {
        match text {
            "table" => Some(TokenFormat::Table),
            "debug" => Some(TokenFormat::Debug),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LexOptions {
    pub format: TokenFormat,
    /// Echo the source text before the tokens.
    pub show_source: bool,
}

/// Split `rillc lex` arguments into the file path and options.
///
/// Flags may come before or after the path. Unknown flags and extra
/// positional arguments are rejected.
pub fn parse_lex_options(args: &[String]) -> Result<(&str, LexOptions), String> {
    let mut options = LexOptions::default();
    let mut path = None;

    for arg in args {
        if let Some(format) = arg.strip_prefix("--format=") {
            options.format = TokenFormat::parse(format)
                .ok_or_else(|| format!("unknown format '{format}' (expected table or debug)"))?;
        } else if arg == "--show-source" {
            options.show_source = true;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(arg.as_str());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }

    let path = path.ok_or_else(|| "missing file path".to_string())?;
    Ok((path, options))
}

/// Lex a file and print its tokens, or report the error and exit with 1.
pub fn lex_file(path: &str, options: &LexOptions) {
    let source = load_source(path);
    match lex_source(&source, options) {
        Ok(output) => print!("{output}"),
        Err(report) => {
            eprint!("{report}");
            std::process::exit(1);
        }
    }
}

/// Lex `source` and render the result.
///
/// `Ok` holds the token listing; `Err` holds the rendered error report.
pub fn lex_source(source: &SourceBuffer, options: &LexOptions) -> Result<String, String> {
    match rill_lexer::lex(source) {
        Ok(tokens) => Ok(render_tokens(source, &tokens, options)),
        Err(err) => Err(render_lex_error(source, &err)),
    }
}

pub fn render_tokens(source: &SourceBuffer, tokens: &TokenList, options: &LexOptions) -> String {
    let mut out = String::new();

    if options.show_source {
        out.push_str(source.as_str());
        if !source.as_str().ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
    }

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "Tokens for '{}' ({} tokens):",
        source.name(),
        tokens.len()
    );
    for token in tokens {
        let _ = match options.format {
            TokenFormat::Table => writeln!(out, "{token}"),
            TokenFormat::Debug => writeln!(out, "  {token:?} [{}]", token.span),
        };
    }
    out
}

/// Render a lexer error as a source-annotated report, without color.
///
/// The label points at the first character of the offending construct.
/// The report header counts columns in characters, so the message carries
/// the lexer's own byte line and column.
pub fn render_lex_error(source: &SourceBuffer, err: &LexError) -> String {
    let name = source.name();
    let text = source.as_str();

    // Report positions are character indices.
    let start = text
        .get(..err.offset as usize)
        .map_or(0, |before| before.chars().count());
    let span = start..start + 1;

    let mut out = Vec::new();
    let written = Report::build(ReportKind::Error, name, start)
        .with_config(Config::default().with_color(false))
        .with_message(err.to_string())
        .with_label(Label::new((name, span)).with_message(err.message()))
        .with_help(err.help())
        .finish()
        .write((name, Source::from(text)), &mut out);

    match written {
        Ok(()) => String::from_utf8_lossy(&out).into_owned(),
        Err(_) => format!("error: {err}\n"),
    }
}
