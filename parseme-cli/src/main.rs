//! parseme CLI
//!
//! Tokenizes an HTML document and prints the token stream.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use parseme_common::{Warnings, fetch_file_contents};
use parseme_html::{Token, TokenKind, Tokenizer, properties};
use strum::IntoEnumIterator;

/// parseme: print the flat token stream of an HTML document
#[derive(Parser, Debug)]
#[command(name = "parseme")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Tokenize a file
    parseme ./index.html

    # Tokenize an inline string and show decoded attributes
    parseme --properties --html '<img src="a.png" alt="logo" />'

    # Count tokens by kind, without warnings
    parseme --summary --quiet ./index.html
"#)]
struct Cli {
    /// Path to the HTML file to tokenize
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Tokenize this HTML string instead of a file
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,

    /// Print the decoded properties of every tag
    #[arg(short, long)]
    properties: bool,

    /// Print how many tokens of each kind were produced
    #[arg(short, long)]
    summary: bool,

    /// Do not print tokenizer or property warnings
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let bytes = match (&cli.html, &cli.path) {
        (Some(html), _) => html.clone().into_bytes(),
        (None, Some(path)) => fetch_file_contents(path)?,
        (None, None) => bail!("nothing to tokenize: pass a FILE or --html '<html>...</html>'"),
    };

    let mut warnings = if cli.quiet {
        Warnings::quiet()
    } else {
        Warnings::new()
    };

    let mut tokenizer = Tokenizer::new(&bytes);
    tokenizer.run();
    let (tokens, issues) = tokenizer.into_parts();

    for issue in &issues {
        let _ = warnings.warn_once(
            "Tokenizer",
            &format!("{} (byte {})", issue.message, issue.offset),
        );
    }

    println!("=== Tokens ===");
    for (index, token) in tokens.iter().enumerate() {
        println!("{index:>5}  {}", paint(token));
    }

    if cli.properties {
        println!("\n=== Properties ===");
        print_properties(&tokens, &mut warnings);
    }

    if cli.summary {
        println!("\n=== Summary ===");
        for (kind, count) in summarize(&tokens) {
            println!("{:<14} {count}", kind.to_string());
        }
        println!("{:<14} {}", "issues", issues.len());
    }

    Ok(())
}

/// Render one token, colored by kind.
fn paint(token: &Token) -> String {
    let kind = format!("{:<14}", token.kind().to_string());
    let text = format!("{:?}", token.text());
    match token.kind() {
        TokenKind::TagStart
        | TokenKind::SlashTagStart
        | TokenKind::TagEnd
        | TokenKind::SlashTagEnd => format!("{} {}", kind.dimmed(), text.dimmed()),
        TokenKind::TagName => format!("{} {}", kind.blue(), text.blue().bold()),
        TokenKind::PropertyName => format!("{} {}", kind.cyan(), text.cyan()),
        TokenKind::PropertyValue => format!("{} {}", kind.green(), text.green()),
        TokenKind::Content => format!("{kind} {text}"),
    }
}

/// Print `<name>` followed by its properties, for every start tag.
fn print_properties(tokens: &[Token], warnings: &mut Warnings) {
    for (index, token) in tokens.iter().enumerate() {
        if token.kind() != TokenKind::TagStart {
            continue;
        }

        let name = tokens
            .get(index + 1)
            .filter(|next| next.kind() == TokenKind::TagName)
            .map_or("?", Token::text);
        println!("<{name}>");

        for property in properties(&tokens[index..]) {
            match property {
                Ok(property) => println!("    {property}"),
                Err(err) => {
                    let _ = warnings.warn_once("Property", &format!("<{name}>: {err}"));
                }
            }
        }
    }
}

/// Count tokens per kind, every kind included, in declaration order.
fn summarize(tokens: &[Token]) -> Vec<(TokenKind, usize)> {
    TokenKind::iter()
        .map(|kind| (kind, tokens.iter().filter(|t| t.kind() == kind).count()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_counts_every_kind() {
        let tokens = parseme_html::tokenize(b"<p class=a>hi</p>");
        let summary = summarize(&tokens);

        assert_eq!(summary.len(), 8);
        assert_eq!(summary[0], (TokenKind::TagStart, 1));
        assert!(summary.contains(&(TokenKind::TagName, 2)));
        assert!(summary.contains(&(TokenKind::PropertyValue, 1)));
        assert!(summary.contains(&(TokenKind::Content, 1)));
        assert!(summary.contains(&(TokenKind::SlashTagEnd, 0)));
    }

    #[test]
    fn test_cli_rejects_file_and_html_together() {
        let parsed = Cli::try_parse_from(["parseme", "page.html", "--html", "<p>"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from(["parseme", "-p", "-s", "-q", "page.html"]).unwrap();
        assert!(cli.properties && cli.summary && cli.quiet);
        assert_eq!(cli.path, Some(PathBuf::from("page.html")));
    }
}
