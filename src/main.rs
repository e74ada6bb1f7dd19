use std::{
    borrow::Cow,
    fs::read_to_string,
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use clap::{Parser, ValueEnum};
use nulex::{
    errors::errors::{Error, ErrorImpl, ErrorTip},
    format::formatter::{format, Formatter, RawFormatter, TerminalFormatter},
    get_line_at_position,
    lexer::{
        lexer::{Lexer, LexerOptions},
        tokens::{Token, TokenType},
    },
    lexers::{all_lexers, get_lexer_by_name, get_lexer_for_filename},
};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Terminal,
    Raw,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to highlight, stdin when omitted
    file: Option<PathBuf>,

    /// Lexer alias; guessed from the file name when omitted
    #[arg(short, long)]
    lexer: Option<String>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Terminal)]
    format: OutputFormat,

    /// Override a terminal style, e.g. `Keyword.Constant=35` or `Whitespace=2`
    #[arg(short, long = "style")]
    styles: Vec<String>,

    /// Expand tabs to this many columns
    #[arg(long, default_value_t = 0)]
    tab_size: usize,

    /// Tokenize the input exactly as read, without newline normalization
    #[arg(long)]
    raw_input: bool,

    /// Warn about characters no rule matched
    #[arg(long)]
    check: bool,

    /// List the available lexers and exit
    #[arg(long)]
    list: bool,
}

#[derive(Error, Debug)]
enum RunError {
    #[error(transparent)]
    Lexer(#[from] Error),
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("invalid style {0:?}, expected `Category=SGR`")]
    Style(String),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(RunError::Lexer(error)) => {
            display_error(&error);
            ExitCode::FAILURE
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), RunError> {
    if cli.list {
        for info in all_lexers() {
            println!(
                "{} ({}) {} [added in {}] {}",
                info.name,
                info.aliases.join(", "),
                info.filenames.join(" "),
                info.version_added,
                info.url
            );
        }
        return Ok(());
    }

    let options = LexerOptions {
        tab_size: cli.tab_size,
        ..LexerOptions::default()
    };
    let lexer = select_lexer(cli, options)?;

    let source = match &cli.file {
        Some(path) => read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let text = if cli.raw_input {
        Cow::Borrowed(source.as_str())
    } else {
        lexer.preprocess(&source)
    };

    let start = Instant::now();
    let tokens: Vec<Token> = lexer.tokenize(&text).collect();
    debug!(tokens = tokens.len(), elapsed = ?start.elapsed(), "tokenized");

    if cli.check {
        report_unmatched(&text, &tokens, &mut io::stderr().lock())?;
    }

    let formatter: Box<dyn Formatter> = match cli.format {
        OutputFormat::Raw => Box::new(RawFormatter),
        OutputFormat::Terminal => Box::new(terminal_formatter(&cli.styles)?),
    };

    let stdout = io::stdout();
    format(tokens, formatter.as_ref(), &mut stdout.lock())?;

    Ok(())
}

fn select_lexer(cli: &Cli, options: LexerOptions) -> Result<Lexer, RunError> {
    if let Some(alias) = &cli.lexer {
        return Ok(get_lexer_by_name(alias, options)?);
    }

    if let Some(path) = &cli.file {
        match get_lexer_for_filename(path, options.clone()) {
            Ok(lexer) => return Ok(lexer),
            Err(error) if matches!(error.get_kind(), ErrorImpl::UnknownLexer { .. }) => {
                debug!(file = ?path, "no lexer for file name, using nu");
            }
            Err(error) => return Err(error.into()),
        }
    }

    Ok(get_lexer_by_name("nu", options)?)
}

fn terminal_formatter(styles: &[String]) -> Result<TerminalFormatter, RunError> {
    let mut formatter = TerminalFormatter::default();

    for style in styles {
        let (name, sgr) = style
            .split_once('=')
            .ok_or_else(|| RunError::Style(style.clone()))?;
        let kind = TokenType::from_dotted(name.trim()).ok_or_else(|| RunError::Style(style.clone()))?;
        formatter = formatter.with_style(kind, sgr.trim());
    }

    Ok(formatter)
}

/// Writes one `line:column` warning per fallback token. Goes straight to
/// `out` so `--check` does not depend on the log filter.
fn report_unmatched(text: &str, tokens: &[Token], out: &mut dyn Write) -> io::Result<usize> {
    let mut count = 0;

    for token in tokens.iter().filter(|token| token.kind == TokenType::Error) {
        if let Some((line, _, column)) = get_line_at_position(text, token.start()) {
            writeln!(out, "warning: {}:{}: no rule matched {:?}", line, column + 1, token.value)?;
            count += 1;
        }
    }

    if count > 0 {
        debug!(count, "unmatched characters");
    }

    Ok(count)
}

fn display_error(error: &Error) {
    /*
        Error: InvalidPattern (Pattern `[` does not compile, ...)
        -> root[3]
           invalid pattern "[": ...
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", error.get_location());
    eprintln!("   {}", error.get_kind());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_unmatched_writes_positions() {
        let lexer = get_lexer_by_name("nu", LexerOptions::default()).unwrap();
        let text = "let x = 1\nlet y = @\n";
        let tokens: Vec<Token> = lexer.tokenize(text).collect();
        let mut out = vec![];

        let count = report_unmatched(text, &tokens, &mut out).unwrap();

        assert_eq!(count, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "warning: 2:9: no rule matched \"@\"\n");
    }

    #[test]
    fn test_style_accepts_leaf_name() {
        assert!(terminal_formatter(&["Whitespace=2".to_string()]).is_ok());
        assert!(matches!(
            terminal_formatter(&["Single=2".to_string()]),
            Err(RunError::Style(_))
        ));
    }
}
