use std::{
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process,
};

use clap::Parser as ClapParser;
use lexeme::{
    display_error,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::{count_by_category, first_unknown, tokenize},
        tokens::Category,
    },
    Position,
};
use log::{info, warn};

#[derive(ClapParser, Debug)]
#[command(name = "lexeme", about = "Classify the tokens of a C-family script")]
struct Cli {
    /// Source file to tokenize. Prompted for on stdin when omitted.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Exit with an error at the first character no category recognizes.
    #[arg(long = "deny-unknown")]
    deny_unknown: bool,

    /// Print the number of tokens per category after the listing.
    #[arg(long)]
    summary: bool,

    /// Leave comments and preprocessor directives out of the listing.
    #[arg(long = "no-trivia")]
    no_trivia: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let file_path = match cli.file.clone() {
        Some(path) => path,
        None => match prompt_file_name() {
            Ok(path) => path,
            Err(error) => {
                display_error(&error, "");
                process::exit(1);
            }
        },
    };

    let source = match read_source(&file_path) {
        Ok(source) => source,
        Err(error) => {
            display_error(&error, "");
            process::exit(1);
        }
    };

    let file_name = file_path.to_string_lossy().to_string();
    let tokens = tokenize(&source, Some(file_name));

    if cli.deny_unknown {
        if let Some(unknown) = first_unknown(&tokens) {
            let character = unknown.value.chars().next().unwrap_or('\0');
            let error = Error::new(
                ErrorImpl::UnrecognisedCharacter { character },
                unknown.span.start.clone(),
            );
            display_error(&error, &source);
            process::exit(1);
        }
    }

    println!("\nTokens and their types:");
    for token in tokens.iter().filter(|token| !(cli.no_trivia && token.is_trivia())) {
        println!("{}", token);
    }

    if cli.summary {
        println!("\nSummary:");
        for (category, count) in count_by_category(&tokens) {
            println!("{:<24}{}", category, count);
        }
        if tokens.iter().any(|token| token.category == Category::Unknown) {
            warn!("{} contains unrecognised characters", file_path.display());
        }
    }
}

fn prompt_file_name() -> Result<PathBuf, Error> {
    print!("Enter the JavaScript source file name: ");

    let mut line = String::new();
    io::stdout()
        .flush()
        .and_then(|_| io::stdin().lock().read_line(&mut line))
        .map_err(|err| {
            Error::new(
                ErrorImpl::PromptFailed { reason: err.to_string() },
                Position::null(),
            )
        })?;

    Ok(PathBuf::from(line.trim_end_matches(['\r', '\n'])))
}

fn read_source(path: &Path) -> Result<String, Error> {
    info!("reading {}", path.display());

    read_to_string(path).map_err(|err| {
        Error::new(
            ErrorImpl::InputUnavailable {
                path: path.to_string_lossy().to_string(),
                reason: err.to_string(),
            },
            Position::null(),
        )
    })
}
