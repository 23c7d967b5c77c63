use std::{env, fs::read_to_string, time::Instant};

use anyhow::{bail, Context};
use lexer::{errors::errors::{Error, ErrorTip}, get_line_at_position, lexer::lexer::Lexer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SAMPLE: &str = "
[25/(3*40) + {300-20} -16.5]
{(300-250)<(400-500)}
20 & 30 | 50
# This is a comment
";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    let (file_name, source) = match args.len() {
        1 => (String::from("<sample>"), String::from(SAMPLE)),
        2 => {
            let source = read_to_string(&args[1])
                .with_context(|| format!("Failed to read {}", args[1]))?;
            (args[1].clone(), source)
        }
        _ => bail!("Usage: {} [source-file]", args[0]),
    };

    let start = Instant::now();
    let mut errors = 0;

    for scanned in Lexer::new(&source) {
        match scanned {
            Ok(token) => println!("{}", token),
            Err(error) => {
                display_error(&error, &file_name, &source);
                errors += 1;
            }
        }
    }

    println!("Tokenized in {:?} ({} errors)", start.elapsed(), errors);

    Ok(())
}

fn display_error(error: &Error, file_name: &str, source: &str) {
    /*
        error: message
        -> sample.txt
           |
        20 | 10 @ 20
           | ---^
    */

    let (line, line_text, line_pos) = get_line_at_position(source, error.get_position().offset);

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file_name);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_str, line_text_removed.trim_end());

    let arrows = line_text[removed_whitespace..line_pos].chars().count() + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches(|c: char| c == ' ' || c == '\t');

    (trimmed, string.len() - trimmed.len())
}
