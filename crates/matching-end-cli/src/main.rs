use anyhow::{Context, Result};
use matching_end_config::Config;
use matching_end_engine::{MatchingEndFinder, NO_MATCH, escape_markup_default, wrap_in_cdata};
use std::{
    env,
    io::{self, Read},
    path::Path,
    process,
};

const USAGE: &str =
    "<file|-> <offset> [pair-name | <start> <end>] [--content] [--escape] [--cdata]";

/// Which markers to scan for.
#[derive(Debug, PartialEq, Eq)]
enum PairArg {
    /// A pair from the config, or the default pair when `None`.
    Named(Option<String>),
    Explicit { start: String, end: String },
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    input: String,
    offset: i64,
    pair: PairArg,
    show_content: bool,
    escape: bool,
    cdata: bool,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut positional = vec![];
    let mut show_content = false;
    let mut escape = false;
    let mut cdata = false;

    for arg in args {
        match arg.as_str() {
            "--content" => show_content = true,
            "--escape" => escape = true,
            "--cdata" => cdata = true,
            flag if flag.starts_with("--") => return Err(format!("Unknown option: {flag}")),
            _ => positional.push(arg.as_str()),
        }
    }

    let (input, offset, rest) = match positional.as_slice() {
        [input, offset, rest @ ..] => (*input, *offset, rest),
        _ => return Err("Missing input file or offset".to_string()),
    };
    let offset = offset
        .parse::<i64>()
        .map_err(|e| format!("Invalid offset '{offset}': {e}"))?;
    let pair = match rest {
        [] => PairArg::Named(None),
        [name] => PairArg::Named(Some(name.to_string())),
        [start, end] => PairArg::Explicit {
            start: start.to_string(),
            end: end.to_string(),
        },
        _ => return Err("Too many arguments".to_string()),
    };

    Ok(Args {
        input: input.to_string(),
        offset,
        pair,
        // escaping and CDATA only apply to printed content
        show_content: show_content || escape || cdata,
        escape,
        cdata,
    })
}

fn build_finder(pair: &PairArg, config: &Config) -> Result<MatchingEndFinder> {
    let (start, end) = match pair {
        PairArg::Named(name) => {
            let pair = config.resolve_pair(name.as_deref())?;
            log::debug!("Using marker pair '{}'", pair.name);
            (pair.start.as_str(), pair.end.as_str())
        }
        PairArg::Explicit { start, end } => (start.as_str(), end.as_str()),
    };
    Ok(MatchingEndFinder::new(start, end)?)
}

/// Renders the scan result: the closing index (or `-1`), optionally followed
/// by the enclosed content on its own line.
fn render(args: &Args, finder: &MatchingEndFinder, text: &str) -> String {
    let enclosed = usize::try_from(args.offset)
        .ok()
        .and_then(|offset| finder.find_enclosed(text, offset));
    let Some(span) = enclosed else {
        return NO_MATCH.to_string();
    };

    let mut out = span.end.to_string();
    if args.show_content {
        let mut content = span.slice(text).unwrap_or_default().to_string();
        if args.escape {
            content = escape_markup_default(&content).into_owned();
        }
        if args.cdata {
            content = wrap_in_cdata(&content);
        }
        out.push('\n');
        out.push_str(&content);
    }
    out
}

fn read_input(input: &str, config: &Config) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    let path = config.resolve_input(Path::new(input));
    std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("matching-end-cli", String::as_str);
    let parsed = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program} {USAGE}");
            process::exit(1);
        }
    };

    let config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!(
                "Fix or remove the config file at {}",
                Config::config_path().display()
            );
            process::exit(1);
        }
    };

    let finder = build_finder(&parsed.pair, &config)?;
    let text = read_input(&parsed.input, &config)?;
    println!("{}", render(&parsed, &finder, &text));
    Ok(())
}
