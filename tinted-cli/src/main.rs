//! Command-line interface for tinted
//! Highlights a source file (or stdin) to HTML spans, a JSON token list or a plain token listing.
//!
//! Usage:
//!   tinted `<path|->` [-l `<language>`] [-f html|json|tokens] [--stream | --chunk-size `<n>`] [--wrap]
//!   tinted --list-languages                                   - List registered languages
//!
//! Configuration is read from the embedded defaults, then `./tinted.toml` if present, then the
//! file given with `--config`.

mod logging;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::io::{self, Read, Write};
use std::path::Path;
use tinted_config::{Loader, TintedConfig};
use tinted_html::{CodeBlock, Highlighter};
use tinted_lexer::{Registry, StreamOptions, Token, TokenStream};
use tracing::debug;

const LOCAL_CONFIG: &str = "tinted.toml";

fn build_cli() -> Command {
    Command::new("tinted")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A table-driven syntax highlighter")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the source file, or '-' for stdin")
                .required_unless_present("list-languages")
                .index(1),
        )
        .arg(
            Arg::new("language")
                .long("language")
                .short('l')
                .help("Language name (default: inferred from the file extension)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["html", "json", "tokens"])
                .default_value("html"),
        )
        .arg(
            Arg::new("chunk-size")
                .long("chunk-size")
                .help("Tokenize in chunks of this many bytes")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("stream")
                .long("stream")
                .help("Tokenize in chunks of the configured stream.chunk_size")
                .action(ArgAction::SetTrue)
                .conflicts_with("chunk-size"),
        )
        .arg(
            Arg::new("wrap")
                .long("wrap")
                .help("Wrap html output in a <pre> element")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["chunk-size", "stream"]),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log to stderr (-v debug, -vv trace)")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("list-languages")
                .long("list-languages")
                .help("List registered languages and their file extensions")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli().get_matches();
    logging::init(matches.get_count("verbose"));

    let config = load_config(matches.get_one::<String>("config"));
    let registry = config.registry().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if matches.get_flag("list-languages") {
        handle_list_languages_command(&registry);
        return;
    }

    handle_highlight_command(&matches, &config, &registry);
}

fn load_config(path: Option<&String>) -> TintedConfig {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

fn read_input(path: &str) -> String {
    let result = if path == "-" {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input).map(|_| input)
    } else {
        std::fs::read_to_string(path)
    };
    result.unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    })
}

/// Explicit language, else the one registered for the file extension, else the default.
fn resolve_language(
    explicit: Option<&String>,
    path: &str,
    registry: &Registry,
    config: &TintedConfig,
) -> String {
    if let Some(language) = explicit {
        return language.clone();
    }
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| registry.for_extension(ext))
        .map(|grammar| grammar.name().to_string())
        .unwrap_or_else(|| config.render.default_language.clone())
}

/// Handle the highlight command
fn handle_highlight_command(matches: &ArgMatches, config: &TintedConfig, registry: &Registry) {
    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless listing languages");
    let format = matches.get_one::<String>("format").unwrap();
    let chunk_size = stream_chunk_size(matches, config);
    let wrap = matches.get_flag("wrap");

    if wrap && format != "html" {
        eprintln!("--wrap only applies to html output");
        std::process::exit(1);
    }

    let input = read_input(path);
    let language = resolve_language(matches.get_one::<String>("language"), path, registry, config);
    debug!(%language, %format, bytes = input.len(), "highlighting");

    let highlighter = Highlighter::new(registry, config.html_options());
    let mut stdout = io::stdout().lock();
    let written = match (format.as_str(), chunk_size) {
        ("html", _) if wrap => {
            let mut block = CodeBlock::new(input.as_str())
                .with_attribute(highlighter.options().language_attribute.as_str(), language.as_str());
            highlighter.highlight_element(&mut block);
            writeln!(stdout, "{}", block.to_html())
        }
        ("html", Some(size)) => highlighter
            .highlight_stream(&input, &language, size)
            .try_for_each(|chunk| stdout.write_all(chunk.as_bytes())),
        ("html", None) => stdout.write_all(highlighter.highlight(&input, &language).as_bytes()),
        (format, size) => {
            let tokens = collect_tokens(registry, config, &input, &language, size);
            if format == "json" {
                let json = serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| {
                    eprintln!("Error formatting tokens: {}", e);
                    std::process::exit(1);
                });
                writeln!(stdout, "{}", json)
            } else {
                tokens
                    .iter()
                    .try_for_each(|token| writeln!(stdout, "{}", token))
            }
        }
    };

    if let Err(e) = written.and_then(|_| stdout.flush()) {
        eprintln!("Error writing output: {}", e);
        std::process::exit(1);
    }
}

/// Explicit `--chunk-size`, else the configured size when `--stream` is set, else no streaming.
fn stream_chunk_size(matches: &ArgMatches, config: &TintedConfig) -> Option<usize> {
    matches
        .get_one::<usize>("chunk-size")
        .copied()
        .or_else(|| matches.get_flag("stream").then(|| config.stream.chunk_size))
}

/// Tokens for the json and tokens formats; chunked when a chunk size is given.
fn collect_tokens(
    registry: &Registry,
    config: &TintedConfig,
    input: &str,
    language: &str,
    chunk_size: Option<usize>,
) -> Vec<Token> {
    match chunk_size {
        Some(size) => {
            let options = StreamOptions {
                chunk_size: size,
                ..config.stream_options()
            };
            TokenStream::new(registry.get(language), input, options)
                .flatten()
                .collect()
        }
        None => registry.tokenize(input, language),
    }
}

/// Handle the list-languages command
fn handle_list_languages_command(registry: &Registry) {
    println!("Available languages:\n");
    for name in registry.list_languages() {
        let extensions = registry
            .get(&name)
            .map(|grammar| grammar.extensions().join(", "))
            .unwrap_or_default();
        println!("  {}", name);
        if !extensions.is_empty() {
            println!("    {}", extensions);
        }
    }
}
