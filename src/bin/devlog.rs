//! Command-line interface for devlog
//! This binary queries devlog change-tracker documents from the shell.
//!
//! Usage:
//!   devlog lookup `<document>` `<file>` `<line>` [--format `<format>`]  - Resolve the change touching a line
//!   devlog hashes `<document>` [--format `<format>`]                  - Dump the per-line content-hash index
//!   devlog files `<document>`                                       - List the tracked files in a document
//!   devlog latest `<dir>`                                           - Print the freshest document in a directory

use clap::{Arg, Command};
use std::path::Path;

use devlog::devlog::ast::lookup::{format_at_line, lookup};
use devlog::devlog::discovery;
use devlog::devlog::hash_index::index_hashes;
use devlog::devlog::parser::parse;

fn main() {
    let matches = Command::new("devlog")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for querying devlog change-tracker documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("lookup")
                .about("Resolve the tracked change touching a line")
                .arg(
                    Arg::new("document")
                        .help("Path to the tracker document")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("file")
                        .help("Tracked file path, exactly as spelled in the document")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("line")
                        .help("Line number in the tracked file")
                        .required(true)
                        .index(3),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text', 'json' or 'yaml')")
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("hashes")
                .about("Dump the per-line content-hash index")
                .arg(
                    Arg::new("document")
                        .help("Path to the tracker document")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('text', 'json' or 'yaml')")
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("files")
                .about("List the tracked files in a document")
                .arg(
                    Arg::new("document")
                        .help("Path to the tracker document")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("latest")
                .about("Print the most recently modified tracker document in a directory")
                .arg(
                    Arg::new("dir")
                        .help("Directory holding tracker documents")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("lookup", sub)) => {
            let document = sub.get_one::<String>("document").unwrap();
            let file = sub.get_one::<String>("file").unwrap();
            let line = sub.get_one::<String>("line").unwrap();
            let format = sub.get_one::<String>("format").unwrap();
            handle_lookup(document, file, line, format);
        }
        Some(("hashes", sub)) => {
            let document = sub.get_one::<String>("document").unwrap();
            let format = sub.get_one::<String>("format").unwrap();
            handle_hashes(document, format);
        }
        Some(("files", sub)) => {
            let document = sub.get_one::<String>("document").unwrap();
            handle_files(document);
        }
        Some(("latest", sub)) => {
            let dir = sub.get_one::<String>("dir").unwrap();
            handle_latest(dir);
        }
        _ => unreachable!(),
    }
}

/// Handle the lookup command
fn handle_lookup(document: &str, file: &str, line: &str, format: &str) {
    let line: u32 = match line.parse() {
        Ok(line) => line,
        Err(_) => fail(&format!("Invalid line number: '{}'", line)),
    };
    let text = read_or_fail(document);
    let tree = parse(&text);
    match format {
        "text" => println!("{}", format_at_line(&tree, file, line)),
        "json" => {
            let result = lookup(&tree, file, line);
            match serde_json::to_string_pretty(&result) {
                Ok(rendered) => println!("{}", rendered),
                Err(e) => fail(&format!("Failed to render result: {}", e)),
            }
        }
        "yaml" => {
            let result = lookup(&tree, file, line);
            match serde_yaml::to_string(&result) {
                Ok(rendered) => print!("{}", rendered),
                Err(e) => fail(&format!("Failed to render result: {}", e)),
            }
        }
        other => fail(&format!("Unknown format: '{}'", other)),
    }
}

/// Handle the hashes command
fn handle_hashes(document: &str, format: &str) {
    let text = read_or_fail(document);
    let index = index_hashes(&text);
    match format {
        "text" => {
            for (label, per_line) in &index {
                for (line, digest) in per_line {
                    println!("{}:{}:{}", label, line, digest);
                }
            }
        }
        "json" => match serde_json::to_string_pretty(&index) {
            Ok(rendered) => println!("{}", rendered),
            Err(e) => fail(&format!("Failed to render index: {}", e)),
        },
        "yaml" => match serde_yaml::to_string(&index) {
            Ok(rendered) => print!("{}", rendered),
            Err(e) => fail(&format!("Failed to render index: {}", e)),
        },
        other => fail(&format!("Unknown format: '{}'", other)),
    }
}

/// Handle the files command
fn handle_files(document: &str) {
    let text = read_or_fail(document);
    for file in parse(&text) {
        let entries: usize = file.iter_scopes().map(|scope| scope.entries.len()).sum();
        println!("{} ({} scopes, {} entries)", file.path, file.scopes.len(), entries);
    }
}

/// Handle the latest command
fn handle_latest(dir: &str) {
    match discovery::latest_markdown_file(Path::new(dir)) {
        Some(path) => println!("{}", path.display()),
        None => fail(&format!("No tracker documents found in '{}'", dir)),
    }
}

fn read_or_fail(document: &str) -> String {
    match discovery::read_document(Path::new(document)) {
        Ok(text) => text,
        Err(e) => fail(&format!("Failed to read '{}': {}", document, e)),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}
