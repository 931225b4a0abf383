//! Rill Compiler CLI

use rillc::commands::{lex_file, parse_lex_options};

fn main() {
    rillc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => match parse_lex_options(&args[2..]) {
            Ok((path, options)) => lex_file(path, &options),
            Err(msg) => {
                eprintln!("error: {msg}");
                eprintln!("Usage: rillc lex <file.rill> [--format=table|debug] [--show-source]");
                std::process::exit(1);
            }
        },
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Rill Compiler {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Rill Compiler");
    println!();
    println!("Usage: rillc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.rill>      Tokenize and display tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --format=<format>    Token listing: table (default), debug");
    println!("  --show-source        Print the source text before the tokens");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable tracing, e.g. RUST_LOG=rill_lexer=trace");
    println!("  RILL_LOG_TREE        Render tracing output as an indented tree");
}
