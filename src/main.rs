pub mod grammar;
use std::{
    fs,
    io::{BufRead, Write},
};

use grammar::pretty_print::DerivationOutput;
pub use grammar::{DerivationSearcher, Grammar};

const DEFAULT_GRAMMAR: &str = "S -> S + T | S - T | T
T -> T * F | T / F | F
F -> id";

fn print_help() {
    println!("Usage: derivation-explorer [options] [grammar file]");
    println!("Reads expressions from stdin and prints a leftmost derivation");
    println!("for each, until \"bye\" is entered.");
    println!("options:");
    println!("  -s SYMBOL: Start symbol (default: first non-terminal)");
    println!("  -l: Print derivations in LaTeX format");
    println!("  -j: Print derivations in JSON format");
    println!("  -h: Print this help");
}

enum OutputFormat {
    Plain,
    LaTeX,
    JSON,
}

fn main() {
    let args = std::env::args().skip(1).collect::<Vec<String>>();
    let mut output_format = OutputFormat::Plain;
    let mut start_override: Option<String> = None;
    let mut grammar_file: Option<String> = None;

    let mut i: usize = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-l" => output_format = OutputFormat::LaTeX,
            "-j" => output_format = OutputFormat::JSON,
            "-s" => {
                i += 1;
                if i == args.len() {
                    print_help();
                    return;
                }
                start_override = Some(args[i].clone());
            }
            _ => {
                if grammar_file.is_some() {
                    print_help();
                    return;
                }
                grammar_file = Some(args[i].clone());
            }
        }
        i += 1;
    }

    let input: String = match &grammar_file {
        Some(path) => fs::read_to_string(path).expect("Failed to read file"),
        None => DEFAULT_GRAMMAR.to_string(),
    };

    let g = Grammar::parse(&input).unwrap();
    let start = start_override
        .or_else(|| g.start_symbol_name().map(|s| s.to_string()))
        .expect("Grammar has no start symbol");

    println!("grammar:");
    println!("{}", g.to_production_output_vec().to_plaintext());

    let searcher = DerivationSearcher::new(&g);
    let stdin = std::io::stdin();
    loop {
        print!("\ninput expression:");
        std::io::stdout().flush().unwrap();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap() == 0 {
            return; // EOF
        }
        let expression = line.trim();
        if expression.eq_ignore_ascii_case("bye") {
            return;
        }

        println!("analysis:");
        let derivation = searcher.search(&start, expression);
        let output = DerivationOutput {
            expression,
            found: derivation.is_some(),
            steps: derivation.as_ref().map(|d| &d.steps[..]).unwrap_or(&[]),
        };
        println!(
            "{}",
            match output_format {
                OutputFormat::Plain => output.to_plaintext(),
                OutputFormat::LaTeX => output.to_latex(),
                OutputFormat::JSON => output.to_json(),
            }
        );
    }
}
