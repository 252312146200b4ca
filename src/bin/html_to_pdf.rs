//! html-to-pdf – converts the HTML edition of the report with wkhtmltopdf.
//!
//! Usage:
//!   html-to-pdf
//!
//! Reads `docs/planejamento-bi-ia.html` and writes
//! `docs/planejamento-bi-ia.pdf`, both relative to the working directory.

use std::{env, io, process};

use planejamento_pdf::converter::{run, ConverterConfig, Wkhtmltopdf};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other => {
                eprintln!("Unexpected argument: {other}");
                print_usage(&args[0]);
                process::exit(1);
            }
        }
    }

    let config = ConverterConfig::default();
    match run(&config, &Wkhtmltopdf, &mut io::stdout()) {
        Ok(outcome) => process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error writing output: {e}");
            process::exit(1);
        }
    }
}

fn print_usage(prog: &str) {
    eprintln!("html-to-pdf – converts the report HTML to PDF via wkhtmltopdf");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {prog}");
    eprintln!();
    eprintln!("Input:  docs/planejamento-bi-ia.html");
    eprintln!("Output: docs/planejamento-bi-ia.pdf");
    eprintln!("Requires `wkhtmltopdf` on PATH.");
    eprintln!();
    eprintln!("Flags:");
    eprintln!("  --help         Print this message");
}
