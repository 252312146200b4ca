//! generate-pdf – renders the planning report natively.
//!
//! Usage:
//!   generate-pdf
//!
//! Writes `docs/planejamento-bi-ia.pdf` relative to the working directory.

use std::{env, io, process};

use planejamento_pdf::native::{generate_report, write_fallback_guidance, RenderConfig};

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

    println!("Gerando PDF do planejamento...");
    match generate_report(&RenderConfig::default()) {
        Ok(summary) => {
            println!("✅ PDF criado com sucesso: {}", summary.output_path.display());
        }
        Err(e) => {
            println!("❌ Erro ao gerar PDF: {e}");
            if let Err(e) = write_fallback_guidance(&mut io::stdout()) {
                eprintln!("Error writing output: {e}");
            }
            process::exit(1);
        }
    }
}

fn print_usage(prog: &str) {
    eprintln!("generate-pdf – renders the BI + IA planning report to PDF");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {prog}");
    eprintln!();
    eprintln!("Output: docs/planejamento-bi-ia.pdf (A4, 2 cm margins)");
    eprintln!();
    eprintln!("Flags:");
    eprintln!("  --help         Print this message");
}
