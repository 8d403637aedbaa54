//! vue-to-react-rs: Vue 2 single-file component to React class converter.
//!
//! A thin driver around the core pipeline: read the file, parse it, run the
//! transform, print the generated source, and report diagnostics.

mod cli;
mod output;

use clap::Parser;
use cli::Args;
use miette::{miette, IntoDiagnostic, Result};
use vue_transformer::{component_name_from_path, transform, TransformOptions};

fn main() -> Result<()> {
    let args = Args::parse();

    let source = std::fs::read_to_string(&args.input)
        .map_err(|error| miette!("failed to read {}: {}", args.input, error))?;

    let parsed = vue_parser::parse(&source);
    let formatter = output::Formatter::new(args.format);

    if !parsed.errors.is_empty() && !args.quiet {
        eprint!(
            "{}",
            formatter.format_parse_errors(&parsed.errors, args.input.as_str(), &source)
        );
    }

    let component_name = args
        .name
        .clone()
        .unwrap_or_else(|| component_name_from_path(args.input.as_str()));
    let options = TransformOptions { component_name };

    let result = transform(&parsed.document, &options).map_err(|error| miette!("{}", error))?;

    if !result.diagnostics.is_empty() && !args.quiet {
        eprint!(
            "{}",
            formatter.format_diagnostics(&result.diagnostics, args.input.as_str(), &source)
        );
    }

    match &args.output {
        Some(path) => std::fs::write(path, &result.code).into_diagnostic()?,
        None => print!("{}", result.code),
    }

    Ok(())
}
