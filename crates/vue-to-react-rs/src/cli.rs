//! CLI argument parsing.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};

/// Vue 2 single-file component to React class component converter.
#[derive(Debug, Parser)]
#[command(name = "vue-to-react-rs")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The .vue component file to convert
    pub input: Utf8PathBuf,

    /// Write the generated source to a file instead of stdout
    #[arg(long)]
    pub output: Option<Utf8PathBuf>,

    /// Override the generated class name (defaults to the file stem)
    #[arg(long)]
    pub name: Option<String>,

    /// Diagnostic output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress diagnostics
    #[arg(long)]
    pub quiet: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_invocation() {
        let args = Args::try_parse_from(["vue-to-react-rs", "counter.vue"]).unwrap();
        assert_eq!(args.input.as_str(), "counter.vue");
        assert!(args.output.is_none());
        assert!(args.name.is_none());
        assert!(!args.quiet);
        assert!(matches!(args.format, OutputFormat::Human));
    }

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from([
            "vue-to-react-rs",
            "counter.vue",
            "--output",
            "Counter.jsx",
            "--name",
            "Counter",
            "--format",
            "json",
            "--quiet",
        ])
        .unwrap();
        assert_eq!(args.output.as_ref().unwrap().as_str(), "Counter.jsx");
        assert_eq!(args.name.as_deref(), Some("Counter"));
        assert!(matches!(args.format, OutputFormat::Json));
        assert!(args.quiet);
    }
}
