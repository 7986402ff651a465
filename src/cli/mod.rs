//! Command-line interface for vcf-header-tags.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **parse**: Parse one or more `<TAG=value,...>` header lines against a tag contract
//! - **check**: Scan the meta-information lines of a VCF header
//!
//! ## Usage
//!
//! ```text
//! # Parse a single line
//! vcf-header-tags parse '<ID=DP,Number=1,Type=Integer,Description="Depth">' \
//!     --required ID,Number,Type,Description --optional Source,Version
//!
//! # Check a whole header, including bgzipped files
//! vcf-header-tags check sample.vcf.gz
//!
//! # Pipe from bcftools
//! bcftools view -h sample.bcf | vcf-header-tags check - --format json
//! ```

use clap::{Parser, Subcommand};

use crate::core::version::VcfVersion;

pub mod check;
pub mod parse;

#[derive(Parser)]
#[command(name = "vcf-header-tags")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Parse and validate structured VCF header lines")]
#[command(
    long_about = "vcf-header-tags parses the <TAG=value,...> meta-information lines of VCF headers.\n\nIt decodes quoted values and their escapes, and checks the order of tags against:\n- a required-tag order, matched left to right\n- an optional-tag set, allowed only after all required tags"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse individual header lines
    Parse(parse::ParseArgs),

    /// Check all meta-information lines of a VCF header
    Check(check::CheckArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Parse a `--vcf-version` value (`VCFv4.2`, `4.2`, ...)
pub(crate) fn parse_version_arg(s: &str) -> Result<VcfVersion, String> {
    s.parse::<VcfVersion>().map_err(|e| e.to_string())
}

/// Escape tabs and newlines so a value stays on one TSV cell
pub(crate) fn tsv_escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\t', "\\t")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_version_arg() {
        assert_eq!(parse_version_arg("4.2"), Ok(VcfVersion::Vcf4_2));
        assert!(parse_version_arg("bogus").is_err());
    }

    #[test]
    fn test_tsv_escape() {
        assert_eq!(tsv_escape("a\tb\nc"), "a\\tb\\nc");
        assert_eq!(tsv_escape("plain"), "plain");
    }
}
