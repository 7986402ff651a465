use std::io;
use std::path::PathBuf;

use clap::Args;

use crate::cli::{parse_version_arg, tsv_escape, OutputFormat};
use crate::core::version::VcfVersion;
use crate::parsing::vcf::{
    scan_header_file, scan_header_reader, HeaderRecord, HeaderReport, VersionSource,
};

#[derive(Args)]
pub struct CheckArgs {
    /// Input VCF (plain, gzip or bgzip). Use '-' for stdin (expects header text)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Version to assume when the header has no ##fileformat line
    #[arg(long, default_value = "VCFv4.2", value_parser = parse_version_arg)]
    pub vcf_version: VcfVersion,
}

/// Execute check subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read or a header line is invalid.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CheckArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let report = if args.input.as_os_str() == "-" {
        scan_header_reader(io::stdin().lock(), args.vcf_version)?
    } else {
        scan_header_file(&args.input, args.vcf_version)?
    };

    if verbose {
        let structured = report
            .records
            .iter()
            .filter(|r| matches!(r, HeaderRecord::Structured { .. }))
            .count();
        eprintln!(
            "Read {} meta-information lines ({structured} structured) as {}",
            report.records.len(),
            report.version,
        );
    }

    match format {
        OutputFormat::Text => print_text_report(&args, &report),
        OutputFormat::Json => print_json_report(&report)?,
        OutputFormat::Tsv => print_tsv_report(&report),
    }

    Ok(())
}

fn print_text_report(args: &CheckArgs, report: &HeaderReport) {
    println!("Header Check");
    println!("{}", "=".repeat(60));
    println!("\nInput: {}", args.input.display());

    let source = match report.version_source {
        VersionSource::Declared => "declared",
        VersionSource::Fallback => "assumed",
    };
    println!("Version: {} ({source})", report.version);
    println!("Meta-information lines: {}", report.records.len());

    println!();
    for record in &report.records {
        match record {
            HeaderRecord::Structured {
                line_number,
                key,
                tags,
            } => println!("  {line_number:>5}  {key}  {tags}"),
            HeaderRecord::Unstructured {
                line_number,
                key,
                value,
            } => println!("  {line_number:>5}  {key}  {value}"),
        }
    }

    println!("\nAll header lines are valid.");
}

fn print_json_report(report: &HeaderReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn print_tsv_report(report: &HeaderReport) {
    println!("line\tkey\ttag\tvalue");
    for record in &report.records {
        match record {
            HeaderRecord::Structured {
                line_number,
                key,
                tags,
            } => {
                for (name, value) in tags.iter() {
                    println!(
                        "{line_number}\t{key}\t{}\t{}",
                        tsv_escape(name),
                        tsv_escape(value)
                    );
                }
            }
            HeaderRecord::Unstructured {
                line_number,
                key,
                value,
            } => println!("{line_number}\t{key}\t\t{}", tsv_escape(value)),
        }
    }
}
