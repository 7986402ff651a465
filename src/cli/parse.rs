use std::io::{self, BufRead};

use anyhow::Context;
use clap::Args;
use tracing::debug;

use crate::cli::{parse_version_arg, tsv_escape, OutputFormat};
use crate::core::contract::TagContract;
use crate::core::header_line::ParsedHeaderLine;
use crate::core::version::VcfVersion;
use crate::parsing::header_line::parse_line_with_contract;
use crate::utils::validation::split_tag_list;

#[derive(Args)]
pub struct ParseArgs {
    /// Header lines to parse, e.g. '<ID=DP,Number=1>' or a full '##INFO=<...>' line.
    /// Reads one line per row from stdin when omitted; '-' splices stdin in at that position
    pub lines: Vec<String>,

    /// VCF version the lines belong to (e.g. VCFv4.2 or 4.2)
    #[arg(long, default_value = "VCFv4.2", value_parser = parse_version_arg)]
    pub vcf_version: VcfVersion,

    /// Comma-separated tags that must appear first, in this order
    #[arg(short, long, default_value = "")]
    pub required: String,

    /// Comma-separated tags allowed after the required ones (VCF 4.x only)
    #[arg(short, long, default_value = "")]
    pub optional: String,
}

/// Execute parse subcommand
///
/// # Errors
///
/// Returns an error if stdin cannot be read or any line fails to parse.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ParseArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let contract = TagContract::required(split_tag_list(&args.required))
        .with_optional(split_tag_list(&args.optional));

    if verbose {
        eprintln!(
            "Parsing as {} with {} required and {} optional tags",
            args.vcf_version,
            contract.required.len(),
            contract.optional.as_ref().map_or(0, std::collections::HashSet::len),
        );
    }

    let lines = read_lines(&args.lines, io::stdin().lock())?;
    let mut parsed = Vec::with_capacity(lines.len());

    for (index, line) in lines.iter().enumerate() {
        let number = index + 1;
        let tags = parse_line_with_contract(args.vcf_version, strip_meta_prefix(line), &contract)
            .with_context(|| format!("Failed to parse line {number}: {line}"))?;
        debug!(line = number, tags = tags.len(), "Parsed header line");
        parsed.push((number, tags));
    }

    match format {
        OutputFormat::Text => print_text_results(&parsed),
        OutputFormat::Json => print_json_results(&parsed)?,
        OutputFormat::Tsv => print_tsv_results(&parsed),
    }

    Ok(())
}

/// Expand the positional lines in order, splicing in stdin wherever '-' appears.
/// No positional lines means stdin only; stdin is drained at most once.
fn read_lines<R: BufRead>(args: &[String], stdin: R) -> anyhow::Result<Vec<String>> {
    let mut stdin = Some(stdin);
    let mut lines = Vec::new();

    let from_stdin = ["-".to_string()];
    let args = if args.is_empty() { &from_stdin[..] } else { args };

    for arg in args {
        if arg != "-" {
            lines.push(arg.clone());
            continue;
        }
        let Some(reader) = stdin.take() else {
            continue;
        };
        for line in reader.lines() {
            let line = line.context("Failed to read stdin")?;
            if !line.trim().is_empty() {
                lines.push(line.trim_end().to_string());
            }
        }
    }
    Ok(lines)
}

/// Accept a full `##KEY=<...>` meta line as well as the bare `<...>` value
fn strip_meta_prefix(line: &str) -> &str {
    line.strip_prefix("##")
        .and_then(|rest| rest.split_once('='))
        .map_or(line, |(_, value)| value)
}

fn print_text_results(parsed: &[(usize, ParsedHeaderLine)]) {
    for (number, tags) in parsed {
        println!("Line {number}: {} tags", tags.len());
        for (name, value) in tags.iter() {
            println!("  {name} = {value}");
        }
    }
}

fn print_json_results(parsed: &[(usize, ParsedHeaderLine)]) -> anyhow::Result<()> {
    let output: Vec<_> = parsed
        .iter()
        .map(|(number, tags)| {
            serde_json::json!({
                "line": number,
                "tags": tags,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(parsed: &[(usize, ParsedHeaderLine)]) {
    println!("line\ttag\tvalue");
    for (number, tags) in parsed {
        for (name, value) in tags.iter() {
            println!("{number}\t{}\t{}", tsv_escape(name), tsv_escape(value));
        }
    }
}
