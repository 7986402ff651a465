//! Scanner for VCF meta-information lines.
//!
//! VCF headers carry structured lines such as:
//! `##INFO=<ID=DP,Number=1,Type=Integer,Description="Total Depth">`
//!
//! Each structured line is run through the header-line parser with the
//! well-known contract for its key (see [`TagContract::for_key`]). The format
//! version comes from the `##fileformat=` line, or from a caller-supplied
//! fallback when the header has none.
//!
//! Reading stops at the `#CHROM` column header or the first data line, so only
//! the header of a large (optionally gzip/bgzip compressed) file is read.

use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::contract::TagContract;
use crate::core::header_line::ParsedHeaderLine;
use crate::core::version::VcfVersion;
use crate::parsing::error::HeaderLineError;
use crate::parsing::header_line::parse_line_with_contract;
use crate::utils::validation::{check_header_line_limit, has_gzip_extension, is_gzip};

#[derive(Error, Debug)]
pub enum VcfHeaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line_number}: unknown VCF version '{value}'")]
    UnknownVersion { line_number: usize, value: String },

    #[error("Line {line_number}: invalid meta-information line: {text}")]
    InvalidFormat { line_number: usize, text: String },

    #[error("Line {line_number}: invalid ##{key} line: {source}")]
    Line {
        line_number: usize,
        key: String,
        #[source]
        source: HeaderLineError,
    },

    #[error("Too many header lines: {0} exceeds maximum allowed (100000)")]
    TooManyLines(usize),
}

/// Where the version used for a header came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionSource {
    /// Declared by a `##fileformat=` (or `##format=`) line
    Declared,
    /// No format line was found; the caller's fallback was used
    Fallback,
}

/// One meta-information line of a header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HeaderRecord {
    /// `##KEY=<TAG=value,...>`
    Structured {
        line_number: usize,
        key: String,
        tags: ParsedHeaderLine,
    },
    /// `##KEY=value`
    Unstructured {
        line_number: usize,
        key: String,
        value: String,
    },
}

impl HeaderRecord {
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Structured { key, .. } | Self::Unstructured { key, .. } => key,
        }
    }

    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::Structured { line_number, .. } | Self::Unstructured { line_number, .. } => {
                *line_number
            }
        }
    }
}

/// Result of scanning a header
#[derive(Debug, Clone, Serialize)]
pub struct HeaderReport {
    pub version: VcfVersion,
    pub version_source: VersionSource,
    /// All meta-information lines except the format line, in file order
    pub records: Vec<HeaderRecord>,
}

impl HeaderReport {
    /// Structured records with the given key
    pub fn structured<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a ParsedHeaderLine> {
        self.records.iter().filter_map(move |r| match r {
            HeaderRecord::Structured { key: k, tags, .. } if k == key => Some(tags),
            _ => None,
        })
    }
}

/// Scan a VCF file's header, decompressing gzip/bgzip input as needed.
///
/// # Errors
///
/// Returns `VcfHeaderError::Io` if the file cannot be read, or any error of
/// [`scan_header_text`].
pub fn scan_header_file(path: &Path, fallback: VcfVersion) -> Result<HeaderReport, VcfHeaderError> {
    let file = std::fs::File::open(path)?;
    let mut reader = BufReader::new(file);

    let compressed = is_gzip(reader.fill_buf()?) || has_gzip_extension(path);
    debug!(path = %path.display(), compressed, "Scanning VCF header");

    if compressed {
        scan_header_reader(BufReader::new(MultiGzDecoder::new(reader)), fallback)
    } else {
        scan_header_reader(reader, fallback)
    }
}

/// Scan VCF header text.
///
/// # Errors
///
/// Returns `VcfHeaderError::UnknownVersion` for an unrecognised format line,
/// `VcfHeaderError::InvalidFormat` for a `##` line without `=`,
/// `VcfHeaderError::Line` when a structured line fails to parse, or
/// `VcfHeaderError::TooManyLines` if the header is too long.
pub fn scan_header_text(text: &str, fallback: VcfVersion) -> Result<HeaderReport, VcfHeaderError> {
    scan_header_reader(text.as_bytes(), fallback)
}

/// Scan a VCF header from any buffered reader
///
/// # Errors
///
/// See [`scan_header_text`]; read failures are returned as `VcfHeaderError::Io`.
pub fn scan_header_reader<R: BufRead>(
    reader: R,
    fallback: VcfVersion,
) -> Result<HeaderReport, VcfHeaderError> {
    let meta_lines = read_meta_lines(reader)?;

    let mut declared = None;
    for (line_number, line) in &meta_lines {
        if let Some(value) = format_line_value(line) {
            let version =
                VcfVersion::from_header_line(line).ok_or_else(|| VcfHeaderError::UnknownVersion {
                    line_number: *line_number,
                    value: value.to_string(),
                })?;
            declared = Some(version);
            break;
        }
    }

    let (version, version_source) = match declared {
        Some(version) => (version, VersionSource::Declared),
        None => {
            warn!("No ##fileformat line found, assuming {fallback}");
            (fallback, VersionSource::Fallback)
        }
    };

    let mut records = Vec::with_capacity(meta_lines.len());
    for (line_number, line) in meta_lines {
        if format_line_value(&line).is_some() {
            continue;
        }
        records.push(parse_meta_line(line_number, &line, version)?);
    }

    debug!(
        version = %version,
        records = records.len(),
        "Scanned VCF header"
    );

    Ok(HeaderReport {
        version,
        version_source,
        records,
    })
}

/// Collect `##` lines with their 1-based line numbers, stopping at `#CHROM` or data
fn read_meta_lines<R: BufRead>(reader: R) -> Result<Vec<(usize, String)>, VcfHeaderError> {
    let mut meta_lines = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();

        if line.trim().is_empty() {
            continue;
        }
        if !line.starts_with("##") {
            break;
        }

        // Check line limit for DOS protection
        if check_header_line_limit(meta_lines.len()).is_some() {
            return Err(VcfHeaderError::TooManyLines(meta_lines.len()));
        }
        meta_lines.push((index + 1, line.to_string()));
    }

    Ok(meta_lines)
}

/// The value of a `##fileformat=` or `##format=` line
fn format_line_value(line: &str) -> Option<&str> {
    line.strip_prefix("##fileformat=")
        .or_else(|| line.strip_prefix("##format="))
}

fn parse_meta_line(
    line_number: usize,
    line: &str,
    version: VcfVersion,
) -> Result<HeaderRecord, VcfHeaderError> {
    let (key, value) = line
        .strip_prefix("##")
        .and_then(|rest| rest.split_once('='))
        .ok_or_else(|| VcfHeaderError::InvalidFormat {
            line_number,
            text: line.to_string(),
        })?;

    if !value.starts_with('<') {
        return Ok(HeaderRecord::Unstructured {
            line_number,
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    let contract = TagContract::for_key(key, version);
    let tags = parse_line_with_contract(version, value, &contract).map_err(|source| {
        VcfHeaderError::Line {
            line_number,
            key: key.to_string(),
            source,
        }
    })?;

    Ok(HeaderRecord::Structured {
        line_number,
        key: key.to_string(),
        tags,
    })
}
