//! # vcf-header-tags
//!
//! A library for parsing the structured meta-information lines of VCF headers.
//!
//! VCF headers describe INFO, FORMAT, FILTER, ALT and contig entries with lines like
//! `##INFO=<ID=DP,Number=1,Type=Integer,Description="Total Depth">`. The bracketed
//! part is a comma-separated list of `TAG=value` pairs whose values may be quoted,
//! with `\"` and `\\` escapes inside the quotes.
//!
//! `vcf-header-tags` turns such a line into an ordered tag map and checks the tags
//! against a contract:
//!
//! - **Required tags**: must be the first tags of the line, in order
//! - **Optional tags**: allowed in any order once all required tags are seen (VCF 4.x)
//! - **Tag count cap**: with optional tags, a line may hold at most required + optional tags
//!
//! Required tags that are absent are not reported; the parser proves the order of the
//! tags present, not their presence.
//!
//! ## Example
//!
//! ```rust
//! use vcf_header_tags::{parse_line_with_optional, VcfVersion};
//!
//! let line = r#"<ID=AF,Number=A,Type=Float,Description="Allele \"Frequency\"",Source=dbsnp>"#;
//! let tags = parse_line_with_optional(
//!     VcfVersion::Vcf4_2,
//!     line,
//!     &["ID", "Number", "Type", "Description"],
//!     &["Source", "Version"],
//! )
//! .unwrap();
//!
//! assert_eq!(tags.get("Description"), Some(r#"Allele "Frequency""#));
//! assert_eq!(tags.get("Source"), Some("dbsnp"));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Versions, tag contracts, and the parsed tag map
//! - [`parsing`]: Tokenizer, validator, line entry points, and the header scanner
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::contract::TagContract;
pub use crate::core::header_line::{ParsedHeaderLine, TagPair};
pub use crate::core::version::VcfVersion;
pub use parsing::error::{ErrorKind, HeaderLineError};
pub use parsing::header_line::{parse_line, parse_line_with_contract, parse_line_with_optional};
