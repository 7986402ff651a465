//! Parsers for VCF header meta-information lines.
//!
//! This module provides:
//!
//! - **Tokenizer**: split `<TAG=value,...>` into ordered tag pairs, decoding quoted values
//! - **Validator**: check tag order against a [`TagContract`](crate::core::contract::TagContract)
//! - **Line entry points**: version gate, tokenize, and validate in one call
//! - **Header scanner**: run every `##KEY=<...>` line of a VCF header through the parser
//!
//! ## Example
//!
//! ```rust
//! use vcf_header_tags::parsing::vcf::scan_header_text;
//! use vcf_header_tags::VcfVersion;
//!
//! let header = "##fileformat=VCFv4.2\n##FILTER=<ID=q10,Description=\"Quality below 10\">\n#CHROM\tPOS\n";
//! let report = scan_header_text(header, VcfVersion::Vcf4_2).unwrap();
//! assert_eq!(report.records.len(), 1);
//! ```
//!
//! ## Quoting Rules
//!
//! | Raw text inside quotes | Decoded |
//! |-----|-------------|
//! | `\"` | `"` |
//! | `\\` | `\` |
//! | `\n` (or any other `\x`) | `\n` (kept as two characters) |
//! | `"` | ends the value |

pub mod error;
pub mod header_line;
pub mod tokenizer;
pub mod validator;
pub mod vcf;
