//! Core data types for VCF header-line parsing.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`VcfVersion`](version::VcfVersion): the header dialect in force, with its capabilities
//! - [`TagContract`](contract::TagContract): required-tag order and optional-tag set
//! - [`ParsedHeaderLine`](header_line::ParsedHeaderLine): ordered tag map produced by a parse

pub mod contract;
pub mod header_line;
pub mod version;
