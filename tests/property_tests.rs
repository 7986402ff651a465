//! Property-based tests for tokenizing and rendering header lines.

use proptest::prelude::*;
use vcf_header_tags::parsing::tokenizer::tokenize;
use vcf_header_tags::{parse_line, ParsedHeaderLine, TagPair, VcfVersion};

fn tag_name() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_.]{0,11}"
}

/// Values that need no quoting
fn bare_value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.:;/+-]{0,16}"
}

/// Arbitrary printable values, including quotes, backslashes, commas and brackets
fn any_value() -> impl Strategy<Value = String> {
    "[ -~]{0,24}"
}

fn unique_pairs(
    value: impl Strategy<Value = String>,
) -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((tag_name(), value), 0..8).prop_map(|pairs| {
        let mut seen = std::collections::HashSet::new();
        pairs
            .into_iter()
            .filter(|(name, _)| seen.insert(name.clone()))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_bare_line_round_trips(pairs in unique_pairs(bare_value())) {
        let body: Vec<String> = pairs.iter().map(|(n, v)| format!("{n}={v}")).collect();
        let line = format!("<{}>", body.join(","));

        let tokens = tokenize(&line).unwrap();
        let got: Vec<(String, String)> = tokens.into_iter().map(|p| (p.name, p.value)).collect();
        prop_assert_eq!(got, pairs);
    }

    #[test]
    fn prop_whitespace_after_commas_is_ignored(pairs in unique_pairs(bare_value())) {
        let compact: Vec<String> = pairs.iter().map(|(n, v)| format!("{n}={v}")).collect();
        let spaced = format!("<{}>", compact.join(",  "));
        let compact = format!("<{}>", compact.join(","));

        prop_assert_eq!(tokenize(&spaced).unwrap(), tokenize(&compact).unwrap());
    }

    #[test]
    fn prop_render_then_parse(pairs in unique_pairs(any_value())) {
        let line: ParsedHeaderLine = pairs
            .iter()
            .map(|(n, v)| TagPair::new(n.as_str(), v.as_str()))
            .collect();

        let rendered = line.to_line();
        let reparsed = parse_line(VcfVersion::Vcf4_2, &rendered, &[]).unwrap();
        prop_assert_eq!(reparsed, line);
    }

    #[test]
    fn prop_escaped_value_decodes(value in any_value()) {
        let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
        let line = format!("<ID=x,Description=\"{escaped}\">");
        let parsed = parse_line(VcfVersion::Vcf4_2, &line, &["ID", "Description"]).unwrap();
        prop_assert_eq!(parsed.get("Description"), Some(value.as_str()));
    }

    #[test]
    fn prop_tokenize_never_panics(line in "\\PC{0,64}") {
        let _ = tokenize(&line);
        let _ = tokenize(&format!("<{line}>"));
    }
}
