//! Header line parsing through the public API.
//!
//! Covers quote/escape decoding, the tag contract table, and the version gate
//! for pre-4.0 dialects.

use vcf_header_tags::{
    parse_line, parse_line_with_contract, parse_line_with_optional, ErrorKind, HeaderLineError,
    TagContract, VcfVersion,
};

const LINE: &str = r#"<ID=X,Description="Y">"#;

#[test]
fn test_parse_vcf4_header_line() {
    let values = parse_line(
        VcfVersion::Vcf4_2,
        r#"<ID=SnpCluster,Description="SNPs found in clusters">"#,
        &[],
    )
    .unwrap();
    assert_eq!(values.len(), 2);
    assert_eq!(values.get("ID"), Some("SnpCluster"));
    assert_eq!(values.get("Description"), Some("SNPs found in clusters"));

    let values = parse_line(
        VcfVersion::Vcf4_2,
        r#"<ID=ANNOTATION,Description="ANNOTATION != \"NA\" || ANNOTATION <= 0.01">"#,
        &[],
    )
    .unwrap();
    assert_eq!(values.len(), 2);
    assert_eq!(values.get("ID"), Some("ANNOTATION"));
    assert_eq!(
        values.get("Description"),
        Some(r#"ANNOTATION != "NA" || ANNOTATION <= 0.01"#)
    );

    let values = parse_line(
        VcfVersion::Vcf4_2,
        r#"<ID=ANNOTATION,Description="ANNOTATION \\= \"NA\" || ANNOTATION <= 0.01">"#,
        &[],
    )
    .unwrap();
    assert_eq!(
        values.get("Description"),
        Some(r#"ANNOTATION \= "NA" || ANNOTATION <= 0.01"#)
    );

    let values = parse_line(
        VcfVersion::Vcf4_2,
        r#"<ID=ANNOTATION,Description="ANNOTATION \n with a newline in it">"#,
        &[],
    )
    .unwrap();
    assert_eq!(
        values.get("Description"),
        Some(r"ANNOTATION \n with a newline in it")
    );
}

#[test]
fn test_escape_decoding() {
    let decode = |quoted: &str| {
        let line = format!("<V={quoted}>");
        parse_line(VcfVersion::Vcf4_2, &line, &[])
            .unwrap()
            .get("V")
            .map(str::to_string)
    };

    assert_eq!(decode(r#""\\""#).as_deref(), Some(r"\"));
    assert_eq!(decode(r#""\"""#).as_deref(), Some(r#"""#));
    assert_eq!(decode(r#""\n""#).as_deref(), Some(r"\n"));
    assert_eq!(decode(r#""\\\\""#).as_deref(), Some(r"\\"));
}

#[test]
fn test_unclosed_quotes_fail() {
    for line in [
        r#"<ID=ANNOTATION,Description="ANNOTATION \n with a newline in it>"#,
        r#"<ID=ANNOTATION,Description="ANNOTATION \n with a newline in it\">"#,
    ] {
        let err = parse_line(VcfVersion::Vcf4_2, line, &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Quoting);
        assert!(err.to_string().contains("unclosed quote"), "{err}");
    }
}

#[test]
fn test_count_cap() {
    let err = parse_line_with_optional(
        VcfVersion::Vcf4_2,
        r#"<ID=X,Description="Y",Extra=E>"#,
        &["ID"],
        &["Description"],
    )
    .unwrap_err();
    assert_eq!(err, HeaderLineError::UnexpectedTagCount(3));
    assert!(err.to_string().contains("Unexpected tag count 3"));
}

#[test]
fn test_wrong_order() {
    let err = parse_line(VcfVersion::Vcf4_2, LINE, &["Description", "ID"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Sequence);
    assert!(err.to_string().contains("Tag ID in wrong order"));
}

#[test]
fn test_optional_before_required() {
    let err =
        parse_line_with_optional(VcfVersion::Vcf4_2, LINE, &["Description"], &["ID"]).unwrap_err();
    assert!(err
        .to_string()
        .contains("Optional tag ID must be listed after all expected tags"));
}

#[test]
fn test_unexpected_tag() {
    let err = parse_line(VcfVersion::Vcf4_2, LINE, &["ID", "Desc"]).unwrap_err();
    assert!(err.to_string().contains("Unexpected tag Description"));

    let err = parse_line_with_optional(VcfVersion::Vcf4_2, LINE, &["ID"], &["Desc"]).unwrap_err();
    assert!(err.to_string().contains("Unexpected tag Description"));
}

#[test]
fn test_vcf3_fails_optional_tags() {
    for version in [VcfVersion::Vcf3_2, VcfVersion::Vcf3_3] {
        let result = parse_line_with_optional(version, LINE, &["ID"], &["Description"]);
        assert_eq!(
            result.unwrap_err(),
            HeaderLineError::UnsupportedOptionalTags(version)
        );
    }
}

#[test]
fn test_empty_lines() {
    assert!(parse_line_with_optional(VcfVersion::Vcf4_2, "<>", &[], &[])
        .unwrap()
        .is_empty());
    assert!(parse_line(VcfVersion::Vcf4_2, "<>", &["ID"]).unwrap().is_empty());
    assert!(
        parse_line_with_optional(VcfVersion::Vcf4_2, "<>", &[], &["ID", "Description"])
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_missing_brackets() {
    let err = parse_line(VcfVersion::Vcf4_2, "ID=X,Description=Y", &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Structure);
}

#[test]
fn test_well_known_info_contract() {
    let contract = TagContract::for_key("INFO", VcfVersion::Vcf4_2);

    let values = parse_line_with_contract(
        VcfVersion::Vcf4_2,
        r#"<ID=DP,Number=1,Type=Integer,Description="Total Depth",Version="3">"#,
        &contract,
    )
    .unwrap();
    assert_eq!(values.get("Version"), Some("3"));

    // Pre-4.0 INFO contracts carry no optional tags
    let contract = TagContract::for_key("INFO", VcfVersion::Vcf3_3);
    assert!(parse_line_with_contract(
        VcfVersion::Vcf3_3,
        r#"<ID=DP,Number=1,Type=Integer,Description="Total Depth">"#,
        &contract,
    )
    .is_ok());
}

#[test]
fn test_parse_is_thread_safe() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let line = format!(r#"<ID=T{i},Description="thread {i}">"#);
                parse_line(VcfVersion::Vcf4_2, &line, &["ID", "Description"]).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let values = handle.join().unwrap();
        assert_eq!(values.get("ID"), Some(format!("T{i}").as_str()));
    }
}

#[test]
fn test_tag_order_distinguishes_lines() {
    let forward = parse_line(VcfVersion::Vcf4_2, "<ID=X,Description=Y>", &[]).unwrap();
    let reversed = parse_line(VcfVersion::Vcf4_2, "<Description=Y,ID=X>", &[]).unwrap();
    assert_ne!(forward, reversed);
    assert_eq!(
        forward,
        parse_line(VcfVersion::Vcf4_2, "<ID=X, Description=Y>", &[]).unwrap()
    );
}
