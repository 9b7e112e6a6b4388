//! Integration tests for the citation module.
//!
//! These tests run realistic text and records through the public API,
//! crossing extraction, validation, formatting and assembly.

use citation_core::citation::{ENTRY_SEPARATOR, normalize_doi};
use citation_core::{
    BibliographicRecord, CitationMention, CitationStyle, assemble_bibliography,
    build_bibliography, extract_citations, format_citation, format_with_tag, parse_records_json,
    summarize_mentions, validate_record,
};

fn in_text(authors: &str, year: &str) -> CitationMention {
    CitationMention::InText {
        authors: authors.to_string(),
        year: year.to_string(),
    }
}

/// Test the narrative plus numbered example end to end.
#[test]
fn test_extract_narrative_and_numbered_paragraph() {
    let text = "According to Smith (2023), models improve accuracy. See also [4] for a survey.";
    let mentions = extract_citations(text);

    assert_eq!(
        mentions,
        vec![in_text("Smith", "2023"), CitationMention::Numbered { number: 4 }]
    );
}

/// Test a paragraph mixing every supported mention form.
#[test]
fn test_extract_realistic_paragraph() {
    let text = r"
Prior work on transformers (Vaswani et al., 2017) and attention (Bahdanau & Cho 2015)
established the baseline. Lee (2020) disagreed [1], while later surveys [2][3]
revisited the question (Müller, 2019).
";
    let mentions = extract_citations(text);
    let summary = summarize_mentions(&mentions);

    assert_eq!(summary.in_text, 4, "mentions: {mentions:?}");
    assert_eq!(summary.numbered, 3);
    assert_eq!(mentions[0], in_text("Vaswani et al.", "2017"));
    assert_eq!(mentions[1], in_text("Bahdanau & Cho", "2015"));
    assert_eq!(mentions[2], in_text("Lee", "2020"));
    assert_eq!(mentions[3], in_text("Müller", "2019"));
    assert_eq!(mentions[4], CitationMention::Numbered { number: 1 });
    assert_eq!(
        summary.format_message(),
        "Found 7 citations (4 in-text, 3 numbered)"
    );
}

/// Test that text without citation markers yields nothing.
#[test]
fn test_extract_plain_text_yields_nothing() {
    let text = "The results (see table) were obtained in 2023 with 95% accuracy [sic].";
    assert!(extract_citations(text).is_empty());
    assert!(extract_citations("").is_empty());
}

/// Test the three author branches of every style.
#[test]
fn test_author_branches_per_style() {
    let one = BibliographicRecord::new(["Smith, J."], 2023, "T");
    let two = BibliographicRecord::new(["Smith, J.", "Jones, K."], 2023, "T");
    let three = BibliographicRecord::new(["Smith, J.", "Jones, K.", "Lee, R."], 2023, "T");

    assert!(format_citation(&one, CitationStyle::Apa7).starts_with("Smith, J. (2023)"));
    assert!(format_citation(&two, CitationStyle::Apa7).starts_with("Smith, J. & Jones, K. (2023)"));
    assert!(format_citation(&three, CitationStyle::Apa7).starts_with("Smith, J. et al. (2023)"));

    assert!(format_citation(&two, CitationStyle::Mla9).starts_with("Smith, J., and Jones, K."));
    assert!(format_citation(&three, CitationStyle::Mla9).starts_with("Smith, J., et al."));

    assert!(format_citation(&three, CitationStyle::Chicago17)
        .starts_with("Smith, J., Jones, K., Lee, R."));

    assert!(format_citation(&two, CitationStyle::Harvard).starts_with("Smith, J. and Jones, K. 2023"));
    assert!(format_citation(&three, CitationStyle::Harvard).starts_with("Smith, J. et al. 2023"));
}

/// Test that formatting is deterministic across styles.
#[test]
fn test_formatting_is_deterministic() {
    let record = BibliographicRecord::new(["Smith, J.", "Jones, K."], 2023, "Deep Learning")
        .with_journal("Nature")
        .with_volume("12")
        .with_issue("3")
        .with_pages("1-10")
        .with_doi("10.1234/abc");

    for style in CitationStyle::ALL {
        assert_eq!(
            format_citation(&record, style),
            format_citation(&record.clone(), style)
        );
    }
}

/// Test that an unsupported tag renders like APA 7th.
#[test]
fn test_unknown_style_tag_matches_apa() {
    let record = BibliographicRecord::new(["Smith, J."], 2023, "Title").with_journal("Nature");
    assert_eq!(
        format_with_tag(&record, "Vancouver"),
        format_citation(&record, CitationStyle::Apa7)
    );
    assert_eq!(
        format_with_tag(&record, "mla"),
        format_citation(&record, CitationStyle::Mla9)
    );
}

/// Test that no style leaks empty placeholders for missing optional fields.
#[test]
fn test_missing_optional_fields_leave_no_separators() {
    let record = BibliographicRecord::new(["Smith, J."], 2023, "Title");
    for style in CitationStyle::ALL {
        let text = format_citation(&record, style);
        for artifact in ["()", ", ,", "vol. ,", "no. ,", "pp. ", "..", "  "] {
            assert!(
                !text.contains(artifact),
                "{style} output {text:?} contains {artifact:?}"
            );
        }
    }
}

/// Test validator acceptance and rejection cases.
#[test]
fn test_validator_cases() {
    assert!(validate_record(&BibliographicRecord::new(["Smith, J."], 2023, "Title")));
    assert!(!validate_record(&BibliographicRecord::new(Vec::<String>::new(), 2023, "Title")));
    assert!(!validate_record(&BibliographicRecord::new(["Smith"], "2023a", "Title")));
    assert!(!validate_record(&BibliographicRecord::new(["Smith"], 2023, "")));
    assert!(!validate_record(&BibliographicRecord::new(["Smith"], 1800, "Title")));
}

/// Test assembly ordering and separators.
#[test]
fn test_assembly_orders_entries_lexicographically() {
    let records = vec![
        BibliographicRecord::new(["Smith, J."], 2020, "Later work"),
        BibliographicRecord::new(["Adams, B."], 2019, "Earlier work"),
    ];
    let bibliography = assemble_bibliography(&records, CitationStyle::Apa7);
    let entries: Vec<&str> = bibliography.split(ENTRY_SEPARATOR).collect();

    assert_eq!(entries.len(), 2);
    assert!(entries[0].starts_with("Adams"));
    assert!(entries[1].starts_with("Smith"));
    assert_eq!(assemble_bibliography(&[], CitationStyle::Ieee), "");
}

/// Test the JSON-to-bibliography pipeline with one invalid record.
#[test]
fn test_json_records_to_bibliography() {
    let input = r#"[
        {"authors": ["Turing, A."], "year": 1950, "title": "Computing Machinery and Intelligence",
         "journal": "Mind", "volume": "59", "issue": "236", "pages": "433-460",
         "doi": "https://doi.org/10.1093/mind/LIX.236.433"},
        {"authors": ["Lovelace, A."], "year": "1843", "title": "Notes"},
        {"authors": "Shannon, C. E.; Weaver, W.", "year": 1948, "title": "A Mathematical Theory of Communication"}
    ]"#;
    let records = parse_records_json(input).unwrap();
    let outcome = build_bibliography(&records, CitationStyle::Apa7);

    assert_eq!(outcome.accepted, 2);
    assert_eq!(outcome.rejected.len(), 1);
    assert_eq!(outcome.rejected[0].index, 1);
    assert_eq!(
        outcome.bibliography,
        "Shannon, C. E. & Weaver, W. (1948). A Mathematical Theory of Communication.\n\n\
         Turing, A. (1950). Computing Machinery and Intelligence. Mind, 59(236), 433-460. \
         https://doi.org/10.1093/mind/LIX.236.433"
    );
    assert_eq!(
        outcome.summary().format_message(),
        "Formatted 2 of 3 records (1 rejected)"
    );
}

/// Test that DOI prefixes never double up in rendered links.
#[test]
fn test_doi_prefix_normalized_in_output() {
    assert_eq!(normalize_doi("doi:10.5555/xyz"), "10.5555/xyz");
    let record = BibliographicRecord::new(["Smith"], 2023, "T").with_doi("doi:10.5555/xyz");
    let text = format_citation(&record, CitationStyle::Chicago17);
    assert!(text.ends_with("https://doi.org/10.5555/xyz"));
    assert!(!text.contains("doi.org/doi"));
}
