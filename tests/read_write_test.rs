//! Read/Write Integration Tests
//!
//! End-to-end behavior of the line reader and serializer:
//! - Sample config parsing and default tracking
//! - Comment/blank skipping and line-number attribution
//! - Fatal errors (missing `=`, unknown keys) with state guarantees
//! - Resumable reads via `first_line_number`
//! - Write/re-read equivalence and file-backed reads

mod common;

use std::io::{BufReader, Write};

use common::{SAMPLE_CONF, assert_all_default, sample_config};
use kvconf::{ConfigNode, Error, IntOption, StringOption};

// =============================================================================
// End-to-End Reading
// =============================================================================

#[test]
fn sample_config_end_to_end() {
    let mut config = sample_config();
    config.read(SAMPLE_CONF.as_bytes(), 1).unwrap();

    let key_a = config.get_as::<StringOption>("key_a").unwrap();
    assert_eq!(key_a.value(), "Alternate Value");
    assert!(!key_a.is_default());

    let key_b = config.get_as::<IntOption>("key_b").unwrap();
    assert_eq!(key_b.value(), 27);
    assert!(!key_b.is_default());

    // Untouched nodes stay at their defaults.
    assert!(config.get("ratio").unwrap().is_default());
    assert!(config.get("run_as").unwrap().is_default());
}

#[test]
fn comments_and_blanks_are_skipped_but_counted() {
    let mut config = sample_config();
    config
        .read("# comment\n\n  \nkey_a=v\n".as_bytes(), 1)
        .unwrap();
    assert_eq!(config.get_as::<StringOption>("key_a").unwrap().value(), "v");

    // The same input with a bad fourth line reports line 4.
    let mut config = sample_config();
    let err = config
        .read("# comment\n\n  \nnope=1\n".as_bytes(), 1)
        .unwrap_err();
    assert_eq!(err.line(), Some(4));
}

#[test]
fn empty_input_is_a_successful_no_op() {
    let mut config = sample_config();
    config.read("".as_bytes(), 1).unwrap();
    assert_all_default(&config);
}

// =============================================================================
// Error Attribution
// =============================================================================

#[test]
fn missing_equals_is_fatal_with_line_number() {
    let mut config = sample_config();
    let err = config.read("justtext\n".as_bytes(), 1).unwrap_err();

    assert!(err.is_parse_error());
    assert_eq!(err.line(), Some(1));
    assert_all_default(&config);
}

#[test]
fn unknown_key_is_its_own_error_kind() {
    let mut config = sample_config();
    let err = config.read("nope=1\n".as_bytes(), 1).unwrap_err();
    assert!(err.is_unknown_key());

    match err {
        Error::UnknownKey { line, ref key } => {
            assert_eq!(line, 1);
            assert_eq!(key, "nope");
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

#[test]
fn unknown_key_is_reported_case_normalized() {
    let mut config = sample_config();
    let err = config.read("  NoPe  =1\n".as_bytes(), 1).unwrap_err();
    assert!(matches!(err, Error::UnknownKey { line: 1, key } if key == "nope"));
}

#[test]
fn value_failure_wraps_the_node_error() {
    let mut config = sample_config();
    let err = config
        .read("key_a=fine\nkey_b=not a number\n".as_bytes(), 1)
        .unwrap_err();

    assert_eq!(err.line(), Some(2));
    match err {
        Error::Parse { source, .. } => assert!(matches!(*source, Error::InvalidInt(_))),
        other => panic!("expected Parse, got {other:?}"),
    }

    // Lines before the failure have already been applied.
    assert_eq!(
        config.get_as::<StringOption>("key_a").unwrap().value(),
        "fine",
    );
    // The failing node keeps its prior state.
    let key_b = config.get_as::<IntOption>("key_b").unwrap();
    assert!(key_b.is_default());
    assert_eq!(key_b.value(), 2);
}

#[test]
fn first_line_number_offsets_attribution() {
    let mut config = sample_config();
    let err = config
        .read("key_b=3\nbroken line\n".as_bytes(), 10)
        .unwrap_err();
    assert_eq!(err.line(), Some(11));
}

#[test]
fn resumed_read_continues_after_corrected_line() {
    let text = "key_a=one\nbad line here\nkey_b=5\n";

    let mut config = sample_config();
    let err = config.read(text.as_bytes(), 1).unwrap_err();
    assert_eq!(err.line(), Some(2));

    // Caller fixes line 2 and re-reads the remainder from its true offset.
    let mut config = sample_config();
    config.read("key_a=one\n".as_bytes(), 1).unwrap();
    config.read("key_b=5\n".as_bytes(), 3).unwrap();
    assert_eq!(config.get_as::<IntOption>("key_b").unwrap().value(), 5);
}

// =============================================================================
// Writing
// =============================================================================

fn sorted_lines(buf: &[u8]) -> Vec<String> {
    let mut lines: Vec<String> = std::str::from_utf8(buf)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect();
    lines.sort();
    lines
}

#[test]
fn write_emits_only_customized_entries() {
    let mut config = sample_config();
    config.read(SAMPLE_CONF.as_bytes(), 1).unwrap();

    let mut out = Vec::new();
    config.write(&mut out, false).unwrap();
    assert_eq!(sorted_lines(&out), ["key_a=Alternate Value", "key_b=27"]);
}

#[test]
fn write_with_defaults_covers_every_key() {
    let config = sample_config();
    let mut out = Vec::new();
    config.write(&mut out, true).unwrap();

    let lines = sorted_lines(&out);
    assert_eq!(lines.len(), config.len());
    assert!(lines.contains(&"key_b=2".to_string()));
    assert!(lines.contains(&"run_as=".to_string()));
}

#[test]
fn written_output_reads_back_equivalent() {
    let mut config = sample_config();
    config.read(SAMPLE_CONF.as_bytes(), 1).unwrap();

    let mut out = Vec::new();
    config.write(&mut out, false).unwrap();

    let mut reread = sample_config();
    reread.read(out.as_slice(), 1).unwrap();
    assert_eq!(
        reread.get_as::<StringOption>("key_a").unwrap().value(),
        "Alternate Value",
    );
    assert_eq!(reread.get_as::<IntOption>("key_b").unwrap().value(), 27);
}

// =============================================================================
// File-Backed Reads
// =============================================================================

#[test]
fn read_from_file_handle() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_CONF.as_bytes()).unwrap();

    let handle = std::fs::File::open(file.path()).unwrap();
    let mut config = sample_config();
    config.read(BufReader::new(handle), 1).unwrap();

    assert_eq!(
        config.get_as::<StringOption>("key_a").unwrap().value(),
        "Alternate Value",
    );
}
