//! # Loader Tests
//!
//! Listing syntax, address bounds, malformed-line handling, and loading
//! from disk.

use std::io::Write;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;
use y86_core::common::{LoadError, MEM_MAX_SIZE};
use y86_core::sim::loader::{self, Image};

fn image(pairs: &[(u64, u8)]) -> Image {
    pairs.iter().copied().collect()
}

#[test]
fn parses_assembler_listing() {
    let text = "\
                            | # Execution begins at address 0
0x000:                      |     .pos 0
0x000: 30f40002000000000000 |     irmovq stack, %rsp
0x00a: 00                   |     halt
";
    let img = loader::parse_yo(text, MEM_MAX_SIZE);
    assert_eq!(img.len(), 11);
    assert_eq!(img[&0], 0x30);
    assert_eq!(img[&1], 0xF4);
    assert_eq!(img[&3], 0x02);
    assert_eq!(img[&0x0A], 0x00);
}

#[test]
fn address_prefix_is_optional() {
    assert_eq!(loader::parse_yo("10: ab", MEM_MAX_SIZE), image(&[(0x10, 0xAB)]));
    assert_eq!(loader::parse_yo("0X10: ab", MEM_MAX_SIZE), image(&[(0x10, 0xAB)]));
}

#[test]
fn spaces_in_payload_are_removed() {
    assert_eq!(
        loader::parse_yo("0x4: 01 02 03", MEM_MAX_SIZE),
        image(&[(4, 1), (5, 2), (6, 3)])
    );
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert_eq!(
        loader::parse_yo("0x0:\t0102\t", MEM_MAX_SIZE),
        image(&[(0, 1), (1, 2)])
    );
}

#[test]
fn tab_inside_payload_skips_line() {
    assert!(loader::parse_yo("0x0: 01\t02", MEM_MAX_SIZE).is_empty());
}

#[test]
fn odd_payload_is_padded() {
    assert_eq!(
        loader::parse_yo("0x0: abc", MEM_MAX_SIZE),
        image(&[(0, 0xAB), (1, 0xC0)])
    );
}

#[test]
fn comment_after_bar_is_ignored() {
    assert_eq!(
        loader::parse_yo("0x0: 10 | 0x8: ff", MEM_MAX_SIZE),
        image(&[(0, 0x10)])
    );
}

#[test]
fn lines_without_colon_are_skipped() {
    assert!(loader::parse_yo("just text\n\n| 0x0: 10", MEM_MAX_SIZE).is_empty());
}

#[test]
fn malformed_lines_are_skipped_whole() {
    let text = "0xzz: 10\n0x0: 1g2233\n0x8: 44";
    assert_eq!(loader::parse_yo(text, MEM_MAX_SIZE), image(&[(8, 0x44)]));
}

#[test]
fn bytes_past_bound_are_dropped() {
    assert_eq!(loader::parse_yo("0x6: 01020304", 8), image(&[(6, 1), (7, 2)]));
    assert!(loader::parse_yo("0x8: 01", 8).is_empty());
}

#[test]
fn later_lines_overwrite_earlier() {
    assert_eq!(
        loader::parse_yo("0x0: 1111\n0x1: 22", MEM_MAX_SIZE),
        image(&[(0, 0x11), (1, 0x22)])
    );
}

#[test]
fn lines_iterator_matches_text() {
    let lines = vec!["0x0: 30f0".to_string(), "0x2: 05".to_string()];
    assert_eq!(
        loader::parse_yo_lines(&lines, MEM_MAX_SIZE),
        loader::parse_yo("0x0: 30f0\n0x2: 05", MEM_MAX_SIZE)
    );
}

#[test]
fn load_file_reads_listing() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "0x000: 10 | nop").unwrap();
    writeln!(file, "0x001: 00 | halt").unwrap();
    file.flush().unwrap();

    let img = loader::load_file(file.path(), MEM_MAX_SIZE).unwrap();
    assert_eq!(img, image(&[(0, 0x10), (1, 0x00)]));
}

#[test]
fn load_file_reports_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yo");
    let err = loader::load_file(&path, MEM_MAX_SIZE).unwrap_err();
    let LoadError::Io { path: reported, .. } = err;
    assert_eq!(reported, path);
}
