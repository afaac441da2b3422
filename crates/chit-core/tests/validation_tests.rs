//! Validation tests against known-good and known-bad codes.
//!
//! The fixed codes here were produced by systems already using this scheme,
//! so they double as an interoperability check: both directions of the
//! codec have to agree with what is printed on vouchers in the wild.

use chit_core::code::CodeStyle;
use chit_core::{validate, Error};

#[test]
fn test_known_code_validates() {
    let code = validate("DJQ6-DPMD-DB6T").expect("known-good code");
    assert_eq!(code.as_str(), "DJQ6-DPMD-DB6T");
    assert_eq!(code.parts(), 3);
}

#[test]
fn test_separator_and_case_variants() {
    for input in [
        "DJQ6/DPMD/DB6T",
        "DJQ6 DPMD DB6T",
        "DJQ6DPMDDB6T",
        "djq6-dpmd-db6t",
        "dJq6-Dpmd-dB6t",
    ] {
        let code = validate(input).unwrap_or_else(|| panic!("{input:?} should validate"));
        assert_eq!(code.as_str(), "DJQ6-DPMD-DB6T");
    }
}

#[test]
fn test_separators_inside_groups() {
    let style = CodeStyle::dashed();
    let code = style.validate_parts("y0-00", 1).expect("should validate");
    assert_eq!(code.as_str(), "Y000");
}

#[test]
fn test_valid_ladder() {
    // each prefix of the six-part code is itself a valid shorter code
    let style = CodeStyle::dashed();
    let cases = [
        (1, "C9X7"),
        (2, "C9X7-RJ6K"),
        (3, "C9X7-RJ6K-6FXH"),
        (4, "C9X7-RJ6K-6FXH-YH5B"),
        (5, "C9X7-RJ6K-6FXH-YH5B-UF8V"),
        (6, "C9X7-RJ6K-6FXH-YH5B-UF8V-4TQJ"),
    ];
    for (parts, input) in cases {
        let code = style
            .validate_parts(input, parts)
            .unwrap_or_else(|| panic!("{input:?} should validate at {parts} parts"));
        assert_eq!(code.as_str(), input);
        assert_eq!(code.parts(), parts);
    }
}

#[test]
fn test_invalid_ladder() {
    let style = CodeStyle::dashed();
    let cases = [
        (1, "C9X8"),
        (2, "C9X7-RJ62"),
        (3, "C9X7-RJ6K-6FX1"),
        (4, "C9X7-RJ6K-6FXH-YH52"),
        (5, "C9X7-RJ6K-6FXH-YH5B-UF8X"),
        (6, "C9X7-RJ6K-6FXH-YH5B-UF8V-4TQ1"),
    ];
    for (parts, input) in cases {
        assert!(
            style.validate_parts(input, parts).is_none(),
            "{input:?} should be rejected at {parts} parts"
        );
    }
}

#[test]
fn test_part_count_must_match() {
    let style = CodeStyle::dashed();
    assert!(style.validate_parts("DJQ6-DPMD-DB6T", 2).is_none());
    assert!(style.validate_parts("DJQ8-DPM3", 2).is_none());
    assert!(style.validate_parts("C9X7", 2).is_none());
    assert!(style.validate_parts("C9X7-RJ6K", 1).is_none());
}

#[test]
fn test_empty_input_rejected() {
    assert!(validate("").is_none());
    assert!(CodeStyle::dashed().validate_parts("", 1).is_none());
    assert!(CodeStyle::dashed().validate_parts("---", 1).is_none());
}

#[test]
fn test_single_symbol_tampering_rejected() {
    // DJQ6DPMDDB6T contains neither `0` nor `Y`, so every single-symbol
    // substitution lands outside the checksum's one residue alias and
    // must be caught
    let style = CodeStyle::dashed();
    let original = "DJQ6DPMDDB6T";
    for pos in 0..original.len() {
        for &symbol in chit_core::alphabet::SYMBOLS {
            let replacement = char::from(symbol);
            if original.as_bytes()[pos] == symbol {
                continue;
            }
            let mut tampered: Vec<char> = original.chars().collect();
            tampered[pos] = replacement;
            let tampered: String = tampered.into_iter().collect();
            assert!(
                style.validate_parts(&tampered, 3).is_none(),
                "substituting {replacement:?} at {pos} should invalidate"
            );
        }
    }
}

#[test]
fn test_zero_y_substitution_undetected() {
    // the alphabet has 32 symbols but checks are computed mod 31, so `0`
    // and `Y` collide in data positions; both forms are accepted
    let style = CodeStyle::dashed();
    assert!(style.validate_parts("0000", 1).is_some());
    assert!(style.validate_parts("Y000", 1).is_some());
}

#[test]
fn test_swapped_groups_rejected() {
    let style = CodeStyle::dashed();
    for input in [
        "DPMD-DJQ6-DB6T",
        "DJQ6-DB6T-DPMD",
        "DB6T-DPMD-DJQ6",
        "RJ6K-C9X7",
    ] {
        assert!(
            style.validate_parts(input, input.split('-').count()).is_none(),
            "{input:?} should be rejected"
        );
    }
}

#[test]
fn test_parse_reports_length() {
    let err = CodeStyle::dashed().parse("DJQ6-DPMD", 3).unwrap_err();
    match err {
        Error::InvalidLength {
            parts,
            expected,
            actual,
        } => {
            assert_eq!(parts, 3);
            assert_eq!(expected, 12);
            assert_eq!(actual, 8);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_reports_symbol() {
    let err = CodeStyle::dashed().parse("DJQ6-DPMD-DBIT", 3).unwrap_err();
    assert!(matches!(err, Error::InvalidSymbol('I')));
}

#[test]
fn test_parse_reports_checksum_group() {
    let err = CodeStyle::dashed().parse("DJQ6-DPMD-DB6X", 3).unwrap_err();
    match err {
        Error::InvalidChecksum {
            group,
            expected,
            actual,
        } => {
            assert_eq!(group, 3);
            assert_eq!(expected, 'T');
            assert_eq!(actual, 'X');
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_compact_style_same_semantics() {
    // both styles verify the same checksums; only the canonical form differs
    let compact = CodeStyle::compact();
    let code = compact
        .validate_parts("C9X7-RJ6K-6FXH", 3)
        .expect("should validate");
    assert_eq!(code.as_str(), "C9X7RJ6K6FXH");

    let code = compact.validate("C9X7RJ6K").expect("two-part default");
    assert_eq!(code.as_str(), "C9X7RJ6K");
    assert!(compact.validate("C9X7RJ62").is_none());
}
