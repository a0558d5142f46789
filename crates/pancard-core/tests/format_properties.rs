//! # Format Properties
//!
//! Property tests tying the validator, decoder, and `Pan` newtype together:
//! every entry point must agree on which candidates are well-formed, and
//! none of the non-strict entry points may panic on arbitrary input.

use pancard_core::{
    decode, is_well_formed, summarize, validate_strict, Pan, ValidationError, PAN_LENGTH,
};
use proptest::prelude::*;

/// Reference matcher written independently of the crate's layout table.
fn matches_grammar(s: &str) -> bool {
    let n = s.trim().to_uppercase();
    let b = n.as_bytes();
    n.chars().count() == 10
        && b.len() == 10
        && b[..5].iter().all(u8::is_ascii_uppercase)
        && b[5..9].iter().all(u8::is_ascii_digit)
        && b[9].is_ascii_uppercase()
}

fn well_formed() -> impl Strategy<Value = String> {
    "[A-Za-z]{5}[0-9]{4}[A-Za-z]"
}

proptest! {
    #[test]
    fn generated_pans_are_accepted(s in well_formed()) {
        prop_assert!(is_well_formed(&s));
        prop_assert!(validate_strict(&s).is_ok());
        prop_assert!(Pan::new(&s).is_ok());
    }

    #[test]
    fn padding_does_not_change_the_answer(s in well_formed(), left in "[ \t]{0,3}", right in "[ \n]{0,3}") {
        let padded = format!("{left}{s}{right}");
        prop_assert!(is_well_formed(&padded));
        prop_assert_eq!(decode(&padded).original_input, padded);
    }

    #[test]
    fn validator_matches_reference(s in "\\PC{0,14}") {
        prop_assert_eq!(is_well_formed(&s), matches_grammar(&s));
    }

    #[test]
    fn near_misses_match_reference(s in "[A-Z0-9a-z@ ]{8,12}") {
        prop_assert_eq!(is_well_formed(&s), matches_grammar(&s));
    }

    #[test]
    fn all_entry_points_agree(s in "\\PC{0,14}") {
        let ok = is_well_formed(&s);
        prop_assert_eq!(validate_strict(&s).is_ok(), ok);
        prop_assert_eq!(Pan::new(&s).is_ok(), ok);
        prop_assert_eq!(decode(&s).is_valid, ok);
    }

    #[test]
    fn strict_reports_length_before_class(s in "\\PC{0,20}") {
        let len = s.trim().to_uppercase().chars().count();
        match validate_strict(&s) {
            Ok(()) => prop_assert_eq!(len, PAN_LENGTH),
            Err(ValidationError::MalformedLength { length, .. }) => {
                prop_assert_ne!(len, PAN_LENGTH);
                prop_assert_eq!(length, len);
            }
            Err(ValidationError::InvalidCharacterClass { position, .. }) => {
                prop_assert_eq!(len, PAN_LENGTH);
                prop_assert!(position < PAN_LENGTH);
            }
        }
    }

    #[test]
    fn decode_is_pure_and_total(s in "\\PC{0,20}") {
        let a = decode(&s);
        let b = decode(&s);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.structure.total_length, s.trim().to_uppercase().chars().count());
        prop_assert_eq!(a.breakdown.len(), 5);
        prop_assert!(a.structure.alphabets_count + a.structure.digits_count <= a.structure.total_length);
        prop_assert!(!summarize(&s).is_empty());
    }
}

#[test]
fn scenario_individual() {
    let r = decode("ABCPE1234K");
    assert!(is_well_formed("ABCPE1234K"));
    assert_eq!(r.holder_type.code, "P");
    assert_eq!(r.holder_type.type_name, "Individual (Person)");
    assert_eq!(r.components.series.value, "ABC");
    assert_eq!(r.components.surname_initial.value, "E");
    assert_eq!(r.components.sequence_digits.value, "1234");
    assert_eq!(r.components.check_character.value, "K");
}

#[test]
fn scenario_unknown_holder_code() {
    assert!(is_well_formed("ABCDE1234F"));
    assert_eq!(decode("ABCDE1234F").holder_type.type_name, "Unknown");
}

#[test]
fn scenario_lowercase() {
    assert!(is_well_formed("abcpe1234k"));
    assert_eq!(is_well_formed("  abcpe1234k "), is_well_formed("ABCPE1234K"));
}

#[test]
fn scenario_nine_characters() {
    assert!(!is_well_formed("ABCP12345"));
    assert!(matches!(
        validate_strict("ABCP12345"),
        Err(ValidationError::MalformedLength { length: 9, .. })
    ));
}

#[test]
fn scenario_swapped_digit_and_letter() {
    assert!(!is_well_formed("ABCP1234EK"));
    let err = validate_strict("ABCP1234EK").unwrap_err();
    assert!(matches!(err, ValidationError::InvalidCharacterClass { position: 4, .. }));
    assert_eq!(err.position(), Some(4));
}

#[test]
fn scenario_empty() {
    assert!(!is_well_formed(""));
    let r = decode("");
    assert_eq!(r.structure.total_length, 0);
    assert!(r.components.iter().all(|c| !c.present));
}

#[test]
fn scenario_two_characters() {
    let r = decode("AB");
    assert!(!r.is_valid);
    assert_eq!(r.structure.total_length, 2);
    assert!(!r.components.holder_type_code.present);
    assert!(!r.components.surname_initial.present);
    assert!(!r.components.sequence_digits.present);
    assert!(!r.components.check_character.present);
}
