// tests/normalize.rs
//
// Field-normalizer contract: the ordered substitution chains map every
// recognized source token onto the canonical vocabulary, reject everything
// else loudly, and are idempotent: feeding a canonical value back in
// changes nothing.

use std::collections::BTreeSet;

use chip_scrape::core::sanitize::{codes, damage, element, rarity, size, ELEMENTS};
use chip_scrape::error::ChipError;

#[test]
fn element_thermal_synonym_folds_to_fire() {
    assert_eq!(element("Heat").unwrap(), "fire");
    assert_eq!(element("BC Element Heat").unwrap(), "fire");
}

#[test]
fn element_none_maps_to_null() {
    assert_eq!(element("none").unwrap(), "null");
    assert_eq!(element("None").unwrap(), "null");
}

#[test]
fn element_double_application_keeps_single_electric_token() {
    let once = element("Elec").unwrap();
    assert_eq!(once, "electric");
    // A second pass must not re-expand the already-renamed token.
    let twice = element(&once).unwrap();
    assert_eq!(twice, "electric");
}

#[test]
fn element_idempotent_over_whole_vocabulary() {
    for canon in ELEMENTS {
        assert_eq!(element(canon).unwrap(), *canon);
    }
}

#[test]
fn element_never_leaks_raw_tokens() {
    for raw in ["BC Attribute Elec", "TypeWind", "heat", "Invis"] {
        let out = element(raw).unwrap();
        assert!(ELEMENTS.contains(&out.as_str()), "leaked: {out}");
    }
    assert!(matches!(
        element("plasma"),
        Err(ChipError::Vocabulary { kind: "element", .. })
    ));
}

#[test]
fn damage_unknown_tokens_become_variable_sentinel() {
    assert_eq!(damage("????").unwrap(), vec![-1]);
    assert_eq!(damage("???").unwrap(), vec![-1]);
}

#[test]
fn damage_range_keeps_lower_bound_only() {
    assert_eq!(damage("120-150").unwrap(), vec![120]);
    assert_eq!(damage("30~50").unwrap(), vec![30]);
}

#[test]
fn damage_literal_wraps_as_single_element_sequence() {
    assert_eq!(damage("80").unwrap(), vec![80]);
    assert_eq!(damage("").unwrap(), Vec::<i32>::new());
}

#[test]
fn damage_idempotent_on_normalized_rendering() {
    let first = damage("120-150").unwrap();
    let again = damage(&first[0].to_string()).unwrap();
    assert_eq!(first, again);
}

#[test]
fn codes_are_a_set_not_a_joined_string() {
    let got = codes("B, B, A, *").unwrap();
    let want: BTreeSet<char> = ['A', 'B', '*'].into_iter().collect();
    assert_eq!(got, want);
}

#[test]
fn codes_idempotent_on_rendered_set() {
    let first = codes("C,A,B").unwrap();
    let rendered: String = first.iter().map(|c| format!("{c},")).collect();
    assert_eq!(codes(&rendered).unwrap(), first);
}

#[test]
fn size_unit_suffix_stripped_and_idempotent() {
    assert_eq!(size("32 MB").unwrap(), Some(32));
    assert_eq!(size("32").unwrap(), Some(32));
    assert_eq!(size("").unwrap(), None);
}

#[test]
fn rarity_placeholders_default_to_five() {
    assert_eq!(rarity("-").unwrap(), 5);
    assert_eq!(rarity("?").unwrap(), 5);
    assert_eq!(rarity("****").unwrap(), 4);
    assert_eq!(rarity("3").unwrap(), 3);
    assert!(rarity("0").is_err());
    assert!(rarity("9").is_err());
}
