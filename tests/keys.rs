// tests/keys.rs
//
// Composite-key contract: injective over (title, classification, index,
// version), and version resolution is deterministic: first declared set
// wins, titles without splits always resolve to none.

use std::collections::HashSet;

use chip_scrape::keys::{chip_key, resolve_version};
use chip_scrape::titles::{Classification, ColumnMap, JoinKey, Secondary, Title, TitleSpec};

const CLASSES: [Classification; 6] = [
    Classification::Standard,
    Classification::Mega,
    Classification::Giant,
    Classification::Dark,
    Classification::Secret,
    Classification::Support,
];

#[test]
fn composite_keys_injective_over_synthesized_catalog() {
    let mut seen = HashSet::new();
    let mut count = 0usize;

    for title in Title::ALL {
        let spec = title.spec();
        let mut versions: Vec<Option<&'static str>> = vec![None];
        versions.extend(spec.exclusives.iter().map(|(tag, _)| Some(*tag)));

        for class in CLASSES {
            for idx in ["1", "12", "123"] {
                for v in &versions {
                    count += 1;
                    assert!(
                        seen.insert(chip_key(spec, class, idx, *v)),
                        "collision for {title}/{class}/{idx}/{v:?}"
                    );
                }
            }
        }
    }
    assert_eq!(seen.len(), count);
}

#[test]
fn padded_and_unpadded_spellings_of_one_index_agree() {
    let spec = Title::Bn2.spec();
    assert_eq!(
        chip_key(spec, Classification::Standard, "7", None),
        chip_key(spec, Classification::Standard, "07", None)
    );
}

// A deliberately ambiguous spec: "Twin" is a member of both sets. The
// shipped tables never do this, but resolution order must not depend on
// enumeration accidents if one ever does.
static AMBIGUOUS: TitleSpec = TitleSpec {
    title: Title::Bn5,
    slug: "bn5",
    list_page: "",
    guide_url: "",
    tables: (1, 1),
    cols: ColumnMap {
        index: 0,
        name: 2,
        element: None,
        damage: None,
        codes: None,
        size: None,
        description: 3,
    },
    index_width: 3,
    exclusives: &[("alpha", &["Twin", "AlphaOnly"]), ("beta", &["Twin", "BetaOnly"])],
    synthetic_indices: &[],
    defaulted: &[],
    damage_note: None,
    secondary: Secondary::Guide,
    join: JoinKey::Index,
};

#[test]
fn ambiguous_membership_resolves_to_first_declared_set() {
    assert_eq!(resolve_version(&AMBIGUOUS, "Twin"), Some("alpha"));
    assert_eq!(resolve_version(&AMBIGUOUS, "BetaOnly"), Some("beta"));
    assert_eq!(resolve_version(&AMBIGUOUS, "Neither"), None);
}

#[test]
fn splitless_titles_always_resolve_none() {
    for title in [Title::Bn1, Title::Bn2] {
        let spec = title.spec();
        assert!(spec.exclusives.is_empty());
        assert_eq!(resolve_version(spec, "Bass"), None);
    }
}

#[test]
fn declaration_order_matches_shipped_tables() {
    // bn3 consults blue before white, bn5 colonel before protoman.
    assert_eq!(resolve_version(Title::Bn3.spec(), "DeltaRay"), Some("blue"));
    assert_eq!(resolve_version(Title::Bn5.spec(), "BugCharg"), Some("colonel"));
}
