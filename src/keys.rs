// src/keys.rs
//
// Composite key construction and version-tag resolution. The canonical key
// is the join point for every source: title slug + classification letter +
// zero-padded index + version initial. It is injective over
// (title, classification, index, version); collisions are detected by the
// callers that insert into keyed maps, not here.

use crate::titles::{Classification, TitleSpec};

/// Canonical composite key for one catalog entry.
pub fn chip_key(
    spec: &TitleSpec,
    class: Classification,
    index: &str,
    version: Option<&'static str>,
) -> String {
    let mut key = String::with_capacity(spec.slug.len() + spec.index_width + 2);
    key.push_str(spec.slug);
    key.push(class.key_letter());
    for _ in index.len()..spec.index_width {
        key.push('0');
    }
    key.push_str(index);
    if let Some(tag) = version {
        if let Some(c) = tag.chars().next() {
            key.push(c);
        }
    }
    key
}

/// The bn5 guide's own addressing scheme: upper-cased classification
/// initial (no secret remap, the guide predates the catalog's key
/// letters), three-digit index, version initial.
pub fn guide_key(class: Classification, index: &str, version: Option<&'static str>) -> String {
    let mut key = String::with_capacity(6);
    key.push(class.guide_initial());
    for _ in index.len()..3 {
        key.push('0');
    }
    key.push_str(index);
    if let Some(tag) = version {
        if let Some(c) = tag.chars().next() {
            key.push(c);
        }
    }
    key
}

/// Exact-string membership against the title's exclusivity sets, consulted
/// in declaration order; the first matching set wins. Titles without
/// version splits carry empty set lists and always resolve to none.
pub fn resolve_version(spec: &TitleSpec, name: &str) -> Option<&'static str> {
    spec.exclusives
        .iter()
        .find(|(_, names)| names.contains(&name))
        .map(|(tag, _)| *tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::titles::Title;

    #[test]
    fn key_pads_index_to_title_width() {
        let spec = Title::Bn5.spec();
        assert_eq!(
            chip_key(spec, Classification::Mega, "28", Some("colonel")),
            "bn5m028c"
        );
        assert_eq!(chip_key(spec, Classification::Standard, "1", None), "bn5s001");
    }

    #[test]
    fn secret_keys_clear_of_standard() {
        let spec = Title::Bn3.spec();
        let std = chip_key(spec, Classification::Standard, "1", None);
        let sec = chip_key(spec, Classification::Secret, "1", None);
        assert_ne!(std, sec);
        assert!(sec.contains('z'));
    }

    #[test]
    fn guide_key_uses_plain_initials() {
        assert_eq!(guide_key(Classification::Mega, "28", None), "M028");
        assert_eq!(guide_key(Classification::Mega, "28", Some("protoman")), "M028p");
    }

    #[test]
    fn versionless_titles_resolve_none() {
        assert_eq!(resolve_version(Title::Bn1.spec(), "Cannon"), None);
        assert_eq!(resolve_version(Title::Bn2.spec(), "Cannon"), None);
    }

    #[test]
    fn exclusive_names_resolve_to_their_set() {
        assert_eq!(resolve_version(Title::Bn3.spec(), "FoldrBak"), Some("blue"));
        assert_eq!(resolve_version(Title::Bn3.spec(), "Serenade"), Some("white"));
        assert_eq!(resolve_version(Title::Bn3.spec(), "Cannon"), None);
        assert_eq!(resolve_version(Title::Bn6.spec(), "HeatMan"), Some("gregar"));
    }
}
