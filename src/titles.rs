// src/titles.rs
//
// Per-title configuration. Everything title-specific that used to be worth a
// branch lives here as data: list-page location, chip table range, column
// positions, index padding width, version-exclusivity sets, synthetic
// indices, and the secondary-source policy. One generic engine consumes
// these records (see reconcile.rs).

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Title {
    Bn1,
    Bn2,
    Bn3,
    Bn4,
    Bn5,
    Bn6,
}

impl Title {
    pub const ALL: [Title; 6] = [
        Title::Bn1,
        Title::Bn2,
        Title::Bn3,
        Title::Bn4,
        Title::Bn5,
        Title::Bn6,
    ];

    pub fn slug(self) -> &'static str {
        self.spec().slug
    }

    pub fn spec(self) -> &'static TitleSpec {
        &SPECS[self as usize]
    }

    pub fn from_slug(s: &str) -> Option<Title> {
        Title::ALL.iter().copied().find(|t| t.slug() == s)
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Standard,
    Mega,
    Giant,
    Dark,
    Secret,
    Support,
}

impl Classification {
    /// Map a list-page section heading ("Mega Chips") to a classification.
    pub fn from_heading(h: &str) -> Option<Classification> {
        let t = h.trim().to_ascii_lowercase();
        let t = t.strip_suffix(" chips").unwrap_or(&t).trim();
        match t {
            "standard" => Some(Classification::Standard),
            "mega" => Some(Classification::Mega),
            "giant" => Some(Classification::Giant),
            "dark" => Some(Classification::Dark),
            "secret" => Some(Classification::Secret),
            "support" => Some(Classification::Support),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Classification::Standard => "standard",
            Classification::Mega => "mega",
            Classification::Giant => "giant",
            Classification::Dark => "dark",
            Classification::Secret => "secret",
            Classification::Support => "support",
        }
    }

    /// Letter used in the canonical composite key. Secret maps to 'z' and
    /// support to 'p'; both would otherwise collide with standard on 's'.
    pub fn key_letter(self) -> char {
        match self {
            Classification::Standard => 's',
            Classification::Mega => 'm',
            Classification::Giant => 'g',
            Classification::Dark => 'd',
            Classification::Secret => 'z',
            Classification::Support => 'p',
        }
    }

    /// Upper-cased initial as the bn5 guide prints it. The guide's own
    /// scheme, kept separate from the catalog key letters on purpose.
    pub fn guide_initial(self) -> char {
        match self {
            Classification::Standard => 'S',
            Classification::Mega => 'M',
            Classification::Giant => 'G',
            Classification::Dark => 'D',
            Classification::Secret => 'S',
            Classification::Support => 'P',
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 0-based cell positions within a chip table row. `None` means the list
/// page has no such column for that title.
pub struct ColumnMap {
    pub index: usize,
    pub name: usize,
    pub element: Option<usize>,
    pub damage: Option<usize>,
    pub codes: Option<usize>,
    pub size: Option<usize>,
    pub description: usize,
}

/// Which secondary source fills the gaps the list page leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Secondary {
    Guide,
    Curated,
}

/// How a record is addressed in its title's secondary-source mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKey {
    /// Index with leading zeros stripped.
    IndexTrimmed,
    /// Index exactly as printed.
    Index,
    /// Name lower-cased with spaces removed.
    NameFolded,
    /// Name lower-cased.
    NameLower,
    /// The guide's own composite: classification initial + index + version letter.
    GuideComposite,
    /// The canonical composite key (curated table joins).
    Canonical,
}

pub struct TitleSpec {
    pub title: Title,
    pub slug: &'static str,
    pub list_page: &'static str,
    pub guide_url: &'static str,
    /// 1-based first and last chip table on the list page, inclusive.
    pub tables: (usize, usize),
    pub cols: ColumnMap,
    /// Zero-padding width for the canonical key's index part.
    pub index_width: usize,
    /// Version exclusivity sets, in resolution order (first match wins).
    pub exclusives: &'static [(&'static str, &'static [&'static str])],
    /// Entries whose printed index is a placeholder get these assigned.
    pub synthetic_indices: &'static [(&'static str, &'static str)],
    /// Names the guide omits entirely; they get default attributes
    /// (rarity 5, element null) instead of a lookup.
    pub defaulted: &'static [&'static str],
    /// The damage cell lists values for two releases; keep the one carrying
    /// this note.
    pub damage_note: Option<&'static str>,
    pub secondary: Secondary,
    pub join: JoinKey,
}

const BN3_EXCLUSIVES: &[(&str, &[&str])] = &[
    ("blue", &["FoldrBak", "Bass+", "DarkAura", "DeltaRay", "AlphArm\u{03A9}"]),
    ("white", &["NaviRcycl", "Bass", "Serenade", "Balance", "AlphArm\u{03A3}"]),
];

// The bn3 guide skips the white-only chips and a few promotional ones.
const BN3_DEFAULTED: &[&str] = &[
    "NaviRcycl",
    "Bass",
    "Serenade",
    "Balance",
    "AlphArm\u{03A3}",
    "Punk",
    "BassGS",
    "AlphArm\u{03A9}",
];

const BN4_EXCLUSIVES: &[(&str, &[&str])] = &[
    (
        "redsun",
        &[
            "Roll", "RollSP", "RollDS",
            "GutsMan", "GutsMnSP", "GutsMnDS",
            "WindMan", "WindMnSP", "WindMnDS",
            "SerchMan", "SrchMnSP", "SrchMnDS",
            "FireMan", "FireMnSP", "FireMnDS",
            "ThunMan", "ThunMnSP", "ThunMnDS",
            "RedSun", "Bass", "HolyDrem", "BugCharg", "BlakBarr",
        ],
    ),
    (
        "bluemoon",
        &[
            "ProtoMan", "ProtoMSP", "ProtoMDS",
            "NumbrMan", "NumbMnSP", "NumbMnDS",
            "MetalMan", "MetlMnSP", "MetlMnDS",
            "JunkMan", "JunkMnSP", "JunkMnDS",
            "AquaMan", "AquaMnSP", "AquaMnDS",
            "WoodMan", "WoodMnSP", "WoodMnDS",
            "BlueMoon", "SignlRed", "BassAnly", "BugCurse", "DeltaRay",
        ],
    ),
];

const BN5_EXCLUSIVES: &[(&str, &[&str])] = &[
    (
        "colonel",
        &[
            "Colonel", "ColonelSP", "ColonelDS",
            "ShadoMan", "ShadoMnSP", "ShadoMnDS",
            "NumbrMan", "NumbrMnSP", "NumbrMnDS",
            "TmhwkMan", "TmhwkMnSP", "TmhwkMnDS",
            "KnightMan", "KnigtMnSP", "KnigtMnDS",
            "ToadMan", "ToadMnSP", "ToadMnDS",
            "CrossDiv", "MetrKnuk", "BassAnly", "OmegaRkt", "BugCharg", "Phoenix",
        ],
    ),
    (
        "protoman",
        &[
            "ProtoMan", "ProtoMnSP", "ProtoMnDS",
            "GyroMan", "GyroMnSP", "GyroMnDS",
            "SearchMan", "SearchMnSP", "SearchMnDS",
            "NapalmMan", "NapalmMnSP", "NapalmMnDS",
            "MagnetMan", "MagnetMnSP", "MagnetMnDS",
            "Meddy", "MeddySP", "MeddyDS",
            "DeltaRay", "BigHook", "Bass", "HolyDrem", "BugCurse", "DethPhnx",
        ],
    ),
];

const BN6_EXCLUSIVES: &[(&str, &[&str])] = &[
    (
        "falzar",
        &[
            "SpoutMan", "SpoutMnEX", "SpoutMnSP",
            "TmhkMan", "TmhManEX", "TmhkManSP",
            "TenguMan", "TenguMnEX", "TenguMnSP",
            "GrndMan", "GrndManEX", "GrndManSP",
            "DustMan", "DustManEX", "DustManSP",
            "BassAnly", "MetrKnuk", "CrossDiv", "HubBatc", "BgDthThd",
        ],
    ),
    (
        "gregar",
        &[
            "HeatMan", "HeatManEX", "HeatManSP",
            "ElecMan", "ElecManEX", "ElecManSP",
            "SlashMan", "SlashMnEX", "SlashMnSP",
            "ChrgeMan", "ChrgeMnEX", "ChrgeMnSP",
            "EraseMan", "EraseMnEX", "EraseMnSP",
            "Bass", "BigHook", "DeltaRay", "ColForce", "BugRSwrd",
        ],
    ),
];

static SPECS: [TitleSpec; 6] = [
    TitleSpec {
        title: Title::Bn1,
        slug: "bn1",
        list_page: "http://megaman.wikia.com/wiki/List_of_Mega_Man_Battle_Network_Battle_Chips",
        guide_url: "http://www.gamefaqs.com/gba/457634-mega-man-battle-network/faqs/30244?print=1",
        tables: (1, 1),
        cols: ColumnMap {
            index: 0,
            name: 2,
            element: None,
            damage: Some(3),
            codes: None,
            size: None,
            description: 4,
        },
        index_width: 3,
        exclusives: &[],
        synthetic_indices: &[],
        defaulted: &[],
        damage_note: Some("(MMBN)"),
        secondary: Secondary::Guide,
        join: JoinKey::IndexTrimmed,
    },
    TitleSpec {
        title: Title::Bn2,
        slug: "bn2",
        list_page: "http://megaman.wikia.com/wiki/List_of_Mega_Man_Battle_Network_2_Battle_Chips",
        guide_url: "http://www.ign.com/faqs/2003/mega-man-battle-network-2-walkthroughfaq-391636?print=1",
        tables: (1, 1),
        cols: ColumnMap {
            index: 0,
            name: 2,
            element: Some(3),
            damage: Some(4),
            codes: Some(5),
            size: Some(6),
            description: 7,
        },
        index_width: 3,
        exclusives: &[],
        synthetic_indices: &[],
        defaulted: &[],
        damage_note: None,
        secondary: Secondary::Guide,
        join: JoinKey::Index,
    },
    TitleSpec {
        title: Title::Bn3,
        slug: "bn3",
        list_page: "http://megaman.wikia.com/wiki/List_of_Mega_Man_Battle_Network_3_Battle_Chips",
        guide_url: "http://www.gamefaqs.com/gba/915457-mega-man-battle-network-3-blue/faqs/24086?print=1",
        tables: (1, 3),
        cols: ColumnMap {
            index: 0,
            name: 2,
            element: None,
            damage: Some(3),
            codes: Some(4),
            size: Some(5),
            description: 6,
        },
        index_width: 3,
        exclusives: BN3_EXCLUSIVES,
        synthetic_indices: &[],
        defaulted: BN3_DEFAULTED,
        damage_note: None,
        secondary: Secondary::Guide,
        join: JoinKey::NameFolded,
    },
    TitleSpec {
        title: Title::Bn4,
        slug: "bn4",
        list_page: "http://megaman.wikia.com/wiki/List_of_Mega_Man_Battle_Network_4_Battle_Chips",
        guide_url: "http://www.gamefaqs.com/gba/919000-mega-man-battle-network-4-blue-moon/faqs/31235?print=1",
        tables: (2, 5),
        cols: ColumnMap {
            index: 0,
            name: 2,
            element: Some(3),
            damage: Some(4),
            codes: None,
            size: None,
            description: 5,
        },
        index_width: 3,
        exclusives: BN4_EXCLUSIVES,
        synthetic_indices: &[("PrixPowr", "39"), ("Duo", "40")],
        defaulted: &[],
        damage_note: None,
        secondary: Secondary::Guide,
        join: JoinKey::NameLower,
    },
    TitleSpec {
        title: Title::Bn5,
        slug: "bn5",
        list_page: "http://megaman.wikia.com/wiki/List_of_Mega_Man_Battle_Network_5_Battle_Chips",
        guide_url: "http://www.gamefaqs.com/ds/928331-mega-man-battle-network-5-double-team/faqs/52952?print=1",
        tables: (1, 5),
        cols: ColumnMap {
            index: 0,
            name: 2,
            element: Some(3),
            damage: Some(4),
            codes: None,
            size: None,
            description: 5,
        },
        index_width: 3,
        exclusives: BN5_EXCLUSIVES,
        synthetic_indices: &[],
        defaulted: &[],
        damage_note: None,
        secondary: Secondary::Guide,
        join: JoinKey::GuideComposite,
    },
    TitleSpec {
        title: Title::Bn6,
        slug: "bn6",
        list_page: "http://megaman.wikia.com/wiki/List_of_Mega_Man_Battle_Network_6_Battle_Chips",
        guide_url: "http://www.gamefaqs.com/gba/929993-mega-man-battle-network-6-cybeast-gregar/faqs/40403?print=1",
        tables: (1, 3),
        cols: ColumnMap {
            index: 0,
            name: 2,
            element: Some(3),
            damage: Some(4),
            codes: None,
            size: None,
            description: 5,
        },
        index_width: 3,
        exclusives: BN6_EXCLUSIVES,
        synthetic_indices: &[],
        defaulted: &[],
        damage_note: None,
        // The bn6 guide covers only the 200 standard chips; the curated
        // table also carries mega/giant/secret rows.
        secondary: Secondary::Curated,
        join: JoinKey::Canonical,
    },
];
