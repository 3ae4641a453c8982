//! Position-label normalization for depth resolution.
//!
//! Slot labels and player positions come from different vocabularies
//! ("WR2", "SAM", "NB" on the slot side; "HB", "OLB", "TB" on the player
//! side), so each side has its own synonym table mapping into one canonical
//! group space. Groups roll up into coarser families used as fallback
//! candidate pools. All three mappings are static tables so tests can
//! enumerate every variant.

pub const UNKNOWN: &str = "UNK";

/// Slot-side synonyms. "WR1".."WR5" are handled by a prefix rule before the
/// table is consulted.
const SLOT_SYNONYMS: &[(&str, &str)] = &[
    // offense
    ("RB", "RB"),
    ("HB", "RB"),
    ("TB", "RB"),
    ("FB", "FB"),
    ("QB", "QB"),
    ("TE", "TE"),
    ("LT", "LT"),
    ("LG", "LG"),
    ("C", "C"),
    ("RG", "RG"),
    ("RT", "RT"),
    // defense
    ("EDGE", "EDGE"),
    ("LEDG", "LE"),
    ("LE", "LE"),
    ("REDG", "RE"),
    ("RE", "RE"),
    ("DT", "DT"),
    ("NT", "DT"),
    ("IDL", "DT"),
    ("SAM", "LOLB"),
    ("LOLB", "LOLB"),
    ("OLB", "LOLB"),
    ("WILL", "ROLB"),
    ("ROLB", "ROLB"),
    ("MIKE", "MLB"),
    ("MLB", "MLB"),
    ("ILB", "MLB"),
    ("LB", "MLB"),
    ("NB", "CB"),
    ("NICKEL", "CB"),
    ("STAR", "CB"),
    ("CB", "CB"),
    ("S", "FS"),
    ("FS", "FS"),
    ("SS", "SS"),
    // special teams
    ("K", "K"),
    ("P", "P"),
];

/// Player-side synonyms. Slightly narrower than the slot table: roster
/// positions never carry slot-only labels like NT/IDL.
const PLAYER_SYNONYMS: &[(&str, &str)] = &[
    // offense
    ("HB", "RB"),
    ("TB", "RB"),
    ("RB", "RB"),
    ("WR", "WR"),
    ("QB", "QB"),
    ("FB", "FB"),
    ("TE", "TE"),
    ("LT", "LT"),
    ("LG", "LG"),
    ("C", "C"),
    ("RG", "RG"),
    ("RT", "RT"),
    // defense
    ("EDGE", "EDGE"),
    ("LEDG", "LE"),
    ("LE", "LE"),
    ("REDG", "RE"),
    ("RE", "RE"),
    ("OLB", "LOLB"),
    ("SAM", "LOLB"),
    ("LOLB", "LOLB"),
    ("WILL", "ROLB"),
    ("ROLB", "ROLB"),
    ("MIKE", "MLB"),
    ("ILB", "MLB"),
    ("LB", "MLB"),
    ("MLB", "MLB"),
    ("NB", "CB"),
    ("NICKEL", "CB"),
    ("STAR", "CB"),
    ("CB", "CB"),
    ("S", "FS"),
    ("FS", "FS"),
    ("SS", "SS"),
    ("DT", "DT"),
    // special teams
    ("K", "K"),
    ("P", "P"),
];

const FAMILIES: &[(&str, &str)] = &[
    ("QB", "QB"),
    ("RB", "BACK"),
    ("FB", "BACK"),
    ("WR", "WR"),
    ("TE", "TE"),
    ("LT", "OL"),
    ("LG", "OL"),
    ("C", "OL"),
    ("RG", "OL"),
    ("RT", "OL"),
    ("LE", "EDGE"),
    ("RE", "EDGE"),
    ("EDGE", "EDGE"),
    ("DT", "IDL"),
    ("MLB", "LB"),
    ("LOLB", "LB"),
    ("ROLB", "LB"),
    ("CB", "CB"),
    ("FS", "S"),
    ("SS", "S"),
    ("K", "K"),
    ("P", "P"),
];

/// Uppercase and strip everything that is not a letter, so "WR2" and
/// "wr-2" both reduce to "WR".
pub fn letters_only(raw: &str) -> String {
    raw.to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect()
}

fn lookup(table: &'static [(&'static str, &'static str)], token: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(from, _)| *from == token)
        .map(|(_, to)| *to)
}

/// Canonical group for a slot label. Unknown tokens pass through unchanged so
/// exotic seed data still buckets consistently.
pub fn normalize_slot_token(raw: &str) -> String {
    let token = letters_only(raw);
    if token.starts_with("WR") {
        return "WR".to_string();
    }
    if let Some(group) = lookup(SLOT_SYNONYMS, &token) {
        return group.to_string();
    }
    if token.is_empty() {
        UNKNOWN.to_string()
    } else {
        token
    }
}

/// Canonical group for a stored player position.
pub fn normalize_player_position(raw: &str) -> String {
    let token = letters_only(raw);
    if let Some(group) = lookup(PLAYER_SYNONYMS, &token) {
        return group.to_string();
    }
    if token.is_empty() {
        UNKNOWN.to_string()
    } else {
        token
    }
}

/// Coarser family above the canonical group, used as the fallback candidate
/// pool when no player matches the exact group.
pub fn family_of(group: &str) -> &'static str {
    lookup(FAMILIES, group).unwrap_or(UNKNOWN)
}
