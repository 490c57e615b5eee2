use indexmap::IndexMap;

/// Category used when the hard-coded set is rendered.
pub const SAMPLE_CATEGORY: &str = "sample";

/// Jeu d'icônes de secours quand aucun catalogue n'est disponible.
pub const SAMPLE_ICONS: &[(&str, char)] = &[
    ("file", '📄'),
    ("folder", '📁'),
    ("arrow-right", '→'),
    ("checkmark", '✓'),
    ("gear", '⚙'),
];

/// The fallback set as an ordered name → character map.
#[must_use]
pub fn sample_icons() -> IndexMap<String, char> {
    SAMPLE_ICONS
        .iter()
        .map(|&(name, ch)| (name.to_string(), ch))
        .collect()
}
