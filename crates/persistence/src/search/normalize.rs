//! Accent- and case-insensitive text normalization.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Strips diacritics and lower-cases `text`.
///
/// The text is put in canonical decomposition (NFD) so accented letters split
/// into a base letter plus combining marks, and the marks are dropped.
///
/// ```
/// use consultas_persistence::search::normalize;
///
/// assert_eq!(normalize("SulAmérica"), "sulamerica");
/// assert_eq!(normalize("JOÃO"), "joao");
/// ```
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}
