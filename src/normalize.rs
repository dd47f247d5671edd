//! Text normalization for search comparison.
//!
//! Maps display text to a canonical lowercase form with a fixed table of
//! accented Latin characters folded to their unaccented base. Both the stored
//! text and the query text go through [`normalize_text`] before comparison;
//! raw text is never compared directly.
//!
//! The fold table is fixed and locale-free: same input, same output, on any
//! machine. No I/O, no clock calls, no locale lookups.

/// Folds one already-lowercased character to its base form.
///
/// Returns `None` for characters outside the fold table, which pass through
/// unchanged. The eszett and the `œ`/`æ` ligatures expand to two letters,
/// which is why the replacement is a `&str` rather than a `char`.
fn fold_char(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'ä' | 'á' | 'à' | 'â' | 'å' => "a",
        'ë' | 'é' | 'è' | 'ê' => "e",
        'ï' | 'í' | 'ì' | 'î' => "i",
        'ö' | 'ó' | 'ò' | 'ô' | 'ø' => "o",
        'ü' | 'ú' | 'ù' | 'û' => "u",
        'ÿ' | 'ý' | 'ỳ' => "y",
        'ç' => "c",
        'ñ' => "n",
        'ß' => "ss",
        'œ' => "oe",
        'æ' => "ae",
        _ => return None,
    };
    Some(folded)
}

/// Normalizes text for case- and diacritic-insensitive comparison.
///
/// Lowercases the input, then folds accented Latin-family characters to their
/// base form per the fixed table (`é` → `e`, `ø` → `o`, `ß` → `ss`, `œ` → `oe`,
/// `æ` → `ae`, and so on). Characters outside the table pass through
/// unchanged, so digits, punctuation, and non-Latin scripts survive as-is.
///
/// The function is pure, deterministic, and idempotent:
/// `normalize_text(normalize_text(s)) == normalize_text(s)`.
///
/// # Examples
///
/// ```rust
/// use jobsearch::normalize_text;
///
/// assert_eq!(normalize_text("Café"), "cafe");
/// assert_eq!(normalize_text("Øresund"), "oresund");
/// assert_eq!(normalize_text("Straße"), "strasse");
/// assert_eq!(normalize_text(""), "");
/// ```
pub fn normalize_text(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for ch in text.chars() {
        // Lowercasing first: the fold table is keyed on lowercase forms, and
        // a single uppercase character can lowercase to multiple characters.
        for lower in ch.to_lowercase() {
            match fold_char(lower) {
                Some(folded) => normalized.push_str(folded),
                None => normalized.push(lower),
            }
        }
    }
    normalized
}
