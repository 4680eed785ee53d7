// crates/cityradius-core/src/text.rs

/// Folds a string into a key for loose name matching.
///
/// Transliterates Unicode to ASCII with `deunicode` (`Łódź` -> `Lodz`) and
/// lowercases the result.
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Equality on folded keys.
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}
