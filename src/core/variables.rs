use crate::core::error::SolveError;

/// Distinct ASCII letters in order of first appearance, folded to lower case.
pub fn detect_variables(normalized: &str) -> Result<Vec<char>, SolveError> {
    let mut found: Vec<char> = Vec::new();
    for ch in normalized.chars().filter(char::is_ascii_alphabetic) {
        let v = ch.to_ascii_lowercase();
        if !found.contains(&v) {
            found.push(v);
        }
    }
    if found.is_empty() {
        return Err(SolveError::NoVariable);
    }
    Ok(found)
}
