use super::engine::parse_metrics;

/// Check every score string without computing results.
/// Returns all validation errors at once (not just the first).
pub fn validate_scores<S: AsRef<str>>(score_strs: &[S]) -> Result<(), Vec<String>> {
    let errors: Vec<String> = score_strs
        .iter()
        .enumerate()
        .filter_map(|(i, s)| {
            parse_metrics(s.as_ref())
                .err()
                .map(|e| format!("scores[{}]: {}", i, e))
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
