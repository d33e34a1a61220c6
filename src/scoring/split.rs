use crate::error::{ScoreError, ScoreResult};

/// Names of the four category fields, in input order.
pub const CATEGORY_NAMES: [&str; 4] = ["perf", "a11y", "bp", "seo"];

/// Names of the three PWA sub-scores, in input order.
pub const PWA_NAMES: [&str; 3] = ["fnr", "ins", "po"];

/// Syntax used for the parenthesized PWA group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreForm {
    /// Bare pass counts, e.g. `(1, 0, 6)`, out of 3, 3 and 7 checks.
    Shorthand,
    /// Explicit fractions, e.g. `(1/3, 0/3, 6/7)`.
    FullFraction,
}

/// Raw tokens of a score string, trimmed, plus the detected PWA form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitScore {
    /// The original input, kept for error messages.
    pub source: String,
    pub perf: String,
    pub a11y: String,
    pub bp: String,
    pub seo: String,
    pub fnr: String,
    pub ins: String,
    pub po: String,
    pub form: ScoreForm,
}

/// Parse a finite number, rejecting `inf` and `NaN` literals.
pub(crate) fn parse_number(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Split `"perf / a11y / bp / seo / (fnr, ins, po)"` into its tokens.
///
/// Whitespace around every separator is optional. Category tokens and
/// shorthand PWA counts must be numeric; fraction tokens are only checked
/// for shape here and evaluated by the aggregator.
pub fn split_score(input: &str) -> ScoreResult<SplitScore> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ScoreError::parse(input, "input is empty"));
    }

    let opens = s.matches('(').count();
    let closes = s.matches(')').count();
    if opens != closes {
        return Err(ScoreError::parse(input, "unbalanced parentheses"));
    }
    if opens == 0 {
        return Err(ScoreError::parse(
            input,
            "missing parenthesized PWA group, e.g. '(1, 0, 6)'",
        ));
    }
    if opens > 1 {
        return Err(ScoreError::parse(input, "expected exactly one PWA group"));
    }

    let Some((head, rest)) = s.split_once('(') else {
        return Err(ScoreError::parse(input, "missing '('"));
    };
    if head.contains(')') {
        return Err(ScoreError::parse(input, "')' appears before '('"));
    }
    let Some(group) = rest.strip_suffix(')') else {
        return Err(ScoreError::parse(input, "unexpected text after ')'"));
    };
    let Some(head) = head.trim_end().strip_suffix('/') else {
        return Err(ScoreError::parse(input, "expected '/' before the PWA group"));
    };

    let categories: Vec<&str> = head.split('/').map(str::trim).collect();
    if categories.len() != CATEGORY_NAMES.len() {
        return Err(ScoreError::parse(
            input,
            format!(
                "expected 4 category scores before the PWA group, found {}",
                categories.len()
            ),
        ));
    }
    for (name, token) in CATEGORY_NAMES.iter().zip(&categories) {
        if token.is_empty() {
            return Err(ScoreError::parse(input, format!("{} score is empty", name)));
        }
        if parse_number(token).is_none() {
            return Err(ScoreError::parse(
                input,
                format!("{} score '{}' is not a number", name, token),
            ));
        }
    }

    let pwa: Vec<&str> = group.split(',').map(str::trim).collect();
    if pwa.len() != PWA_NAMES.len() {
        return Err(ScoreError::parse(
            input,
            format!("expected 3 PWA sub-scores, found {}", pwa.len()),
        ));
    }
    if let Some((name, _)) = PWA_NAMES.iter().zip(&pwa).find(|(_, t)| t.is_empty()) {
        return Err(ScoreError::parse(input, format!("{} sub-score is empty", name)));
    }

    let form = match pwa.iter().filter(|t| t.contains('/')).count() {
        0 => ScoreForm::Shorthand,
        3 => ScoreForm::FullFraction,
        _ => {
            return Err(ScoreError::parse(
                input,
                "PWA group mixes bare counts and fractions",
            ))
        }
    };

    if form == ScoreForm::Shorthand {
        for (name, token) in PWA_NAMES.iter().zip(&pwa) {
            if parse_number(token).is_none() {
                return Err(ScoreError::parse(
                    input,
                    format!("{} sub-score '{}' is not a number", name, token),
                ));
            }
        }
    }

    Ok(SplitScore {
        source: input.to_string(),
        perf: categories[0].to_string(),
        a11y: categories[1].to_string(),
        bp: categories[2].to_string(),
        seo: categories[3].to_string(),
        fnr: pwa[0].to_string(),
        ins: pwa[1].to_string(),
        po: pwa[2].to_string(),
        form,
    })
}
