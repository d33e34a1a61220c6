use super::split::{parse_number, split_score, ScoreForm, SplitScore};
use super::types::{Metrics, PwaScores, ScoreReport};
use crate::error::{ScoreError, ScoreResult};

/// Category scores are reported on a 0-100 scale.
const CATEGORY_SCALE: f64 = 100.0;

// Check counts behind the shorthand PWA numerators.
const FAST_RELIABLE_CHECKS: f64 = 3.0;
const INSTALLABLE_CHECKS: f64 = 3.0;
const PWA_OPTIMIZED_CHECKS: f64 = 7.0;

/// Evaluate a `"numerator/denominator"` token.
pub fn eval_fraction(token: &str) -> ScoreResult<f64> {
    let Some((num, den)) = token.split_once('/') else {
        return Err(ScoreError::arithmetic(
            token,
            "expected 'numerator/denominator'",
        ));
    };
    let numerator = parse_number(num).ok_or_else(|| {
        ScoreError::arithmetic(token, format!("numerator '{}' is not a number", num.trim()))
    })?;
    let denominator = parse_number(den).ok_or_else(|| {
        ScoreError::arithmetic(
            token,
            format!("denominator '{}' is not a number", den.trim()),
        )
    })?;
    if denominator == 0.0 {
        return Err(ScoreError::arithmetic(token, "denominator is zero"));
    }

    let value = numerator / denominator;
    if !value.is_finite() {
        return Err(ScoreError::arithmetic(token, "result is not finite"));
    }
    Ok(value)
}

fn unit_fraction(split: &SplitScore, name: &str, value: f64) -> ScoreResult<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ScoreError::parse(
            &split.source,
            format!("{} evaluates to {}, outside 0..1", name, value),
        ))
    }
}

fn scaled(split: &SplitScore, name: &str, token: &str, scale: f64) -> ScoreResult<f64> {
    let value = parse_number(token).ok_or_else(|| {
        ScoreError::parse(&split.source, format!("{} '{}' is not a number", name, token))
    })?;
    unit_fraction(split, name, value / scale)
}

fn pwa_fraction(split: &SplitScore, name: &str, token: &str, checks: f64) -> ScoreResult<f64> {
    match split.form {
        ScoreForm::Shorthand => scaled(split, name, token, checks),
        ScoreForm::FullFraction => unit_fraction(split, name, eval_fraction(token)?),
    }
}

/// Normalize split tokens into fractions and compute their average.
pub fn compute_metrics(split: &SplitScore) -> ScoreResult<Metrics> {
    let perf = scaled(split, "perf", &split.perf, CATEGORY_SCALE)?;
    let a11y = scaled(split, "a11y", &split.a11y, CATEGORY_SCALE)?;
    let bp = scaled(split, "bp", &split.bp, CATEGORY_SCALE)?;
    let seo = scaled(split, "seo", &split.seo, CATEGORY_SCALE)?;

    let pwa = PwaScores {
        fnr: pwa_fraction(split, "fnr", &split.fnr, FAST_RELIABLE_CHECKS)?,
        ins: pwa_fraction(split, "ins", &split.ins, INSTALLABLE_CHECKS)?,
        po: pwa_fraction(split, "po", &split.po, PWA_OPTIMIZED_CHECKS)?,
    };

    Ok(Metrics::from_components(perf, a11y, bp, seo, pwa))
}

/// Parse one score string into fractions.
pub fn parse_metrics(score_str: &str) -> ScoreResult<Metrics> {
    compute_metrics(&split_score(score_str)?)
}

/// Parse and aggregate a single score string.
pub fn compute_one(score_str: &str, as_percentage: bool) -> ScoreResult<ScoreReport> {
    Ok(ScoreReport::from_metrics(
        parse_metrics(score_str)?,
        as_percentage,
    ))
}

/// Replace every row after the first with its difference from the first.
pub fn diff_against_first(rows: &[Metrics]) -> Vec<Metrics> {
    let Some(reference) = rows.first() else {
        return Vec::new();
    };
    rows.iter()
        .enumerate()
        .map(|(i, row)| if i == 0 { *row } else { row.diff(reference) })
        .collect()
}

/// Aggregate a batch of score strings, one report per input in input order.
///
/// With `show_diff`, row 0 is returned as-is and every later row holds its
/// absolute difference from row 0. Differences are taken on the raw
/// fractions and only then converted to percentages. The whole call fails
/// on the first invalid input.
pub fn average<S: AsRef<str>>(
    score_strs: &[S],
    as_percentage: bool,
    show_diff: bool,
) -> ScoreResult<Vec<ScoreReport>> {
    let metrics = score_strs
        .iter()
        .map(|s| parse_metrics(s.as_ref()))
        .collect::<ScoreResult<Vec<_>>>()?;

    let rows = if show_diff {
        diff_against_first(&metrics)
    } else {
        metrics
    };

    Ok(rows
        .into_iter()
        .map(|row| ScoreReport::from_metrics(row, as_percentage))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::types::{Percent, Scores};

    const SAMPLE: &str = "14 / 100 / 98 / 100 / (1, 0, 6)";
    const SECOND: &str = "28 / 100 / 97 / 100 / (1, 2, 6)";

    fn numeric(report: &ScoreReport) -> Metrics {
        match report {
            ScoreReport::Numeric(m) => *m,
            other => panic!("expected numeric report, got {:?}", other),
        }
    }

    fn percentage(report: &ScoreReport) -> Scores<String> {
        match report {
            ScoreReport::Percentage(p) => p.map(|v: Percent| v.to_string()),
            other => panic!("expected percentage report, got {:?}", other),
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_single_numeric() {
        let results = average(&[SAMPLE], false, false).unwrap();
        assert_eq!(results.len(), 1);
        let m = numeric(&results[0]);
        assert!(close(m.perf, 0.14));
        assert!(close(m.a11y, 1.0));
        assert!(close(m.bp, 0.98));
        assert!(close(m.seo, 1.0));
        assert!(close(m.pwa.fnr, 1.0 / 3.0));
        assert!(close(m.pwa.ins, 0.0));
        assert!(close(m.pwa.po, 6.0 / 7.0));
        assert!(close(m.average, 0.6157823129251702));
    }

    #[test]
    fn test_single_percentage() {
        let results = average(&[SAMPLE], true, false).unwrap();
        let p = percentage(&results[0]);
        assert_eq!(p.perf, "14%");
        assert_eq!(p.a11y, "100%");
        assert_eq!(p.bp, "98%");
        assert_eq!(p.seo, "100%");
        assert_eq!(p.pwa.fnr, "33.33%");
        assert_eq!(p.pwa.ins, "0%");
        assert_eq!(p.pwa.po, "85.71%");
        assert_eq!(p.average, "61.58%");
    }

    #[test]
    fn test_compressed_whitespace_matches_spaced() {
        let spaced = parse_metrics(SAMPLE).unwrap();
        let compressed = parse_metrics("14/100/98/100/(1,0,6)").unwrap();
        assert_eq!(spaced, compressed);
    }

    #[test]
    fn test_full_fraction_matches_shorthand() {
        let shorthand = parse_metrics(SAMPLE).unwrap();
        let fraction = parse_metrics("14 / 100 / 98 / 100 / (1/3, 0/3, 6/7)").unwrap();
        assert_eq!(shorthand, fraction);
    }

    #[test]
    fn test_full_fraction_uses_given_denominators() {
        let m = parse_metrics("50 / 50 / 50 / 50 / (1/2, 1/4, 3/4)").unwrap();
        assert!(close(m.pwa.fnr, 0.5));
        assert!(close(m.pwa.ins, 0.25));
        assert!(close(m.pwa.po, 0.75));
        assert!(close(m.average, (0.5 * 4.0 + 0.5 + 0.25 + 0.75) / 7.0));
    }

    #[test]
    fn test_two_row_diff_numeric() {
        let results = average(&[SAMPLE, SECOND], false, true).unwrap();
        assert_eq!(results.len(), 2);

        let first = numeric(&results[0]);
        assert_eq!(first, parse_metrics(SAMPLE).unwrap());

        let diff = numeric(&results[1]);
        assert!(close(diff.perf, 0.14));
        assert!(close(diff.a11y, 0.0));
        assert!(close(diff.bp, -0.01));
        assert!(close(diff.seo, 0.0));
        assert!(close(diff.pwa.fnr, 0.0));
        assert!((diff.pwa.ins - 0.6667).abs() < 1e-4);
        assert!(close(diff.pwa.po, 0.0));

        let second = parse_metrics(SECOND).unwrap();
        assert!(close(diff.average, second.average - first.average));
    }

    #[test]
    fn test_two_row_diff_percentage() {
        let results = average(&[SAMPLE, SECOND], true, true).unwrap();
        assert_eq!(percentage(&results[0]).perf, "14%");

        let diff = percentage(&results[1]);
        assert_eq!(diff.perf, "14%");
        assert_eq!(diff.a11y, "0%");
        assert_eq!(diff.bp, "-1%");
        assert_eq!(diff.pwa.ins, "66.67%");
        assert_eq!(diff.average, "11.38%");
    }

    #[test]
    fn test_diff_of_identical_rows_is_zero() {
        let results = average(&[SAMPLE, SAMPLE, SAMPLE], true, true).unwrap();
        for report in &results[1..] {
            assert_eq!(report.column_strings(), std::array::from_fn(|_| "0%".to_string()));
        }
    }

    #[test]
    fn test_without_diff_rows_are_independent() {
        let results = average(&[SAMPLE, SECOND], false, false).unwrap();
        assert_eq!(numeric(&results[1]), parse_metrics(SECOND).unwrap());
    }

    #[test]
    fn test_empty_batch() {
        let empty: [&str; 0] = [];
        assert!(average(&empty, false, true).unwrap().is_empty());
    }

    #[test]
    fn test_batch_fails_on_any_invalid_input() {
        let err = average(&[SAMPLE, "14 / 100 / (1, 0, 6)"], false, false).unwrap_err();
        assert!(matches!(err, ScoreError::Parse { .. }));
    }

    #[test]
    fn test_accepts_owned_strings() {
        let inputs = vec![SAMPLE.to_string()];
        assert_eq!(average(&inputs, false, false).unwrap().len(), 1);
    }

    #[test]
    fn test_compute_one() {
        let report = compute_one(SAMPLE, true).unwrap();
        assert_eq!(percentage(&report).average, "61.58%");
    }

    #[test]
    fn test_zero_denominator_is_arithmetic_error() {
        let err = parse_metrics("14 / 100 / 98 / 100 / (1/0, 0/3, 6/7)").unwrap_err();
        assert_eq!(
            err,
            ScoreError::Arithmetic {
                token: "1/0".to_string(),
                reason: "denominator is zero".to_string(),
            }
        );
    }

    #[test]
    fn test_non_numeric_fraction_part_is_arithmetic_error() {
        let err = parse_metrics("14 / 100 / 98 / 100 / (a/3, 0/3, 6/7)").unwrap_err();
        assert!(matches!(err, ScoreError::Arithmetic { ref token, .. } if token == "a/3"));

        let err = parse_metrics("14 / 100 / 98 / 100 / (1/3, 0/x, 6/7)").unwrap_err();
        assert!(matches!(err, ScoreError::Arithmetic { ref token, .. } if token == "0/x"));
    }

    #[test]
    fn test_eval_fraction() {
        assert!(close(eval_fraction("1/3").unwrap(), 1.0 / 3.0));
        assert!(close(eval_fraction(" 6 / 7 ").unwrap(), 6.0 / 7.0));
        assert!(eval_fraction("1").is_err());
        assert!(eval_fraction("1/2/3").is_err());
        assert!(eval_fraction("1/0").is_err());
        assert!(eval_fraction("1e308/1e-308").is_err());
    }

    #[test]
    fn test_out_of_range_category_rejected() {
        let err = parse_metrics("140 / 100 / 98 / 100 / (1, 0, 6)").unwrap_err();
        assert!(err.to_string().contains("perf evaluates to 1.4"));

        let err = parse_metrics("-1 / 100 / 98 / 100 / (1, 0, 6)").unwrap_err();
        assert!(matches!(err, ScoreError::Parse { .. }));
    }

    #[test]
    fn test_out_of_range_shorthand_count_rejected() {
        assert!(parse_metrics("14 / 100 / 98 / 100 / (4, 0, 6)").is_err());
        assert!(parse_metrics("14 / 100 / 98 / 100 / (1, 0, 8)").is_err());
        assert!(parse_metrics("14 / 100 / 98 / 100 / (3, 3, 7)").is_ok());
    }

    #[test]
    fn test_out_of_range_fraction_rejected() {
        let err = parse_metrics("14 / 100 / 98 / 100 / (4/3, 0/3, 6/7)").unwrap_err();
        assert!(matches!(err, ScoreError::Parse { .. }));
    }

    #[test]
    fn test_perfect_and_zero_scores() {
        let perfect = parse_metrics("100/100/100/100/(3,3,7)").unwrap();
        assert!(close(perfect.average, 1.0));
        let zero = parse_metrics("0/0/0/0/(0,0,0)").unwrap();
        assert!(close(zero.average, 0.0));
    }
}
