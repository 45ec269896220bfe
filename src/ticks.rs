//! Axis tick labels.
//!
//! Each labeled mark along an axis shows the tick's numeric value in one of
//! three styles: a fraction over the unit's own denominator, the closest
//! fraction with a small denominator, or a plain two-digit decimal.

/// Default bound on denominators searched by
/// [`TickFormat::BestApproximation`].
pub const DEFAULT_MAX_DENOMINATOR: i64 = 8;

/// How a tick value is turned into a display string
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TickFormat {
    /// Fractions whose denominator is held constant across all labels, only
    /// the numerator varies: `1/10`, `2/10`, ... `1`, `1 1/10`
    FixedDenominator(i64),
    /// The fraction with denominator at most the given bound that minimizes
    /// absolute error to the tick value
    BestApproximation(i64),
    /// The value rounded to exactly two decimal digits
    Decimal,
}

/// Format a single tick value. Values are formatted independently; nothing
/// is cached between ticks.
pub fn format_tick(value: f64, format: TickFormat) -> String {
    match format {
        TickFormat::FixedDenominator(denominator) => fixed_denominator(value, denominator),
        TickFormat::BestApproximation(max_denominator) => best_fraction(value, max_denominator),
        TickFormat::Decimal => format!("{value:.2}"),
    }
}

/// Find the fraction `n/d` with `d` in `1..=max_denominator` that minimizes
/// `|n/d - value|`. Only a strictly smaller error replaces the incumbent, so
/// ties resolve to the smallest denominator. `d = 1` (plain rounding) is
/// always an admissible candidate, so the search cannot fail.
pub fn best_approximation(value: f64, max_denominator: i64) -> (i64, i64) {
    let max_denominator = max_denominator.max(1);
    let mut best = (value.round() as i64, 1i64);
    let mut best_error = (best.0 as f64 - value).abs();
    for denominator in 2..=max_denominator {
        let numerator = (value * denominator as f64).round() as i64;
        let error = (numerator as f64 / denominator as f64 - value).abs();
        if error < best_error {
            best = (numerator, denominator);
            best_error = error;
        }
    }
    best
}

// The negative side of an axis mirrors the positive side, so the magnitude
// is formatted and the sign prefixed.
fn fixed_denominator(value: f64, denominator: i64) -> String {
    let denominator = denominator.max(1);
    let sign = if value < 0.0 { "-" } else { "" };
    let total = (value.abs() * denominator as f64).round() as i64;
    let whole = total / denominator;
    let remainder = total % denominator;

    if remainder == 0 {
        format!("{sign}{whole}")
    } else if whole == 0 {
        format!("{sign}{remainder}/{denominator}")
    } else {
        format!("{sign}{whole} {remainder}/{denominator}")
    }
}

fn best_fraction(value: f64, max_denominator: i64) -> String {
    let (numerator, denominator) = best_approximation(value, max_denominator);
    if denominator == 1 {
        format!("{numerator}")
    } else if numerator.abs() > denominator {
        // truncating division keeps the whole part's sign aligned with the
        // value; the remainder is always rendered non-negative
        let whole = numerator / denominator;
        let remainder = (numerator % denominator).abs();
        format!("{whole} {remainder}/{denominator}")
    } else {
        format!("{numerator}/{denominator}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fixed_denominator_formats_exactly() {
        let fmt = TickFormat::FixedDenominator(10);
        assert_eq!(format_tick(0.3, fmt), "3/10");
        assert_eq!(format_tick(1.3, fmt), "1 3/10");
        assert_eq!(format_tick(1.0, fmt), "1");
        assert_eq!(format_tick(2.0, fmt), "2");
        assert_eq!(format_tick(0.6, fmt), "6/10");
    }

    #[test]
    fn fixed_denominator_mirrors_the_negative_side() {
        let fmt = TickFormat::FixedDenominator(10);
        assert_eq!(format_tick(-0.3, fmt), "-3/10");
        assert_eq!(format_tick(-1.3, fmt), "-1 3/10");
        assert_eq!(format_tick(-2.0, fmt), "-2");
    }

    #[test]
    fn fixed_denominator_has_no_drift() {
        // formatting k/d then re-reading the fraction must recover k/d
        // exactly, for every k and a spread of denominators
        for d in 1i64..=20 {
            for k in -60i64..=60 {
                let value = k as f64 / d as f64;
                let label = format_tick(value, TickFormat::FixedDenominator(d));
                let recovered = reparse_mixed(&label, d);
                assert_eq!(recovered, k, "k={k} d={d} label={label:?}");
            }
        }
    }

    // Inverse of the fixed-denominator formatter: total numerator over `d`.
    fn reparse_mixed(label: &str, d: i64) -> i64 {
        let negative = label.starts_with('-');
        let label = label.trim_start_matches('-');
        let total = match (label.split_once(' '), label.split_once('/')) {
            (Some((whole, frac)), _) => {
                let (num, den) = frac.split_once('/').unwrap();
                assert_eq!(den.parse::<i64>().unwrap(), d);
                whole.parse::<i64>().unwrap() * d + num.parse::<i64>().unwrap()
            }
            (None, Some((num, den))) => {
                assert_eq!(den.parse::<i64>().unwrap(), d);
                num.parse::<i64>().unwrap()
            }
            (None, None) => label.parse::<i64>().unwrap() * d,
        };
        if negative {
            -total
        } else {
            total
        }
    }

    #[test]
    fn best_approximation_stays_within_the_bound() {
        for max in 1i64..=12 {
            for i in -40..=40 {
                let value = i as f64 * 0.13;
                let (_, d) = best_approximation(value, max);
                assert!(d >= 1 && d <= max);
            }
        }
    }

    #[test]
    fn best_approximation_round_trips_small_fractions() {
        assert_eq!(format_tick(-0.75, TickFormat::BestApproximation(8)), "-3/4");
        assert_eq!(format_tick(2.0, TickFormat::BestApproximation(8)), "2");
        assert_eq!(format_tick(0.375, TickFormat::BestApproximation(8)), "3/8");
        assert_eq!(format_tick(-0.625, TickFormat::BestApproximation(8)), "-5/8");
        assert_eq!(
            format_tick(1.0 / 3.0, TickFormat::BestApproximation(8)),
            "1/3"
        );
    }

    #[test]
    fn best_approximation_splits_improper_fractions() {
        assert_eq!(format_tick(2.5, TickFormat::BestApproximation(8)), "2 1/2");
        assert_eq!(
            format_tick(-1.75, TickFormat::BestApproximation(8)),
            "-1 3/4"
        );
        assert_eq!(
            format_tick(5.0 / 3.0, TickFormat::BestApproximation(8)),
            "1 2/3"
        );
    }

    #[test]
    fn ties_resolve_to_the_smallest_denominator() {
        // 0.5 is representable at d=2, 4, 6, 8; the first exact hit wins
        assert_eq!(best_approximation(0.5, 8), (1, 2));
        // integers are exact at d=1 and never escalate
        assert_eq!(best_approximation(3.0, 8), (3, 1));
    }

    #[test]
    fn decimal_always_has_two_digits() {
        assert_eq!(format_tick(0.3, TickFormat::Decimal), "0.30");
        assert_eq!(format_tick(-0.75, TickFormat::Decimal), "-0.75");
        assert_eq!(format_tick(2.0, TickFormat::Decimal), "2.00");
        assert_eq!(format_tick(-1.0 / 3.0, TickFormat::Decimal), "-0.33");
        // 1.005 stored as an f64 sits just below the midpoint
        assert_eq!(format_tick(1.005, TickFormat::Decimal), "1.00");
    }
}
