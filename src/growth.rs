//! Period-over-period growth for dashboard stat cards
//!
//! Inputs come straight from aggregate queries and may be missing, zero or
//! NaN; none of that is an error here.

/// Direction of change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    /// Classify a growth percentage
    pub fn of(pct: f64) -> Self {
        if pct > 0.0 {
            Trend::Up
        } else if pct < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Flat => "flat",
        }
    }
}

/// Percentage change from `previous` to `current`, rounded to one decimal
///
/// A zero baseline reports 100% if anything appeared, else 0%. Negative
/// baselines are measured against their magnitude so a rise is positive.
pub fn growth_percentage(current: f64, previous: f64) -> f64 {
    if !current.is_finite() || !previous.is_finite() {
        return 0.0;
    }
    if previous == 0.0 {
        return if current > 0.0 { 100.0 } else { 0.0 };
    }
    let pct = (current - previous) / previous.abs() * 100.0;
    let rounded = (pct * 10.0).round() / 10.0;
    // Avoid "-0.0"
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Same as [`growth_percentage`] but tolerates absent values (treated as 0)
pub fn growth_from_options(current: Option<f64>, previous: Option<f64>) -> f64 {
    growth_percentage(current.unwrap_or(0.0), previous.unwrap_or(0.0))
}

/// Render a percentage for display: `+12.5%`, `-3.0%`, `0.0%`
pub fn format_growth(pct: f64) -> String {
    match Trend::of(pct) {
        Trend::Up => format!("+{:.1}%", pct),
        Trend::Down => format!("{:.1}%", pct),
        Trend::Flat => "0.0%".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_growth() {
        assert_eq!(growth_percentage(150.0, 100.0), 50.0);
        assert_eq!(growth_percentage(75.0, 100.0), -25.0);
        assert_eq!(growth_percentage(100.0, 100.0), 0.0);
    }

    #[test]
    fn test_rounds_to_one_decimal() {
        // 1/3 growth = 33.333...%
        assert_eq!(growth_percentage(4.0, 3.0), 33.3);
        assert_eq!(growth_percentage(2.0, 3.0), -33.3);
    }

    #[test]
    fn test_zero_baseline() {
        assert_eq!(growth_percentage(12.0, 0.0), 100.0);
        assert_eq!(growth_percentage(0.0, 0.0), 0.0);
        assert_eq!(growth_percentage(-5.0, 0.0), 0.0);
    }

    #[test]
    fn test_negative_baseline_sign_follows_change() {
        assert_eq!(growth_percentage(-50.0, -100.0), 50.0);
        assert_eq!(growth_percentage(-150.0, -100.0), -50.0);
    }

    #[test]
    fn test_non_finite_inputs() {
        assert_eq!(growth_percentage(f64::NAN, 10.0), 0.0);
        assert_eq!(growth_percentage(10.0, f64::INFINITY), 0.0);
    }

    #[test]
    fn test_tiny_negative_rounds_to_plain_zero() {
        let pct = growth_percentage(99_999.0, 100_000.0);
        assert_eq!(pct, 0.0);
        assert!(pct.is_sign_positive());
    }

    #[test]
    fn test_missing_values() {
        assert_eq!(growth_from_options(Some(5.0), None), 100.0);
        assert_eq!(growth_from_options(None, Some(5.0)), -100.0);
        assert_eq!(growth_from_options(None, None), 0.0);
    }

    #[test]
    fn test_format_and_trend() {
        assert_eq!(format_growth(12.5), "+12.5%");
        assert_eq!(format_growth(-3.0), "-3.0%");
        assert_eq!(format_growth(0.0), "0.0%");
        assert_eq!(Trend::of(-0.1), Trend::Down);
        assert_eq!(Trend::of(0.0).as_str(), "flat");
    }
}
