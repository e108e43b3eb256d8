use crate::models::raid::CapacityUnit;

/// Format a capacity with one decimal and its unit label: "7.5 TB"
pub fn fmt_capacity(value: f64, unit: CapacityUnit) -> String {
    format!("{:.1} {}", value, unit.label())
}

pub const STAR_ON:  &str = "★";
pub const STAR_OFF: &str = "☆";

/// Filled and empty glyph counts for a rating, always summing to five.
pub fn star_counts(rating: u8) -> (usize, usize) {
    let filled = rating.min(5) as usize;
    (filled, 5 - filled)
}

/// Five-glyph star bar for a 1–5 rating: "★★★☆☆"
pub fn fmt_stars(rating: u8) -> String {
    let (on, off) = star_counts(rating);
    STAR_ON.repeat(on) + &STAR_OFF.repeat(off)
}

/// Word label for a 1–5 rating. Out-of-range ratings have no label.
pub fn rating_label(rating: u8) -> &'static str {
    match rating {
        5 => "Very High",
        4 => "High",
        3 => "Medium",
        2 => "Low",
        1 => "Very Low",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_rounds_to_one_decimal() {
        assert_eq!(fmt_capacity(7.5, CapacityUnit::Tb), "7.5 TB");
        assert_eq!(fmt_capacity(1500.0, CapacityUnit::Gb), "1500.0 GB");
        assert_eq!(fmt_capacity(3.333, CapacityUnit::Tb), "3.3 TB");
        assert_eq!(fmt_capacity(-3.0, CapacityUnit::Tb), "-3.0 TB");
    }

    #[test]
    fn stars_fill_to_rating() {
        assert_eq!(fmt_stars(5), "★★★★★");
        assert_eq!(fmt_stars(3), "★★★☆☆");
        assert_eq!(fmt_stars(0), "☆☆☆☆☆");
        assert_eq!(fmt_stars(9), "★★★★★");
    }

    #[test]
    fn star_counts_sum_to_five() {
        assert_eq!(star_counts(0), (0, 5));
        assert_eq!(star_counts(4), (4, 1));
        assert_eq!(star_counts(200), (5, 0));
    }

    #[test]
    fn labels() {
        assert_eq!(rating_label(1), "Very Low");
        assert_eq!(rating_label(4), "High");
        assert_eq!(rating_label(0), "");
    }
}
