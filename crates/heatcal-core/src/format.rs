//! Display formatting: month names, temperature labels, tooltip text.

use crate::dataset::TemperatureRecord;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English name for a 1-indexed month.
///
/// # Panics
/// Panics if `month` is outside `1..=12`; callers pass validated months.
#[inline]
pub fn month_name(month: u8) -> &'static str {
    MONTH_NAMES[usize::from(month) - 1]
}

/// One-decimal display form used for cell data attributes and legend labels.
#[inline]
pub fn fmt_temp(value: f64) -> String {
    format!("{value:.1}")
}

/// Hover label for one cell: year, month name, absolute temperature and
/// variance, both to one decimal.
pub fn tooltip_label(record: &TemperatureRecord, base_temperature: f64) -> String {
    format!(
        "{} - {}\n{} ℃\n{} ℃",
        record.year,
        month_name(record.month),
        fmt_temp(record.absolute_temp(base_temperature)),
        fmt_temp(record.variance),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names_are_one_indexed() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
    }

    #[test]
    fn temps_round_to_one_decimal() {
        assert_eq!(fmt_temp(7.294), "7.3");
        assert_eq!(fmt_temp(-2.223), "-2.2");
        assert_eq!(fmt_temp(8.0), "8.0");
    }

    #[test]
    fn tooltip_carries_year_month_temp_and_variance() {
        let rec = TemperatureRecord { year: 1753, month: 1, variance: -1.366 };
        assert_eq!(tooltip_label(&rec, 8.66), "1753 - January\n7.3 ℃\n-1.4 ℃");
    }
}
