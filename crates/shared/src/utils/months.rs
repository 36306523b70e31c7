use chrono::{Datelike, NaiveDate};

/// The last 12 calendar months ending with the month of `today`, oldest
/// first, as (month start, axis label) pairs.
pub fn last_twelve_months(today: NaiveDate) -> Vec<(NaiveDate, String)> {
    (0..12)
        .rev()
        .map(|back| {
            let month = months_back(today, back);
            let label = month.format("%b %y").to_string();
            (month, label)
        })
        .collect()
}

fn months_back(today: NaiveDate, back: u32) -> NaiveDate {
    let months0 = today.year() * 12 + today.month0() as i32 - back as i32;
    let year = months0.div_euclid(12);
    let month0 = months0.rem_euclid(12) as u32;
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap_or(today)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_twelve_buckets_oldest_first() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
        let months = last_twelve_months(today);
        assert_eq!(months.len(), 12);
        assert_eq!(months[0].0, NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
        assert_eq!(months[11].0, NaiveDate::from_ymd_opt(2026, 8, 1).unwrap());
    }

    #[test]
    fn crosses_year_boundary() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let months = last_twelve_months(today);
        assert_eq!(months[0].0, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        assert_eq!(months[11].0, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
    }

    #[test]
    fn labels_use_short_month_and_two_digit_year() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let months = last_twelve_months(today);
        assert_eq!(months[11].1, "Mar 26");
    }
}
