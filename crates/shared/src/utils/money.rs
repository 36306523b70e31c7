/// Renders an amount stored in integer minor units (cents) for display in
/// customer-facing text.
pub fn format_money(minor: i64) -> String {
    format!("$ {}.{:02}", minor / 100, (minor % 100).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_and_fractional_amounts() {
        assert_eq!(format_money(35000), "$ 350.00");
        assert_eq!(format_money(105), "$ 1.05");
        assert_eq!(format_money(0), "$ 0.00");
    }
}
