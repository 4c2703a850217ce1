//! Rupee formatting with Indian digit grouping
//!
//! The last three digits form one group and every group above it has two
//! digits: 1,23,45,678.

/// Currency symbol prefixed to every displayed amount
pub const RUPEE: char = '₹';

/// Group digits the Indian way
///
/// # Example
/// ```
/// use trip_estimator_core::format::group_indian;
///
/// assert_eq!(group_indian(999), "999");
/// assert_eq!(group_indian(88_000), "88,000");
/// assert_eq!(group_indian(12_345_678), "1,23,45,678");
/// ```
pub fn group_indian(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2 + 1);

    if amount < 0 {
        grouped.push('-');
    }

    if digits.len() <= 3 {
        grouped.push_str(&digits);
        return grouped;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    // Leading group is one or two digits
    let first = head.len() % 2;
    if first == 1 {
        grouped.push_str(&head[..1]);
    }
    for (i, pair) in head.as_bytes()[first..].chunks(2).enumerate() {
        if i > 0 || first == 1 {
            grouped.push(',');
        }
        grouped.extend(pair.iter().map(|b| char::from(*b)));
    }
    grouped.push(',');
    grouped.push_str(tail);
    grouped
}

/// Format whole rupees for display, e.g. `₹88,000`
pub fn format_inr(amount: i64) -> String {
    format!("{}{}", RUPEE, group_indian(amount))
}

/// Round an interpolated value to the nearest rupee and format it
pub fn format_display_value(value: f64) -> String {
    format_inr(value.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts_ungrouped() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(7), "7");
        assert_eq!(group_indian(800), "800");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(group_indian(1_000), "1,000");
        assert_eq!(group_indian(18_000), "18,000");
    }

    #[test]
    fn test_lakhs_and_crores() {
        assert_eq!(group_indian(100_000), "1,00,000");
        assert_eq!(group_indian(8_800_000), "88,00,000");
        assert_eq!(group_indian(10_000_000), "1,00,00,000");
        assert_eq!(group_indian(123_456_789), "12,34,56,789");
    }

    #[test]
    fn test_negative() {
        assert_eq!(group_indian(-120_000), "-1,20,000");
    }

    #[test]
    fn test_extremes() {
        assert_eq!(group_indian(i64::MAX), "92,23,37,20,36,85,47,75,807");
        assert_eq!(group_indian(i64::MIN), "-92,23,37,20,36,85,47,75,808");
    }

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(88_000), "₹88,000");
        assert_eq!(format_inr(8_800_000), "₹88,00,000");
        assert_eq!(format_display_value(43_999.5), "₹44,000");
    }
}
