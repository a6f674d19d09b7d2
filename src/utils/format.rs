/// Format a price in dollars with two decimals (e.g., $12.99)
pub fn format_price(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount)
    }
}

/// Format a count with thousands separator (e.g., 1,234,567)
pub fn format_count(count: usize) -> String {
    let s = count.to_string();
    let mut result = String::new();

    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}

/// "Showing 20 of 50 products"
pub fn showing_label(shown: usize, total: usize) -> String {
    format!(
        "Showing {} of {} {}",
        format_count(shown),
        format_count(total),
        pluralize(total, "product", "products")
    )
}

pub fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

/// Cut text to `max_chars` characters, appending an ellipsis when shortened
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(12.99), "$12.99");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(5.0), "$5.00");
        assert_eq!(format_price(-3.5), "-$3.50");
        assert_eq!(format_price(f64::NAN), "$0.00");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_showing_label() {
        assert_eq!(showing_label(20, 50), "Showing 20 of 50 products");
        assert_eq!(showing_label(1, 1), "Showing 1 of 1 product");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("a much longer blurb", 6), "a much...");
        assert_eq!(truncate_text("héllo wörld", 5), "héllo...");
    }
}
