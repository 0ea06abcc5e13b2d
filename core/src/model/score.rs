/// Parses displayed cell text the way a lenient `parseInt(text, 10)` does:
/// leading whitespace, an optional sign, then the longest run of ASCII digits.
/// Text with no leading digits counts as zero.
#[must_use]
pub fn parse_score_text(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    if negative { -value } else { value }
}

/// `sum(plus) - sum(minus)` over raw cell text.
#[must_use]
pub fn total_from_text<'a>(
    plus: impl IntoIterator<Item = &'a str>,
    minus: impl IntoIterator<Item = &'a str>,
) -> i64 {
    let plus_sum = plus
        .into_iter()
        .fold(0i64, |acc, t| acc.saturating_add(parse_score_text(t)));
    let minus_sum = minus
        .into_iter()
        .fold(0i64, |acc, t| acc.saturating_add(parse_score_text(t)));
    plus_sum.saturating_sub(minus_sum)
}
