/// Parses free text into a numeric sequence.
///
/// Commas and any whitespace act as separators. Tokens that are not numbers
/// are skipped without error, as are non-finite values such as `NaN` or
/// `inf`.
///
/// # Examples
///
/// ```
/// use statlens_stats::parse::parse_numbers;
///
/// assert_eq!(parse_numbers("1, 2,3  4\n5"), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert_eq!(parse_numbers("10, abc, -2.5, 1e2"), vec![10.0, -2.5, 100.0]);
/// assert!(parse_numbers("   ").is_empty());
/// ```
#[must_use]
pub fn parse_numbers(text: &str) -> Vec<f64> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .collect()
}
