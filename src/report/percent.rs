/// Format `numerator / denominator` as a percentage with two decimals.
///
/// A zero denominator yields `"0%"` rather than dividing. The ratio is
/// rounded half-up in integer hundredths of a percent, so exact ties such as
/// `1/800` (0.125%) round away from zero.
///
/// ```
/// use trendy_cucumber::report::percent::percent;
///
/// assert_eq!(percent(1, 3), "33.33%");
/// assert_eq!(percent(1, 800), "0.13%");
/// assert_eq!(percent(5, 0), "0%");
/// ```
pub fn percent(numerator: usize, denominator: usize) -> String {
    if denominator == 0 {
        return "0%".to_string();
    }
    let (n, d) = (numerator as u128, denominator as u128);
    let hundredths = (n * 20_000 + d) / (2 * d);
    format!("{}.{:02}%", hundredths / 100, hundredths % 100)
}
