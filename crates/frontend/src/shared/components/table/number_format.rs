//! Number formatting for dashboard tables and charts

/// Shown in place of a missing year-over-year value
pub const YOY_PLACEHOLDER: &str = "—";

/// Inserts `separator` between groups of three digits of an unsigned digit string
fn group_thousands(digits: &str, separator: char) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(ch);
    }
    result
}

/// Formats a value as whole US dollars
///
/// # Examples
///
/// ```
/// use frontend::shared::components::table::format_currency;
/// assert_eq!(format_currency(1234.0), "$1,234");
/// assert_eq!(format_currency(-98765.4), "-$98,765");
/// ```
pub fn format_currency(value: f64) -> String {
    // round() goes half away from zero, unlike `{:.0}`
    let rounded = value.round();
    let grouped = group_thousands(&format!("{:.0}", rounded.abs()), ',');
    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Formats a year-over-year change as a signed percentage with one decimal
///
/// # Examples
///
/// ```
/// use frontend::shared::components::table::format_yoy;
/// assert_eq!(format_yoy(Some(12.34)), "+12.3%");
/// assert_eq!(format_yoy(Some(-5.0)), "-5.0%");
/// assert_eq!(format_yoy(None), "—");
/// ```
pub fn format_yoy(yoy: Option<f64>) -> String {
    match yoy {
        None => YOY_PLACEHOLDER.to_string(),
        Some(value) => {
            // x + 0.0 turns -0.0 into +0.0; ties round away from zero
            let value = value + 0.0;
            let rounded = (value * 10.0).round() / 10.0;
            let sign = if value >= 0.0 { "+" } else { "" };
            format!("{}{:.1}%", sign, rounded)
        }
    }
}

/// Chart axis tick in thousands of dollars, e.g. `$250k`
pub fn format_axis_tick(value: f64) -> String {
    format!("${:.0}k", ((value + 0.0) / 1000.0).round())
}
