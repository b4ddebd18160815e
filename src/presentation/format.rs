/// Formats a number for display with precision adapted to its magnitude.
///
/// - `NaN`, `Infinity` and `-Infinity` are spelled out.
/// - Magnitudes outside `[1e-6, 1e9)` use scientific notation with four
///   decimals (`1.2346e+9`).
/// - Otherwise decimals shrink as the magnitude grows, from six below `0.01`
///   to one from `1000` up, with trailing zeros and dot removed.
///
/// The result is left-padded with spaces to `pad_width` characters.
///
/// ## Example
/// ```
/// use fermi::presentation::format::format_number;
///
/// assert_eq!(format_number(1234.5678, 0), "1234.6");
/// assert_eq!(format_number(0.5, 0), "0.5");
/// assert_eq!(format_number(1_234_567_890.0, 0), "1.2346e+9");
/// assert_eq!(format_number(0.000_000_12, 0), "1.2000e-7");
/// assert_eq!(format_number(f64::NEG_INFINITY, 0), "-Infinity");
/// assert_eq!(format_number(7.0, 4), "   7");
/// ```
#[must_use]
pub fn format_number(x: f64, pad_width: usize) -> String {
    let text = if x.is_nan() {
        "NaN".to_string()
    } else if x.is_infinite() {
        if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        let abs = x.abs();
        if abs != 0.0 && !(1e-6..1e9).contains(&abs) {
            format_exponential(x)
        } else {
            let decimals = decimals_for(abs);
            // Avoid printing "-0".
            let x = if x == 0.0 { 0.0 } else { x };
            trim_fraction(&format!("{x:.decimals$}"))
        }
    };
    format!("{text:>pad_width$}")
}

fn decimals_for(abs: f64) -> usize {
    if abs >= 1000.0 {
        1
    } else if abs >= 100.0 {
        2
    } else if abs >= 10.0 {
        3
    } else if abs >= 1.0 {
        4
    } else if abs >= 0.01 {
        5
    } else {
        6
    }
}

/// `1.2346e9` becomes `1.2346e+9`.
fn format_exponential(x: f64) -> String {
    let formatted = format!("{x:.4e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        },
        _ => formatted,
    }
}

fn trim_fraction(text: &str) -> String {
    if !text.contains('.') {
        return text.to_string();
    }
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" { "0" } else { trimmed }.to_string()
}
