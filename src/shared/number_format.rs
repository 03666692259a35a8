//! Zahlenformatierung im Stil der Standard-Locale (en-US).
//!
//! Tausender-Trennzeichen `,`, Dezimalpunkt `.`, höchstens drei Nachkommastellen,
//! keine abschließenden Nullen.

/// Maximale Anzahl Nachkommastellen.
const MAX_FRACTION_DIGITS: i32 = 3;

/// Formatiert eine Zahl wie `Number.toLocaleString()` in der Standard-Locale.
pub fn format_locale(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let scale = 10f64.powi(MAX_FRACTION_DIGITS);
    // f64::round rundet halbe Werte von der Null weg
    let rounded = (value.abs() * scale).round() / scale;
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS as usize, rounded);
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + integer.len() / 3 + 1);
    if value.is_sign_negative() && rounded != 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ganze_zahlen_ohne_nachkommastellen() {
        assert_eq!(format_locale(0.0), "0");
        assert_eq!(format_locale(7.0), "7");
        assert_eq!(format_locale(999.0), "999");
    }

    #[test]
    fn test_tausender_trennzeichen() {
        assert_eq!(format_locale(1234.5), "1,234.5");
        assert_eq!(format_locale(1_000_000.0), "1,000,000");
        assert_eq!(format_locale(12_345.678), "12,345.678");
    }

    #[test]
    fn test_hoechstens_drei_nachkommastellen() {
        assert_eq!(format_locale(5.2), "5.2");
        assert_eq!(format_locale(3.14159), "3.142");
        assert_eq!(format_locale(0.0004), "0");
        assert_eq!(format_locale(1.9996), "2");
    }

    #[test]
    fn test_negative_werte() {
        assert_eq!(format_locale(-1234.5), "-1,234.5");
        assert_eq!(format_locale(-0.0001), "0");
    }

    #[test]
    fn test_nicht_endliche_werte() {
        assert_eq!(format_locale(f64::NAN), "NaN");
        assert_eq!(format_locale(f64::INFINITY), "∞");
    }
}
