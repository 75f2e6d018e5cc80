#![forbid(unsafe_code)]

//! Currency and number formatting shared by the views.

/// Group digits with commas: `2500` becomes `"2,500"`.
#[must_use]
pub fn thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-unit amount with a prefix: `"$25,000"`.
#[must_use]
pub fn money(prefix: &str, value: i64) -> String {
    format!("{prefix}{}", thousands(value))
}

/// Amount held in cents, always two decimals: `12750` becomes `"$127.50"`.
#[must_use]
pub fn cents(prefix: &str, value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let abs = value.unsigned_abs();
    let whole = i64::try_from(abs / 100).unwrap_or(i64::MAX);
    format!("{sign}{prefix}{}.{:02}", thousands(whole), abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(950), "950");
        assert_eq!(thousands(2500), "2,500");
        assert_eq!(thousands(1_234_567), "1,234,567");
        assert_eq!(thousands(-4200), "-4,200");
    }

    #[test]
    fn money_and_cents() {
        assert_eq!(money("$", 25_000), "$25,000");
        assert_eq!(cents("$", 12_750), "$127.50");
        assert_eq!(cents("$", 87_774), "$877.74");
        assert_eq!(cents("$", 123_405), "$1,234.05");
        assert_eq!(cents("$", -5), "-$0.05");
    }
}
