//! pt-BR number formatting for messages and e-mails, matching what
//! `toLocaleString("pt-BR")` produces in the browser.

/// Formats a currency amount as `R$ 1.234,56`.
pub fn format_brl(value: f64) -> String {
    let negative = value < 0.0;
    let total_cents = (value.abs() * 100.0).round() as u64;
    let reais = total_cents / 100;
    let cents = total_cents % 100;
    let sign = if negative { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, group_thousands(reais), cents)
}

/// Formats a count with dot thousands separators, e.g. `1.234`.
pub fn format_count(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(value.unsigned_abs()))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(*b as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_currency() {
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(1234.5), "R$ 1.234,50");
        assert_eq!(format_brl(50_000_000.0), "R$ 50.000.000,00");
        assert_eq!(format_brl(-12.34), "-R$ 12,34");
    }

    #[test]
    fn formats_counts() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(48), "48");
        assert_eq!(format_count(52_817), "52.817");
        assert_eq!(format_count(-1000), "-1.000");
    }
}
