//! Progressive input masks for Brazilian identifiers. Each function strips
//! non-digits, truncates at the field length, and re-renders the mask, so it
//! can be applied on every keystroke.

fn digits(input: &str, max: usize) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(max)
        .collect()
}

/// CPF mask: 000.000.000-00
pub fn format_cpf(input: &str) -> String {
    let d = digits(input, 11);
    match d.len() {
        0..=3 => d,
        4..=6 => format!("{}.{}", &d[..3], &d[3..]),
        7..=9 => format!("{}.{}.{}", &d[..3], &d[3..6], &d[6..]),
        _ => format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]),
    }
}

/// CEP mask: 00.000-000
pub fn format_cep(input: &str) -> String {
    let d = digits(input, 8);
    match d.len() {
        0..=2 => d,
        3..=5 => format!("{}.{}", &d[..2], &d[2..]),
        _ => format!("{}.{}-{}", &d[..2], &d[2..5], &d[5..]),
    }
}

/// Phone mask: (00) 0000-0000, growing to (00) 00000-0000 on the 11th digit.
pub fn format_phone(input: &str) -> String {
    let d = digits(input, 11);
    match d.len() {
        0..=2 => d,
        3..=6 => format!("({}) {}", &d[..2], &d[2..]),
        7..=10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
        _ => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_formats_progressively() {
        assert_eq!(format_cpf("123"), "123");
        assert_eq!(format_cpf("12345"), "123.45");
        assert_eq!(format_cpf("12345678"), "123.456.78");
        assert_eq!(format_cpf("12345678901"), "123.456.789-01");
    }

    #[test]
    fn cpf_strips_non_digits_and_truncates() {
        assert_eq!(format_cpf("123.456.789-01"), "123.456.789-01");
        assert_eq!(format_cpf("abc123def456ghi789jk01999"), "123.456.789-01");
    }

    #[test]
    fn cep_formats_progressively() {
        assert_eq!(format_cep("12"), "12");
        assert_eq!(format_cep("1234"), "12.34");
        assert_eq!(format_cep("12345678"), "12.345-678");
    }

    #[test]
    fn phone_switches_to_mobile_layout_on_eleventh_digit() {
        assert_eq!(format_phone("11"), "11");
        assert_eq!(format_phone("1199"), "(11) 99");
        assert_eq!(format_phone("1133334444"), "(11) 3333-4444");
        assert_eq!(format_phone("11999994444"), "(11) 99999-4444");
    }
}
