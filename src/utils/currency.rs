/// Format an amount in centavos the way `pt-BR` renders Brazilian reais,
/// e.g. `7990` -> `R$ 79,90` (the separator after `R$` is U+00A0).
/// A missing amount renders as zero.
pub fn format_brl(unit_amount: Option<i64>) -> String {
    let cents = unit_amount.unwrap_or(0);
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let reais = group_thousands(abs / 100, '.');
    format!("{}R$\u{a0}{},{:02}", sign, reais, abs % 100)
}

fn group_thousands(n: u64, sep: char) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}
