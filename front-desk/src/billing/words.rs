//! Amount in words (Indian numbering: thousand, lakh, crore)

const ONES: [&str; 20] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Spell the whole-rupee part of an amount, e.g. `"One lakh twenty thousand only"`
///
/// Fractions are dropped; zero, negative and non-finite amounts read `"Zero only"`.
pub fn amount_in_words(amount: f64) -> String {
    if !amount.is_finite() || amount < 1.0 {
        return "Zero only".to_string();
    }
    let words = spell(amount.floor() as u64);

    let mut chars = words.chars();
    match chars.next() {
        Some(first) => format!("{}{} only", first.to_ascii_uppercase(), chars.as_str()),
        None => "Zero only".to_string(),
    }
}

fn spell(n: u64) -> String {
    match n {
        0..20 => ONES[n as usize].to_string(),
        20..100 => join(TENS[(n / 10) as usize].to_string(), n % 10),
        100..1_000 => scaled(n, 100, "hundred"),
        1_000..100_000 => scaled(n, 1_000, "thousand"),
        100_000..10_000_000 => scaled(n, 100_000, "lakh"),
        _ => scaled(n, 10_000_000, "crore"),
    }
}

fn scaled(n: u64, unit: u64, name: &str) -> String {
    join(format!("{} {}", spell(n / unit), name), n % unit)
}

fn join(head: String, rest: u64) -> String {
    if rest == 0 {
        head
    } else {
        format!("{} {}", head, spell(rest))
    }
}
