//! Display formatting helpers

/// Default thousands separator (en-US grouping)
pub const DEFAULT_SEPARATOR: char = ',';

/// Group the digits of `n` in threes, e.g. `67000000` -> `67,000,000`
pub fn group_digits(n: u64, separator: char) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }

    out
}

/// Population with the default separator
pub fn format_population(n: u64) -> String {
    group_digits(n, DEFAULT_SEPARATOR)
}
