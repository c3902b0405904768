use regex::Regex;
use std::sync::OnceLock;

static SIZE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Parse a size line such as `"大小: 2.5 MB"` into kilobytes.
///
/// KB counts as 1, MB as 1024 and GB as 1024². Only ASCII digits form the
/// number. Text without a recognizable `<number> <KB|MB|GB>` pair yields 0.
pub fn parse_size_kb(text: &str) -> f64 {
    let regex = SIZE_REGEX.get_or_init(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*(KB|MB|GB)").unwrap());

    let Some(caps) = regex.captures(text) else {
        return 0.0;
    };
    let value: f64 = match caps[1].parse() {
        Ok(value) => value,
        Err(_) => return 0.0,
    };

    match &caps[2] {
        "MB" => value * 1024.0,
        "GB" => value * 1024.0 * 1024.0,
        _ => value,
    }
}
