//! Electrical value normalization for search terms and display strings.
//!
//! Unrecognized inputs pass through unchanged; nothing here returns an error.

use regex::Regex;
use std::sync::LazyLock;

/// Pattern for capacitance values with a metric prefix, like "22µF" or "4.7 mF"
static CAPACITANCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([\d.]+)\s*([µumkM]?)F$").unwrap());

/// Pattern for a voltage embedded in free text, like "... 50V ..."
static VOLTAGE_IN_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(\.\d+)?)\s*V").unwrap());

/// Radio option meaning "do not filter on voltage at all".
pub const VOLTAGE_ANY: &str = "I don't care";

const OHM: &str = "\u{03A9}";

/// Canonicalizes a capacitance entry: textual micro prefix becomes `µ`, a
/// trailing `F` is ensured, and a single space separates value and unit.
/// `"22uF"` → `"22 µF"`, `"100 pF"` stays `"100 pF"`.
pub fn format_capacitance(raw: &str) -> String {
    let cleaned = raw.trim().replace('u', "µ");
    let cleaned = if cleaned.ends_with('F') {
        cleaned
    } else {
        format!("{cleaned}F")
    };
    match CAPACITANCE.captures(&cleaned) {
        Some(caps) => format!("{} {}F", &caps[1], caps.get(2).map_or("", |m| m.as_str())),
        None => cleaned,
    }
}

/// Voltage search term: `"50v"` → `Some("50 V")`. The "any voltage" option
/// yields no filter term at all.
pub fn format_voltage_filter(raw: &str) -> Option<String> {
    if raw.trim().eq_ignore_ascii_case(VOLTAGE_ANY) {
        return None;
    }
    let cleaned = raw.to_lowercase().replace('v', "");
    Some(format!("{} V", cleaned.trim()))
}

/// Display form of a catalog voltage field: `"50 V"` → `"50V"`.
pub fn display_voltage(raw: &str) -> String {
    raw.replace(' ', "")
}

/// Last-resort voltage recovery from a detailed description field.
pub fn voltage_from_description(desc: &str) -> Option<String> {
    VOLTAGE_IN_TEXT
        .captures(desc)
        .map(|caps| format!("{}V", &caps[1]))
}

/// `"+-"` → `"±"`.
pub fn format_tolerance(raw: &str) -> String {
    raw.replace("+-", "±")
}

/// Tolerance stripped down for use inside a symbol name: `"±5%"` → `"5%"`.
pub fn clean_tolerance(raw: &str) -> String {
    raw.replace('±', "").replace("+-", "").trim().to_string()
}

/// Resistance search term in the catalog's unit spelling: `"4.7k"` →
/// `"4.7 kOhms"`, `"1M"` → `"1 MOhms"`, `"220"` → `"220 Ohms"`.
pub fn format_resistance_filter(raw: &str) -> String {
    let val = raw.trim();
    let lower = val.to_lowercase();
    if lower.ends_with('k') {
        format!("{} kOhms", &val[..val.len() - 1])
    } else if lower.ends_with('m') {
        format!("{} MOhms", &val[..val.len() - 1])
    } else {
        format!("{val} Ohms")
    }
}

/// Display form of a catalog resistance value: `"10 kOhms"` → `"10 kΩ"`.
pub fn display_resistance(raw: &str) -> String {
    raw.replace("Ohms", OHM)
}

/// Power rating stripped for use inside a symbol name: `"1/4 W"` → `"1/4W"`.
pub fn clean_power(raw: &str) -> String {
    raw.replace(' ', "")
}
