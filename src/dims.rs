//! Physical dimension extraction from catalog free-text fields.
//!
//! Catalog dimension fields arrive as strings like `"0.252\" Dia (6.40mm)"`
//! or `"0.157\" L x 0.098\" W (4.00mm x 2.50mm)"`. Extraction is best-effort:
//! a field that is absent, marked unknown, or matches neither shape yields the
//! zero fallback rather than an error.

use regex::Regex;
use std::sync::LazyLock;

/// Two metric measurements, like "(4.00mm x 2.50mm)". Tried before the
/// single-number shape so the looser pattern cannot eat half of a pair.
static DIM_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\d.]+)\s*mm\s*x\s*([\d.]+)\s*mm").unwrap());

/// A single metric measurement, parenthesized or bare.
static DIM_SINGLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(?([\d.]+)\s*mm\)?").unwrap());

/// Placeholder used by the catalog for fields it has no data for.
pub const UNKNOWN: &str = "Unknown";

/// Standard through-hole pin grid in millimeters.
pub const PIN_GRID: f64 = 2.54;

/// A millimeter measurement together with the catalog's own spelling of it,
/// so generated names reproduce the source digits ("6.40", not "6.4").
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDimension {
    pub mm: f64,
    pub text: String,
}

impl Default for ParsedDimension {
    fn default() -> Self {
        ParsedDimension {
            mm: 0.0,
            text: "0.0".to_string(),
        }
    }
}

impl ParsedDimension {
    fn captured(text: &str) -> Self {
        ParsedDimension {
            mm: text.parse().unwrap_or(0.0),
            text: text.to_string(),
        }
    }
}

fn usable(field: Option<&str>) -> Option<&str> {
    field.filter(|f| !f.is_empty() && *f != UNKNOWN)
}

/// Extracts one or two millimeter values from a dimension field, trying the
/// two-number shape first. Returns the fallback dimension when nothing
/// matches.
pub fn parse_dimensions(field: Option<&str>) -> (ParsedDimension, Option<ParsedDimension>) {
    let Some(raw) = usable(field) else {
        return (ParsedDimension::default(), None);
    };
    if let Some(caps) = DIM_PAIR.captures(raw) {
        return (
            ParsedDimension::captured(&caps[1]),
            Some(ParsedDimension::captured(&caps[2])),
        );
    }
    (parse_dimension(field), None)
}

/// Extracts a single millimeter value from a field that only ever carries
/// one measurement (lead spacing, height).
pub fn parse_dimension(field: Option<&str>) -> ParsedDimension {
    usable(field)
        .and_then(|raw| DIM_SINGLE.captures(raw))
        .map(|caps| ParsedDimension::captured(&caps[1]))
        .unwrap_or_default()
}

/// Smallest multiple of the 2.54 mm pin grid that covers `length`, rounded
/// to two decimals. A zero length has no resolvable pitch and stays zero.
pub fn grid_snap(length: f64) -> f64 {
    if length <= 0.0 {
        return 0.0;
    }
    round2((length / PIN_GRID).ceil() * PIN_GRID)
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Millimeter value formatted for a footprint name: two decimals with
/// trailing zeros trimmed, always keeping at least one ("7.62", "4.0", "0.0").
pub fn fmt_mm(v: f64) -> String {
    let mut s = format!("{:.2}", v);
    while s.ends_with('0') && !s.ends_with(".0") {
        s.pop();
    }
    s
}
