// src/descriptor.rs

/// File extension given to every generated footprint.
pub const FOOTPRINT_EXT: &str = ".kicad_mod";

/// Physical body shape of a normalized part, in millimeters.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyShape {
    /// Cylindrical axial body laid flat between its leads.
    Axial { length: f64, diameter: f64 },
    /// Upright radial can.
    RadialCan { diameter: f64, height: f64 },
    /// Disc body seen from above.
    Disc { diameter: f64, thickness: f64 },
}

/// Canonical, dimensionally consistent description of one catalog part.
/// A pure function of the source record: converting the same record twice
/// yields an identical descriptor, names included.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDescriptor {
    /// Designator prefix ("R", "C", "CP").
    pub reference: String,
    pub symbol_name: String,
    /// Footprint file name, extension included.
    pub footprint_file: String,
    /// Symbol-side footprint link, "library:footprint".
    pub footprint_link: String,

    pub value: String,
    pub tolerance: String,
    /// Voltage rating for capacitors, power rating for resistors.
    pub rating: String,

    pub body: BodyShape,
    pub pin_pitch: f64,
    pub pad_size: f64,

    pub datasheet: String,
    pub digikey_part: String,
    pub manufacturer_part: String,
    pub unit_price: f64,

    pub symbol_library: String,
    pub footprint_library: String,
}

/// Joins a designator prefix and attribute strings into a symbol name,
/// dropping any trailing empty attributes and their separators:
/// `("C", ["100pF", ""])` → `"C_100pF"`.
pub fn symbol_name(prefix: &str, attributes: &[&str]) -> String {
    let mut name = prefix.to_string();
    let kept = attributes
        .iter()
        .rposition(|a| !a.is_empty())
        .map_or(0, |i| i + 1);
    for attr in &attributes[..kept] {
        name.push('_');
        name.push_str(attr);
    }
    name
}

/// Joins tagged millimeter dimensions into a footprint file name:
/// `("CP", [('D', "6.40"), ('P', "2.50"), ('H', "11.50")])` →
/// `"CP_D6.40mm_P2.50mm_H11.50mm.kicad_mod"`.
pub fn footprint_file(prefix: &str, dims: &[(char, &str)]) -> String {
    let mut name = prefix.to_string();
    for (tag, text) in dims {
        name.push('_');
        name.push(*tag);
        name.push_str(text);
        name.push_str("mm");
    }
    name.push_str(FOOTPRINT_EXT);
    name
}

impl ComponentDescriptor {
    /// Footprint name without the file extension.
    pub fn footprint_name(&self) -> &str {
        self.footprint_file
            .strip_suffix(FOOTPRINT_EXT)
            .unwrap_or(&self.footprint_file)
    }
}
