// src/digikey_models.rs

use serde::Deserialize;

/// Parameter ids consumed from Digi-Key product records. The set is fixed,
/// so lookups are keyed by this enum rather than raw integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i64)]
pub enum ParameterId {
    PowerRating = 2,
    Tolerance = 3,
    MountingType = 16,
    SizeDimension = 46,
    Packaging = 69,
    LeadSpacing = 508,
    Height = 1500,
    Capacitance = 2049,
    VoltageRating = 2079,
    Resistance = 2085,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchResults {
    #[serde(default)]
    pub products_count: u64,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// One catalog record as returned by the keyword search. Immutable input;
/// everything downstream is derived from it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Product {
    #[serde(default)]
    pub manufacturer_product_number: String,
    #[serde(default)]
    pub datasheet_url: String,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub quantity_available: i64,
    #[serde(default)]
    pub description: Description,
    #[serde(default)]
    pub product_variations: Vec<ProductVariation>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Description {
    #[serde(default)]
    pub product_description: String,
    #[serde(default)]
    pub detailed_description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductVariation {
    #[serde(default)]
    pub digi_key_product_number: String,
    #[serde(default)]
    pub package_type: PackageType,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageType {
    #[serde(default)]
    pub id: i64,
}

// Digi-Key package type ids used when picking an orderable part number.
pub const PACKAGE_TAPE_REEL: i64 = 1;
pub const PACKAGE_CUT_TAPE: i64 = 2;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Parameter {
    #[serde(default)]
    pub parameter_id: i64,
    #[serde(default)]
    pub value_id: String,
    #[serde(default)]
    pub value_text: String,
}

impl Product {
    /// Free-text value of a parameter, if the record carries it.
    pub fn value_text(&self, id: ParameterId) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.parameter_id == id as i64)
            .map(|p| p.value_text.as_str())
            .filter(|t| !t.is_empty())
    }

    /// Coded value of a parameter (some fields, e.g. resistance, carry the
    /// canonical spelling in the value id rather than the text).
    pub fn value_id(&self, id: ParameterId) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.parameter_id == id as i64)
            .map(|p| p.value_id.as_str())
            .filter(|t| !t.is_empty())
    }

    /// Preferred orderable part number: cut tape, then tape & reel, then
    /// whatever variation comes first.
    pub fn digikey_part_number(&self) -> &str {
        for wanted in [PACKAGE_CUT_TAPE, PACKAGE_TAPE_REEL] {
            if let Some(v) = self
                .product_variations
                .iter()
                .find(|v| v.package_type.id == wanted)
            {
                return &v.digi_key_product_number;
            }
        }
        self.product_variations
            .first()
            .map(|v| v.digi_key_product_number.as_str())
            .unwrap_or("N/A")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variation(pn: &str, package_id: i64) -> ProductVariation {
        ProductVariation {
            digi_key_product_number: pn.to_string(),
            package_type: PackageType { id: package_id },
        }
    }

    fn bare_product() -> Product {
        serde_json::from_value(serde_json::json!({})).unwrap()
    }

    #[test]
    fn part_number_prefers_cut_tape() {
        let mut p = bare_product();
        p.product_variations = vec![
            variation("X-BULK", 5),
            variation("X-TR", PACKAGE_TAPE_REEL),
            variation("X-CT", PACKAGE_CUT_TAPE),
        ];
        assert_eq!(p.digikey_part_number(), "X-CT");
    }

    #[test]
    fn part_number_falls_back_in_order() {
        let mut p = bare_product();
        p.product_variations = vec![variation("X-BULK", 5), variation("X-TR", PACKAGE_TAPE_REEL)];
        assert_eq!(p.digikey_part_number(), "X-TR");

        p.product_variations = vec![variation("X-BULK", 5)];
        assert_eq!(p.digikey_part_number(), "X-BULK");

        p.product_variations.clear();
        assert_eq!(p.digikey_part_number(), "N/A");
    }

    #[test]
    fn parameter_lookup_by_typed_id() {
        let p: Product = serde_json::from_value(serde_json::json!({
            "Parameters": [
                {"ParameterId": 2049, "ValueText": "22 µF"},
                {"ParameterId": 2085, "ValueId": "10 kOhms", "ValueText": "10k"}
            ]
        }))
        .unwrap();
        assert_eq!(p.value_text(ParameterId::Capacitance), Some("22 µF"));
        assert_eq!(p.value_id(ParameterId::Resistance), Some("10 kOhms"));
        assert_eq!(p.value_text(ParameterId::VoltageRating), None);
    }
}
