//! Keyword-search request payloads and the per-family builders that fill
//! them with the catalog's filter ids.

use crate::digikey_models::ParameterId;
use crate::format;
use serde::Serialize;

const RESISTOR_CATEGORY: &str = "2";
const THT_RESISTOR_CATEGORY: &str = "53";
const CAPACITOR_CATEGORY: &str = "3";

// Disc capacitors are additionally pinned to through-hole packaging and
// mounting value ids so SMD parts never show up.
const DISC_PACKAGING_ID: &str = "411897";
const DISC_MOUNTING_IDS: [&str; 2] = ["392278", "392342"];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeywordRequest {
    pub keywords: String,
    pub limit: u32,
    pub offset: u32,
    pub minimum_quantity_available: u32,
    pub filter_options_request: FilterOptions,
    pub excluded_content: Vec<String>,
    pub sort_options: SortOptions,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FilterOptions {
    pub minimum_order_quantity: u32,
    pub category_filter: Vec<CategoryRef>,
    pub market_place_filter: String,
    pub parameter_filter_request: ParameterFilterRequest,
    pub search_options: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryRef {
    // The API spells category references in lowercase.
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParameterFilterRequest {
    pub category_filter: CategoryRef,
    pub parameter_filters: Vec<ParameterFilter>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParameterFilter {
    pub parameter_id: i64,
    pub filter_values: Vec<FilterValue>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FilterValue {
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SortOptions {
    pub field: String,
    pub sort_order: String,
}

impl ParameterFilter {
    fn one(id: ParameterId, value: impl Into<String>) -> Self {
        ParameterFilter {
            parameter_id: id as i64,
            filter_values: vec![FilterValue { id: value.into() }],
        }
    }

    fn many(id: ParameterId, values: &[&str]) -> Self {
        ParameterFilter {
            parameter_id: id as i64,
            filter_values: values
                .iter()
                .map(|v| FilterValue { id: (*v).to_string() })
                .collect(),
        }
    }
}

/// Resistor power-rating radio options, with the catalog's filter value ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerRating {
    #[default]
    EighthWatt,
    QuarterWatt,
    HalfWatt,
    OneWatt,
}

impl PowerRating {
    pub fn filter_id(self) -> &'static str {
        match self {
            PowerRating::EighthWatt => "10879",
            PowerRating::QuarterWatt => "16543",
            PowerRating::HalfWatt => "28682",
            PowerRating::OneWatt => "121219",
        }
    }
}

/// Resistor tolerance radio options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToleranceBand {
    #[default]
    TenthPercent,
    OnePercent,
    TwoPercent,
    FivePercent,
}

impl ToleranceBand {
    pub fn filter_id(self) -> &'static str {
        match self {
            ToleranceBand::TenthPercent => "731",
            ToleranceBand::OnePercent => "1131",
            ToleranceBand::TwoPercent => "1684",
            ToleranceBand::FivePercent => "2503",
        }
    }
}

/// Electrolytic capacitor mounting styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacitorMounting {
    #[default]
    Axial,
    Radial,
}

impl CapacitorMounting {
    pub fn filter_id(self) -> &'static str {
        match self {
            CapacitorMounting::Axial => "317190",
            CapacitorMounting::Radial => "392320",
        }
    }
}

/// Capacitor sub-catalogs the importer knows how to search, together with
/// the library conventions their descriptors use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacitorFamily {
    AluminumElectrolytic,
    Film,
    Mica,
}

impl CapacitorFamily {
    pub fn category_id(self) -> &'static str {
        match self {
            CapacitorFamily::AluminumElectrolytic => "58",
            CapacitorFamily::Film => "60",
            CapacitorFamily::Mica => "61",
        }
    }

    /// Schematic designator prefix for parts of this family.
    pub fn designator(self) -> &'static str {
        match self {
            CapacitorFamily::AluminumElectrolytic => "CP",
            CapacitorFamily::Film | CapacitorFamily::Mica => "C",
        }
    }

    /// Symbol and footprint library both carry the family's designator.
    pub fn library(self) -> &'static str {
        match self {
            CapacitorFamily::AluminumElectrolytic => "CP_TH_Digikey",
            CapacitorFamily::Film | CapacitorFamily::Mica => "C_TH_Digikey",
        }
    }
}

/// Library used for imported through-hole resistors.
pub const RESISTOR_LIBRARY: &str = "R_TH_Digikey";

fn keyword_request(
    keywords: &str,
    top_category: &str,
    parameter_category: &str,
    parameter_filters: Vec<ParameterFilter>,
) -> KeywordRequest {
    KeywordRequest {
        keywords: keywords.to_string(),
        limit: 50,
        offset: 0,
        minimum_quantity_available: 1,
        filter_options_request: FilterOptions {
            minimum_order_quantity: 1,
            category_filter: vec![CategoryRef {
                id: top_category.to_string(),
            }],
            market_place_filter: "ExcludeMarketPlace".to_string(),
            parameter_filter_request: ParameterFilterRequest {
                category_filter: CategoryRef {
                    id: parameter_category.to_string(),
                },
                parameter_filters,
            },
            search_options: vec!["NormallyStocking".to_string()],
        },
        excluded_content: vec!["FilterOptions".to_string()],
        sort_options: SortOptions {
            field: "Price".to_string(),
            sort_order: "Ascending".to_string(),
        },
    }
}

/// Search request for a through-hole resistor of the given value, power
/// rating, and tolerance.
pub fn tht_resistor_request(
    resistance: &str,
    power: PowerRating,
    tolerance: ToleranceBand,
) -> KeywordRequest {
    let filters = vec![
        ParameterFilter::one(
            ParameterId::Resistance,
            format::format_resistance_filter(resistance),
        ),
        ParameterFilter::one(ParameterId::Tolerance, tolerance.filter_id()),
        ParameterFilter::one(ParameterId::PowerRating, power.filter_id()),
    ];
    keyword_request("resistor", RESISTOR_CATEGORY, THT_RESISTOR_CATEGORY, filters)
}

/// Search request for an axial or radial electrolytic capacitor. A voltage
/// of "I don't care" adds no voltage filter at all.
pub fn tht_capacitor_request(
    capacitance: &str,
    voltage: &str,
    mounting: CapacitorMounting,
    family: CapacitorFamily,
) -> KeywordRequest {
    let mut filters = vec![
        ParameterFilter::one(
            ParameterId::Capacitance,
            format::format_capacitance(capacitance),
        ),
        ParameterFilter::one(ParameterId::MountingType, mounting.filter_id()),
    ];
    if let Some(vol) = format::format_voltage_filter(voltage) {
        filters.push(ParameterFilter::one(ParameterId::VoltageRating, vol));
    }
    keyword_request("capacitor", CAPACITOR_CATEGORY, family.category_id(), filters)
}

/// Search request for a film or mica disc capacitor, pinned to the
/// through-hole packaging and mounting ids.
pub fn tht_disc_capacitor_request(
    capacitance: &str,
    voltage: &str,
    family: CapacitorFamily,
) -> KeywordRequest {
    let mut filters = vec![
        ParameterFilter::one(
            ParameterId::Capacitance,
            format::format_capacitance(capacitance),
        ),
        ParameterFilter::one(ParameterId::Packaging, DISC_PACKAGING_ID),
        ParameterFilter::many(ParameterId::MountingType, &DISC_MOUNTING_IDS),
    ];
    if let Some(vol) = format::format_voltage_filter(voltage) {
        filters.push(ParameterFilter::one(ParameterId::VoltageRating, vol));
    }
    keyword_request("capacitor", CAPACITOR_CATEGORY, family.category_id(), filters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resistor_payload_key_spelling() {
        let req = tht_resistor_request("10k", PowerRating::QuarterWatt, ToleranceBand::FivePercent);
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["Keywords"], "resistor");
        assert_eq!(v["Limit"], 50);
        assert_eq!(v["FilterOptionsRequest"]["CategoryFilter"][0]["id"], "2");
        let pf = &v["FilterOptionsRequest"]["ParameterFilterRequest"];
        assert_eq!(pf["CategoryFilter"]["id"], "53");
        assert_eq!(pf["ParameterFilters"][0]["ParameterId"], 2085);
        assert_eq!(pf["ParameterFilters"][0]["FilterValues"][0]["Id"], "10 kOhms");
        assert_eq!(pf["ParameterFilters"][1]["FilterValues"][0]["Id"], "2503");
        assert_eq!(pf["ParameterFilters"][2]["FilterValues"][0]["Id"], "16543");
        assert_eq!(v["SortOptions"]["SortOrder"], "Ascending");
    }

    #[test]
    fn capacitor_voltage_filter_present() {
        let req = tht_capacitor_request(
            "22uF",
            "50v",
            CapacitorMounting::Radial,
            CapacitorFamily::AluminumElectrolytic,
        );
        let v = serde_json::to_value(&req).unwrap();
        let filters = v["FilterOptionsRequest"]["ParameterFilterRequest"]["ParameterFilters"]
            .as_array()
            .unwrap();
        assert_eq!(filters.len(), 3);
        assert_eq!(filters[0]["FilterValues"][0]["Id"], "22 µF");
        assert_eq!(filters[1]["FilterValues"][0]["Id"], "392320");
        assert_eq!(filters[2]["ParameterId"], 2079);
        assert_eq!(filters[2]["FilterValues"][0]["Id"], "50 V");
    }

    #[test]
    fn no_preference_voltage_adds_no_filter() {
        let req = tht_disc_capacitor_request("100 pF", "I don't care", CapacitorFamily::Film);
        let v = serde_json::to_value(&req).unwrap();
        let filters = v["FilterOptionsRequest"]["ParameterFilterRequest"]["ParameterFilters"]
            .as_array()
            .unwrap();
        assert_eq!(filters.len(), 3);
        assert!(filters.iter().all(|f| f["ParameterId"] != 2079));
        // Mounting filter carries both through-hole value ids.
        assert_eq!(filters[2]["FilterValues"].as_array().unwrap().len(), 2);
        assert_eq!(
            v["FilterOptionsRequest"]["ParameterFilterRequest"]["CategoryFilter"]["id"],
            "60"
        );
    }
}
