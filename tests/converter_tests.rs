use digikey2kicad_rs::{
    converter::{convert_disc, convert_electrolytic, convert_resistor},
    descriptor::BodyShape,
    digikey_models::Product,
    kicad_models::KiFootprint,
    search::CapacitorFamily,
};
use serde_json::json;

fn product(value: serde_json::Value) -> Product {
    serde_json::from_value(value).expect("product JSON should deserialize")
}

fn sample_resistor() -> Product {
    product(json!({
        "ManufacturerProductNumber": "CF14JT10K0",
        "DatasheetUrl": "https://www.seielect.com/catalog/sei-cf_cfm.pdf",
        "UnitPrice": 0.1,
        "ProductVariations": [
            {"DigiKeyProductNumber": "CF14JT10K0TR-ND", "PackageType": {"Id": 1}},
            {"DigiKeyProductNumber": "CF14JT10K0CT-ND", "PackageType": {"Id": 2}}
        ],
        "Parameters": [
            {"ParameterId": 2085, "ValueId": "10 kOhms", "ValueText": "10k"},
            {"ParameterId": 3, "ValueText": "±5%"},
            {"ParameterId": 2, "ValueText": "1/4 W"},
            {"ParameterId": 46, "ValueText": "0.091\" Dia x 0.150\" L (2.30mm x 3.80mm)"}
        ]
    }))
}

#[test]
fn test_resistor_conversion() {
    let d = convert_resistor(&sample_resistor());

    assert_eq!(d.reference, "R");
    assert_eq!(d.value, "10 kΩ");
    assert_eq!(d.symbol_name, "R_10 kΩ_1/4W_5%");
    assert_eq!(
        d.body,
        BodyShape::Axial {
            length: 3.8,
            diameter: 2.3
        }
    );
    // 3.8 mm body snapped up to the next 2.54 mm grid multiple.
    assert_eq!(d.pin_pitch, 5.08);
    assert_eq!(d.footprint_file, "R_L3.8mm_D2.3mm_P5.08mm.kicad_mod");
    assert_eq!(d.footprint_link, "R_TH_Digikey:R_L3.8mm_D2.3mm_P5.08mm");
    // Cut tape wins over tape & reel.
    assert_eq!(d.digikey_part, "CF14JT10K0CT-ND");
}

#[test]
fn test_resistor_without_dimensions_falls_back_to_zero() {
    let d = convert_resistor(&product(json!({
        "ManufacturerProductNumber": "MYSTERY-R",
        "Parameters": [
            {"ParameterId": 2085, "ValueId": "470 Ohms"},
            {"ParameterId": 46, "ValueText": "Unknown"}
        ]
    })));
    assert_eq!(d.pin_pitch, 0.0);
    assert_eq!(d.footprint_file, "R_L0.0mm_D0.0mm_P0.0mm.kicad_mod");
}

#[test]
fn test_electrolytic_conversion() {
    let d = convert_electrolytic(
        &product(json!({
            "ManufacturerProductNumber": "ECA-1HM220",
            "UnitPrice": 0.31,
            "Parameters": [
                {"ParameterId": 2049, "ValueText": "22 µF"},
                {"ParameterId": 3, "ValueText": "±20%"},
                {"ParameterId": 2079, "ValueText": "50 V"},
                {"ParameterId": 508, "ValueText": "0.079\" (2.00mm)"},
                {"ParameterId": 46, "ValueText": "0.197\" Dia (5.00mm)"},
                {"ParameterId": 1500, "ValueText": "0.433\" (11.00mm)"}
            ]
        })),
        CapacitorFamily::AluminumElectrolytic,
    );

    assert_eq!(d.reference, "CP");
    assert_eq!(d.value, "22 µF");
    // The µ glyph stays out of the symbol name.
    assert_eq!(d.symbol_name, "CP_22uF_50V");
    assert_eq!(d.footprint_file, "CP_D5.00mm_P2.00mm_H11.00mm.kicad_mod");
    assert_eq!(
        d.body,
        BodyShape::RadialCan {
            diameter: 5.0,
            height: 11.0
        }
    );
    // Lead spacing is used as measured, not snapped.
    assert_eq!(d.pin_pitch, 2.0);
    assert_eq!(d.rating, "50 V");
}

#[test]
fn test_disc_capacitor_two_dimension_field() {
    let d = convert_disc(
        &product(json!({
            "ManufacturerProductNumber": "K101K15X7RF5TL2",
            "Description": {"DetailedDescription": "CAP CER 100PF 50V X7R RADIAL"},
            "Parameters": [
                {"ParameterId": 2049, "ValueText": "100 pF"},
                {"ParameterId": 3, "ValueText": "±10%"},
                {"ParameterId": 508, "ValueText": "0.197\" (5.00mm)"},
                {"ParameterId": 46, "ValueText": "0.157\" L x 0.098\" W (4.00mm x 2.50mm)"}
            ]
        })),
        CapacitorFamily::Film,
        1.6,
    );

    assert_eq!(
        d.body,
        BodyShape::Disc {
            diameter: 4.0,
            thickness: 2.5
        }
    );
    assert_eq!(d.value, "100pF");
    // No voltage parameter: recovered from the detailed description.
    assert_eq!(d.rating, "50V");
    assert_eq!(d.symbol_name, "C_100pF_50V");
    assert_eq!(d.footprint_file, "C_D4.00mm_W2.50mm_P5.00mm.kicad_mod");
}

#[test]
fn test_disc_capacitor_diameter_only_field() {
    let d = convert_disc(
        &product(json!({
            "ManufacturerProductNumber": "SA102A472JAR",
            "Parameters": [
                {"ParameterId": 2049, "ValueText": "4700 pF"},
                {"ParameterId": 2079, "ValueText": "1 kV"},
                {"ParameterId": 46, "ValueText": "0.252\" Dia (6.40mm)"}
            ]
        })),
        CapacitorFamily::Mica,
        1.6,
    );

    // Single-dimension shape: thickness takes the disc default.
    assert_eq!(
        d.body,
        BodyShape::Disc {
            diameter: 6.4,
            thickness: 3.0
        }
    );
    assert_eq!(d.footprint_file, "C_D6.40mm_W3.0mm_P0.0mm.kicad_mod");
    assert_eq!(d.rating, "1kV");
}

#[test]
fn test_disc_capacitor_without_voltage_trims_symbol_name() {
    let d = convert_disc(
        &product(json!({
            "Parameters": [
                {"ParameterId": 2049, "ValueText": "220 pF"}
            ]
        })),
        CapacitorFamily::Film,
        1.6,
    );
    assert_eq!(d.symbol_name, "C_220pF");
    assert_eq!(d.rating, "");
}

#[test]
fn test_missing_lead_spacing_yields_zero_pitch() {
    let d = convert_disc(
        &product(json!({
            "Parameters": [
                {"ParameterId": 2049, "ValueText": "100 pF"},
                {"ParameterId": 508, "ValueText": "Unknown"},
                {"ParameterId": 46, "ValueText": "0.252\" Dia (6.40mm)"}
            ]
        })),
        CapacitorFamily::Film,
        1.6,
    );
    assert_eq!(d.pin_pitch, 0.0);
    assert!(d.footprint_file.ends_with("_P0.0mm.kicad_mod"));
}

#[test]
fn test_conversion_is_idempotent() {
    let p = sample_resistor();
    let first = convert_resistor(&p);
    let second = convert_resistor(&p);
    assert_eq!(first, second);
    assert_eq!(first.symbol_name, second.symbol_name);
    assert_eq!(first.footprint_file, second.footprint_file);
}

#[test]
fn test_radial_footprint_outline_matches_reference_geometry() {
    let d = convert_electrolytic(
        &product(json!({
            "Parameters": [
                {"ParameterId": 2049, "ValueText": "22 µF"},
                {"ParameterId": 508, "ValueText": "0.079\" (2.00mm)"},
                {"ParameterId": 46, "ValueText": "0.197\" Dia (5.00mm)"}
            ]
        })),
        CapacitorFamily::AluminumElectrolytic,
    );
    let fp = KiFootprint::from_descriptor(&d);

    // Two leads, mirrored four-polygon outline on each side.
    assert_eq!(fp.pads.len(), 2);
    assert_eq!(fp.polys.len(), 8);
    let entry = fp.to_kicad_mod_entry();
    // Keep-out outer edge for a 5.0 mm body on a 2.0 mm pitch.
    assert!(entry.contains("(xy 1.8300 0.8300)"));
    assert!(entry.contains("(xy -1.8300 0.8300)"));
}
