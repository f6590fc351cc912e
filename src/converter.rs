// src/converter.rs
//
// Turns one catalog record into the canonical descriptor that names and
// dimensions the generated library artifacts. Conversion never fails:
// unparsable fields degrade to their documented fallbacks.

use crate::descriptor::{self, BodyShape, ComponentDescriptor};
use crate::digikey_models::{ParameterId, Product};
use crate::dims::{self, fmt_mm, ParsedDimension};
use crate::format;
use crate::search::{CapacitorFamily, RESISTOR_LIBRARY};
use log::debug;

pub const RESISTOR_PAD_SIZE: f64 = 1.4;
pub const ELECTROLYTIC_PAD_SIZE: f64 = 1.6;

/// Disc thickness assumed when the catalog only states a diameter.
const DISC_DEFAULT_THICKNESS: f64 = 3.0;

const UNKNOWN: &str = "Unknown";

fn text_or_unknown(product: &Product, id: ParameterId) -> &str {
    product.value_text(id).unwrap_or(UNKNOWN)
}

/// Axial through-hole resistor. The size field reads "diameter x length";
/// the pin pitch is the body length snapped up to the 2.54 mm grid.
pub fn convert_resistor(product: &Product) -> ComponentDescriptor {
    let resistance = product.value_id(ParameterId::Resistance).unwrap_or(UNKNOWN);
    let tolerance = text_or_unknown(product, ParameterId::Tolerance);
    let power = text_or_unknown(product, ParameterId::PowerRating);

    let value = format::display_resistance(resistance);

    let (diameter, length) = dims::parse_dimensions(product.value_text(ParameterId::SizeDimension));
    let length = length.unwrap_or_default();
    if length.mm == 0.0 {
        debug!(
            "no parsable body dimensions for {}, using zero fallback",
            product.manufacturer_product_number
        );
    }
    let pin_pitch = dims::grid_snap(length.mm);

    let power_clean = format::clean_power(power);
    let tol_clean = format::clean_tolerance(tolerance);
    let symbol_name =
        descriptor::symbol_name("R", &[value.as_str(), power_clean.as_str(), tol_clean.as_str()]);

    let (length_mm, diameter_mm, pitch_mm) =
        (fmt_mm(length.mm), fmt_mm(diameter.mm), fmt_mm(pin_pitch));
    let footprint_file = descriptor::footprint_file(
        "R",
        &[
            ('L', length_mm.as_str()),
            ('D', diameter_mm.as_str()),
            ('P', pitch_mm.as_str()),
        ],
    );

    finish(
        product,
        "R",
        symbol_name,
        footprint_file,
        value,
        format::format_tolerance(tolerance),
        power.to_string(),
        BodyShape::Axial {
            length: length.mm,
            diameter: diameter.mm,
        },
        pin_pitch,
        RESISTOR_PAD_SIZE,
        RESISTOR_LIBRARY,
    )
}

/// Radial aluminum electrolytic. Diameter, lead spacing, and can height are
/// independent single-measurement fields; the lead spacing is used as
/// measured, without grid snapping.
pub fn convert_electrolytic(product: &Product, family: CapacitorFamily) -> ComponentDescriptor {
    let capacitance = text_or_unknown(product, ParameterId::Capacitance);
    let tolerance = text_or_unknown(product, ParameterId::Tolerance);
    let voltage = text_or_unknown(product, ParameterId::VoltageRating);

    let diameter = dims::parse_dimension(product.value_text(ParameterId::SizeDimension));
    let lead_spacing = dims::parse_dimension(product.value_text(ParameterId::LeadSpacing));
    let height = dims::parse_dimension(product.value_text(ParameterId::Height));

    let value = capacitance.replace("uF", "µF");

    // Symbol names avoid the µ glyph; the display value keeps it.
    let cap_clean = value.replace('µ', "u").replace(' ', "");
    let vol_clean = voltage.replace(' ', "");
    let symbol_name = descriptor::symbol_name(
        family.designator(),
        &[cap_clean.as_str(), vol_clean.as_str()],
    );
    let footprint_file = descriptor::footprint_file(
        family.designator(),
        &[
            ('D', diameter.text.as_str()),
            ('P', lead_spacing.text.as_str()),
            ('H', height.text.as_str()),
        ],
    );

    finish(
        product,
        family.designator(),
        symbol_name,
        footprint_file,
        value,
        format::format_tolerance(tolerance),
        voltage.to_string(),
        BodyShape::RadialCan {
            diameter: diameter.mm,
            height: height.mm,
        },
        lead_spacing.mm,
        ELECTROLYTIC_PAD_SIZE,
        family.library(),
    )
}

/// Film or mica disc capacitor. The size field is tried as a
/// "diameter x thickness" pair first, then as a bare diameter with the
/// default disc thickness; a missing voltage rating is recovered from the
/// detailed description when possible.
pub fn convert_disc(
    product: &Product,
    family: CapacitorFamily,
    pad_size: f64,
) -> ComponentDescriptor {
    let capacitance = text_or_unknown(product, ParameterId::Capacitance);
    let tolerance = text_or_unknown(product, ParameterId::Tolerance);

    let voltage = product
        .value_text(ParameterId::VoltageRating)
        .map(str::to_string)
        .or_else(|| format::voltage_from_description(&product.description.detailed_description));

    let (diameter, thickness) =
        dims::parse_dimensions(product.value_text(ParameterId::SizeDimension));
    let thickness = thickness.unwrap_or(ParsedDimension {
        mm: DISC_DEFAULT_THICKNESS,
        text: fmt_mm(DISC_DEFAULT_THICKNESS),
    });
    let pitch = dims::parse_dimension(product.value_text(ParameterId::LeadSpacing));

    let value = capacitance.replace("uF", "µF").replace(' ', "");
    let voltage_display = voltage.as_deref().map(format::display_voltage).unwrap_or_default();

    let symbol_name = descriptor::symbol_name(
        family.designator(),
        &[value.as_str(), voltage_display.as_str()],
    );
    let footprint_file = descriptor::footprint_file(
        family.designator(),
        &[
            ('D', diameter.text.as_str()),
            ('W', thickness.text.as_str()),
            ('P', pitch.text.as_str()),
        ],
    );

    finish(
        product,
        family.designator(),
        symbol_name,
        footprint_file,
        value,
        format::format_tolerance(tolerance),
        voltage_display,
        BodyShape::Disc {
            diameter: diameter.mm,
            thickness: thickness.mm,
        },
        pitch.mm,
        pad_size,
        family.library(),
    )
}

#[allow(clippy::too_many_arguments)]
fn finish(
    product: &Product,
    reference: &str,
    symbol_name: String,
    footprint_file: String,
    value: String,
    tolerance: String,
    rating: String,
    body: BodyShape,
    pin_pitch: f64,
    pad_size: f64,
    library: &str,
) -> ComponentDescriptor {
    let footprint_base = footprint_file
        .strip_suffix(descriptor::FOOTPRINT_EXT)
        .unwrap_or(&footprint_file)
        .to_string();
    ComponentDescriptor {
        reference: reference.to_string(),
        symbol_name,
        footprint_link: format!("{library}:{footprint_base}"),
        footprint_file,
        value,
        tolerance,
        rating,
        body,
        pin_pitch,
        pad_size,
        datasheet: product.datasheet_url.clone(),
        digikey_part: product.digikey_part_number().to_string(),
        manufacturer_part: product.manufacturer_product_number.clone(),
        unit_price: product.unit_price,
        symbol_library: library.to_string(),
        footprint_library: library.to_string(),
    }
}
