// src/lib.rs

pub mod api;
pub mod config;
pub mod converter;
pub mod descriptor;
pub mod digikey_models;
pub mod dims;
pub mod error;
pub mod file_writer;
pub mod format;
pub mod geometry;
pub mod kicad_models;
pub mod search;
pub mod session;
pub mod worker;

use crate::descriptor::ComponentDescriptor;
use crate::digikey_models::Product;
use crate::error::Result;
use crate::file_writer::KicadLibrary;
use crate::kicad_models::{KiFootprint, KiSymbol};
use crate::search::{CapacitorFamily, CapacitorMounting, KeywordRequest, PowerRating, ToleranceBand};
use log::{info, warn};

/// One user-level search, as collected by the host's dialog.
#[derive(Debug, Clone)]
pub enum PartQuery {
    Resistor {
        resistance: String,
        power: PowerRating,
        tolerance: ToleranceBand,
    },
    Electrolytic {
        capacitance: String,
        voltage: String,
        mounting: CapacitorMounting,
    },
    DiscCapacitor {
        capacitance: String,
        voltage: String,
        family: CapacitorFamily,
        pad_size: f64,
    },
}

impl PartQuery {
    pub fn to_request(&self) -> KeywordRequest {
        match self {
            PartQuery::Resistor {
                resistance,
                power,
                tolerance,
            } => search::tht_resistor_request(resistance, *power, *tolerance),
            PartQuery::Electrolytic {
                capacitance,
                voltage,
                mounting,
            } => search::tht_capacitor_request(
                capacitance,
                voltage,
                *mounting,
                CapacitorFamily::AluminumElectrolytic,
            ),
            PartQuery::DiscCapacitor {
                capacitance,
                voltage,
                family,
                ..
            } => search::tht_disc_capacitor_request(capacitance, voltage, *family),
        }
    }

    /// Normalizes one search hit into a descriptor, per this query's family.
    pub fn convert(&self, product: &Product) -> ComponentDescriptor {
        match self {
            PartQuery::Resistor { .. } => converter::convert_resistor(product),
            PartQuery::Electrolytic { .. } => {
                converter::convert_electrolytic(product, CapacitorFamily::AluminumElectrolytic)
            }
            PartQuery::DiscCapacitor {
                family, pad_size, ..
            } => converter::convert_disc(product, *family, *pad_size),
        }
    }
}

/// Result of one artifact-generation attempt: a human-readable message
/// paired with a success flag, suitable for showing in a host dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub success: bool,
    pub message: String,
}

/// Renders and writes both library artifacts for a descriptor. A failure is
/// reported in the outcome rather than returned; nothing is retried.
pub fn generate_library_files(
    library: &KicadLibrary,
    descriptor: &ComponentDescriptor,
) -> GenerationOutcome {
    let footprint = KiFootprint::from_descriptor(descriptor);
    if let Err(e) = library.add_footprint(&descriptor.footprint_library, &footprint) {
        warn!("footprint generation failed: {e}");
        return GenerationOutcome {
            success: false,
            message: format!("Footprint Error: {e}"),
        };
    }

    let symbol = KiSymbol::from_descriptor(descriptor);
    if let Err(e) = library.add_symbol(&descriptor.symbol_library, &symbol) {
        warn!("symbol generation failed: {e}");
        return GenerationOutcome {
            success: false,
            message: format!("Symbol Error: {e}"),
        };
    }

    GenerationOutcome {
        success: true,
        message: format!("Generated: {}", descriptor.symbol_name),
    }
}

/// Searches the catalog and imports the cheapest matching part.
///
/// Returns `Ok(None)` when the search succeeded but matched nothing, so
/// callers can tell "no results found" apart from "API call failed".
pub async fn import_part(
    api: &api::DigikeyApi,
    session: &mut session::Session,
    library: &KicadLibrary,
    query: &PartQuery,
) -> Result<Option<GenerationOutcome>> {
    let request = query.to_request();
    let results = api.keyword_search(session, &request).await?;
    info!("search matched {} products", results.products_count);

    // Results arrive sorted by ascending price; the first hit is the pick.
    let Some(product) = results.products.first() else {
        return Ok(None);
    };

    let descriptor = query.convert(product);
    info!(
        "importing {} as {}",
        descriptor.manufacturer_part, descriptor.symbol_name
    );
    Ok(Some(generate_library_files(library, &descriptor)))
}
