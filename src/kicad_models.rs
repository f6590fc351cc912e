// src/kicad_models.rs

use crate::descriptor::{BodyShape, ComponentDescriptor};
use crate::dims::round2;
use crate::geometry::{self, SILK_LINE_WIDTH};
use glam::DVec2;
use std::fmt::Write;

const PAD_DRILL: f64 = 0.8;

// --- Symbol Structs ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolBody {
    Resistor,
    Capacitor { polarized: bool },
}

#[derive(Debug)]
pub struct KiSymbol {
    pub name: String,
    pub reference: String,
    pub value: String,
    pub tolerance: String,
    /// "Voltage" for capacitors, "Power" for resistors.
    pub rating_label: &'static str,
    pub rating: String,
    pub footprint: String,
    pub datasheet: String,
    pub digikey_part: String,
    pub manufacturer_part: String,
    pub unit_price: f64,
    pub body: SymbolBody,
}

impl KiSymbol {
    pub fn from_descriptor(d: &ComponentDescriptor) -> KiSymbol {
        let (body, rating_label) = match d.body {
            BodyShape::Axial { .. } => (SymbolBody::Resistor, "Power"),
            BodyShape::RadialCan { .. } => (SymbolBody::Capacitor { polarized: true }, "Voltage"),
            BodyShape::Disc { .. } => (SymbolBody::Capacitor { polarized: false }, "Voltage"),
        };
        KiSymbol {
            name: d.symbol_name.clone(),
            reference: d.reference.clone(),
            value: d.value.clone(),
            tolerance: d.tolerance.clone(),
            rating_label,
            rating: d.rating.clone(),
            footprint: d.footprint_link.clone(),
            datasheet: d.datasheet.clone(),
            digikey_part: d.digikey_part.clone(),
            manufacturer_part: d.manufacturer_part.clone(),
            unit_price: d.unit_price,
            body,
        }
    }

    pub fn to_kicad_lib_entry(&self) -> String {
        let mut out = String::new();
        writeln!(
            &mut out,
            "(symbol \"{}\" (in_bom yes) (on_board yes)",
            self.name
        )
        .unwrap();

        // --- Properties ---
        self.property(&mut out, 0, "Reference", &self.reference, "(at 0 2.54 0)", false);
        self.property(&mut out, 1, "Value", &self.value, "(at 0 -2.54 0)", false);
        self.property(&mut out, 2, "Footprint", &self.footprint, "(at 0 0 0)", true);
        self.property(&mut out, 3, "Datasheet", &self.datasheet, "(at 0 0 0)", true);
        self.property(&mut out, 4, "Tolerance", &self.tolerance, "(at 0 0 0)", true);
        self.property(&mut out, 5, self.rating_label, &self.rating, "(at 0 0 0)", true);
        self.property(&mut out, 6, "Digi-Key Part", &self.digikey_part, "(at 0 0 0)", true);
        self.property(
            &mut out,
            7,
            "Manufacturer Part",
            &self.manufacturer_part,
            "(at 0 0 0)",
            true,
        );
        self.property(
            &mut out,
            8,
            "Price",
            &format!("{}", self.unit_price),
            "(at 0 0 0)",
            true,
        );

        // --- Symbol Graphics ---
        writeln!(&mut out, "  (symbol \"{}_1_1\"", self.name).unwrap();
        match self.body {
            SymbolBody::Resistor => {
                writeln!(&mut out, "    (rectangle (start -2.54 -1.016) (end 2.54 1.016) (stroke (width 0.254) (type default) (color 0 0 0 0)) (fill (type background)))").unwrap();
                self.pin(&mut out, "1", -5.08, 0.0, 0, 2.54);
                self.pin(&mut out, "2", 5.08, 0.0, 180, 2.54);
            }
            SymbolBody::Capacitor { polarized } => {
                for plate_x in [-0.508, 0.508] {
                    writeln!(&mut out, "    (polyline (pts (xy {plate_x} -1.27) (xy {plate_x} 1.27)) (stroke (width 0.254) (type default) (color 0 0 0 0)) (fill (type none)))").unwrap();
                }
                if polarized {
                    // Plus mark above the positive plate.
                    writeln!(&mut out, "    (polyline (pts (xy -1.778 0.762) (xy -1.016 0.762)) (stroke (width 0.127) (type default) (color 0 0 0 0)) (fill (type none)))").unwrap();
                    writeln!(&mut out, "    (polyline (pts (xy -1.397 0.381) (xy -1.397 1.143)) (stroke (width 0.127) (type default) (color 0 0 0 0)) (fill (type none)))").unwrap();
                }
                self.pin(&mut out, "1", -2.54, 0.0, 0, 2.032);
                self.pin(&mut out, "2", 2.54, 0.0, 180, 2.032);
            }
        }
        writeln!(&mut out, "  )\n)").unwrap();
        out
    }

    fn property(
        &self,
        out: &mut String,
        id: u32,
        key: &str,
        value: &str,
        at: &str,
        hidden: bool,
    ) {
        let hide = if hidden { " hide" } else { "" };
        writeln!(
            out,
            "  (property \"{key}\" \"{value}\" (id {id}) {at} (effects (font (size 1.27 1.27)){hide}))",
        )
        .unwrap();
    }

    fn pin(&self, out: &mut String, number: &str, x: f64, y: f64, rotation: i32, length: f64) {
        writeln!(
            out,
            r#"    (pin passive line (at {x} {y} {rotation}) (length {length})
      (name "~" (effects (font (size 1.27 1.27))))
      (number "{number}" (effects (font (size 1.27 1.27))))
    )"#,
        )
        .unwrap();
    }
}

// --- Footprint Structs ---

#[derive(Debug)]
pub struct FpPad {
    pub number: String,
    pub pos: (f64, f64),
    pub size: f64,
    pub drill: f64,
}

#[derive(Debug)]
pub struct FpLine {
    pub start: (f64, f64),
    pub end: (f64, f64),
}

#[derive(Debug)]
pub struct FpCircle {
    pub center: (f64, f64),
    pub radius: f64,
}

#[derive(Debug)]
pub struct FpPoly {
    pub points: Vec<DVec2>,
}

#[derive(Debug)]
pub struct FpText {
    pub text_type: String, // "reference", "value"
    pub text: String,
    pub pos: (f64, f64),
    pub layer: String,
}

#[derive(Debug)]
pub struct KiFootprint {
    pub name: String,
    pub pads: Vec<FpPad>,
    pub lines: Vec<FpLine>,
    pub circles: Vec<FpCircle>,
    pub polys: Vec<FpPoly>,
    pub texts: Vec<FpText>,
}

/// Mirrors a polygon across the vertical axis, reversing the winding.
fn mirror_x(points: &[DVec2]) -> Vec<DVec2> {
    points.iter().rev().map(|p| DVec2::new(-p.x, p.y)).collect()
}

impl KiFootprint {
    pub fn from_descriptor(d: &ComponentDescriptor) -> KiFootprint {
        let half_pitch = d.pin_pitch / 2.0;
        let pads = vec![
            FpPad {
                number: "1".to_string(),
                pos: (-half_pitch, 0.0),
                size: d.pad_size,
                drill: PAD_DRILL,
            },
            FpPad {
                number: "2".to_string(),
                pos: (half_pitch, 0.0),
                size: d.pad_size,
                drill: PAD_DRILL,
            },
        ];

        let mut lines = Vec::new();
        let mut circles = Vec::new();
        let mut polys = Vec::new();
        let mut texts = Vec::new();

        match d.body {
            BodyShape::Axial { length, diameter } => {
                let half_l = length / 2.0;
                let half_d = diameter / 2.0;
                lines.extend([
                    FpLine {
                        start: (-half_l, -half_d),
                        end: (half_l, -half_d),
                    },
                    FpLine {
                        start: (half_l, -half_d),
                        end: (half_l, half_d),
                    },
                    FpLine {
                        start: (half_l, half_d),
                        end: (-half_l, half_d),
                    },
                    FpLine {
                        start: (-half_l, half_d),
                        end: (-half_l, -half_d),
                    },
                ]);
                texts.push(reference_text(2.5, round2(-(half_d + 1.0))));
                texts.push(value_text(&d.footprint_file, 0.5, round2(half_d + 0.5)));
            }
            BodyShape::RadialCan { diameter, .. } => {
                let outline = geometry::generate_outline(diameter, d.pin_pitch);
                for half in [
                    &outline.outer,
                    &outline.cap_top,
                    &outline.cap_bottom,
                    &outline.inner_rect,
                ] {
                    polys.push(FpPoly {
                        points: mirror_x(half),
                    });
                    polys.push(FpPoly {
                        points: half.clone(),
                    });
                }
                // Polarity mark sits on the upper-left of the can.
                let (px, py) = (-(diameter / 2.0), -(diameter / 3.0));
                lines.extend([
                    FpLine {
                        start: (px - 0.5, py),
                        end: (px + 0.5, py),
                    },
                    FpLine {
                        start: (px, py - 0.5),
                        end: (px, py + 0.5),
                    },
                ]);
                let half_d = diameter / 2.0;
                texts.push(reference_text(0.0, round2(-(half_d + 1.27))));
                texts.push(value_text(&d.footprint_file, 0.0, round2(half_d + 1.27)));
            }
            BodyShape::Disc { diameter, .. } => {
                let radius = diameter / 2.0 + geometry::SILK_CLEARANCE;
                circles.push(FpCircle {
                    center: (0.0, 0.0),
                    radius,
                });
                texts.push(reference_text(0.0, round2(-(radius + 1.27))));
                texts.push(value_text(&d.footprint_file, 0.0, round2(radius + 1.27)));
            }
        }

        KiFootprint {
            name: d.footprint_name().to_string(),
            pads,
            lines,
            circles,
            polys,
            texts,
        }
    }

    /// Generates the full S-expression string for a .kicad_mod file.
    pub fn to_kicad_mod_entry(&self) -> String {
        let mut out = String::new();
        writeln!(&mut out, "(module {} (layer F.Cu)", self.name).unwrap();

        for text in &self.texts {
            writeln!(
                &mut out,
                "  (fp_text {} {} (at {} {}) (layer {}) (effects (font (size 1 1) (thickness 0.15))))",
                text.text_type, text.text, text.pos.0, text.pos.1, text.layer
            )
            .unwrap();
        }

        for line in &self.lines {
            writeln!(
                &mut out,
                "  (fp_line (start {:.4} {:.4}) (end {:.4} {:.4}) (stroke (width {}) (type solid)) (layer \"F.SilkS\"))",
                line.start.0, line.start.1, line.end.0, line.end.1, SILK_LINE_WIDTH
            )
            .unwrap();
        }

        for circle in &self.circles {
            writeln!(
                &mut out,
                "  (fp_circle (center {:.4} {:.4}) (end {:.4} {:.4}) (stroke (width {}) (type solid)) (fill none) (layer \"F.SilkS\"))",
                circle.center.0,
                circle.center.1,
                circle.center.0 + circle.radius,
                circle.center.1,
                SILK_LINE_WIDTH
            )
            .unwrap();
        }

        for poly in &self.polys {
            let xy: Vec<String> = poly
                .points
                .iter()
                .map(|p| format!("(xy {:.4} {:.4})", p.x, p.y))
                .collect();
            writeln!(
                &mut out,
                "  (fp_poly (pts {}) (stroke (width {}) (type solid)) (fill solid) (layer \"F.SilkS\"))",
                xy.join(" "),
                SILK_LINE_WIDTH
            )
            .unwrap();
        }

        for pad in &self.pads {
            writeln!(
                &mut out,
                "  (pad {} thru_hole circle (at {} {}) (size {} {}) (layers *.Cu *.Mask) (drill {}))",
                pad.number, pad.pos.0, pad.pos.1, pad.size, pad.size, pad.drill
            )
            .unwrap();
        }

        writeln!(&mut out, ")").unwrap();
        out
    }
}

fn reference_text(x: f64, y: f64) -> FpText {
    FpText {
        text_type: "reference".to_string(),
        text: "REF**".to_string(),
        pos: (x, y),
        layer: "F.SilkS".to_string(),
    }
}

fn value_text(footprint_file: &str, x: f64, y: f64) -> FpText {
    FpText {
        text_type: "value".to_string(),
        text: footprint_file
            .strip_suffix(".kicad_mod")
            .unwrap_or(footprint_file)
            .to_string(),
        pos: (x, y),
        layer: "F.Fab".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ComponentDescriptor;

    fn radial_descriptor() -> ComponentDescriptor {
        ComponentDescriptor {
            reference: "CP".to_string(),
            symbol_name: "CP_22uF_50V".to_string(),
            footprint_file: "CP_D5.00mm_P2.00mm_H11.00mm.kicad_mod".to_string(),
            footprint_link: "CP_TH_Digikey:CP_D5.00mm_P2.00mm_H11.00mm".to_string(),
            value: "22 µF".to_string(),
            tolerance: "±20%".to_string(),
            rating: "50 V".to_string(),
            body: BodyShape::RadialCan {
                diameter: 5.0,
                height: 11.0,
            },
            pin_pitch: 2.0,
            pad_size: 1.6,
            datasheet: "https://example.com/ds.pdf".to_string(),
            digikey_part: "P123-ND".to_string(),
            manufacturer_part: "ECA-1HM220".to_string(),
            unit_price: 0.31,
            symbol_library: "CP_TH_Digikey".to_string(),
            footprint_library: "CP_TH_Digikey".to_string(),
        }
    }

    #[test]
    fn radial_footprint_has_mirrored_outline() {
        let fp = KiFootprint::from_descriptor(&radial_descriptor());
        assert_eq!(fp.polys.len(), 8);
        assert_eq!(fp.pads.len(), 2);
        assert_eq!(fp.pads[0].pos.0, -1.0);
        assert_eq!(fp.pads[1].pos.0, 1.0);
    }

    #[test]
    fn footprint_entry_is_well_formed() {
        let fp = KiFootprint::from_descriptor(&radial_descriptor());
        let entry = fp.to_kicad_mod_entry();
        assert!(entry.starts_with("(module CP_D5.00mm_P2.00mm_H11.00mm (layer F.Cu)"));
        assert!(entry.contains("(pad 1 thru_hole circle"));
        assert!(entry.contains("(fp_poly (pts"));
        assert_eq!(
            entry.matches("(fp_poly").count(),
            8,
            "all outline polygons rendered"
        );
        assert!(entry.trim_end().ends_with(')'));
    }

    #[test]
    fn symbol_entry_carries_catalog_properties() {
        let sym = KiSymbol::from_descriptor(&radial_descriptor());
        let entry = sym.to_kicad_lib_entry();
        assert!(entry.contains("(symbol \"CP_22uF_50V\""));
        assert!(entry.contains("(property \"Value\" \"22 µF\""));
        assert!(entry.contains("(property \"Voltage\" \"50 V\""));
        assert!(entry.contains("(property \"Digi-Key Part\" \"P123-ND\""));
        assert!(entry.contains("CP_TH_Digikey:CP_D5.00mm_P2.00mm_H11.00mm"));
        // Polarized body carries the plus mark polylines.
        assert_eq!(entry.matches("(polyline").count(), 4);
    }

    #[test]
    fn resistor_symbol_uses_power_label() {
        let mut d = radial_descriptor();
        d.body = BodyShape::Axial {
            length: 6.8,
            diameter: 2.5,
        };
        d.rating = "1/4 W".to_string();
        let sym = KiSymbol::from_descriptor(&d);
        let entry = sym.to_kicad_lib_entry();
        assert!(entry.contains("(property \"Power\" \"1/4 W\""));
        assert!(entry.contains("(rectangle"));
    }
}
