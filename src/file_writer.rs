use crate::error::{Error, Result};
use crate::kicad_models::{KiFootprint, KiSymbol};
use log::info;
use regex::Regex;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::PathBuf;

const KICAD_SYM_HEADER: &str = r#"(kicad_symbol_lib
	(version 20231120)
	(generator "digikey2kicad_rs")
	(generator_version "0.1")
"#;

const KICAD_SYM_FOOTER: &str = r#")
"#;

/// Manages the output library structure. `path` is the library root; symbol
/// libraries live under `symbols/`, footprint libraries under
/// `footprints/<library>.pretty/`.
pub struct KicadLibrary {
    pub path: PathBuf,
}

impl KicadLibrary {
    fn symbol_lib_path(&self, library: &str) -> PathBuf {
        self.path.join("symbols").join(format!("{library}.kicad_sym"))
    }

    fn footprint_dir(&self, library: &str) -> PathBuf {
        self.path.join("footprints").join(format!("{library}.pretty"))
    }

    /// Appends a symbol to the named symbol library, creating the library
    /// file on first use. Appending a symbol that is already present is a
    /// no-op.
    pub fn add_symbol(&self, library: &str, symbol: &KiSymbol) -> Result<()> {
        let lib_path = self.symbol_lib_path(library);
        if let Some(parent) = lib_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let symbol_content = symbol.to_kicad_lib_entry();

        // --- Check for Duplicates ---
        if lib_path.exists() {
            let mut file_content = String::new();
            File::open(&lib_path)?.read_to_string(&mut file_content)?;

            let pattern = format!(r#"\(\s*symbol\s*"{}""#, regex::escape(&symbol.name));
            let re = Regex::new(&pattern).map_err(|e| Error::ParseError(e.to_string()))?;

            if re.is_match(&file_content) {
                info!(
                    "symbol '{}' already exists in library '{}', skipping",
                    symbol.name, library
                );
                return Ok(());
            }
        }

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(&lib_path)?;

        let metadata = file.metadata()?;

        if metadata.len() == 0 {
            // File is new or empty, write header, symbol, and footer
            file.write_all(KICAD_SYM_HEADER.as_bytes())?;
            file.write_all(symbol_content.as_bytes())?;
            file.write_all(KICAD_SYM_FOOTER.as_bytes())?;
            info!("created symbol library '{}' with '{}'", library, symbol.name);
        } else {
            // File exists, amend it: insert the new symbol before the final ')'
            file.seek(SeekFrom::End(-(KICAD_SYM_FOOTER.len() as i64)))?;
            file.write_all(symbol_content.as_bytes())?;
            file.write_all(KICAD_SYM_FOOTER.as_bytes())?;
            info!("appended symbol '{}' to library '{}'", symbol.name, library);
        }

        Ok(())
    }

    /// Writes a footprint to its own .kicad_mod file inside the named
    /// library. An existing footprint file is left untouched.
    pub fn add_footprint(&self, library: &str, footprint: &KiFootprint) -> Result<()> {
        let dir = self.footprint_dir(library);
        fs::create_dir_all(&dir)?;
        let fp_path = dir.join(format!("{}.kicad_mod", footprint.name));
        if fp_path.exists() {
            info!(
                "footprint '{}' already exists in library '{}', skipping",
                footprint.name, library
            );
            return Ok(());
        }
        fs::write(fp_path, footprint.to_kicad_mod_entry())?;
        info!("wrote footprint '{}' to library '{}'", footprint.name, library);
        Ok(())
    }
}
