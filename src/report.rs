use crate::plate::Plate;
use crate::present::{self, Style};
use crate::types::Lookup;
use chrono::{DateTime, Local};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

pub fn report_path(dir: &Path, plate: &Plate, now: &DateTime<Local>) -> PathBuf {
    dir.join(format!(
        "vehicle_{}_{}.txt",
        plate,
        now.format("%Y%m%d_%H%M%S")
    ))
}

pub fn contents(plate: &Plate, lookup: &Lookup, now: &DateTime<Local>) -> String {
    format!(
        "VEHICLEINFO Report\nGenerated: {}\nVehicle: {}\nSource: {}\n\n{}\n",
        now.format("%Y-%m-%d %H:%M:%S"),
        plate,
        lookup.source,
        present::render(lookup, Style::Plain)
    )
}

/// Writes the plain report under `dir`, creating it if needed.
pub fn save(
    dir: &Path,
    plate: &Plate,
    lookup: &Lookup,
    now: &DateTime<Local>,
) -> Result<PathBuf, failure::Error> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .map_err(|e| format_err!("Unable to create {}: {}", dir.display(), e))?;
        info!("Created reports directory {}", dir.display());
    }
    let path = report_path(dir, plate, now);
    fs::write(&path, contents(plate, lookup, now))
        .map_err(|e| format_err!("Unable to write {}: {}", path.display(), e))?;
    Ok(path)
}
