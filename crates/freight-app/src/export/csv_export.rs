//! CSV export: one row per vehicle, clients as a JSON column

use std::io::Write;
use std::path::Path;

use freight_types::{DistributionReport, Error, Result};

const HEADER: [&str; 5] = ["vehicle_id", "type", "capacity", "current_load", "clients"];

pub fn write_csv<W: Write>(report: &DistributionReport, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(HEADER)?;

    for vehicle in &report.vehicles {
        let capacity = vehicle.capacity.to_string();
        let current_load = vehicle.current_load.to_string();
        let clients = serde_json::to_string(&vehicle.clients)?;
        writer.write_record([
            vehicle.vehicle_id.as_str(),
            vehicle.vehicle_type.as_str(),
            capacity.as_str(),
            current_load.as_str(),
            clients.as_str(),
        ])?;
    }

    writer
        .flush()
        .map_err(|e| Error::Export(format!("failed to flush CSV: {}", e)))?;
    Ok(())
}

pub fn export_to_csv(report: &DistributionReport, output_path: &Path) -> Result<()> {
    let file = std::fs::File::create(output_path)?;
    write_csv(report, file)
}
