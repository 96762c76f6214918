//! JSON export: one record per vehicle with nested clients

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use freight_types::{DistributionReport, Result};

pub fn write_json<W: Write>(report: &DistributionReport, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, &report.vehicles)?;
    Ok(())
}

pub fn export_to_json(report: &DistributionReport, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_json(report, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use freight_types::{LoadedClient, VehicleLoadReport};

    #[test]
    fn test_json_is_vehicle_array() {
        let report = DistributionReport {
            company: "Acme".to_string(),
            generated_at: Utc::now(),
            vehicles: vec![VehicleLoadReport {
                vehicle_id: "v-1".to_string(),
                vehicle_type: "Airplane".to_string(),
                capacity: 40.0,
                current_load: 12.0,
                clients: vec![LoadedClient {
                    name: "Ёлкин".to_string(),
                    cargo_weight: 12.0,
                    vip: true,
                }],
            }],
            unassigned: vec![],
        };

        let mut buf = Vec::new();
        write_json(&report, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Ёлкин"));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["vehicle_id"], "v-1");
        assert_eq!(value[0]["type"], "Airplane");
        assert_eq!(value[0]["clients"][0]["vip"], true);
    }
}
