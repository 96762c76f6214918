//! Output formatting module

use serde::Serialize;

use freight_domain::{Client, FleetSummary, Vehicle};
use freight_types::{DistributionReport, OutputFormat, Result};

#[derive(Serialize)]
struct IndexedClient<'a> {
    index: usize,
    #[serde(flatten)]
    client: &'a Client,
}

#[derive(Serialize)]
struct IndexedVehicle<'a> {
    index: usize,
    #[serde(flatten)]
    vehicle: &'a Vehicle,
}

pub fn render_clients(clients: &[(usize, &Client)]) -> String {
    if clients.is_empty() {
        return "No clients.\n".to_string();
    }
    let mut out = String::new();
    out.push_str(&format!("{:>4}  {:<24} {:>10}  {}\n", "#", "Name", "Cargo", "VIP"));
    out.push_str(&"-".repeat(48));
    out.push('\n');
    for (index, client) in clients {
        out.push_str(&format!(
            "{:>4}  {:<24} {:>10}  {}\n",
            index,
            truncate_str(client.name(), 24),
            client.cargo_weight(),
            if client.is_vip() { "yes" } else { "no" }
        ));
    }
    out
}

pub fn render_vehicles(vehicles: &[Vehicle]) -> String {
    if vehicles.is_empty() {
        return "No vehicles.\n".to_string();
    }
    let mut out = String::new();
    for (index, vehicle) in vehicles.iter().enumerate() {
        out.push_str(&format!("[{}] {}\n", index, vehicle.kind().label()));
        out.push_str(&vehicle.to_string());
        out.push_str("\n\n");
    }
    out
}

pub fn render_report(report: &DistributionReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Distribution Result - {}\n", report.company));
    out.push_str("==================================================\n");
    out.push_str(&format!(
        "{:<38} {:<9} {:>9} {:>9}  {}\n",
        "ID", "Type", "Capacity", "Loaded", "Clients"
    ));
    out.push_str(&"-".repeat(90));
    out.push('\n');
    for vehicle in &report.vehicles {
        out.push_str(&format!(
            "{:<38} {:<9} {:>9} {:>9}  {}\n",
            vehicle.vehicle_id,
            vehicle.vehicle_type,
            vehicle.capacity,
            vehicle.current_load,
            vehicle.clients_summary()
        ));
    }
    out.push('\n');
    out.push_str(&format!(
        "Placed: {}   Load: {} / {}\n",
        report.placed_count(),
        report.total_load(),
        report.total_capacity()
    ));
    if report.is_complete() {
        out.push_str("All clients placed.\n");
    } else {
        out.push_str(&format!("Unassigned: {}\n", report.unassigned.join(", ")));
    }
    out
}

pub fn render_summary(summary: &FleetSummary) -> String {
    let mut out = String::new();
    out.push_str("Fleet Summary\n");
    out.push_str("=============\n");
    out.push_str(&format!(
        "Clients:        {} ({} VIP)\n",
        summary.client_count, summary.vip_count
    ));
    out.push_str(&format!("Vehicles:       {}\n", summary.vehicle_count));
    out.push_str(&format!("Total cargo:    {}\n", summary.total_cargo));
    out.push_str(&format!("Total capacity: {}\n", summary.total_capacity));
    out.push_str(&format!("Total load:     {}\n", summary.total_load));
    out
}

pub fn output_clients(output_format: OutputFormat, clients: &[(usize, &Client)]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let rows: Vec<_> = clients
            .iter()
            .map(|(index, client)| IndexedClient {
                index: *index,
                client,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", render_clients(clients));
    }
    Ok(())
}

pub fn output_vehicles(output_format: OutputFormat, vehicles: &[Vehicle]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let rows: Vec<_> = vehicles
            .iter()
            .enumerate()
            .map(|(index, vehicle)| IndexedVehicle { index, vehicle })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", render_vehicles(vehicles));
    }
    Ok(())
}

pub fn output_report(output_format: OutputFormat, report: &DistributionReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", render_report(report));
    }
    Ok(())
}

pub fn output_summary(output_format: OutputFormat, summary: &FleetSummary) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        print!("{}", render_summary(summary));
    }
    Ok(())
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
