//! Command handlers

use std::io;

use freight_app::app::{DistributionOptions, FleetService, ServiceResult};
use freight_app::config::Config;
use freight_app::export::export_report;
use freight_app::repository::{load_fleet_seed, open_state_repo, open_state_repo_at};
use freight_domain::VehicleKind;
use freight_infra::persistence::FileStateRepository;
use freight_types::{Error, OutputFormat};

use crate::cli::{ClientAction, Cli, Commands, VehicleAction, VehicleSpec};
use crate::menu::Menu;
use crate::output::{output_clients, output_report, output_summary, output_vehicles};

/// Execute CLI command
pub fn execute(cli: Cli) -> ServiceResult<()> {
    // Load config
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Config {
            show,
            set_company,
            set_output,
            set_reset,
            set_input_policy,
            set_state,
            reset,
        } => cmd_config(
            config,
            show,
            set_company,
            set_output,
            set_reset,
            set_input_policy,
            set_state,
            reset,
        ),
        command => {
            let repo = match cli.state {
                Some(path) => open_state_repo_at(path),
                None => open_state_repo(&config)?,
            };
            tracing::debug!(path = %repo.store_path().display(), "using state document");

            let mut service = FleetService::open(config.company_name.clone(), repo)?
                .with_input_policy(config.enforce_input_policy);
            run_fleet_command(&mut service, command, &config, output_format)
        }
    }
}

fn run_fleet_command(
    service: &mut FleetService<FileStateRepository>,
    command: Commands,
    config: &Config,
    output_format: OutputFormat,
) -> ServiceResult<()> {
    match command {
        Commands::Client { action } => cmd_client(service, action, output_format),
        Commands::Vehicle { action } => cmd_vehicle(service, action, output_format),
        Commands::Distribute { export } => {
            // Loads are not stored, so a one-shot run always starts empty
            let report = service.distribute(&DistributionOptions::new())?;
            output_report(output_format, &report)?;
            if let Some(path) = export {
                export_report(&report, &path)?;
                eprintln!("Result exported to {}", path.display());
            }
            Ok(())
        }
        Commands::Seed { file, replace } => {
            let state = load_fleet_seed(&file)?;
            let (clients, vehicles) = service.import(state, replace);
            service.save()?;
            println!("Imported {} clients and {} vehicles.", clients, vehicles);
            Ok(())
        }
        Commands::Menu => {
            let options = DistributionOptions::new().with_reset(config.reset_before_distribute);
            let stdin = io::stdin();
            let stdout = io::stdout();
            Menu::new(service, options, stdin.lock(), stdout.lock())
                .run()
                .map_err(Error::from)?;
            service.save()
        }
        Commands::Summary => {
            output_summary(output_format, &service.company().summary())?;
            Ok(())
        }
        Commands::Config { .. } => cmd_config(
            config.clone(),
            true,
            None,
            None,
            None,
            None,
            None,
            false,
        ),
    }
}

fn cmd_client(
    service: &mut FleetService<FileStateRepository>,
    action: ClientAction,
    output_format: OutputFormat,
) -> ServiceResult<()> {
    match action {
        ClientAction::Add { name, weight, vip } => {
            let index = service.add_client(&name, weight, vip)?;
            service.save()?;
            println!("Client added (#{}).", index);
        }
        ClientAction::Edit {
            index,
            name,
            weight,
            vip,
        } => {
            let client = service.edit_client(index, name.as_deref(), weight, vip)?;
            println!("Client #{} updated: {}", index, client);
            service.save()?;
        }
        ClientAction::Remove { index } => {
            let removed = service.remove_client(index)?;
            service.save()?;
            println!("Client {} removed.", removed.name());
        }
        ClientAction::List { search } => {
            let rows = service.search_clients(search.as_deref().unwrap_or(""));
            output_clients(output_format, &rows)?;
        }
    }
    Ok(())
}

fn cmd_vehicle(
    service: &mut FleetService<FileStateRepository>,
    action: VehicleAction,
    output_format: OutputFormat,
) -> ServiceResult<()> {
    match action {
        VehicleAction::Add { spec } => {
            let (kind, capacity) = match spec {
                VehicleSpec::Plain { capacity } => (VehicleKind::Plain, capacity),
                VehicleSpec::Train { capacity, cars } => (
                    VehicleKind::Train {
                        number_of_cars: cars,
                    },
                    capacity,
                ),
                VehicleSpec::Airplane { capacity, altitude } => (
                    VehicleKind::Airplane {
                        max_altitude: altitude,
                    },
                    capacity,
                ),
            };
            let id = service.add_vehicle(kind, capacity)?;
            service.save()?;
            println!("{} added: {}", kind.label(), id);
        }
        VehicleAction::Edit {
            index,
            capacity,
            cars,
            altitude,
            plain,
        } => {
            let kind = match (cars, altitude, plain) {
                (Some(number_of_cars), _, _) => Some(VehicleKind::Train { number_of_cars }),
                (_, Some(max_altitude), _) => Some(VehicleKind::Airplane { max_altitude }),
                (_, _, true) => Some(VehicleKind::Plain),
                _ => None,
            };
            let id = service.edit_vehicle(index, kind, capacity)?;
            service.save()?;
            println!("Vehicle {} updated.", id);
        }
        VehicleAction::Remove { index } => {
            let removed = service.remove_vehicle(index)?;
            service.save()?;
            println!("Vehicle {} removed.", removed.id());
        }
        VehicleAction::List => {
            output_vehicles(output_format, service.company().list_vehicles())?;
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    mut config: Config,
    show: bool,
    set_company: Option<String>,
    set_output: Option<OutputFormat>,
    set_reset: Option<bool>,
    set_input_policy: Option<bool>,
    set_state: Option<std::path::PathBuf>,
    reset: bool,
) -> ServiceResult<()> {
    if reset {
        config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
        return Ok(());
    }

    let mut modified = false;

    if let Some(name) = set_company {
        config.company_name = name;
        modified = true;
    }
    if let Some(format) = set_output {
        config.output_format = format;
        modified = true;
    }
    if let Some(enabled) = set_reset {
        config.reset_before_distribute = enabled;
        modified = true;
    }
    if let Some(enabled) = set_input_policy {
        config.enforce_input_policy = enabled;
        modified = true;
    }
    if let Some(path) = set_state {
        config.state_path = Some(path);
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration saved.");
    }

    if show || !modified {
        print!("{}", config);
    }

    Ok(())
}
