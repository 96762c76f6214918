//! Interactive numbered menu
//!
//! Reads one answer per line. Bad input prints a hint and returns to the
//! menu; end of input behaves like choosing exit.

use std::io::{self, BufRead, Write};

use freight_app::app::{DistributionOptions, FleetService};
use freight_app::validation::{parse_capacity, parse_count, parse_number, parse_yes};
use freight_domain::repository::StateRepository;
use freight_domain::VehicleKind;

use crate::output::{render_clients, render_report, render_vehicles};

const MENU: &str = "
1. Create client
2. Create airplane
3. Create train
4. List clients
5. List vehicles
6. Distribute cargo
7. Exit
";

enum Action {
    CreateClient,
    CreateAirplane,
    CreateTrain,
    ListClients,
    ListVehicles,
    Distribute,
    Exit,
}

impl Action {
    fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Action::CreateClient),
            2 => Some(Action::CreateAirplane),
            3 => Some(Action::CreateTrain),
            4 => Some(Action::ListClients),
            5 => Some(Action::ListVehicles),
            6 => Some(Action::Distribute),
            7 => Some(Action::Exit),
            _ => None,
        }
    }
}

pub struct Menu<'a, S: StateRepository, R: BufRead, W: Write> {
    service: &'a mut FleetService<S>,
    options: DistributionOptions,
    input: R,
    output: W,
}

impl<'a, S: StateRepository, R: BufRead, W: Write> Menu<'a, S, R, W> {
    pub fn new(service: &'a mut FleetService<S>, options: DistributionOptions, input: R, output: W) -> Self {
        Self {
            service,
            options,
            input,
            output,
        }
    }

    /// Print `prompt` and read one trimmed line; `None` at end of input
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            let Some(answer) = self.ask("Select action: ")? else {
                return Ok(());
            };

            let Some(action) = answer.parse::<u32>().ok().and_then(Action::from_choice) else {
                writeln!(self.output, "Invalid input.")?;
                continue;
            };

            let keep_going = match action {
                Action::CreateClient => self.create_client()?,
                Action::CreateAirplane => self.create_vehicle(true)?,
                Action::CreateTrain => self.create_vehicle(false)?,
                Action::ListClients => {
                    let rows = self.service.search_clients("");
                    let text = render_clients(&rows);
                    writeln!(self.output, "\n--- Clients ---")?;
                    write!(self.output, "{}", text)?;
                    true
                }
                Action::ListVehicles => {
                    let text = render_vehicles(self.service.company().vehicles());
                    writeln!(self.output, "\n--- Vehicles ---")?;
                    write!(self.output, "{}", text)?;
                    true
                }
                Action::Distribute => {
                    writeln!(self.output, "Distributing...")?;
                    match self.service.distribute(&self.options) {
                        Ok(report) => write!(self.output, "{}", render_report(&report))?,
                        Err(e) => writeln!(self.output, "Error: {}", e)?,
                    }
                    true
                }
                Action::Exit => {
                    writeln!(self.output, "Bye.")?;
                    false
                }
            };

            if !keep_going {
                return Ok(());
            }
        }
    }

    /// Returns false when input ran out mid-dialog
    fn create_client(&mut self) -> io::Result<bool> {
        let Some(name) = self.ask("Name: ")? else {
            return Ok(false);
        };
        let Some(weight) = self.ask("Cargo weight: ")? else {
            return Ok(false);
        };
        let Some(vip) = self.ask("VIP? (y/n): ")? else {
            return Ok(false);
        };

        let weight = match parse_number(&weight) {
            Ok(w) => w,
            Err(e) => {
                writeln!(self.output, "Error: {}", e)?;
                return Ok(true);
            }
        };

        match self.service.add_client(&name, weight, parse_yes(&vip)) {
            Ok(_) => writeln!(self.output, "Client added.")?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(true)
    }

    fn create_vehicle(&mut self, airplane: bool) -> io::Result<bool> {
        let Some(capacity) = self.ask("Capacity: ")? else {
            return Ok(false);
        };
        let extra_prompt = if airplane { "Max altitude: " } else { "Number of cars: " };
        let Some(extra) = self.ask(extra_prompt)? else {
            return Ok(false);
        };

        let parsed = parse_capacity(&capacity).and_then(|c| parse_count(&extra).map(|n| (c, n)));
        let (capacity, count) = match parsed {
            Ok(values) => values,
            Err(e) => {
                writeln!(self.output, "Error: {}", e)?;
                return Ok(true);
            }
        };

        let kind = if airplane {
            VehicleKind::Airplane { max_altitude: count }
        } else {
            VehicleKind::Train { number_of_cars: count }
        };
        match self.service.add_vehicle(kind, capacity) {
            Ok(_) if airplane => writeln!(self.output, "Airplane added.")?,
            Ok(_) => writeln!(self.output, "Train added.")?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(true)
    }
}
