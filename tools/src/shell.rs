//! The numbered text menu.
//!
//! Every farm outcome, success or rejection, is printed as one line and
//! the loop carries on. End of input exits like choosing "0".

use anyhow::Result;
use farm_core::{error::FarmResult, event::FarmEvent, farm::FarmState};
use std::io::{BufRead, Write};
use std::str::FromStr;

enum Flow {
    Continue,
    Exit,
}

pub struct Shell<'a, R, W> {
    farm:   &'a mut FarmState,
    input:  R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(farm: &'a mut FarmState, input: R, output: W) -> Self {
        Self { farm, input, output }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Choose: ")? else {
                break;
            };
            if let Flow::Exit = self.dispatch(&choice)? {
                break;
            }
        }
        writeln!(self.output, "Exiting farm sim.")?;
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: &str) -> Result<Flow> {
        match choice {
            "1" => {
                let Some(crop) = self.prompt_crop("Which crop to plant? ")? else {
                    return Ok(Flow::Exit);
                };
                let outcome = self.farm.plant(&crop);
                self.report(outcome)?;
            }
            "2" => {
                let Some(raw) = self.prompt("Days to wait [1]: ")? else {
                    return Ok(Flow::Exit);
                };
                match parse_or_default(&raw, 1u64) {
                    Some(days) => {
                        let outcome = self.farm.advance(days);
                        self.report(outcome)?;
                    }
                    None => writeln!(self.output, "'{raw}' is not a number of days.")?,
                }
            }
            "3" => {
                let Some(crop) = self.prompt_crop("Which crop to harvest? ")? else {
                    return Ok(Flow::Exit);
                };
                let outcome = self.farm.harvest_one(&crop);
                self.report(outcome)?;
            }
            "4" => {
                let count = self.farm.harvest_all_ready();
                if count > 0 {
                    writeln!(self.output, "Harvested {count} crops.")?;
                } else {
                    writeln!(self.output, "No crops ready.")?;
                }
            }
            "5" => write!(self.output, "{}", render_plots(self.farm))?,
            "6" => write!(self.output, "{}", render_inventory(self.farm))?,
            "7" => {
                write!(self.output, "{}", render_shop(self.farm))?;
                let Some(crop) = self.prompt_crop("Which crop seed to buy? ")? else {
                    return Ok(Flow::Exit);
                };
                if crop.is_empty() {
                    writeln!(self.output, "Left the shop.")?;
                    return Ok(Flow::Continue);
                }
                let Some(qty) = self.prompt_quantity()? else {
                    return Ok(Flow::Exit);
                };
                if let Some(qty) = qty {
                    let outcome = self.farm.buy_seeds(&crop, qty);
                    self.report(outcome)?;
                }
            }
            "8" => {
                let outcome = self.farm.buy_plot();
                self.report(outcome)?;
            }
            "9" => {
                let Some(crop) = self.prompt_crop("Which crop to sell? ")? else {
                    return Ok(Flow::Exit);
                };
                let Some(qty) = self.prompt_quantity()? else {
                    return Ok(Flow::Exit);
                };
                if let Some(qty) = qty {
                    let outcome = self.farm.sell_crops(&crop, qty);
                    self.report(outcome)?;
                }
            }
            "0" => return Ok(Flow::Exit),
            _ => writeln!(self.output, "Invalid choice.")?,
        }
        Ok(Flow::Continue)
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "\nFarm Management System (day {}, {} gold)",
            self.farm.day(),
            self.farm.gold()
        )?;
        for line in [
            "1. Plant Crop",
            "2. Wait",
            "3. Harvest Crop",
            "4. Harvest All Ready",
            "5. Show Plots",
            "6. Show Inventory",
            "7. Shop (Buy Seeds)",
            "8. Buy Plot",
            "9. Sell Crops",
            "0. Exit",
        ] {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    /// Read one trimmed line. `None` on end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_crop(&mut self, label: &str) -> Result<Option<String>> {
        Ok(self.prompt(label)?.map(|crop| crop.to_lowercase()))
    }

    /// Outer `None` is end of input; inner `None` is an unparsable entry,
    /// already reported to the player.
    fn prompt_quantity(&mut self) -> Result<Option<Option<u32>>> {
        let Some(raw) = self.prompt("How many? [1]: ")? else {
            return Ok(None);
        };
        let qty = parse_or_default(&raw, 1u32);
        if qty.is_none() {
            writeln!(self.output, "'{raw}' is not a quantity.")?;
        }
        Ok(Some(qty))
    }

    fn report(&mut self, outcome: FarmResult<FarmEvent>) -> Result<()> {
        match outcome {
            Ok(event) => writeln!(self.output, "{event}")?,
            Err(err) => writeln!(self.output, "{err}.")?,
        }
        Ok(())
    }
}

/// Empty input takes the default. Anything else must parse.
fn parse_or_default<T: FromStr>(raw: &str, default: T) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(default);
    }
    raw.parse().ok()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn render_plots(farm: &FarmState) -> String {
    let mut out = String::from("\n=== Active Plots ===\n");
    if farm.plots().is_empty() {
        out.push_str("No plots planted.\n");
        return out;
    }
    for (idx, plot) in farm.plots().iter().enumerate() {
        out.push_str(&format!(
            "{:2}. {:12} - {}\n",
            idx + 1,
            capitalize(plot.crop_type()),
            plot.status_label()
        ));
    }
    out
}

pub fn render_inventory(farm: &FarmState) -> String {
    let snapshot = farm.snapshot();
    let mut out = String::from("\n=== Inventory ===\n-- Seeds --\n");
    for line in &snapshot.seeds {
        out.push_str(&format!("{:12}: {}\n", capitalize(&line.crop), line.count));
    }
    out.push_str("-- Crops --\n");
    for line in &snapshot.crops {
        out.push_str(&format!("{:12}: {}\n", capitalize(&line.crop), line.count));
    }
    out.push_str(&format!("Gold: {}\n", snapshot.gold));
    out.push_str(&format!(
        "Plots: {}/{} in use\n",
        snapshot.plots_occupied, snapshot.plot_capacity
    ));
    out
}

pub fn render_shop(farm: &FarmState) -> String {
    let rule = "-".repeat(50);
    let mut out = String::from("\n=== Seed Shop ===\n");
    out.push_str(&format!("Gold: {}\n", farm.gold()));
    out.push_str(&format!(
        "{:12} {:>10} {:>10} {:>12}\n",
        "Crop", "Seed Cost", "Sell Price", "Growth Time"
    ));
    out.push_str(&rule);
    out.push('\n');
    for spec in farm.catalog().iter() {
        out.push_str(&format!(
            "{:12} {:>10} {:>10} {:>12}\n",
            capitalize(&spec.id),
            spec.seed_cost,
            spec.sell_price,
            spec.grow_time
        ));
    }
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("Next plot: {} gold\n", farm.next_plot_cost()));
    out
}
