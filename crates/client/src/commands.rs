//! Subcommand handlers.

use anyhow::{Result, bail};
use clap::Args;
use warband_content::ContentFactory;
use warband_core::SquadId;
use warband_runtime::{Arena, BattleSummary};

#[derive(Args)]
pub struct Seed {
    /// Seed even when the store already holds squads
    #[arg(long)]
    force: bool,
}

impl Seed {
    pub fn execute(self, arena: &Arena, factory: &ContentFactory) -> Result<()> {
        let existing = arena.squads()?.len();
        if existing > 0 && !self.force {
            bail!("Store already holds {existing} squads (use --force to seed anyway)");
        }

        let world = factory.load_world()?;
        let ids = arena.seed_world(&world)?;
        println!("Seeded {} squads", ids.len());
        Ok(())
    }
}

pub fn list_squads(arena: &Arena) -> Result<()> {
    let squads = arena.squads()?;
    if squads.is_empty() {
        println!("No squads stored. Run `warband seed` first.");
        return Ok(());
    }

    for summary in squads {
        let squad = summary.squad;
        println!(
            "{:>4}  {:<24} level {:>3}  {} units  (commander: {})",
            squad.id.0, squad.name, squad.level, summary.units, squad.commander
        );
    }
    Ok(())
}

#[derive(Args)]
pub struct Battle {
    /// First squad id; requires --second
    #[arg(long, requires = "second")]
    first: Option<u32>,
    /// Second squad id; requires --first
    #[arg(long, requires = "first")]
    second: Option<u32>,
}

impl Battle {
    pub async fn execute(self, arena: &Arena) -> Result<()> {
        let summary = match (self.first, self.second) {
            (Some(first), Some(second)) => {
                arena.run_battle(SquadId(first), SquadId(second)).await?
            }
            (None, None) => match arena.run_skirmish().await? {
                Some(summary) => summary,
                None => {
                    println!("Not enough squads for a battle.");
                    return Ok(());
                }
            },
            _ => bail!("--first and --second must be given together"),
        };

        print_summary(&summary);
        Ok(())
    }
}

fn print_summary(summary: &BattleSummary) {
    let outcome = &summary.outcome;
    print!("{}", outcome.content());
    println!();
    println!(
        "{} defeated {} in {} rounds. {} is now level {}; {} units removed.",
        outcome.winner_name,
        outcome.loser_name,
        outcome.rounds,
        outcome.winner_name,
        summary.receipt.winner_level,
        summary.receipt.units_removed,
    );
}

#[derive(Args)]
pub struct Report {
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Report {
    pub fn execute(self, arena: &Arena) -> Result<()> {
        let Some(report) = arena.latest_report()? else {
            println!("No battles have been fought yet.");
            return Ok(());
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!(
                "{} vs {} at {}",
                report.winner_name,
                report.loser_name,
                report.timestamp.to_rfc3339()
            );
            print!("{}", report.content);
        }
        Ok(())
    }
}

pub fn cleanup(arena: &Arena) -> Result<()> {
    let removed = arena.cleanup_empty_squads()?;
    if removed.is_empty() {
        println!("No empty squads.");
    }
    for squad in removed {
        println!("Removed {} ({})", squad.name, squad.id);
    }
    Ok(())
}
