//! Tournament organizer CLI
//!
//! Registers teams, records group and knockout results, and prints the
//! standings for a tournament kept in a data directory.

mod render;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use tourney_core::models::coerce_goals_str;
use tourney_core::{
    request_schema_json, DataDir, GroupLabel, KnockoutLog, KnockoutMatch, Match, NewMatch,
    StandingsBoard, TeamId, TournamentConfig, TournamentStore,
};

#[derive(Parser)]
#[command(name = "tourney")]
#[command(about = "Group stage and knockout tournament organizer", long_about = None)]
struct Cli {
    /// Directory holding tournament.json and knockouts_v1.json
    #[arg(long, global = true, default_value = "tourney-data")]
    data_dir: PathBuf,

    /// Tournament config YAML (overrides TOURNEY_CONFIG_PATH)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register, remove or list teams
    Team {
        #[command(subcommand)]
        action: TeamAction,
    },

    /// Record, remove or list group-stage matches
    Match {
        #[command(subcommand)]
        action: MatchAction,
    },

    /// Record, remove, list or clear knockout matches
    Knockout {
        #[command(subcommand)]
        action: KnockoutAction,
    },

    /// Print group tables, qualifiers and the knockout table
    Standings {
        /// Teams advancing from each group
        #[arg(long)]
        qualifiers: Option<usize>,

        /// Print JSON instead of text tables
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Print the JSON Schema of the standings API request
    Schema,
}

#[derive(Subcommand)]
enum TeamAction {
    Add {
        name: String,
        #[arg(long)]
        group: GroupLabel,
    },
    /// Remove a team together with all of its matches
    Remove { id: String },
    List,
}

#[derive(Subcommand)]
enum MatchAction {
    Add(MatchArgs),
    Remove { id: String },
    List,
}

#[derive(Subcommand)]
enum KnockoutAction {
    Add(MatchArgs),
    Remove { id: String },
    List,
    /// Delete every knockout match
    Clear,
}

#[derive(Args)]
struct MatchArgs {
    /// Home team id or name
    #[arg(long)]
    home: String,

    /// Away team id or name
    #[arg(long)]
    away: String,

    #[arg(long, default_value = "0")]
    home_goals: String,

    #[arg(long, default_value = "0")]
    away_goals: String,

    /// Match day (YYYY-MM-DD), today when omitted
    #[arg(long)]
    date: Option<NaiveDate>,

    #[arg(long, default_value = "")]
    notes: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let dir = DataDir::new(&cli.data_dir);

    match cli.command {
        Commands::Team { action } => run_team(action, &dir, &config),
        Commands::Match { action } => run_match(action, &dir),
        Commands::Knockout { action } => run_knockout(action, &dir),
        Commands::Standings { qualifiers, json } => run_standings(&dir, &config, qualifiers, json),
        Commands::Schema => {
            println!("{}", request_schema_json()?);
            Ok(())
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<TournamentConfig> {
    match path {
        Some(path) => TournamentConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => TournamentConfig::from_env().context("loading config from environment"),
    }
}

fn load_store(dir: &DataDir) -> Result<TournamentStore> {
    let path = dir.tournament_path();
    TournamentStore::load(&path).with_context(|| format!("reading {}", path.display()))
}

fn save_store(dir: &DataDir, store: &TournamentStore) -> Result<()> {
    let path = dir.tournament_path();
    store
        .save(&path)
        .with_context(|| format!("writing {}", path.display()))
}

fn save_knockouts(dir: &DataDir, log: &KnockoutLog) -> Result<()> {
    let path = dir.knockouts_path();
    log.save(&path)
        .with_context(|| format!("writing {}", path.display()))
}

/// Accept a team id, or a registered team name (case-insensitive). Anything
/// else is passed through as a raw id.
fn resolve_team(store: &TournamentStore, key: &str) -> TeamId {
    let key = key.trim();
    if let Some(team) = store.teams().iter().find(|t| t.id.as_str() == key) {
        return team.id.clone();
    }
    let lowered = key.to_lowercase();
    if let Some(team) = store.teams().iter().find(|t| t.name.to_lowercase() == lowered) {
        return team.id.clone();
    }
    log::warn!("'{}' does not match any registered team; using it as an id", key);
    TeamId::from(key)
}

fn new_match(store: &TournamentStore, args: MatchArgs) -> NewMatch {
    NewMatch {
        date: args
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive()),
        notes: args.notes,
        home_id: resolve_team(store, &args.home),
        away_id: resolve_team(store, &args.away),
        home_goals: coerce_goals_str(&args.home_goals),
        away_goals: coerce_goals_str(&args.away_goals),
    }
}

fn run_team(action: TeamAction, dir: &DataDir, config: &TournamentConfig) -> Result<()> {
    let mut store = load_store(dir)?;

    match action {
        TeamAction::Add { name, group } => {
            let team = store.add_team(&name, group, config)?;
            save_store(dir, &store)?;
            println!("Registered {} in group {} (id {})", team.name, team.group, team.id);
        }
        TeamAction::Remove { id } => {
            let id = TeamId::from(id);
            if !store.remove_team(&id) {
                bail!("no team with id {id}");
            }
            let mut knockouts = KnockoutLog::load(&dir.knockouts_path());
            let dropped = knockouts.remove_team(&id);
            save_store(dir, &store)?;
            if dropped > 0 {
                save_knockouts(dir, &knockouts)?;
            }
            println!("Removed team {id}");
        }
        TeamAction::List => {
            for team in store.teams() {
                println!("{}  {:<24} {}", team.group, team.name, team.id);
            }
        }
    }
    Ok(())
}

fn run_match(action: MatchAction, dir: &DataDir) -> Result<()> {
    let mut store = load_store(dir)?;

    match action {
        MatchAction::Add(args) => {
            let new = new_match(&store, args);
            let m = store.add_match(new)?;
            save_store(dir, &store)?;
            println!("Recorded match {}", m.id);
        }
        MatchAction::Remove { id } => {
            if !store.remove_match(&id) {
                bail!("no match with id {id}");
            }
            save_store(dir, &store)?;
            println!("Removed match {id}");
        }
        MatchAction::List => {
            print!(
                "{}",
                render::render_matches(store.matches(), store.teams(), |m: &Match| {
                    describe(m.date, &m.notes, &m.id)
                })
            );
        }
    }
    Ok(())
}

fn run_knockout(action: KnockoutAction, dir: &DataDir) -> Result<()> {
    let path = dir.knockouts_path();
    let mut log = KnockoutLog::load(&path);

    match action {
        KnockoutAction::Add(args) => {
            let store = load_store(dir)?;
            let m = log.add(new_match(&store, args))?;
            save_knockouts(dir, &log)?;
            println!("Recorded knockout match {}", m.id);
        }
        KnockoutAction::Remove { id } => {
            if !log.remove(&id) {
                bail!("no knockout match with id {id}");
            }
            save_knockouts(dir, &log)?;
            println!("Removed knockout match {id}");
        }
        KnockoutAction::List => {
            let store = load_store(dir)?;
            print!(
                "{}",
                render::render_matches(log.matches(), store.teams(), |m: &KnockoutMatch| {
                    describe(m.date, &m.notes, &m.id)
                })
            );
        }
        KnockoutAction::Clear => {
            log.clear(&path)
                .with_context(|| format!("clearing {}", path.display()))?;
            println!("Knockout phase cleared");
        }
    }
    Ok(())
}

fn run_standings(
    dir: &DataDir,
    config: &TournamentConfig,
    qualifiers: Option<usize>,
    json: bool,
) -> Result<()> {
    let per_group = qualifiers.unwrap_or(config.qualifiers_per_group);
    if per_group == 0 {
        bail!("--qualifiers must be at least 1");
    }

    let store = load_store(dir)?;
    let knockouts = KnockoutLog::load(&dir.knockouts_path());

    let mut board = StandingsBoard::new(config.groups.clone(), per_group);
    let standings = board.standings(store.teams(), store.matches(), knockouts.matches());

    if json {
        println!("{}", serde_json::to_string_pretty(standings)?);
    } else {
        print!("{}", render::render_standings(standings));
    }
    Ok(())
}

fn describe(date: NaiveDate, notes: &str, id: &str) -> String {
    if notes.is_empty() {
        format!("[{id}] {date}")
    } else {
        format!("[{id}] {date} • {notes}")
    }
}
