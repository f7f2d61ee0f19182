//! rWorklog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    use crate::cli::commands as c;

    match &cli.command {
        Commands::Init => c::init::handle(cli),
        Commands::Config { .. } => c::config::handle(&cli.command, cfg),
        Commands::Db { .. } => c::db::handle(&cli.command, cfg),
        Commands::Log { .. } => c::log::handle(&cli.command, cfg),
        Commands::Project(cmd) => c::project::handle(cmd, cfg),
        Commands::Status(cmd) => c::status::handle(cmd, cfg),
        Commands::User(cmd) => c::user::handle(cmd, cfg),
        Commands::Attr(cmd) => c::attr::handle(cmd, cfg),
        Commands::Issue(cmd) => c::issue::handle(cmd, cfg),
        Commands::Task(cmd) => c::task::handle(cmd, cfg),
        Commands::Assign(cmd) => c::assign::handle(cmd, cfg),
        Commands::Hours(cmd) => c::hours::handle(cmd, cfg),
        Commands::Grid { .. } => c::grid::handle(&cli.command, cfg),
        Commands::Report { .. } => c::report::handle(&cli.command, cfg),
        Commands::Plan(cmd) => c::plan::handle(cmd, cfg),
        Commands::Estimate(cmd) => c::estimate::handle(cmd, cfg),
        Commands::Dashboard { .. } => c::dashboard::handle(&cli.command, cfg),
        Commands::Backup { .. } => c::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => c::export::handle(&cli.command, cfg),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta
    let mut cfg = Config::load()?;

    // 3️⃣ applica eventuale override del DB da riga di comando
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    // 4️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg)
}
