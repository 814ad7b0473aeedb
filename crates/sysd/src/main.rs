//! ops-sysd entry point.
//!
//! Runs the system CLI commands and the startup seeding against a JSON
//! snapshot of the switch database.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info};

use ops_sysd::{
    cli_post_init, cli_pre_init, init_logging, init_system_defaults, AclHwInfo, CliNode,
    CommandRegistry, LogHandle, SysdConfig, Vty, BOOTSTRAP_LOG_LEVEL, DEFAULT_CONFIG_PATH,
};
use ops_sysd_common::MemoryStore;

/// OpenSwitch system daemon CLI helpers
#[derive(Parser, Debug)]
#[command(name = "ops-sysd")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file
    #[arg(short = 'c', long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Database snapshot, overrides `general.db_path`
    #[arg(short = 'd', long)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a CLI command line, e.g. `exec show version detail`
    Exec {
        /// Command tree node to run the command on
        #[arg(short = 'n', long, value_enum, default_value_t = Node::Enable)]
        node: Node,

        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
    /// Seed QoS defaults and ACL limits on the System row
    Seed {
        /// Write the seeded database back to the snapshot
        #[arg(short = 'w', long)]
        write: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Node {
    Enable,
    View,
}

impl From<Node> for CliNode {
    fn from(node: Node) -> Self {
        match node {
            Node::Enable => CliNode::Enable,
            Node::View => CliNode::View,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Installed before the config is read so its warnings are not lost
    let logging = match init_logging(BOOTSTRAP_LOG_LEVEL) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("ops-sysd: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(args, &logging) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("ops-sysd: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args, logging: &LogHandle) -> Result<ExitCode> {
    let config = SysdConfig::load_or_default(&args.config)?;
    config.validate()?;
    logging.set_level(&config.general.log_level)?;

    let db_path = args.db.unwrap_or_else(|| config.general.db_path.clone());
    let mut store = MemoryStore::load(&db_path)
        .with_context(|| format!("loading database snapshot {}", db_path.display()))?;

    match args.command {
        Command::Exec { node, words } => {
            cli_pre_init(&mut store);
            let mut registry = CommandRegistry::new();
            cli_post_init(&mut registry);

            let line = words.join(" ");
            let mut vty = Vty::with_newline(config.cli.newline);
            let status = registry.execute(node.into(), &line, &store, &mut vty);
            print!("{}", vty.as_str());
            if !status.is_success() {
                eprintln!("% Command failed: {} (status {})", line, status.code());
            }
            Ok(ExitCode::from(status.code() as u8))
        }
        Command::Seed { write } => {
            let acl = AclHwInfo::load(config.hardware.acl_path());
            // Seeding failures are logged, never fatal to the daemon
            match init_system_defaults(&mut store, &acl) {
                Ok(status) => info!(?status, "Startup seeding finished"),
                Err(e) => {
                    error!("Startup seeding failed: {}", e);
                    return Ok(ExitCode::SUCCESS);
                }
            }

            if write {
                store
                    .save(&db_path)
                    .with_context(|| format!("writing database snapshot {}", db_path.display()))?;
                info!("Wrote {}", db_path.display());
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
