//! ops-sysd CLI helpers and startup seeding.
//!
//! - [`cli`]: `show system`, `show version`, `show version detail`, the
//!   command registry and the pre/post init hooks
//! - [`init`]: QoS defaults and ACL limits written to the System row at
//!   startup
//! - [`vty`]: command output sink and status codes
//! - [`config`]: TOML daemon configuration
//! - [`logging`]: tracing subscriber setup

pub mod cli;
pub mod config;
pub mod init;
pub mod logging;
pub mod vty;

pub use cli::system::{cli_system_get_all, generate_system_report, system_report};
pub use cli::version::{list_packages, os_name, show_version, show_version_detail, switch_version};
pub use cli::{
    cli_post_init, cli_pre_init, CliCommand, CliNode, CommandInstaller, CommandRegistry,
};
pub use config::{NewlineStyle, SysdConfig, DEFAULT_CONFIG_PATH};
pub use init::{init_system_defaults, AclHwInfo};
pub use logging::{init_logging, LogHandle, BOOTSTRAP_LOG_LEVEL};
pub use vty::{CmdStatus, Vty};
