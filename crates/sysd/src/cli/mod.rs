//! CLI surface: command table, registry and init hooks.
//!
//! The host shell calls [`cli_pre_init`] before it connects to the
//! database so the tables the commands read get subscribed, then
//! [`cli_post_init`] to install the commands into its command tree.

pub mod system;
pub mod version;

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use ops_sysd_common::tables::{self, columns};
use ops_sysd_common::{RowStore, SchemaSubscription};

use crate::vty::{CmdStatus, Vty};

pub const SHOW_STR: &str = "Show running system information";
pub const SYS_STR: &str = "System information";
pub const SHOW_VERSION_STR: &str = "Displays switch version";
pub const SHOW_VERSION_DETAIL_STR: &str = "Show package information";

/// Command tree node a command is installed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CliNode {
    /// Privileged exec mode
    Enable,
    /// Unprivileged view mode
    View,
}

impl fmt::Display for CliNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliNode::Enable => write!(f, "enable"),
            CliNode::View => write!(f, "view"),
        }
    }
}

/// Command handler signature
pub type CommandHandler<S> = fn(&S, &mut Vty) -> CmdStatus;

/// One installable command
pub struct CliCommand<S: ?Sized> {
    /// Space separated keyword syntax, e.g. `show version detail`
    pub syntax: &'static str,
    /// One help string per keyword
    pub help: &'static [&'static str],
    pub handler: CommandHandler<S>,
}

// Derives would require `S: Clone`
impl<S: ?Sized> Clone for CliCommand<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for CliCommand<S> {}

impl<S: ?Sized> fmt::Debug for CliCommand<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliCommand")
            .field("syntax", &self.syntax)
            .field("help", &self.help)
            .finish()
    }
}

/// Host command tree the commands are installed into
pub trait CommandInstaller<S: ?Sized> {
    fn install_element(&mut self, node: CliNode, command: CliCommand<S>);
}

fn normalize(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Command tree keyed by node and normalized syntax
pub struct CommandRegistry<S: ?Sized> {
    commands: HashMap<CliNode, Vec<CliCommand<S>>>,
}

impl<S: ?Sized> CommandRegistry<S> {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Commands installed on `node`, in install order
    pub fn commands(&self, node: CliNode) -> &[CliCommand<S>] {
        self.commands.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Dispatches `line` to the command installed on `node` with the same
    /// keyword sequence.
    pub fn execute(&self, node: CliNode, line: &str, store: &S, vty: &mut Vty) -> CmdStatus {
        let line = normalize(line);
        match self.commands(node).iter().find(|cmd| cmd.syntax == line) {
            Some(cmd) => (cmd.handler)(store, vty),
            None => {
                debug!(node = %node, line = %line, "no matching command");
                CmdStatus::ErrNoMatch
            }
        }
    }
}

impl<S: ?Sized> Default for CommandRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized> CommandInstaller<S> for CommandRegistry<S> {
    fn install_element(&mut self, node: CliNode, command: CliCommand<S>) {
        let list = self.commands.entry(node).or_default();
        let syntax = normalize(command.syntax);
        // Re-installing a syntax replaces the previous handler
        list.retain(|cmd| cmd.syntax != syntax);
        list.push(command);
    }
}

/// `show system`, `show version` and `show version detail`
pub fn system_commands<S: RowStore>() -> [CliCommand<S>; 3] {
    [
        CliCommand {
            syntax: "show system",
            help: &[SHOW_STR, SYS_STR],
            handler: system::cli_system_get_all::<S>,
        },
        CliCommand {
            syntax: "show version",
            help: &[SHOW_STR, SHOW_VERSION_STR],
            handler: version::show_version::<S>,
        },
        CliCommand {
            syntax: "show version detail",
            help: &[SHOW_STR, SHOW_VERSION_STR, SHOW_VERSION_DETAIL_STR],
            handler: version::show_version_detail::<S>,
        },
    ]
}

/// Subscribes the tables and columns the commands read.
pub fn cli_pre_init(subscription: &mut (impl SchemaSubscription + ?Sized)) {
    use columns::{fan, led, package_info, power_supply, subsystem, system, temp_sensor};

    subscription.add_table(tables::FAN_TABLE_NAME);
    subscription.add_table(tables::LED_TABLE_NAME);
    subscription.add_table(tables::SUBSYSTEM_TABLE_NAME);
    subscription.add_table(tables::POWER_SUPPLY_TABLE_NAME);
    subscription.add_table(tables::TEMP_SENSOR_TABLE_NAME);

    for column in [
        led::ID,
        led::STATE,
        led::STATUS,
        led::OTHER_CONFIG,
        led::EXTERNAL_IDS,
    ] {
        subscription.add_column(tables::LED_TABLE_NAME, column);
    }

    for column in [
        subsystem::INTERFACES,
        subsystem::LEDS,
        subsystem::FANS,
        subsystem::POWER_SUPPLIES,
        subsystem::TEMP_SENSORS,
        subsystem::ASSET_TAG_NUMBER,
        subsystem::NAME,
        subsystem::TYPE,
        subsystem::HW_DESC_DIR,
        subsystem::OTHER_INFO,
        subsystem::OTHER_CONFIG,
        subsystem::EXTERNAL_IDS,
    ] {
        subscription.add_column(tables::SUBSYSTEM_TABLE_NAME, column);
    }

    for column in [
        fan::STATUS,
        fan::DIRECTION,
        fan::NAME,
        fan::RPM,
        fan::OTHER_CONFIG,
        fan::HW_CONFIG,
        fan::EXTERNAL_IDS,
        fan::SPEED,
    ] {
        subscription.add_column(tables::FAN_TABLE_NAME, column);
    }

    subscription.add_column(tables::POWER_SUPPLY_TABLE_NAME, power_supply::NAME);
    subscription.add_column(tables::POWER_SUPPLY_TABLE_NAME, power_supply::STATUS);

    for column in [temp_sensor::NAME, temp_sensor::LOCATION, temp_sensor::TEMPERATURE] {
        subscription.add_column(tables::TEMP_SENSOR_TABLE_NAME, column);
    }

    // show version
    subscription.add_table(tables::SYSTEM_TABLE_NAME);
    subscription.add_column(tables::SYSTEM_TABLE_NAME, system::SOFTWARE_INFO);
    subscription.add_column(tables::SYSTEM_TABLE_NAME, system::SWITCH_VERSION);

    // show version detail
    subscription.add_table(tables::PACKAGE_INFO_TABLE_NAME);
    for column in [
        package_info::NAME,
        package_info::VERSION,
        package_info::SRC_TYPE,
        package_info::SRC_URL,
    ] {
        subscription.add_column(tables::PACKAGE_INFO_TABLE_NAME, column);
    }
}

/// Installs the system commands on the enable and view nodes.
pub fn cli_post_init<S: RowStore>(installer: &mut (impl CommandInstaller<S> + ?Sized)) {
    for command in system_commands::<S>() {
        installer.install_element(CliNode::Enable, command);
        installer.install_element(CliNode::View, command);
    }
}
