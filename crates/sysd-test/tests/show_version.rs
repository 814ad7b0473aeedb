//! `show version` / `show version detail` through the command registry

use ops_sysd::cli::version::NOT_AVAILABLE;
use ops_sysd::{
    cli_post_init, cli_pre_init, list_packages, os_name, CliNode, CmdStatus, CommandRegistry, Vty,
};
use ops_sysd_common::MemoryStore;
use ops_sysd_test::{platform_fixtures, SwitchBuilder};
use pretty_assertions::assert_eq;

fn run(store: &MemoryStore, node: CliNode, line: &str) -> (CmdStatus, String) {
    let mut registry = CommandRegistry::new();
    cli_post_init(&mut registry);
    let mut vty = Vty::new();
    let status = registry.execute(node, line, store, &mut vty);
    (status, vty.into_string())
}

#[test]
fn test_show_version_on_both_nodes() {
    let store = SwitchBuilder::new().switch_version("0.4.0").build();

    for node in [CliNode::Enable, CliNode::View] {
        let (status, text) = run(&store, node, "show version");
        assert_eq!(status, CmdStatus::Success);
        assert_eq!(text, "OpenSwitch 0.4.0\n");
    }
}

#[test]
fn test_show_version_custom_os_name() {
    let store = SwitchBuilder::new()
        .os_name("Halon")
        .switch_version("1.2.3")
        .build();
    assert_eq!(os_name(&store), "Halon");

    let (_, text) = run(&store, CliNode::View, "show version");
    assert_eq!(text, "Halon 1.2.3\n");
}

#[test]
fn test_show_version_without_system_row() {
    let store = SwitchBuilder::new().without_system().build();
    let (status, text) = run(&store, CliNode::View, "show version");
    assert_eq!(status, CmdStatus::Success);
    assert_eq!(text, "OpenSwitch \n");
}

#[test]
fn test_show_version_detail() {
    let store = platform_fixtures::as5712().build();
    let (status, text) = run(&store, CliNode::Enable, "show version detail");
    assert_eq!(status, CmdStatus::Success);

    let blocks: Vec<&str> = text.split("\n\n").filter(|b| !b.is_empty()).collect();
    assert_eq!(blocks.len(), 2);

    let trimmed: Vec<&str> = blocks[1].lines().map(str::trim_end).collect();
    assert_eq!(
        trimmed,
        vec![
            "PACKAGE     : ops-cli",
            "VERSION     : Not Available",
            "SOURCE TYPE : Not Available",
            "SOURCE URL  : Not Available",
        ]
    );
    assert!(blocks[0]
        .lines()
        .all(|line| line.len() == "PACKAGE     : ".len() + 128));
}

#[test]
fn test_list_packages_matches_detail_output() {
    let store = platform_fixtures::as5712().build();
    let packages: Vec<_> = list_packages(&store).collect();

    assert_eq!(packages.len(), 2);
    assert_eq!(packages[0].version, "a4f2b6d");
    assert!(packages[1..].iter().all(|p| p.src_url == NOT_AVAILABLE));
}

#[test]
fn test_unknown_command_reports_no_match() {
    let store = SwitchBuilder::new().build();
    let (status, text) = run(&store, CliNode::View, "show versions");
    assert_eq!(status, CmdStatus::ErrNoMatch);
    assert_eq!(status.code(), 2);
    assert!(text.is_empty());
}

#[test]
fn test_pre_init_subscriptions_on_store() {
    let mut store = SwitchBuilder::new().build();
    cli_pre_init(&mut store);
    assert!(store.is_table_subscribed("Package_Info"));
    assert!(store.is_table_subscribed("System"));
    assert!(store.is_column_subscribed("System", "software_info"));
    assert!(store.is_column_subscribed("Power_supply", "status"));
}
