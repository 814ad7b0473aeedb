//! `show version` and `show version detail`.

use tracing::error;

use ops_sysd_common::tables::keys;
use ops_sysd_common::{PackageInfo, RowStore, SmapExt};

use crate::vty::{CmdStatus, Vty};
use crate::vty_line;

/// OS name reported when `software_info` has no `os_name` key
pub const DEFAULT_OS_NAME: &str = "OpenSwitch";

/// Substituted for empty package fields
pub const NOT_AVAILABLE: &str = "Not Available";

const PACKAGE_FIELD_WIDTH: usize = 128;

/// Switch software version, empty when unknown.
pub fn switch_version<S: RowStore + ?Sized>(store: &S) -> String {
    match store.first_system() {
        Some(system) => system.switch_version.clone().unwrap_or_default(),
        None => {
            error!("unable to retrieve any system table rows");
            String::new()
        }
    }
}

/// Operating system name from `System.software_info`.
pub fn os_name<S: RowStore + ?Sized>(store: &S) -> String {
    store
        .first_system()
        .and_then(|system| system.software_info.get_field(keys::OS_NAME))
        .unwrap_or(DEFAULT_OS_NAME)
        .to_string()
}

fn or_not_available(value: &str) -> String {
    if value.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

/// Package rows in store order, with empty fields replaced by
/// [`NOT_AVAILABLE`].
///
/// The iterator is lazy and single-pass; call again to restart.
pub fn list_packages<S: RowStore + ?Sized>(store: &S) -> impl Iterator<Item = PackageInfo> + '_ {
    store.package_info().map(|row| PackageInfo {
        uuid: row.uuid,
        name: row.name.clone(),
        version: or_not_available(&row.version),
        src_type: or_not_available(&row.src_type),
        src_url: or_not_available(&row.src_url),
    })
}

/// `show version` command handler.
pub fn show_version<S: RowStore + ?Sized>(store: &S, vty: &mut Vty) -> CmdStatus {
    vty_line!(vty, "{} {}", os_name(store), switch_version(store));
    CmdStatus::Success
}

/// `show version detail` command handler.
pub fn show_version_detail<S: RowStore + ?Sized>(store: &S, vty: &mut Vty) -> CmdStatus {
    const W: usize = PACKAGE_FIELD_WIDTH;

    for package in list_packages(store) {
        vty_line!(vty, "PACKAGE     : {:<W$}", package.name);
        vty_line!(vty, "VERSION     : {:<W$}", package.version);
        vty_line!(vty, "SOURCE TYPE : {:<W$}", package.src_type);
        vty_line!(vty, "SOURCE URL  : {:<W$}", package.src_url);
        vty_line!(vty);
    }
    CmdStatus::Success
}

#[cfg(test)]
mod tests {
    use super::*;
    use ops_sysd_common::{smap, MemoryStore, System};
    use pretty_assertions::assert_eq;

    fn package(name: &str, version: &str, src_type: &str, src_url: &str) -> PackageInfo {
        PackageInfo {
            name: name.to_string(),
            version: version.to_string(),
            src_type: src_type.to_string(),
            src_url: src_url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_switch_version_without_system_row() {
        let store = MemoryStore::new();
        assert_eq!(switch_version(&store), "");
    }

    #[test]
    fn test_switch_version_without_value() {
        let mut store = MemoryStore::new();
        store.add_system(System::default());
        assert_eq!(switch_version(&store), "");
    }

    #[test]
    fn test_os_name_default_and_stored() {
        let mut store = MemoryStore::new();
        assert_eq!(os_name(&store), DEFAULT_OS_NAME);

        store.add_system(System {
            software_info: smap! { "build_date" => "2016-05-01" },
            ..Default::default()
        });
        assert_eq!(os_name(&store), "OpenSwitch");

        let mut store = MemoryStore::new();
        store.add_system(System {
            software_info: smap! { "os_name" => "Linux OpenSwitch" },
            ..Default::default()
        });
        assert_eq!(os_name(&store), "Linux OpenSwitch");
    }

    #[test]
    fn test_list_packages_substitutes_empty_fields() {
        let mut store = MemoryStore::new();
        store.add_package_info(package("ops-sysd", "1.0.0", "git", ""));
        store.add_package_info(package("ops-cli", "", "", ""));

        let packages: Vec<_> = list_packages(&store).collect();
        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].version, "1.0.0");
        assert_eq!(packages[0].src_url, NOT_AVAILABLE);
        assert_eq!(packages[1].version, NOT_AVAILABLE);
        assert_eq!(packages[1].src_type, NOT_AVAILABLE);

        // Restartable
        assert_eq!(list_packages(&store).count(), 2);
    }

    #[test]
    fn test_show_version() {
        let mut store = MemoryStore::new();
        store.add_system(System {
            switch_version: Some("0.4.0 (Build: genericx86-64-ops-0.4.0)".to_string()),
            ..Default::default()
        });

        let mut vty = Vty::new();
        assert_eq!(show_version(&store, &mut vty), CmdStatus::Success);
        assert_eq!(
            vty.as_str(),
            "OpenSwitch 0.4.0 (Build: genericx86-64-ops-0.4.0)\n"
        );
    }

    #[test]
    fn test_show_version_detail() {
        let mut store = MemoryStore::new();
        store.add_package_info(package(
            "ops-sysd",
            "",
            "git",
            "https://git.openswitch.net/openswitch/ops-sysd",
        ));

        let mut vty = Vty::new();
        assert_eq!(show_version_detail(&store, &mut vty), CmdStatus::Success);

        let expected = format!(
            "PACKAGE     : {:<128}\nVERSION     : {:<128}\nSOURCE TYPE : {:<128}\nSOURCE URL  : {:<128}\n\n",
            "ops-sysd",
            "Not Available",
            "git",
            "https://git.openswitch.net/openswitch/ops-sysd"
        );
        assert_eq!(vty.as_str(), expected);
    }

    #[test]
    fn test_show_version_detail_without_packages() {
        let store = MemoryStore::new();
        let mut vty = Vty::new();
        assert_eq!(show_version_detail(&store, &mut vty), CmdStatus::Success);
        assert!(vty.as_str().is_empty());
    }
}
