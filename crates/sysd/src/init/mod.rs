//! Startup seeding of System row defaults.
//!
//! All seeders stage their writes into one transaction so the defaults
//! appear together or not at all.

pub mod acl;
pub mod qos;

use tracing::{error, info, instrument};

use ops_sysd_common::tables::SYSTEM_TABLE_NAME;
use ops_sysd_common::{
    CommitStatus, RowStore, SysdError, SysdResult, System, Transaction, TransactionalStore,
};

pub use acl::{seed_acl_limits, AclHwInfo};
pub use qos::{seed_cos_map, seed_dscp_map, seed_trust};

fn seed_all<T: Transaction>(txn: &mut T, system: &System, acl: &AclHwInfo) -> SysdResult<()> {
    seed_trust(txn, system)?;
    seed_cos_map(txn, system)?;
    seed_dscp_map(txn, system)?;
    seed_acl_limits(txn, system, acl)?;
    Ok(())
}

/// Seeds QoS defaults and ACL limits on the first System row.
#[instrument(skip_all)]
pub fn init_system_defaults<S: TransactionalStore>(
    store: &mut S,
    acl: &AclHwInfo,
) -> SysdResult<CommitStatus> {
    let system = store
        .first_system()
        .cloned()
        .ok_or_else(|| SysdError::row_not_found(SYSTEM_TABLE_NAME))?;

    let mut txn = store.begin();
    if let Err(e) = seed_all(&mut txn, &system, acl) {
        error!("Seeding system defaults failed: {}", e);
        txn.abort();
        return Err(e);
    }

    let status = txn.commit()?;
    info!(system = %system.uuid, ?status, "System defaults seeded");
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ops_sysd_common::{smap, MemoryStore};

    #[test]
    fn test_init_without_system_row() {
        let mut store = MemoryStore::new();
        let err = init_system_defaults(&mut store, &AclHwInfo::default()).unwrap_err();
        assert!(matches!(err, SysdError::RowNotFound { .. }));
    }

    #[test]
    fn test_init_seeds_everything() {
        let mut store = MemoryStore::new();
        store.add_system(System {
            other_config: smap! { "stp_mode" => "rpvst" },
            ..Default::default()
        });
        let acl = AclHwInfo {
            max_acls: Some("512".to_string()),
            max_aces: Some("4096".to_string()),
            max_aces_per_acl: Some("512".to_string()),
        };

        let status = init_system_defaults(&mut store, &acl).unwrap();
        assert_eq!(status, CommitStatus::Success);

        let system = store.first_system().unwrap();
        assert_eq!(system.qos_config.get("qos_trust").map(String::as_str), Some("none"));
        assert_eq!(system.qos_cos_map_entries.len(), 8);
        assert_eq!(system.qos_dscp_map_entries.len(), 64);
        assert_eq!(system.other_config.len(), 4);
        assert_eq!(store.qos_cos_map_entries().count(), 8);
        assert_eq!(store.qos_dscp_map_entries().count(), 64);
    }

    #[test]
    fn test_init_without_acl_limits_keeps_other_config() {
        let mut store = MemoryStore::new();
        store.add_system(System {
            other_config: smap! { "stp_mode" => "rpvst" },
            ..Default::default()
        });

        init_system_defaults(&mut store, &AclHwInfo::default()).unwrap();
        assert_eq!(
            store.first_system().unwrap().other_config,
            smap! { "stp_mode" => "rpvst" }
        );
    }
}
