//! Startup seeding against JSON snapshots and failing stores

use std::fs;

use ops_sysd::init::acl::AclHwInfo;
use ops_sysd::init::qos::{QOS_COS_MAP_ENTRY_COUNT, QOS_DSCP_MAP_ENTRY_COUNT};
use ops_sysd::init_system_defaults;
use ops_sysd_common::{
    smap, CommitStatus, Fan, Led, MemoryStore, MemoryTxn, PackageInfo, PowerSupply,
    QosCosMapEntry, QosDscpMapEntry, RowIter, RowStore, RowUuid, Subsystem, SysdError,
    SysdResult, System, SystemColumn, TempSensor, Transaction, TransactionalStore,
};
use ops_sysd_test::{assert_seeded, system_row, SwitchBuilder};
use pretty_assertions::assert_eq;

const ACL_YAML: &str = "\
acl_info:
  max_acls: 512
  max_aces: 4096
  max_aces_per_acl: \"512\"
";

#[test]
fn test_seed_snapshot_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("db.json");
    let acl_path = dir.path().join("acl.yaml");
    fs::write(&acl_path, ACL_YAML).unwrap();

    SwitchBuilder::new()
        .qos_config(smap! { "qos_trust" => "dscp", "queue_profile" => "default" })
        .other_config(smap! { "stp_mode" => "mstp" })
        .build()
        .save(&db)
        .unwrap();

    let mut store = MemoryStore::load(&db).unwrap();
    let acl = AclHwInfo::load(&acl_path);
    assert_seeded(init_system_defaults(&mut store, &acl).unwrap());
    store.save(&db).unwrap();

    let store = MemoryStore::load(&db).unwrap();
    let system = system_row(&store).unwrap();

    assert_eq!(
        system.qos_config,
        smap! { "qos_trust" => "none", "queue_profile" => "default" }
    );
    assert_eq!(
        system.other_config,
        smap! {
            "max_acls" => "512",
            "max_aces" => "4096",
            "max_aces_per_acl" => "512",
            "stp_mode" => "mstp",
        }
    );
    assert_eq!(system.qos_cos_map_entries.len(), QOS_COS_MAP_ENTRY_COUNT);
    assert_eq!(system.qos_dscp_map_entries.len(), QOS_DSCP_MAP_ENTRY_COUNT);

    // Every reference resolves to a stored entry
    for uuid in &system.qos_cos_map_entries {
        assert!(store.cos_map_entry(*uuid).is_some());
    }
    for uuid in &system.qos_dscp_map_entries {
        let entry = store.dscp_map_entry(*uuid).unwrap();
        assert!(entry.priority_code_point);
    }
}

#[test]
fn test_repeated_seeding_keeps_one_map_set() {
    let mut store = SwitchBuilder::new().build();
    let acl = AclHwInfo::default();

    for _ in 0..3 {
        init_system_defaults(&mut store, &acl).unwrap();
    }

    assert_eq!(store.qos_cos_map_entries().count(), QOS_COS_MAP_ENTRY_COUNT);
    assert_eq!(store.qos_dscp_map_entries().count(), QOS_DSCP_MAP_ENTRY_COUNT);

    let system = system_row(&store).unwrap();
    assert!(system
        .qos_dscp_map_entries
        .iter()
        .all(|uuid| store.dscp_map_entry(*uuid).is_some()));
}

#[test]
fn test_seed_with_missing_acl_file() {
    let mut store = SwitchBuilder::new()
        .other_config(smap! { "stp_mode" => "mstp" })
        .build();

    let acl = AclHwInfo::load("/nonexistent/hwdesc/acl.yaml");
    init_system_defaults(&mut store, &acl).unwrap();

    let system = system_row(&store).unwrap();
    assert_eq!(system.other_config, smap! { "stp_mode" => "mstp" });
    assert_eq!(system.qos_cos_map_entries.len(), QOS_COS_MAP_ENTRY_COUNT);
}

#[test]
fn test_seed_without_system_row() {
    let mut store = SwitchBuilder::new().without_system().build();
    let err = init_system_defaults(&mut store, &AclHwInfo::default()).unwrap_err();
    assert!(matches!(err, SysdError::RowNotFound { .. }));
    assert_eq!(store.qos_cos_map_entries().count(), 0);
}

/// Store whose transactions reject DSCP inserts
struct FlakyStore {
    inner: MemoryStore,
    aborts: usize,
}

struct FlakyTxn<'a> {
    inner: MemoryTxn<'a>,
    aborts: &'a mut usize,
}

impl RowStore for FlakyStore {
    fn subsystems(&self) -> RowIter<'_, Subsystem> {
        self.inner.subsystems()
    }
    fn systems(&self) -> RowIter<'_, System> {
        self.inner.systems()
    }
    fn fans(&self) -> RowIter<'_, Fan> {
        self.inner.fans()
    }
    fn leds(&self) -> RowIter<'_, Led> {
        self.inner.leds()
    }
    fn power_supplies(&self) -> RowIter<'_, PowerSupply> {
        self.inner.power_supplies()
    }
    fn temp_sensors(&self) -> RowIter<'_, TempSensor> {
        self.inner.temp_sensors()
    }
    fn package_info(&self) -> RowIter<'_, PackageInfo> {
        self.inner.package_info()
    }
    fn qos_cos_map_entries(&self) -> RowIter<'_, QosCosMapEntry> {
        self.inner.qos_cos_map_entries()
    }
    fn qos_dscp_map_entries(&self) -> RowIter<'_, QosDscpMapEntry> {
        self.inner.qos_dscp_map_entries()
    }
}

impl Transaction for FlakyTxn<'_> {
    fn insert_cos_map_entry(&mut self, entry: QosCosMapEntry) -> SysdResult<RowUuid> {
        self.inner.insert_cos_map_entry(entry)
    }

    fn insert_dscp_map_entry(&mut self, _entry: QosDscpMapEntry) -> SysdResult<RowUuid> {
        Err(SysdError::database("insert", "QoS_DSCP_Map_Entry is read-only"))
    }

    fn set_system_column(&mut self, system: RowUuid, column: SystemColumn) -> SysdResult<()> {
        self.inner.set_system_column(system, column)
    }

    fn commit(self) -> SysdResult<CommitStatus> {
        self.inner.commit()
    }

    fn abort(self) {
        *self.aborts += 1;
        self.inner.abort();
    }
}

impl TransactionalStore for FlakyStore {
    type Txn<'a> = FlakyTxn<'a>;

    fn begin(&mut self) -> FlakyTxn<'_> {
        FlakyTxn {
            inner: self.inner.begin(),
            aborts: &mut self.aborts,
        }
    }
}

#[test]
fn test_failed_seeder_aborts_whole_transaction() {
    let mut store = FlakyStore {
        inner: SwitchBuilder::new()
            .qos_config(smap! { "qos_trust" => "dscp" })
            .build(),
        aborts: 0,
    };

    let err = init_system_defaults(&mut store, &AclHwInfo::default()).unwrap_err();
    assert!(matches!(err, SysdError::Database { .. }));
    assert_eq!(store.aborts, 1);

    // Trust and COS writes staged before the failure never landed
    let system = system_row(&store.inner).unwrap();
    assert_eq!(system.qos_config, smap! { "qos_trust" => "dscp" });
    assert!(system.qos_cos_map_entries.is_empty());
    assert_eq!(store.inner.qos_cos_map_entries().count(), 0);
}
