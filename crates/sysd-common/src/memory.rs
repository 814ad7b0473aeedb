//! In-memory row store.
//!
//! Reference implementation of the store traits, used by the tests and by
//! the `ops-sysd` binary when it operates on a JSON database snapshot.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SysdError, SysdResult};
use crate::rows::{
    Fan, Led, PackageInfo, PowerSupply, QosCosMapEntry, QosDscpMapEntry, RowUuid, Subsystem,
    System, TempSensor,
};
use crate::store::{
    CommitStatus, RowIter, RowStore, SchemaSubscription, SystemColumn, Transaction,
    TransactionalStore,
};
use crate::tables::{
    QOS_COS_MAP_ENTRY_TABLE_NAME, QOS_DSCP_MAP_ENTRY_TABLE_NAME, SYSTEM_TABLE_NAME,
};

/// Table contents held in memory, in insertion order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryStore {
    subsystem: Vec<Subsystem>,
    system: Vec<System>,
    fan: Vec<Fan>,
    led: Vec<Led>,
    power_supply: Vec<PowerSupply>,
    temp_sensor: Vec<TempSensor>,
    package_info: Vec<PackageInfo>,
    qos_cos_map_entry: Vec<QosCosMapEntry>,
    qos_dscp_map_entry: Vec<QosDscpMapEntry>,

    /// Tables whose rows are tracked
    #[serde(skip)]
    subscribed_tables: BTreeSet<String>,

    /// Table -> subscribed columns
    #[serde(skip)]
    subscribed_columns: BTreeMap<String, BTreeSet<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a store from a JSON snapshot string
    pub fn from_json_str(json: &str) -> SysdResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a store from a JSON snapshot file
    pub fn load(path: &Path) -> SysdResult<Self> {
        let contents =
            fs::read_to_string(path).map_err(|e| SysdError::io(path.display().to_string(), e))?;
        let store = Self::from_json_str(&contents)?;
        debug!("Loaded row store snapshot from {}", path.display());
        Ok(store)
    }

    /// Writes the store to a JSON snapshot file
    pub fn save(&self, path: &Path) -> SysdResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| SysdError::io(path.display().to_string(), e))?;
        debug!("Saved row store snapshot to {}", path.display());
        Ok(())
    }

    pub fn add_subsystem(&mut self, row: Subsystem) -> RowUuid {
        let uuid = row.uuid;
        self.subsystem.push(row);
        uuid
    }

    pub fn add_system(&mut self, row: System) -> RowUuid {
        let uuid = row.uuid;
        self.system.push(row);
        uuid
    }

    pub fn add_fan(&mut self, row: Fan) -> RowUuid {
        let uuid = row.uuid;
        self.fan.push(row);
        uuid
    }

    pub fn add_led(&mut self, row: Led) -> RowUuid {
        let uuid = row.uuid;
        self.led.push(row);
        uuid
    }

    pub fn add_power_supply(&mut self, row: PowerSupply) -> RowUuid {
        let uuid = row.uuid;
        self.power_supply.push(row);
        uuid
    }

    pub fn add_temp_sensor(&mut self, row: TempSensor) -> RowUuid {
        let uuid = row.uuid;
        self.temp_sensor.push(row);
        uuid
    }

    pub fn add_package_info(&mut self, row: PackageInfo) -> RowUuid {
        let uuid = row.uuid;
        self.package_info.push(row);
        uuid
    }

    /// Looks up a COS map entry row by reference
    pub fn cos_map_entry(&self, uuid: RowUuid) -> Option<&QosCosMapEntry> {
        self.qos_cos_map_entry.iter().find(|row| row.uuid == uuid)
    }

    /// Looks up a DSCP map entry row by reference
    pub fn dscp_map_entry(&self, uuid: RowUuid) -> Option<&QosDscpMapEntry> {
        self.qos_dscp_map_entry.iter().find(|row| row.uuid == uuid)
    }

    /// Returns true if `table` itself was subscribed. Column
    /// subscriptions alone do not count.
    pub fn is_table_subscribed(&self, table: &str) -> bool {
        self.subscribed_tables.contains(table)
    }

    /// Returns true if `table.column` was subscribed
    pub fn is_column_subscribed(&self, table: &str, column: &str) -> bool {
        self.subscribed_columns
            .get(table)
            .map(|cols| cols.contains(column))
            .unwrap_or(false)
    }

    fn system_mut(&mut self, uuid: RowUuid) -> Option<&mut System> {
        self.system.iter_mut().find(|row| row.uuid == uuid)
    }

    /// Drops QoS map entry rows no System row references any more
    fn collect_orphaned_map_entries(&mut self) {
        let cos: BTreeSet<RowUuid> = self
            .system
            .iter()
            .flat_map(|row| row.qos_cos_map_entries.iter().copied())
            .collect();
        let dscp: BTreeSet<RowUuid> = self
            .system
            .iter()
            .flat_map(|row| row.qos_dscp_map_entries.iter().copied())
            .collect();

        let before = self.qos_cos_map_entry.len();
        self.qos_cos_map_entry.retain(|row| cos.contains(&row.uuid));
        let removed = before - self.qos_cos_map_entry.len();
        if removed > 0 {
            debug!("Collected {} orphaned {} rows", removed, QOS_COS_MAP_ENTRY_TABLE_NAME);
        }

        let before = self.qos_dscp_map_entry.len();
        self.qos_dscp_map_entry.retain(|row| dscp.contains(&row.uuid));
        let removed = before - self.qos_dscp_map_entry.len();
        if removed > 0 {
            debug!("Collected {} orphaned {} rows", removed, QOS_DSCP_MAP_ENTRY_TABLE_NAME);
        }
    }
}

impl RowStore for MemoryStore {
    fn subsystems(&self) -> RowIter<'_, Subsystem> {
        Box::new(self.subsystem.iter())
    }

    fn systems(&self) -> RowIter<'_, System> {
        Box::new(self.system.iter())
    }

    fn fans(&self) -> RowIter<'_, Fan> {
        Box::new(self.fan.iter())
    }

    fn leds(&self) -> RowIter<'_, Led> {
        Box::new(self.led.iter())
    }

    fn power_supplies(&self) -> RowIter<'_, PowerSupply> {
        Box::new(self.power_supply.iter())
    }

    fn temp_sensors(&self) -> RowIter<'_, TempSensor> {
        Box::new(self.temp_sensor.iter())
    }

    fn package_info(&self) -> RowIter<'_, PackageInfo> {
        Box::new(self.package_info.iter())
    }

    fn qos_cos_map_entries(&self) -> RowIter<'_, QosCosMapEntry> {
        Box::new(self.qos_cos_map_entry.iter())
    }

    fn qos_dscp_map_entries(&self) -> RowIter<'_, QosDscpMapEntry> {
        Box::new(self.qos_dscp_map_entry.iter())
    }
}

impl SchemaSubscription for MemoryStore {
    fn add_table(&mut self, table: &'static str) {
        self.subscribed_tables.insert(table.to_string());
    }

    fn add_column(&mut self, table: &'static str, column: &'static str) {
        self.subscribed_columns
            .entry(table.to_string())
            .or_default()
            .insert(column.to_string());
    }
}

/// A staged write
#[derive(Debug, Clone)]
enum StagedOp {
    InsertCos(QosCosMapEntry),
    InsertDscp(QosDscpMapEntry),
    SetSystem(RowUuid, SystemColumn),
}

/// Write transaction on a [`MemoryStore`]
pub struct MemoryTxn<'a> {
    store: &'a mut MemoryStore,
    staged: Vec<StagedOp>,
}

impl MemoryTxn<'_> {
    /// Number of staged writes
    pub fn pending(&self) -> usize {
        self.staged.len()
    }
}

impl Transaction for MemoryTxn<'_> {
    fn insert_cos_map_entry(&mut self, mut entry: QosCosMapEntry) -> SysdResult<RowUuid> {
        entry.uuid = RowUuid::new();
        let uuid = entry.uuid;
        self.staged.push(StagedOp::InsertCos(entry));
        Ok(uuid)
    }

    fn insert_dscp_map_entry(&mut self, mut entry: QosDscpMapEntry) -> SysdResult<RowUuid> {
        entry.uuid = RowUuid::new();
        let uuid = entry.uuid;
        self.staged.push(StagedOp::InsertDscp(entry));
        Ok(uuid)
    }

    fn set_system_column(&mut self, system: RowUuid, column: SystemColumn) -> SysdResult<()> {
        self.staged.push(StagedOp::SetSystem(system, column));
        Ok(())
    }

    fn commit(self) -> SysdResult<CommitStatus> {
        let MemoryTxn { store, staged } = self;

        if staged.is_empty() {
            return Ok(CommitStatus::Unchanged);
        }

        // Validate everything before touching the tables so a failed commit
        // leaves the store unchanged.
        for op in &staged {
            if let StagedOp::SetSystem(uuid, column) = op {
                if !store.system.iter().any(|row| row.uuid == *uuid) {
                    return Err(SysdError::database(
                        "commit",
                        format!(
                            "{} row {} referenced by {} no longer exists",
                            SYSTEM_TABLE_NAME,
                            uuid,
                            column.column_name()
                        ),
                    ));
                }
            }
        }

        let count = staged.len();
        let mut map_refs_changed = false;
        for op in staged {
            match op {
                StagedOp::InsertCos(entry) => store.qos_cos_map_entry.push(entry),
                StagedOp::InsertDscp(entry) => store.qos_dscp_map_entry.push(entry),
                StagedOp::SetSystem(uuid, column) => {
                    let row = store.system_mut(uuid).ok_or_else(|| {
                        SysdError::internal(format!("System row {} vanished during commit", uuid))
                    })?;
                    match column {
                        SystemColumn::QosConfig(map) => row.qos_config = map,
                        SystemColumn::OtherConfig(map) => row.other_config = map,
                        SystemColumn::QosCosMapEntries(refs) => {
                            row.qos_cos_map_entries = refs;
                            map_refs_changed = true;
                        }
                        SystemColumn::QosDscpMapEntries(refs) => {
                            row.qos_dscp_map_entries = refs;
                            map_refs_changed = true;
                        }
                    }
                }
            }
        }

        // Entries replaced by a new reference list are unreachable now
        if map_refs_changed {
            store.collect_orphaned_map_entries();
        }

        debug!("Committed {} staged writes", count);
        Ok(CommitStatus::Success)
    }

    fn abort(self) {
        debug!("Aborted transaction with {} staged writes", self.pending());
    }
}

impl TransactionalStore for MemoryStore {
    type Txn<'a> = MemoryTxn<'a>;

    fn begin(&mut self) -> MemoryTxn<'_> {
        MemoryTxn {
            store: self,
            staged: Vec::new(),
        }
    }
}
