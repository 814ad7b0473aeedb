//! Row store client abstractions.
//!
//! The configuration database is an external collaborator. sysd only needs
//! three capabilities from it, each expressed as a trait:
//!
//! - [`RowStore`]: lazy per-table iteration and "first row" lookups
//! - [`TransactionalStore`] / [`Transaction`]: one atomic write transaction
//! - [`SchemaSubscription`]: table/column registration done at pre-init
//!
//! Every entry point receives the store explicitly; there is no process-wide
//! handle.

use crate::error::SysdResult;
use crate::rows::{
    Fan, Led, PackageInfo, PowerSupply, QosCosMapEntry, QosDscpMapEntry, RowUuid, Subsystem,
    System, TempSensor,
};
use crate::smap::Smap;

/// Single-pass iterator over the rows of one table, in store order.
pub type RowIter<'a, T> = Box<dyn Iterator<Item = &'a T> + 'a>;

/// Read side of the row store.
///
/// Iteration order is defined by the store and is not guaranteed to be
/// stable across calls.
pub trait RowStore {
    fn subsystems(&self) -> RowIter<'_, Subsystem>;
    fn systems(&self) -> RowIter<'_, System>;
    fn fans(&self) -> RowIter<'_, Fan>;
    fn leds(&self) -> RowIter<'_, Led>;
    fn power_supplies(&self) -> RowIter<'_, PowerSupply>;
    fn temp_sensors(&self) -> RowIter<'_, TempSensor>;
    fn package_info(&self) -> RowIter<'_, PackageInfo>;
    fn qos_cos_map_entries(&self) -> RowIter<'_, QosCosMapEntry>;
    fn qos_dscp_map_entries(&self) -> RowIter<'_, QosDscpMapEntry>;

    /// Returns the first Subsystem row, if any.
    fn first_subsystem(&self) -> Option<&Subsystem> {
        self.subsystems().next()
    }

    /// Returns the first System row, if any.
    fn first_system(&self) -> Option<&System> {
        self.systems().next()
    }
}

/// A column update on the System row.
///
/// Each variant replaces the whole column value.
#[derive(Debug, Clone, PartialEq)]
pub enum SystemColumn {
    QosConfig(Smap),
    OtherConfig(Smap),
    QosCosMapEntries(Vec<RowUuid>),
    QosDscpMapEntries(Vec<RowUuid>),
}

impl SystemColumn {
    /// Column name, for logging.
    pub fn column_name(&self) -> &'static str {
        use crate::tables::columns::system;
        match self {
            SystemColumn::QosConfig(_) => system::QOS_CONFIG,
            SystemColumn::OtherConfig(_) => system::OTHER_CONFIG,
            SystemColumn::QosCosMapEntries(_) => system::QOS_COS_MAP_ENTRIES,
            SystemColumn::QosDscpMapEntries(_) => system::QOS_DSCP_MAP_ENTRIES,
        }
    }
}

/// Outcome of a successful commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitStatus {
    /// Writes were applied.
    Success,
    /// The transaction held no writes.
    Unchanged,
}

/// An open write transaction.
///
/// Writes are staged and become visible only on [`Transaction::commit`].
/// Dropping a transaction without committing discards the staged writes.
pub trait Transaction {
    /// Stages a new QoS COS map entry row and returns its reference.
    fn insert_cos_map_entry(&mut self, entry: QosCosMapEntry) -> SysdResult<RowUuid>;

    /// Stages a new QoS DSCP map entry row and returns its reference.
    fn insert_dscp_map_entry(&mut self, entry: QosDscpMapEntry) -> SysdResult<RowUuid>;

    /// Stages a column update on the System row identified by `system`.
    fn set_system_column(&mut self, system: RowUuid, column: SystemColumn) -> SysdResult<()>;

    /// Applies every staged write atomically.
    fn commit(self) -> SysdResult<CommitStatus>;

    /// Discards every staged write.
    fn abort(self);
}

/// A row store that can open write transactions.
pub trait TransactionalStore: RowStore {
    type Txn<'a>: Transaction
    where
        Self: 'a;

    /// Opens a write transaction.
    fn begin(&mut self) -> Self::Txn<'_>;
}

/// Schema subscription performed before the CLI starts reading tables.
pub trait SchemaSubscription {
    /// Subscribes to a table.
    fn add_table(&mut self, table: &'static str);

    /// Subscribes to one column of a table.
    fn add_column(&mut self, table: &'static str, column: &'static str);
}
