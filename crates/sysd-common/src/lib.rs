//! Shared infrastructure for the ops-sysd CLI helpers.
//!
//! This crate models the slice of the switch configuration database that
//! the `show system` / `show version` commands and the startup seeders
//! touch:
//!
//! - [`rows`]: typed rows for the Subsystem, System, Fan, LED, Power_supply,
//!   Temp_sensor, Package_Info and QoS map entry tables
//! - [`store`]: read, write-transaction and schema-subscription traits the
//!   external row store is accessed through
//! - [`memory`]: in-memory reference store (tests, JSON snapshots)
//! - [`smap`]: string map columns and the `merge_keys` update helper
//! - [`error`]: error types
//!
//! # Example
//!
//! ```ignore
//! use ops_sysd_common::{MemoryStore, RowStore, TransactionalStore, Transaction};
//!
//! let mut store = MemoryStore::load(Path::new("/var/run/ops-sysd/db.json"))?;
//! if let Some(system) = store.first_system() {
//!     println!("{:?}", system.switch_version);
//! }
//! let txn = store.begin();
//! txn.commit()?;
//! ```

pub mod error;
pub mod memory;
pub mod rows;
pub mod smap;
pub mod store;
pub mod tables;

// Re-export commonly used items at crate root
pub use error::{SysdError, SysdResult};
pub use memory::{MemoryStore, MemoryTxn};
pub use rows::{
    Fan, Led, PackageInfo, PowerSupply, PowerSupplyStatus, QosCosMapEntry, QosDscpMapEntry,
    RowUuid, Subsystem, System, TempSensor,
};
pub use smap::{merge_keys, Smap, SmapExt};
pub use store::{
    CommitStatus, RowIter, RowStore, SchemaSubscription, SystemColumn, Transaction,
    TransactionalStore,
};
