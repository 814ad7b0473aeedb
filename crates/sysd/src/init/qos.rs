//! QoS trust mode and COS/DSCP map defaults.

use once_cell::sync::Lazy;
use tracing::debug;

use ops_sysd_common::tables::keys;
use ops_sysd_common::{
    merge_keys, QosCosMapEntry, QosDscpMapEntry, SysdResult, System, SystemColumn, Transaction,
};

pub const QOS_COS_MAP_ENTRY_COUNT: usize = 8;
pub const QOS_DSCP_MAP_ENTRY_COUNT: usize = 64;

/// Trust mode written at startup
pub const QOS_TRUST_DEFAULT: &str = "none";

pub const QOS_DEFAULT_COLOR: &str = "green";

/// One default COS map entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CosMapDefault {
    pub code_point: i64,
    pub local_priority: i64,
    pub color: &'static str,
    pub description: &'static str,
}

/// One default DSCP map entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DscpMapDefault {
    pub code_point: i64,
    pub local_priority: i64,
    pub priority_code_point: bool,
    pub color: &'static str,
    pub description: &'static str,
}

const fn cos(code_point: i64, local_priority: i64, description: &'static str) -> CosMapDefault {
    CosMapDefault {
        code_point,
        local_priority,
        color: QOS_DEFAULT_COLOR,
        description,
    }
}

/// 802.1p defaults. Code points 0 and 1 are swapped so best effort
/// traffic ranks above background.
pub static DEFAULT_COS_MAP: [CosMapDefault; QOS_COS_MAP_ENTRY_COUNT] = [
    cos(0, 1, "Best_Effort"),
    cos(1, 0, "Background"),
    cos(2, 2, "Excellent_Effort"),
    cos(3, 3, "Critical_Applications"),
    cos(4, 4, "Video"),
    cos(5, 5, "Voice"),
    cos(6, 6, "Internetwork_Control"),
    cos(7, 7, "Network_Control"),
];

/// Per-hop behavior name of a DSCP code point, empty for unnamed points
fn phb_name(code_point: usize) -> &'static str {
    match code_point {
        0 => "CS0",
        8 => "CS1",
        10 => "AF11",
        12 => "AF12",
        14 => "AF13",
        16 => "CS2",
        18 => "AF21",
        20 => "AF22",
        22 => "AF23",
        24 => "CS3",
        26 => "AF31",
        28 => "AF32",
        30 => "AF33",
        32 => "CS4",
        34 => "AF41",
        36 => "AF42",
        38 => "AF43",
        40 => "CS5",
        46 => "EF",
        48 => "CS6",
        56 => "CS7",
        _ => "",
    }
}

/// DSCP defaults: local priority is the class selector (`code_point / 8`)
pub static DEFAULT_DSCP_MAP: Lazy<[DscpMapDefault; QOS_DSCP_MAP_ENTRY_COUNT]> = Lazy::new(|| {
    std::array::from_fn(|cp| DscpMapDefault {
        code_point: cp as i64,
        local_priority: (cp / 8) as i64,
        priority_code_point: true,
        color: QOS_DEFAULT_COLOR,
        description: phb_name(cp),
    })
});

/// Sets `qos_config[qos_trust]` to the default, keeping other keys.
pub fn seed_trust<T: Transaction>(txn: &mut T, system: &System) -> SysdResult<()> {
    let qos_config = merge_keys(&system.qos_config, [(keys::QOS_TRUST, QOS_TRUST_DEFAULT)]);
    txn.set_system_column(system.uuid, SystemColumn::QosConfig(qos_config))?;
    debug!("Seeded {} = {}", keys::QOS_TRUST, QOS_TRUST_DEFAULT);
    Ok(())
}

/// Inserts the default COS map and points the System row at it.
pub fn seed_cos_map<T: Transaction>(txn: &mut T, system: &System) -> SysdResult<()> {
    let mut refs = Vec::with_capacity(QOS_COS_MAP_ENTRY_COUNT);
    for entry in DEFAULT_COS_MAP.iter() {
        let uuid = txn.insert_cos_map_entry(QosCosMapEntry {
            code_point: entry.code_point,
            local_priority: entry.local_priority,
            color: entry.color.to_string(),
            description: entry.description.to_string(),
            ..Default::default()
        })?;
        refs.push(uuid);
    }

    txn.set_system_column(system.uuid, SystemColumn::QosCosMapEntries(refs))?;
    debug!("Seeded {} COS map entries", QOS_COS_MAP_ENTRY_COUNT);
    Ok(())
}

/// Inserts the default DSCP map and points the System row at it.
pub fn seed_dscp_map<T: Transaction>(txn: &mut T, system: &System) -> SysdResult<()> {
    let mut refs = Vec::with_capacity(QOS_DSCP_MAP_ENTRY_COUNT);
    for entry in DEFAULT_DSCP_MAP.iter() {
        let uuid = txn.insert_dscp_map_entry(QosDscpMapEntry {
            code_point: entry.code_point,
            local_priority: entry.local_priority,
            priority_code_point: entry.priority_code_point,
            color: entry.color.to_string(),
            description: entry.description.to_string(),
            ..Default::default()
        })?;
        refs.push(uuid);
    }

    txn.set_system_column(system.uuid, SystemColumn::QosDscpMapEntries(refs))?;
    debug!("Seeded {} DSCP map entries", QOS_DSCP_MAP_ENTRY_COUNT);
    Ok(())
}
