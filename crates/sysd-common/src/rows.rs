//! Row types for the tables sysd reads and writes

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::smap::Smap;
use crate::tables::power_supply_status;

/// Reference to a row in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowUuid(Uuid);

impl RowUuid {
    /// Allocates a fresh row reference
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RowUuid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RowUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Physical chassis / platform description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subsystem {
    pub uuid: RowUuid,
    pub name: String,
    #[serde(rename = "type")]
    pub subsystem_type: String,
    pub fans: Vec<RowUuid>,
    pub leds: Vec<RowUuid>,
    pub power_supplies: Vec<RowUuid>,
    pub temp_sensors: Vec<RowUuid>,
    pub other_info: Smap,
    pub other_config: Smap,
    pub external_ids: Smap,
}

impl Subsystem {
    pub fn n_fans(&self) -> usize {
        self.fans.len()
    }

    pub fn n_leds(&self) -> usize {
        self.leds.len()
    }

    pub fn n_power_supplies(&self) -> usize {
        self.power_supplies.len()
    }

    pub fn n_temp_sensors(&self) -> usize {
        self.temp_sensors.len()
    }
}

/// Switch-wide singleton row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct System {
    pub uuid: RowUuid,
    pub switch_version: Option<String>,
    pub software_info: Smap,
    pub qos_config: Smap,
    pub qos_cos_map_entries: Vec<RowUuid>,
    pub qos_dscp_map_entries: Vec<RowUuid>,
    pub other_config: Smap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fan {
    pub uuid: RowUuid,
    pub name: String,
    pub speed: String,
    pub status: String,
    pub direction: String,
    pub rpm: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Led {
    pub uuid: RowUuid,
    pub id: String,
    pub state: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerSupply {
    pub uuid: RowUuid,
    pub name: String,
    /// Raw status token as written by the platform daemon
    pub status: String,
}

/// `Power_supply.status` enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerSupplyStatus {
    Absent,
    InputFault,
    OutputFault,
    Ok,
    Unknown,
}

impl PowerSupplyStatus {
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            power_supply_status::FAULT_ABSENT => Some(Self::Absent),
            power_supply_status::FAULT_INPUT => Some(Self::InputFault),
            power_supply_status::FAULT_OUTPUT => Some(Self::OutputFault),
            power_supply_status::OK => Some(Self::Ok),
            power_supply_status::UNKNOWN => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Returns the human readable form shown by the CLI
    pub fn display_str(&self) -> &'static str {
        match self {
            Self::Absent => "Absent",
            Self::InputFault => "Input Fault",
            Self::OutputFault => "Output Fault",
            Self::Ok => "OK",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TempSensor {
    pub uuid: RowUuid,
    pub name: String,
    pub location: String,
    /// Reading in millidegrees Celsius
    pub temperature: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QosCosMapEntry {
    pub uuid: RowUuid,
    pub code_point: i64,
    pub local_priority: i64,
    pub color: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QosDscpMapEntry {
    pub uuid: RowUuid,
    pub code_point: i64,
    pub local_priority: i64,
    pub priority_code_point: bool,
    pub color: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageInfo {
    pub uuid: RowUuid,
    pub name: String,
    pub version: String,
    pub src_type: String,
    pub src_url: String,
}
