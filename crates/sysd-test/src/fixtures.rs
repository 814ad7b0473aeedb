//! Test fixtures for switch databases
//!
//! Provides reusable switch layouts for report and seeding tests

use tracing::debug;

use ops_sysd_common::tables::keys::{self, other_info};
use ops_sysd_common::{
    Fan, Led, MemoryStore, PackageInfo, PowerSupply, Smap, Subsystem, System, TempSensor,
};

/// Builds a [`MemoryStore`] holding one Subsystem and one System row.
///
/// Every component added through the builder is also referenced from the
/// Subsystem row, so the report renders it.
#[derive(Debug, Clone)]
pub struct SwitchBuilder {
    subsystem: Option<Subsystem>,
    system: Option<System>,
    fans: Vec<Fan>,
    leds: Vec<Led>,
    power_supplies: Vec<PowerSupply>,
    temp_sensors: Vec<TempSensor>,
    packages: Vec<PackageInfo>,
}

impl SwitchBuilder {
    /// Create a switch with empty Subsystem and System rows
    pub fn new() -> Self {
        Self {
            subsystem: Some(Subsystem {
                name: "base".to_string(),
                subsystem_type: "system".to_string(),
                ..Default::default()
            }),
            system: Some(System::default()),
            fans: Vec::new(),
            leds: Vec::new(),
            power_supplies: Vec::new(),
            temp_sensors: Vec::new(),
            packages: Vec::new(),
        }
    }

    /// Drop the Subsystem row; components are still stored but unreferenced
    pub fn without_subsystem(mut self) -> Self {
        self.subsystem = None;
        self
    }

    /// Drop the System row
    pub fn without_system(mut self) -> Self {
        self.system = None;
        self
    }

    /// Set a `Subsystem.other_info` key
    pub fn with_info(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Some(subsystem) = self.subsystem.as_mut() {
            subsystem.other_info.insert(key.into(), value.into());
        }
        self
    }

    /// Set multiple `Subsystem.other_info` keys
    pub fn with_infos<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in fields {
            self = self.with_info(k, v);
        }
        self
    }

    pub fn switch_version(mut self, version: impl Into<String>) -> Self {
        if let Some(system) = self.system.as_mut() {
            system.switch_version = Some(version.into());
        }
        self
    }

    pub fn os_name(mut self, name: impl Into<String>) -> Self {
        if let Some(system) = self.system.as_mut() {
            system.software_info.insert(keys::OS_NAME.to_string(), name.into());
        }
        self
    }

    pub fn qos_config(mut self, map: Smap) -> Self {
        if let Some(system) = self.system.as_mut() {
            system.qos_config = map;
        }
        self
    }

    pub fn other_config(mut self, map: Smap) -> Self {
        if let Some(system) = self.system.as_mut() {
            system.other_config = map;
        }
        self
    }

    pub fn fan(mut self, name: &str, speed: &str, status: &str) -> Self {
        self.fans.push(Fan {
            name: name.to_string(),
            speed: speed.to_string(),
            status: status.to_string(),
            direction: "f2b".to_string(),
            ..Default::default()
        });
        self
    }

    pub fn led(mut self, id: &str, state: &str, status: &str) -> Self {
        self.leds.push(Led {
            id: id.to_string(),
            state: state.to_string(),
            status: status.to_string(),
            ..Default::default()
        });
        self
    }

    pub fn power_supply(mut self, name: &str, status: &str) -> Self {
        self.power_supplies.push(PowerSupply {
            name: name.to_string(),
            status: status.to_string(),
            ..Default::default()
        });
        self
    }

    /// Temperature in millidegrees Celsius
    pub fn temp_sensor(mut self, location: &str, name: &str, millidegrees: i64) -> Self {
        self.temp_sensors.push(TempSensor {
            name: name.to_string(),
            location: location.to_string(),
            temperature: millidegrees,
            ..Default::default()
        });
        self
    }

    pub fn package(mut self, name: &str, version: &str, src_type: &str, src_url: &str) -> Self {
        self.packages.push(PackageInfo {
            name: name.to_string(),
            version: version.to_string(),
            src_type: src_type.to_string(),
            src_url: src_url.to_string(),
            ..Default::default()
        });
        self
    }

    /// Populate the store
    pub fn build(self) -> MemoryStore {
        let mut store = MemoryStore::new();
        let mut subsystem = self.subsystem;

        for fan in self.fans {
            let uuid = store.add_fan(fan);
            if let Some(s) = subsystem.as_mut() {
                s.fans.push(uuid);
            }
        }
        for led in self.leds {
            let uuid = store.add_led(led);
            if let Some(s) = subsystem.as_mut() {
                s.leds.push(uuid);
            }
        }
        for psu in self.power_supplies {
            let uuid = store.add_power_supply(psu);
            if let Some(s) = subsystem.as_mut() {
                s.power_supplies.push(uuid);
            }
        }
        for sensor in self.temp_sensors {
            let uuid = store.add_temp_sensor(sensor);
            if let Some(s) = subsystem.as_mut() {
                s.temp_sensors.push(uuid);
            }
        }
        for package in self.packages {
            store.add_package_info(package);
        }

        if let Some(s) = subsystem {
            debug!(
                fans = s.n_fans(),
                leds = s.n_leds(),
                psus = s.n_power_supplies(),
                sensors = s.n_temp_sensors(),
                "Built test subsystem"
            );
            store.add_subsystem(s);
        }
        if let Some(system) = self.system {
            store.add_system(system);
        }
        store
    }
}

impl Default for SwitchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Common platform layouts
pub mod platform_fixtures {
    use super::*;

    /// Inventory block of a 48x10G + 6x40G top-of-rack switch
    pub fn as5712_info() -> Vec<(&'static str, &'static str)> {
        vec![
            (other_info::PRODUCT_NAME, "5712-54X-O-AC-F"),
            (other_info::VENDOR, "Edgecore"),
            (other_info::PLATFORM_NAME, "x86_64-accton_as5712_54x-r0"),
            (other_info::MANUFACTURER, "Accton"),
            (other_info::MANUFACTURE_DATE, "03/24/2015 16:03:54"),
            (other_info::SERIAL_NUMBER, "571254X1512040"),
            (other_info::LABEL_REVISION, "R01H"),
            (other_info::ONIE_VERSION, "2014.08.0.0.7"),
            (other_info::DIAG_VERSION, "2.0.1.0"),
            (other_info::BASE_MAC_ADDRESS, "70:72:cf:fd:e9:b9"),
            (other_info::NUMBER_OF_MACS, "74"),
            (other_info::INTERFACE_COUNT, "54"),
            (other_info::MAX_INTERFACE_SPEED, "40000"),
        ]
    }

    /// Fully populated switch with unsorted fan and PSU rows
    pub fn as5712() -> SwitchBuilder {
        SwitchBuilder::new()
            .with_infos(as5712_info())
            .switch_version("0.4.0 (Build: as5712-ops-0.4.0-master+2016051010)")
            .fan("base-2R", "normal", "ok")
            .fan("base-1L", "normal", "ok")
            .fan("base-2L", "slow", "fault")
            .fan("base-1R", "normal", "ok")
            .led("base-loc", "off", "ok")
            .power_supply("base-2", "fault_absent")
            .power_supply("base-1", "ok")
            .temp_sensor("front", "base-1", 27500)
            .temp_sensor("side", "base-2", 31000)
            .temp_sensor("back", "base-3", 0)
            .package(
                "ops-sysd",
                "a4f2b6d",
                "git",
                "https://git.openswitch.net/openswitch/ops-sysd",
            )
            .package("ops-cli", "", "", "")
    }

    /// Switch whose platform daemons have not populated anything yet
    pub fn bare() -> SwitchBuilder {
        SwitchBuilder::new()
    }
}
