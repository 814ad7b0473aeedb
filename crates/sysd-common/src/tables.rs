//! Table and column name constants for the switch configuration database

/// Subsystem table (chassis/platform description)
pub const SUBSYSTEM_TABLE_NAME: &str = "Subsystem";

/// System table (switch-wide singleton)
pub const SYSTEM_TABLE_NAME: &str = "System";

/// Fan table
pub const FAN_TABLE_NAME: &str = "Fan";

/// LED table
pub const LED_TABLE_NAME: &str = "LED";

/// Power supply table
pub const POWER_SUPPLY_TABLE_NAME: &str = "Power_supply";

/// Temperature sensor table
pub const TEMP_SENSOR_TABLE_NAME: &str = "Temp_sensor";

/// Package information table (`show version detail`)
pub const PACKAGE_INFO_TABLE_NAME: &str = "Package_Info";

/// QoS COS map entry table
pub const QOS_COS_MAP_ENTRY_TABLE_NAME: &str = "QoS_COS_Map_Entry";

/// QoS DSCP map entry table
pub const QOS_DSCP_MAP_ENTRY_TABLE_NAME: &str = "QoS_DSCP_Map_Entry";

/// Column names, grouped per table
pub mod columns {
    pub mod subsystem {
        pub const NAME: &str = "name";
        pub const TYPE: &str = "type";
        pub const INTERFACES: &str = "interfaces";
        pub const FANS: &str = "fans";
        pub const LEDS: &str = "leds";
        pub const POWER_SUPPLIES: &str = "power_supplies";
        pub const TEMP_SENSORS: &str = "temp_sensors";
        pub const ASSET_TAG_NUMBER: &str = "asset_tag_number";
        pub const HW_DESC_DIR: &str = "hw_desc_dir";
        pub const OTHER_INFO: &str = "other_info";
        pub const OTHER_CONFIG: &str = "other_config";
        pub const EXTERNAL_IDS: &str = "external_ids";
    }

    pub mod system {
        pub const SWITCH_VERSION: &str = "switch_version";
        pub const SOFTWARE_INFO: &str = "software_info";
        pub const QOS_CONFIG: &str = "qos_config";
        pub const QOS_COS_MAP_ENTRIES: &str = "qos_cos_map_entries";
        pub const QOS_DSCP_MAP_ENTRIES: &str = "qos_dscp_map_entries";
        pub const OTHER_CONFIG: &str = "other_config";
    }

    pub mod fan {
        pub const NAME: &str = "name";
        pub const SPEED: &str = "speed";
        pub const STATUS: &str = "status";
        pub const DIRECTION: &str = "direction";
        pub const RPM: &str = "rpm";
        pub const OTHER_CONFIG: &str = "other_config";
        pub const HW_CONFIG: &str = "hw_config";
        pub const EXTERNAL_IDS: &str = "external_ids";
    }

    pub mod led {
        pub const ID: &str = "id";
        pub const STATE: &str = "state";
        pub const STATUS: &str = "status";
        pub const OTHER_CONFIG: &str = "other_config";
        pub const EXTERNAL_IDS: &str = "external_ids";
    }

    pub mod power_supply {
        pub const NAME: &str = "name";
        pub const STATUS: &str = "status";
    }

    pub mod temp_sensor {
        pub const NAME: &str = "name";
        pub const LOCATION: &str = "location";
        pub const TEMPERATURE: &str = "temperature";
    }

    pub mod package_info {
        pub const NAME: &str = "name";
        pub const VERSION: &str = "version";
        pub const SRC_TYPE: &str = "src_type";
        pub const SRC_URL: &str = "src_url";
    }
}

/// Keys inside the smap columns read or written by sysd
pub mod keys {
    /// `System.software_info` key holding the OS name
    pub const OS_NAME: &str = "os_name";

    /// `System.qos_config` key holding the trust mode
    pub const QOS_TRUST: &str = "qos_trust";

    /// `System.other_config` ACL limit keys
    pub const MAX_ACLS: &str = "max_acls";
    pub const MAX_ACES: &str = "max_aces";
    pub const MAX_ACES_PER_ACL: &str = "max_aces_per_acl";

    /// `Subsystem.other_info` keys rendered by `show system`
    pub mod other_info {
        pub const PRODUCT_NAME: &str = "Product Name";
        pub const VENDOR: &str = "vendor";
        pub const PLATFORM_NAME: &str = "platform_name";
        pub const MANUFACTURER: &str = "manufacturer";
        pub const MANUFACTURE_DATE: &str = "manufacture_date";
        pub const SERIAL_NUMBER: &str = "serial_number";
        pub const LABEL_REVISION: &str = "label_revision";
        pub const ONIE_VERSION: &str = "onie_version";
        pub const DIAG_VERSION: &str = "diag_version";
        pub const BASE_MAC_ADDRESS: &str = "base_mac_address";
        pub const NUMBER_OF_MACS: &str = "number_of_macs";
        pub const INTERFACE_COUNT: &str = "interface_count";
        pub const MAX_INTERFACE_SPEED: &str = "max_interface_speed";
    }
}

/// Raw `Power_supply.status` tokens
pub mod power_supply_status {
    pub const FAULT_ABSENT: &str = "fault_absent";
    pub const FAULT_INPUT: &str = "fault_input";
    pub const FAULT_OUTPUT: &str = "fault_output";
    pub const OK: &str = "ok";
    pub const UNKNOWN: &str = "unknown";
}
