//! ACL hardware limits from the platform hardware description.
//!
//! The limits file is YAML:
//!
//! ```yaml
//! acl_info:
//!   max_acls: 512
//!   max_aces: 4096
//!   max_aces_per_acl: 512
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::{debug, warn};

use ops_sysd_common::tables::keys;
use ops_sysd_common::{merge_keys, SysdError, SysdResult, System, SystemColumn, Transaction};

/// ACL limits advertised by the platform. `None` when not described.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AclHwInfo {
    #[serde(deserialize_with = "limit")]
    pub max_acls: Option<String>,
    #[serde(deserialize_with = "limit")]
    pub max_aces: Option<String>,
    #[serde(deserialize_with = "limit")]
    pub max_aces_per_acl: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AclFile {
    acl_info: AclHwInfo,
}

/// Accepts `512` as well as `"512"`
fn limit<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_yaml::Value;

    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string or number, got {:?}",
            other
        ))),
    }
}

impl AclHwInfo {
    /// Parses a limits document
    pub fn from_yaml_str(content: &str) -> SysdResult<Self> {
        let file: AclFile = serde_yaml::from_str(content)
            .map_err(|e| SysdError::invalid_config("acl_info", e.to_string()))?;
        Ok(file.acl_info)
    }

    /// Loads the limits file. Any failure is logged and yields no limits.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read ACL limits {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_yaml_str(&content) {
            Ok(info) => info,
            Err(e) => {
                warn!("Failed to parse ACL limits {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// All three limits, if every one is present
    pub fn limits(&self) -> Option<[(&'static str, &str); 3]> {
        match (&self.max_acls, &self.max_aces, &self.max_aces_per_acl) {
            (Some(acls), Some(aces), Some(per_acl)) => Some([
                (keys::MAX_ACLS, acls.as_str()),
                (keys::MAX_ACES, aces.as_str()),
                (keys::MAX_ACES_PER_ACL, per_acl.as_str()),
            ]),
            _ => None,
        }
    }
}

/// Writes the ACL limits into `System.other_config`.
///
/// Returns false, without staging anything, unless all three limits are
/// known.
pub fn seed_acl_limits<T: Transaction>(
    txn: &mut T,
    system: &System,
    acl: &AclHwInfo,
) -> SysdResult<bool> {
    let Some(limits) = acl.limits() else {
        debug!("ACL limits not fully described, leaving other_config untouched");
        return Ok(false);
    };

    let other_config = merge_keys(&system.other_config, limits);
    txn.set_system_column(system.uuid, SystemColumn::OtherConfig(other_config))?;
    debug!(?limits, "Seeded ACL limits");
    Ok(true)
}
