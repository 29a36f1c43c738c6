//! Domain model for UpCloud resources
//!
//! These are flat value objects. Envelope wrapping is handled by
//! [`crate::codec`]; field-level wire quirks are declared with serde attributes
//! on each type.

use std::fmt;

/// Declare an enum backed by a wire string
///
/// Values the library does not know about decode to `Unknown(String)` and
/// encode back unchanged.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $value:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)*
            /// Value not known to this library, kept verbatim
            Unknown(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)*
                    Self::Unknown(s) => s,
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                match s.as_str() {
                    $($value => Self::$variant,)*
                    _ => Self::Unknown(s),
                }
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::from(s.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::Unknown(String::new())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub mod firewall;
pub mod ip_address;
pub mod server;
pub mod storage;
pub mod tag;

pub use firewall::{FirewallRule, FirewallRuleAction, FirewallRuleDirection, FirewallRuleProtocol};
pub use ip_address::{IpAddress, IpAddressAccess, IpAddressFamily};
pub use server::{
    Server, ServerConfiguration, ServerDetails, ServerIpAddress, ServerState, ServerStorageDevice,
    StopType, StorageDeviceType, VideoModel,
};
pub use storage::{
    BackupInterval, BackupRule, Storage, StorageAccess, StorageDetails, StorageState, StorageTier,
    StorageType,
};
pub use tag::{Tag, TagList};

/// A remotely managed entity with its envelope keys
pub trait Resource {
    /// Key a single resource is nested under, e.g. `"server"`
    const KEY: &'static str;

    /// Key a collection is nested under, e.g. `"servers"`
    const PLURAL: &'static str;
}

/// A resource with an observable lifecycle state
pub trait Stateful: Resource {
    type State: PartialEq + fmt::Display + fmt::Debug + Send + Sync;

    /// Identifier used in log and error messages
    fn identifier(&self) -> &str;

    fn state(&self) -> &Self::State;
}
