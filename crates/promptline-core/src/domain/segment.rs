//! A single configured prompt segment.
//!
//! A segment carries three things on disk:
//!
//! ```yaml
//! - type: aws            # which probe/renderer handles it
//!   enabled: true        # the persisted on/off switch
//!   style: powerline     # everything else is an open parameter bag
//!   foreground: white
//!   background: orange
//! ```
//!
//! Only `enabled` is ever mutated after load.  The type is fixed for the life
//! of the value, which is why the fields are private and exposed via getters.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Open, order-preserving bag of type-specific parameters.
///
/// Values are kept as format-neutral JSON values so a document loaded from
/// YAML can be written back as YAML (or TOML, or JSON) without loss.
pub type Properties = serde_json::Map<String, serde_json::Value>;

/// Error returned when a string does not name a known segment type.
///
/// The message lists every valid name so it can be shown to the operator
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown segment type '{given}' (valid types: {})", SegmentType::names().join(", "))]
pub struct ParseSegmentTypeError {
    pub given: String,
}

macro_rules! segment_types {
    ($($variant:ident => $name:literal,)+) => {
        /// Every segment kind promptline knows about.
        ///
        /// The external name doubles as the toggle key on the command line, so
        /// matching is case-sensitive.  Adding a kind means adding one line to
        /// the table below; the toggle engine never needs to change.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum SegmentType {
            $($variant,)+
        }

        impl SegmentType {
            /// All known segment types, in alphabetical order of their names.
            pub const ALL: &'static [SegmentType] = &[$(SegmentType::$variant,)+];

            /// External (serialized and command-line) name of this type.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(SegmentType::$variant => $name,)+
                }
            }
        }
    };
}

segment_types! {
    Angular => "angular",
    Aws => "aws",
    Az => "az",
    AzFunc => "azfunc",
    Battery => "battery",
    Brewfather => "brewfather",
    Cds => "cds",
    Command => "command",
    Crystal => "crystal",
    Dart => "dart",
    Deno => "deno",
    Dotnet => "dotnet",
    ExecutionTime => "executiontime",
    Exit => "exit",
    Git => "git",
    Golang => "golang",
    Haskell => "haskell",
    Ipify => "ipify",
    Java => "java",
    Julia => "julia",
    Kubectl => "kubectl",
    Nbgv => "nbgv",
    Nightscout => "nightscout",
    Node => "node",
    Oci => "oci",
    Os => "os",
    Path => "path",
    Php => "php",
    Plastic => "plastic",
    PoshGit => "poshgit",
    Python => "python",
    Root => "root",
    Ruby => "ruby",
    Rust => "rust",
    Session => "session",
    Shell => "shell",
    Spotify => "spotify",
    Strava => "strava",
    SysInfo => "sysinfo",
    Terraform => "terraform",
    Text => "text",
    Time => "time",
    Wakatime => "wakatime",
    Weather => "weather",
    Wifi => "wifi",
    WinReg => "winreg",
    Ytm => "ytm",
}

impl SegmentType {
    /// External names of all known types.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.as_str()).collect()
    }
}

impl fmt::Display for SegmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SegmentType {
    type Err = ParseSegmentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseSegmentTypeError {
                given: s.to_string(),
            })
    }
}

impl Serialize for SegmentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SegmentType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

fn default_enabled() -> bool {
    true
}

/// One configured prompt element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(rename = "type")]
    segment_type: SegmentType,
    /// Absent in the source means enabled; always written back explicitly.
    #[serde(default = "default_enabled")]
    enabled: bool,
    #[serde(flatten)]
    properties: Properties,
}

impl Segment {
    /// Creates a segment with an empty parameter bag.
    pub fn new(segment_type: SegmentType, enabled: bool) -> Self {
        Self {
            segment_type,
            enabled,
            properties: Properties::new(),
        }
    }

    /// Builder-style helper that sets one parameter.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn segment_type(&self) -> SegmentType {
        self.segment_type
    }

    /// The persisted switch.  This is independent of whether the segment's
    /// probe considers it live in the current environment.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Flips the persisted switch and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }
}
