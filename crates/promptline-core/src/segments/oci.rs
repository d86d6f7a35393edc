//! Oracle Cloud Infrastructure CLI profile segment.
//!
//! Active when `OCI_CLI_PROFILE` is set.  The region comes from the OCI CLI
//! config file (`OCI_CLI_CONFIG_FILE`, falling back to `~/.oci/config`), an
//! INI-style file owned by the OCI CLI:
//!
//! ```text
//! [DEFAULT]
//! user=ocid1.user.oc1..aaaa
//! region=us-phoenix-1
//!
//! [ADMIN]
//! region = eu-frankfurt-1
//! ```
//!
//! The scan is scoped to the profile's section.  A `region` key that belongs to
//! a later section is never picked up, so a profile without one renders no
//! region.

use std::sync::Arc;

use tracing::debug;

use super::SegmentWriter;
use crate::domain::segment::Properties;
use crate::environment::Environment;

const PROFILE_VAR: &str = "OCI_CLI_PROFILE";
const CONFIG_FILE_VAR: &str = "OCI_CLI_CONFIG_FILE";
const DEFAULT_TEMPLATE: &str = " {{ .Profile }}@{{ .Region }}";

pub struct Oci {
    properties: Properties,
    env: Arc<dyn Environment>,

    pub profile: String,
    pub region: String,
}

impl Oci {
    pub fn new(properties: Properties, env: Arc<dyn Environment>) -> Self {
        Self {
            properties,
            env,
            profile: String::new(),
            region: String::new(),
        }
    }

    fn config_path(&self) -> String {
        let explicit = self.env.getenv(CONFIG_FILE_VAR);
        if !explicit.is_empty() {
            return explicit;
        }
        let home = self.env.getenv("HOME");
        if home.is_empty() {
            return String::new();
        }
        format!("{home}/.oci/config")
    }

    fn region(&self) -> String {
        let path = self.config_path();
        if path.is_empty() {
            return String::new();
        }
        let config = self.env.file_content(&path);
        let region = region_for_profile(&config, &self.profile).unwrap_or_default();
        if region.is_empty() {
            debug!(path = %path, profile = %self.profile, "no OCI region found");
        }
        region
    }
}

/// Finds the `region` value inside the `[profile]` section of `config`.
fn region_for_profile(config: &str, profile: &str) -> Option<String> {
    let header = format!("[{profile}]");
    let mut in_section = false;

    for line in config.lines() {
        let line = line.trim();
        if line.starts_with('[') {
            if in_section {
                // Next section started without a region.
                return None;
            }
            in_section = line.starts_with(&header);
            continue;
        }
        if !in_section {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            if key.trim() == "region" {
                return Some(value.trim().to_string());
            }
        }
    }

    None
}

impl SegmentWriter for Oci {
    fn enabled(&mut self) -> bool {
        self.profile = self.env.getenv(PROFILE_VAR);
        if self.profile.is_empty() {
            self.region.clear();
            return false;
        }
        self.region = self.region();
        true
    }

    fn template(&self) -> String {
        self.properties
            .get("template")
            .and_then(|v| v.as_str())
            .unwrap_or(DEFAULT_TEMPLATE)
            .to_string()
    }

    fn template_data(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Profile", self.profile.clone()),
            ("Region", self.region.clone()),
        ]
    }
}
