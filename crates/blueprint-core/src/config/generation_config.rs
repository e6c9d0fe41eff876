use serde::{Deserialize, Serialize};

use super::defaults;

/// Document generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub standard_success_threshold: f64,
    pub strict_success_threshold: f64,
    /// Validation loop commands. Supplied by the host project; rendered verbatim.
    pub syntax_command: String,
    pub unit_test_command: String,
    pub integration_command: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            standard_success_threshold: defaults::STANDARD_SUCCESS_THRESHOLD,
            strict_success_threshold: defaults::STRICT_SUCCESS_THRESHOLD,
            syntax_command: defaults::SYNTAX_COMMAND.to_string(),
            unit_test_command: defaults::UNIT_TEST_COMMAND.to_string(),
            integration_command: defaults::INTEGRATION_COMMAND.to_string(),
        }
    }
}
