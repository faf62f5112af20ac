use serde::{Deserialize, Serialize};

/// A media protection rule reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProtectionRule {
    pub id: Option<String>,
}
