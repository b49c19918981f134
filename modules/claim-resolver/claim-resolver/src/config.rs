//! Configuration for the claim resolver.

use serde::{Deserialize, Serialize};

/// Configuration for the `claim_resolver` module.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClaimResolverConfig {
    /// Output dialect URI used when requesting translation tables for
    /// service providers.
    #[serde(default = "default_sp_claim_dialect")]
    pub sp_claim_dialect: String,

    /// Include ancestor/default mappings when fetching dialect translation
    /// tables.
    #[serde(default = "default_include_default_dialect_mappings")]
    pub include_default_dialect_mappings: bool,

    /// Emit per-claim debug logs including claim values. Off by default:
    /// claim values are user PII.
    #[serde(default)]
    pub log_claim_values: bool,
}

impl Default for ClaimResolverConfig {
    fn default() -> Self {
        Self {
            sp_claim_dialect: default_sp_claim_dialect(),
            include_default_dialect_mappings: default_include_default_dialect_mappings(),
            log_claim_values: false,
        }
    }
}

fn default_sp_claim_dialect() -> String {
    "http://cyberfabric.io/oidc/claim".to_owned()
}

fn default_include_default_dialect_mappings() -> bool {
    true
}
