//! Domain models for the claim resolver module.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Reserved result key for the principal identifier.
///
/// The subject claim is always surfaced under this key rather than under any
/// claim URI, so the output can be embedded directly into an identity-token
/// claims payload.
pub const SUBJECT_CLAIM_KEY: &str = "sub";

/// A validated access token, as handed over by the token-validation step.
///
/// The resolver does not validate the token again; it only uses the token
/// string to look up the owning client application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDescriptor {
    /// The authorized username, possibly carrying a tenant-domain suffix
    /// (`user@tenant.example`).
    pub authorized_username: String,
    /// The raw access-token string.
    pub token_string: String,
}

/// A declared pairing between a service provider's claim URI and the
/// identity provider's internal claim URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ClaimMapping {
    /// Claim URI in the service provider's own dialect.
    pub remote_claim_uri: String,
    /// Claim URI in the internal dialect.
    pub local_claim_uri: String,
    /// Whether the service provider asked for this claim to be released.
    #[serde(default)]
    pub requested: bool,
}

/// Claim configuration of a relying application, owned by the application
/// registry and read-only at resolution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ServiceProviderRecord {
    /// Declared claim mappings, in configuration order.
    #[serde(default)]
    pub claim_mappings: Vec<ClaimMapping>,
    /// The configured subject-claim URI. May be expressed in either dialect;
    /// the resolver translates it into the internal dialect before querying
    /// the attribute store.
    #[serde(default)]
    pub subject_claim_uri: Option<String>,
}

/// Persisted access-token record, keyed by token string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TokenRecord {
    /// Client identifier of the application the token was issued to.
    pub consumer_key: String,
}

/// Registration record of a client application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AppInfo {
    /// OAuth client identifier.
    pub client_id: String,
    /// Tenant domain the application is registered under. May differ from
    /// the tenant of the user the token was issued for.
    pub tenant_domain: String,
}

/// Translation table from SP-dialect claim URIs to internal-dialect claim
/// URIs, scoped to a single (dialect, tenant) pair.
pub type DialectTranslationTable = HashMap<String, String>;

/// The resolver's result: SP-dialect claim name (or [`SUBJECT_CLAIM_KEY`])
/// mapped to the claim value.
pub type ResolvedClaimSet = HashMap<String, String>;
