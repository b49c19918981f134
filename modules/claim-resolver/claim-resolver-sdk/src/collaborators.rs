//! Collaborator contracts consumed by the claim resolver.
//!
//! The resolver owns none of this data. Hosts implement these traits on top
//! of their own directory, token storage, application registry, and claim
//! metadata services, and inject them into the resolver's service.
//!
//! All contracts are synchronous request/response calls (no streaming, no
//! held resources) and must be individually safe for concurrent use.
//! "Not found" is expressed structurally through `Option` returns; errors
//! are reserved for genuine failures.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{AttributeStoreError, CollaboratorError};
use crate::models::{AppInfo, DialectTranslationTable, ServiceProviderRecord, TokenRecord};

/// Resolves the realm owning a (tenant, user) pair.
#[async_trait]
pub trait TenantRealmLookup: Send + Sync {
    /// Resolve a realm handle for the given tenant domain and username.
    ///
    /// Returns `None` when no realm is resolvable for the pair; the resolver
    /// treats that as a benign "no claims available" condition.
    ///
    /// # Errors
    ///
    /// Any `CollaboratorError` is treated as an unexpected failure.
    async fn resolve(
        &self,
        tenant_domain: &str,
        username: &str,
    ) -> Result<Option<Arc<dyn UserRealm>>, CollaboratorError>;
}

/// A resolved realm, scoping access to the tenant's user store.
pub trait UserRealm: Send + Sync {
    /// Handle to the realm's attribute store.
    fn user_store(&self) -> Arc<dyn AttributeStore>;
}

/// Read-only lookup of persisted access-token records.
#[async_trait]
pub trait TokenRecordLookup: Send + Sync {
    /// Look up the token record by raw token string.
    ///
    /// Returns `None` when no record exists. The resolver never asks for
    /// expired records (`include_expired = false`); the flag is part of the
    /// contract so hosts can expose a single lookup for both cases.
    ///
    /// # Errors
    ///
    /// Any `CollaboratorError` is treated as an unexpected failure.
    async fn by_token_string(
        &self,
        token: &str,
        include_expired: bool,
    ) -> Result<Option<TokenRecord>, CollaboratorError>;
}

/// Registry of client applications and their service-provider configuration.
#[async_trait]
pub trait AppRegistry: Send + Sync {
    /// Registration record of the application with the given client id.
    ///
    /// # Errors
    ///
    /// Any `CollaboratorError` is treated as an unexpected failure.
    async fn app_info_by_client_id(
        &self,
        client_id: &str,
    ) -> Result<Option<AppInfo>, CollaboratorError>;

    /// Tenant domain the application is registered under.
    fn tenant_domain_of(&self, app: &AppInfo) -> String;

    /// Display name of the service provider bound to the client id for the
    /// given inbound authentication type.
    ///
    /// # Errors
    ///
    /// Any `CollaboratorError` is treated as an unexpected failure.
    async fn sp_name_by_client_id(
        &self,
        client_id: &str,
        inbound_type: &str,
        tenant_domain: &str,
    ) -> Result<Option<String>, CollaboratorError>;

    /// Full service-provider configuration record by (name, tenant).
    ///
    /// # Errors
    ///
    /// Any `CollaboratorError` is treated as an unexpected failure.
    async fn service_provider(
        &self,
        sp_name: &str,
        tenant_domain: &str,
    ) -> Result<Option<ServiceProviderRecord>, CollaboratorError>;
}

/// Translation tables between claim-naming dialects.
#[async_trait]
pub trait ClaimDialectTranslator: Send + Sync {
    /// Mapping table from `dialect` claim URIs to internal-dialect claim
    /// URIs, scoped to the given tenant.
    ///
    /// The table is oriented external → internal; consumers needing the
    /// reverse direction build the inverse index themselves. Tables are
    /// fetched fresh per call and immutable once returned.
    ///
    /// # Arguments
    ///
    /// * `dialect` - The external dialect URI to translate from
    /// * `root_dialect` - Optional ancestor dialect; `None` for the default
    /// * `tenant_domain` - Tenant scope of the table
    /// * `include_default` - Include ancestor/default mappings as well
    ///
    /// # Errors
    ///
    /// Any `CollaboratorError` is treated as an unexpected failure.
    async fn mapping_table(
        &self,
        dialect: &str,
        root_dialect: Option<&str>,
        tenant_domain: &str,
        include_default: bool,
    ) -> Result<DialectTranslationTable, CollaboratorError>;
}

/// Raw attribute values of a user within a realm.
#[async_trait]
pub trait AttributeStore: Send + Sync {
    /// Fetch values for the given internal-dialect claim URIs.
    ///
    /// The store may return fewer entries than requested; missing values are
    /// not errors. Duplicate URIs in the request list must be tolerated.
    ///
    /// # Arguments
    ///
    /// * `tenant_aware_username` - Username with the tenant-domain suffix stripped
    /// * `claim_uris` - Internal-dialect claim URIs to fetch
    /// * `profile` - Optional attribute profile; `None` for the default
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if the user does not exist in the store
    /// - `Backend` for any other store failure
    async fn get_values(
        &self,
        tenant_aware_username: &str,
        claim_uris: &[String],
        profile: Option<&str>,
    ) -> Result<HashMap<String, String>, AttributeStoreError>;
}
