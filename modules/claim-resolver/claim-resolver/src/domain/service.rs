//! Claim resolution service.
//!
//! One linear pipeline per invocation: resolve the user's realm, resolve the
//! owning service provider from the token, translate its subject-claim URI
//! into the internal dialect, fetch the minimal claim set from the realm's
//! attribute store, and fold the fetched values into the service provider's
//! dialect.

use std::collections::HashMap;
use std::sync::Arc;

use claim_resolver_sdk::{
    AppRegistry, AttributeStoreError, ClaimDialectTranslator, DialectTranslationTable,
    ResolvedClaimSet, SUBJECT_CLAIM_KEY, ServiceProviderRecord, TenantRealmLookup,
    TokenDescriptor, TokenRecordLookup,
};
use tracing::{debug, warn};

use crate::config::ClaimResolverConfig;

use super::DomainError;
use super::tenant;

/// Inbound authentication type used when resolving the service provider
/// bound to an OAuth client id.
const INBOUND_AUTH_TYPE: &str = "oauth2";

/// Claim resolution service.
///
/// Holds only the injected collaborator handles and configuration; safe to
/// share across concurrent requests.
pub struct Service {
    realms: Arc<dyn TenantRealmLookup>,
    tokens: Arc<dyn TokenRecordLookup>,
    apps: Arc<dyn AppRegistry>,
    dialects: Arc<dyn ClaimDialectTranslator>,
    config: ClaimResolverConfig,
}

impl Service {
    pub fn new(
        realms: Arc<dyn TenantRealmLookup>,
        tokens: Arc<dyn TokenRecordLookup>,
        apps: Arc<dyn AppRegistry>,
        dialects: Arc<dyn ClaimDialectTranslator>,
        config: ClaimResolverConfig,
    ) -> Self {
        Self {
            realms,
            tokens,
            apps,
            dialects,
            config,
        }
    }

    /// Resolve the claim set for a validated access token.
    ///
    /// Benign "no data" conditions yield `Ok` with an empty map; a
    /// `DomainError` means the whole operation failed and no partial result
    /// is available.
    pub async fn resolve_claims(
        &self,
        token: &TokenDescriptor,
    ) -> Result<ResolvedClaimSet, DomainError> {
        let username = token.authorized_username.as_str();
        let user_tenant = tenant::tenant_domain(username);

        let Some(realm) = self.realms.resolve(&user_tenant, username).await? else {
            warn!(%username, tenant = %user_tenant, "no realm resolvable, returning empty claim set");
            return Ok(ResolvedClaimSet::new());
        };
        let store = realm.user_store();

        let Some(sp) = self.resolve_service_provider(&token.token_string).await? else {
            debug!(%username, "no service-provider record found, returning empty claim set");
            return Ok(ResolvedClaimSet::new());
        };

        let subject_claim_uri = resolve_subject_claim_uri(&sp);
        if subject_claim_uri.is_none() && sp.claim_mappings.is_empty() {
            debug!(%username, "service provider requests no claims, returning empty claim set");
            return Ok(ResolvedClaimSet::new());
        }

        let (claim_uris, subject_in_requested) =
            build_fetch_list(&sp, subject_claim_uri.as_deref());
        debug!(count = claim_uris.len(), "requested local claim URIs");

        // Fetched before the store query to keep one round trip per step.
        let sp_to_local = self
            .dialects
            .mapping_table(
                &self.config.sp_claim_dialect,
                None,
                &user_tenant,
                self.config.include_default_dialect_mappings,
            )
            .await?;

        let user_claims = match store
            .get_values(tenant::tenant_aware_username(username), &claim_uris, None)
            .await
        {
            Ok(values) => values,
            Err(AttributeStoreError::UserNotFound { username }) => {
                debug!(%username, "user not found in the attribute store, returning empty claim set");
                return Ok(ResolvedClaimSet::new());
            }
            Err(AttributeStoreError::Backend(reason)) => {
                return Err(DomainError::AttributeStore(reason));
            }
        };
        debug!(count = user_claims.len(), "user claims retrieved from the attribute store");
        if user_claims.is_empty() {
            return Ok(ResolvedClaimSet::new());
        }

        Ok(self.assemble(
            &user_claims,
            &sp_to_local,
            subject_claim_uri.as_deref(),
            subject_in_requested,
        ))
    }

    /// Resolve the service-provider record owning the given token.
    ///
    /// Any absent link in the chain (token record, app registration, SP
    /// name, SP record) yields `None`; there is nothing to map into.
    async fn resolve_service_provider(
        &self,
        token_string: &str,
    ) -> Result<Option<ServiceProviderRecord>, DomainError> {
        let Some(record) = self.tokens.by_token_string(token_string, false).await? else {
            debug!("no access-token record found");
            return Ok(None);
        };
        let client_id = record.consumer_key;

        let Some(app) = self.apps.app_info_by_client_id(&client_id).await? else {
            return Ok(None);
        };
        // The app's owning tenant may differ from the user's tenant.
        let sp_tenant = self.apps.tenant_domain_of(&app);

        let Some(sp_name) = self
            .apps
            .sp_name_by_client_id(&client_id, INBOUND_AUTH_TYPE, &sp_tenant)
            .await?
        else {
            return Ok(None);
        };
        Ok(self.apps.service_provider(&sp_name, &sp_tenant).await?)
    }

    /// Fold the fetched internal-dialect pairs into the SP-dialect result.
    ///
    /// The translation table is oriented SP-dialect → internal, so the
    /// inverse index is built here. Internal URIs with no SP-dialect name
    /// are dropped; they were fetched only as dependencies (e.g. a bare
    /// subject claim with no external meaning).
    fn assemble(
        &self,
        user_claims: &HashMap<String, String>,
        sp_to_local: &DialectTranslationTable,
        subject_claim_uri: Option<&str>,
        subject_in_requested: bool,
    ) -> ResolvedClaimSet {
        let local_to_sp: HashMap<&str, &str> = sp_to_local
            .iter()
            .map(|(sp_uri, local_uri)| (local_uri.as_str(), sp_uri.as_str()))
            .collect();

        user_claims
            .iter()
            .fold(ResolvedClaimSet::new(), |mut acc, (local_uri, value)| {
                let Some(sp_name) = local_to_sp.get(local_uri.as_str()) else {
                    return acc;
                };
                if self.config.log_claim_values {
                    debug!(claim = %sp_name, value = %value, "mapped claim");
                }
                if subject_claim_uri == Some(local_uri.as_str()) {
                    acc.insert(SUBJECT_CLAIM_KEY.to_owned(), value.clone());
                    if !subject_in_requested {
                        // An implicit subject is exposed under "sub" only.
                        return acc;
                    }
                }
                acc.insert((*sp_name).to_owned(), value.clone());
                acc
            })
    }
}

/// Translate the configured subject-claim URI into the internal dialect.
///
/// Service providers may configure their subject claim using their own
/// dialect's naming; the first mapping whose remote URI matches wins.
fn resolve_subject_claim_uri(sp: &ServiceProviderRecord) -> Option<String> {
    let configured = sp.subject_claim_uri.as_deref()?;
    let translated = sp
        .claim_mappings
        .iter()
        .find(|m| m.remote_claim_uri == configured)
        .map(|m| m.local_claim_uri.as_str());
    Some(translated.unwrap_or(configured).to_owned())
}

/// Build the internal-dialect fetch list: subject first (when configured),
/// then every requested mapping in declaration order.
///
/// The store tolerates duplicate URIs, so no deduplication happens here.
/// The returned flag records whether the subject claim is itself among the
/// explicitly requested claims.
fn build_fetch_list(
    sp: &ServiceProviderRecord,
    subject_claim_uri: Option<&str>,
) -> (Vec<String>, bool) {
    let mut claim_uris = Vec::with_capacity(sp.claim_mappings.len() + 1);
    if let Some(subject) = subject_claim_uri {
        claim_uris.push(subject.to_owned());
    }

    let mut subject_in_requested = false;
    for mapping in sp.claim_mappings.iter().filter(|m| m.requested) {
        claim_uris.push(mapping.local_claim_uri.clone());
        if subject_claim_uri == Some(mapping.local_claim_uri.as_str()) {
            subject_in_requested = true;
        }
    }
    (claim_uris, subject_in_requested)
}
