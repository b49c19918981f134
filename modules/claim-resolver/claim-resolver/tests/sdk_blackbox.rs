//! Black-box test driving the resolver purely through the SDK surface.
//!
//! Everything here goes through `ClaimResolverClient` and the collaborator
//! contracts, the same way a host embedding the module would wire it up.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use claim_resolver_sdk::{
    AppInfo, AppRegistry, AttributeStore, AttributeStoreError, ClaimDialectTranslator,
    ClaimMapping, ClaimResolverClient, CollaboratorError, DialectTranslationTable,
    SUBJECT_CLAIM_KEY, ServiceProviderRecord, TenantRealmLookup, TokenDescriptor, TokenRecord,
    TokenRecordLookup, UserRealm,
};

use claim_resolver::config::ClaimResolverConfig;
use claim_resolver::domain::{ClaimResolverLocalClient, Service};

const LOCAL_EMAIL: &str = "http://cyberfabric.io/claims/email";
const LOCAL_NAME: &str = "http://cyberfabric.io/claims/fullname";

struct Directory {
    users: HashMap<String, HashMap<String, String>>,
}

#[async_trait]
impl AttributeStore for Directory {
    async fn get_values(
        &self,
        tenant_aware_username: &str,
        claim_uris: &[String],
        _profile: Option<&str>,
    ) -> Result<HashMap<String, String>, AttributeStoreError> {
        let Some(attrs) = self.users.get(tenant_aware_username) else {
            return Err(AttributeStoreError::UserNotFound {
                username: tenant_aware_username.to_owned(),
            });
        };
        Ok(claim_uris
            .iter()
            .filter_map(|uri| attrs.get(uri).map(|v| (uri.clone(), v.clone())))
            .collect())
    }
}

struct Realm {
    store: Arc<Directory>,
}

impl UserRealm for Realm {
    fn user_store(&self) -> Arc<dyn AttributeStore> {
        self.store.clone()
    }
}

struct Realms {
    store: Arc<Directory>,
}

#[async_trait]
impl TenantRealmLookup for Realms {
    async fn resolve(
        &self,
        _tenant_domain: &str,
        _username: &str,
    ) -> Result<Option<Arc<dyn UserRealm>>, CollaboratorError> {
        Ok(Some(Arc::new(Realm {
            store: self.store.clone(),
        })))
    }
}

struct Tokens;

#[async_trait]
impl TokenRecordLookup for Tokens {
    async fn by_token_string(
        &self,
        token: &str,
        _include_expired: bool,
    ) -> Result<Option<TokenRecord>, CollaboratorError> {
        Ok((token == "valid-token").then(|| TokenRecord {
            consumer_key: "portal-client".to_owned(),
        }))
    }
}

struct Apps;

#[async_trait]
impl AppRegistry for Apps {
    async fn app_info_by_client_id(
        &self,
        client_id: &str,
    ) -> Result<Option<AppInfo>, CollaboratorError> {
        Ok(Some(AppInfo {
            client_id: client_id.to_owned(),
            tenant_domain: "acme.example".to_owned(),
        }))
    }

    fn tenant_domain_of(&self, app: &AppInfo) -> String {
        app.tenant_domain.clone()
    }

    async fn sp_name_by_client_id(
        &self,
        _client_id: &str,
        _inbound_type: &str,
        _tenant_domain: &str,
    ) -> Result<Option<String>, CollaboratorError> {
        Ok(Some("portal".to_owned()))
    }

    async fn service_provider(
        &self,
        _sp_name: &str,
        _tenant_domain: &str,
    ) -> Result<Option<ServiceProviderRecord>, CollaboratorError> {
        Ok(Some(ServiceProviderRecord {
            claim_mappings: vec![
                ClaimMapping {
                    remote_claim_uri: "email".to_owned(),
                    local_claim_uri: LOCAL_EMAIL.to_owned(),
                    requested: false,
                },
                ClaimMapping {
                    remote_claim_uri: "name".to_owned(),
                    local_claim_uri: LOCAL_NAME.to_owned(),
                    requested: true,
                },
            ],
            subject_claim_uri: Some("email".to_owned()),
        }))
    }
}

struct Dialects;

#[async_trait]
impl ClaimDialectTranslator for Dialects {
    async fn mapping_table(
        &self,
        _dialect: &str,
        _root_dialect: Option<&str>,
        _tenant_domain: &str,
        _include_default: bool,
    ) -> Result<DialectTranslationTable, CollaboratorError> {
        Ok(DialectTranslationTable::from([
            ("email".to_owned(), LOCAL_EMAIL.to_owned()),
            ("name".to_owned(), LOCAL_NAME.to_owned()),
        ]))
    }
}

fn resolver() -> Arc<dyn ClaimResolverClient> {
    let store = Arc::new(Directory {
        users: HashMap::from([(
            "alice".to_owned(),
            HashMap::from([
                (LOCAL_EMAIL.to_owned(), "alice@acme.example".to_owned()),
                (LOCAL_NAME.to_owned(), "Alice Doe".to_owned()),
            ]),
        )]),
    });
    let svc = Service::new(
        Arc::new(Realms { store }),
        Arc::new(Tokens),
        Arc::new(Apps),
        Arc::new(Dialects),
        ClaimResolverConfig::default(),
    );
    Arc::new(ClaimResolverLocalClient::new(Arc::new(svc)))
}

#[tokio::test]
async fn resolves_full_claim_set_for_known_user() {
    let claims = resolver()
        .resolve(&TokenDescriptor {
            authorized_username: "alice@acme.example".to_owned(),
            token_string: "valid-token".to_owned(),
        })
        .await
        .unwrap();

    // Subject came from the SP-dialect "email" configuration, translated to
    // the local URI before the fetch; it is implicit, so no "email" key.
    assert_eq!(
        claims.get(SUBJECT_CLAIM_KEY).map(String::as_str),
        Some("alice@acme.example")
    );
    assert!(!claims.contains_key("email"));
    assert_eq!(claims.get("name").map(String::as_str), Some("Alice Doe"));
    assert_eq!(claims.len(), 2);
}

#[tokio::test]
async fn unknown_token_yields_empty_claim_set() {
    let claims = resolver()
        .resolve(&TokenDescriptor {
            authorized_username: "alice@acme.example".to_owned(),
            token_string: "revoked-token".to_owned(),
        })
        .await
        .unwrap();

    assert!(claims.is_empty());
}

#[tokio::test]
async fn unknown_user_yields_empty_claim_set() {
    let claims = resolver()
        .resolve(&TokenDescriptor {
            authorized_username: "mallory@acme.example".to_owned(),
            token_string: "valid-token".to_owned(),
        })
        .await
        .unwrap();

    assert!(claims.is_empty());
}
