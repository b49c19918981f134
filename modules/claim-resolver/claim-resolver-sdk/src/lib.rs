//! Claim Resolver SDK
//!
//! This crate provides the public API for the `claim_resolver` module:
//!
//! - [`ClaimResolverClient`] - Public API trait for consumers
//! - Collaborator contracts the host must provide: [`TenantRealmLookup`],
//!   [`TokenRecordLookup`], [`AppRegistry`], [`ClaimDialectTranslator`],
//!   [`AttributeStore`]
//! - [`TokenDescriptor`], [`ServiceProviderRecord`], [`ClaimMapping`] - Domain models
//! - [`ClaimResolverError`], [`AttributeStoreError`] - Error types
//!
//! ## Usage
//!
//! Consumers hand the resolver a validated-token descriptor and receive the
//! claim set mapped into the service provider's dialect:
//!
//! ```ignore
//! use claim_resolver_sdk::{ClaimResolverClient, TokenDescriptor};
//!
//! let token = TokenDescriptor {
//!     authorized_username: "alice@acme.example".to_owned(),
//!     token_string: raw_token,
//! };
//! let claims = resolver.resolve(&token).await?;
//! let subject = claims.get(claim_resolver_sdk::SUBJECT_CLAIM_KEY);
//! ```
//!
//! An empty claim set is a valid, successful "no claims available" answer;
//! only [`ClaimResolverError`] is fatal to the surrounding request.

pub mod api;
pub mod collaborators;
pub mod error;
pub mod models;

// Re-export main types at crate root
pub use api::ClaimResolverClient;
pub use collaborators::{
    AppRegistry, AttributeStore, ClaimDialectTranslator, TenantRealmLookup, TokenRecordLookup,
    UserRealm,
};
pub use error::{AttributeStoreError, ClaimResolverError, CollaboratorError};
pub use models::{
    AppInfo, ClaimMapping, DialectTranslationTable, ResolvedClaimSet, SUBJECT_CLAIM_KEY,
    ServiceProviderRecord, TokenDescriptor, TokenRecord,
};
