//! Domain layer for the claim resolver.

pub mod error;
pub mod local_client;
pub mod service;
pub mod tenant;


pub use error::DomainError;
pub use local_client::ClaimResolverLocalClient;
pub use service::Service;
