//! Tenant-domain handling for qualified usernames.
//!
//! Usernames may carry a tenant-domain suffix after their last `@`
//! (`bob@example.com@acme.example` belongs to tenant `acme.example`).
//! Usernames without a suffix belong to the default tenant.

/// Tenant domain used for usernames without a domain suffix.
pub const DEFAULT_TENANT_DOMAIN: &str = "default";

/// Tenant domain of a possibly-qualified username, lowercased.
pub fn tenant_domain(username: &str) -> String {
    username
        .rsplit_once('@')
        .map_or_else(|| DEFAULT_TENANT_DOMAIN.to_owned(), |(_, d)| d.to_lowercase())
}

/// Username with the tenant-domain suffix stripped.
///
/// Returned unchanged when there is no suffix.
pub fn tenant_aware_username(username: &str) -> &str {
    username.rsplit_once('@').map_or(username, |(u, _)| u)
}
