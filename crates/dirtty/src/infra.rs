//! Infrastructure adapters behind the store boundary.

/// Local-filesystem implementation of the store boundary.
pub mod local_store;
/// Async storage trait consumed by app orchestration code.
pub mod store;
