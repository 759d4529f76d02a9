//! Service layer for business logic and orchestration.
//!
//! Services coordinate between repositories and the pure evaluation code.
//! The access service owns affiliation resolution end to end; the user
//! service owns character ownership maintenance and its cache invalidation.

pub mod access;
pub mod user;
