//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations,
//! organized by domain (EVE Online entities, user accounts, access control).
//! Everything the resolution engine reads is fetched through set-oriented
//! bulk queries here; no per-id fan-out happens downstream.

pub mod access;
pub mod eve;
pub mod user;
