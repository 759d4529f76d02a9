//! Heimdall is an affiliation-based authorization service for EVE Online
//! organizations. It resolves, per user and permission, the set of character,
//! corporation, and alliance IDs the user may act upon, and gates batch
//! requests against that set.

pub mod model;
pub mod server;
