pub mod affiliation_rule;
pub mod role;
