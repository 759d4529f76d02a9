pub use sea_orm_migration::prelude::*;

mod m20260115_000001_create_eve_alliance_table;
mod m20260115_000002_create_eve_corporation_table;
mod m20260115_000003_create_eve_character_table;
mod m20260115_000004_create_eve_character_corporation_role_table;
mod m20260115_000005_create_heimdall_user_table;
mod m20260115_000006_create_heimdall_user_character_table;
mod m20260115_000007_create_heimdall_role_table;
mod m20260115_000008_create_heimdall_role_permission_table;
mod m20260115_000009_create_heimdall_role_member_table;
mod m20260115_000010_create_heimdall_affiliation_rule_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_create_eve_alliance_table::Migration),
            Box::new(m20260115_000002_create_eve_corporation_table::Migration),
            Box::new(m20260115_000003_create_eve_character_table::Migration),
            Box::new(m20260115_000004_create_eve_character_corporation_role_table::Migration),
            Box::new(m20260115_000005_create_heimdall_user_table::Migration),
            Box::new(m20260115_000006_create_heimdall_user_character_table::Migration),
            Box::new(m20260115_000007_create_heimdall_role_table::Migration),
            Box::new(m20260115_000008_create_heimdall_role_permission_table::Migration),
            Box::new(m20260115_000009_create_heimdall_role_member_table::Migration),
            Box::new(m20260115_000010_create_heimdall_affiliation_rule_table::Migration),
        ]
    }
}
