use sea_orm_migration::prelude::*;

mod m20250810_000001_create_users;
mod m20250810_000002_create_access_tokens;
mod m20250810_000003_create_categories;
mod m20250810_000004_create_news;
mod m20250810_000005_create_comments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250810_000001_create_users::Migration),
            Box::new(m20250810_000002_create_access_tokens::Migration),
            Box::new(m20250810_000003_create_categories::Migration),
            Box::new(m20250810_000004_create_news::Migration),
            Box::new(m20250810_000005_create_comments::Migration),
        ]
    }
}
