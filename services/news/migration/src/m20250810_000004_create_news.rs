use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No unique index on title: uniqueness is a lookup-before-insert
        // check in the create handler, which leaves a race window against
        // concurrent inserts.
        manager
            .create_table(
                Table::create()
                    .table(News::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(News::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(News::Title).string().not_null())
                    .col(ColumnDef::new(News::Content).text().not_null())
                    .col(ColumnDef::new(News::Author).string().not_null())
                    .col(
                        ColumnDef::new(News::Created)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(News::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum News {
    Table,
    Id,
    Title,
    Content,
    Author,
    Created,
}
