use sea_orm_migration::prelude::*;

use super::m20210620_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Posts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Posts::Category).string().not_null())
                    .col(ColumnDef::new(Posts::Excerpt).string().not_null())
                    .col(ColumnDef::new(Posts::Body).text().not_null())
                    .col(ColumnDef::new(Posts::Title).string().not_null())
                    .col(
                        ColumnDef::new(Posts::IsPublished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Posts::FeaturedImage).string().not_null())
                    .col(
                        ColumnDef::new(Posts::PublishedDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    // Writable through the draft allow-list but optional:
                    // nothing in the dashboard supplies one yet.
                    .col(ColumnDef::new(Posts::Slug).string().null())
                    .col(ColumnDef::new(Posts::UserId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_posts_user_id")
                            .from(Posts::Table, Posts::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .col(
                        ColumnDef::new(Posts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Posts::UpdatedAt)
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
            .drop_table(Table::drop().table(Posts::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Posts {
    Table,
    Id,
    Category,
    Excerpt,
    Body,
    Title,
    IsPublished,
    FeaturedImage,
    PublishedDate,
    Slug,
    UserId,
    CreatedAt,
    UpdatedAt,
}
