use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // about_info (singleton)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(AboutInfo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AboutInfo::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AboutInfo::Name).string_len(100).not_null())
                    .col(ColumnDef::new(AboutInfo::Title).string_len(200).not_null())
                    .col(ColumnDef::new(AboutInfo::Description).text().not_null())
                    .col(ColumnDef::new(AboutInfo::ProfileImage).string_len(255))
                    .col(
                        ColumnDef::new(AboutInfo::YearsExperience)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(AboutInfo::ProjectCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(AboutInfo::ModelCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(AboutInfo::AccuracyRate)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(AboutInfo::ResumeUrl).string_len(255))
                    .col(
                        ColumnDef::new(AboutInfo::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(AboutInfo::UpdatedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // At most one row: every row indexes the same constant key.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_about_info_singleton
                ON about_info ((true));
                "#,
            )
            .await?;

        // =====================================================
        // highlights
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Highlights::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Highlights::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Highlights::Icon).string_len(32).not_null())
                    .col(ColumnDef::new(Highlights::Text).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Highlights::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Highlights::CreatedAt)
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
            .drop_table(Table::drop().table(Highlights::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(AboutInfo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AboutInfo {
    Table,
    Id,
    Name,
    Title,
    Description,
    ProfileImage,
    YearsExperience,
    ProjectCount,
    ModelCount,
    AccuracyRate,
    ResumeUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Highlights {
    Table,
    Id,
    Icon,
    Text,
    OrderIndex,
    CreatedAt,
}
