use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // projects (aggregate root)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Projects::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Projects::Description).text().not_null())
                    .col(ColumnDef::new(Projects::Image).string_len(255))
                    .col(ColumnDef::new(Projects::GithubUrl).string_len(255))
                    .col(ColumnDef::new(Projects::LiveUrl).string_len(255))
                    .col(
                        ColumnDef::new(Projects::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Projects::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Projects::UpdatedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProjectTechnologies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectTechnologies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProjectTechnologies::ProjectId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectTechnologies::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_technologies_project_id")
                            .from(ProjectTechnologies::Table, ProjectTechnologies::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProjectFeatures::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectFeatures::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProjectFeatures::ProjectId).integer().not_null())
                    .col(ColumnDef::new(ProjectFeatures::Description).text().not_null())
                    .col(
                        ColumnDef::new(ProjectFeatures::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_features_project_id")
                            .from(ProjectFeatures::Table, ProjectFeatures::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProjectMetrics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectMetrics::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProjectMetrics::ProjectId).integer().not_null())
                    .col(ColumnDef::new(ProjectMetrics::Description).text().not_null())
                    .col(
                        ColumnDef::new(ProjectMetrics::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_metrics_project_id")
                            .from(ProjectMetrics::Table, ProjectMetrics::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Featured listing is the hot public read
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_featured_order
                ON projects (is_featured, order_index);
                CREATE INDEX IF NOT EXISTS idx_project_technologies_project_id
                ON project_technologies (project_id);
                CREATE INDEX IF NOT EXISTS idx_project_features_project_id
                ON project_features (project_id, order_index);
                CREATE INDEX IF NOT EXISTS idx_project_metrics_project_id
                ON project_metrics (project_id, order_index);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectMetrics::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProjectFeatures::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProjectTechnologies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    Description,
    Image,
    GithubUrl,
    LiveUrl,
    OrderIndex,
    IsFeatured,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ProjectTechnologies {
    Table,
    Id,
    ProjectId,
    Name,
}

#[derive(DeriveIden)]
enum ProjectFeatures {
    Table,
    Id,
    ProjectId,
    Description,
    OrderIndex,
}

#[derive(DeriveIden)]
enum ProjectMetrics {
    Table,
    Id,
    ProjectId,
    Description,
    OrderIndex,
}
