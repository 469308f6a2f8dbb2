use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // experiences (aggregate root)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiences::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Experiences::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Experiences::Company).string_len(200).not_null())
                    .col(ColumnDef::new(Experiences::Duration).string_len(100).not_null())
                    .col(ColumnDef::new(Experiences::Location).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Experiences::EmploymentType)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Experiences::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Experiences::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Experiences::UpdatedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Children: every FK cascades on parent delete
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Responsibilities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Responsibilities::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Responsibilities::ExperienceId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Responsibilities::Description).text().not_null())
                    .col(
                        ColumnDef::new(Responsibilities::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_responsibilities_experience_id")
                            .from(Responsibilities::Table, Responsibilities::ExperienceId)
                            .to(Experiences::Table, Experiences::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Achievements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Achievements::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Achievements::ExperienceId).integer().not_null())
                    .col(ColumnDef::new(Achievements::Description).text().not_null())
                    .col(
                        ColumnDef::new(Achievements::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_achievements_experience_id")
                            .from(Achievements::Table, Achievements::ExperienceId)
                            .to(Experiences::Table, Experiences::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ExperienceProjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExperienceProjects::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ExperienceProjects::ExperienceId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExperienceProjects::Name)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ExperienceProjects::Description).text())
                    .col(
                        ColumnDef::new(ExperienceProjects::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experience_projects_experience_id")
                            .from(ExperienceProjects::Table, ExperienceProjects::ExperienceId)
                            .to(Experiences::Table, Experiences::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ExperienceTechnologies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExperienceTechnologies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ExperienceTechnologies::ExperienceId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExperienceTechnologies::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experience_technologies_experience_id")
                            .from(
                                ExperienceTechnologies::Table,
                                ExperienceTechnologies::ExperienceId,
                            )
                            .to(Experiences::Table, Experiences::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes: children are always fetched by parent
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_responsibilities_experience_id
                ON responsibilities (experience_id, order_index);
                CREATE INDEX IF NOT EXISTS idx_achievements_experience_id
                ON achievements (experience_id, order_index);
                CREATE INDEX IF NOT EXISTS idx_experience_projects_experience_id
                ON experience_projects (experience_id, order_index);
                CREATE INDEX IF NOT EXISTS idx_experience_technologies_experience_id
                ON experience_technologies (experience_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExperienceTechnologies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ExperienceProjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Achievements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Responsibilities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    Title,
    Company,
    Duration,
    Location,
    EmploymentType,
    OrderIndex,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Responsibilities {
    Table,
    Id,
    ExperienceId,
    Description,
    OrderIndex,
}

#[derive(DeriveIden)]
enum Achievements {
    Table,
    Id,
    ExperienceId,
    Description,
    OrderIndex,
}

#[derive(DeriveIden)]
enum ExperienceProjects {
    Table,
    Id,
    ExperienceId,
    Name,
    Description,
    OrderIndex,
}

#[derive(DeriveIden)]
enum ExperienceTechnologies {
    Table,
    Id,
    ExperienceId,
    Name,
}
