//! Migration: Create the ApplicationUser table for the identity store.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApplicationUser::Table)
                    // Ids are caller-supplied UUID strings
                    .col(
                        ColumnDef::new(ApplicationUser::Id)
                            .string_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ApplicationUser::UserName)
                            .string_len(256)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(ApplicationUser::PasswordHash)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ApplicationUser::SecurityStamp)
                            .string_len(36)
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookups are case-insensitive, so index the lowered name
        manager
            .get_connection()
            .execute_unprepared(
                r#"CREATE INDEX "idx_applicationuser_username_lower" ON "ApplicationUser" (LOWER("UserName"))"#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ApplicationUser::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ApplicationUser {
    #[iden = "ApplicationUser"]
    Table,
    #[iden = "Id"]
    Id,
    #[iden = "UserName"]
    UserName,
    #[iden = "PasswordHash"]
    PasswordHash,
    #[iden = "SecurityStamp"]
    SecurityStamp,
}
