//! Migration: Route Department writes through stored procedures.
//!
//! Department_Insert returns the new id; Department_Update and
//! Department_Delete check the RowVersion concurrency token and raise
//! a serialization failure when it is stale, which surfaces to the
//! application as a plain database error.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const DEPARTMENT_INSERT: &str = r#"
CREATE OR REPLACE FUNCTION "Department_Insert"(
    p_name varchar(50),
    p_budget double precision,
    p_start_date timestamptz,
    p_instructor_id integer
) RETURNS integer AS $$
DECLARE
    new_id integer;
BEGIN
    INSERT INTO "Department" ("Name", "Budget", "StartDate", "InstructorID", "RowVersion")
    VALUES (p_name, p_budget, p_start_date, p_instructor_id, 1)
    RETURNING "DepartmentID" INTO new_id;
    RETURN new_id;
END;
$$ LANGUAGE plpgsql
"#;

const DEPARTMENT_UPDATE: &str = r#"
CREATE OR REPLACE FUNCTION "Department_Update"(
    p_department_id integer,
    p_name varchar(50),
    p_budget double precision,
    p_start_date timestamptz,
    p_instructor_id integer,
    p_row_version integer
) RETURNS integer AS $$
DECLARE
    new_version integer;
BEGIN
    UPDATE "Department"
    SET "Name" = p_name,
        "Budget" = p_budget,
        "StartDate" = p_start_date,
        "InstructorID" = p_instructor_id,
        "RowVersion" = "RowVersion" + 1
    WHERE "DepartmentID" = p_department_id
      AND "RowVersion" = p_row_version
    RETURNING "RowVersion" INTO new_version;

    IF new_version IS NULL THEN
        RAISE EXCEPTION 'Department % was changed or deleted by another user', p_department_id
            USING ERRCODE = 'serialization_failure';
    END IF;

    RETURN new_version;
END;
$$ LANGUAGE plpgsql
"#;

const DEPARTMENT_DELETE: &str = r#"
CREATE OR REPLACE FUNCTION "Department_Delete"(
    p_department_id integer,
    p_row_version integer
) RETURNS void AS $$
DECLARE
    deleted_id integer;
BEGIN
    DELETE FROM "Department"
    WHERE "DepartmentID" = p_department_id
      AND "RowVersion" = p_row_version
    RETURNING "DepartmentID" INTO deleted_id;

    IF deleted_id IS NULL THEN
        RAISE EXCEPTION 'Department % was changed or deleted by another user', p_department_id
            USING ERRCODE = 'serialization_failure';
    END IF;
END;
$$ LANGUAGE plpgsql
"#;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        conn.execute_unprepared(DEPARTMENT_INSERT).await?;
        conn.execute_unprepared(DEPARTMENT_UPDATE).await?;
        conn.execute_unprepared(DEPARTMENT_DELETE).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        conn.execute_unprepared(r#"DROP FUNCTION IF EXISTS "Department_Delete"(integer, integer)"#)
            .await?;
        conn.execute_unprepared(
            r#"DROP FUNCTION IF EXISTS "Department_Update"(integer, varchar, double precision, timestamptz, integer, integer)"#,
        )
        .await?;
        conn.execute_unprepared(
            r#"DROP FUNCTION IF EXISTS "Department_Insert"(varchar, double precision, timestamptz, integer)"#,
        )
        .await?;
        Ok(())
    }
}
