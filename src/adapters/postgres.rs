// Postgres implementation of the ContactStore port.
//
// Purpose
// - Persist the contact directory in one relational table.
//
// Responsibilities
// - Translate every contract operation into a parameterized statement. Caller
//   input is always bound, never interpolated into SQL text.
// - Translate sqlx failures into the contract's closed error set.
// - Ensure the table exists before the store is put into service; the binary
//   skips registering these routes when that fails.
//
// Testing guidance
// - Covered by ignored integration tests that opt in via DATABASE_URL.

use sqlx::Row;
use sqlx::postgres::{PgPool, PgRow};

use crate::core::contact::{Contact, Contacts};
use crate::core::ports::{ContactStore, StoreError};

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS contacts (
    id          text NOT NULL PRIMARY KEY,
    name        text NULL,
    department  text NULL,
    company     text NULL
)
"#;

const SELECT_ALL: &str = "SELECT id, name, department, company FROM contacts";
const SELECT_ONE: &str = "SELECT id, name, department, company FROM contacts WHERE id = $1";
const INSERT: &str = "INSERT INTO contacts (id, name, department, company) VALUES ($1, $2, $3, $4)";
const UPDATE: &str = "UPDATE contacts SET name = $1, department = $2, company = $3 WHERE id = $4";
const DELETE: &str = "DELETE FROM contacts WHERE id = $1";

pub struct PostgresContactStore {
    pool: PgPool,
}

impl PostgresContactStore {
    /// Opens a pool and runs the idempotent schema setup. Any failure here
    /// means the store must not be registered as a route target.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(url)
            .await
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        let store = Self::with_pool(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Idempotent: safe to run on every startup.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ContactStore for PostgresContactStore {
    async fn fetch_all(&self) -> Result<Contacts, StoreError> {
        let rows = sqlx::query(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        // One undecodable row fails the whole call; never a silently truncated
        // collection.
        let mut contacts = Contacts::new();
        for row in &rows {
            let contact = contact_from_row(row)?;
            contacts.insert(contact.id.clone(), contact);
        }
        Ok(contacts)
    }

    async fn get_one(&self, id: &str) -> Result<Contact, StoreError> {
        let row = sqlx::query(SELECT_ONE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        match row {
            Some(row) => contact_from_row(&row),
            None => Err(StoreError::NotFound),
        }
    }

    async fn create(&self, contact: Contact) -> Result<(), StoreError> {
        sqlx::query(INSERT)
            .bind(&contact.id)
            .bind(&contact.name)
            .bind(&contact.department)
            .bind(&contact.company)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn update(&self, id: &str, contact: Contact) -> Result<(), StoreError> {
        if id == contact.id {
            // A zero affected-row count is not surfaced as NotFound: existence
            // checking lives in the inbound adapter.
            sqlx::query(UPDATE)
                .bind(&contact.name)
                .bind(&contact.department)
                .bind(&contact.company)
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;
            return Ok(());
        }

        // Id move: the remove and the insert commit as one atomic step.
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        sqlx::query(DELETE)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
        sqlx::query(INSERT)
            .bind(&contact.id)
            .bind(&contact.name)
            .bind(&contact.department)
            .bind(&contact.company)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        // Zero affected rows is fine: delete is idempotent.
        sqlx::query(DELETE)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }
}

fn contact_from_row(row: &PgRow) -> Result<Contact, StoreError> {
    // The three descriptive columns are nullable; NULL decodes to the empty
    // string, matching the lenient body decoding on the way in.
    Ok(Contact {
        id: row.try_get("id").map_err(map_sqlx_error)?,
        name: optional_text(row, "name")?,
        department: optional_text(row, "department")?,
        company: optional_text(row, "company")?,
    })
}

fn optional_text(row: &PgRow, column: &str) -> Result<String, StoreError> {
    let value: Option<String> = row.try_get(column).map_err(map_sqlx_error)?;
    Ok(value.unwrap_or_default())
}

fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::RowNotFound => StoreError::NotFound,
        sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::Conflict,
        err @ (sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_)) => {
            StoreError::Invalid(err.to_string())
        }
        err => StoreError::Unavailable(err.to_string()),
    }
}
