pub mod schema;

use sqlx::{AnyConnection, Connection};

use crate::config::Config;
use crate::error::Result;
use crate::models::{Client, ClientField, ClientFilter, ClientRecord, ClientUpdate, Phone};
use crate::report::{
    ClientAdded, ClientDeletion, FieldChange, PhoneAdded, PhoneDeletion, SearchResult,
    UpdateReport,
};

pub use schema::Backend;

const RECORD_COLUMNS: &str = r#"
    SELECT client.client_id, client.first_name, client.last_name, client.email, phone.phone_number
      FROM client
      LEFT JOIN phone ON phone.client_id = client.client_id
"#;

/// Handle on the client directory. Owns a single connection for the whole unit of work.
pub struct Database {
    conn: AnyConnection,
    backend: Backend,
}

impl Database {
    /// Open a connection using the configured database URL
    pub async fn new(config: &Config) -> Result<Self> {
        Self::connect(&config.database_url()).await
    }

    pub async fn connect(url: &str) -> Result<Self> {
        let backend = Backend::from_url(url)?;
        sqlx::any::install_default_drivers();

        let conn = AnyConnection::connect(url).await?;
        tracing::info!(?backend, "database connection established");

        Ok(Self { conn, backend })
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Release the connection
    pub async fn close(self) -> Result<()> {
        self.conn.close().await?;
        Ok(())
    }

    /// Create the client and phone tables if they do not exist yet
    pub async fn initialize_schema(&mut self) -> Result<()> {
        for statement in self.backend.create_statements() {
            sqlx::query(statement).execute(&mut self.conn).await?;
        }
        tracing::info!("schema ready");

        Ok(())
    }

    // Client operations
    pub async fn add_client(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
        phone: Option<&str>,
    ) -> Result<ClientAdded> {
        // Client and first phone land together or not at all
        let mut tx = self.conn.begin().await?;

        let (client_id, first_name, last_name) = sqlx::query_as::<_, (i32, String, String)>(
            r#"
            INSERT INTO client (first_name, last_name, email)
            VALUES ($1, $2, $3)
            RETURNING client_id, first_name, last_name
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .fetch_one(&mut *tx)
        .await?;
        tracing::debug!(client_id, "client inserted");

        let phone = match phone {
            Some(number) => Some(insert_phone(&mut *tx, number, client_id).await?),
            None => None,
        };

        tx.commit().await?;

        Ok(ClientAdded {
            client_id,
            first_name,
            last_name,
            phone,
        })
    }

    pub async fn get_client(&mut self, client_id: i32) -> Result<Option<Client>> {
        let client = sqlx::query_as::<_, Client>(
            "SELECT client_id, first_name, last_name, email FROM client WHERE client_id = $1",
        )
        .bind(client_id)
        .fetch_optional(&mut self.conn)
        .await?;

        Ok(client)
    }

    /// Apply every requested change in one transaction, reporting each field on its own.
    ///
    /// Fields are matched by `client_id` only, so a phone change rewrites every
    /// phone row the client owns.
    pub async fn update_client(
        &mut self,
        client_id: i32,
        update: &ClientUpdate,
    ) -> Result<UpdateReport> {
        let mut tx = self.conn.begin().await?;
        let mut changes = Vec::new();

        for (field, value) in update.changes() {
            let sql = update_statement(field);
            let updated = sqlx::query_scalar::<_, String>(&sql)
                .bind(value)
                .bind(client_id)
                .fetch_all(&mut *tx)
                .await?;

            let rows = updated.len() as u64;
            let change = match updated.into_iter().next() {
                Some(value) => FieldChange::Changed { value, rows },
                None => FieldChange::NotFound,
            };
            tracing::debug!(client_id, field = field.column(), ?change, "field update");
            changes.push((field, change));
        }

        tx.commit().await?;

        Ok(UpdateReport { client_id, changes })
    }

    pub async fn delete_client(&mut self, client_id: i32) -> Result<ClientDeletion> {
        let mut tx = self.conn.begin().await?;

        // Phones go first so no row is left pointing at a missing client
        let phones_removed = sqlx::query("DELETE FROM phone WHERE client_id = $1")
            .bind(client_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let deleted = sqlx::query_scalar::<_, i32>(
            "DELETE FROM client WHERE client_id = $1 RETURNING client_id",
        )
        .bind(client_id)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(client_id, phones_removed, found = deleted.is_some(), "client delete");

        Ok(match deleted {
            Some(client_id) => ClientDeletion::Deleted {
                client_id,
                phones_removed,
            },
            None => ClientDeletion::NotFound,
        })
    }

    // Phone operations
    pub async fn add_phone(&mut self, phone_number: &str, client_id: i32) -> Result<PhoneAdded> {
        insert_phone(&mut self.conn, phone_number, client_id).await
    }

    pub async fn phones_for_client(&mut self, client_id: i32) -> Result<Vec<Phone>> {
        let phones = sqlx::query_as::<_, Phone>(
            "SELECT phone_id, phone_number, client_id FROM phone WHERE client_id = $1 ORDER BY phone_id",
        )
        .bind(client_id)
        .fetch_all(&mut self.conn)
        .await?;

        Ok(phones)
    }

    pub async fn delete_phone(&mut self, client_id: i32, phone_number: &str) -> Result<PhoneDeletion> {
        let deleted = sqlx::query_scalar::<_, String>(
            r#"
            DELETE FROM phone
             WHERE client_id = $1 AND phone_number = $2
            RETURNING phone_number
            "#,
        )
        .bind(client_id)
        .bind(phone_number)
        .fetch_optional(&mut self.conn)
        .await?;

        Ok(match deleted {
            Some(phone_number) => PhoneDeletion::Deleted { phone_number },
            None => PhoneDeletion::NotFound,
        })
    }

    // Search
    /// Clients whose first name, last name, email or any phone equals one of the
    /// supplied values. An empty filter matches nothing.
    pub async fn find_client(&mut self, filter: &ClientFilter) -> Result<SearchResult> {
        if filter.is_empty() {
            tracing::debug!("empty filter, skipping search");
            return Ok(SearchResult::default());
        }

        let mut values = Vec::new();
        let mut clauses = Vec::new();
        for (column, value) in filter.criteria() {
            values.push(value);
            clauses.push(format!("{column} = ${}", values.len()));
        }

        let sql = format!(
            "{RECORD_COLUMNS} WHERE {} ORDER BY client.client_id, phone.phone_id",
            clauses.join(" OR ")
        );

        let mut query = sqlx::query_as::<_, ClientRecord>(&sql);
        for value in values {
            query = query.bind(value);
        }
        let rows = query.fetch_all(&mut self.conn).await?;
        tracing::debug!(matches = rows.len(), "client search");

        Ok(SearchResult { rows })
    }

    /// Every client with each of its phones
    pub async fn list_clients(&mut self) -> Result<SearchResult> {
        let sql = format!("{RECORD_COLUMNS} ORDER BY client.client_id, phone.phone_id");
        let rows = sqlx::query_as::<_, ClientRecord>(&sql)
            .fetch_all(&mut self.conn)
            .await?;

        Ok(SearchResult { rows })
    }
}

async fn insert_phone(
    conn: &mut AnyConnection,
    phone_number: &str,
    client_id: i32,
) -> Result<PhoneAdded> {
    let added = sqlx::query_as::<_, PhoneAdded>(
        r#"
        INSERT INTO phone (phone_number, client_id)
        VALUES ($1, $2)
        RETURNING phone_number, client_id
        "#,
    )
    .bind(phone_number)
    .bind(client_id)
    .fetch_one(conn)
    .await?;
    tracing::debug!(client_id, "phone inserted");

    Ok(added)
}

fn update_statement(field: ClientField) -> String {
    format!(
        "UPDATE {table} SET {column} = $1 WHERE client_id = $2 RETURNING {column}",
        table = field.table(),
        column = field.column(),
    )
}

/// Open the directory and make sure its tables exist
pub async fn init(config: &Config) -> Result<Database> {
    let mut db = Database::new(config).await?;
    db.initialize_schema().await?;

    Ok(db)
}
