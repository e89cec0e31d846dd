//! Repository layer for ticket storage.
//!
//! The tickets table is used as a key-value store: one put per entry, one
//! point query per exit. The table name comes from configuration.

use sqlx::sqlite::SqlitePool;

use crate::domain::Ticket;
use crate::error::ParkingResult;
use crate::storage::models::TicketRow;

/// Repository for ticket records.
#[derive(Clone)]
pub struct TicketRepository {
    pool: SqlitePool,
    table: String,
}

impl TicketRepository {
    /// Create a new repository over `table`.
    ///
    /// `table` is spliced into SQL text and must already be validated as a
    /// plain identifier (see `Config::validate`).
    pub fn new(pool: SqlitePool, table: impl Into<String>) -> Self {
        Self {
            pool,
            table: table.into(),
        }
    }

    /// Get a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Name of the tickets table.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Initialize the database schema.
    pub async fn init_schema(&self) -> ParkingResult<()> {
        let sql = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {table} (
                ticket_id TEXT PRIMARY KEY,
                parking_lot TEXT NOT NULL,
                plate TEXT NOT NULL,
                parking_posix_time INTEGER NOT NULL
            );
            "#,
            table = self.table
        );

        sqlx::query(&sql).execute(&self.pool).await?;

        Ok(())
    }

    /// Check that the store answers.
    pub async fn ping(&self) -> ParkingResult<()> {
        sqlx::query("SELECT 1").fetch_one(self.pool()).await?;
        Ok(())
    }

    // ==================== Tickets ====================

    /// Store a new ticket.
    ///
    /// Plain insert: an id that is already taken fails instead of replacing
    /// the existing ticket.
    pub async fn save_ticket(&self, ticket: &Ticket) -> ParkingResult<()> {
        let sql = format!(
            r#"
            INSERT INTO {} (ticket_id, parking_lot, plate, parking_posix_time)
            VALUES (?, ?, ?, ?)
            "#,
            self.table
        );

        sqlx::query(&sql)
            .bind(&ticket.ticket_id)
            .bind(&ticket.parking_lot)
            .bind(&ticket.plate)
            .bind(ticket.parking_posix_time)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Tickets stored under `ticket_id`. The primary key allows at most one.
    pub async fn find_tickets(&self, ticket_id: &str) -> ParkingResult<Vec<Ticket>> {
        let sql = format!(
            "SELECT * FROM {} WHERE ticket_id = ?",
            self.table
        );

        let rows: Vec<TicketRow> = sqlx::query_as(&sql)
            .bind(ticket_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Ticket::from).collect())
    }

    /// Whether a ticket with this id is already stored.
    pub async fn ticket_exists(&self, ticket_id: &str) -> ParkingResult<bool> {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE ticket_id = ?", self.table);

        let (count,): (i64,) = sqlx::query_as(&sql)
            .bind(ticket_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }
}

#[cfg(test)]
pub(crate) async fn setup_test_repository() -> TicketRepository {
    use sqlx::sqlite::SqlitePoolOptions;

    // One connection, otherwise every pooled connection gets its own empty in-memory db
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");
    let repo = TicketRepository::new(pool, "tickets");
    repo.init_schema().await.expect("Failed to init schema");
    repo
}
