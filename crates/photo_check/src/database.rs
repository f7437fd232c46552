use crate::types::{Config, PhotoSummary};
use anyhow::{Context, Result};
use sqlx::{Connection, PgConnection};
use tracing::{debug, info};
use uuid::Uuid;

/// Counters are widened to bigint and the owner is compared as text, so the
/// query works whether the columns are int4/int8 and uuid/text.
pub const OWNER_PHOTOS_QUERY: &str = r#"
    SELECT
        p.title,
        p.caption,
        p.likes_count::bigint AS likes_count,
        p.comments_count::bigint AS comments_count,
        a.title AS album_title
    FROM public.photos p
    JOIN public.albums a ON p.album_id = a.id
    WHERE p.user_id::text = $1
    ORDER BY p.created_at DESC
"#;

/// A single, unpooled connection used for the read-only photo check
pub struct Database {
    conn: PgConnection,
}

impl Database {
    pub async fn connect(config: &Config) -> Result<Self> {
        debug!("Connecting to {}", config.connection);

        let conn = PgConnection::connect(config.connection.as_str())
            .await
            .context("could not open database connection")?;

        info!("✅ Connection established");
        Ok(Self { conn })
    }

    /// All photos owned by `owner_id` with their album title, newest first
    pub async fn get_photos_by_owner(&mut self, owner_id: Uuid) -> Result<Vec<PhotoSummary>> {
        self.query_photos(OWNER_PHOTOS_QUERY, owner_id).await
    }

    /// Runs `sql` with the owner bound as `$1` (text) and decodes the rows.
    pub async fn query_photos(&mut self, sql: &str, owner_id: Uuid) -> Result<Vec<PhotoSummary>> {
        let photos = sqlx::query_as::<_, PhotoSummary>(sql)
            .bind(owner_id.to_string())
            .fetch_all(&mut self.conn)
            .await
            .with_context(|| format!("photo query for owner {} failed", owner_id))?;

        info!("Fetched {} photos for owner {}", photos.len(), owner_id);
        Ok(photos)
    }

    pub async fn close(self) -> Result<()> {
        self.conn
            .close()
            .await
            .context("could not close database connection")?;

        info!("Connection closed");
        Ok(())
    }
}

/// Opens a connection, runs the owner query and closes the connection again.
pub async fn fetch_owner_photos(config: &Config) -> Result<Vec<PhotoSummary>> {
    fetch_photos_with(config, OWNER_PHOTOS_QUERY).await
}

/// Scoped form of [`Database::query_photos`].
///
/// The connection is closed whether or not the query succeeded; a query
/// error takes precedence over a close error.
pub async fn fetch_photos_with(config: &Config, sql: &str) -> Result<Vec<PhotoSummary>> {
    let mut db = Database::connect(config).await?;

    let photos = db.query_photos(sql, config.owner_id).await;
    let closed = db.close().await;

    let photos = photos?;
    closed?;
    Ok(photos)
}
