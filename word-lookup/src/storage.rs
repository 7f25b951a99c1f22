use chrono::NaiveDateTime;
use sqlx::{
    migrate::MigrateDatabase, query, query_as, sqlite::SqlitePoolOptions, FromRow, Pool, Sqlite,
};

use crate::presentation::Theme;

pub const DEFAULT_DB_URL: &str = "sqlite://word-lookup.db";
const THEME_KEY: &str = "theme";

#[derive(Debug, FromRow)]
pub struct PreferenceEntry {
    pub key: String,
    pub value: String,
    pub updated_at: NaiveDateTime,
}

pub struct Storage {
    pool: Pool<Sqlite>,
}

impl Storage {
    pub async fn initialize(db_url: &str) -> sqlx::Result<Self> {
        let in_memory = db_url.contains(":memory:");
        if !in_memory && !Sqlite::database_exists(db_url).await.unwrap_or(false) {
            Sqlite::create_database(db_url).await?;
        }
        // each connection to an in-memory database sees its own empty database
        let pool = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect(db_url)
                .await?
        } else {
            SqlitePoolOptions::new().connect(db_url).await?
        };
        sqlx::migrate!().run(&pool).await?;
        tracing::debug!(db_url, "preference storage ready");
        Ok(Self { pool })
    }
}

impl Storage {
    pub async fn get_preference(&self, key: &str) -> sqlx::Result<Option<PreferenceEntry>> {
        query_as("SELECT key, value, updated_at FROM preferences WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn set_preference(&self, key: &str, value: &str) -> sqlx::Result<()> {
        query(
            "
            INSERT INTO preferences(key, value, updated_at) VALUES(?, ?, CURRENT_TIMESTAMP)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP;
            ",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map(|_| ())
    }

    /// Reads the stored theme, light when nothing was stored yet.
    pub async fn load_theme(&self) -> sqlx::Result<Theme> {
        let Some(entry) = self.get_preference(THEME_KEY).await? else {
            return Ok(Theme::default());
        };
        tracing::debug!(
            key = %entry.key,
            value = %entry.value,
            updated_at = %entry.updated_at,
            "restored preference"
        );
        Ok(Theme::from_stored(&entry.value))
    }

    pub async fn save_theme(&self, theme: Theme) -> sqlx::Result<()> {
        self.set_preference(THEME_KEY, theme.as_str()).await
    }
}

#[cfg(test)]
pub(crate) async fn memory_storage() -> Storage {
    Storage::initialize("sqlite::memory:").await.unwrap()
}
