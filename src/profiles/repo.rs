use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

/// One student record. Written only through external administration;
/// the application itself never inserts or updates.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StudentProfile {
    pub id: i64,
    pub name: String,
    pub roll_no: String,
    pub branch: String,
    pub marks: i32,
    /// Path under the media root, e.g. `profile_pics/asha.jpg`.
    pub photo: String,
}

impl fmt::Display for StudentProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.roll_no)
    }
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn list_all(&self) -> anyhow::Result<Vec<StudentProfile>>;
}

pub struct PgProfiles {
    db: PgPool,
}

impl PgProfiles {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileStore for PgProfiles {
    async fn list_all(&self) -> anyhow::Result<Vec<StudentProfile>> {
        let rows = sqlx::query_as::<_, StudentProfile>(
            r#"
            SELECT id, name, roll_no, branch, marks, photo
            FROM student_profiles
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }
}
