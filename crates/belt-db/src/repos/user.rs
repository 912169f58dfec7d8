//! User repository: assignees for tasks.

use belt_core::User;
use chrono::Utc;

use crate::BeltDb;
use crate::error::DatabaseError;
use crate::helpers::parse_datetime;

const SELECT_COLS: &str = "user_id, username, created_at";

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        user_id: row.get(0)?,
        username: row.get(1)?,
        created_at: parse_datetime(&row.get::<String>(2)?)?,
    })
}

impl BeltDb {
    pub async fn create_user(&self, username: &str) -> Result<User, DatabaseError> {
        let created_at = Utc::now();
        self.conn
            .execute(
                "INSERT INTO users (username, created_at) VALUES (?1, ?2)",
                libsql::params![username, created_at.to_rfc3339()],
            )
            .await?;

        Ok(User {
            user_id: self.conn.last_insert_rowid(),
            username: username.to_string(),
            created_at,
        })
    }

    pub async fn get_user(&self, user_id: i64) -> Result<User, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT {SELECT_COLS} FROM users WHERE user_id = ?1"),
                [user_id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or(DatabaseError::UserNotFound(user_id))?;
        row_to_user(&row)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT {SELECT_COLS} FROM users ORDER BY user_id"),
                (),
            )
            .await?;

        let mut users = Vec::new();
        while let Some(row) = rows.next().await? {
            users.push(row_to_user(&row)?);
        }
        Ok(users)
    }

    pub async fn delete_user(&self, user_id: i64) -> Result<(), DatabaseError> {
        let changed = self
            .conn
            .execute("DELETE FROM users WHERE user_id = ?1", [user_id])
            .await?;
        if changed == 0 {
            return Err(DatabaseError::UserNotFound(user_id));
        }
        Ok(())
    }
}
