use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, FromRow, Row};

/// The single record this service manages.
///
/// `title` and `content` are nullable in storage, so they stay `Option` on
/// the wire as well and serialize as `null` when unset.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Post {
	pub id: i64,
	pub title: Option<String>,
	pub content: Option<String>,
}

impl<'r> FromRow<'r, SqliteRow> for Post {
	fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
		Ok(Self {
			id: row.try_get("id")?,
			title: row.try_get("title")?,
			content: row.try_get("content")?,
		})
	}
}
