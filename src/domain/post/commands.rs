use serde::{Deserialize, Deserializer};

/// Body of `POST /posts`.
///
/// Both keys are required; `null` is accepted and stored as NULL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePost {
	#[serde(deserialize_with = "Option::deserialize")]
	pub title: Option<String>,
	#[serde(deserialize_with = "Option::deserialize")]
	pub content: Option<String>,
}

/// Body of `PATCH /posts/{id}`.
///
/// Outer `None` means the key was absent and the field is left alone,
/// `Some(None)` means an explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdatePost {
	#[serde(default, deserialize_with = "present")]
	pub title: Option<Option<String>>,
	#[serde(default, deserialize_with = "present")]
	pub content: Option<Option<String>>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de>,
{
	T::deserialize(deserializer).map(Some)
}

impl UpdatePost {
	pub fn is_empty(&self) -> bool {
		self.title.is_none() && self.content.is_none()
	}
}

#[cfg(test)]
mod test {
	use super::{CreatePost, UpdatePost};

	#[test]
	fn test_create_requires_both_keys() {
		let err = serde_json::from_str::<CreatePost>(r#"{"content":"B"}"#).unwrap_err();
		assert!(err.to_string().contains("missing field `title`"));

		let err = serde_json::from_str::<CreatePost>(r#"{"title":"A"}"#).unwrap_err();
		assert!(err.to_string().contains("missing field `content`"));
	}

	#[test]
	fn test_create_accepts_null() {
		let cmd = serde_json::from_str::<CreatePost>(r#"{"title":null,"content":"B"}"#).unwrap();
		assert_eq!(
			cmd,
			CreatePost {
				title: None,
				content: Some("B".into())
			}
		);
	}

	#[test]
	fn test_create_rejects_wrong_type() {
		assert!(serde_json::from_str::<CreatePost>(r#"{"title":1,"content":"B"}"#).is_err());
	}

	#[test]
	fn test_update_distinguishes_absent_from_null() {
		let cmd = serde_json::from_str::<UpdatePost>(r#"{"title":null}"#).unwrap();
		assert_eq!(cmd.title, Some(None));
		assert_eq!(cmd.content, None);

		let cmd = serde_json::from_str::<UpdatePost>("{}").unwrap();
		assert!(cmd.is_empty());
	}

	#[test]
	fn test_update_rejects_wrong_type() {
		assert!(serde_json::from_str::<UpdatePost>(r#"{"title":5}"#).is_err());
	}
}
