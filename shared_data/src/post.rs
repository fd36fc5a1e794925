use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Post ids come back from the API as numbers, but nothing on this side cares about that, so
/// string ids are accepted as well.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
	Int(u64),
	Text(String)
}

impl PostId {
	/// Where the detail view for this post lives
	#[must_use]
	pub fn detail_path(&self) -> String {
		format!("/posts/{self}")
	}
}

impl fmt::Display for PostId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Int(id) => write!(f, "{id}"),
			Self::Text(id) => f.write_str(id)
		}
	}
}

impl From<u64> for PostId {
	fn from(id: u64) -> Self {
		Self::Int(id)
	}
}

impl From<&str> for PostId {
	fn from(id: &str) -> Self {
		Self::Text(id.to_string())
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
	pub nickname: String,
	#[serde(default)]
	pub user_id: Option<u64>
}

/// One entry of the post list response
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
	pub post_id: PostId,
	pub title: String,
	pub content: String,
	pub created_at: NaiveDateTime,
	#[serde(default)]
	pub updated_at: Option<NaiveDateTime>,
	// `None` means we don't know, not that there are zero of them
	#[serde(default)]
	pub comment_count: Option<u32>,
	#[serde(default)]
	pub like_count: Option<u32>,
	#[serde(default)]
	pub view_count: Option<u32>,
	pub author: Author
}

impl PostSummary {
	#[must_use]
	pub fn display_author(&self) -> &str {
		if self.author.nickname.is_empty() {
			"Unknown"
		} else {
			self.author.nickname.as_str()
		}
	}

	/// Parses the JSON array the list endpoint hands back
	pub fn list_from_json(json: &str) -> Result<Vec<Self>, serde_json::Error> {
		serde_json::from_str(json)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn list_response_decodes() {
		let posts = PostSummary::list_from_json(r#"[{
			"postId": 7,
			"title": "First",
			"content": "hello",
			"createdAt": "2024-01-15T10:30:00",
			"updatedAt": "2024-01-16T08:00:00.123456",
			"viewCount": 12,
			"likeCount": 3,
			"author": { "nickname": "june", "userId": 2 }
		}, {
			"postId": "abc123",
			"title": "Second",
			"content": "",
			"createdAt": "2024-02-01T00:00:00",
			"commentCount": 5,
			"author": { "nickname": "" }
		}]"#).unwrap();

		assert_eq!(posts.len(), 2);
		assert_eq!(posts[0].post_id, PostId::Int(7));
		assert_eq!(posts[0].like_count, Some(3));
		assert_eq!(posts[0].comment_count, None);
		assert!(posts[0].updated_at.is_some());
		assert_eq!(posts[1].post_id, PostId::from("abc123"));
		assert_eq!(posts[1].comment_count, Some(5));
		assert_eq!(posts[1].like_count, None);
		assert_eq!(posts[1].display_author(), "Unknown");
	}

	#[test]
	fn detail_path_uses_raw_id() {
		assert_eq!(PostId::from("abc123").detail_path(), "/posts/abc123");
		assert_eq!(PostId::from(42_u64).detail_path(), "/posts/42");
	}
}
