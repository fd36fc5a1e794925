use serde::{Deserialize, Serialize};
use crate::{
	format::{excerpt, format_date_with, DEFAULT_DATE_FORMAT, DEFAULT_EXCERPT_LEN},
	gradient::{post_gradient, Gradient},
	PostSummary
};

/// Knobs the host page can turn for every card it shows
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardSettings {
	pub excerpt_len: usize,
	pub date_format: String,
	/// Material symbol shown where a post image would go. Posts don't have images yet.
	pub placeholder_icon: String
}

impl Default for CardSettings {
	fn default() -> Self {
		Self {
			excerpt_len: DEFAULT_EXCERPT_LEN,
			date_format: DEFAULT_DATE_FORMAT.to_string(),
			placeholder_icon: "article".to_string()
		}
	}
}

impl CardSettings {
	/// Only takes an object. serde would also fill the fields in order from an array, which is
	/// never what the host page meant.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		match serde_json::from_str::<serde_json::Value>(json)? {
			value @ serde_json::Value::Object(_) => serde_json::from_value(value),
			_ => Err(serde::de::Error::custom("card settings must be a JSON object"))
		}
	}
}

/// Everything a card shows, worked out ahead of rendering
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostCardView {
	pub title: String,
	pub excerpt: String,
	pub date: String,
	pub comments: Option<String>,
	pub likes: String,
	pub author: String,
	pub gradient: Gradient,
	pub placeholder_icon: String,
	pub target: String
}

impl PostCardView {
	#[must_use]
	pub fn new(post: &PostSummary, settings: &CardSettings) -> Self {
		Self {
			title: post.title.clone(),
			excerpt: excerpt(&post.content, settings.excerpt_len),
			date: format_date_with(&post.created_at, &settings.date_format),
			comments: post.comment_count.map(|count| format!("{count} Comments")),
			likes: post.like_count.unwrap_or(0).to_string(),
			author: post.display_author().to_string(),
			gradient: post_gradient(&post.post_id),
			placeholder_icon: settings.placeholder_icon.clone(),
			target: post.post_id.detail_path()
		}
	}
}
