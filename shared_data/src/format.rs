use chrono::NaiveDateTime;
use pulldown_cmark::{Event, Options, Parser, TagEnd};
use std::{borrow::Cow, fmt::Write};

/// How many characters an excerpt gets, counting the ellipsis
pub const DEFAULT_EXCERPT_LEN: usize = 100;
pub const ELLIPSIS: &str = "...";
/// e.g. `Jan 15, 2024`
pub const DEFAULT_DATE_FORMAT: &str = "%b %-d, %Y";

#[must_use]
pub fn truncate_text(text: &str) -> Cow<'_, str> {
	truncate_text_to(text, DEFAULT_EXCERPT_LEN)
}

/// Cuts `text` down to at most `max` chars. If anything had to be cut, the result ends in
/// [`ELLIPSIS`], and the ellipsis counts towards `max`, so running this over its own output
/// never changes anything.
#[must_use]
pub fn truncate_text_to(text: &str, max: usize) -> Cow<'_, str> {
	// if there's no `max`th char, it already fits
	let Some((cut, _)) = text.char_indices().nth(max) else {
		return Cow::Borrowed(text);
	};

	let marker_len = ELLIPSIS.chars().count();
	if max <= marker_len {
		return Cow::Borrowed(&text[..cut]);
	}

	let keep = text.char_indices()
		.nth(max - marker_len)
		.map_or(text.len(), |(idx, _)| idx);

	Cow::Owned(format!("{}{ELLIPSIS}", text[..keep].trim_end()))
}

/// Flattens markdown into the words a reader would see, with all whitespace collapsed to single
/// spaces. Raw html is dropped.
#[must_use]
pub fn plain_text(markup: &str) -> String {
	let opts = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
	let mut out = String::with_capacity(markup.len());

	for ev in Parser::new_ext(markup, opts) {
		match ev {
			Event::Text(text) | Event::Code(text) => out.push_str(&text),
			Event::SoftBreak | Event::HardBreak | Event::Rule => out.push(' '),
			// inline tags end in the middle of a word, so they can't add a space
			Event::End(TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link | TagEnd::Image) => (),
			Event::End(_) => out.push(' '),
			_ => ()
		}
	}

	out.split_whitespace()
		.collect::<Vec<_>>()
		.join(" ")
}

#[must_use]
pub fn excerpt(content: &str, max: usize) -> String {
	truncate_text_to(&plain_text(content), max).into_owned()
}

#[must_use]
pub fn format_date(dt: &NaiveDateTime) -> String {
	format_date_with(dt, DEFAULT_DATE_FORMAT)
}

/// Formats with a strftime-style string, and if the string is one chrono can't format with, just
/// uses [`DEFAULT_DATE_FORMAT`] instead.
#[must_use]
pub fn format_date_with(dt: &NaiveDateTime, fmt: &str) -> String {
	let mut out = String::new();
	if write!(out, "{}", dt.format(fmt)).is_ok() {
		return out;
	}

	dt.format(DEFAULT_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::NaiveDate;

	fn date() -> NaiveDateTime {
		NaiveDate::from_ymd_opt(2024, 1, 15)
			.and_then(|d| d.and_hms_opt(10, 30, 0))
			.unwrap()
	}

	#[test]
	fn short_text_is_untouched() {
		assert!(matches!(truncate_text(""), Cow::Borrowed("")));
		assert!(matches!(truncate_text("a short post"), Cow::Borrowed("a short post")));

		let exact = "x".repeat(DEFAULT_EXCERPT_LEN);
		assert_eq!(truncate_text(&exact), exact);
	}

	#[test]
	fn long_text_fits_with_ellipsis() {
		let long = "word ".repeat(60);
		let cut = truncate_text(&long);

		assert!(cut.ends_with(ELLIPSIS));
		assert!(cut.chars().count() <= DEFAULT_EXCERPT_LEN);
		assert!(!cut.trim_end_matches(ELLIPSIS).ends_with(' '));
	}

	#[test]
	fn truncating_twice_changes_nothing() {
		let long = "the quick brown fox jumps over the lazy dog ".repeat(10);
		let once = truncate_text(&long).into_owned();
		assert_eq!(truncate_text(&once), once);

		let once = truncate_text_to(&long, 2).into_owned();
		assert_eq!(once, "th");
		assert_eq!(truncate_text_to(&once, 2), once);
	}

	#[test]
	fn multibyte_chars_are_never_split() {
		let korean = "안녕하세요".repeat(30);
		let cut = truncate_text_to(&korean, 10);
		assert_eq!(cut, "안녕하세요안녕...");

		let emoji = "🦀".repeat(20);
		assert_eq!(truncate_text_to(&emoji, 5).chars().count(), 5);
	}

	#[test]
	fn markdown_is_flattened() {
		let md = "# Title\n\nSome **bold** and `code`\nacross lines.\n\n- one\n- two\n\n<div>raw</div>";
		assert_eq!(plain_text(md), "Title Some bold and code across lines. one two");
		assert_eq!(excerpt(md, 14), "Title Some...");
	}

	#[test]
	fn dates_are_formatted() {
		assert_eq!(format_date(&date()), "Jan 15, 2024");
		assert_eq!(format_date_with(&date(), "%Y-%m-%d %H:%M"), "2024-01-15 10:30");
		// dangling `%` isn't a valid specifier
		assert_eq!(format_date_with(&date(), "%Y %"), "Jan 15, 2024");
	}
}
