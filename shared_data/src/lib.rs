mod card;
mod format;
mod gradient;
mod post;

pub use card::{CardSettings, PostCardView};
pub use format::{
	excerpt, format_date, format_date_with, plain_text, truncate_text, truncate_text_to,
	DEFAULT_DATE_FORMAT, DEFAULT_EXCERPT_LEN, ELLIPSIS
};
pub use gradient::{gradient_style, post_gradient, Gradient, CLASSES, PALETTE};
pub use post::{Author, PostId, PostSummary};

pub static BASE_STYLE: &str = r#"
* {
	--body-background: #faf9f7;
	--card-background: #ffffff;
	--card-footer: #f3f1ee;
	--main-text: #2b2522;
	--muted-text: #7a716b;
	--accent: #b5534a;
	--border-color: #e6e1dc;
	font-family: "Pretendard", system-ui, sans-serif;
	color: var(--main-text);
}
body {
	background-color: var(--body-background);
	margin: 0;
}
a {
	text-decoration: none;
}
@media (prefers-color-scheme: dark) {
	* {
		--body-background: #1c1917;
		--card-background: #292524;
		--card-footer: #312c29;
		--main-text: #f5f5f4;
		--muted-text: #a8a29e;
		--border-color: #44403c;
	}
}
"#;

pub static POST_CARD_STYLE: &str = r"
.post-grid {
	display: grid;
	grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
	gap: 24px;
	max-width: 1200px;
	margin: 20px auto;
	padding: 0 16px;
}
.post-card {
	display: flex;
	flex-direction: column;
	background-color: var(--card-background);
	border: 1px solid var(--border-color);
	border-radius: 8px;
	overflow: hidden;
	cursor: pointer;
	transition: box-shadow 300ms, transform 300ms;
}
.post-card:hover {
	box-shadow: 0 12px 24px rgba(0, 0, 0, 0.12);
	transform: translateY(-4px);
}
.post-card-cover {
	aspect-ratio: 16 / 9;
	display: flex;
	align-items: center;
	justify-content: center;
	transition: transform 500ms;
}
.post-card:hover .post-card-cover {
	transform: scale(1.05);
}
.post-card-icon {
	font-size: 60px;
	opacity: 0.3;
}
.post-card-body {
	display: flex;
	flex-direction: column;
	flex: 1;
	padding: 16px 16px 0 16px;
}
.post-card-title {
	font-size: 18px;
	margin: 0 0 8px 0;
	display: -webkit-box;
	-webkit-line-clamp: 2;
	-webkit-box-orient: vertical;
	overflow: hidden;
}
.post-card:hover .post-card-title {
	color: var(--accent);
}
.post-card-excerpt {
	flex: 1;
	font-size: 14px;
	color: var(--muted-text);
	margin: 0 0 24px 0;
	display: -webkit-box;
	-webkit-line-clamp: 3;
	-webkit-box-orient: vertical;
	overflow: hidden;
}
.post-card-meta {
	font-size: 12px;
	color: var(--muted-text);
	margin-bottom: 12px;
}
.post-card-footer {
	display: flex;
	align-items: center;
	justify-content: space-between;
	margin: auto -16px 0 -16px;
	padding: 12px 16px;
	border-top: 1px solid var(--border-color);
	background-color: var(--card-footer);
	font-size: 12px;
}
.post-card-avatar {
	display: inline-block;
	width: 24px;
	height: 24px;
	border-radius: 50%;
	margin-right: 8px;
	vertical-align: middle;
	background-image: linear-gradient(135deg, var(--accent), #d9877f);
}
.post-card-likes {
	font-weight: bold;
	margin-left: 4px;
}
";
