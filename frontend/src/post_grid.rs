use std::rc::Rc;
use yew::prelude::*;
use shared_data::{CardSettings, PostSummary};
use crate::post_card::PostCard;

#[derive(Properties, PartialEq)]
pub struct PostGridProps {
	pub posts: Rc<Vec<Rc<PostSummary>>>,
	pub navigate: Callback<String>,
	#[prop_or_default]
	pub settings: Rc<CardSettings>
}

#[function_component(PostGrid)]
pub fn post_grid(props: &PostGridProps) -> Html {
	html! {
		<>
			<style>{ shared_data::POST_CARD_STYLE }{ shared_data::gradient_style() }</style>
			<div id="posts" class="post-grid">
				{
					props.posts.iter().map(|post| html! {
						<PostCard
							key={ post.post_id.to_string() }
							post={ post.clone() }
							navigate={ props.navigate.clone() }
							settings={ props.settings.clone() }
						/>
					}).collect::<Html>()
				}
			</div>
		</>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use shared_data::PostId;

	#[tokio::test]
	async fn renders_a_card_per_post() {
		let html = yew::ServerRenderer::<PostGrid>::with_props(|| {
			let posts = PostSummary::list_from_json(r#"[
				{ "postId": 1, "title": "One", "content": "a", "createdAt": "2024-01-01T00:00:00", "author": { "nickname": "x" } },
				{ "postId": "two", "title": "Two", "content": "b", "createdAt": "2024-01-02T00:00:00", "author": { "nickname": "y" } }
			]"#).unwrap();

			PostGridProps {
				posts: Rc::new(posts.into_iter().map(Rc::new).collect()),
				navigate: Callback::from(|_: String| ()),
				settings: Rc::default()
			}
		}).render().await;

		assert_eq!(html.matches("<article").count(), 2);
		assert!(html.contains(&format!(r#"id="post-{}""#, PostId::from(1_u64))));
		assert!(html.contains(r#"id="post-two""#));
		// the cover classes cards use are styled by the grid
		assert!(html.contains(&shared_data::gradient_style()));
	}
}
