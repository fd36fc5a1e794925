use yew::prelude::*;
use super::style::SharedStyle;

#[derive(Properties, PartialEq, Eq)]
pub struct PostProps {
	pub id: String
}

// The detail page itself is served by the rest of the site; this just marks where a card led.
#[function_component(PostPlaceholder)]
pub fn post_placeholder(props: &PostProps) -> Html {
	html! {
		<>
			<SharedStyle />
			<div id="post-content">
				<h2>{ format!("Post {}", props.id) }</h2>
				<a href="/">{ "< Back to posts" }</a>
			</div>
		</>
	}
}
