use std::rc::Rc;
use gloo_console::error;
use yew::prelude::*;
use shared_data::CardSettings;
use crate::{
	inline_json, parse_settings, parse_summaries, use_router_navigate,
	post_grid::PostGrid,
	style::SharedStyle,
	LoadErr, SETTINGS_ID, SUMMARIES_ID
};

#[function_component(Home)]
pub fn home() -> Html {
	let navigate = use_router_navigate();

	// The page these are embedded in doesn't change under us, so read them once
	let posts = use_memo((), |_| parse_summaries(inline_json(SUMMARIES_ID)));
	let settings = use_memo((), |_| parse_settings(inline_json(SETTINGS_ID))
		.unwrap_or_else(|err| {
			error!(format!("Ignoring card settings: {err}"));
			CardSettings::default()
		})
	);

	let posts_html = match &*posts {
		Err(LoadErr::Missing) => html! { <p>{ "No posts yet" }</p> },
		Err(err) => html! { <><h1>{ "Couldn't get posts" }</h1><p>{ err.to_string() }</p></> },
		Ok(list) if list.is_empty() => html! { <p>{ "No posts yet" }</p> },
		Ok(list) => html! {
			<PostGrid posts={ Rc::clone(list) } { navigate } { settings } />
		}
	};

	html! {
		<>
			<SharedStyle />
			{ posts_html }
		</>
	}
}
