use std::{fmt, rc::Rc};
use gloo_console::{error, log};
use yew_router::prelude::*;
use yew::prelude::*;
use home::Home;
use post::PostPlaceholder;
use shared_data::{CardSettings, PostSummary};

mod home;
mod post;
mod post_card;
mod post_grid;
mod style;

/// Where the host page puts the JSON array of post summaries
pub const SUMMARIES_ID: &str = "post-summaries";
/// Where the host page can put a JSON object of `CardSettings`
pub const SETTINGS_ID: &str = "card-settings";

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
	#[not_found]
	#[at("/")]
	Home,
	#[at("/posts/:id")]
	Post { id: String }
}

fn switch(route: Route) -> Html {
	match route {
		Route::Home => html! { <Home /> },
		Route::Post { id } => html! { <PostPlaceholder id={ id } /> }
	}
}

#[derive(Debug, PartialEq, Eq)]
pub enum LoadErr {
	Missing,
	Decode(String)
}

impl fmt::Display for LoadErr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Missing => f.write_str("Nothing was embedded in the page"),
			Self::Decode(err) => write!(f, "There was an error while decoding: {err}")
		}
	}
}

pub fn inline_json(id: &str) -> Option<String> {
	web_sys::window()?
		.document()?
		.get_element_by_id(id)?
		.text_content()
}

pub fn parse_summaries(raw: Option<String>) -> Result<Rc<Vec<Rc<PostSummary>>>, LoadErr> {
	let raw = raw.filter(|r| !r.trim().is_empty()).ok_or(LoadErr::Missing)?;

	PostSummary::list_from_json(&raw)
		.map(|posts| Rc::new(posts.into_iter().map(Rc::new).collect()))
		.map_err(|e| LoadErr::Decode(e.to_string()))
}

// Settings are optional, so only a bad blob is an error
pub fn parse_settings(raw: Option<String>) -> Result<CardSettings, LoadErr> {
	match raw.filter(|r| !r.trim().is_empty()) {
		None => Ok(CardSettings::default()),
		Some(raw) => CardSettings::from_json(&raw)
			.map_err(|e| LoadErr::Decode(e.to_string()))
	}
}

/// The route that leads to exactly `path`. `recognize` falls back to `Home` for anything it
/// doesn't know, so that fallback has to be filtered out here.
pub fn route_for(path: &str) -> Option<Route> {
	Route::recognize(path).filter(|route| route.to_path() == path)
}

/// Turns the router's navigator into the plain `Callback<String>` cards take, so they don't need
/// to know about routes at all.
#[hook]
pub fn use_router_navigate() -> Callback<String> {
	let navigator = use_navigator();

	use_callback(navigator, |path: String, navigator| {
		match (navigator, route_for(&path)) {
			(Some(nav), Some(route)) => nav.push(&route),
			_ => {
				log!(format!("No route for {path}, leaving the app"));
				let res = web_sys::window()
					.map(|win| win.location().set_href(&path));

				if let Some(Err(err)) = res {
					error!(format!("Couldn't navigate to {path}:"), err);
				}
			}
		}
	})
}

#[function_component(Frontend)]
pub fn frontend() -> Html {
	html! {
		<BrowserRouter>
			<Switch<Route> render={switch} />
		</BrowserRouter>
	}
}

fn main() {
	console_error_panic_hook::set_once();
	yew::Renderer::<Frontend>::new().render();
}
