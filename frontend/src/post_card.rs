use std::rc::Rc;
use yew::prelude::*;
use shared_data::{CardSettings, PostCardView, PostId, PostSummary};

#[derive(Properties, PartialEq)]
pub struct PostCardProps {
	pub post: Rc<PostSummary>,
	/// Takes the path to go to. Usually comes from `use_router_navigate`.
	pub navigate: Callback<String>,
	#[prop_or_default]
	pub settings: Rc<CardSettings>
}

pub fn open_post(navigate: &Callback<String>, id: &PostId) {
	navigate.emit(id.detail_path());
}

/// What the click handler is rebuilt on
fn click_deps(props: &PostCardProps) -> (PostId, Callback<String>) {
	(props.post.post_id.clone(), props.navigate.clone())
}

fn on_card_click<E>(_: E, (id, navigate): &(PostId, Callback<String>)) {
	open_post(navigate, id);
}

#[function_component(PostCard)]
pub fn post_card(props: &PostCardProps) -> Html {
	let view = use_memo(
		(props.post.clone(), props.settings.clone()),
		|(post, settings)| PostCardView::new(post, settings)
	);

	// only rebuilt if the id or the navigator change
	let onclick = use_callback(click_deps(props), on_card_click::<MouseEvent>);

	html! {
		<article class="post-card" id={ format!("post-{}", props.post.post_id) } { onclick }>
			<div class={ classes!("post-card-cover", view.gradient.classes()) }>
				<span class="material-symbols-outlined post-card-icon">{ &view.placeholder_icon }</span>
			</div>
			<div class="post-card-body">
				<h3 class="post-card-title">{ &view.title }</h3>
				<p class="post-card-excerpt">{ &view.excerpt }</p>
				<div class="post-card-meta">
					<span class="post-card-date">{ &view.date }</span>
					if let Some(comments) = &view.comments {
						<span class="post-card-comments">{ " · " }{ comments }</span>
					}
				</div>
				<div class="post-card-footer">
					<span class="post-card-author">
						<span class="post-card-avatar"></span>
						{ "by " }<strong>{ &view.author }</strong>
					</span>
					<span>
						<span class="material-symbols-outlined">{ "favorite" }</span>
						<span class="post-card-likes">{ &view.likes }</span>
					</span>
				</div>
			</div>
		</article>
	}
}
