use leptos::prelude::*;

/// Compact story card shown in the side lists. "Show on map" routes the
/// story id back into the canvas spotlight.
#[component]
pub fn StoryCard(
	#[prop(into)] title: String,
	#[prop(into)] author: String,
	#[prop(into)] description: String,
	connections: u32,
	node_id: u32,
	on_highlight: Callback<u32>,
	#[prop(into, default = String::new())] time: String,
) -> impl IntoView {
	let time_label = (!time.is_empty()).then_some(time);

	view! {
		<div class="story-card">
			<div class="story-card-header">
				<h4>{title}</h4>
				<span class="story-card-author">{author}</span>
			</div>
			<p class="story-card-description">{description}</p>
			<div class="story-card-footer">
				<span>{connections} " Bağlantı"</span>
				{time_label.map(|t| view! { <span class="story-card-time">{t}</span> })}
				<button class="story-card-link" on:click=move |_| on_highlight.run(node_id)>
					"Haritada Göster"
				</button>
			</div>
		</div>
	}
}
