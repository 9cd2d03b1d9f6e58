use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};

use crate::api;
use crate::components::story_graph::{NodeDraft, StoryGraphController, rand_simple, schedule_once};

const CATEGORIES: &[&str] = &[
	"Fantastik",
	"Bilim Kurgu",
	"Macera",
	"Romantik",
	"Gerilim",
	"Gizem",
	"Aksiyon",
	"Korku",
];

const COLORS: &[(&str, &str)] = &[
	("#6366f1", "Mor"),
	("#8b5cf6", "Eflatun"),
	("#ec4899", "Pembe"),
	("#10b981", "Yeşil"),
	("#f59e0b", "Turuncu"),
	("#ef4444", "Kırmızı"),
];

/// Delay before a freshly created story gets spotlighted on the canvas.
const SPOTLIGHT_DELAY_MS: i32 = 500;

/// Story-creation form. Plain data entry: it posts the story to the API
/// stub, inserts a node, and spotlights it shortly after.
#[component]
pub fn CreateStoryModal(open: RwSignal<bool>, controller: StoryGraphController) -> impl IntoView {
	let title = RwSignal::new(String::new());
	let excerpt = RwSignal::new(String::new());
	let category = RwSignal::new(String::new());
	let color = RwSignal::new(COLORS[0].0.to_owned());
	let submissions = RwSignal::new(0usize);

	let reset = move || {
		title.set(String::new());
		excerpt.set(String::new());
		category.set(String::new());
		color.set(COLORS[0].0.to_owned());
	};

	let submit = move |_: leptos::ev::MouseEvent| {
		if title.get().is_empty() || excerpt.get().is_empty() || category.get().is_empty() {
			return;
		}
		let seed = submissions.get();
		submissions.set(seed + 1);

		let story = api::stories::NewStory {
			title: title.get(),
			author: "@kullanici".to_owned(),
			category: category.get(),
			excerpt: excerpt.get(),
			color: color.get(),
			connections: 0,
		};
		spawn_local(async move {
			if let Err(err) = api::stories::create(&story).await {
				warn!("story create request failed: {:?}", err);
			}
		});

		let draft = NodeDraft {
			x: rand_simple(seed * 2) * 800.0 + 100.0,
			y: rand_simple(seed * 2 + 1) * 400.0 + 100.0,
			title: title.get(),
			author: "@kullanici".to_owned(),
			excerpt: excerpt.get(),
			category: category.get(),
			color: color.get(),
			border_color: None,
			connections: 0,
			is_starting_point: false,
		};
		let Some(id) = controller.add_node(draft) else {
			return;
		};
		info!("story created as node {}", id);
		reset();
		open.set(false);

		schedule_once(
			move || controller.highlight_node_from_story(id),
			SPOTLIGHT_DELAY_MS,
		);
	};

	view! {
		<Show when=move || open.get()>
			<div class="modal-backdrop" on:click=move |_| open.set(false)>
				<div class="modal" on:click=|ev| ev.stop_propagation()>
					<h3>"Yeni Hikaye Başlat"</h3>
					<p class="modal-hint">
						"Hikaye ağına yeni bir düğüm ekleyin. Hikayeniz diğer yazarlar tarafından devam ettirilebilir."
					</p>

					<label for="story-title">"Hikaye Başlığı"</label>
					<input
						id="story-title"
						prop:value=move || title.get()
						on:input=move |ev| title.set(event_target_value(&ev))
						placeholder="Hikayenizin başlığını girin"
					/>

					<label for="story-excerpt">"Hikaye Başlangıcı"</label>
					<textarea
						id="story-excerpt"
						prop:value=move || excerpt.get()
						on:input=move |ev| excerpt.set(event_target_value(&ev))
						placeholder="Hikayenizin ilk paragrafını yazın..."
					/>

					<label for="story-category">"Tür"</label>
					<select
						id="story-category"
						on:change=move |ev| category.set(event_target_value(&ev))
					>
						<option value="" selected=true disabled=true>
							"Tür seçin"
						</option>
						{CATEGORIES
							.iter()
							.map(|c| view! { <option value={*c}>{*c}</option> })
							.collect_view()}
					</select>

					<label>"Renk"</label>
					<div class="color-row">
						{COLORS
							.iter()
							.map(|(value, label)| {
								let value = *value;
								view! {
									<button
										type="button"
										class="color-swatch"
										title={*label}
										style:background-color=value
										on:click=move |_| color.set(value.to_owned())
									/>
								}
							})
							.collect_view()}
					</div>

					<div class="modal-actions">
						<button on:click=move |_| open.set(false)>"İptal"</button>
						<button class="primary" on:click=submit>
							"Hikayeyi Başlat"
						</button>
					</div>
				</div>
			</div>
		</Show>
	}
}
