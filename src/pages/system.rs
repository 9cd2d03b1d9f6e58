use leptos::prelude::*;

use crate::components::story_graph::{StoryGraphCanvas, StoryGraphController, generate_system_graph};

/// The anchored workflow view: system nodes connected through named anchor
/// points, routed as curves.
#[component]
pub fn SystemMap() -> impl IntoView {
	let controller = StoryGraphController::new();
	let graph_data = Signal::derive(move || generate_system_graph(1000.0, 600.0));

	view! {
		<main class="page">
			<section class="canvas-card">
				<div class="canvas-card-header">
					<h1>"Sistem Haritası"</h1>
					<a href="/">"Hikaye ağına dön"</a>
				</div>

				<div class="canvas-frame">
					<div class="canvas-toolbar">
						<button title="Yakınlaştır" on:click=move |_| controller.zoom_in()>
							"+"
						</button>
						<button title="Uzaklaştır" on:click=move |_| controller.zoom_out()>
							"−"
						</button>
						<button title="Sıfırla" on:click=move |_| controller.reset_map()>
							"⟳"
						</button>
					</div>

					<StoryGraphCanvas data=graph_data controller=controller />
				</div>
			</section>
		</main>
	}
}
