use leptos::prelude::*;

use crate::components::create_story::CreateStoryModal;
use crate::components::logo::Logo;
use crate::components::stats_chart::StatsChart;
use crate::components::story_card::StoryCard;
use crate::components::story_graph::{StoryGraphCanvas, StoryGraphController, generate_story_graph};

/// Swatches offered in the detail overlay. The note about authorship is a
/// UI promise only; the canvas accepts any recolor.
const AVAILABLE_COLORS: &[&str] = &[
	"#6366f1", "#8b5cf6", "#ec4899", "#10b981", "#f59e0b", "#ef4444", "#06b6d4", "#14b8a6",
];

/// Default Home Page: the story network with its toolbar, detail overlay,
/// story cards, and stats.
#[component]
pub fn Home() -> impl IntoView {
	let controller = StoryGraphController::new();
	let create_open = RwSignal::new(false);
	let graph_data = Signal::derive(move || generate_story_graph(1000.0, 600.0));

	let on_highlight = Callback::new(move |id: u32| controller.highlight_node_from_story(id));
	let selected = controller.selected_story();

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<nav class="topbar">
				<Logo />
				<div class="topbar-actions">
					<button class="primary" on:click=move |_| create_open.set(true)>
						"Hikaye Başlat"
					</button>
					<a href="/login" class="topbar-icon">
						"Giriş"
					</a>
				</div>
			</nav>

			<main class="page">
				<section class="canvas-card">
					<div class="canvas-card-header">
						<h1>"Kırılım"</h1>
						<input type="text" placeholder="Hikayelerde ara..." class="search" />
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

						<div class="canvas-hint">
							<kbd>"Ctrl"</kbd>
							<span>" tuşuna basılı tutarak haritayı 3 boyutlu hareket ettirebilirsiniz"</span>
						</div>

						<StoryGraphCanvas data=graph_data controller=controller />
					</div>
				</section>

				{move || {
					selected
						.get()
						.map(|node| {
							let connected = controller.connected_stories(node.id);
							let node_id = node.id;
							view! {
								<div class="overlay-backdrop" on:click=move |_| controller.clear_highlights()>
									<div class="overlay" on:click=|ev| ev.stop_propagation()>
										<div class="overlay-header">
											<h3>{node.title.clone()}</h3>
										</div>
										<div class="overlay-meta">
											<span>{node.author.clone()}</span>
											<span>{node.category.clone()}</span>
											<span>{node.connections} " Bağlantı"</span>
										</div>
										<p class="overlay-excerpt">{node.excerpt.clone()}</p>

										<h4>"Renk Seçimi"</h4>
										<div class="color-row">
											{AVAILABLE_COLORS
												.iter()
												.map(|color| {
													let color = *color;
													view! {
														<button
															class="color-swatch"
															style:background-color=color
															on:click=move |_| controller.change_node_color(node_id, color)
														/>
													}
												})
												.collect_view()}
										</div>
										<p class="overlay-note">
											"Not: Renk değişikliği sadece hikayenin ilk yazarı tarafından yapılabilir."
										</p>

										<h4>"Bağlantılı Hikayeler"</h4>
										<ul class="overlay-connected">
											{connected
												.into_iter()
												.map(|story| {
													view! {
														<li>
															<span
																class="dot"
																style:background-color=story.color.clone()
															/>
															{story.title}
															<span class="overlay-author">{story.author}</span>
														</li>
													}
												})
												.collect_view()}
										</ul>
									</div>
								</div>
							}
						})
				}}

				<div class="card-grid">
					<section class="card">
						<h2>"Popüler Hikayeler"</h2>
						<StoryCard
							title="Gizemli Orman"
							author="@zeynepyazar"
							description="Ormanda kaybolan bir grup arkadaşın hayatta kalma mücadelesi..."
							connections=324
							node_id=1
							on_highlight=on_highlight
						/>
						<StoryCard
							title="Kayıp Şehir"
							author="@ahmetyilmaz"
							description="Antik bir medeniyetin izlerini takip eden arkeologların macerası..."
							connections=256
							node_id=2
							on_highlight=on_highlight
						/>
					</section>

					<section class="card">
						<h2>"Son Eklenenler"</h2>
						<StoryCard
							title="Zaman Yolcusu"
							author="@elifdemir"
							description="2150 yılından gelen bir mektupla başlayan, zamanlar arası bir hikaye..."
							connections=42
							node_id=3
							on_highlight=on_highlight
							time="15 dakika önce"
						/>
						<StoryCard
							title="Paralel Evren"
							author="@canözturk"
							description="Kuantum deneyi sırasında açılan bir portalın bağladığı evrenler..."
							connections=28
							node_id=4
							on_highlight=on_highlight
							time="1 saat önce"
						/>
					</section>

					<section class="card">
						<h2>"İstatistikler"</h2>
						<div class="stat-tiles">
							<div class="stat-tile">
								<div class="stat-value">"1,284"</div>
								<div class="stat-label">"Aktif Hikaye"</div>
							</div>
							<div class="stat-tile">
								<div class="stat-value">"3,642"</div>
								<div class="stat-label">"Toplam Yazar"</div>
							</div>
						</div>
						<StatsChart />
					</section>
				</div>
			</main>

			<CreateStoryModal open=create_open controller=controller />
		</ErrorBoundary>
	}
}
