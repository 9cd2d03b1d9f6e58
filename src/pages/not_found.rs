use leptos::prelude::*;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<main class="page">
			<h1>"404: Sayfa bulunamadı"</h1>
			<p>
				<a href="/">"Hikaye ağına dön"</a>
			</p>
		</main>
	}
}
