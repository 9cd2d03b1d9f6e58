use leptos::prelude::*;

/// Decorative animated logo: a miniature story network that draws itself.
#[component]
pub fn Logo() -> impl IntoView {
	view! {
		<svg class="logo" viewBox="0 0 140 40" role="img" aria-label="Kırılım">
			<g stroke="#6366f1" stroke-width="1.5" fill="none">
				<line x1="8" y1="20" x2="22" y2="10">
					<animate attributeName="opacity" values="0.3;1;0.3" dur="3s" repeatCount="indefinite" />
				</line>
				<line x1="8" y1="20" x2="22" y2="30">
					<animate
						attributeName="opacity"
						values="0.3;1;0.3"
						dur="3s"
						begin="0.6s"
						repeatCount="indefinite"
					/>
				</line>
				<line x1="22" y1="10" x2="34" y2="20">
					<animate
						attributeName="opacity"
						values="0.3;1;0.3"
						dur="3s"
						begin="1.2s"
						repeatCount="indefinite"
					/>
				</line>
			</g>
			<g fill="#6366f1">
				<circle cx="8" cy="20" r="4" />
				<circle cx="22" cy="10" r="3" />
				<circle cx="22" cy="30" r="3" />
				<circle cx="34" cy="20" r="3" fill="#8b5cf6" />
			</g>
			<text x="46" y="26" font-size="16" font-weight="600" fill="#111827">
				"Kırılım"
			</text>
		</svg>
	}
}
