use leptos::prelude::*;

const WEEKDAYS: &[&str] = &["Pzt", "Sal", "Çar", "Per", "Cum", "Cmt", "Paz"];
const STORY_COUNTS: &[u32] = &[42, 61, 38, 75, 89, 120, 96];

/// Static weekly-activity bar chart. Pure rendering, no state.
#[component]
pub fn StatsChart() -> impl IntoView {
	let max = STORY_COUNTS.iter().copied().max().unwrap_or(1) as f64;
	view! {
		<svg class="stats-chart" viewBox="0 0 280 120" role="img">
			{STORY_COUNTS
				.iter()
				.zip(WEEKDAYS)
				.enumerate()
				.map(|(i, (&count, day))| {
					let height = (count as f64 / max) * 90.0;
					let x = 10.0 + i as f64 * 38.0;
					view! {
						<g>
							<rect
								x=x
								y={100.0 - height}
								width="26"
								height=height
								rx="3"
								fill="#6366f1"
								opacity="0.8"
							/>
							<text x={x + 13.0} y="114" text-anchor="middle" font-size="9" fill="#6b7280">
								{*day}
							</text>
						</g>
					}
				})
				.collect_view()}
		</svg>
	}
}
