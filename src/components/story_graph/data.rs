//! Initial dataset providers. The canvas itself is data-agnostic; these
//! build the story network shown on the home page and the anchored system
//! graph used by the workflow view.

use super::types::{Connection, GraphData, StoryNode};

/// Simple pseudo-random number generator (deterministic for consistency).
pub(crate) fn rand_simple(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0
}

fn story(
	id: u32,
	position: (f64, f64),
	title: &str,
	author: &str,
	connections: u32,
	category: &str,
	color: &str,
	excerpt: &str,
) -> StoryNode {
	StoryNode {
		id,
		x: position.0,
		y: position.1,
		size: 0.0,
		title: title.to_owned(),
		author: author.to_owned(),
		excerpt: excerpt.to_owned(),
		category: category.to_owned(),
		color: color.to_owned(),
		border_color: None,
		connections,
		is_starting_point: false,
	}
}

/// The story network: eleven stories laid out as fractions of the container,
/// sized by the store against the set's maximum connection count.
pub fn generate_story_graph(width: f64, height: f64) -> GraphData {
	let nodes = vec![
		story(
			1,
			(width * 0.2, height * 0.25),
			"Gizemli Orman",
			"@zeynepyazar",
			324,
			"Fantastik",
			"#6366f1",
			"Ormanın derinliklerinde, beş arkadaş kaybolmuştu. Bir şeyin onları takip ettiğini hissediyorlardı...",
		),
		story(
			2,
			(width * 0.5, height * 0.15),
			"Kayıp Şehir",
			"@ahmetyilmaz",
			256,
			"Macera",
			"#4f46e5",
			"Antik haritayı elinde tutan profesör ekibine döndü: kayıp şehir tam burada olmalıydı...",
		),
		story(
			3,
			(width * 0.35, height * 0.5),
			"Zaman Yolcusu",
			"@elifdemir",
			156,
			"Bilim Kurgu",
			"#4338ca",
			"2150 yılından gelen mektup, Elif'in hayatını sonsuza dek değiştirecekti...",
		),
		story(
			4,
			(width * 0.65, height * 0.4),
			"Paralel Evren",
			"@canözturk",
			142,
			"Bilim Kurgu",
			"#3730a3",
			"Kuantum laboratuvarındaki kaza, odanın ortasında bir portal açmıştı...",
		),
		story(
			5,
			(width * 0.25, height * 0.75),
			"Son Savaşçı",
			"@mertyılmaz",
			128,
			"Aksiyon",
			"#312e81",
			"Son savaşçı kılıcını kınından çıkardı ve ufka baktı. Krallık yok olmuştu...",
		),
		story(
			6,
			(width * 0.55, height * 0.65),
			"Gizli Görev",
			"@deniztekin",
			189,
			"Gerilim",
			"#1e3a8a",
			"Ajan Deniz son görevinin dosyasını açtı. Hedef, dünyayı tehdit eden bir yapay zekaydı...",
		),
		story(
			7,
			(width * 0.8, height * 0.25),
			"Aşk ve Savaş",
			"@ayşedemir",
			145,
			"Romantik",
			"#1e40af",
			"Savaş meydanında karşılaşan iki düşman, birbirlerine âşık olacaklarını hiç düşünmemişlerdi...",
		),
		story(
			8,
			(width * 0.85, height * 0.5),
			"Karanlık Sırlar",
			"@cemkaya",
			167,
			"Gizem",
			"#1d4ed8",
			"Kasabanın en eski evinin bodrumunda bulunan günlük, yüzyıllık bir sırrı ortaya çıkardı...",
		),
		story(
			9,
			(width * 0.7, height * 0.8),
			"Yıldızlara Yolculuk",
			"@burcuaydın",
			167,
			"Bilim Kurgu",
			"#2563eb",
			"Uzay gemisi bilinmeyen bir gezegenin yörüngesine girdi. Kaptan Burcu ekibine döndü...",
		),
		story(
			10,
			(width * 0.9, height * 0.7),
			"Antik Labirent",
			"@alitoprak",
			167,
			"Macera",
			"#3b82f6",
			"Arkeolog Ali, antik labirentin girişinde durdu ve derin bir nefes aldı...",
		),
		story(
			11,
			(width * 0.95, height * 0.35),
			"Rüya Avcısı",
			"@selinöz",
			167,
			"Fantastik",
			"#60a5fa",
			"Rüya dedektifi Selin, başkalarının rüyalarına girebilen nadir insanlardan biriydi...",
		),
	];

	let connections = vec![
		Connection::new(1, 2),
		Connection::new(1, 3),
		Connection::new(1, 4),
		Connection::new(1, 5),
		Connection::new(1, 6),
		Connection::new(2, 7),
		Connection::new(3, 8),
		Connection::new(4, 9),
		Connection::new(5, 10),
		Connection::new(6, 11),
	];

	GraphData { nodes, connections }
}

const SYSTEM_TITLES: &[&str] = &[
	"Data Processing",
	"User Analytics",
	"API Gateway",
	"Authentication",
	"Storage Service",
	"Machine Learning",
	"Content Delivery",
	"Notification System",
];

const SYSTEM_CATEGORIES: &[&str] = &[
	"Core System Component",
	"User-Facing Service",
	"Backend Infrastructure",
	"Security Module",
	"Data Pipeline",
];

const SYSTEM_COLORS: &[(&str, &str)] = &[
	("#3b82f6", "#2563eb"),
	("#8b5cf6", "#7c3aed"),
	("#ec4899", "#db2777"),
	("#10b981", "#059669"),
	("#f59e0b", "#d97706"),
	("#ef4444", "#dc2626"),
];

const ANCHOR_NAMES: &[&str] = &["top", "right", "bottom", "left"];

/// The anchored workflow graph: eight system nodes, the first three pinned
/// to designated starting positions, each connecting onward through named
/// anchor points.
pub fn generate_system_graph(width: f64, height: f64) -> GraphData {
	let starting_points = [
		(width * 0.2, height * 0.3),
		(width * 0.8, height * 0.3),
		(width * 0.5, height * 0.7),
	];

	let nodes: Vec<StoryNode> = (0..SYSTEM_TITLES.len())
		.map(|i| {
			let (color, border) = SYSTEM_COLORS[i % SYSTEM_COLORS.len()];
			let is_starting_point = i < starting_points.len();
			let (x, y) = if is_starting_point {
				starting_points[i]
			} else {
				(
					rand_simple(i * 2) * (width * 0.8) + width * 0.1,
					rand_simple(i * 2 + 1) * (height * 0.8) + height * 0.1,
				)
			};
			StoryNode {
				id: i as u32 + 1,
				x,
				y,
				size: 0.0,
				title: SYSTEM_TITLES[i].to_owned(),
				author: "@platform".to_owned(),
				excerpt: "A system component connecting to other nodes to form a complete workflow."
					.to_owned(),
				category: SYSTEM_CATEGORIES[(i * 3) % SYSTEM_CATEGORIES.len()].to_owned(),
				color: color.to_owned(),
				border_color: Some(border.to_owned()),
				connections: (rand_simple(i + 40) * 15.0) as u32 + 5,
				is_starting_point,
			}
		})
		.collect();

	let count = nodes.len();
	let mut connections = Vec::new();
	for i in 0..count {
		// Each node connects onward to one or two others.
		let fanout = 1 + (rand_simple(i + 80) * 2.0) as usize;
		for j in 0..fanout {
			let mut target = (rand_simple(i * 5 + j) * count as f64) as usize % count;
			if target == i {
				target = (target + 1) % count;
			}
			let source_anchor = ANCHOR_NAMES[(rand_simple(i * 7 + j) * 4.0) as usize % 4];
			let target_anchor = ANCHOR_NAMES[(rand_simple(i * 11 + j) * 4.0) as usize % 4];
			connections.push(Connection::anchored(
				nodes[i].id,
				nodes[target].id,
				source_anchor,
				target_anchor,
			));
		}
	}

	GraphData { nodes, connections }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn story_graph_is_well_formed() {
		let data = generate_story_graph(1000.0, 600.0);
		assert_eq!(data.nodes.len(), 11);
		assert_eq!(data.connections.len(), 10);
		for conn in &data.connections {
			assert!(data.nodes.iter().any(|n| n.id == conn.source));
			assert!(data.nodes.iter().any(|n| n.id == conn.target));
			assert!(conn.anchors.is_none());
		}
		// Node 1 anchors the network with the highest connection count.
		let max = data.nodes.iter().map(|n| n.connections).max().unwrap();
		assert_eq!(data.nodes[0].connections, max);
	}

	#[test]
	fn system_graph_is_deterministic_and_anchored() {
		let a = generate_system_graph(1000.0, 600.0);
		let b = generate_system_graph(1000.0, 600.0);
		assert_eq!(a, b);
		assert_eq!(a.nodes.iter().filter(|n| n.is_starting_point).count(), 3);
		for conn in &a.connections {
			assert_ne!(conn.source, conn.target);
			assert!(conn.anchors.is_some());
		}
	}
}
