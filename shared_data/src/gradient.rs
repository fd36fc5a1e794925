use crate::PostId;

pub static PALETTE: [&str; 6] = [
	"linear-gradient(135deg, #f5e6e8, #d5c6e0)",
	"linear-gradient(135deg, #e3f2e1, #b8d8d8)",
	"linear-gradient(135deg, #fdf0d5, #f4c095)",
	"linear-gradient(135deg, #dbe9f6, #a9c6e8)",
	"linear-gradient(135deg, #f0e4d7, #c9ada7)",
	"linear-gradient(135deg, #e8e8e4, #b7b7a4)"
];

pub static CLASSES: [&str; 6] = [
	"post-gradient-0",
	"post-gradient-1",
	"post-gradient-2",
	"post-gradient-3",
	"post-gradient-4",
	"post-gradient-5"
];

/// Which entry of [`PALETTE`] a post's cover is painted with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Gradient(usize);

impl Gradient {
	#[must_use]
	pub fn index(self) -> usize {
		self.0
	}

	#[must_use]
	pub fn css(self) -> &'static str {
		PALETTE[self.0]
	}

	/// Class that paints this gradient, see [`gradient_style`]
	#[must_use]
	pub fn classes(self) -> &'static str {
		CLASSES[self.0]
	}
}

/// One rule per palette entry, for the classes [`Gradient::classes`] hands out
#[must_use]
pub fn gradient_style() -> String {
	CLASSES.iter()
		.zip(PALETTE)
		.map(|(class, css)| format!(".{class} {{ background-image: {css}; }}\n"))
		.collect()
}

#[must_use]
pub fn post_gradient(id: &PostId) -> Gradient {
	let idx = match id {
		PostId::Int(id) => *id % PALETTE.len() as u64,
		// FNV-1a, since std's hasher isn't promised to stay the same between releases
		PostId::Text(id) => id.bytes()
			.fold(0xcbf2_9ce4_8422_2325_u64, |hash, b| (hash ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3))
			% PALETTE.len() as u64
	};

	// always < PALETTE.len(), so this can't truncate
	Gradient(idx as usize)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn same_id_same_gradient() {
		for id in [PostId::from(0_u64), PostId::from(u64::MAX), PostId::from("abc123"), PostId::from("")] {
			assert_eq!(post_gradient(&id), post_gradient(&id.clone()));
		}
	}

	#[test]
	fn integer_ids_cycle_through_palette() {
		let picked = (0..PALETTE.len() as u64)
			.map(|id| post_gradient(&PostId::from(id)).index())
			.collect::<Vec<_>>();

		assert_eq!(picked, (0..PALETTE.len()).collect::<Vec<_>>());
		assert_eq!(post_gradient(&PostId::from(7_u64)).css(), PALETTE[1]);
	}

	#[test]
	fn every_class_has_a_rule() {
		let style = gradient_style();
		for (class, css) in CLASSES.iter().zip(PALETTE) {
			assert!(style.contains(&format!(".{class} {{ background-image: {css}; }}")));
		}
		assert_eq!(style.lines().count(), PALETTE.len());
	}

	#[test]
	fn string_ids_stay_in_palette() {
		let ids = ["abc123", "abc124", "post", "안녕", "🦀"];
		for id in ids {
			let grad = post_gradient(&PostId::from(id));
			assert!(grad.index() < PALETTE.len());
			assert_eq!(grad.classes(), format!("post-gradient-{}", grad.index()));
		}
	}
}
