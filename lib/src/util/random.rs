use rand::{
	distributions::uniform::{SampleRange, SampleUniform},
	seq::SliceRandom,
	Rng,
};

pub fn from_range<T, R>(range: R) -> T
where
	T: SampleUniform,
	R: SampleRange<T>,
{
	rand::thread_rng().gen_range(range)
}

pub fn pick<T, L: AsRef<[T]>>(elems: &L) -> Option<&T> {
	elems.as_ref().choose(&mut rand::thread_rng())
}

/// Uniform in-place permutation (Fisher-Yates).
pub fn shuffle<T>(elems: &mut [T]) {
	elems.shuffle(&mut rand::thread_rng());
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_range_stays_in_bounds() {
		for _ in 0..200 {
			let n: i64 = from_range(1..=6);
			assert!((1..=6).contains(&n));
		}
	}

	#[test]
	fn pick_from_empty_is_none() {
		let empty: Vec<String> = vec![];
		assert!(pick(&empty).is_none());
	}

	#[test]
	fn shuffle_keeps_every_element() {
		let mut elems = vec![1, 2, 3, 4, 5];
		shuffle(&mut elems);
		elems.sort();
		assert_eq!(elems, vec![1, 2, 3, 4, 5]);
	}
}
