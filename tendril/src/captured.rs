use std::fmt::{self, Debug, Formatter};

use crate::Arguments;

/// Arguments captured for a later argument-less raise.
///
/// Exactly one mode is active at a time: whichever of `bind` or `forward` was called last.
pub(crate) enum Captured<A: Arguments> {
	/// Owned copies, cloned again on each use.
	Values(A),
	/// Pointers into caller-owned storage, read and cloned on each use.
	///
	/// The pointees are **not** owned. Validity is upheld by the caller of `forward`.
	Pointers(A::Pointers),
}

impl<A: Arguments> Captured<A> {
	pub(crate) fn load(&self) -> A {
		match self {
			Self::Values(values) => values.clone(),
			// SAFETY: Only constructed through `unsafe fn forward`, whose callers promise
			// that the pointers stay readable whenever the captured arguments are used.
			Self::Pointers(pointers) => unsafe { A::read(*pointers) },
		}
	}
}

impl<A: Arguments> Clone for Captured<A> {
	fn clone(&self) -> Self {
		match self {
			Self::Values(values) => Self::Values(values.clone()),
			Self::Pointers(pointers) => Self::Pointers(*pointers),
		}
	}
}

impl<A: Arguments> Debug for Captured<A> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Values(_) => f.write_str("Values(..)"),
			Self::Pointers(_) => f.write_str("Pointers(..)"),
		}
	}
}
