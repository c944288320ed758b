use std::any::Any;

use crate::Arguments;

/// Signature-independent access to any handle.
///
/// Lets handles (and [`Signal`](`crate::Signal`)s) of different signatures be stored and fired together,
/// for example as `Vec<Box<dyn GenericHandle>>`.
///
/// `Box<dyn TypedHandle<A, R>>` coerces to `Box<dyn GenericHandle>`, and both coerce to `Box<dyn Any>`.
pub trait GenericHandle: Any {
	/// Fires the target with the arguments captured by the latest `bind` or `forward`,
	/// discarding the result.
	///
	/// # Panics
	///
	/// Iff disconnected or nothing was captured yet.
	fn invoke(&self);

	/// Whether a target is currently attached.
	fn is_connected(&self) -> bool;

	/// Creates an independent handle with the same target and captured state.
	fn duplicate(&self) -> Box<dyn GenericHandle>;
}

impl Clone for Box<dyn GenericHandle> {
	fn clone(&self) -> Self {
		(**self).duplicate()
	}
}

/// The typed handle contract for a target callable with the argument list `A`, returning `R`.
pub trait TypedHandle<A: Arguments, R: 'static>: GenericHandle {
	/// Calls the target with exactly `args`.
	///
	/// Captured arguments are neither used nor modified.
	///
	/// # Panics
	///
	/// Iff disconnected.
	fn raise(&self, args: A) -> R;

	/// Calls the target with the captured arguments.
	///
	/// After [`bind`](`TypedHandle::bind`), each call receives fresh clones of the bound values.
	/// After [`forward`](`TypedHandle::forward`), each call clones the *current* values out of the forwarded places.
	///
	/// # Panics
	///
	/// Iff disconnected or nothing was captured yet.
	fn raise_bound(&self) -> R;

	/// Captures owned `args` for [`raise_bound`](`TypedHandle::raise_bound`), replacing any earlier capture.
	fn bind(&mut self, args: A);

	/// Captures pointers to caller-owned arguments for [`raise_bound`](`TypedHandle::raise_bound`),
	/// replacing any earlier capture.
	///
	/// Changes to the pointees between this call and a raise are observed by the target.
	///
	/// # Safety
	///
	/// Each pointer in `pointers` **must** be valid for reads (and point to an initialised value)
	/// every time the captured arguments are used, which includes uses through duplicates of this handle.
	///
	/// This stops being required once the capture is replaced through `bind` or `forward`
	/// on every handle that holds it, or once those handles are dropped.
	unsafe fn forward(&mut self, pointers: A::Pointers);

	/// Clears the target. The captured arguments are kept.
	///
	/// # Returns
	///
	/// `true`. Detaching a disconnected handle is not an error.
	fn detach(&mut self) -> bool;

	/// Like [`GenericHandle::duplicate`], but keeps the signature.
	fn duplicate_typed(&self) -> Box<dyn TypedHandle<A, R>>;
}

impl<A: Arguments, R: 'static> Clone for Box<dyn TypedHandle<A, R>> {
	fn clone(&self) -> Self {
		(**self).duplicate_typed()
	}
}
