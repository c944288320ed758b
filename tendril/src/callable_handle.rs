use std::fmt::{self, Debug, Formatter};

use crate::{utils::disconnected, CallWith};

/// A plain wrapper around a callable value, outside the [`GenericHandle`](`crate::GenericHandle`) hierarchy.
///
/// There is no captured-argument storage and no signature fixed at construction:
/// [`raise`](`CallableHandle::raise`) picks the [`CallWith`] implementation per call site.
///
/// ```
/// use tendril::CallableHandle;
///
/// let offset = 10;
/// let mut handle = CallableHandle::with_callable(move |a: i32, b: i32| a + b + offset);
/// assert_eq!(handle.raise((2, 3)), 15);
///
/// handle.detach();
/// assert!(!handle.is_connected());
/// assert!(handle.callable().is_some());
/// ```
#[derive(Clone)]
pub struct CallableHandle<F> {
	callable: Option<F>,
	connected: bool,
}

impl<F> CallableHandle<F> {
	/// Creates a disconnected instance without callable.
	#[must_use]
	pub const fn new() -> Self {
		Self {
			callable: None,
			connected: false,
		}
	}

	/// Creates an instance connected to `callable`.
	#[must_use]
	pub const fn with_callable(callable: F) -> Self {
		Self {
			callable: Some(callable),
			connected: true,
		}
	}

	/// Replaces the callable and connects.
	///
	/// # Returns
	///
	/// `true`. There is no null callable.
	pub fn attach(&mut self, callable: F) -> bool {
		self.callable = Some(callable);
		self.connected = true;
		true
	}

	/// Disconnects. The callable is retained but won't be called.
	///
	/// # Returns
	///
	/// `true`.
	pub fn detach(&mut self) -> bool {
		self.connected = false;
		true
	}

	/// Whether a callable is attached.
	#[must_use]
	pub fn is_connected(&self) -> bool {
		self.connected
	}

	/// The most recently attached callable, also while detached.
	#[must_use]
	pub fn callable(&self) -> Option<&F> {
		self.callable.as_ref()
	}

	/// Calls the callable with `args`.
	///
	/// # Panics
	///
	/// Iff disconnected.
	#[track_caller]
	pub fn raise<A>(&mut self, args: A) -> F::Output
	where
		F: CallWith<A>,
	{
		match &mut self.callable {
			Some(callable) if self.connected => callable.call_with(args),
			_ => disconnected("CallableHandle"),
		}
	}
}

impl<F> Default for CallableHandle<F> {
	fn default() -> Self {
		Self::new()
	}
}

impl<F> Debug for CallableHandle<F> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("CallableHandle")
			.field("callable", &std::any::type_name::<F>())
			.field("connected", &self.connected)
			.finish()
	}
}
