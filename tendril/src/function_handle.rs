use std::fmt::{self, Debug, Formatter};

use crate::{
	captured::Captured,
	utils::{disconnected, nothing_captured, reject},
	Arguments, AttachError, GenericHandle, TypedHandle,
};

/// A handle to a plain function.
///
/// Reattaching never requires a prior detach, since there is nothing tied to the previous function.
pub struct FunctionHandle<A: Arguments, R: 'static> {
	function: Option<A::Function<R>>,
	captured: Option<Captured<A>>,
}

impl<A: Arguments, R: 'static> FunctionHandle<A, R> {
	/// Creates a disconnected instance.
	#[must_use]
	pub const fn new() -> Self {
		Self {
			function: None,
			captured: None,
		}
	}

	/// Creates an instance connected to `function`.
	#[must_use]
	pub const fn with_function(function: A::Function<R>) -> Self {
		Self {
			function: Some(function),
			captured: None,
		}
	}

	/// Replaces the target with `function`.
	///
	/// # Returns
	///
	/// `true`.
	pub fn attach(&mut self, function: A::Function<R>) -> bool {
		self.try_attach(Some(function)).is_ok()
	}

	/// Replaces the target with `function`, where [`None`] is a null target.
	///
	/// # Errors
	///
	/// [`AttachError::NullTarget`] iff `function` is [`None`], in which case nothing changes.
	pub fn try_attach(&mut self, function: Option<A::Function<R>>) -> Result<(), AttachError> {
		let Some(function) = function else {
			return reject(AttachError::NullTarget, "FunctionHandle");
		};
		self.function = Some(function);
		Ok(())
	}
}

impl<A: Arguments, R: 'static> Default for FunctionHandle<A, R> {
	fn default() -> Self {
		Self::new()
	}
}

/// Copies the function pointer and captured state.
///
/// Forwarded pointers are copied as pointers. Their pointees are shared with the original.
impl<A: Arguments, R: 'static> Clone for FunctionHandle<A, R> {
	fn clone(&self) -> Self {
		Self {
			function: self.function,
			captured: self.captured.clone(),
		}
	}
}

impl<A: Arguments, R: 'static> Debug for FunctionHandle<A, R> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("FunctionHandle")
			.field("connected", &self.function.is_some())
			.field("captured", &self.captured)
			.finish()
	}
}

impl<A: Arguments, R: 'static> GenericHandle for FunctionHandle<A, R> {
	#[track_caller]
	fn invoke(&self) {
		let _ = self.raise_bound();
	}

	fn is_connected(&self) -> bool {
		self.function.is_some()
	}

	fn duplicate(&self) -> Box<dyn GenericHandle> {
		Box::new(self.clone())
	}
}

impl<A: Arguments, R: 'static> TypedHandle<A, R> for FunctionHandle<A, R> {
	#[track_caller]
	fn raise(&self, args: A) -> R {
		let Some(function) = self.function else {
			disconnected("FunctionHandle")
		};
		A::call_function::<R>(function, args)
	}

	#[track_caller]
	fn raise_bound(&self) -> R {
		let Some(function) = self.function else {
			disconnected("FunctionHandle")
		};
		let Some(captured) = &self.captured else {
			nothing_captured("FunctionHandle")
		};
		A::call_function::<R>(function, captured.load())
	}

	fn bind(&mut self, args: A) {
		self.captured = Some(Captured::Values(args));
	}

	unsafe fn forward(&mut self, pointers: A::Pointers) {
		self.captured = Some(Captured::Pointers(pointers));
	}

	fn detach(&mut self) -> bool {
		self.function = None;
		true
	}

	fn duplicate_typed(&self) -> Box<dyn TypedHandle<A, R>> {
		Box::new(self.clone())
	}
}
