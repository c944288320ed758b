use std::{
	any::Any,
	cell::RefCell,
	fmt::{self, Debug, Formatter},
	mem,
	rc::Rc,
};

use tap::Pipe;

use crate::{
	utils::{disconnected, reject, trace},
	Arguments, AttachError, FunctionHandle, GenericHandle, MethodHandle, TypedHandle,
};

/// An owning, value-semantic handle to at most one target callable with `A`, returning `R`.
///
/// The target is a plain function or a method on a shared object.
/// [`Signal`] forwards everything to a boxed [`TypedHandle`] and only cares about the concrete kind
/// of handle when swapping just the method of a method target (see [`Signal::rebind_method`]).
///
/// Cloning a [`Signal`] duplicates the held handle including its captured arguments.
/// The clone is independent afterwards, apart from the shared object of a method target
/// and the pointees of forwarded arguments.
///
/// Captured arguments belong to the held handle, so attaching a new target discards them.
///
/// ```
/// use tendril::Signal;
///
/// fn add(a: i32, b: i32) -> i32 {
/// 	a + b
/// }
///
/// let mut signal = Signal::<(i32, i32), i32>::from_function(add);
/// assert_eq!(signal.raise((2, 3)), 5);
///
/// signal.bind((2, 3));
/// assert_eq!(signal.raise_bound(), 5);
///
/// assert!(signal.detach());
/// assert!(!signal.is_connected());
/// ```
#[must_use = "Signals do nothing unless raised."]
pub struct Signal<A: Arguments, R: 'static> {
	handle: Option<Box<dyn TypedHandle<A, R>>>,
}

impl<A: Arguments, R: 'static> Signal<A, R> {
	/// Creates a disconnected instance.
	pub const fn new() -> Self {
		Self { handle: None }
	}

	/// Creates an instance connected to `function`.
	pub fn from_function(function: A::Function<R>) -> Self {
		FunctionHandle::<A, R>::with_function(function).pipe(Self::from_handle)
	}

	/// Creates an instance connected to `method` on `object`.
	pub fn from_method<C: 'static>(object: Rc<RefCell<C>>, method: A::Method<C, R>) -> Self {
		MethodHandle::<C, A, R>::with_method(object, method).pipe(Self::from_handle)
	}

	/// Creates an instance connected to the const `method` on `object`.
	pub fn from_const_method<C: 'static>(
		object: Rc<RefCell<C>>,
		method: A::ConstMethod<C, R>,
	) -> Self {
		MethodHandle::<C, A, R>::with_const_method(object, method).pipe(Self::from_handle)
	}

	fn from_handle(handle: impl TypedHandle<A, R>) -> Self {
		Self {
			handle: Some(Box::new(handle)),
		}
	}

	/// Whether a target is attached.
	#[must_use]
	pub fn is_connected(&self) -> bool {
		self.handle
			.as_deref()
			.is_some_and(|handle| handle.is_connected())
	}

	/// Attaches `function`, detaching any previous target first.
	///
	/// # Returns
	///
	/// Whether `function` is now attached.
	pub fn attach(&mut self, function: A::Function<R>) -> bool {
		self.try_attach(Some(function)).is_ok()
	}

	/// Attaches `method` on `object`, detaching any previous target first.
	///
	/// # Returns
	///
	/// Whether `method` is now attached.
	pub fn attach_method<C: 'static>(
		&mut self,
		object: Rc<RefCell<C>>,
		method: A::Method<C, R>,
	) -> bool {
		self.try_attach_method(object, Some(method)).is_ok()
	}

	/// Attaches the const `method` on `object`, detaching any previous target first.
	///
	/// # Returns
	///
	/// Whether `method` is now attached.
	pub fn attach_const_method<C: 'static>(
		&mut self,
		object: Rc<RefCell<C>>,
		method: A::ConstMethod<C, R>,
	) -> bool {
		self.try_attach_const_method(object, Some(method)).is_ok()
	}

	/// Attaches `function`, detaching any previous target first.
	///
	/// # Errors
	///
	/// [`AttachError::NullTarget`] iff `function` is [`None`]. The previous target (if any) stays attached.
	pub fn try_attach(&mut self, function: Option<A::Function<R>>) -> Result<(), AttachError> {
		let Some(function) = function else {
			return reject(AttachError::NullTarget, "Signal");
		};
		self.replace(Box::new(FunctionHandle::<A, R>::with_function(function)));
		Ok(())
	}

	/// Attaches `method` on `object`, detaching any previous target first.
	///
	/// # Errors
	///
	/// [`AttachError::NullTarget`] iff `method` is [`None`]. The previous target (if any) stays attached.
	pub fn try_attach_method<C: 'static>(
		&mut self,
		object: Rc<RefCell<C>>,
		method: Option<A::Method<C, R>>,
	) -> Result<(), AttachError> {
		let Some(method) = method else {
			return reject(AttachError::NullTarget, "Signal");
		};
		self.replace(Box::new(MethodHandle::<C, A, R>::with_method(object, method)));
		Ok(())
	}

	/// Attaches the const `method` on `object`, detaching any previous target first.
	///
	/// # Errors
	///
	/// [`AttachError::NullTarget`] iff `method` is [`None`]. The previous target (if any) stays attached.
	pub fn try_attach_const_method<C: 'static>(
		&mut self,
		object: Rc<RefCell<C>>,
		method: Option<A::ConstMethod<C, R>>,
	) -> Result<(), AttachError> {
		let Some(method) = method else {
			return reject(AttachError::NullTarget, "Signal");
		};
		self.replace(Box::new(MethodHandle::<C, A, R>::with_const_method(
			object, method,
		)));
		Ok(())
	}

	/// Swaps in `method` while keeping the object of the attached method target.
	///
	/// # Returns
	///
	/// Whether `method` is now attached.
	/// `false` iff this [`Signal`] is disconnected or its target is not a method on a `C`,
	/// in which case nothing changes.
	pub fn rebind_method<C: 'static>(&mut self, method: A::Method<C, R>) -> bool {
		self.try_rebind_method(Some(method)).is_ok()
	}

	/// Swaps in the const `method` while keeping the object of the attached method target.
	///
	/// # Returns
	///
	/// Whether `method` is now attached.
	/// `false` iff this [`Signal`] is disconnected or its target is not a method on a `C`,
	/// in which case nothing changes.
	pub fn rebind_const_method<C: 'static>(&mut self, method: A::ConstMethod<C, R>) -> bool {
		self.try_rebind_const_method(Some(method)).is_ok()
	}

	/// Swaps in `method` while keeping the object of the attached method target.
	///
	/// Captured arguments are kept.
	///
	/// # Errors
	///
	/// - [`AttachError::NullTarget`] iff `method` is [`None`],
	/// - [`AttachError::Disconnected`] iff no target is attached and
	/// - [`AttachError::KindMismatch`] iff the target is a function or a method on another type.
	///
	/// Nothing changes in either case.
	pub fn try_rebind_method<C: 'static>(
		&mut self,
		method: Option<A::Method<C, R>>,
	) -> Result<(), AttachError> {
		let Some(method) = method else {
			return reject(AttachError::NullTarget, "Signal");
		};
		let handle = self.method_handle_mut::<C>()?;
		handle.attach_method(method);
		trace!("Signal: rebound to a mutable method on {}", std::any::type_name::<C>());
		Ok(())
	}

	/// Swaps in the const `method` while keeping the object of the attached method target.
	///
	/// Captured arguments are kept.
	///
	/// # Errors
	///
	/// - [`AttachError::NullTarget`] iff `method` is [`None`],
	/// - [`AttachError::Disconnected`] iff no target is attached and
	/// - [`AttachError::KindMismatch`] iff the target is a function or a method on another type.
	///
	/// Nothing changes in either case.
	pub fn try_rebind_const_method<C: 'static>(
		&mut self,
		method: Option<A::ConstMethod<C, R>>,
	) -> Result<(), AttachError> {
		let Some(method) = method else {
			return reject(AttachError::NullTarget, "Signal");
		};
		let handle = self.method_handle_mut::<C>()?;
		handle.attach_const_method(method);
		trace!("Signal: rebound to a const method on {}", std::any::type_name::<C>());
		Ok(())
	}

	/// Drops the held handle and its captured arguments.
	///
	/// # Returns
	///
	/// `false` iff already disconnected.
	pub fn detach(&mut self) -> bool {
		let detached = self.handle.take().is_some();
		if detached {
			trace!("Signal: detached");
		}
		detached
	}

	/// Calls the target with exactly `args`.
	///
	/// # Panics
	///
	/// Iff disconnected.
	#[track_caller]
	pub fn raise(&self, args: A) -> R {
		self.connected_handle().raise(args)
	}

	/// Calls the target with the arguments captured by the latest [`bind`](`Signal::bind`)
	/// or [`forward`](`Signal::forward`).
	///
	/// # Panics
	///
	/// Iff disconnected or nothing was captured since the current target was attached.
	#[track_caller]
	pub fn raise_bound(&self) -> R {
		self.connected_handle().raise_bound()
	}

	/// Captures owned `args` for [`raise_bound`](`Signal::raise_bound`).
	///
	/// # Returns
	///
	/// Whether the arguments were captured.
	/// `false` iff disconnected, since captured arguments are stored by the attached handle.
	pub fn bind(&mut self, args: A) -> bool {
		let Some(handle) = self.handle.as_deref_mut() else {
			return false;
		};
		handle.bind(args);
		true
	}

	/// Captures pointers to caller-owned arguments for [`raise_bound`](`Signal::raise_bound`).
	///
	/// # Returns
	///
	/// Whether the pointers were captured.
	/// `false` iff disconnected, since captured arguments are stored by the attached handle.
	///
	/// # Safety
	///
	/// See [`TypedHandle::forward`]. Clones of this [`Signal`] share the pointees.
	pub unsafe fn forward(&mut self, pointers: A::Pointers) -> bool {
		let Some(handle) = self.handle.as_deref_mut() else {
			return false;
		};
		unsafe { handle.forward(pointers) };
		true
	}

	/// Moves the target and captured arguments out, leaving `self` disconnected.
	pub fn take(&mut self) -> Self {
		mem::take(self)
	}

	#[track_caller]
	fn connected_handle(&self) -> &dyn TypedHandle<A, R> {
		match self.handle.as_deref() {
			Some(handle) => handle,
			None => disconnected("Signal"),
		}
	}

	fn replace(&mut self, handle: Box<dyn TypedHandle<A, R>>) {
		// Detaching a held handle can't fail.
		if self.detach() {
			trace!("Signal: replaced the previous target");
		}
		self.handle = Some(handle);
		trace!("Signal: attached");
	}

	fn method_handle_mut<C: 'static>(&mut self) -> Result<&mut MethodHandle<C, A, R>, AttachError> {
		let Some(handle) = self
			.handle
			.as_deref_mut()
			.filter(|handle| handle.is_connected())
		else {
			return reject(AttachError::Disconnected, "Signal");
		};
		match (handle as &mut (dyn Any + 'static)).downcast_mut::<MethodHandle<C, A, R>>() {
			Some(handle) => Ok(handle),
			None => reject(AttachError::KindMismatch, "Signal"),
		}
	}
}

impl<A: Arguments, R: 'static> Default for Signal<A, R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<A: Arguments, R: 'static> Clone for Signal<A, R> {
	fn clone(&self) -> Self {
		Self {
			handle: self.handle.clone(),
		}
	}
}

impl<A: Arguments, R: 'static> Debug for Signal<A, R> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("connected", &self.is_connected())
			.finish_non_exhaustive()
	}
}

/// Lets [`Signal`]s of any signature be held and fired together.
impl<A: Arguments, R: 'static> GenericHandle for Signal<A, R> {
	#[track_caller]
	fn invoke(&self) {
		let _ = self.raise_bound();
	}

	fn is_connected(&self) -> bool {
		Signal::is_connected(self)
	}

	fn duplicate(&self) -> Box<dyn GenericHandle> {
		Box::new(self.clone())
	}
}
