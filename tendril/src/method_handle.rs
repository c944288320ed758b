use std::{
	cell::RefCell,
	fmt::{self, Debug, Formatter},
	rc::Rc,
};

use crate::{
	captured::Captured,
	utils::{disconnected, nothing_captured, reject},
	Arguments, AttachError, GenericHandle, TypedHandle,
};

/// The occupied method slot. Mutable and const methods exclude each other.
enum MethodSlot<C, A: Arguments, R> {
	Mutable(A::Method<C, R>),
	Const(A::ConstMethod<C, R>),
}

impl<C, A: Arguments, R> Clone for MethodSlot<C, A, R> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<C, A: Arguments, R> Copy for MethodSlot<C, A, R> {}

/// A handle to a method on one particular object.
///
/// The object is fixed at construction. Only *which* method is called can change later.
/// Clones of this handle call into the same object, which is never copied.
///
/// Mutable methods borrow the object through [`RefCell::borrow_mut`] for the duration of the call,
/// const methods through [`RefCell::borrow`].
///
/// # Panics
///
/// Raising panics iff the object is already borrowed incompatibly, for example when a mutable method
/// raises a handle to the same object from inside its body.
pub struct MethodHandle<C: 'static, A: Arguments, R: 'static> {
	object: Rc<RefCell<C>>,
	slot: Option<MethodSlot<C, A, R>>,
	captured: Option<Captured<A>>,
}

impl<C: 'static, A: Arguments, R: 'static> MethodHandle<C, A, R> {
	/// Creates a disconnected instance for `object`.
	#[must_use]
	pub fn new(object: Rc<RefCell<C>>) -> Self {
		Self {
			object,
			slot: None,
			captured: None,
		}
	}

	/// Creates an instance that calls `method` on `object`.
	#[must_use]
	pub fn with_method(object: Rc<RefCell<C>>, method: A::Method<C, R>) -> Self {
		Self {
			slot: Some(MethodSlot::Mutable(method)),
			..Self::new(object)
		}
	}

	/// Creates an instance that calls the const `method` on `object`.
	#[must_use]
	pub fn with_const_method(object: Rc<RefCell<C>>, method: A::ConstMethod<C, R>) -> Self {
		Self {
			slot: Some(MethodSlot::Const(method)),
			..Self::new(object)
		}
	}

	/// The object this handle calls into.
	#[must_use]
	pub fn object(&self) -> &Rc<RefCell<C>> {
		&self.object
	}

	/// Whether the attached method is a const method.
	///
	/// [`None`] iff disconnected.
	#[must_use]
	pub fn is_const(&self) -> Option<bool> {
		self.slot.map(|slot| matches!(slot, MethodSlot::Const(_)))
	}

	/// Switches the target to `method`, clearing any const method.
	///
	/// # Returns
	///
	/// `true`.
	pub fn attach_method(&mut self, method: A::Method<C, R>) -> bool {
		self.try_attach_method(Some(method)).is_ok()
	}

	/// Switches the target to the const `method`, clearing any mutable method.
	///
	/// # Returns
	///
	/// `true`.
	pub fn attach_const_method(&mut self, method: A::ConstMethod<C, R>) -> bool {
		self.try_attach_const_method(Some(method)).is_ok()
	}

	/// Switches the target to `method`, where [`None`] is a null target.
	///
	/// # Errors
	///
	/// [`AttachError::NullTarget`] iff `method` is [`None`], in which case nothing changes.
	pub fn try_attach_method(&mut self, method: Option<A::Method<C, R>>) -> Result<(), AttachError> {
		let Some(method) = method else {
			return reject(AttachError::NullTarget, "MethodHandle");
		};
		self.slot = Some(MethodSlot::Mutable(method));
		Ok(())
	}

	/// Switches the target to the const `method`, where [`None`] is a null target.
	///
	/// # Errors
	///
	/// [`AttachError::NullTarget`] iff `method` is [`None`], in which case nothing changes.
	pub fn try_attach_const_method(
		&mut self,
		method: Option<A::ConstMethod<C, R>>,
	) -> Result<(), AttachError> {
		let Some(method) = method else {
			return reject(AttachError::NullTarget, "MethodHandle");
		};
		self.slot = Some(MethodSlot::Const(method));
		Ok(())
	}

	#[track_caller]
	fn dispatch(&self, args: A) -> R {
		match self.slot {
			Some(MethodSlot::Mutable(method)) => {
				let mut object = self.object.borrow_mut();
				A::call_method::<C, R>(method, &mut object, args)
			}
			Some(MethodSlot::Const(method)) => {
				let object = self.object.borrow();
				A::call_const_method::<C, R>(method, &object, args)
			}
			None => disconnected("MethodHandle"),
		}
	}
}

/// Shares the object. Copies the method slot and captured state.
impl<C: 'static, A: Arguments, R: 'static> Clone for MethodHandle<C, A, R> {
	fn clone(&self) -> Self {
		Self {
			object: Rc::clone(&self.object),
			slot: self.slot,
			captured: self.captured.clone(),
		}
	}
}

impl<C: 'static, A: Arguments, R: 'static> Debug for MethodHandle<C, A, R> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("MethodHandle")
			.field("object", &std::any::type_name::<C>())
			.field("const", &self.is_const())
			.field("captured", &self.captured)
			.finish()
	}
}

impl<C: 'static, A: Arguments, R: 'static> GenericHandle for MethodHandle<C, A, R> {
	#[track_caller]
	fn invoke(&self) {
		let _ = self.raise_bound();
	}

	fn is_connected(&self) -> bool {
		self.slot.is_some()
	}

	fn duplicate(&self) -> Box<dyn GenericHandle> {
		Box::new(self.clone())
	}
}

impl<C: 'static, A: Arguments, R: 'static> TypedHandle<A, R> for MethodHandle<C, A, R> {
	#[track_caller]
	fn raise(&self, args: A) -> R {
		self.dispatch(args)
	}

	#[track_caller]
	fn raise_bound(&self) -> R {
		if self.slot.is_none() {
			disconnected("MethodHandle")
		}
		let Some(captured) = &self.captured else {
			nothing_captured("MethodHandle")
		};
		self.dispatch(captured.load())
	}

	fn bind(&mut self, args: A) {
		self.captured = Some(Captured::Values(args));
	}

	unsafe fn forward(&mut self, pointers: A::Pointers) {
		self.captured = Some(Captured::Pointers(pointers));
	}

	fn detach(&mut self) -> bool {
		self.slot = None;
		true
	}

	fn duplicate_typed(&self) -> Box<dyn TypedHandle<A, R>> {
		Box::new(self.clone())
	}
}
