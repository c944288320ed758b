/// An argument list, as tuple.
///
/// Implemented for tuples of up to eight elements that are each `'static + Clone`.
/// `()` is the empty argument list.
///
/// Arguments are owned, since captured ones are stored and cloned for each raise.
/// Targets that write through a parameter take shared storage like `Rc<RefCell<T>>` instead of `&mut T`.
///
/// The associated types name the pointer types that can be called with this argument list,
/// so that for example a `Signal<(i32, i32), i32>` accepts `fn(i32, i32) -> i32` directly.
pub trait Arguments: 'static + Sized + Clone {
	/// A plain function taking these arguments.
	type Function<R>: Copy;

	/// A method that takes its receiver as `&mut C`, followed by these arguments.
	type Method<C, R>: Copy;

	/// A method that takes its receiver as `&C`, followed by these arguments.
	type ConstMethod<C, R>: Copy;

	/// One `*const` pointer per argument, used for capture by reference.
	type Pointers: Copy;

	/// Calls `function` with `args` spread into its parameters.
	fn call_function<R>(function: Self::Function<R>, args: Self) -> R;

	/// Calls `method` on `object` with `args` spread into its parameters.
	fn call_method<C, R>(method: Self::Method<C, R>, object: &mut C, args: Self) -> R;

	/// Calls `method` on `object` with `args` spread into its parameters.
	fn call_const_method<C, R>(method: Self::ConstMethod<C, R>, object: &C, args: Self) -> R;

	/// Clones each argument out of the place it points to.
	///
	/// # Safety
	///
	/// Each pointer in `pointers` must be valid for reads and point to an initialised value.
	unsafe fn read(pointers: Self::Pointers) -> Self;
}

/// A callable that can be invoked with the argument list `A`.
///
/// Implemented for every [`FnMut`] of up to eight parameters.
/// A type may implement this for several argument lists by hand, in which case
/// [`CallableHandle::raise`](`crate::CallableHandle::raise`) picks the implementation per call site.
pub trait CallWith<A> {
	/// The return type for this argument list.
	type Output;

	/// Calls `self` with `args` spread into its parameters.
	fn call_with(&mut self, args: A) -> Self::Output;
}

macro_rules! impl_arguments {
	($($T:ident $arg:ident),*) => {
		impl<$($T: 'static + Clone),*> Arguments for ($($T,)*) {
			type Function<R> = fn($($T),*) -> R;
			type Method<C, R> = fn(&mut C, $($T),*) -> R;
			type ConstMethod<C, R> = fn(&C, $($T),*) -> R;
			type Pointers = ($(*const $T,)*);

			fn call_function<R>(function: Self::Function<R>, ($($arg,)*): Self) -> R {
				function($($arg),*)
			}

			fn call_method<C, R>(method: Self::Method<C, R>, object: &mut C, ($($arg,)*): Self) -> R {
				method(object, $($arg),*)
			}

			fn call_const_method<C, R>(
				method: Self::ConstMethod<C, R>,
				object: &C,
				($($arg,)*): Self,
			) -> R {
				method(object, $($arg),*)
			}

			#[allow(clippy::unused_unit)]
			unsafe fn read(($($arg,)*): Self::Pointers) -> Self {
				($(unsafe { (*$arg).clone() },)*)
			}
		}

		impl<F: FnMut($($T),*) -> R, R, $($T),*> CallWith<($($T,)*)> for F {
			type Output = R;

			fn call_with(&mut self, ($($arg,)*): ($($T,)*)) -> R {
				self($($arg),*)
			}
		}
	};
}

impl_arguments!();
impl_arguments!(A0 a0);
impl_arguments!(A0 a0, A1 a1);
impl_arguments!(A0 a0, A1 a1, A2 a2);
impl_arguments!(A0 a0, A1 a1, A2 a2, A3 a3);
impl_arguments!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4);
impl_arguments!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);
impl_arguments!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6);
impl_arguments!(A0 a0, A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7);
