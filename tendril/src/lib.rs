#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(unreachable_pub)]
#![doc = include_str!("../README.md")]
//!
//! # Threading Notes
//!
//! Handles are neither [`Send`] nor [`Sync`]: Method targets share their object through
//! [`Rc`](`std::rc::Rc`)`<`[`RefCell`](`std::cell::RefCell`)`<_>>` and forwarded arguments are raw pointers.
//! Every operation runs to completion on the calling thread.
//!
//! # Reentrancy
//!
//! What happens when a target calls back into the handle or [`Signal`] that is raising it is unspecified.
//! Currently, reentrant raises of a method target panic iff they conflict with the ongoing borrow of its object.

mod arguments;
mod callable_handle;
mod captured;
mod error;
mod function_handle;
mod method_handle;
mod signal;
mod traits;
mod utils;

pub use arguments::{Arguments, CallWith};
pub use callable_handle::CallableHandle;
pub use error::AttachError;
pub use function_handle::FunctionHandle;
pub use method_handle::MethodHandle;
pub use signal::Signal;
pub use traits::{GenericHandle, TypedHandle};
