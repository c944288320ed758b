use thiserror::Error;

/// Why an attachment was rejected.
///
/// A rejected attachment never changes the state of the handle or [`Signal`](`crate::Signal`) it
/// was attempted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AttachError {
	/// The incoming target was [`None`].
	#[error("the target is null")]
	NullTarget,
	/// A method-only rebind was attempted while no handler is attached.
	#[error("no handler is attached")]
	Disconnected,
	/// A method-only rebind was attempted while the attached handler is not a
	/// [`MethodHandle`](`crate::MethodHandle`) over the method's object type.
	#[error("the attached handler is not a method handle for this object type")]
	KindMismatch,
}
