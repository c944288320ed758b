use crate::AttachError;

/// Logs through [`log::debug!`] iff the `log` feature is enabled.
macro_rules! debug {
	($($arg:tt)+) => {
		#[cfg(feature = "log")]
		::log::debug!(target: "tendril", $($arg)+);
	};
}

/// Logs through [`log::trace!`] iff the `log` feature is enabled.
macro_rules! trace {
	($($arg:tt)+) => {
		#[cfg(feature = "log")]
		::log::trace!(target: "tendril", $($arg)+);
	};
}
pub(crate) use trace;

pub(crate) fn reject<T>(error: AttachError, handle: &'static str) -> Result<T, AttachError> {
	debug!("{handle}: attachment rejected: {error}");
	#[cfg(not(feature = "log"))]
	let _ = handle;
	Err(error)
}

#[cold]
#[track_caller]
pub(crate) fn disconnected(handle: &'static str) -> ! {
	panic!("{handle} raised while disconnected")
}

#[cold]
#[track_caller]
pub(crate) fn nothing_captured(handle: &'static str) -> ! {
	panic!("{handle} raised without captured arguments (call `bind` or `forward` first)")
}
