#![cfg(feature = "log")]

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use tendril::{AttachError, FunctionHandle, Signal};

/// Keeps every record logged under the `tendril` target.
struct Recorder(Mutex<Vec<(Level, String)>>);

impl Recorder {
	fn take(&self) -> Vec<(Level, String)> {
		std::mem::take(&mut *self.0.lock().unwrap())
	}
}

impl Log for Recorder {
	fn enabled(&self, metadata: &Metadata<'_>) -> bool {
		metadata.target() == "tendril"
	}

	fn log(&self, record: &Record<'_>) {
		if self.enabled(record.metadata()) {
			self.0
				.lock()
				.unwrap()
				.push((record.level(), record.args().to_string()));
		}
	}

	fn flush(&self) {}
}

static RECORDER: Recorder = Recorder(Mutex::new(Vec::new()));

fn add(a: i32, b: i32) -> i32 {
	a + b
}

// The logger is global, so everything that logs lives in this one test.
#[test]
fn attachments_are_logged() {
	log::set_logger(&RECORDER).unwrap();
	log::set_max_level(LevelFilter::Trace);

	let mut signal = Signal::<(i32, i32), i32>::new();
	assert_eq!(signal.try_attach(None), Err(AttachError::NullTarget));
	assert_eq!(
		RECORDER.take(),
		[(Level::Debug, String::from("Signal: attachment rejected: the target is null"))]
	);

	assert!(signal.attach(add));
	assert!(signal.attach(add));
	assert!(signal.detach());
	assert_eq!(
		RECORDER.take(),
		[
			(Level::Trace, String::from("Signal: attached")),
			(Level::Trace, String::from("Signal: detached")),
			(Level::Trace, String::from("Signal: replaced the previous target")),
			(Level::Trace, String::from("Signal: attached")),
			(Level::Trace, String::from("Signal: detached")),
		]
	);

	let mut handle = FunctionHandle::<(i32, i32), i32>::new();
	assert_eq!(handle.try_attach(None), Err(AttachError::NullTarget));
	assert_eq!(
		RECORDER.take(),
		[(
			Level::Debug,
			String::from("FunctionHandle: attachment rejected: the target is null")
		)]
	);

	// Raising stays silent.
	assert!(signal.attach(add));
	RECORDER.take();
	assert_eq!(signal.raise((1, 2)), 3);
	assert!(RECORDER.take().is_empty());
}
