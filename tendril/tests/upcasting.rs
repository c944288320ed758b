use std::{any::Any, cell::RefCell, rc::Rc};

use tendril::{FunctionHandle, GenericHandle, MethodHandle, Signal, TypedHandle};

mod _validator;
use _validator::Validator;

static V: Validator<String> = Validator::new();

fn announce(what: String) {
	V.push(what);
}

fn count(n: u8, of: String) -> usize {
	V.push(format!("{n} {of}"));
	usize::from(n)
}

struct Speaker {
	name: &'static str,
}

impl Speaker {
	fn say(&self, words: String) {
		V.push(format!("{}: {words}", self.name));
	}
}

// `V` is shared, so everything that raises lives in this one test.
#[test]
fn mixed_signatures() {
	let speaker = Rc::new(RefCell::new(Speaker { name: "speaker" }));

	let mut a = Signal::<(String,), ()>::from_function(announce);
	a.bind((String::from("a"),));

	let mut b = FunctionHandle::<(u8, String), usize>::with_function(count);
	b.bind((3, String::from("bees")));

	let mut c = MethodHandle::<Speaker, (String,), ()>::with_const_method(speaker, Speaker::say);
	c.bind((String::from("c"),));

	let typed: Box<dyn TypedHandle<(u8, String), usize>> = Box::new(b);
	let mut handles: Vec<Box<dyn GenericHandle>> = Vec::new();
	handles.push(Box::new(a));
	handles.push(typed);
	handles.push(Box::new(c));
	assert!(handles.iter().all(|handle| handle.is_connected()));

	for handle in &handles {
		handle.invoke();
	}
	V.expect(["a", "3 bees", "speaker: c"].map(String::from));

	let duplicates = handles.clone();
	drop(handles);
	for handle in duplicates.iter().rev() {
		handle.invoke();
	}
	V.expect(["speaker: c", "3 bees", "a"].map(String::from));
}

#[test]
fn downcast() {
	let handle: Box<dyn GenericHandle> =
		Box::new(FunctionHandle::<(String,), ()>::with_function(announce));
	let handle: Box<dyn Any> = handle;
	assert!(handle.downcast_ref::<FunctionHandle<(String,), ()>>().is_some());
	assert!(handle.downcast_ref::<Signal<(String,), ()>>().is_none());
}

#[test]
fn typed_duplicates() {
	fn double(n: i32) -> i32 {
		n * 2
	}

	let mut handle: Box<dyn TypedHandle<(i32,), i32>> =
		Box::new(FunctionHandle::<(i32,), i32>::with_function(double));
	handle.bind((21,));

	let clone = handle.clone();
	assert!(handle.detach());
	assert!(!handle.is_connected());
	assert_eq!(clone.raise_bound(), 42);
}
