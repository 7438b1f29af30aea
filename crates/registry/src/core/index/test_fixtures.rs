use std::sync::Arc;

use crate::core::{Definition, EnumLike};

#[derive(Debug, PartialEq)]
pub struct TestDef {
	pub key: &'static str,
	pub value: i32,
}

crate::impl_enum_like_entry!(TestDef, &'static str);

pub fn make_def(key: &'static str, value: i32) -> Arc<TestDef> {
	Arc::new(TestDef { key, value })
}

/// `{A: {key: "x", value: 1}, B: {key: "y", value: 2}}`, plus the handles that went in.
pub fn xy_registry() -> (EnumLike<TestDef>, Arc<TestDef>, Arc<TestDef>) {
	let x = make_def("x", 1);
	let y = make_def("y", 2);
	let def = Definition::new().with("A", x.clone()).with("B", y.clone());
	let registry = EnumLike::try_from(def).expect("distinct keys must build");
	(registry, x, y)
}
