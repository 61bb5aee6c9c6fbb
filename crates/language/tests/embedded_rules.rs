//! Smoke tests running the embedded function regexes over small sources.

use symscan_language::LanguageRegistry;
use symscan_text::{TextAccess, TextSnapshot, find_next};

fn candidates(language: &str, src: &str) -> Vec<(String, usize)> {
	let registry = LanguageRegistry::from_embedded().expect("embedded config compiles");
	let rules = registry.rules_for(language).expect("language has rules");

	let text = TextSnapshot::from(src);
	let mut out = Vec::new();
	let mut at = 0;
	while let Some(c) = find_next(&text, at..text.len_bytes(), &rules.function_regex) {
		at = c.resume;
		out.push((c.text, c.line));
	}
	out
}

#[test]
fn c_definitions() {
	let src = "\
#include <stdio.h>

static int add(int a, int b)
{
	return a + b;
}

int main(void) {
	if (add(1, 2) == 3) {
		return 0;
	}
	return 1;
}
";
	assert_eq!(
		candidates("c", src),
		vec![
			("static int add(int a, int b)\n{".to_string(), 2),
			("int main(void) {".to_string(), 7),
		]
	);
}

#[test]
fn python_definitions() {
	let src = "\
import os

def top(a, b=1):
    return a

class K:
    async def method(self):
        pass
";
	assert_eq!(
		candidates("python", src),
		vec![
			("def top(a, b=1)".to_string(), 2),
			("async def method(self)".to_string(), 6),
		]
	);
}

#[test]
fn rust_definitions_skip_declarations() {
	let src = "\
pub(crate) fn alpha(x: u32) -> u32 {
    x
}

impl Foo {
    pub async fn beta(&self) {}
}

fn gamma();
";
	assert_eq!(
		candidates("rust", src),
		vec![
			("pub(crate) fn alpha(x: u32) -> u32 {".to_string(), 0),
			("pub async fn beta(&self) {".to_string(), 5),
		]
	);
}

#[test]
fn plain_text_has_no_rules() {
	let registry = LanguageRegistry::from_embedded().unwrap();
	assert!(registry.rules_for("text").is_none());
	assert_eq!(
		registry.language_for_path(std::path::Path::new("README.txt")),
		Some("text")
	);
}
