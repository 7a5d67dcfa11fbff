//! Generate kind enumerations for the fixture headers under `kinds/`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// (header under `kinds/`, generated file under `OUT_DIR`)
const FIXTURES: &[(&str, &str)] = &[
    ("logic_kinds.h", "logic_kind.rs"),
    ("api_kinds.h", "api_kind.rs"),
    ("empty_kinds.h", "empty_kind.rs"),
];

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let kinds_dir = manifest_dir.join("kinds");

    println!("cargo:rerun-if-changed={}", kinds_dir.display());
    for (header, generated) in FIXTURES {
        generate(&kinds_dir.join(header), header, &out_dir.join(generated));
    }
}

fn generate(header: &Path, source_name: &str, output: &Path) {
    println!("cargo:rerun-if-changed={}", header.display());

    let text = fs::read_to_string(header)
        .unwrap_or_else(|e| panic!("cannot read kinds header '{}': {}", header.display(), e));
    let generated = kindgen::generate(&text, source_name)
        .unwrap_or_else(|e| panic!("{:?}", miette::Report::new(e)));
    kindgen::write_atomic(output, &generated.code)
        .unwrap_or_else(|e| panic!("{}", e));
}
