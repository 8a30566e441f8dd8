use std::env;

const LIB_DIR_VAR: &str = "COMPILED_ASM_LIB_DIR";
const LIB_NAME_VAR: &str = "COMPILED_ASM_LIB_NAME";
const DEFAULT_LIB_NAME: &str = "compiled";

fn main() {
    println!("cargo:rerun-if-env-changed={}", LIB_DIR_VAR);
    println!("cargo:rerun-if-env-changed={}", LIB_NAME_VAR);

    // The routine is only referenced when the feature is on.
    if env::var_os("CARGO_FEATURE_LINKED_ROUTINE").is_none() {
        return;
    }

    if let Some(dir) = env::var_os(LIB_DIR_VAR) {
        println!("cargo:rustc-link-search=native={}", dir.to_string_lossy());
    }

    let name = env::var(LIB_NAME_VAR).unwrap_or_else(|_| DEFAULT_LIB_NAME.to_string());
    println!("cargo:rustc-link-lib=static={}", name);
}
