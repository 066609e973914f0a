use std::env;
use std::path::PathBuf;

#[cfg(feature = "cpp_std_sys")]
fn build_and_link_cpp_std_sys() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let cpp_std_sort_cpp_path = manifest_dir
        .join("src")
        .join("unstable")
        .join("cpp_std_sort.cpp")
        .canonicalize()
        .unwrap();

    // Tell Cargo that if the given file changes, to rerun this build script.
    println!(
        "cargo:rerun-if-changed={}",
        cpp_std_sort_cpp_path.display()
    );

    // cc emits the matching cargo:rustc-link-lib lines, including the C++ stdlib.
    cc::Build::new()
        .cpp(true)
        .file(&cpp_std_sort_cpp_path)
        .flag_if_supported("-std=c++17")
        .opt_level(2)
        .warnings(true)
        .extra_warnings(true)
        .compile("cpp_std_sys");
}

#[cfg(not(feature = "cpp_std_sys"))]
fn build_and_link_cpp_std_sys() {}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let build_rs_path = manifest_dir.join("build.rs").canonicalize().unwrap();

    // By default without this line, cargo re-runs the build script for all source changes.
    println!("cargo:rerun-if-changed={}", build_rs_path.display());

    build_and_link_cpp_std_sys();
}
