// File: crates/ghg-core/build.rs
// Summary: Links the Windows registry API that Skia's font manager needs for system font lookup.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    #[cfg(target_os = "windows")]
    println!("cargo:rustc-link-lib=advapi32");
}
