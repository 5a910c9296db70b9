fn main() {
    // shown in the page footer
    let built = chrono::Utc::now().format("%Y-%m-%d").to_string();
    println!("cargo:rustc-env=BUILD_TIME={built}");
    println!("cargo:rerun-if-changed=build.rs");
}
