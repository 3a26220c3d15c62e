//! Build script for SmartPlate
//!
//! Stamps the binary with its build time and cargo profile. A CI pipeline can
//! also pass its own run number through `SMARTPLATE_BUILD_NUMBER`.

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-env-changed=SMARTPLATE_BUILD_NUMBER");

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    println!("cargo:rustc-env=SMARTPLATE_BUILD_TIMESTAMP={}", timestamp);

    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());
    println!("cargo:rustc-env=SMARTPLATE_BUILD_PROFILE={}", profile);

    if let Ok(number) = std::env::var("SMARTPLATE_BUILD_NUMBER") {
        println!("cargo:rustc-env=SMARTPLATE_BUILD_NUMBER={}", number.trim());
    }
}
