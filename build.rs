//! Stamps the compile time into the binary for the status tool and banner.

fn main() {
    println!("cargo:rerun-if-changed=src");

    let compiled_at = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    println!("cargo:rustc-env=MACROCHECK_COMPILED_AT={}", compiled_at);
}
