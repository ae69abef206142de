use std::path::Path;
use std::process::Command;

/// The version of the package, with the git revision when building from a checkout.
fn get_version() -> String {
    let version = env!("CARGO_PKG_VERSION").to_string();
    let revision = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty=+dirty"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .unwrap_or_default();
    if revision.is_empty() {
        version
    } else {
        format!("{version}\n\nRevision: {revision}")
    }
}

fn main() {
    let out_dir = std::env::var("OUT_DIR").expect("missing OUT_DIR");
    let version_file_path = Path::new(&out_dir).join("version.txt");
    if let Err(e) = std::fs::write(&version_file_path, get_version()) {
        panic!(
            "Failed to write version file at {}: {}",
            version_file_path.display(),
            e
        );
    }
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
}
