//! Embeds the build version as `DOTLINKS_VERSION`.
use std::process::Command;

fn main() {
    // DOTLINKS_VERSION wins when set by a release build; local builds use git describe.
    if let Ok(version) = std::env::var("DOTLINKS_VERSION") {
        println!("cargo:rustc-env=DOTLINKS_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        println!("cargo:rustc-env=DOTLINKS_VERSION={version}");
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=DOTLINKS_VERSION");
}
