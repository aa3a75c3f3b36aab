//! Injects the build revision and optional supported-version overrides.

use std::env;
use std::process::Command;

const FORWARDED: [&str; 2] = ["KUBEVER_MIN_KUBE_VERSION", "KUBEVER_MAX_KUBE_VERSION"];

fn main() {
    // CI exports the revision; local builds ask git
    let sha = env::var("GIT_SHA")
        .ok()
        .filter(|sha| !sha.is_empty())
        .unwrap_or_else(|| run("git", &["rev-parse", "--short=8", "HEAD"]));
    println!("cargo:rustc-env=KUBEVER_BUILD_GIT_SHA={sha}");

    for name in FORWARDED {
        if let Ok(value) = env::var(name) {
            println!("cargo:rustc-env={name}={value}");
        }
        println!("cargo:rerun-if-env-changed={name}");
    }

    println!("cargo:rerun-if-env-changed=GIT_SHA");
    // Only re-calculate the revision when there's a new commit
    println!("cargo:rerun-if-changed=../.git/HEAD");
}

/// Run a command returning its trimmed stdout, or an empty string with a cargo warning
fn run(cmd: &str, args: &[&str]) -> String {
    match Command::new(cmd).args(args).output() {
        Ok(output) if output.status.success() => {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        }
        Ok(output) => {
            println!(
                "cargo:warning=build.rs failed running '{cmd} {}': '{output:?}'",
                args.join(" ")
            );
            String::new()
        }
        Err(err) => {
            println!(
                "cargo:warning=build.rs error running '{cmd} {}': {err}.",
                args.join(" ")
            );
            String::new()
        }
    }
}
