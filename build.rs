use semver::Version;
use std::process::Command;

fn main() {
    set_git_build_info();
}

fn set_git_build_info() {
    let base_version = env!("CARGO_PKG_VERSION");

    let Ok(mut version) = Version::parse(base_version) else {
        println!("cargo:rustc-env=SAMPLEGEN_VERSION={}", base_version);
        return;
    };

    // Only pre-release builds carry git metadata.
    let should_add_git_info = !version.pre.is_empty();

    let final_version = if should_add_git_info {
        let commit = git(&["rev-parse", "--short", "HEAD"]).map(|s| s.trim().to_string());
        let is_dirty = git(&["status", "--porcelain"])
            .map(|s| !s.trim().is_empty())
            .unwrap_or(false);

        let mut metadata_parts = Vec::new();
        if !version.build.is_empty() {
            metadata_parts.push(version.build.to_string());
        }
        if let Some(commit) = commit {
            metadata_parts.push(commit);
        }
        if is_dirty {
            metadata_parts.push("dirty".to_string());
        }

        match metadata_parts.join(".").parse::<semver::BuildMetadata>() {
            Ok(build) if !metadata_parts.is_empty() => {
                version.build = build;
                version.to_string()
            }
            _ => version.to_string(),
        }
    } else {
        base_version.into()
    };

    println!("cargo:rustc-env=SAMPLEGEN_VERSION={}", final_version);

    if should_add_git_info {
        println!("cargo:rerun-if-changed=.git/HEAD");
        println!("cargo:rerun-if-changed=.git/index");
    }
}

fn git(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
}
