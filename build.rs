use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let version = env!("CARGO_PKG_VERSION");

    // Builds outside a checkout (e.g. from a crate tarball) report the bare version.
    let long_version = match git(&["rev-parse", "--short", "HEAD"]) {
        Some(hash) => {
            let dirty = git(&["status", "--porcelain"]).is_some();
            let mut build = hash;
            if dirty {
                build.push_str("-dirty");
            }
            if let Some(date) = git(&["log", "-1", "--format=%cd", "--date=format:%Y-%m-%d"]) {
                build.push(' ');
                build.push_str(&date);
            }
            format!("{} ({})", version, build)
        }
        None => version.to_string(),
    };

    println!("cargo:rustc-env=STOK_LONG_VERSION={}", long_version);
}
