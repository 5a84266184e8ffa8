// flowprops/build.rs

fn main() {
    let version = std::env::var("CARGO_PKG_VERSION").unwrap();
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());
    let hash = get_git_hash().unwrap_or_else(|| "no-git".to_string());
    let dirty = check_git_dirty().unwrap_or("");

    let full_version = format!("{} {}{}-{}", version, hash, dirty, profile);
    println!("cargo:rustc-env=FLOWPROPS_CLI_VERSION={}", full_version);

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/HEAD");
}

fn get_git_hash() -> Option<String> {
    let output = std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if hash.len() < 8 || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    Some(hash[..8].to_string())
}

fn check_git_dirty() -> Option<&'static str> {
    let status = std::process::Command::new("git")
        .args(["diff", "--quiet"])
        .status()
        .ok()?;

    Some(if status.success() { "" } else { "-dirty" })
}
