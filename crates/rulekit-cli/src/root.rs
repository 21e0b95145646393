use std::path::{Path, PathBuf};

/// Resolve the project root.
///
/// Priority:
/// 1. `--root` flag / `RULEKIT_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `package.json`
/// 3. Walk upward from `cwd` looking for `.git/`
/// 4. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if let Some(dir) = walk_up(&cwd, |d| d.join("package.json").is_file()) {
        return dir;
    }
    if let Some(dir) = walk_up(&cwd, |d| d.join(".git").is_dir()) {
        return dir;
    }

    cwd
}

fn walk_up(start: &Path, found: impl Fn(&Path) -> bool) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        if found(&dir) {
            return Some(dir);
        }
        dir = dir.parent()?.to_path_buf();
    }
}
