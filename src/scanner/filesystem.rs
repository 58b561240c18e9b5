//! File system traversal
//!
//! Lazy, depth-first walk over candidate files, filtered by a skip-name set
//! and an extension allow-list before any content is read. Dependency trees,
//! build output, and version-control metadata are pruned at the directory
//! level so the scan never pays I/O for them.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// File extensions whose content is scanned.
const SCANNABLE_EXTENSIONS: [&str; 36] = [
    "js", "jsx", "ts", "tsx", "mjs", "cjs", "py", "pyw", "rb", "php", "java", "kt", "scala", "go",
    "rs", "c", "cpp", "h", "hpp", "cs", "swift", "vue", "svelte", "json", "yaml", "yml", "toml",
    "env", "sql", "graphql", "gql", "tf", "hcl", "sh", "bash", "rules",
];

/// Directory names pruned from traversal entirely.
const SKIP_DIRS: [&str; 14] = [
    "node_modules",
    ".git",
    ".svn",
    "vendor",
    "__pycache__",
    ".pytest_cache",
    ".mypy_cache",
    "coverage",
    ".nyc_output",
    ".idea",
    ".vscode",
    ".vs",
    ".secguard",
    "target",
];

/// Build-output directories, pruned unless bundle scanning is requested.
const BUNDLE_DIRS: [&str; 5] = ["dist", "build", "out", ".next", "public"];

/// Generated-artifact file suffixes, skipped unless bundle scanning is on.
const BUNDLE_SUFFIXES: [&str; 3] = [".min.js", ".bundle.js", ".chunk.js"];

/// Lockfiles, never worth scanning.
const SKIP_FILES: [&str; 3] = ["package-lock.json", "yarn.lock", "pnpm-lock.yaml"];

/// Extensionless file names that are still scannable configuration.
const SPECIAL_FILES: [&str; 4] = [".env", "Dockerfile", "Makefile", ".firebaserc"];

/// Options controlling traversal.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Also descend into build output and scan bundle artifacts.
    pub include_bundles: bool,
    /// Path substrings to exclude, from user configuration.
    pub ignore: Vec<String>,
}

/// Whether a file's name/extension makes it a scan candidate.
pub fn is_scannable(path: &Path, options: &WalkOptions) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };

    if SKIP_FILES.contains(&name) {
        return false;
    }
    if !options.include_bundles && BUNDLE_SUFFIXES.iter().any(|s| name.ends_with(s)) {
        return false;
    }

    if SPECIAL_FILES.contains(&name) || name.starts_with(".env") {
        return true;
    }

    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SCANNABLE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn is_skipped_dir(name: &str, options: &WalkOptions) -> bool {
    if SKIP_DIRS.contains(&name) {
        return true;
    }
    !options.include_bundles && BUNDLE_DIRS.contains(&name)
}

/// Lazily walk `root`, yielding scannable file paths depth-first.
///
/// Excluded trees are pruned before descent, so no I/O happens inside them.
pub fn walk(root: &Path, options: &WalkOptions) -> impl Iterator<Item = PathBuf> {
    let filter_options = options.clone();
    let yield_options = options.clone();

    WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .git_global(false)
        .parents(false)
        .filter_entry(move |entry| {
            let name = entry.file_name().to_string_lossy();
            if entry.file_type().is_some_and(|t| t.is_dir()) && is_skipped_dir(&name, &filter_options)
            {
                return false;
            }
            true
        })
        .build()
        .flatten()
        .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
        .map(|entry| entry.into_path())
        .filter(move |path| {
            if !is_scannable(path, &yield_options) {
                return false;
            }
            let path_str = path.to_string_lossy();
            !yield_options.ignore.iter().any(|ig| path_str.contains(ig))
        })
}

/// Best-effort file read: undecodable bytes are replaced rather than failing
/// the scan.
pub fn read_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_walk_skips_dependency_dirs() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("node_modules/pkg/index.js"), "skip me").unwrap();
        fs::write(root.join("src/app.js"), "scan me").unwrap();

        let files: Vec<_> = walk(root, &WalkOptions::default()).collect();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("src/app.js"));
    }

    #[test]
    fn test_walk_extension_allow_list() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("app.py"), "code").unwrap();
        fs::write(root.join("photo.png"), "binary").unwrap();
        fs::write(root.join("notes.txt"), "text").unwrap();

        let files: Vec<_> = walk(root, &WalkOptions::default()).collect();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("app.py"));
    }

    #[test]
    fn test_walk_env_files_included() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join(".env"), "KEY=value").unwrap();
        fs::write(root.join(".env.local"), "KEY=value").unwrap();

        let files: Vec<_> = walk(root, &WalkOptions::default()).collect();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_bundles_excluded_by_default() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("dist")).unwrap();
        fs::write(root.join("dist/main.js"), "bundled").unwrap();
        fs::write(root.join("app.min.js"), "minified").unwrap();

        assert_eq!(walk(root, &WalkOptions::default()).count(), 0);

        let with_bundles = WalkOptions {
            include_bundles: true,
            ..Default::default()
        };
        assert_eq!(walk(root, &with_bundles).count(), 2);
    }

    #[test]
    fn test_ignore_substrings() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("generated")).unwrap();
        fs::write(root.join("generated/api.ts"), "generated").unwrap();
        fs::write(root.join("api.ts"), "handwritten").unwrap();

        let options = WalkOptions {
            ignore: vec!["generated".to_string()],
            ..Default::default()
        };
        let files: Vec<_> = walk(root, &options).collect();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("api.ts"));
    }

    #[test]
    fn test_read_lossy_tolerates_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mixed.js");
        fs::write(&path, [b'o', b'k', 0xFF, 0xFE, b'!']).unwrap();

        let content = read_lossy(&path).unwrap();
        assert!(content.starts_with("ok"));
        assert!(content.ends_with('!'));
    }
}
