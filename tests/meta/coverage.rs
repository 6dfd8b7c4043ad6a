//! Checks that the unit test tree mirrors `src` and is wired into its target

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::{Path, PathBuf};

    const SRC_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";

    /// Rust files under `root`, relative to it, sorted
    fn rust_files(root: &Path) -> BTreeSet<PathBuf> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];
        while let Some(dir) = pending.pop() {
            let Ok(entries) = fs::read_dir(&dir) else {
                unreachable!("{} must be readable", dir.display());
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    pending.push(path);
                    continue;
                }
                let is_rust = path.extension().is_some_and(|ext| ext == "rs");
                if let (true, Ok(relative)) = (is_rust, path.strip_prefix(root)) {
                    found.insert(relative.to_path_buf());
                }
            }
        }
        found
    }

    // Module files carry logic; roots and mod.rs only declare modules
    fn is_module_file(path: &Path) -> bool {
        path.parent().is_some_and(|p| !p.as_os_str().is_empty())
            && path.file_name().is_some_and(|name| name != "mod.rs")
    }

    fn listing(paths: &[&PathBuf]) -> String {
        paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests each src/<area>/<file>.rs has tests/unit/<area>/<file>.rs
    // Verified by deleting tests/unit/canvas/blend.rs
    #[test]
    fn test_every_module_has_unit_tests() {
        let sources = rust_files(Path::new(SRC_ROOT));
        let mirrors = rust_files(Path::new(UNIT_ROOT));

        let missing: Vec<_> = sources
            .iter()
            .filter(|path| is_module_file(path) && !mirrors.contains(*path))
            .collect();
        assert!(
            missing.is_empty(),
            "src modules without a tests/unit mirror:\n{}",
            listing(&missing)
        );
    }

    // Tests unit test files do not outlive their source module
    #[test]
    fn test_no_orphaned_unit_tests() {
        let sources = rust_files(Path::new(SRC_ROOT));
        let mirrors = rust_files(Path::new(UNIT_ROOT));

        let orphaned: Vec<_> = mirrors
            .iter()
            .filter(|path| is_module_file(path) && !sources.contains(*path))
            .collect();
        assert!(
            orphaned.is_empty(),
            "tests/unit files with no src counterpart:\n{}",
            listing(&orphaned)
        );
    }

    // Tests every mirror file is declared, so the unit target compiles it
    // Verified by removing `pub mod star;` from tests/unit/motif/mod.rs
    #[test]
    fn test_unit_modules_are_declared() {
        let root = Path::new(UNIT_ROOT);
        let Ok(harness) = fs::read_to_string(root.join("main.rs")) else {
            unreachable!("tests/unit/main.rs must exist");
        };

        let mut undeclared = Vec::new();
        for path in rust_files(root).iter().filter(|p| is_module_file(p)) {
            let (Some(area), Some(module)) = (
                path.parent().and_then(Path::to_str),
                path.file_stem().and_then(std::ffi::OsStr::to_str),
            ) else {
                continue;
            };
            let area_mod = fs::read_to_string(root.join(area).join("mod.rs")).unwrap_or_default();
            let declared = harness.contains(&format!("mod {area};"))
                && area_mod.contains(&format!("pub mod {module};"));
            if !declared {
                undeclared.push(path.clone());
            }
        }

        assert!(
            undeclared.is_empty(),
            "unit test files not reachable from tests/unit/main.rs:\n{}",
            listing(&undeclared.iter().collect::<Vec<_>>())
        );
    }

    // Tests every file holding tests actually defines one
    #[test]
    fn test_all_test_files_contain_tests() {
        let empty: Vec<_> = rust_files(Path::new("tests"))
            .into_iter()
            .filter(|path| {
                path.file_name()
                    .is_some_and(|name| name != "main.rs" && name != "mod.rs")
            })
            .filter(|path| {
                fs::read_to_string(Path::new("tests").join(path))
                    .is_ok_and(|content| !content.contains("#[test]"))
            })
            .collect();

        assert!(
            empty.is_empty(),
            "test files without any #[test] function:\n{}",
            listing(&empty.iter().collect::<Vec<_>>())
        );
    }
}
