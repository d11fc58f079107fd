//! Test harness for twig integration tests

use std::path::Path;
use std::process::Command;

pub use twig::test_utils::TestTree;

/// Run the twig binary in `dir` with color disabled.
pub fn run_twig(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_twig");
    let output = Command::new(binary)
        .arg("--color")
        .arg("never")
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run twig");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_named_root() {
        let tree = TestTree::named("R");
        assert!(tree.path().ends_with("R"));
        assert!(tree.path().is_dir());
    }

    #[test]
    fn test_harness_add_file() {
        let tree = TestTree::new();
        let file_path = tree.add_file("nested/test.txt", "hello");
        assert!(file_path.exists());
    }
}
