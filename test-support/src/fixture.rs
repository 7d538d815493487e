//! Fixture files for parser tests.
//!
//! Provides the standard configuration texts used across the test suites and
//! helpers to write them into a temporary directory.

#![expect(clippy::expect_used, reason = "simplify test setup")]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Well-formed file with a global section and three named sections,
/// exercising whitespace around keys, separators and values.
pub const STANDARD: &str = concat!(
    "key in global section = -255\n",
    "[section]\n",
    "key in named section = 255\n",
    "key in missing section = 256\n",
    "[types]\n",
    "integer value = 42\n",
    "double value  = 3.14\n",
    "string value  = accelerate\n",
    "[whitespace]\n",
    "  \t  \tkey left=8\n",
    "key right  \t  \t=9\n",
    "  \t  \tkey both  \t  \t=10\n",
    "value left=  \t  \t11\n",
    "value right=12  \t  \t\n",
    "value both=  \t  \t13  \t  \t\n",
    "=empty key\n",
    "empty string =\n",
    "empty int    =\n",
    "empty double =\n",
    "whitespace-only int =  \t  \t \n",
);

/// File whose second header repeats the first.
pub const DUPLICATE_SECTION: &str = "[repeat section]\n[repeat section]\n";

/// Temporary directory holding fixture files.
///
/// The directory and its files are removed on drop.
#[derive(Debug)]
pub struct FixtureDir {
    dir: TempDir,
}

impl FixtureDir {
    /// Create an empty fixture directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Write `contents` to `name` inside the directory and return its path.
    #[must_use]
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        write_fixture(self.dir.path(), name, contents)
    }

    /// Path of a file that is never created.
    #[must_use]
    pub fn missing(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Directory path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for FixtureDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Write `contents` to `dir/name` and return the file path.
///
/// # Examples
///
/// ```
/// use tempfile::tempdir;
/// use test_support::{STANDARD, write_fixture};
///
/// let dir = tempdir().unwrap();
/// let path = write_fixture(dir.path(), "test.ini", STANDARD);
/// assert!(path.ends_with("test.ini"));
/// ```
#[must_use]
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}
