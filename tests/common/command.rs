use crate::common::file::{create_directory, write_template};
use assert_fs::TempDir;
use rstest::fixture;

#[fixture]
pub fn working_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A working directory with a `Go.gitignore` template and an empty `go` folder.
#[fixture]
pub fn go_working_dir(working_dir: TempDir) -> TempDir {
    write_template(working_dir.path(), "Go.gitignore", &["*.o", "bin/"]);
    create_directory(&working_dir.path().join("go"));

    working_dir
}
