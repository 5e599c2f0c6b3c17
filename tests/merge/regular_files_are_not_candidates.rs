use crate::common::command::go_working_dir;
use crate::common::file::{FileSpec, output_path, write_file, write_template};
use assert_fs::TempDir;
use gen_gitignore::areas::merger::Merger;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn regular_file_named_like_a_folder_is_not_a_candidate(
    go_working_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_template(go_working_dir.path(), "Rust.gitignore", &["target/"]);
    write_file(FileSpec::new(
        go_working_dir.path().join("rust"),
        "just a file".to_string(),
    ));

    let summary = Merger::new(go_working_dir.path())?.run()?;

    assert!(go_working_dir.path().join("rust").is_file());
    assert_eq!(summary.outcome_of("rust"), None);
    assert_eq!(summary.written(), 1);
    assert!(output_path(go_working_dir.path(), "go").is_file());

    Ok(())
}
