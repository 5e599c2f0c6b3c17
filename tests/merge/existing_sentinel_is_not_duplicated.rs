use crate::common::SENTINEL_LINE;
use crate::common::command::working_dir;
use crate::common::file::{create_directory, output_path, read_file, write_template};
use assert_fs::TempDir;
use gen_gitignore::areas::merger::Merger;
use gen_gitignore::artifacts::summary::FolderOutcome;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn existing_sentinel_as_last_line_is_not_duplicated(
    working_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let template = write_template(
        working_dir.path(),
        "Rust.gitignore",
        &["target/", "Cargo.lock", SENTINEL_LINE],
    );
    create_directory(&working_dir.path().join("rust"));

    let summary = Merger::new(working_dir.path())?.run()?;

    assert_eq!(read_file(&output_path(working_dir.path(), "rust")), template.content);
    assert_eq!(
        summary.outcome_of("rust"),
        Some(FolderOutcome::Written {
            sentinel_appended: false
        })
    );

    Ok(())
}

#[rstest]
fn existing_sentinel_keeps_its_position(
    working_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let template = write_template(
        working_dir.path(),
        "Node.gitignore",
        &[SENTINEL_LINE, "node_modules/", SENTINEL_LINE, "dist/"],
    );
    create_directory(&working_dir.path().join("node"));

    Merger::new(working_dir.path())?.run()?;

    let content = read_file(&output_path(working_dir.path(), "node"));
    assert_eq!(content, template.content);
    assert_eq!(content.lines().filter(|line| *line == SENTINEL_LINE).count(), 2);

    Ok(())
}
