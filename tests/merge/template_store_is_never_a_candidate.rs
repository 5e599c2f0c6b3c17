use crate::common::command::go_working_dir;
use crate::common::file::write_template;
use assert_fs::TempDir;
use gen_gitignore::areas::merger::Merger;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn template_store_is_never_a_candidate(
    go_working_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_template(go_working_dir.path(), "Gitignore.gitignore", &["*.swp"]);

    let summary = Merger::new(go_working_dir.path())?.run()?;

    assert!(!go_working_dir.path().join("gitignore").join(".gitignore").exists());
    assert_eq!(summary.outcome_of("gitignore"), None);
    assert_eq!(summary.written(), 1);

    Ok(())
}
