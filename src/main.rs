use anyhow::Result;
use clap::Parser;
use gen_gitignore::areas::merger::Merger;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[derive(Parser)]
#[command(
    name = "gen-gitignore",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Copy language .gitignore templates into project folders",
    long_about = "This command scans the immediate subfolders of the current directory. \
    For every folder with a matching template in ./gitignore (e.g. `go` -> `Go.gitignore`), \
    it writes the template to <folder>/.gitignore, making sure `.pre-commit-config.yaml` is ignored.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let pwd = std::env::current_dir()?;
    let merger = Merger::new(&pwd)?;

    merger.run()?;

    Ok(())
}
