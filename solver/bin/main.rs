use std::path::{Path, PathBuf};

use anyhow::bail;
use argh::FromArgs;
use solver::{
    driver::{solve_file, solve_folder, ImageStatus},
    SolverConfig,
};

#[derive(FromArgs)]
/// Find the shortest path through maze images
struct Args {
    /// path to a JSON file with solver settings
    #[argh(option)]
    config: Option<PathBuf>,

    /// pixels brighter than this are open space (default 128)
    #[argh(option)]
    threshold: Option<u8>,

    /// width of the drawn path in pixels (default 3)
    #[argh(option)]
    thickness: Option<usize>,

    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Solve(SolveArgs),
    Batch(BatchArgs),
}

#[derive(FromArgs)]
/// Solve a single maze image, writing solved_<name> next to it
#[argh(subcommand, name = "solve")]
struct SolveArgs {
    /// path to the maze image
    #[argh(positional)]
    image: PathBuf,

    /// folder to write the solution into instead of the image's folder
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,
}

#[derive(FromArgs)]
/// Solve every maze image in a folder
#[argh(subcommand, name = "batch")]
struct BatchArgs {
    /// folder holding the maze images
    #[argh(positional)]
    folder: PathBuf,
}

impl Args {
    fn solver_config(&self) -> anyhow::Result<SolverConfig> {
        let mut config = match &self.config {
            Some(path) => SolverConfig::load(path)?,
            None => SolverConfig::default(),
        };

        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(thickness) = self.thickness {
            config.path_thickness = thickness;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    let config = args.solver_config()?;

    match args.command {
        Command::Solve(cmd) => {
            let output_dir = match cmd.output {
                Some(dir) => dir,
                None => match cmd.image.parent() {
                    Some(parent) if parent != Path::new("") => parent.to_path_buf(),
                    _ => PathBuf::from("."),
                },
            };

            let report = solve_file(&cmd.image, &output_dir, &config)?;
            match report.status {
                ImageStatus::Solved { .. } => Ok(()),
                ImageStatus::NoSolution { .. } => {
                    bail!("No solution found for {}", cmd.image.display())
                }
                ImageStatus::EndpointNotFound => bail!(
                    "Start or end point not found in {}",
                    cmd.image.display()
                ),
                ImageStatus::Failed(reason) => bail!(reason),
            }
        }
        Command::Batch(cmd) => {
            let summary = solve_folder(&cmd.folder, &config)?;
            println!("{}", summary);
            Ok(())
        }
    }
}
