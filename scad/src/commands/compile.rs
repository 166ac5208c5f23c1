use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use scadkit_config::ScadToml;
use scadkit_render::{Error, Mesh, OpenScad};

use super::UnwrapOrExit;
use crate::reports::{MeshReport, Report, TerminalOutput};

#[derive(Args)]
pub struct CompileCommand {
    /// OpenSCAD source file
    pub source: PathBuf,

    /// Output file (defaults to the source path with the configured format's extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to scadkit.toml (defaults are used when the file is missing)
    #[arg(short, long, default_value = "scadkit.toml")]
    pub config: PathBuf,
}

impl CompileCommand {
    /// Run the compile command
    pub fn run(&self) -> Result<()> {
        let config = ScadToml::open_or_default(&self.config).unwrap_or_exit();
        let compiler = OpenScad::from_config(&config.compiler);
        let output = self.output_path(&config.output.format);
        tracing::debug!(compiler = compiler.binary(), output = %output.display(), "compiling");

        let stdout = match compiler.run(&self.source, &output) {
            Ok(stdout) => stdout,
            Err(Error::Compilation(e)) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
            Err(e) => return Err(e).wrap_err("Failed to compile"),
        };
        if !stdout.trim().is_empty() {
            print!("{stdout}");
        }

        println!("Wrote {}", output.display());
        if is_stl(&output) {
            let mesh = Mesh::from_file(&output).wrap_err("Failed to read compiled mesh")?;
            MeshReport::new(&output, &mesh).render(&mut TerminalOutput::new());
        }
        Ok(())
    }

    fn output_path(&self, format: &str) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.source.with_extension(format))
    }
}

fn is_stl(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("stl"))
}
