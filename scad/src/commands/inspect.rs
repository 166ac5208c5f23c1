use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use scadkit_render::Mesh;

use crate::reports::{MeshReport, Report, TerminalOutput};

#[derive(Args)]
pub struct InspectCommand {
    /// STL file to summarize
    pub mesh: PathBuf,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl InspectCommand {
    /// Run the inspect command
    pub fn run(&self) -> Result<()> {
        let mesh = Mesh::from_file(&self.mesh)
            .wrap_err_with(|| format!("Failed to load {}", self.mesh.display()))?;
        let report = MeshReport::new(&self.mesh, &mesh);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
