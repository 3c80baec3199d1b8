use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use mockgen_codegen::{GenerationReport, Generator, GeneratorConfig, TemplateRenderer};
use mockgen_core::WriteMode;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to mockgen.toml (defaults to ./mockgen.toml)
    #[arg(short, long, default_value = "mockgen.toml")]
    pub config: PathBuf,

    /// Output file (overrides mockgen.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only mock protocols
    #[arg(long)]
    pub only_protocols: bool,

    /// Write the output file in place instead of atomically
    #[arg(long)]
    pub no_atomic: bool,

    /// Number of render workers (defaults to the number of logical cores)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Wrap the generated file in a conditional compilation block
    #[arg(long)]
    pub condition: Option<String>,

    /// Print the generated file without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        let renderer = TemplateRenderer::new(&config.runtime);
        let generator = Generator::new(config, renderer);

        if self.dry_run {
            let text = generator.preview().wrap_err("Failed to generate mocks")?;
            print!("{}", text);
            return Ok(());
        }

        let report = generator.generate().wrap_err("Failed to generate mocks")?;
        Self::print_report(&report);
        Ok(())
    }

    fn load_config(&self) -> Result<GeneratorConfig> {
        let mut config = GeneratorConfig::from_file(&self.config)?;

        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if self.only_protocols {
            config.only_protocols = true;
        }
        if self.no_atomic {
            config.atomic = false;
        }
        if let Some(jobs) = self.jobs {
            eyre::ensure!(jobs > 0, "--jobs must be at least 1");
            config.jobs = Some(jobs);
        }
        if let Some(condition) = &self.condition {
            config.condition = Some(condition.clone());
        }
        tracing::debug!(
            config = %self.config.display(),
            output = %config.output.display(),
            types = config.types.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    fn print_report(report: &GenerationReport) {
        let mode = match report.mode {
            WriteMode::Atomic => "atomic",
            WriteMode::Direct => "direct",
        };
        println!(
            "Generated {} mock{} ({} bytes, {} write)",
            report.rendered,
            if report.rendered == 1 { "" } else { "s" },
            report.bytes,
            mode
        );
        if report.skipped > 0 {
            println!("Skipped {} non-protocol type(s)", report.skipped);
        }
        println!("Output: {}", report.output.display());
    }
}
