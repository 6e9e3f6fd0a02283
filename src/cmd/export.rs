use clap::Args;
use funnelview::error::FvResult;
use funnelview::funnel::{FlatSection, FunnelSection};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub config: funnelview::config::Config,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit `{title, data}` with groups concatenated
    #[arg(long, default_value_t = false)]
    pub flat: bool,
}

pub fn run(args: ExportArgs, sections: &[FunnelSection]) -> FvResult<()> {
    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => {
            info!("Writing {} sections to: {}", sections.len(), path.display());
            Box::new(BufWriter::new(File::create(path)?))
        }
        None => Box::new(io::stdout().lock()),
    };

    if args.flat {
        let flat: Vec<FlatSection> = sections.iter().map(FlatSection::from).collect();
        serde_json::to_writer_pretty(&mut out, &flat)?;
    } else {
        serde_json::to_writer_pretty(&mut out, sections)?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
