use crate::reports;
use clap::Args;
use funnelview::config::Config;
use funnelview::error::{FunnelError, FvResult};
use funnelview::funnel::{FunnelSection, SectionKind};

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    #[command(flatten)]
    pub config: Config,

    /// Only show one section, by title (年収別) or key (income)
    #[arg(short, long)]
    pub section: Option<String>,
}

pub fn run(args: ShowArgs, config: &Config, sections: &[FunnelSection]) -> FvResult<()> {
    let filter = match &args.section {
        Some(name) => Some(SectionKind::lookup(name).ok_or_else(|| {
            FunnelError::Config(format!("unknown section '{}'", name))
        })?),
        None => None,
    };

    if sections.is_empty() {
        println!("No funnel data yet.");
        return Ok(());
    }

    println!("\n=== Funnel Viewer ===");
    for section in sections {
        if filter.is_some_and(|k| k != section.kind) {
            continue;
        }
        reports::print_section(section, &config.display);
    }
    Ok(())
}
