use crate::error::FvResult;
use crate::funnel::{build_sections, FunnelSection};
use crate::provider::RowProvider;
use tracing::{error, info};

/// Service: fetch the latest row and shape it into dashboard sections.
///
/// Never fails. A provider error is logged and reported as "no data", the
/// same as a source with no rows.
pub fn load_sections(provider: &dyn RowProvider) -> Vec<FunnelSection> {
    match try_load_sections(provider) {
        Ok(sections) => sections,
        Err(e) => {
            error!("Failed to read counter source: {}", e);
            Vec::new()
        }
    }
}

/// Service: like [`load_sections`] but surfaces provider errors.
pub fn try_load_sections(provider: &dyn RowProvider) -> FvResult<Vec<FunnelSection>> {
    let record = provider.latest_record()?;
    let sections = build_sections(record.as_ref());
    info!("Built {} funnel sections", sections.len());
    Ok(sections)
}
