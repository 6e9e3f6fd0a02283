pub mod builder;
pub mod catalog;
pub mod percentage;
pub mod types;

pub use self::builder::{build_aggregate_steps, build_group_steps, build_sections, build_steps};
pub use self::catalog::{FunnelCatalog, SectionKind, Stage};
pub use self::percentage::conversion_percentage;
pub use self::types::{FlatSection, FunnelGroup, FunnelSection, FunnelStep};
