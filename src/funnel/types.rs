use super::catalog::SectionKind;
use serde::{Deserialize, Serialize};

/// One box in a funnel row: the counter and the conversion rate to the next box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelStep {
    pub step: String,
    pub value: f64,
    pub percentage: f64,
}

/// A labelled run of steps, e.g. one income bracket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunnelGroup {
    pub label: String,
    pub steps: Vec<FunnelStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunnelSection {
    pub title: String,
    #[serde(rename = "key")]
    pub kind: SectionKind,
    pub groups: Vec<FunnelGroup>,
}

/// Legacy `{title, data}` shape where every group is concatenated and the
/// consumer slices by fixed offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatSection {
    pub title: String,
    pub data: Vec<FunnelStep>,
}

impl FunnelSection {
    /// All steps in order, groups concatenated.
    pub fn steps(&self) -> impl Iterator<Item = &FunnelStep> {
        self.groups.iter().flat_map(|g| g.steps.iter())
    }

    pub fn data(&self) -> Vec<FunnelStep> {
        self.steps().cloned().collect()
    }

    pub fn step_count(&self) -> usize {
        self.groups.iter().map(|g| g.steps.len()).sum()
    }

    pub fn group(&self, label: &str) -> Option<&FunnelGroup> {
        self.groups.iter().find(|g| g.label == label)
    }

    pub fn to_flat(&self) -> FlatSection {
        FlatSection {
            title: self.title.clone(),
            data: self.data(),
        }
    }
}

impl From<&FunnelSection> for FlatSection {
    fn from(section: &FunnelSection) -> Self {
        section.to_flat()
    }
}
