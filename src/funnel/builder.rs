use super::catalog::{FunnelCatalog, GroupDefinition, StepDefinition, EXISTING_PREFIX, NEW_PREFIX};
use super::percentage::conversion_percentage;
use super::types::{FunnelGroup, FunnelSection, FunnelStep};
use crate::record::Record;
use tracing::debug;

/// Resolves each definition against the record and links consecutive steps
/// with their conversion rate. The last step always carries 0%.
pub fn build_steps(record: &Record, defs: &[StepDefinition]) -> Vec<FunnelStep> {
    let values: Vec<f64> = defs.iter().map(|d| d.value_in(record)).collect();

    defs.iter()
        .zip(&values)
        .enumerate()
        .map(|(i, (def, &value))| {
            let percentage = values
                .get(i + 1)
                .map_or(0.0, |&next| conversion_percentage(value, next));

            FunnelStep {
                step: def.label.to_string(),
                value,
                percentage,
            }
        })
        .collect()
}

/// Funnel for one cohort, reading `<prefix><stage>` columns.
pub fn build_group_steps(
    record: &Record,
    prefix: &str,
    skip_leading_count: bool,
) -> Vec<FunnelStep> {
    let group = GroupDefinition::cohort(prefix, "", skip_leading_count);
    build_steps(record, &group.steps)
}

/// Total funnel: new and existing cohorts summed stage by stage.
pub fn build_aggregate_steps(record: &Record) -> Vec<FunnelStep> {
    let group = GroupDefinition::combined("", &[NEW_PREFIX, EXISTING_PREFIX]);
    build_steps(record, &group.steps)
}

/// Builds every dashboard section in display order.
///
/// `None` means the provider had no row at all and yields no sections. An
/// empty record still yields the full layout with zeroed counters.
pub fn build_sections(record: Option<&Record>) -> Vec<FunnelSection> {
    let Some(record) = record else {
        debug!("No record available; returning no sections");
        return Vec::new();
    };

    FunnelCatalog::standard()
        .sections
        .iter()
        .map(|def| {
            let groups: Vec<FunnelGroup> = def
                .groups
                .iter()
                .map(|g| FunnelGroup {
                    label: g.label.to_string(),
                    steps: build_steps(record, &g.steps),
                })
                .collect();

            let section = FunnelSection {
                title: def.kind.title().to_string(),
                kind: def.kind,
                groups,
            };
            debug!(
                section = %section.kind,
                groups = section.groups.len(),
                steps = section.step_count(),
                "Built funnel section"
            );
            section
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_definitions() {
        assert!(build_steps(&Record::new(), &[]).is_empty());
    }

    #[test]
    fn test_single_step_has_no_conversion() {
        let rec: Record = [("新規成約", 4u32)].into_iter().collect();
        let defs = vec![StepDefinition {
            keys: vec!["新規成約".to_string()],
            label: "成約",
        }];
        let steps = build_steps(&rec, &defs);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].value, 4.0);
        assert_eq!(steps[0].percentage, 0.0);
    }

    #[test]
    fn test_group_labels_not_keys() {
        let steps = build_group_steps(&Record::new(), "会社員", true);
        let labels: Vec<&str> = steps.iter().map(|s| s.step.as_str()).collect();
        assert_eq!(
            labels,
            vec!["回答", "特典受取", "コンサル申込", "日程調整", "コンサル実施", "紹介", "成約"]
        );
    }
}
