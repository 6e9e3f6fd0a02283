use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use funnelview::config::DisplayOptions;
use funnelview::funnel::{FunnelGroup, FunnelSection, SectionKind};

fn accent(kind: SectionKind) -> Color {
    match kind {
        SectionKind::Total => Color::Red,
        SectionKind::UserType => Color::Blue,
        SectionKind::Occupation => Color::Magenta,
        SectionKind::Experience => Color::Green,
        SectionKind::Income => Color::Yellow,
    }
}

pub fn print_section(section: &FunnelSection, opts: &DisplayOptions) {
    println!("\n## {}", section.title);

    // The total section has a single unnamed group; the title says it all.
    let show_labels = section.groups.len() > 1;
    for group in &section.groups {
        if show_labels {
            println!("\n[{}]", group.label);
        }
        println!("{}", group_table(section.kind, group, opts));
    }
}

pub fn group_table(kind: SectionKind, group: &FunnelGroup, opts: &DisplayOptions) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if opts.no_color {
        table.force_no_tty();
    }

    let color = accent(kind);
    let last = group.steps.len().saturating_sub(1);

    table.set_header(group.steps.iter().map(|s| {
        let cell = Cell::new(&s.step)
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Center);
        if opts.no_color {
            cell
        } else {
            cell.fg(color)
        }
    }));

    table.add_row(group.steps.iter().map(|s| {
        Cell::new(format_value(s.value)).set_alignment(CellAlignment::Right)
    }));

    table.add_row(group.steps.iter().enumerate().map(|(i, s)| {
        let text = if i == last {
            String::new()
        } else {
            format!("→ {:.*}%", opts.precision, s.percentage)
        };
        Cell::new(text).set_alignment(CellAlignment::Right)
    }));

    table
}

/// Counters are whole numbers in practice; only show decimals when present.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use funnelview::funnel::FunnelStep;

    fn sample_group() -> FunnelGroup {
        FunnelGroup {
            label: "会社員".to_string(),
            steps: vec![
                FunnelStep {
                    step: "回答".to_string(),
                    value: 40.0,
                    percentage: 25.0,
                },
                FunnelStep {
                    step: "特典受取".to_string(),
                    value: 10.0,
                    percentage: 0.0,
                },
            ],
        }
    }

    #[test]
    fn test_group_table_renders_percentages() {
        let opts = DisplayOptions {
            precision: 1,
            no_color: true,
        };
        let rendered = group_table(SectionKind::Occupation, &sample_group(), &opts).to_string();
        assert!(rendered.contains("回答"));
        assert!(rendered.contains("40"));
        assert!(rendered.contains("→ 25.0%"));
        // terminal step carries no arrow
        assert_eq!(rendered.matches('→').count(), 1);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(180.0), "180");
        assert_eq!(format_value(2.5), "2.5");
    }
}
