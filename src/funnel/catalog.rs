use crate::record::Record;
use serde::Serialize;
use std::sync::OnceLock;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

pub const NEW_PREFIX: &str = "新規";
pub const EXISTING_PREFIX: &str = "既存";

/// (column prefix, display label) per occupation.
pub const OCCUPATIONS: [(&str, &str); 2] = [("会社員", "会社員"), ("フリーランス", "フリーランス")];

pub const EXPERIENCE_BRACKETS: [(&str, &str); 6] = [
    ("未経験", "未経験"),
    ("1年未満", "1年未満"),
    ("1年~2年", "1-2年"),
    ("2年~3年", "2-3年"),
    ("3年~4年", "3-4年"),
    ("4年以上", "4年以上"),
];

pub const INCOME_BRACKETS: [(&str, &str); 6] = [
    ("20万円以下", "～20万円"),
    ("20万円~40万円", "20-40万円"),
    ("40万円~60万円", "40-60万円"),
    ("60万円~80万円", "60-80万円"),
    ("80万円~100万円", "80-100万円"),
    ("100万円以上", "100万円～"),
];

/// Funnel stages, top of funnel first.
#[derive(Debug, Clone, Copy, EnumIter, PartialEq, Eq, Hash)]
pub enum Stage {
    Friends,
    Answers,
    IncentiveClaimed,
    ConsultApplied,
    ConsultScheduled,
    ConsultHeld,
    Referral,
    DealClosed,
}

impl Stage {
    /// Column name suffix; the full column is `<cohort prefix><suffix>`.
    pub fn field_suffix(&self) -> &'static str {
        match self {
            Self::Friends => "友だち数",
            Self::Answers => "回答数",
            Self::IncentiveClaimed => "特典受取",
            Self::ConsultApplied => "コンサル申込",
            Self::ConsultScheduled => "コンサル日程調整済",
            Self::ConsultHeld => "コンサル実施",
            Self::Referral => "紹介",
            Self::DealClosed => "成約",
        }
    }

    /// Label used inside per-cohort funnels.
    pub fn group_label(&self) -> &'static str {
        match self {
            Self::Friends => "友だち",
            Self::Answers => "回答",
            Self::ConsultScheduled => "日程調整",
            other => other.field_suffix(),
        }
    }

    /// Label used in the combined total funnel.
    pub fn total_label(&self) -> &'static str {
        match self {
            Self::ConsultScheduled => "日程調整",
            other => other.field_suffix(),
        }
    }

    pub fn field_key(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.field_suffix())
    }
}

#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Total,
    UserType,
    Occupation,
    Experience,
    Income,
}

impl SectionKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Total => "全体",
            Self::UserType => "ユーザー種別",
            Self::Occupation => "職業別",
            Self::Experience => "経験年数別",
            Self::Income => "年収別",
        }
    }

    /// Accepts either the Japanese title or the snake_case key.
    pub fn lookup(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::iter()
            .find(|k| k.title() == name)
            .or_else(|| name.parse().ok())
    }
}

/// Source columns summed into one counter, plus the label shown for it.
#[derive(Debug, Clone, PartialEq)]
pub struct StepDefinition {
    pub keys: Vec<String>,
    pub label: &'static str,
}

impl StepDefinition {
    /// Sum of the cohort counters, saturating at `f64::MAX`.
    pub fn value_in(&self, record: &Record) -> f64 {
        self.keys
            .iter()
            .map(|k| record.number(k))
            .sum::<f64>()
            .min(f64::MAX)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupDefinition {
    pub label: &'static str,
    pub steps: Vec<StepDefinition>,
}

impl GroupDefinition {
    /// Steps for a single cohort. With `skip_leading_count` the friends
    /// stage is dropped and the group starts at answers (7 steps, else 8).
    pub fn cohort(prefix: &str, label: &'static str, skip_leading_count: bool) -> Self {
        let steps = Stage::iter()
            .filter(|s| !(skip_leading_count && *s == Stage::Friends))
            .map(|s| StepDefinition {
                keys: vec![s.field_key(prefix)],
                label: s.group_label(),
            })
            .collect();
        Self { label, steps }
    }

    /// Steps where each counter is the sum of the same column across cohorts.
    pub fn combined(label: &'static str, prefixes: &[&str]) -> Self {
        let steps = Stage::iter()
            .map(|s| StepDefinition {
                keys: prefixes.iter().map(|p| s.field_key(p)).collect(),
                label: s.total_label(),
            })
            .collect();
        Self { label, steps }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionDefinition {
    pub kind: SectionKind,
    pub groups: Vec<GroupDefinition>,
}

/// The fixed table of sections, groups and step keys for this dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct FunnelCatalog {
    pub sections: Vec<SectionDefinition>,
}

impl FunnelCatalog {
    pub fn standard() -> &'static FunnelCatalog {
        static CATALOG: OnceLock<FunnelCatalog> = OnceLock::new();
        CATALOG.get_or_init(FunnelCatalog::build)
    }

    fn build() -> Self {
        let sections = SectionKind::iter()
            .map(|kind| {
                let groups = match kind {
                    SectionKind::Total => vec![GroupDefinition::combined(
                        kind.title(),
                        &[NEW_PREFIX, EXISTING_PREFIX],
                    )],
                    SectionKind::UserType => vec![
                        GroupDefinition::cohort(NEW_PREFIX, "新規ユーザー", false),
                        GroupDefinition::cohort(EXISTING_PREFIX, "既存ユーザー", false),
                    ],
                    SectionKind::Occupation => bracket_groups(&OCCUPATIONS),
                    SectionKind::Experience => bracket_groups(&EXPERIENCE_BRACKETS),
                    SectionKind::Income => bracket_groups(&INCOME_BRACKETS),
                };
                SectionDefinition { kind, groups }
            })
            .collect();

        Self { sections }
    }
}

fn bracket_groups(table: &[(&str, &'static str)]) -> Vec<GroupDefinition> {
    table
        .iter()
        .map(|&(prefix, label)| GroupDefinition::cohort(prefix, label, true))
        .collect()
}
