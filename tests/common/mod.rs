#![allow(dead_code)]

use funnelview::funnel::{FunnelSection, SectionKind};
use funnelview::record::Record;

/// Builder for Record to keep fixtures readable
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            record: Record::new(),
        }
    }

    pub fn field(mut self, key: &str, value: u32) -> Self {
        self.record.insert(key, value);
        self
    }

    pub fn text(mut self, key: &str, value: &str) -> Self {
        self.record.insert(key, value);
        self
    }

    /// Fills every stage of one cohort, starting at `top` and shrinking by `drop` per stage.
    pub fn cohort(mut self, prefix: &str, top: u32, drop: u32) -> Self {
        let suffixes = [
            "友だち数",
            "回答数",
            "特典受取",
            "コンサル申込",
            "コンサル日程調整済",
            "コンサル実施",
            "紹介",
            "成約",
        ];
        let mut v = top;
        for s in suffixes {
            self.record.insert(format!("{}{}", prefix, s), v);
            v = v.saturating_sub(drop);
        }
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}

pub fn section(sections: &[FunnelSection], kind: SectionKind) -> &FunnelSection {
    sections
        .iter()
        .find(|s| s.kind == kind)
        .unwrap_or_else(|| panic!("section {} missing", kind))
}
