use crate::{pages::dashboard::aggregator::StatField, utils::format::format_count};

pub fn stat_value(field: StatField) -> String {
    format_count(field.value)
}

pub fn coverage_label(percent: u64) -> String {
    format!("({percent}%)")
}
