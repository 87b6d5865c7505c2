/// Formats a count with comma thousands separators, e.g. `12345` -> `"12,345"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-number share of `part` in `total`, 0 when `total` is 0.
pub fn percent_of(part: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u64
}

/// Number of pages needed for `total` rows at `per_page` rows each.
pub fn page_count(total: u64, per_page: u32) -> u64 {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(u64::from(per_page))
}

pub fn or_na(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("N/A")
        .to_string()
}

pub fn format_score(score: f64) -> String {
    format!("{}", score.round() as i64)
}

/// Renders an RFC 3339 or naive ISO timestamp as `YYYY-MM-DD`; anything else is returned as-is.
pub fn format_created_at(raw: &str) -> String {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}
