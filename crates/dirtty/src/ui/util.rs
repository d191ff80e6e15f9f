use time::OffsetDateTime;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Current wall-clock time as unix seconds.
pub fn unix_now() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}

/// Human-readable size for the listing's size column.
///
/// Directories show `-`; files scale through binary units with one
/// decimal above the byte range.
pub fn format_size(bytes: u64, is_file: bool) -> String {
    if !is_file {
        return "-".to_string();
    }
    if bytes < 1024 {
        return format!("{bytes} B");
    }

    const UNITS: &[&str] = &["KB", "MB", "GB"];
    let mut size = bytes as f64 / 1024.0;
    for unit in UNITS {
        if size < 1024.0 {
            return format!("{size:.1} {unit}");
        }
        size /= 1024.0;
    }

    format!("{size:.1} TB")
}

/// Human-relative rendering of a modification time ("3 minutes ago").
///
/// Bucket boundaries follow the usual 45/90 convention: up to 45 units
/// stays plural in the current unit, past 90 rolls into the next one.
pub fn relative_time(mtime: i64, now: i64) -> String {
    let elapsed = now.saturating_sub(mtime);
    if elapsed < 45 {
        return "just now".to_string();
    }
    if elapsed < 90 {
        return "a minute ago".to_string();
    }
    if elapsed < 45 * MINUTE {
        return format!("{} minutes ago", round_div(elapsed, MINUTE));
    }
    if elapsed < 90 * MINUTE {
        return "an hour ago".to_string();
    }
    if elapsed < 22 * HOUR {
        return format!("{} hours ago", round_div(elapsed, HOUR));
    }
    if elapsed < 36 * HOUR {
        return "a day ago".to_string();
    }
    if elapsed < 26 * DAY {
        return format!("{} days ago", round_div(elapsed, DAY));
    }
    if elapsed < 46 * DAY {
        return "a month ago".to_string();
    }
    if elapsed < 320 * DAY {
        return format!("{} months ago", round_div(elapsed, MONTH));
    }
    if elapsed < 548 * DAY {
        return "a year ago".to_string();
    }

    format!("{} years ago", round_div(elapsed, YEAR))
}

fn round_div(value: i64, unit: i64) -> i64 {
    (value + unit / 2) / unit
}

/// Truncates `text` to `width` characters, ending with an ellipsis when
/// anything was cut.
pub fn truncate_with_ellipsis(text: &str, width: u16) -> String {
    let width = width as usize;
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut truncated: String = text.chars().take(width - 1).collect();
    truncated.push('…');
    truncated
}
