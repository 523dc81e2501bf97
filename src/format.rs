use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const SCALE_PREFIXES: [&str; 6] = ["", "K", "M", "G", "T", "P"];

/// Load classification shared by the CPU and RAM readouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Ok,
    Warn,
    Critical,
}

/// Critical above 80%, warn above 50%, ok otherwise. Both bounds are exclusive.
pub fn classify(percent: f32) -> Severity {
    if percent > 80.0 {
        Severity::Critical
    } else if percent > 50.0 {
        Severity::Warn
    } else {
        Severity::Ok
    }
}

/// Scales `value` by powers of 1024 and prints it with two decimals, e.g.
/// `humanize(1536.0, "B") == "1.50KB"`. Anything past the peta range stays in P.
pub fn humanize(value: f64, suffix: &str) -> String {
    let mut scaled = value;
    let mut prefix = SCALE_PREFIXES[0];
    for next in &SCALE_PREFIXES[1..] {
        if scaled < 1024.0 {
            break;
        }
        scaled /= 1024.0;
        prefix = next;
    }
    format!("{scaled:.2}{prefix}{suffix}")
}

pub fn humanize_bytes(bytes: u64) -> String {
    humanize(bytes as f64, "B")
}

pub fn truncate_unicode(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            result.push('\u{2026}');
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanize_bytes_picks_largest_prefix_below_1024() {
        assert_eq!(humanize_bytes(0), "0.00B");
        assert_eq!(humanize_bytes(1023), "1023.00B");
        assert_eq!(humanize_bytes(1024), "1.00KB");
        assert_eq!(humanize_bytes(1536), "1.50KB");
        assert_eq!(humanize_bytes(1024 * 1024 * 1024), "1.00GB");
        assert_eq!(humanize_bytes(5 * 1024_u64.pow(4)), "5.00TB");
    }

    #[test]
    fn humanize_saturates_at_peta() {
        assert_eq!(humanize(2048.0 * 1024f64.powi(5), "B"), "2048.00PB");
    }

    #[test]
    fn humanize_custom_suffix() {
        assert_eq!(humanize(2048.0, "B/s"), "2.00KB/s");
    }

    #[test]
    fn classify_bounds_are_exclusive() {
        assert_eq!(classify(81.0), Severity::Critical);
        assert_eq!(classify(80.0), Severity::Warn);
        assert_eq!(classify(51.0), Severity::Warn);
        assert_eq!(classify(50.0), Severity::Ok);
        assert_eq!(classify(0.0), Severity::Ok);
    }

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_unicode("bash", 10), "bash");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_unicode("systemd-journald", 8), "systemd\u{2026}");
    }
}
