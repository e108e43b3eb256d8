use crate::calculator::{calculate, min_drives};
use crate::models::info::RaidInfo;
use crate::models::raid::{RaidConfiguration, RaidLevel, RaidResult};
use crate::util::human::{fmt_capacity, fmt_stars, rating_label};
use serde_json::{json, Value};

const RULE: &str = "═══════════════════════════════════════════════";

/// Human-readable result for one configuration. A warning replaces the
/// numeric section, the way the form shows either one or the other.
pub fn generate(config: &RaidConfiguration, result: &RaidResult) -> String {
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    let mut out = String::new();

    out.push_str(&format!("{}\n", RULE));
    out.push_str(&format!("  RAID Calculator — {}\n", config.level.name()));
    out.push_str(&format!("  Generated {}\n", now));
    out.push_str(&format!("{}\n\n", RULE));

    out.push_str("── Drive Configuration ────────────────────────\n");
    out.push_str(&format!("  Number of drives   {}\n", config.drive_count));
    out.push_str(&format!("  Drive size         {} {}\n", config.drive_size, config.unit.label()));
    out.push('\n');

    match &result.warning_message {
        Some(msg) => {
            out.push_str("── Warning ────────────────────────────────────\n");
            out.push_str(&format!("  ⚠ {}\n", msg));
        }
        None => {
            out.push_str("── Results ────────────────────────────────────\n");
            out.push_str(&format!("  Usable capacity    {}\n", fmt_capacity(result.usable_capacity, config.unit)));
            out.push_str(&format!("  Failures tolerated {}\n", result.failures_tolerated));
            out.push_str(&format!(
                "  Speed              {}  {}\n",
                fmt_stars(result.speed_rating), rating_label(result.speed_rating)
            ));
            out.push_str(&format!(
                "  Availability       {}  {}\n",
                fmt_stars(result.availability_rating), rating_label(result.availability_rating)
            ));
        }
    }
    out.push('\n');
    out.push_str(&format!("{}\n", RULE));
    out
}

/// One row per level for the same drive count and size.
pub fn compare(config: &RaidConfiguration) -> String {
    let drive_count = config.drive_count;
    let mut out = String::new();
    out.push_str(&format!(
        "  {} × {} {} drives\n\n",
        drive_count, config.drive_size, config.unit.label()
    ));
    out.push_str(&format!(
        "  {:<8} {:>4} {:>14}  {:<7} {:<7} {}\n",
        "Level", "Min", "Usable", "Speed", "Avail", "Failures tolerated"
    ));
    out.push_str(&format!("  {}\n", "─".repeat(78)));

    for level in RaidLevel::ALL {
        let cfg = RaidConfiguration { level, ..*config };
        let r = calculate(&cfg);
        let (usable, failures) = match &r.warning_message {
            Some(msg) => ("—".to_string(), msg.clone()),
            None      => (fmt_capacity(r.usable_capacity, cfg.unit), r.failures_tolerated.clone()),
        };
        out.push_str(&format!(
            "  {:<8} {:>4} {:>14}  {:<7} {:<7} {}\n",
            level.name(), min_drives(level), usable,
            fmt_stars(r.speed_rating), fmt_stars(r.availability_rating), failures,
        ));
    }
    out
}

/// Plain-text version of the level information sheet.
pub fn info_sheet(info: &RaidInfo) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n  {}\n{}\n\n", RULE, info.level.name(), RULE));
    out.push_str(&format!("{}\n\n", info.description));

    let sections: [(&str, &str, &[&str; 3]); 3] = [
        ("Pros", "✓", &info.pros),
        ("Cons", "✗", &info.cons),
        ("Typical Use Cases", "›", &info.use_cases),
    ];
    for (title, bullet, items) in sections {
        out.push_str(&format!("── {} \n", title));
        for item in items.iter() {
            out.push_str(&format!("  {} {}\n", bullet, item));
        }
        out.push('\n');
    }

    out.push_str("── Performance Ratings\n");
    out.push_str(&format!(
        "  Speed         {}  {}\n",
        fmt_stars(info.speed_rating), rating_label(info.speed_rating)
    ));
    out.push_str(&format!(
        "  Availability  {}  {}\n",
        fmt_stars(info.availability_rating), rating_label(info.availability_rating)
    ));
    out
}

/// Machine-readable snapshot: every field, including numbers computed for
/// an invalid configuration.
pub fn json_snapshot(config: &RaidConfiguration, result: &RaidResult) -> Value {
    json!({
        "raidcalc_version": env!("CARGO_PKG_VERSION"),
        "generated_at":     chrono::Local::now().to_rfc3339(),
        "configuration": config,
        "result":        result,
        "valid":         result.is_valid(),
        "display": {
            "usable_capacity": fmt_capacity(result.usable_capacity, config.unit),
            "speed":           fmt_stars(result.speed_rating),
            "availability":    fmt_stars(result.availability_rating),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::info::info_for;
    use crate::models::raid::CapacityUnit;

    #[test]
    fn report_shows_results_when_valid() {
        let cfg = RaidConfiguration::new(RaidLevel::Raid5, 4, 2.5, CapacityUnit::Tb);
        let out = generate(&cfg, &calculate(&cfg));
        assert!(out.contains("RAID 5"));
        assert!(out.contains("7.5 TB"));
        assert!(out.contains("★★★☆☆  Medium"));
        assert!(!out.contains("Warning"));
    }

    #[test]
    fn report_shows_warning_instead_of_numbers() {
        let cfg = RaidConfiguration::new(RaidLevel::Raid10, 5, 1.0, CapacityUnit::Tb);
        let out = generate(&cfg, &calculate(&cfg));
        assert!(out.contains("RAID 10 requires an even number of drives (4 or more)."));
        assert!(!out.contains("Usable capacity"));
    }

    #[test]
    fn compare_has_row_per_level() {
        let cfg = RaidConfiguration::new(RaidLevel::Raid5, 4, 2.0, CapacityUnit::Tb);
        let out = compare(&cfg);
        for level in RaidLevel::ALL {
            assert!(out.contains(level.name()), "missing {}", level.name());
        }
        assert!(out.contains("8.0 TB"));  // RAID 0 / JBOD
        assert!(out.contains("6.0 TB"));  // RAID 5
        assert!(out.contains("4.0 TB"));  // RAID 6 / RAID 10
    }

    #[test]
    fn compare_marks_invalid_levels() {
        let cfg = RaidConfiguration::new(RaidLevel::Raid0, 3, 1.0, CapacityUnit::Gb);
        let out = compare(&cfg);
        assert!(out.contains("RAID 6 requires at least 4 drives."));
        assert!(out.contains("RAID 10 requires an even number of drives (4 or more)."));
    }

    #[test]
    fn info_sheet_lists_sections() {
        let out = info_sheet(&info_for(RaidLevel::Raid6));
        assert!(out.contains("Pros"));
        assert!(out.contains("Typical Use Cases"));
        assert!(out.contains("★★☆☆☆  Low"));
        assert!(out.contains("★★★★☆  High"));
    }

    #[test]
    fn json_keeps_numbers_for_invalid_config() {
        let cfg = RaidConfiguration::new(RaidLevel::Raid6, 3, 2.0, CapacityUnit::Tb);
        let v = json_snapshot(&cfg, &calculate(&cfg));
        assert_eq!(v["configuration"]["level"], "raid6");
        assert_eq!(v["result"]["usable_capacity"], 2.0);
        assert_eq!(v["result"]["warning_message"], "RAID 6 requires at least 4 drives.");
        assert_eq!(v["valid"], false);
        assert!(v["generated_at"].is_string());
    }
}
