//! Text formatting for resource rows

use owo_colors::OwoColorize;

use crate::resources::traits::{Properties, Row};

/// Format a header and its rows as an aligned text table
pub fn format_table(header: &Row, rows: &[Row]) -> String {
    if rows.is_empty() {
        return "No resources found".to_string();
    }

    let num_cols = header.len();
    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();

    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < num_cols {
                widths[i] = widths[i].max(strip_ansi_codes(cell).len());
            }
        }
    }

    let mut output = String::new();

    let mut header_line = String::new();
    for (i, column) in header.iter().enumerate() {
        let padding = widths[i].saturating_sub(column.len());
        header_line.push_str(column);
        header_line.push_str(&" ".repeat(padding + 2));
    }
    output.push_str(&header_line.trim_end().bold().to_string());
    output.push('\n');

    for row in rows {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            if i < num_cols {
                let stripped_len = strip_ansi_codes(cell).len();
                let padding = widths[i].saturating_sub(stripped_len);
                line.push_str(cell);
                line.push_str(&" ".repeat(padding + 2));
            }
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output.trim_end().to_string()
}

/// Format extension properties as aligned `key: value` lines
pub fn format_properties(props: &Properties) -> String {
    let width = props.keys().map(|k| k.len()).max().unwrap_or(0);

    props
        .iter()
        .map(|(key, value)| format!("{key}:{} {value}", " ".repeat(width - key.len())))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Strip ANSI escape codes for length calculation
fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::new();
    let mut in_escape = false;

    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Status values that indicate a healthy state
pub const HEALTHY_STATUSES: &[&str] = &["Running", "Succeeded", "Active", "Bound", "Ready", "True"];

/// Status values that indicate a warning state
pub const WARNING_STATUSES: &[&str] = &[
    "Pending",
    "ContainerCreating",
    "PodInitializing",
    "Terminating",
    "Unknown",
];

/// Status values that indicate an error state
pub const ERROR_STATUSES: &[&str] = &[
    "Failed",
    "Error",
    "CrashLoopBackOff",
    "ImagePullBackOff",
    "ErrImagePull",
    "CreateContainerConfigError",
    "InvalidImageName",
    "OOMKilled",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Healthy,
    Warning,
    Error,
    Unknown,
}

/// Determine status category for coloring
pub fn status_category(status: &str) -> StatusCategory {
    if HEALTHY_STATUSES.contains(&status) {
        StatusCategory::Healthy
    } else if ERROR_STATUSES.contains(&status) {
        StatusCategory::Error
    } else if WARNING_STATUSES.contains(&status) {
        StatusCategory::Warning
    } else {
        StatusCategory::Unknown
    }
}

/// Colorize a status string based on its category
pub fn colorize_status(status: &str) -> String {
    match status_category(status) {
        StatusCategory::Healthy => status.green().to_string(),
        StatusCategory::Warning => status.yellow().to_string(),
        StatusCategory::Error => status.red().to_string(),
        StatusCategory::Unknown => status.to_string(),
    }
}
