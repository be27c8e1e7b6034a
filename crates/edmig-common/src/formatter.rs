use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder rendered in place of a payload that dumps to nothing.
pub const EMPTY_PLACEHOLDER: &str = "<empty>";

/// Renders an arbitrary payload as inspectable text.
pub trait ValueDumper {
    fn dump(&self, value: &Value) -> String;
}

/// Block-style YAML, easiest to scan in a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlDumper;

/// Pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDumper;

impl ValueDumper for YamlDumper {
    fn dump(&self, value: &Value) -> String {
        dump_scalar(value).unwrap_or_else(|| {
            serde_yaml::to_string(value).unwrap_or_else(|_| format!("{:#?}", value))
        })
    }
}

impl ValueDumper for JsonDumper {
    fn dump(&self, value: &Value) -> String {
        dump_scalar(value).unwrap_or_else(|| {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| format!("{:#?}", value))
        })
    }
}

/// Null and bare strings are shown as-is so that blank payloads collapse to
/// the placeholder.
fn dump_scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DumpFormat {
    #[default]
    Yaml,
    Json,
}

impl DumpFormat {
    pub fn dumper(self) -> Box<dyn ValueDumper> {
        match self {
            DumpFormat::Yaml => Box::new(YamlDumper),
            DumpFormat::Json => Box::new(JsonDumper),
        }
    }
}

/// Dump a payload for display: trimmed, or [`EMPTY_PLACEHOLDER`] when nothing
/// is left.
pub fn dump_payload(dumper: &dyn ValueDumper, value: &Value) -> String {
    let dump = dumper.dump(value);
    let trimmed = dump.trim();
    if trimmed.is_empty() {
        EMPTY_PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Render a boxed text table. Cells may span several lines.
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let columns = rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(headers.len()))
        .max()
        .unwrap_or(0);
    if columns == 0 {
        return String::new();
    }

    let header_row: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut widths = vec![0usize; columns];
    for row in std::iter::once(&header_row).chain(rows.iter()) {
        for (i, cell) in row.iter().enumerate() {
            for line in cell.lines() {
                widths[i] = widths[i].max(line.chars().count());
            }
        }
    }

    let border = {
        let mut line = String::from("+");
        for w in &widths {
            line.push_str(&"-".repeat(w + 2));
            line.push('+');
        }
        line
    };

    let mut output = String::new();
    output.push_str(&border);
    output.push('\n');
    if !headers.is_empty() {
        push_row(&mut output, &header_row, &widths);
        output.push_str(&border);
        output.push('\n');
    }
    for row in rows {
        push_row(&mut output, row, &widths);
    }
    if !rows.is_empty() {
        output.push_str(&border);
        output.push('\n');
    }
    output
}

fn push_row(output: &mut String, row: &[String], widths: &[usize]) {
    let cells: Vec<Vec<&str>> = widths
        .iter()
        .enumerate()
        .map(|(i, _)| match row.get(i) {
            Some(cell) if !cell.is_empty() => cell.lines().collect(),
            _ => vec![""],
        })
        .collect();
    let height = cells.iter().map(Vec::len).max().unwrap_or(1);

    for line_no in 0..height {
        output.push('|');
        for (cell, width) in cells.iter().zip(widths) {
            let text = cell.get(line_no).copied().unwrap_or("");
            let pad = width - text.chars().count();
            output.push_str(&format!(" {}{} |", text, " ".repeat(pad)));
        }
        output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_payloads_use_placeholder() {
        for dumper in [DumpFormat::Yaml.dumper(), DumpFormat::Json.dumper()] {
            assert_eq!(dump_payload(dumper.as_ref(), &Value::Null), EMPTY_PLACEHOLDER);
            assert_eq!(dump_payload(dumper.as_ref(), &json!("")), EMPTY_PLACEHOLDER);
            assert_eq!(dump_payload(dumper.as_ref(), &json!("  \n\t ")), EMPTY_PLACEHOLDER);
        }
    }

    #[test]
    fn test_string_payload_is_trimmed() {
        assert_eq!(dump_payload(&YamlDumper, &json!("  <p>Hello</p>\n")), "<p>Hello</p>");
    }

    #[test]
    fn test_nested_payload_shows_all_fields() {
        let data = json!({
            "block": {"indices": [1, 2], "editable": "content"},
            "text": "Hello",
        });

        let yaml = dump_payload(&YamlDumper, &data);
        for needle in ["block", "indices", "editable", "content", "text", "Hello", "- 1", "- 2"] {
            assert!(yaml.contains(needle), "missing {needle:?} in {yaml}");
        }

        let json = dump_payload(&JsonDumper, &data);
        for needle in ["\"block\"", "\"indices\"", "\"editable\": \"content\"", "\"Hello\""] {
            assert!(json.contains(needle), "missing {needle:?} in {json}");
        }
        assert!(json.lines().count() > 1);
    }

    #[test]
    fn test_table_layout() {
        let table = format_table(
            &["Key", "Value"],
            &[
                vec!["Name".into(), "content".into()],
                vec!["Level".into(), "2".into()],
            ],
        );
        let expected = "\
+-------+---------+
| Key   | Value   |
+-------+---------+
| Name  | content |
| Level | 2       |
+-------+---------+
";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_table_multiline_cell() {
        let table = format_table(&[], &[vec!["Data".into(), "a: 1\nbb: 2".into()]]);
        let expected = "\
+------+-------+
| Data | a: 1  |
|      | bb: 2 |
+------+-------+
";
        assert_eq!(table, expected);
    }
}
