/// Column headers plus string cells, optionally preceded by a title line.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub title: Option<String>,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 6;
const SEPARATOR: &str = "  ";

impl Table {
    #[must_use]
    pub fn new(headers: Vec<&'static str>) -> Self {
        Self {
            headers,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render as aligned columns with a dashed divider under the header.
    #[must_use]
    pub fn render(&self, options: TableOptions) -> String {
        let mut lines = Vec::with_capacity(3 + self.rows.len());
        if let Some(title) = &self.title {
            lines.push(title.clone());
        }
        if self.rows.is_empty() {
            lines.push(String::from("(no rows)"));
            return lines.join("\n");
        }

        let mut widths = self.column_widths();
        fit_widths(&mut widths, &self.headers, options.max_width);

        let header_line = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(header, width)| pad(&truncate_text(header, *width), *width, false))
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        let divider = "-".repeat(header_line.trim_end().chars().count());
        lines.push(header_line.trim_end().to_string());
        lines.push(divider);

        for row in &self.rows {
            let line = widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let value = row.get(index).map_or("-", String::as_str);
                    let text = truncate_text(value, *width);
                    let cell = pad(&text, *width, looks_numeric(&text));
                    if options.color {
                        colorize_status(&text, &cell)
                    } else {
                        cell
                    }
                })
                .collect::<Vec<_>>()
                .join(SEPARATOR);
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(index))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
                    .max(header.len())
                    .max(MIN_COLUMN)
            })
            .collect()
    }
}

/// Shrink the widest columns one step at a time until the table fits.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();

    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out = value.chars().take(width - 1).collect::<String>();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim().trim_end_matches('%');
    !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit() || ch == '.')
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Color a padded cell by the review status it holds.
fn colorize_status(text: &str, cell: &str) -> String {
    let code = match text {
        "PASSED" => "32",
        "PENDING" => "33",
        "FAILED" => "31",
        "NOT_APPLICABLE" => "90",
        _ => return cell.to_string(),
    };
    format!("\u{1b}[{code}m{cell}\u{1b}[0m")
}
