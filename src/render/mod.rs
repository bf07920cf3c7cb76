use crate::frame::Table;

/// Width budget for head/tail previews.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Budget for one rendered line; columns past it are elided from the
    /// middle with a `...` column.
    pub max_width: usize,
    /// Individual cells longer than this are truncated with `...`.
    pub max_cell_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            max_width: 100,
            max_cell_width: 24,
        }
    }
}

/// First `n` rows, default width budget.
pub fn head(table: &Table, n: usize) -> String {
    head_with(table, n, &RenderOptions::default())
}

/// Last `n` rows, default width budget. The positional index column keeps
/// the rows' original indices.
pub fn tail(table: &Table, n: usize) -> String {
    tail_with(table, n, &RenderOptions::default())
}

pub fn head_with(table: &Table, n: usize, opts: &RenderOptions) -> String {
    let count = n.min(table.num_rows());
    render_slice(table, 0, count, opts)
}

pub fn tail_with(table: &Table, n: usize, opts: &RenderOptions) -> String {
    let count = n.min(table.num_rows());
    render_slice(table, table.num_rows() - count, count, opts)
}

fn render_slice(table: &Table, start: usize, count: usize, opts: &RenderOptions) -> String {
    let end = start + count;

    // cell text for the shown rows, truncated to the per-cell cap
    let body: Vec<Vec<String>> = table.rows()[start..end]
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| clip(&cell.to_string(), opts.max_cell_width))
                .collect()
        })
        .collect();

    // per-column width: header vs widest shown cell
    let widths: Vec<usize> = table
        .columns()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let cells = body.iter().map(|row| row[i].len()).max().unwrap_or(0);
            clip(name, opts.max_cell_width).len().max(cells)
        })
        .collect();

    let index_width = if end > 0 {
        (end - 1).to_string().len()
    } else {
        1
    };

    // pick which columns fit; elide from the middle, keeping the last one
    let total = table.num_columns();
    let all_width = index_width + widths.iter().map(|w| w + 2).sum::<usize>();
    let (shown, elided): (Vec<usize>, bool) = if all_width <= opts.max_width || total <= 1 {
        ((0..total).collect(), false)
    } else {
        let last = total - 1;
        // index + "..." column + last column are always present
        let mut used = index_width + (3 + 2) + (widths[last] + 2);
        let mut front = Vec::new();
        for i in 0..last {
            if used + widths[i] + 2 > opts.max_width {
                break;
            }
            used += widths[i] + 2;
            front.push(i);
        }
        front.push(last);
        (front, true)
    };

    let mut out = String::new();

    // header line
    out.push_str(&" ".repeat(index_width));
    for (k, &i) in shown.iter().enumerate() {
        if elided && k == shown.len() - 1 {
            out.push_str("  ...");
        }
        let name = clip(&table.columns()[i], opts.max_cell_width);
        out.push_str(&format!("  {:>width$}", name, width = widths[i]));
    }
    out.push('\n');

    // data lines, right-aligned under their headers
    for (offset, row) in body.iter().enumerate() {
        out.push_str(&format!("{:>width$}", start + offset, width = index_width));
        for (k, &i) in shown.iter().enumerate() {
            if elided && k == shown.len() - 1 {
                out.push_str("  ...");
            }
            out.push_str(&format!("  {:>width$}", row[i], width = widths[i]));
        }
        out.push('\n');
    }

    if elided || count < table.num_rows() {
        out.push_str(&format!("\n[{} rows x {} columns]\n", count, total));
    }
    out
}

fn clip(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
