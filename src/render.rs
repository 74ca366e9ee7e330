//! Grid table rendering.
//!
//! Output looks like:
//!
//! ```text
//! +---------+-------+
//! | brand   | price |
//! +=========+=======+
//! | apple   |   999 |
//! +---------+-------+
//! | xiaomi  |   199 |
//! +---------+-------+
//! ```
//!
//! Columns whose every cell is a number are right-aligned, everything else is left-aligned.

use crate::processing::{parse_number, Output, Scalar};
use crate::types::DataSet;

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

/// Render headers and rows as a grid table. The result ends with a newline.
pub fn render_grid<H, R, C>(headers: &[H], rows: &[R]) -> String
where
    H: AsRef<str>,
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    let ncols = headers.len();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.as_ref().chars().count()).collect();
    for row in rows {
        for (i, w) in widths.iter_mut().enumerate() {
            *w = (*w).max(cell(row, i).chars().count());
        }
    }

    let aligns: Vec<Align> = (0..ncols)
        .map(|i| {
            if !rows.is_empty() && rows.iter().all(|r| parse_number(cell(r, i)).is_ok()) {
                Align::Right
            } else {
                Align::Left
            }
        })
        .collect();

    let mut out = String::new();
    push_rule(&mut out, &widths, '-');
    push_line(&mut out, &widths, &aligns, |i| headers[i].as_ref());
    push_rule(&mut out, &widths, '=');
    for row in rows {
        push_line(&mut out, &widths, &aligns, |i| cell(row, i));
        push_rule(&mut out, &widths, '-');
    }
    if rows.is_empty() {
        // Header-only table: close it with a regular rule instead of the `=` separator.
        out.truncate(out.len() - rule_len(&widths));
        push_rule(&mut out, &widths, '-');
    }
    out
}

/// Render a whole dataset: every column, every row.
pub fn render_dataset(dataset: &DataSet) -> String {
    render_grid(&dataset.schema.columns, &dataset.rows)
}

/// Render an aggregation result as a one-cell table headed by the operator name.
pub fn render_scalar(scalar: &Scalar) -> String {
    render_grid(&[scalar.op.as_str()], &[[format_number(scalar.value)]])
}

/// Render whatever the final pipeline stage produced.
pub fn render_output(output: &Output) -> String {
    match output {
        Output::Table(ds) => render_dataset(ds),
        Output::Scalar(s) => render_scalar(s),
    }
}

const SIGNIFICANT_DIGITS: i32 = 6;

/// `%g`-style number formatting with six significant digits.
///
/// `674.0` prints as `674`, `5.0 / 3.0` as `1.66667`, `1234567.0` as `1.23457e+06`. Trailing
/// zeros are dropped in both the fixed and the exponent form.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return format!("{value}");
    }

    let sci = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if (-4..SIGNIFICANT_DIGITS).contains(&exp) {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exp) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.abs())
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

fn cell<'a, R: AsRef<[C]>, C: AsRef<str> + 'a>(row: &'a R, i: usize) -> &'a str {
    row.as_ref().get(i).map(|c| c.as_ref()).unwrap_or("")
}

fn rule_len(widths: &[usize]) -> usize {
    widths.iter().map(|w| w + 3).sum::<usize>() + 2
}

fn push_rule(out: &mut String, widths: &[usize], fill: char) {
    out.push('+');
    for w in widths {
        out.extend(std::iter::repeat_n(fill, w + 2));
        out.push('+');
    }
    out.push('\n');
}

fn push_line<'a>(
    out: &mut String,
    widths: &[usize],
    aligns: &[Align],
    text: impl Fn(usize) -> &'a str,
) {
    out.push('|');
    for (i, (&w, &align)) in widths.iter().zip(aligns).enumerate() {
        let t = text(i);
        let pad = w - t.chars().count();
        out.push(' ');
        match align {
            Align::Left => {
                out.push_str(t);
                out.extend(std::iter::repeat_n(' ', pad));
            }
            Align::Right => {
                out.extend(std::iter::repeat_n(' ', pad));
                out.push_str(t);
            }
        }
        out.push_str(" |");
    }
    out.push('\n');
}
