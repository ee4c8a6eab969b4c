//! Order summary
//!
//! Renders a cart and its price breakdown as a terminal table, the way the cart and checkout
//! pages lay out their "Order Summary" card.

use std::{fmt::Write, io};

use decimal_percentage::Percentage;
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::{Cart, CartLineItem},
    discounts::percent_points,
    pricing::{PricingConfig, PricingResult},
};

/// Errors that can occur when writing an order summary.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// A line total does not fit in `i64` minor units.
    #[error("Line total overflowed for cart line {0}")]
    LineOverflow(String),

    /// IO error
    #[error("IO error")]
    IO,
}

/// Cart lines and price breakdown ready to print.
#[derive(Debug, Clone, Copy)]
pub struct OrderSummaryTable<'r, 'a> {
    lines: &'r [CartLineItem<'a>],
    pricing: &'r PricingResult<'a>,
    tax_rate: Percentage,
}

impl<'r, 'a> OrderSummaryTable<'r, 'a> {
    /// Summarise `cart`, priced as `pricing` under `config`.
    pub fn new(
        cart: &'r Cart<'a>,
        pricing: &'r PricingResult<'a>,
        config: &PricingConfig<'_>,
    ) -> Self {
        Self {
            lines: cart.items(),
            pricing,
            tax_rate: config.tax_rate(),
        }
    }

    /// Prints the order summary.
    ///
    /// # Errors
    ///
    /// Returns an error if a line total overflows or the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        if self.lines.is_empty() {
            return writeln!(out, "\nYour cart is empty.\n").map_err(|_err| ReceiptError::IO);
        }

        let mut builder = Builder::default();

        builder.push_record(["Item", "Qty", "Unit Price", "Line Total"]);

        for line in self.lines {
            let line_total = line
                .line_total()
                .ok_or_else(|| ReceiptError::LineOverflow(line.id().to_string()))?;

            builder.push_record([
                line.name().to_string(),
                line.quantity().to_string(),
                line.unit_price().to_string(),
                line_total.to_string(),
            ]);
        }

        write_lines_table(&mut out, builder)?;

        self.write_summary(&mut out)
    }

    fn write_summary(&self, out: &mut impl io::Write) -> Result<(), ReceiptError> {
        let mut rows: Vec<(String, String)> = vec![
            (" Subtotal:".to_string(), self.pricing.subtotal().to_string()),
            (
                " Delivery Fee:".to_string(),
                self.pricing.delivery_fee().to_string(),
            ),
            (
                format!(" Taxes ({}%):", percent_points(&self.tax_rate)),
                self.pricing.tax().to_string(),
            ),
        ];

        if self.pricing.discount().to_minor_units() > 0 {
            rows.push((
                " Discount:".to_string(),
                format!("-{}", self.pricing.discount()),
            ));
        }

        rows.push((
            " \x1b[1mTotal:\x1b[0m".to_string(),
            format!("\x1b[1m{}\x1b[0m", self.pricing.total()),
        ));

        let label_width = rows
            .iter()
            .map(|(label, _)| visible_width(label))
            .max()
            .unwrap_or_default();

        let value_width = rows
            .iter()
            .map(|(_, value)| visible_width(value))
            .max()
            .unwrap_or_default();

        for (label, value) in &rows {
            write_summary_line(out, label, value, label_width, value_width)?;
        }

        writeln!(out).map_err(|_err| ReceiptError::IO)
    }
}

fn write_lines_table(out: &mut impl io::Write, builder: Builder) -> Result<(), ReceiptError> {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(
        1,
        HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤')),
    );

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(1..4), Alignment::right());

    let table_str = colorize_borders(&table.to_string());

    writeln!(out, "\n{table_str}").map_err(|_err| ReceiptError::IO)
}

/// Wraps runs of box-drawing characters (U+2500..U+257F) in dark-grey escape codes.
fn colorize_borders(table: &str) -> String {
    let mut out = String::with_capacity(table.len() + 256);
    let mut in_run = false;

    for ch in table.chars() {
        let box_char = ('\u{2500}'..='\u{257F}').contains(&ch);

        if box_char && !in_run {
            _ = out.write_str("\x1b[90m");
            in_run = true;
        } else if !box_char && in_run {
            _ = out.write_str("\x1b[0m");
            in_run = false;
        }

        out.push(ch);
    }

    if in_run {
        _ = out.write_str("\x1b[0m");
    }

    out
}

/// Character count with ANSI escape sequences skipped.
fn visible_width(s: &str) -> usize {
    let mut width = 0usize;
    let mut in_escape = false;

    for ch in s.chars() {
        if in_escape {
            if ch.is_ascii_alphabetic() {
                in_escape = false;
            }
        } else if ch == '\x1b' {
            in_escape = true;
        } else {
            width += 1;
        }
    }

    width
}

fn write_summary_line(
    out: &mut impl io::Write,
    label: &str,
    value: &str,
    label_col_width: usize,
    value_col_width: usize,
) -> Result<(), ReceiptError> {
    let label_pad = label_col_width.saturating_sub(visible_width(label));
    let value_pad = value_col_width.saturating_sub(visible_width(value));

    writeln!(
        out,
        "{:>label_pad$}{label}  {value_pad}{value}",
        "",
        value_pad = " ".repeat(value_pad)
    )
    .map_err(|_err| ReceiptError::IO)
}
