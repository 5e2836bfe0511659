//! Table of products added so far

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::invoice::{format_amount, ProductEntry};

use super::theme::{
    ACCENT_PRIMARY, BORDER_DIM, SELECTED_BG, TEXT_BRIGHT, TEXT_FAINT, TEXT_SECONDARY,
};

pub struct ProductTable<'a> {
    products: &'a [ProductEntry],
    grand_total: f64,
    focused: bool,
}

impl<'a> ProductTable<'a> {
    pub fn new(products: &'a [ProductEntry], grand_total: f64) -> Self {
        Self {
            products,
            grand_total,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn block(&self) -> Block<'a> {
        let border = if self.focused { ACCENT_PRIMARY } else { BORDER_DIM };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" Products Added ({}) ", self.products.len()))
            .title_style(Style::default().fg(TEXT_SECONDARY));
        if !self.products.is_empty() {
            block = block.title_bottom(
                Line::from(format!(" Total {} ", format_amount(self.grand_total)))
                    .right_aligned(),
            );
        }
        block
    }
}

/// Keep the selection on a valid row after the list changed
pub fn clamp_selection(state: &mut TableState, len: usize) {
    match (state.selected(), len) {
        (_, 0) => state.select(None),
        (None, _) => state.select(Some(0)),
        (Some(i), len) if i >= len => state.select(Some(len - 1)),
        _ => {}
    }
}

impl StatefulWidget for ProductTable<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut TableState) {
        let block = self.block();

        if self.products.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new("No products yet. Fill in the form and press Enter.")
                .style(Style::default().fg(TEXT_FAINT))
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        }

        let header = Row::new(["#", "name", "weight", "price"]).style(
            Style::default()
                .fg(TEXT_SECONDARY)
                .add_modifier(Modifier::BOLD),
        );

        let rows = self.products.iter().enumerate().map(|(i, product)| {
            Row::new([
                Cell::from(i.to_string()),
                Cell::from(product.name.as_str()),
                Cell::from(product.weight.as_str()),
                Cell::from(Line::from(format_amount(product.price)).right_aligned()),
            ])
            .style(Style::default().fg(TEXT_BRIGHT))
        });

        let highlight = if self.focused {
            Style::default().bg(SELECTED_BG)
        } else {
            Style::default()
        };

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Percentage(45),
                Constraint::Percentage(30),
                Constraint::Min(10),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(highlight);

        StatefulWidget::render(table, area, buf, state);
    }
}
