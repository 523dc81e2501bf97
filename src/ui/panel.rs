use color_eyre::Report;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Borders, Cell as TableCell, Paragraph, Row, Table, Wrap,
};

use crate::ui::theme::BorderTone;

/// One styled run of text inside a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub style: Style,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, Style::default())
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Cell {
            text: text.into(),
            style,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::styled(text, Style::default().add_modifier(Modifier::BOLD))
    }

    pub fn empty() -> Self {
        Self::plain("")
    }

    fn span(&self) -> Span<'_> {
        Span::styled(self.text.as_str(), self.style)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub width: Constraint,
    pub alignment: Alignment,
}

impl Column {
    pub fn left(width: Constraint) -> Self {
        Column {
            width,
            alignment: Alignment::Left,
        }
    }

    pub fn right(width: Constraint) -> Self {
        Column {
            width,
            alignment: Alignment::Right,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelBody {
    /// One cell per column in every row.
    Table {
        columns: Vec<Column>,
        header: Option<Vec<Cell>>,
        rows: Vec<Vec<Cell>>,
    },
    /// Free text; the cells of a row are concatenated into one line.
    Lines(Vec<Vec<Cell>>),
}

/// Renderable unit bound into a layout region. Plain data, so building one is
/// free of terminal side effects and two builds can be compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub title: String,
    pub border: BorderTone,
    pub body: PanelBody,
}

impl Panel {
    /// Stand-in for a panel whose metrics could not be read this tick.
    pub fn unavailable(title: &str, error: &Report) -> Self {
        let mut lines = vec![vec![Cell::bold("metrics unavailable")]];
        lines.extend(error.chain().map(|cause| vec![Cell::plain(cause.to_string())]));
        Panel {
            title: format!("{title} (unavailable)"),
            border: BorderTone::Alert,
            body: PanelBody::Lines(lines),
        }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        match &self.body {
            PanelBody::Table { rows, .. } => rows,
            PanelBody::Lines(lines) => lines,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.border.color()))
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().add_modifier(Modifier::BOLD),
            ));

        match &self.body {
            PanelBody::Table {
                columns,
                header,
                rows,
            } => {
                let widths: Vec<Constraint> = columns.iter().map(|c| c.width).collect();
                let mut table = Table::new(
                    rows.iter().map(|row| table_row(row, columns)),
                    widths,
                )
                .block(block)
                .column_spacing(1);
                if let Some(header) = header {
                    table = table.header(
                        table_row(header, columns)
                            .style(Style::default().add_modifier(Modifier::BOLD)),
                    );
                }
                frame.render_widget(table, area);
            }
            PanelBody::Lines(lines) => {
                let text: Vec<Line> = lines
                    .iter()
                    .map(|line| Line::from(line.iter().map(Cell::span).collect::<Vec<_>>()))
                    .collect();
                let paragraph = Paragraph::new(text)
                    .block(block)
                    .wrap(Wrap { trim: false });
                frame.render_widget(paragraph, area);
            }
        }
    }
}

fn table_row<'a>(cells: &'a [Cell], columns: &[Column]) -> Row<'a> {
    Row::new(cells.iter().zip(columns).map(|(cell, column)| {
        TableCell::from(Line::from(cell.span()).alignment(column.alignment))
    }))
}
