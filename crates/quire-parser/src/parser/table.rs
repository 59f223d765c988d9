//! Tables: a `<columns>` block followed by a `<rows>` block.

use quire_core::dom::{Cell, Table};

use super::{PResult, Parser};
use crate::{error::ErrorCode, symbol::Symbol};

impl Parser<'_> {
    pub(super) fn parse_table(&mut self, table: &mut Table) -> PResult {
        let mark = self.cursor.mark();
        let result = self.table_body(table);
        self.recover(result, mark)
    }

    fn table_body(&mut self, table: &mut Table) -> PResult {
        self.enter(Symbol::Table);
        let has_content = self.cursor.is_start();
        self.parse_attributes(table, None, true)?;
        if !has_content {
            return Err(self.error(ErrorCode::E101, "expected `<columns>` in `<table>`"));
        }

        self.skip_text()?;
        self.expect_element(Symbol::Columns)?;
        self.parse_columns(table)?;

        self.skip_text()?;
        self.expect_element(Symbol::Rows)?;
        self.parse_rows(table)?;

        self.skip_text()?;
        self.expect_end(Symbol::Table)?;
        self.cursor.move_next(false)
    }

    fn parse_columns(&mut self, table: &mut Table) -> PResult {
        let has_content = self.cursor.is_start();
        self.parse_attributes(table.columns_mut(), None, true)?;
        if has_content {
            while self.next_child(Symbol::Columns)? {
                if !self.cursor.is_element(Symbol::Column) {
                    return Err(self.unexpected()?);
                }
                let mut column = table.columns().new_column();
                let has_content = self.cursor.is_start();
                let result = self.parse_attributes(&mut column, None, true);
                table.columns_mut().push(column);
                result?;
                if has_content {
                    self.expect_end(Symbol::Column)?;
                }
                self.cursor.move_next(true)?;
            }
        }
        self.cursor.move_next(true)
    }

    fn parse_rows(&mut self, table: &mut Table) -> PResult {
        let has_content = self.cursor.is_start();
        self.parse_attributes(table.rows_mut(), None, true)?;
        if has_content {
            while self.next_child(Symbol::Rows)? {
                if !self.cursor.is_element(Symbol::Row) {
                    return Err(self.unexpected()?);
                }
                self.parse_row(table)?;
            }
        }
        self.cursor.move_next(true)
    }

    /// A row gets one cell per declared column. Surplus `<cell>` elements
    /// are reported and skipped.
    fn parse_row(&mut self, table: &mut Table) -> PResult {
        self.enter(Symbol::Row);
        let mut row = table.new_row();
        let has_content = self.cursor.is_start();
        let mut result = self.parse_attributes(&mut row, None, true);

        if result.is_ok() && has_content {
            let mut index = 0;
            result = loop {
                match self.next_child(Symbol::Row) {
                    Ok(true) => {}
                    Ok(false) => break Ok(()),
                    Err(diagnostic) => break Err(diagnostic),
                }
                if !self.cursor.is_element(Symbol::Cell) {
                    break Err(self.unexpected().unwrap_or_else(|fatal| fatal));
                }
                let step = match row.cell_mut(index) {
                    Some(cell) => self.parse_cell(cell),
                    None => {
                        let diagnostic = self.error(
                            ErrorCode::E104,
                            format!(
                                "too many cells, the table declares {} columns",
                                table.columns().len()
                            ),
                        );
                        self.report(diagnostic);
                        self.skip_element()
                    }
                };
                if let Err(diagnostic) = step {
                    break Err(diagnostic);
                }
                index += 1;
            };
        }

        table.rows_mut().push(row);
        result?;
        self.cursor.move_next(true)
    }

    fn parse_cell(&mut self, cell: &mut Cell) -> PResult {
        self.enter(Symbol::Cell);
        let has_content = self.cursor.is_start();
        self.parse_attributes(cell, None, false)?;
        if has_content {
            self.parse_document_elements(cell.elements_mut(), Symbol::Cell)?;
        }
        self.cursor.move_next(true)
    }
}
