//! 表格导出格式化
//!
//! 先构造与库无关的表格描述（标题、列、行），再用 rust_xlsxwriter 渲染。
//! 布局固定：第 0 行标题，第 1 行空行，第 2 行表头，第 3 行起为数据。

use rust_xlsxwriter::{Color, Format, Workbook};

use crate::errors::Result;

/// 缺失值的显示文本
pub const MISSING: &str = "N/A";

const TITLE_ROW: u32 = 0;
const HEADER_ROW: u32 = 2;
const FIRST_DATA_ROW: u32 = 3;

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Missing,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// 空白字符串同样视为缺失
    pub fn optional_text(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Cell::Text(v.to_string()),
            _ => Cell::Missing,
        }
    }

    pub fn optional_number(value: Option<f64>) -> Self {
        value.map_or(Cell::Missing, Cell::Number)
    }

    /// 单元格的文本形式
    pub fn display(&self) -> String {
        match self {
            Cell::Text(v) => v.clone(),
            Cell::Number(v) => v.to_string(),
            Cell::Missing => MISSING.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportColumn {
    pub header: &'static str,
    pub width: f64,
}

impl ExportColumn {
    pub const fn new(header: &'static str, width: f64) -> Self {
        Self { header, width }
    }
}

#[derive(Debug, Clone)]
pub struct ExportSheet {
    pub sheet_name: String,
    pub title: String,
    pub columns: Vec<ExportColumn>,
    pub rows: Vec<Vec<Cell>>,
}

impl ExportSheet {
    /// 渲染为 xlsx 二进制
    pub fn render(&self) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();

        let title_format = Format::new()
            .set_bold()
            .set_font_size(14)
            .set_font_color(Color::White)
            .set_background_color(Color::RGB(0x007BFF));
        let header_format = Format::new()
            .set_bold()
            .set_background_color(Color::RGB(0xE9ECEF));

        let sheet = workbook.add_worksheet().set_name(&self.sheet_name)?;

        sheet.write_string_with_format(TITLE_ROW, 0, &self.title, &title_format)?;

        for (col, column) in self.columns.iter().enumerate() {
            let col = col as u16;
            sheet.write_string_with_format(HEADER_ROW, col, column.header, &header_format)?;
            sheet.set_column_width(col, column.width)?;
        }

        for (offset, cells) in self.rows.iter().enumerate() {
            let row = FIRST_DATA_ROW + offset as u32;
            for (col, cell) in cells.iter().enumerate() {
                let col = col as u16;
                match cell {
                    Cell::Text(v) => sheet.write_string(row, col, v)?,
                    Cell::Number(v) => sheet.write_number(row, col, *v)?,
                    Cell::Missing => sheet.write_string(row, col, MISSING)?,
                };
            }
        }

        Ok(workbook.save_to_buffer()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_cells() {
        assert_eq!(Cell::optional_text(None), Cell::Missing);
        assert_eq!(Cell::optional_text(Some("  ")), Cell::Missing);
        assert_eq!(Cell::optional_text(Some("slides.pdf")).display(), "slides.pdf");
        assert_eq!(Cell::optional_number(None).display(), "N/A");
        assert_eq!(Cell::optional_number(Some(4.5)).display(), "4.5");
    }

    #[test]
    fn test_render_produces_xlsx_archive() {
        let sheet = ExportSheet {
            sheet_name: "Test".into(),
            title: "Title".into(),
            columns: vec![ExportColumn::new("Field", 20.0), ExportColumn::new("Value", 40.0)],
            rows: vec![
                vec![Cell::text("ID"), Cell::Number(1.0)],
                vec![Cell::text("Materials File"), Cell::Missing],
            ],
        };
        let bytes = sheet.render().unwrap();
        // xlsx 是 zip 容器
        assert_eq!(&bytes[..2], b"PK");
    }
}
