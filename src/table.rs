//! 表格：列宽、排序与输出（人类可读 / 机器可读）

use crate::config::{Options, SortKey};
use crate::package_manager::PackageRecord;
use std::cmp::Ordering;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

const MACHINE_DELIMITER: &str = " ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Version,
    Release,
    Time,
    Size,
}

impl Column {
    const ALL: [Column; 5] = [
        Column::Name,
        Column::Version,
        Column::Release,
        Column::Time,
        Column::Size,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Column::Name => "NAME",
            Column::Version => "VERSION",
            Column::Release => "RELEASE",
            Column::Time => "TIME",
            Column::Size => "SIZE",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// 大小列右对齐，其余左对齐
    fn right_aligned(self) -> bool {
        self == Column::Size
    }

    fn human_value(self, record: &PackageRecord) -> &str {
        match self {
            Column::Name => &record.name,
            Column::Version => &record.version,
            Column::Release => &record.release,
            Column::Time => &record.time,
            Column::Size => &record.size,
        }
    }

    fn machine_value(self, record: &PackageRecord) -> String {
        match self {
            Column::Time => record.time_raw.to_string(),
            Column::Size => record.size_raw.to_string(),
            _ => self.human_value(record).to_string(),
        }
    }
}

/// 按固定顺序返回启用的列
pub fn enabled_columns(options: &Options) -> Vec<Column> {
    Column::ALL
        .into_iter()
        .filter(|column| match column {
            Column::Name => options.show_name,
            Column::Version => options.show_version,
            Column::Release => options.show_release,
            Column::Time => options.show_time,
            Column::Size => options.show_size,
        })
        .collect()
}

/// 每列最大显示宽度，初始值为表头宽度
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnWidths([usize; 5]);

impl Default for ColumnWidths {
    fn default() -> Self {
        Self(Column::ALL.map(|column| column.label().width()))
    }
}

impl ColumnWidths {
    pub fn get(&self, column: Column) -> usize {
        self.0[column.index()]
    }

    pub fn observe(&mut self, record: &PackageRecord) {
        for column in Column::ALL {
            let width = column.human_value(record).width();
            let slot = &mut self.0[column.index()];
            if width > *slot {
                *slot = width;
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PackageTable {
    pub rows: Vec<PackageRecord>,
    pub widths: ColumnWidths,
}

impl PackageTable {
    /// 按原始值稳定排序；降序时相等元素仍保持原有顺序
    pub fn sort(&mut self, key: SortKey, descending: bool) {
        self.rows.sort_by(|a, b| {
            let ord = compare(a, b, key);
            if descending {
                ord.reverse()
            } else {
                ord
            }
        });
    }

    pub fn render<W: Write>(&self, options: &Options, out: &mut W) -> io::Result<()> {
        let columns = enabled_columns(options);

        self.write_header(&columns, options, out)?;
        for record in &self.rows {
            self.write_row(record, &columns, options, out)?;
        }
        self.write_header(&columns, options, out)?;

        if options.count {
            write_count(self.rows.len(), options, out)?;
        }
        Ok(())
    }

    fn write_header<W: Write>(
        &self,
        columns: &[Column],
        options: &Options,
        out: &mut W,
    ) -> io::Result<()> {
        if options.machine {
            return Ok(());
        }
        let header = columns
            .iter()
            .map(|&column| pad_right(column.label(), self.widths.get(column)))
            .collect::<Vec<_>>()
            .join(" | ");
        let rule = format!("|-{}-|", "-".repeat(header.width()));
        writeln!(out, "{}", rule)?;
        writeln!(out, "| {} |", header)?;
        writeln!(out, "{}", rule)
    }

    fn write_row<W: Write>(
        &self,
        record: &PackageRecord,
        columns: &[Column],
        options: &Options,
        out: &mut W,
    ) -> io::Result<()> {
        if options.machine {
            let line = columns
                .iter()
                .map(|column| column.machine_value(record))
                .collect::<Vec<_>>()
                .join(MACHINE_DELIMITER);
            return writeln!(out, "{}", line);
        }

        let line = columns
            .iter()
            .map(|&column| {
                let value = column.human_value(record);
                let width = self.widths.get(column);
                if column.right_aligned() {
                    pad_left(value, width)
                } else {
                    pad_right(value, width)
                }
            })
            .collect::<Vec<_>>()
            .join(" | ");
        writeln!(out, "| {} |", line)
    }
}

fn compare(a: &PackageRecord, b: &PackageRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Time => a.time_raw.cmp(&b.time_raw),
        SortKey::Size => a.size_raw.cmp(&b.size_raw),
    }
}

fn write_count<W: Write>(count: usize, options: &Options, out: &mut W) -> io::Result<()> {
    if options.machine {
        writeln!(out, "{}", count)
    } else {
        writeln!(out, "Count: {}", count)
    }
}

fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", " ".repeat(fill), s)
}

fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}
