//! 包数据库模块 — 对 rpm 的封装与表格加载

pub mod parser;
pub mod types;

// 重新导出常用类型
pub use types::{PackageRecord, RawPackage};

use crate::config::Options;
use crate::error::QueryError;
use crate::format::{size_to_string, time_to_string_in};
use crate::table::{ColumnWidths, PackageTable};
use chrono::{Local, TimeZone};
use duct::cmd;
use parser::{parse_query_output, QUERY_FORMAT};
use std::fmt::Display;

/// 已安装包的数据来源
pub trait PackageProvider {
    /// 一次性返回全部已安装包，保持数据库顺序
    fn installed_packages(&self) -> Result<Vec<RawPackage>, QueryError>;
}

/// 通过 `rpm -qa` 读取系统 rpm 数据库
#[derive(Debug, Clone)]
pub struct RpmDatabase {
    pub command: String,
}

impl Default for RpmDatabase {
    fn default() -> Self {
        Self {
            command: "rpm".to_string(),
        }
    }
}

impl PackageProvider for RpmDatabase {
    fn installed_packages(&self) -> Result<Vec<RawPackage>, QueryError> {
        log::debug!("querying installed packages via {}", self.command);

        let output = cmd!(&self.command, "-qa", "--queryformat", QUERY_FORMAT)
            .stdout_capture()
            .stderr_capture()
            .unchecked()
            .run()
            .map_err(|e| QueryError::DataSource(format!("failed to run {}: {}", self.command, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(QueryError::DataSource(format!(
                "{} -qa exited with {}: {}",
                self.command,
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8(output.stdout).map_err(|e| {
            QueryError::DataSource(format!("{} output is not valid UTF-8: {}", self.command, e))
        })?;
        parse_query_output(&stdout)
    }
}

/// 读取全部包并生成表格行，时间按本机时区显示
pub fn load_packages<P: PackageProvider>(
    provider: &P,
    options: &Options,
) -> Result<PackageTable, QueryError> {
    load_packages_in(provider, options, &Local)
}

/// 机器模式下不做格式化，也不统计列宽
pub fn load_packages_in<P, Tz>(
    provider: &P,
    options: &Options,
    tz: &Tz,
) -> Result<PackageTable, QueryError>
where
    P: PackageProvider,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut table = PackageTable {
        rows: Vec::new(),
        widths: ColumnWidths::default(),
    };

    for raw in provider.installed_packages()? {
        let record = to_record(raw, options.machine, tz)?;
        if !options.machine {
            table.widths.observe(&record);
        }
        table.rows.push(record);
    }

    log::info!("loaded {} installed packages", table.rows.len());
    Ok(table)
}

fn to_record<Tz>(raw: RawPackage, machine: bool, tz: &Tz) -> Result<PackageRecord, QueryError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let (time, size) = if machine {
        (raw.install_time.to_string(), raw.size.to_string())
    } else {
        let time = time_to_string_in(raw.install_time, tz).ok_or_else(|| {
            QueryError::DataSource(format!(
                "install time {} of {} is out of range",
                raw.install_time, raw.name
            ))
        })?;
        (time, size_to_string(raw.size))
    };

    Ok(PackageRecord {
        name: raw.name,
        version: raw.version,
        release: raw.release,
        time,
        size,
        time_raw: raw.install_time,
        size_raw: raw.size,
    })
}
