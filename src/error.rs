//! 错误类型

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// 参数组合冲突，在读取数据库之前报告
    #[error("invalid options: {0}")]
    Configuration(String),

    /// 包数据库不可用、rpm 执行失败或记录无法解码
    #[error("package database unavailable: {0}")]
    DataSource(String),
}
