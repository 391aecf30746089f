//! 包数据类型定义

/// 包数据库返回的一条原始记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPackage {
    pub name: String,
    pub version: String,
    pub release: String,
    /// 安装时间（Unix 秒）
    pub install_time: i64,
    /// 安装大小（字节）
    pub size: u64,
}

/// 加载后的表格行：原始值用于排序和机器输出，格式化值用于人类可读输出
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub name: String,
    pub version: String,
    pub release: String,
    pub time: String,
    pub size: String,
    pub time_raw: i64,
    pub size_raw: u64,
}
