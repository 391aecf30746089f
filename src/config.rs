//! 命令行选项：扫描参数、校验排序键，生成只读的 `Options`

use crate::error::QueryError;

/// 排序依据的原始字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Time,
    Size,
}

/// 参数扫描得到的原始开关，尚未校验
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    pub show_name: bool,
    pub show_version: bool,
    pub show_release: bool,
    pub show_time: bool,
    pub show_size: bool,
    pub order_by_name: bool,
    pub order_by_time: bool,
    pub order_by_size: bool,
    pub descending: bool,
    pub machine: bool,
    pub count: bool,
}

/// 校验后的显示选项，整个进程生命周期内不再修改
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub show_name: bool,
    pub show_version: bool,
    pub show_release: bool,
    pub show_time: bool,
    pub show_size: bool,
    pub sort_key: Option<SortKey>,
    pub descending: bool,
    pub machine: bool,
    pub count: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Help,
    List(Flags),
}

/// 扫描参数列表（不含程序路径）。
///
/// 无参数或出现 `-h`/`--help` 时返回 `Help`；未识别的参数直接忽略。
pub fn parse_args<I, S>(args: I) -> Invocation
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut flags = Flags::default();
    let mut help = false;
    let mut seen_any = false;

    for arg in args {
        seen_any = true;
        match arg.as_ref() {
            "-h" | "--help" => help = true,
            "-sn" | "--show-name" => flags.show_name = true,
            "-sv" | "--show-version" => flags.show_version = true,
            "-sr" | "--show-release" => flags.show_release = true,
            "-st" | "--show-time" => flags.show_time = true,
            "-ss" | "--show-size" => flags.show_size = true,
            "-on" | "--order-by-name" => flags.order_by_name = true,
            "-ot" | "--order-by-time" => flags.order_by_time = true,
            "-os" | "--order-by-size" => flags.order_by_size = true,
            "-d" | "--descending" => flags.descending = true,
            "-m" | "--machine" => flags.machine = true,
            "-c" | "--count" => flags.count = true,
            other => log::debug!("ignoring unknown argument {:?}", other),
        }
    }

    if help || !seen_any {
        Invocation::Help
    } else {
        Invocation::List(flags)
    }
}

impl Flags {
    /// 最多允许一个排序键
    pub fn validate(self) -> Result<Options, QueryError> {
        let requested: Vec<SortKey> = [
            (self.order_by_name, SortKey::Name),
            (self.order_by_time, SortKey::Time),
            (self.order_by_size, SortKey::Size),
        ]
        .into_iter()
        .filter_map(|(set, key)| set.then_some(key))
        .collect();

        if requested.len() > 1 {
            return Err(QueryError::Configuration(format!(
                "too many order by options ({} given, at most one allowed)",
                requested.len()
            )));
        }

        Ok(Options {
            show_name: self.show_name,
            show_version: self.show_version,
            show_release: self.show_release,
            show_time: self.show_time,
            show_size: self.show_size,
            sort_key: requested.first().copied(),
            descending: self.descending,
            machine: self.machine,
            count: self.count,
        })
    }
}
