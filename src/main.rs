mod config;
mod error;
mod format;
mod package_manager;
mod table;
mod usage;

use anyhow::Result;
use config::Invocation;
use package_manager::{PackageProvider, RpmDatabase};
use std::io::{self, Write};

fn main() -> Result<()> {
    env_logger::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(std::env::args().skip(1), &RpmDatabase::default(), &mut out)?;
    out.flush()?;

    Ok(())
}

/// 解析 → 校验 → 加载 → 排序 → 输出，每个阶段只执行一次
fn execute<I, S, P, W>(args: I, provider: &P, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    P: PackageProvider,
    W: Write,
{
    let flags = match config::parse_args(args) {
        Invocation::Help => {
            write!(out, "{}", usage::help_text())?;
            return Ok(());
        }
        Invocation::List(flags) => flags,
    };

    // 排序键冲突必须在访问数据库之前报告
    let options = flags.validate()?;

    let mut table = package_manager::load_packages(provider, &options)?;
    if let Some(key) = options.sort_key {
        log::debug!("sorting by {:?}, descending={}", key, options.descending);
        table.sort(key, options.descending);
    }
    table.render(&options, out)?;

    Ok(())
}
