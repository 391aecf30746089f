//! 帮助信息

pub const NAME: &str = "Rpm Query";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DESCRIPTION: &str = "\
Description:
    Utility to get basic info about installed rpm packages in both human and machine readable format.
";

const USAGE: &str = "\
Usage:
    rpm-query [multiple show options] [at most one order option] [multiple misc. options]
";

const EXAMPLES: &str = "\
Examples:
    rpm-query -sn -sv -sr
    rpm-query -sn -ss -os -c
    rpm-query -ss -st -ot -c -m
";

const OPTIONS: &str = "\
Options:
    -h  --help              displays this help message
    -sn --show-name         show name in the list
    -sv --show-version      show version in the list
    -sr --show-release      show release in the list
    -st --show-time         show installation time in the list
    -ss --show-size         show size in the list
    -on --order-by-name     order the list by name
    -ot --order-by-time     order the list by installation time
    -os --order-by-size     order the list by size
    -d  --descending        sort in descending order
    -m  --machine           show data in machine readable format
    -c  --count             include total package count on the last line
";

/// 完整帮助文本：名称版本、描述、用法、示例、选项
pub fn help_text() -> String {
    format!(
        "{} ({})\n\n{}\n{}\n{}\n{}\n",
        NAME, VERSION, DESCRIPTION, USAGE, EXAMPLES, OPTIONS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lists_every_option() {
        let text = help_text();
        assert!(text.starts_with(&format!("{} ({})", NAME, VERSION)));
        for flag in [
            "--help",
            "--show-name",
            "--show-version",
            "--show-release",
            "--show-time",
            "--show-size",
            "--order-by-name",
            "--order-by-time",
            "--order-by-size",
            "--descending",
            "--machine",
            "--count",
        ] {
            assert!(text.contains(flag), "missing {}", flag);
        }
    }
}
