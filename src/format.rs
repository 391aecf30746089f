//! 安装时间与大小的可读格式

use chrono::TimeZone;
use std::fmt::Display;

pub const TIME_FORMAT: &str = "%d. %m. %Y %H:%M:%S";

/// 按给定时区格式化安装时间；时间戳超出 chrono 可表示范围时返回 `None`
pub fn time_to_string_in<Tz>(epoch: i64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    tz.timestamp_opt(epoch, 0)
        .single()
        .map(|dt| dt.format(TIME_FORMAT).to_string())
}

/// 每三位数字一组，组间以空格分隔：1234567 -> "1 234 567"
pub fn size_to_string(bytes: u64) -> String {
    let digits: Vec<char> = bytes.to_string().chars().rev().collect();
    let grouped: Vec<String> = digits
        .chunks(3)
        .map(|chunk| chunk.iter().collect())
        .collect();
    grouped.join(" ").chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn size_groups_by_thousands() {
        assert_eq!(size_to_string(0), "0");
        assert_eq!(size_to_string(999), "999");
        assert_eq!(size_to_string(1000), "1 000");
        assert_eq!(size_to_string(1234567), "1 234 567");
        assert_eq!(size_to_string(12345678), "12 345 678");
        assert_eq!(size_to_string(u64::MAX), "18 446 744 073 709 551 615");
    }

    #[test]
    fn epoch_zero_in_utc() {
        assert_eq!(
            time_to_string_in(0, &Utc).as_deref(),
            Some("01. 01. 1970 00:00:00")
        );
    }

    #[test]
    fn time_respects_offset() {
        let cet = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(
            time_to_string_in(1_700_000_000, &cet).as_deref(),
            Some("14. 11. 2023 23:13:20")
        );
    }

    #[test]
    fn out_of_range_time_is_none() {
        assert_eq!(time_to_string_in(i64::MAX, &Utc), None);
    }
}
