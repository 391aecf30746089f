//! rpm --queryformat 输出解析

use super::types::RawPackage;
use crate::error::QueryError;

/// 每行一个包，字段以制表符分隔；转义由 rpm 展开
pub const QUERY_FORMAT: &str = "%{NAME}\\t%{VERSION}\\t%{RELEASE}\\t%{INSTALLTIME}\\t%{LONGSIZE}\\n";

const FIELD_COUNT: usize = 5;

/// 解析整段输出，保持数据库顺序；任何一行格式错误都视为数据源错误
pub fn parse_query_output(output: &str) -> Result<Vec<RawPackage>, QueryError> {
    output
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_line(line).map_err(|reason| malformed(idx + 1, line, &reason)))
        .collect()
}

fn parse_line(line: &str) -> Result<RawPackage, String> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != FIELD_COUNT {
        return Err(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            fields.len()
        ));
    }

    let install_time = fields[3]
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("install time {:?}: {}", fields[3], e))?;
    let size = fields[4]
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("size {:?}: {}", fields[4], e))?;

    Ok(RawPackage {
        name: fields[0].to_string(),
        version: fields[1].to_string(),
        release: fields[2].to_string(),
        install_time,
        size,
    })
}

fn malformed(line_no: usize, line: &str, reason: &str) -> QueryError {
    QueryError::DataSource(format!(
        "malformed record on line {} ({:?}): {}",
        line_no, line, reason
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_records_in_order() {
        let out = "bash\t5.2.26\t1.fc40\t1700000000\t8374925\n\
                   zlib\t1.3\t2.fc40\t1690000000\t204800\n\
                   \n";
        let pkgs = parse_query_output(out).unwrap();
        assert_eq!(pkgs.len(), 2);
        assert_eq!(
            pkgs[0],
            RawPackage {
                name: "bash".into(),
                version: "5.2.26".into(),
                release: "1.fc40".into(),
                install_time: 1_700_000_000,
                size: 8_374_925,
            }
        );
        assert_eq!(pkgs[1].name, "zlib");
    }

    #[test]
    fn empty_output_is_empty_list() {
        assert!(parse_query_output("").unwrap().is_empty());
    }

    #[test]
    fn wrong_field_count_is_data_source_error() {
        let err = parse_query_output("bash\t5.2\t1\n").unwrap_err();
        match err {
            QueryError::DataSource(msg) => {
                assert!(msg.contains("line 1"), "{}", msg);
                assert!(msg.contains("expected 5 fields"), "{}", msg);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn non_numeric_size_is_rejected() {
        let out = "ok\t1\t1\t10\t20\nbad\t1\t1\t10\t(none)\n";
        let err = parse_query_output(out).unwrap_err();
        match err {
            QueryError::DataSource(msg) => {
                assert!(msg.contains("line 2"), "{}", msg);
                assert!(msg.contains("size"), "{}", msg);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
