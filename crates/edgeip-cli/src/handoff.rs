//! The hand-off file bridging the filter stage and the DNS-update stage.
//!
//! One serialized record per line, UTF-8. The file is fully written and
//! closed before being reopened for reading; neither handle outlives its
//! phase.

use edgeip_core::Result;
use std::fs;
use std::path::Path;

/// Write the filtered records, one per line.
pub fn write_records(path: &Path, records: &[String]) -> Result<()> {
    let mut contents = records.join("\n");
    contents.push('\n');
    fs::write(path, contents)?;
    Ok(())
}

/// Read the IPs to sync out of the hand-off file.
///
/// Lines with a `#` separator yield the text before it as the IP. Lines
/// without one (sites that publish no line label) are excluded unless
/// `include_unlabeled` is set, in which case the text before the final `-`
/// is taken as the IP.
pub fn read_ips(path: &Path, include_unlabeled: bool) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;

    let ips = contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            if let Some((ip, _)) = line.split_once('#') {
                Some(ip.to_string())
            } else if include_unlabeled {
                line.rsplit_once('-').map(|(ip, _)| ip.to_string())
            } else {
                None
            }
        })
        .collect();

    Ok(ips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_then_read_labeled_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("edge_ips.txt");

        let records = vec![
            "1.2.3.4#CM-50ms".to_string(),
            "5.6.7.8#CU-60.5ms".to_string(),
        ];
        write_records(&path, &records).unwrap();

        let ips = read_ips(&path, false).unwrap();
        assert_eq!(ips, vec!["1.2.3.4", "5.6.7.8"]);
    }

    #[test]
    fn unlabeled_lines_are_excluded_by_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("edge_ips.txt");

        write_records(
            &path,
            &["1.2.3.4#CM-50ms".to_string(), "5.6.7.8-60ms".to_string()],
        )
        .unwrap();

        let ips = read_ips(&path, false).unwrap();
        assert_eq!(ips, vec!["1.2.3.4"]);
    }

    #[test]
    fn unlabeled_lines_join_when_opted_in() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("edge_ips.txt");

        write_records(
            &path,
            &["1.2.3.4#CM-50ms".to_string(), "5.6.7.8-60ms".to_string()],
        )
        .unwrap();

        let ips = read_ips(&path, true).unwrap();
        assert_eq!(ips, vec!["1.2.3.4", "5.6.7.8"]);
    }

    #[test]
    fn file_ends_with_newline_and_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("edge_ips.txt");

        write_records(&path, &["1.2.3.4#CM-50ms".to_string()]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "1.2.3.4#CM-50ms\n");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        assert!(read_ips(&dir.path().join("absent.txt"), false).is_err());
    }
}
