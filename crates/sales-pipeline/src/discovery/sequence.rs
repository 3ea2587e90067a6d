//! Contiguity check over sorted record files.

use sales_core::errors::DiscoveryError;

use super::types::RecordFile;

/// Fail unless every adjacent pair of ids differs by exactly one.
/// `files` must already be sorted ascending.
pub fn verify_consecutive(files: &[RecordFile]) -> Result<(), DiscoveryError> {
    for pair in files.windows(2) {
        let (previous, next) = (&pair[0], &pair[1]);
        if previous.id().checked_add(1) != Some(next.id()) {
            return Err(DiscoveryError::NonConsecutive {
                previous: previous.file_name().to_string(),
                next: next.file_name().to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn files(ids: &[&str]) -> Vec<RecordFile> {
        ids.iter()
            .map(|id| RecordFile::new(id, PathBuf::from(format!("/in/{id}.rcd"))).unwrap())
            .collect()
    }

    #[test]
    fn empty_and_single_are_consecutive() {
        assert!(verify_consecutive(&[]).is_ok());
        assert!(verify_consecutive(&files(&["00000007"])).is_ok());
    }

    #[test]
    fn run_need_not_start_at_one() {
        assert!(verify_consecutive(&files(&["00000041", "00000042", "00000043"])).is_ok());
    }

    #[test]
    fn gap_names_both_files() {
        let err = verify_consecutive(&files(&["00000001", "00000003"])).unwrap_err();
        match err {
            DiscoveryError::NonConsecutive { previous, next } => {
                assert_eq!(previous, "00000001.rcd");
                assert_eq!(next, "00000003.rcd");
            }
            other => panic!("Expected NonConsecutive, got: {other:?}"),
        }
    }

    #[test]
    fn duplicate_ids_are_not_consecutive() {
        assert!(verify_consecutive(&files(&["00000001", "00000001"])).is_err());
    }
}
