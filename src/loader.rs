use crate::error::InfoError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads the whole file into memory. The handle is closed before returning,
/// on the error path as well.
pub fn load(path: &Path) -> Result<Vec<u8>, InfoError> {
    let mut file = File::open(path).map_err(|source| InfoError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut data = Vec::new();
    file.read_to_end(&mut data).map_err(|source| InfoError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), len = data.len(), "loaded file");
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crashinfo.dat");
        let mut file = File::create(&path).unwrap();
        file.write_all(&[1, 2, 3, 4, 5]).unwrap();
        drop(file);

        assert_eq!(load(&path).unwrap(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.dat");
        match load(&path) {
            Err(InfoError::Open { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected open error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.dat");
        File::create(&path).unwrap();
        assert!(load(&path).unwrap().is_empty());
    }
}
