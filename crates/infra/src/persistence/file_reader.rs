use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use almanac_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> InfraResult<BufReader<File>> {
        File::open(path)
            .map(BufReader::new)
            .map_err(|source| Self::read_error(path, source))
    }

    /// Read the entire file as UTF-8 text.
    pub fn read_to_string(path: &Path) -> InfraResult<String> {
        let mut reader = Self::open_buffered(path)?;
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|source| Self::read_error(path, source))?;
        Ok(text)
    }

    /// Read all of `reader` as UTF-8 text, reporting failures as stdin reads.
    pub fn read_stdin_from(mut reader: impl Read) -> InfraResult<String> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|source| InfrastructureError::StdinRead { source })?;
        Ok(text)
    }

    fn read_error(path: &Path, source: std::io::Error) -> InfrastructureError {
        InfrastructureError::FileRead { path: path.to_path_buf(), source }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn reads_whole_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seeds: 1 2").unwrap();
        assert_eq!(FileReader::read_to_string(file.path()).unwrap(), "seeds: 1 2\n");
    }

    struct BrokenPipe;

    impl Read for BrokenPipe {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn stdin_failure_is_an_input_error() {
        let err = FileReader::read_stdin_from(BrokenPipe).unwrap_err();
        assert!(matches!(err, InfrastructureError::StdinRead { .. }));
        assert!(err.to_string().starts_with("Failed to read standard input"));
    }

    #[test]
    fn stdin_text_is_returned_whole() {
        let text = FileReader::read_stdin_from("seeds: 1 2\n".as_bytes()).unwrap();
        assert_eq!(text, "seeds: 1 2\n");
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let err = FileReader::read_to_string(&path).unwrap_err();
        match err {
            InfrastructureError::FileRead { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
