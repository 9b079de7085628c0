//! Mock version of std::fs::File;
use mockall::mock;

use std::io::{self, Read, Write};

mock! {
    pub File {}
    impl Write for File {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
        fn flush(&mut self) -> io::Result<()>;
    }
}

/// A file whose every write fails.
pub fn failing_file() -> MockFile {
    let mut file = MockFile::new();
    file.expect_write()
        .returning(|_| Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only file")));
    file.expect_flush().returning(|| Ok(()));
    file
}

mock! {
    pub Source {}
    impl Read for Source {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;
    }
}

/// A reader whose every read fails.
pub fn failing_reader() -> MockSource {
    let mut source = MockSource::new();
    source
        .expect_read()
        .returning(|_| Err(io::Error::new(io::ErrorKind::PermissionDenied, "access denied")));
    source
}
