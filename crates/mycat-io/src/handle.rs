use std::fs::File;
use std::io::{Cursor, Read, Seek, SeekFrom};
use std::path::Path;

use tracing::debug;

use crate::error::{IoError, Result};

/// A readable, seekable input that can be released explicitly.
///
/// `close` consumes the source so a failed close can be reported instead of
/// being swallowed by `Drop`.
pub trait InputSource: Read + Seek {
    /// Release the underlying resource.
    fn close(self) -> std::io::Result<()>;
}

#[cfg(unix)]
impl InputSource for File {
    fn close(self) -> std::io::Result<()> {
        use std::os::fd::IntoRawFd;

        let fd = self.into_raw_fd();
        // SAFETY: `fd` was just released from an owned `File`; no other owner
        // will close it, and it is not used after this call.
        let rc = unsafe { libc::close(fd) };
        if rc == -1 {
            Err(std::io::Error::last_os_error())
        } else {
            Ok(())
        }
    }
}

#[cfg(not(unix))]
impl InputSource for File {
    fn close(self) -> std::io::Result<()> {
        drop(self);
        Ok(())
    }
}

impl<T: AsRef<[u8]>> InputSource for Cursor<T> {
    fn close(self) -> std::io::Result<()> {
        Ok(())
    }
}

/// An open input paired with the label used in diagnostics.
pub struct InputHandle<R> {
    label: String,
    inner: R,
}

impl InputHandle<File> {
    /// Open `path` read-only.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| IoError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        #[cfg(unix)]
        {
            use std::os::fd::AsRawFd;
            debug!(path = %path.display(), fd = file.as_raw_fd(), "opened input");
        }
        #[cfg(not(unix))]
        debug!(path = %path.display(), "opened input");

        Ok(Self::new(path.display().to_string(), file))
    }
}

impl<R: InputSource> InputHandle<R> {
    /// Wrap an already-open source.
    pub fn new(label: impl Into<String>, inner: R) -> Self {
        Self {
            label: label.into(),
            inner,
        }
    }

    /// Label used when reporting errors for this input.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Determine the total length by seeking to the end, then rewind.
    pub fn probe_len(&mut self) -> Result<u64> {
        let len = self
            .inner
            .seek(SeekFrom::End(0))
            .and_then(|len| self.inner.seek(SeekFrom::Start(0)).map(|_| len))
            .map_err(|source| IoError::Probe {
                label: self.label.clone(),
                source,
            })?;
        debug!(input = %self.label, len, "probed input length");
        Ok(len)
    }

    /// Borrow the underlying source.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Mutably borrow the underlying source.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Close the source, keeping the label for the error.
    pub fn close(self) -> Result<()> {
        let Self { label, inner } = self;
        inner
            .close()
            .map_err(|source| IoError::Close { label, source })
    }
}

impl<R> std::fmt::Debug for InputHandle<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputHandle")
            .field("label", &self.label)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::reliable::read_all;

    fn unique_temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "mycat-io-{tag}-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("time should be after epoch")
                .as_nanos()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn probe_len_rewinds_to_start() {
        let mut handle = InputHandle::new("mem", Cursor::new(b"abcdef".to_vec()));
        handle.get_mut().set_position(4);

        assert_eq!(handle.probe_len().unwrap(), 6);
        assert_eq!(handle.get_ref().position(), 0);
    }

    #[test]
    fn probe_len_of_empty_source_is_zero() {
        let mut handle = InputHandle::new("empty", Cursor::new(Vec::<u8>::new()));
        assert_eq!(handle.probe_len().unwrap(), 0);
    }

    #[test]
    fn open_reads_file_and_closes() {
        let dir = unique_temp_dir("open");
        let path = dir.join("input.txt");
        std::fs::write(&path, b"file body").unwrap();

        let mut handle = InputHandle::open(&path).unwrap();
        assert_eq!(handle.label(), path.display().to_string());
        let len = handle.probe_len().unwrap();
        assert_eq!(len, 9);

        let mut buf = vec![0u8; len as usize];
        read_all(handle.get_mut(), &mut buf).unwrap();
        assert_eq!(buf, b"file body");

        handle.close().unwrap();
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn open_missing_path_names_the_path() {
        let dir = unique_temp_dir("missing");
        let path = dir.join("does-not-exist");

        let err = InputHandle::open(&path).unwrap_err();
        assert!(matches!(&err, IoError::Open { path: p, .. } if *p == path));
        assert_eq!(err.io().kind(), std::io::ErrorKind::NotFound);
        assert!(err.to_string().contains("does-not-exist"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn close_failure_keeps_label() {
        let handle = InputHandle::new("flaky", FailingClose(Cursor::new(Vec::new())));
        let err = handle.close().unwrap_err();
        assert!(matches!(&err, IoError::Close { label, .. } if label == "flaky"));
        assert_eq!(err.os_code(), Some(9));
    }

    struct FailingClose(Cursor<Vec<u8>>);

    impl Read for FailingClose {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.0.read(buf)
        }
    }

    impl Seek for FailingClose {
        fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
            self.0.seek(pos)
        }
    }

    impl InputSource for FailingClose {
        fn close(self) -> std::io::Result<()> {
            Err(std::io::Error::from_raw_os_error(9))
        }
    }
}
