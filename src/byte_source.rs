use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

/// Seekable, exclusively owned handle to the bytes being viewed.
///
/// Nothing here remembers where the cursor was left: callers seek to an
/// absolute offset before every read.
pub struct ByteSource<R> {
    inner: R,
}

impl ByteSource<File> {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(ByteSource::new(File::open(path)?))
    }
}

impl<R: Read + Seek> ByteSource<R> {
    pub fn new(inner: R) -> ByteSource<R> {
        ByteSource { inner }
    }

    /// Total length in bytes. Queried from the stream every call.
    pub fn size(&mut self) -> io::Result<u64> {
        self.inner.seek(SeekFrom::End(0))
    }

    pub fn seek_to(&mut self, offset: u64) -> io::Result<()> {
        self.inner.seek(SeekFrom::Start(offset)).map(|_| ())
    }

    /// Reads from the current position until `max` bytes or end of file.
    ///
    /// Short OS reads are retried, so a result shorter than `max` means the
    /// end of the stream was reached.
    pub fn read_up_to(&mut self, max: usize) -> io::Result<Vec<u8>> {
        let mut chunk = Vec::with_capacity(max);
        (&mut self.inner).take(max as u64).read_to_end(&mut chunk)?;
        Ok(chunk)
    }

    pub fn read_at(&mut self, offset: u64, max: usize) -> io::Result<Vec<u8>> {
        self.seek_to(offset)?;
        self.read_up_to(max)
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Hands out at most three bytes per `read` call.
    struct Trickle(Cursor<Vec<u8>>);

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let len = buf.len().min(3);
            self.0.read(&mut buf[..len])
        }
    }

    impl Seek for Trickle {
        fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
            self.0.seek(pos)
        }
    }

    #[test]
    fn size_does_not_depend_on_cursor() {
        let mut source = ByteSource::new(Cursor::new(vec![7u8; 40]));
        source.seek_to(12).unwrap();
        assert_eq!(source.size().unwrap(), 40);
        assert_eq!(source.size().unwrap(), 40);
    }

    #[test]
    fn read_at_seeks_absolutely() {
        let data: Vec<u8> = (0..64).collect();
        let mut source = ByteSource::new(Cursor::new(data));
        assert_eq!(source.read_at(16, 4).unwrap(), vec![16, 17, 18, 19]);
        // a second read at the same offset sees the same bytes
        assert_eq!(source.read_at(16, 4).unwrap(), vec![16, 17, 18, 19]);
        assert_eq!(source.read_at(0, 2).unwrap(), vec![0, 1]);
    }

    #[test]
    fn read_past_end_is_short_not_an_error() {
        let mut source = ByteSource::new(Cursor::new(vec![1u8; 10]));
        assert_eq!(source.read_at(4, 16).unwrap().len(), 6);
        assert!(source.read_at(10, 16).unwrap().is_empty());
        assert!(source.read_at(99, 16).unwrap().is_empty());
    }

    #[test]
    fn short_os_reads_are_collected() {
        let data: Vec<u8> = (0..32).collect();
        let mut source = ByteSource::new(Trickle(Cursor::new(data)));
        let chunk = source.read_at(3, 16).unwrap();
        assert_eq!(chunk, (3..19).collect::<Vec<u8>>());
    }
}
