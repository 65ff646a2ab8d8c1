use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

/// Provides the bytes of a data file: a letter distribution or a dictionary.
///
/// The caller decides where the data lives. This crate only reads from what
/// it is given, and never builds file names itself.
pub trait ByteSource: Sync {
    /// Open a new stream over the data.
    fn open(&self) -> io::Result<Box<dyn Read + '_>>;
}

impl ByteSource for [u8] {
    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(self))
    }
}

impl ByteSource for Vec<u8> {
    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(self.as_slice()))
    }
}

impl ByteSource for str {
    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(self.as_bytes()))
    }
}

impl ByteSource for Path {
    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        let file = File::open(self)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

impl ByteSource for PathBuf {
    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        self.as_path().open()
    }
}

impl<T: ByteSource + ?Sized> ByteSource for &T {
    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        (**self).open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all<S: ByteSource + ?Sized>(source: &S) -> io::Result<Vec<u8>> {
        let mut bytes = Vec::new();
        source.open()?.read_to_end(&mut bytes)?;
        Ok(bytes)
    }

    #[test]
    fn test_memory_sources() -> io::Result<()> {
        let data = vec![1u8, 2, 3];
        assert_eq!(read_all(&data)?, data);
        assert_eq!(read_all(data.as_slice())?, data);
        assert_eq!(read_all("e 1 2")?, b"e 1 2");
        // every open starts at the beginning
        assert_eq!(read_all(&data)?, read_all(&data)?);
        Ok(())
    }

    #[test]
    fn test_path_source() -> io::Result<()> {
        let path = std::env::temp_dir().join("lexica_solver_source_test.txt");
        std::fs::write(&path, "a 1\n")?;
        assert_eq!(read_all(&path)?, b"a 1\n");
        std::fs::remove_file(&path)?;
        assert!(read_all(&path).is_err());
        Ok(())
    }
}
