//! Corpus storage exposed as one contiguous, mutable byte span.
//!
//! The mapped variant uses a private copy-on-write mapping: the tokenizer
//! folds case in place, but those writes never reach the file on disk.

use crate::error::{Result, WordCloudError};
use memmap2::{MmapMut, MmapOptions};
use std::fs::OpenOptions;
use std::path::Path;

enum Storage {
    Mapped(MmapMut),
    Buffer(Vec<u8>),
}

/// Exclusive owner of the corpus bytes.
///
/// The backing storage is released when the `Corpus` is dropped, whichever
/// way control leaves the pipeline. Words handed out by the tokenizer borrow
/// from it and so cannot outlive it.
pub struct Corpus {
    storage: Storage,
}

impl Corpus {
    /// Map the whole file at `path` privately (copy-on-write).
    ///
    /// The file must be openable for read and write. An empty file gets an
    /// empty in-memory buffer, since a zero-length mapping is not portable.
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn map(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| WordCloudError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        let size = file
            .metadata()
            .map_err(|source| WordCloudError::Size {
                path: path.to_path_buf(),
                source,
            })?
            .len();

        if size == 0 {
            tracing::debug!("empty corpus, skipping mmap");
            return Ok(Self::from_bytes(Vec::new()));
        }

        let len = usize::try_from(size).map_err(|_| WordCloudError::Size {
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("{size} bytes exceeds the address space"),
            ),
        })?;

        // SAFETY: the mapping is private, so our writes stay in this process.
        // Concurrent truncation of the file by another process is outside our
        // control, as with any mmap-based reader.
        let mmap = unsafe { MmapOptions::new().len(len).map_copy(&file) }.map_err(|source| {
            WordCloudError::Map {
                path: path.to_path_buf(),
                source,
            }
        })?;
        tracing::debug!(bytes = mmap.len(), "corpus mapped");

        Ok(Self {
            storage: Storage::Mapped(mmap),
        })
    }

    /// Wrap an already loaded buffer.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            storage: Storage::Buffer(bytes),
        }
    }

    pub fn len(&self) -> usize {
        match &self.storage {
            Storage::Mapped(mmap) => mmap.len(),
            Storage::Buffer(buf) => buf.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self.storage, Storage::Mapped(_))
    }

    /// Mutable view of the entire corpus.
    pub fn data_mut(&mut self) -> &mut [u8] {
        match &mut self.storage {
            Storage::Mapped(mmap) => &mut mmap[..],
            Storage::Buffer(buf) => buf.as_mut_slice(),
        }
    }

    pub fn data(&self) -> &[u8] {
        match &self.storage {
            Storage::Mapped(mmap) => &mmap[..],
            Storage::Buffer(buf) => buf.as_slice(),
        }
    }
}

impl std::fmt::Debug for Corpus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Corpus")
            .field("len", &self.len())
            .field("mapped", &self.is_mapped())
            .finish()
    }
}
