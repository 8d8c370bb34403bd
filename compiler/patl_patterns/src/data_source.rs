//! Byte-level access to the data patterns are decoded from.

use parking_lot::RwLock;
use patl_ir::SectionId;
use rustc_hash::FxHashMap;

/// Failure to read bytes from a data source.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DataSourceError {
    #[error("{section} does not exist")]
    UnknownSection { section: SectionId },

    #[error(
        "cannot read {len} bytes at offset {offset:#x} from {section}: only {available} bytes available"
    )]
    OutOfBounds {
        section: SectionId,
        offset: u64,
        len: usize,
        available: usize,
    },

    #[error("{0}")]
    Other(String),
}

/// Anything pattern bytes can be read from.
pub trait DataSource {
    /// Fill `buffer` with the bytes starting at `offset` in `section`.
    ///
    /// Either the whole buffer is filled or an error is returned.
    ///
    /// # Errors
    ///
    /// The section does not exist or the range is out of bounds.
    fn read_data(
        &self,
        offset: u64,
        buffer: &mut [u8],
        section: SectionId,
    ) -> Result<(), DataSourceError>;
}

impl<T: DataSource + ?Sized> DataSource for &T {
    fn read_data(
        &self,
        offset: u64,
        buffer: &mut [u8],
        section: SectionId,
    ) -> Result<(), DataSourceError> {
        (**self).read_data(offset, buffer, section)
    }
}

/// A data source backed by in-memory byte buffers, one per section.
#[derive(Debug, Default)]
pub struct MemoryDataSource {
    sections: RwLock<FxHashMap<SectionId, Vec<u8>>>,
}

impl MemoryDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A data source whose main section holds `bytes`.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new().with_section(SectionId::MAIN, bytes)
    }

    #[must_use]
    pub fn with_section(self, section: SectionId, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert_section(section, bytes);
        self
    }

    /// Add or replace a section.
    pub fn insert_section(&self, section: SectionId, bytes: impl Into<Vec<u8>>) {
        let bytes: Vec<u8> = bytes.into();
        tracing::trace!(%section, len = bytes.len(), "insert section");
        self.sections.write().insert(section, bytes);
    }

    /// Length of a section in bytes, if it exists.
    pub fn section_len(&self, section: SectionId) -> Option<usize> {
        self.sections.read().get(&section).map(Vec::len)
    }
}

impl DataSource for MemoryDataSource {
    fn read_data(
        &self,
        offset: u64,
        buffer: &mut [u8],
        section: SectionId,
    ) -> Result<(), DataSourceError> {
        let sections = self.sections.read();
        let bytes = sections
            .get(&section)
            .ok_or(DataSourceError::UnknownSection { section })?;

        let len = buffer.len();
        let out_of_bounds = || DataSourceError::OutOfBounds {
            section,
            offset,
            len,
            available: bytes.len(),
        };
        let start = usize::try_from(offset).map_err(|_| out_of_bounds())?;
        let end = start.checked_add(len).ok_or_else(out_of_bounds)?;
        let src = bytes.get(start..end).ok_or_else(|| {
            tracing::debug!(%section, offset, len, available = bytes.len(), "read out of bounds");
            out_of_bounds()
        })?;
        buffer.copy_from_slice(src);
        Ok(())
    }
}
