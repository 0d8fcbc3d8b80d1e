//! On-disk storage for prefix-sum tables.
//!
//! A table named `base` lives in the file `<base>.pst`. The file holds the
//! entry sequence and nothing else: `len()` entries, each `E::WIDTH` bytes,
//! little-endian. The entry width is not recorded, so a table must be opened
//! with the entry type it was saved with.

use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::alphabet::Alphabet;
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::table::PrefixSumTable;

/// File name suffix appended to the base name of a stored table.
pub const SUFFIX: &str = ".pst";

/// How a store is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OpenMode {
    /// Read an existing store; saving is refused.
    ReadOnly,
    /// Read or overwrite an existing store; a missing store is an error.
    ReadWrite,
    /// Like `ReadWrite`, but saving creates a missing store. Loading still
    /// requires the store to exist.
    #[default]
    ReadWriteCreate,
    /// Create the store, discarding any previous content.
    CreateOrTruncate,
}

impl OpenMode {
    /// Options used when loading a store.
    fn load_options(self) -> OpenOptions {
        let mut options = OpenOptions::new();
        options.read(true);
        match self {
            OpenMode::ReadOnly => {}
            OpenMode::ReadWrite | OpenMode::ReadWriteCreate => {
                options.write(true);
            }
            OpenMode::CreateOrTruncate => {
                options.write(true).create(true).truncate(true);
            }
        }
        options
    }
}

/// Return the path of the store for base name `base`.
///
/// The suffix is appended, so `index.v2` maps to `index.v2.pst`.
pub fn store_path(base: impl AsRef<Path>) -> PathBuf {
    let mut name = OsString::from(base.as_ref().as_os_str());
    name.push(SUFFIX);
    PathBuf::from(name)
}

impl<A: Alphabet, E: Entry> PrefixSumTable<A, E> {
    /// Serialize the entries to their stored byte layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len() * E::WIDTH);
        for &e in self.entries() {
            e.write_le(&mut out);
        }
        out
    }

    /// Deserialize a table from `to_bytes()` output.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % E::WIDTH != 0 {
            return Err(Error::InvalidEncoding(format!(
                "{} bytes is not a multiple of the {}-byte entry width",
                bytes.len(),
                E::WIDTH
            )));
        }
        let entries = bytes
            .chunks_exact(E::WIDTH)
            .map(E::read_le)
            .collect::<Option<Vec<E>>>()
            .ok_or_else(|| Error::InvalidEncoding("truncated entry".to_string()))?;
        Ok(Self::from_entries(entries))
    }

    /// Save to `<base>.pst`, creating or overwriting the store.
    pub fn save(&self, base: impl AsRef<Path>) -> Result<()> {
        self.save_with_mode(base, OpenMode::default())
    }

    /// Save to `<base>.pst` with an explicit open mode.
    pub fn save_with_mode(&self, base: impl AsRef<Path>, mode: OpenMode) -> Result<()> {
        let path = store_path(base);
        let mut options = OpenOptions::new();
        match mode {
            OpenMode::ReadOnly => {
                return Err(Error::Io(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    format!("{} opened read-only", path.display()),
                )));
            }
            OpenMode::ReadWrite => {
                options.write(true).truncate(true);
            }
            OpenMode::ReadWriteCreate | OpenMode::CreateOrTruncate => {
                options.write(true).create(true).truncate(true);
            }
        }

        let mut file = options.open(&path)?;
        file.write_all(&self.to_bytes())?;
        file.sync_all()?;

        debug!(
            path = %path.display(),
            entries = self.len(),
            ?mode,
            "saved prefix-sum table"
        );
        Ok(())
    }

    /// Load from `<base>.pst` in the default mode.
    ///
    /// A missing store fails with [`Error::Io`] (`NotFound`).
    pub fn open(base: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_mode(base, OpenMode::default())
    }

    /// Load from `<base>.pst` with an explicit open mode.
    ///
    /// Only [`OpenMode::CreateOrTruncate`] succeeds without an existing store,
    /// and it always yields an empty table.
    pub fn open_with_mode(base: impl AsRef<Path>, mode: OpenMode) -> Result<Self> {
        let path = store_path(base);
        let mut file = mode.load_options().open(&path)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;

        let table = Self::from_bytes(&bytes).inspect_err(|_| {
            warn!(
                path = %path.display(),
                bytes = bytes.len(),
                width = E::WIDTH,
                "store size inconsistent with entry width"
            );
        })?;

        debug!(
            path = %path.display(),
            entries = table.len(),
            ?mode,
            "opened prefix-sum table"
        );
        Ok(table)
    }
}
