//! Zip archive writer
//!
//! Recreates the package directory at the start of a run, then streams every
//! planned entry into `<package dir>/package.zip` with deflate compression.

use std::fs::{self, File};
use std::io::{self, BufWriter, Seek, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::domain::entities::ArchivePlan;
use crate::domain::ports::{ArchiveReport, ArchiveWriter};
use crate::domain::value_objects::{ArchiveDigest, ARCHIVE_FILE_NAME, DEPENDENCY_DIR};
use crate::error::{PackagrError, PackagrResult};

/// Entries at or above this size need zip64 headers
const LARGE_FILE_THRESHOLD: u64 = 0xFFFF_FFFF;

/// Wipe `output_dir` and recreate it with an empty `node_modules` inside
pub fn prepare_output_dir(output_dir: &Path) -> io::Result<()> {
    match fs::symlink_metadata(output_dir) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(output_dir)?,
        Ok(_) => fs::remove_file(output_dir)?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }
    fs::create_dir_all(output_dir.join(DEPENDENCY_DIR))
}

/// `ArchiveWriter` producing a deflated zip file
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipArchiveWriter;

impl ZipArchiveWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ArchiveWriter for ZipArchiveWriter {
    fn prepare(&self, output_dir: &Path) -> PackagrResult<()> {
        prepare_output_dir(output_dir)?;
        tracing::debug!(output_dir = %output_dir.display(), "package directory recreated");
        Ok(())
    }

    fn write(
        &self,
        plan: &ArchivePlan,
        project_root: &Path,
        output_dir: &Path,
    ) -> PackagrResult<ArchiveReport> {
        fs::create_dir_all(output_dir)?;

        let archive = output_dir.join(ARCHIVE_FILE_NAME);
        let file = File::create(&archive)?;
        let mut stream = ArchiveStream::new(BufWriter::new(file));

        for (source, destination) in plan.iter() {
            stream.add(&project_root.join(source), source, destination)?;
        }

        let (written, skipped) = stream.finish()?;

        let bytes = fs::metadata(&archive)?.len();
        let digest = ArchiveDigest::from_reader(File::open(&archive)?)?;

        tracing::info!(
            archive = %archive.display(),
            bytes,
            entries = written,
            skipped = skipped.len(),
            "archive written"
        );

        Ok(ArchiveReport {
            archive,
            bytes,
            written,
            skipped,
            digest,
        })
    }
}

/// Zip stream that tolerates sources vanishing between planning and writing
struct ArchiveStream<W: Write + Seek> {
    zip: ZipWriter<W>,
    written: usize,
    skipped: Vec<String>,
}

impl<W: Write + Seek> ArchiveStream<W> {
    fn new(inner: W) -> Self {
        Self {
            zip: ZipWriter::new(inner),
            written: 0,
            skipped: Vec::new(),
        }
    }

    fn add(&mut self, path: &Path, source: &str, destination: &str) -> PackagrResult<()> {
        let mut input = match File::open(path) {
            Ok(input) => input,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(source = %source, "planned file disappeared, skipping");
                self.skipped.push(source.to_string());
                return Ok(());
            }
            Err(err) => return Err(entry_error(destination, err)),
        };

        let meta = input
            .metadata()
            .map_err(|err| entry_error(destination, err))?;

        let options = entry_options(&meta);
        self.zip.start_file(destination, options)?;
        io::copy(&mut input, &mut self.zip).map_err(|err| entry_error(destination, err))?;

        tracing::trace!(source = %source, destination = %destination, "stored");
        self.written += 1;
        Ok(())
    }

    fn finish(self) -> PackagrResult<(usize, Vec<String>)> {
        let mut inner = self.zip.finish()?;
        inner.flush()?;
        Ok((self.written, self.skipped))
    }
}

fn entry_error(destination: &str, source: io::Error) -> PackagrError {
    PackagrError::ArchiveEntry {
        destination: destination.to_string(),
        source,
    }
}

fn entry_options(meta: &fs::Metadata) -> SimpleFileOptions {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .large_file(meta.len() >= LARGE_FILE_THRESHOLD);

    #[cfg(unix)]
    let options = {
        use std::os::unix::fs::PermissionsExt;
        options.unix_permissions(meta.permissions().mode() & 0o777)
    };

    options
}
