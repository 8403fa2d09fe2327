use anyhow::{Context, Result, bail};
use md5::{Digest, Md5};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// Bytes sampled from each end of the file.
pub const SAMPLE_WINDOW: u64 = 1_000_000;
/// Files at or below this size are rejected: the head and tail windows must
/// not overlap the whole file.
pub const MIN_FILE_SIZE: u64 = 2 * SAMPLE_WINDOW;

/// Content fingerprint of a high-resolution file: MD5 over the first and last
/// [`SAMPLE_WINDOW`] bytes, as lowercase hex. The scheme, MD5 included, must
/// match the digest Shotcut itself computes to locate a proxy. Middle bytes
/// do not participate.
pub fn file_fingerprint(path: &Path) -> Result<String> {
    let file_size = std::fs::metadata(path)
        .with_context(|| format!("failed to stat {}", path.display()))?
        .len();
    if file_size <= MIN_FILE_SIZE {
        bail!("file {} too small for hash algorithm", path.display());
    }

    let mut file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut window = vec![0u8; SAMPLE_WINDOW as usize];
    let mut hasher = Md5::new();

    file.read_exact(&mut window)
        .with_context(|| format!("failed to read head of {}", path.display()))?;
    hasher.update(&window);

    file.seek(SeekFrom::Start(file_size - SAMPLE_WINDOW))
        .with_context(|| format!("failed to seek in {}", path.display()))?;
    file.read_exact(&mut window)
        .with_context(|| format!("failed to read tail of {}", path.display()))?;
    hasher.update(&window);

    Ok(format!("{:x}", hasher.finalize()))
}
