use crate::config::NamingTable;
use std::path::{Path, PathBuf};

/// Candidate low-resolution filenames for a high-resolution filename, in
/// priority order:
/// 1. same stem              (GOPR0042.MP4 -> GOPR0042.LRV)
/// 2. stem with 'H' -> 'L'   (GH010042.MP4 -> GL010042.LRV)
/// 3. stem with 'X' -> 'L'   (GX010042.MP4 -> GL010042.LRV)
#[must_use]
pub fn lowres_candidates(highres_filename: &str, naming: &NamingTable) -> Vec<String> {
    let stem = highres_filename
        .rsplit_once('.')
        .map_or(highres_filename, |(stem, _ext)| stem);

    let mut candidates = vec![format!("{stem}{}", naming.lowres_ext)];
    for substitution in &naming.stem_substitutions {
        candidates.push(format!(
            "{}{}",
            stem.replace(substitution.from, &substitution.to.to_string()),
            naming.lowres_ext
        ));
    }
    candidates
}

/// Looks for the low-resolution counterpart next to the high-resolution file.
/// Candidates are probed in priority order and the first existing one wins;
/// `None` means the file has no proxy source.
#[must_use]
pub fn find_lowres_file(highres_path: &Path, naming: &NamingTable) -> Option<PathBuf> {
    let directory = highres_path.parent().unwrap_or_else(|| Path::new(""));
    let filename = highres_path.file_name()?.to_str()?;

    lowres_candidates(filename, naming)
        .into_iter()
        .map(|candidate| directory.join(candidate))
        .find(|candidate| candidate.is_file())
}
