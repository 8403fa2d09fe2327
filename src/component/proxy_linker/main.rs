use super::project_scanner::scan_project_files;
use crate::config::NamingTable;
use crate::tools::{
    ensure_directory_exists, file_fingerprint, find_lowres_file, validate_directory_exists,
};
use anyhow::Result;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Per-run counters. The run itself reports through log lines; these exist so
/// callers and tests can assert on what happened.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOutcome {
    pub highres_total: usize,
    pub missing_lowres: usize,
    pub copied: usize,
    pub skipped_existing: usize,
    pub failed: usize,
}

pub struct ProxyLinker {
    project_dir: PathBuf,
    naming: NamingTable,
}

impl ProxyLinker {
    pub fn new(project_dir: &Path) -> Result<Self> {
        Ok(Self {
            project_dir: project_dir.to_path_buf(),
            naming: NamingTable::load_embedded()?,
        })
    }

    pub fn run(&self) -> Result<SyncOutcome> {
        validate_directory_exists(&self.project_dir)?;

        let mut outcome = SyncOutcome::default();

        info!("Retrieving original video files from Shotcut project...");
        let highres_files = scan_project_files(&self.project_dir, &self.naming)?;
        outcome.highres_total = highres_files.len();

        info!(
            "Searching for low resolution versions of video files ({})...",
            self.naming.lowres_ext
        );
        // Sorted so log output and processing order are stable run to run
        let mut highres_sorted: Vec<PathBuf> = highres_files.into_iter().collect();
        highres_sorted.sort();

        let mut matched: Vec<(PathBuf, PathBuf)> = Vec::new();
        for highres in highres_sorted {
            match find_lowres_file(&highres, &self.naming) {
                Some(lowres) => matched.push((highres, lowres)),
                None => {
                    warn!("No low resolution version found for {}", highres.display());
                    outcome.missing_lowres += 1;
                }
            }
        }

        info!("Copying low resolution files to Shotcut proxies directory...");
        let proxies_dir = self.project_dir.join(&self.naming.proxies_dir);
        for (highres, lowres) in matched {
            self.sync_one(&highres, &lowres, &proxies_dir, &mut outcome)?;
        }

        Ok(outcome)
    }

    /// Copies one matched pair into the proxies directory. Per-file problems
    /// (unhashable source, copy failure) degrade to warnings; only the
    /// directory creation failure propagates.
    fn sync_one(
        &self,
        highres: &Path,
        lowres: &Path,
        proxies_dir: &Path,
        outcome: &mut SyncOutcome,
    ) -> Result<()> {
        let fingerprint = match file_fingerprint(highres) {
            Ok(fingerprint) => fingerprint,
            Err(e) => {
                warn!("{e:#}");
                outcome.failed += 1;
                return Ok(());
            }
        };

        if ensure_directory_exists(proxies_dir)? {
            info!("Created proxies directory");
        }

        let proxy_path = proxies_dir.join(format!("{fingerprint}{}", self.naming.proxy_ext));
        if proxy_path.is_file() {
            info!(
                "Proxy file for {} already exists. Skipping...",
                highres.display()
            );
            outcome.skipped_existing += 1;
            return Ok(());
        }

        match fs::copy(lowres, &proxy_path) {
            Ok(_) => {
                info!("Copied {} to {}", basename(lowres), basename(&proxy_path));
                outcome.copied += 1;
            }
            Err(e) => {
                warn!(
                    "failed to copy {} to {}: {e}",
                    lowres.display(),
                    proxy_path.display()
                );
                outcome.failed += 1;
            }
        }
        Ok(())
    }
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}
