use serde::{Deserialize, Serialize};
use std::path::Path;

/// One stem rewrite rule, e.g. GH01xxxx -> GL01xxxx.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StemSubstitution {
    pub from: char,
    pub to: char,
}

/// GoPro/Shotcut naming conventions: which extensions mark source, preview
/// and project files, and how a high-resolution stem maps to its preview stem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingTable {
    #[serde(rename = "HIGHRES_EXT")]
    pub highres_ext: String,
    #[serde(rename = "LOWRES_EXT")]
    pub lowres_ext: String,
    #[serde(rename = "PROJECT_EXT")]
    pub project_ext: String,
    #[serde(rename = "PROXY_EXT")]
    pub proxy_ext: String,
    #[serde(rename = "PROXIES_DIR")]
    pub proxies_dir: String,
    #[serde(rename = "STEM_SUBSTITUTIONS")]
    pub stem_substitutions: Vec<StemSubstitution>,
}

impl NamingTable {
    #[must_use]
    pub fn is_highres_file(&self, path: &Path) -> bool {
        Self::extension_matches(path, &self.highres_ext)
    }

    #[must_use]
    pub fn is_project_file(&self, path: &Path) -> bool {
        Self::extension_matches(path, &self.project_ext)
    }

    fn extension_matches(path: &Path, wanted: &str) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| format!(".{ext}").eq_ignore_ascii_case(wanted))
    }
}
