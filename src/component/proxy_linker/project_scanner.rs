use crate::config::NamingTable;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collects the high-resolution files referenced by the project files
/// directly inside `project_dir` (no recursion into subdirectories).
///
/// Resources appear as `<property name="resource">` nodes under the
/// `<producer>` elements of the MLT document; the text content is taken as a
/// filesystem path verbatim. Paths that do not exist on disk or whose
/// extension is not the high-resolution one are dropped. A malformed project
/// file aborts the scan.
pub fn scan_project_files(project_dir: &Path, naming: &NamingTable) -> Result<HashSet<PathBuf>> {
    let project_files: Vec<PathBuf> = WalkDir::new(project_dir)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| naming.is_project_file(entry.path()))
        .map(walkdir::DirEntry::into_path)
        .collect();

    let mut highres_files = HashSet::new();
    for project_file in project_files {
        let content = fs::read_to_string(&project_file)
            .with_context(|| format!("failed to read project file {}", project_file.display()))?;
        let document = roxmltree::Document::parse(&content)
            .with_context(|| format!("failed to parse project file {}", project_file.display()))?;

        let resources = document
            .root_element()
            .children()
            .filter(|node| node.has_tag_name("producer"))
            .flat_map(|producer| producer.children())
            .filter(|node| {
                node.has_tag_name("property") && node.attribute("name") == Some("resource")
            });

        for resource in resources {
            let Some(text) = resource.text() else {
                continue;
            };
            let path = PathBuf::from(text);
            if naming.is_highres_file(&path) && path.is_file() {
                highres_files.insert(path);
            }
        }
    }

    Ok(highres_files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn naming() -> NamingTable {
        NamingTable::load_embedded().unwrap()
    }

    fn write_project(dir: &Path, name: &str, resources: &[&Path]) {
        let properties: String = resources
            .iter()
            .map(|r| {
                format!(
                    "<producer id=\"p\"><property name=\"resource\">{}</property></producer>",
                    r.display()
                )
            })
            .collect();
        let document = format!("<mlt>{properties}</mlt>");
        fs::write(dir.join(name), document).unwrap();
    }

    #[test]
    fn test_empty_directory_yields_empty_set() {
        let temp_dir = TempDir::new().unwrap();
        let files = scan_project_files(temp_dir.path(), &naming()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_directory_without_project_files_yields_empty_set() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("notes.txt"), b"not a project").unwrap();

        let files = scan_project_files(temp_dir.path(), &naming()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_missing_and_wrong_extension_resources_are_dropped() {
        let temp_dir = TempDir::new().unwrap();
        let existing = temp_dir.path().join("GH010001.MP4");
        fs::write(&existing, b"video").unwrap();
        let lowres = temp_dir.path().join("GL010001.LRV");
        fs::write(&lowres, b"preview").unwrap();
        let missing = temp_dir.path().join("GH010099.MP4");

        write_project(
            temp_dir.path(),
            "project.mlt",
            &[&existing, &lowres, &missing],
        );

        let files = scan_project_files(temp_dir.path(), &naming()).unwrap();
        assert_eq!(files, HashSet::from([existing]));
    }

    #[test]
    fn test_duplicate_resources_collapse() {
        let temp_dir = TempDir::new().unwrap();
        let existing = temp_dir.path().join("GH010001.MP4");
        fs::write(&existing, b"video").unwrap();

        write_project(temp_dir.path(), "a.mlt", &[&existing, &existing]);
        write_project(temp_dir.path(), "b.MLT", &[&existing]);

        let files = scan_project_files(temp_dir.path(), &naming()).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_lowercase_source_extension_is_accepted() {
        let temp_dir = TempDir::new().unwrap();
        let existing = temp_dir.path().join("GH010001.mp4");
        fs::write(&existing, b"video").unwrap();

        write_project(temp_dir.path(), "project.mlt", &[&existing]);

        let files = scan_project_files(temp_dir.path(), &naming()).unwrap();
        assert_eq!(files, HashSet::from([existing]));
    }

    #[test]
    fn test_project_files_in_subdirectories_are_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let existing = temp_dir.path().join("GH010001.MP4");
        fs::write(&existing, b"video").unwrap();

        let nested = temp_dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        write_project(&nested, "project.mlt", &[&existing]);

        let files = scan_project_files(temp_dir.path(), &naming()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_malformed_project_file_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("broken.mlt"), b"<mlt><producer>").unwrap();

        let err = scan_project_files(temp_dir.path(), &naming()).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }
}
