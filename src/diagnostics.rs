use std::path::{Path, PathBuf};
use thirtyfour::prelude::*;
use tracing::info;

use crate::error::{Result, UiTestError};

/// Characters outside `[A-Za-z0-9._-]` become `_` so any method label is a valid file name.
fn file_stem(class: &str, method: &str) -> String {
    format!("{}.{}", class, method)
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturePaths {
    pub screenshot: PathBuf,
    pub dom: PathBuf,
}

impl CapturePaths {
    pub fn new(reports_dir: &Path, class: &str, method: &str) -> Self {
        let stem = file_stem(class, method);
        Self {
            screenshot: reports_dir.join(format!("{}.png", stem)),
            dom: reports_dir.join(format!("{}.html", stem)),
        }
    }
}

/// Save the page source next to where the screenshot goes.
pub async fn write_dom(paths: &CapturePaths, source: &str) -> Result<()> {
    if let Some(dir) = paths.dom.parent() {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| UiTestError::Diagnostics(format!("create {:?}: {}", dir, e)))?;
    }
    tokio::fs::write(&paths.dom, source)
        .await
        .map_err(|e| UiTestError::Diagnostics(format!("write {:?}: {}", paths.dom, e)))
}

/// Screenshot and DOM of whatever the browser shows right now.
pub async fn capture(driver: &WebDriver, reports_dir: &Path, class: &str, method: &str) -> Result<CapturePaths> {
    let paths = CapturePaths::new(reports_dir, class, method);

    let source = driver
        .source()
        .await
        .map_err(|e| UiTestError::Diagnostics(format!("page source: {}", e)))?;
    write_dom(&paths, &source).await?;

    driver
        .screenshot(&paths.screenshot)
        .await
        .map_err(|e| UiTestError::Diagnostics(format!("screenshot {:?}: {}", paths.screenshot, e)))?;

    info!("Saved page state to {:?}", paths.screenshot);
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_follow_class_and_method() {
        let paths = CapturePaths::new(Path::new("/tmp/r"), "FolderTest", "testRename");
        assert_eq!(paths.screenshot, PathBuf::from("/tmp/r/FolderTest.testRename.png"));
        assert_eq!(paths.dom, PathBuf::from("/tmp/r/FolderTest.testRename.html"));
    }

    #[test]
    fn test_unsafe_characters_replaced() {
        assert_eq!(file_stem("A", "m[Folder] x/y"), "A.m_Folder__x_y");
    }

    #[tokio::test]
    async fn test_write_dom_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let paths = CapturePaths::new(&dir.path().join("nested"), "C", "m");
        write_dom(&paths, "<html></html>").await.unwrap();
        let saved = std::fs::read_to_string(&paths.dom).unwrap();
        assert_eq!(saved, "<html></html>");
    }
}
