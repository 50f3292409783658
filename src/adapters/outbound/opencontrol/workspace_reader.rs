use crate::ports::outbound::WorkspaceReader;
use crate::shared::error::ConversionError;
use crate::shared::security::{read_regular_file, validate_directory};
use crate::shared::Result;
use crate::ssp_generation::domain::{Component, Workspace};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

const OPENCONTROL_FILENAME: &str = "opencontrol.yaml";
const COMPONENT_FILENAMES: [&str; 2] = ["component.yaml", "component.yml"];
/// Where `compliance-masonry get` vendors dependency components
const VENDORED_COMPONENTS_DIR: &str = "opencontrols/components";
const FILE_URI_PREFIX: &str = "file://";

/// `opencontrol.yaml`. Only the local component list matters here.
#[derive(Debug, Deserialize, Default)]
struct OpenControlFile {
    #[serde(default)]
    components: Vec<String>,
}

/// `component.yaml`. Narratives, references and verifications are ignored.
#[derive(Debug, Deserialize)]
struct ComponentFile {
    #[serde(default)]
    key: Option<String>,
    name: String,
}

/// OpenControlReader adapter for local OpenControl workspaces
///
/// Components come from the `components` list of `opencontrol.yaml` (in
/// listed order) followed by the vendored `opencontrols/components/*`
/// directories (sorted by name). A component without a `key` takes the name
/// of its directory.
pub struct OpenControlReader;

impl OpenControlReader {
    pub fn new() -> Self {
        Self
    }

    /// Turns a path or `file://` URI into a local directory path
    fn resolve_location(location: &str) -> Result<PathBuf> {
        if let Some(path) = location.strip_prefix(FILE_URI_PREFIX) {
            if path.is_empty() {
                anyhow::bail!("file:// URI does not name a directory");
            }
            return Ok(PathBuf::from(path));
        }

        if let Some((scheme, _)) = location.split_once("://") {
            anyhow::bail!(
                "Unsupported location scheme '{}://'. Only local paths and file:// URIs can be opened",
                scheme
            );
        }

        if location.trim().is_empty() {
            anyhow::bail!("Workspace location is empty");
        }

        Ok(PathBuf::from(location))
    }

    fn load(&self, location: &str) -> Result<Workspace> {
        let root = Self::resolve_location(location)?;
        validate_directory(&root, "Workspace directory")?;

        let mut components = Vec::new();
        let mut keys: HashMap<String, PathBuf> = HashMap::new();

        for dir in Self::component_directories(&root)? {
            let component = Self::load_component(&dir)?;
            if let Some(previous) = keys.insert(component.key().to_string(), dir.clone()) {
                anyhow::bail!(
                    "Duplicate component key '{}' in {} and {}",
                    component.key(),
                    previous.display(),
                    dir.display()
                );
            }
            components.push(component);
        }

        Ok(Workspace::new(location, components))
    }

    /// Component directories in discovery order, each listed once
    fn component_directories(root: &Path) -> Result<Vec<PathBuf>> {
        let mut directories = Vec::new();
        let mut seen = HashSet::new();

        let opencontrol_path = root.join(OPENCONTROL_FILENAME);
        if opencontrol_path.exists() {
            let content = read_regular_file(&opencontrol_path, OPENCONTROL_FILENAME)?;
            let opencontrol: OpenControlFile = serde_yaml_ng::from_str::<Option<OpenControlFile>>(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", OPENCONTROL_FILENAME, e))?
                .unwrap_or_default();

            for entry in &opencontrol.components {
                let dir = root.join(entry);
                validate_directory(&dir, "Component directory")?;
                if seen.insert(Self::identity(&dir)) {
                    directories.push(dir);
                }
            }
        }

        let vendored_root = root.join(VENDORED_COMPONENTS_DIR);
        if fs::symlink_metadata(&vendored_root).is_ok() {
            validate_directory(&vendored_root, "Vendored components directory")?;

            let mut vendored = fs::read_dir(&vendored_root)
                .map_err(|e| anyhow::anyhow!("Failed to list {}: {}", vendored_root.display(), e))?
                .map(|entry| entry.map(|e| e.path()))
                .collect::<std::io::Result<Vec<_>>>()
                .map_err(|e| anyhow::anyhow!("Failed to list {}: {}", vendored_root.display(), e))?;
            // Stray files are skipped; links are kept so they get rejected below
            vendored.retain(|path| {
                fs::symlink_metadata(path)
                    .map(|m| m.is_dir() || m.is_symlink())
                    .unwrap_or(false)
            });
            vendored.sort();

            for dir in vendored {
                validate_directory(&dir, "Component directory")?;
                if seen.insert(Self::identity(&dir)) {
                    directories.push(dir);
                }
            }
        }

        Ok(directories)
    }

    /// Canonical path used to spot a directory reached twice
    fn identity(dir: &Path) -> PathBuf {
        dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf())
    }

    fn load_component(dir: &Path) -> Result<Component> {
        let component_path = COMPONENT_FILENAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
            .ok_or_else(|| {
                anyhow::anyhow!("No component.yaml found in component directory {}", dir.display())
            })?;

        let content = read_regular_file(&component_path, "component.yaml")?;
        let file: ComponentFile = serde_yaml_ng::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse {}: {}", component_path.display(), e)
        })?;

        let key = match file.key {
            Some(key) if !key.trim().is_empty() => key,
            _ => Self::directory_key(dir)?,
        };

        Ok(Component::new(key, file.name))
    }

    fn directory_key(dir: &Path) -> Result<String> {
        Self::identity(dir)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                anyhow::anyhow!("Cannot derive a component key from {}", dir.display())
            })
    }
}

impl Default for OpenControlReader {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkspaceReader for OpenControlReader {
    fn open_workspace(&self, location: &str) -> Result<Workspace> {
        self.load(location).map_err(|e| {
            ConversionError::WorkspaceOpen {
                location: location.to_string(),
                details: format!("{:#}", e),
            }
            .into()
        })
    }
}
