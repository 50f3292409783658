use crate::shared::error::ConversionError;
use crate::shared::Result;

/// Maximum length for component keys (most filesystems cap names at 255 bytes)
const MAX_COMPONENT_KEY_LENGTH: usize = 255;

/// Characters that are path separators or reserved on common filesystems
const RESERVED_KEY_CHARS: &[char] = &['/', '\\', '<', '>', ':', '"', '|', '?', '*'];

/// Device names Windows reserves regardless of extension
const RESERVED_DEVICE_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Extension of every generated SSP document
const OUTPUT_EXTENSION: &str = "xml";

/// An OpenControl component as handed over by the workspace provider
///
/// The key is kept exactly as the workspace declares it. It is only
/// validated when it is turned into an output file name, see [`ComponentKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    key: String,
    name: String,
}

impl Component {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// NewType wrapper for a component key that is safe to use as a file stem
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentKey(String);

impl ComponentKey {
    pub fn new(key: &str) -> Result<Self> {
        let reject = |reason: &str| -> anyhow::Error {
            ConversionError::InvalidComponentKey {
                key: key.to_string(),
                reason: reason.to_string(),
            }
            .into()
        };

        if key.trim().is_empty() {
            return Err(reject("must not be empty"));
        }

        if key == "." || key == ".." {
            return Err(reject("must not be a relative directory reference"));
        }

        if key.len() > MAX_COMPONENT_KEY_LENGTH {
            return Err(reject(&format!(
                "is too long ({} bytes). Maximum allowed: {} bytes",
                key.len(),
                MAX_COMPONENT_KEY_LENGTH
            )));
        }

        if key.contains(['/', '\\']) {
            return Err(reject("must not contain path separators"));
        }

        if key.chars().any(|c| c.is_control()) {
            return Err(reject("must not contain control characters"));
        }

        if let Some(c) = key.chars().find(|c| RESERVED_KEY_CHARS.contains(c)) {
            return Err(reject(&format!("must not contain reserved character '{}'", c)));
        }

        if key.starts_with(char::is_whitespace) || key.ends_with(char::is_whitespace) {
            return Err(reject("must not start or end with whitespace"));
        }

        if key.ends_with('.') {
            return Err(reject("must not end with '.'"));
        }

        let stem = key.split('.').next().unwrap_or(key);
        if RESERVED_DEVICE_NAMES
            .iter()
            .any(|device| stem.eq_ignore_ascii_case(device))
        {
            return Err(reject(&format!("must not be the reserved device name '{}'", stem)));
        }

        Ok(Self(key.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the SSP document generated for this key (`<key>.xml`)
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.0, OUTPUT_EXTENSION)
    }
}

impl std::fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&Component> for ComponentKey {
    type Error = anyhow::Error;

    fn try_from(component: &Component) -> Result<Self> {
        ComponentKey::new(component.key())
    }
}
