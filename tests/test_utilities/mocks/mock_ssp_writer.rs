use oc2oscal::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// A plan as seen by the writer, encoded with the real XML formatter
#[derive(Debug, Clone)]
pub struct RecordedPlan {
    pub path: PathBuf,
    pub system_name: String,
    pub system_name_short: String,
    pub last_modified: String,
    pub xml: String,
}

/// Mock SspWriter that keeps documents in memory
#[derive(Default, Clone)]
pub struct MockSspWriter {
    pub prepared_directories: Arc<Mutex<Vec<PathBuf>>>,
    pub plans: Arc<Mutex<Vec<RecordedPlan>>>,
    pub fail_on_key: Option<String>,
    pub fail_prepare: bool,
}

impl MockSspWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(key: &str) -> Self {
        Self {
            fail_on_key: Some(key.to_string()),
            ..Self::default()
        }
    }

    pub fn failing_prepare() -> Self {
        Self {
            fail_prepare: true,
            ..Self::default()
        }
    }

    pub fn recorded(&self) -> Vec<RecordedPlan> {
        self.plans.lock().unwrap().clone()
    }

    pub fn prepared(&self) -> Vec<PathBuf> {
        self.prepared_directories.lock().unwrap().clone()
    }
}

impl SspWriter for MockSspWriter {
    fn prepare_output_directory(&self, output_directory: &Path) -> Result<()> {
        if self.fail_prepare {
            return Err(ConversionError::DirectoryError {
                path: output_directory.to_path_buf(),
                details: "Mock directory failure".to_string(),
            }
            .into());
        }
        self.prepared_directories
            .lock()
            .unwrap()
            .push(output_directory.to_path_buf());
        Ok(())
    }

    fn write_ssp(&self, plan: &SystemSecurityPlan<'_>, output_file: &Path) -> Result<()> {
        let chars = &plan.system_characteristics;
        if self.fail_on_key.as_deref() == Some(chars.system_name_short.as_str()) {
            return Err(ConversionError::FileCreateError {
                path: output_file.to_path_buf(),
                details: "Mock file create failure".to_string(),
            }
            .into());
        }

        let xml = OscalXmlFormatter::new().format(plan)?;
        self.plans.lock().unwrap().push(RecordedPlan {
            path: output_file.to_path_buf(),
            system_name: chars.system_name.clone(),
            system_name_short: chars.system_name_short.clone(),
            last_modified: plan.metadata.last_modified().to_string(),
            xml,
        });
        Ok(())
    }
}
