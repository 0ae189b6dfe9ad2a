//! # Module Loader
//!
//! Handler-definition modules are an explicit list collected by the host
//! program. Each one registers its commands and events into the registry;
//! a module that fails is logged and skipped without stopping the rest.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use log::{error, info};

use crate::commands::registry::Registry;
use crate::core::error::BotError;

/// A unit of handler definitions
pub trait Module: Send + Sync {
    /// Path-like identifier used in logs, e.g. `admin/ban`
    fn name(&self) -> &str;

    fn register(&self, registry: &mut Registry) -> Result<()>;
}

/// Result of loading a list of modules
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: Vec<String>,
    pub failed: Vec<BotError>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Register every module in list order
///
/// Entries a failing module registered before its error stay registered.
pub fn load_modules(registry: &mut Registry, modules: &[Box<dyn Module>]) -> LoadReport {
    info!("📦 Loading {} modules...", modules.len());

    let mut report = LoadReport::default();
    for module in modules {
        match module.register(registry) {
            Ok(()) => {
                info!("✓ Loaded module: {}", module.name());
                report.loaded.push(module.name().to_string());
            }
            Err(source) => {
                let failure = BotError::ModuleLoad {
                    module: module.name().to_string(),
                    source,
                };
                error!("✖ {failure}");
                report.failed.push(failure);
            }
        }
    }

    info!(
        "📦 {} modules loaded, {} failed",
        report.loaded.len(),
        report.failed.len()
    );
    report
}
