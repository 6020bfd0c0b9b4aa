//! Parser for piece metadata documents
//!
//! Metadata is JSON when produced by the platform API and often YAML when
//! written by hand; YAML parsing accepts both.

use crate::error::{Error, Result};
use crate::piece::PieceMetadata;
use crate::property::dangling_refreshers;
use crate::types::Release;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Load piece metadata from a `.json`, `.yaml` or `.yml` file
pub fn load_metadata(path: impl AsRef<Path>) -> Result<PieceMetadata> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read metadata file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(serde_json::from_str(&content)?),
        _ => load_metadata_from_str(&content),
    }
}

/// Parse piece metadata from a JSON or YAML string
pub fn load_metadata_from_str(content: &str) -> Result<PieceMetadata> {
    serde_yaml::from_str(content)
        .map_err(|e| Error::config(format!("Failed to parse piece metadata: {e}")))
}

/// Check a metadata document for consistency
///
/// `floor` only applies to pieces that declare a context version; older
/// pieces predate it.
pub fn validate_metadata(metadata: &PieceMetadata, floor: Release) -> Result<()> {
    if metadata.name.is_empty() {
        return Err(Error::config("Piece name cannot be empty"));
    }

    if metadata.display_name.is_empty() {
        return Err(Error::config(format!(
            "Piece '{}' display name cannot be empty",
            metadata.name
        )));
    }

    if metadata.version.is_empty() {
        return Err(Error::config(format!(
            "Piece '{}' version cannot be empty",
            metadata.name
        )));
    }

    if let Some(auth) = &metadata.auth {
        if !auth.is_auth() {
            return Err(Error::invalid_definition(
                "piece",
                &metadata.name,
                format!("auth must be an auth property, got {:?}", auth.kind()),
            ));
        }
    }

    if metadata.context_info.is_some() && metadata.minimum_supported_release < floor {
        return Err(Error::config(format!(
            "Piece '{}' declares minimum release {} below {}",
            metadata.name, metadata.minimum_supported_release, floor
        )));
    }

    if let Some(max) = metadata.maximum_supported_release {
        if max < metadata.minimum_supported_release {
            warn!(
                "Piece '{}': maximum supported release {} is below minimum {}",
                metadata.name, max, metadata.minimum_supported_release
            );
        }
    }

    for (key, action) in &metadata.actions {
        if key != &action.name {
            return Err(Error::config(format!(
                "Action key '{}' does not match its name '{}'",
                key, action.name
            )));
        }
        if action.display_name.is_empty() {
            return Err(Error::invalid_definition(
                "action",
                &action.name,
                "display name cannot be empty",
            ));
        }
        for (prop, refresher) in dangling_refreshers(&action.props) {
            warn!(
                "Action '{}': property '{}' refreshes on unknown property '{}'",
                key, prop, refresher
            );
        }
    }

    for (key, trigger) in &metadata.triggers {
        if key != &trigger.name {
            return Err(Error::config(format!(
                "Trigger key '{}' does not match its name '{}'",
                key, trigger.name
            )));
        }
        if trigger.display_name.is_empty() {
            return Err(Error::invalid_definition(
                "trigger",
                &trigger.name,
                "display name cannot be empty",
            ));
        }
        for (prop, refresher) in dangling_refreshers(&trigger.props) {
            warn!(
                "Trigger '{}': property '{}' refreshes on unknown property '{}'",
                key, prop, refresher
            );
        }
    }

    Ok(())
}
