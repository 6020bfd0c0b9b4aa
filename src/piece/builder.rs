//! Piece construction

use super::types::{Piece, PieceParams};
use crate::context::{ContextInfo, LATEST_CONTEXT_VERSION};
use crate::error::{Error, Result};
use crate::types::Release;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Oldest platform release able to run pieces that declare a context version
pub const MINIMUM_SUPPORTED_RELEASE_AFTER_LATEST_CONTEXT_VERSION: &str = "0.73.0";

/// [`MINIMUM_SUPPORTED_RELEASE_AFTER_LATEST_CONTEXT_VERSION`] as a [`Release`]
pub const MINIMUM_RELEASE_FLOOR: Release = Release::new(0, 73, 0);

/// Build a piece against the default platform release floor
pub fn create_piece(params: PieceParams) -> Result<Piece> {
    create_piece_with_floor(params, MINIMUM_RELEASE_FLOOR)
}

/// Build a piece, raising its minimum supported release to at least `floor`
pub fn create_piece_with_floor(params: PieceParams, floor: Release) -> Result<Piece> {
    if params.display_name.is_empty() {
        return Err(Error::invalid_definition(
            "piece",
            "",
            "display name cannot be empty",
        ));
    }

    if let Some(auth) = &params.auth {
        if !auth.is_auth() {
            return Err(Error::invalid_definition(
                "piece",
                &params.display_name,
                format!("auth must be an auth property, got {:?}", auth.kind()),
            ));
        }
    }

    let declared = params
        .minimum_supported_release
        .as_deref()
        .map(str::parse::<Release>)
        .transpose()?;
    let minimum_supported_release = match declared {
        Some(release) if release >= floor => release,
        Some(release) => {
            debug!(
                "Piece '{}': raising minimum supported release {} to {}",
                params.display_name, release, floor
            );
            floor
        }
        None => floor,
    };

    let maximum_supported_release = params
        .maximum_supported_release
        .as_deref()
        .map(str::parse::<Release>)
        .transpose()?;
    if let Some(max) = maximum_supported_release {
        if max < minimum_supported_release {
            warn!(
                "Piece '{}': maximum supported release {} is below minimum {}",
                params.display_name, max, minimum_supported_release
            );
        }
    }

    let mut actions = BTreeMap::new();
    for action in params.actions {
        if actions.contains_key(&action.name) {
            return Err(Error::duplicate("action", action.name));
        }
        actions.insert(action.name.clone(), action);
    }

    let mut triggers = BTreeMap::new();
    for trigger in params.triggers {
        if triggers.contains_key(trigger.name()) {
            return Err(Error::duplicate("trigger", trigger.name()));
        }
        triggers.insert(trigger.name().to_string(), trigger);
    }

    Ok(Piece {
        display_name: params.display_name,
        logo_url: params.logo_url,
        authors: params.authors,
        description: params.description,
        auth: params.auth,
        categories: params.categories,
        minimum_supported_release,
        maximum_supported_release,
        actions,
        triggers,
        context_info: ContextInfo {
            version: LATEST_CONTEXT_VERSION,
        },
    })
}
