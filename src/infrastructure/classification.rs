//! Loader for the external ticker classification table
//! (`fii_types.json`): ticker → type + original segment.
//!
//! The table is optional. Every failure mode — missing file, unreadable
//! file, malformed JSON, wrong shape — degrades to an empty map so the
//! pipeline falls back to the segments the summary source provides.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::domain::entities::fund::{ClassificationEntry, ClassificationMap};
use crate::domain::values::fund_type::FundType;

const TYPE_KEY: &str = "tipo";
const SEGMENT_KEY: &str = "segmento_original";

/// Load the classification table. Never fails; logs and returns an
/// empty map on any problem.
pub fn load_classification(path: &Path) -> ClassificationMap {
    if !path.exists() {
        warn!(
            path = %path.display(),
            "Classification file not found; using source-provided segments"
        );
        return ClassificationMap::new();
    }

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not read classification file");
            return ClassificationMap::new();
        }
    };

    let value: serde_json::Value = match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Malformed classification JSON");
            return ClassificationMap::new();
        }
    };

    let Some(entries) = value.as_object() else {
        warn!(path = %path.display(), "Classification JSON is not an object; ignoring");
        return ClassificationMap::new();
    };

    // Shape check on the first entry only: it must be an object carrying
    // the segment key, or the whole table is considered invalid.
    if let Some((ticker, first)) = entries.iter().next() {
        let first_ok = first
            .as_object()
            .map_or(false, |o| o.contains_key(SEGMENT_KEY));
        if !first_ok {
            warn!(
                path = %path.display(),
                ticker = %ticker,
                "Unexpected classification entry shape; ignoring file"
            );
            return ClassificationMap::new();
        }
    }

    let mut map = ClassificationMap::new();
    for (ticker, entry) in entries {
        let Some(fields) = entry.as_object() else {
            debug!(ticker = %ticker, "Skipping non-object classification entry");
            continue;
        };
        map.insert(
            ticker.clone(),
            ClassificationEntry {
                fund_type: fields
                    .get(TYPE_KEY)
                    .and_then(|v| v.as_str())
                    .map(FundType::from_label),
                original_segment: fields
                    .get(SEGMENT_KEY)
                    .and_then(|v| v.as_str())
                    .map(str::to_string),
            },
        );
    }

    info!(path = %path.display(), tickers = map.len(), "Loaded classification table");
    map
}
