//! Document shaping helpers: default substitution and derived fields.

use serde_json::Value;

/// Number of leading projects flagged as recent.
pub(crate) const RECENT_PROJECT_COUNT: usize = 2;

/// Merge a stored document over its defaults, top level only.
///
/// A stored field wins unless it is `null`; missing fields fall back to the
/// default. Stored fields without a default are kept as-is. Anything that is
/// not a JSON object yields the defaults unchanged.
#[must_use]
pub fn merge_with_defaults(defaults: &Value, stored: &Value) -> Value {
    let mut merged = defaults.clone();
    let (Some(merged_map), Some(stored_map)) = (merged.as_object_mut(), stored.as_object()) else {
        return merged;
    };
    for (key, value) in stored_map {
        if value.is_null() {
            continue;
        }
        merged_map.insert(key.clone(), value.clone());
    }
    merged
}

/// Recompute the `recent` flag on a projects document.
///
/// Recency is purely positional: the first `min(N, 2)` entries are recent.
/// Stored flags are legacy data and are overwritten on every read and write.
pub fn mark_recent_projects(doc: &mut Value) {
    let Some(projects) = doc.get_mut("projects").and_then(Value::as_array_mut) else {
        return;
    };
    for (index, entry) in projects.iter_mut().enumerate() {
        if let Some(map) = entry.as_object_mut() {
            map.insert("recent".to_string(), Value::Bool(index < RECENT_PROJECT_COUNT));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stored_fields_win_over_defaults() {
        let defaults = json!({"heading": "About", "paragraphs": [], "photo_url": ""});
        let stored = json!({"heading": "Who am I", "paragraphs": ["one", "two"]});
        let merged = merge_with_defaults(&defaults, &stored);
        assert_eq!(merged["heading"], "Who am I");
        assert_eq!(merged["paragraphs"], json!(["one", "two"]));
        assert_eq!(merged["photo_url"], "");
    }

    #[test]
    fn null_stored_fields_fall_back_to_defaults() {
        let defaults = json!({"heading": "About", "photo_url": ""});
        let stored = json!({"heading": null, "photo_url": "/me.jpg"});
        let merged = merge_with_defaults(&defaults, &stored);
        assert_eq!(merged["heading"], "About");
        assert_eq!(merged["photo_url"], "/me.jpg");
    }

    #[test]
    fn empty_values_are_kept_as_stored() {
        // Empty strings and arrays are deliberate values, not absent ones.
        let defaults = json!({"heading": "Projects", "projects": [{"name": "seed"}]});
        let stored = json!({"heading": "", "projects": []});
        let merged = merge_with_defaults(&defaults, &stored);
        assert_eq!(merged["heading"], "");
        assert_eq!(merged["projects"], json!([]));
    }

    #[test]
    fn unknown_stored_fields_survive() {
        let defaults = json!({"heading": "Contact"});
        let stored = json!({"heading": "Say hi", "calendly_url": "https://cal.test/me"});
        let merged = merge_with_defaults(&defaults, &stored);
        assert_eq!(merged["calendly_url"], "https://cal.test/me");
    }

    #[test]
    fn non_object_stored_yields_defaults() {
        let defaults = json!({"heading": "Footer"});
        let merged = merge_with_defaults(&defaults, &json!("oops"));
        assert_eq!(merged, defaults);
    }

    #[test]
    fn recency_is_positional() {
        let mut doc = json!({"projects": [
            {"name": "a"},
            {"name": "b", "recent": false},
            {"name": "c", "recent": true},
            {"name": "d"},
        ]});
        mark_recent_projects(&mut doc);
        let projects = doc["projects"].as_array().expect("projects array");
        assert_eq!(projects[0]["recent"], true);
        assert_eq!(projects[1]["recent"], true);
        assert_eq!(projects[2]["recent"], false);
        assert_eq!(projects[3]["recent"], false);
    }

    #[test]
    fn recency_handles_short_lists() {
        let mut one = json!({"projects": [{"name": "only"}]});
        mark_recent_projects(&mut one);
        assert_eq!(one["projects"][0]["recent"], true);

        let mut empty = json!({"projects": []});
        mark_recent_projects(&mut empty);
        assert_eq!(empty["projects"], json!([]));
    }

    #[test]
    fn recency_tolerates_malformed_documents() {
        let mut missing = json!({"heading": "Projects"});
        mark_recent_projects(&mut missing);
        assert_eq!(missing, json!({"heading": "Projects"}));

        let mut not_array = json!({"projects": "nope"});
        mark_recent_projects(&mut not_array);
        assert_eq!(not_array["projects"], "nope");

        let mut mixed = json!({"projects": [{"name": "a"}, 42]});
        mark_recent_projects(&mut mixed);
        assert_eq!(mixed["projects"][0]["recent"], true);
        assert_eq!(mixed["projects"][1], 42);
    }
}
