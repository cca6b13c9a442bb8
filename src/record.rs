//! Row/property ↔ [`Resource`] mapping, used by both extraction (forward)
//! and emission (inverse).

use serde::{Deserialize, Serialize};

use crate::normalize::{clean_string, make_key};
use crate::types::{DATATYPE, DEFAULT_SOURCE_LOCALE, Resource, ResourceState};

/// One flat workbook row. Field order matches the column order written out.
///
/// The `id` column carries the resource key; the `key` column is the
/// explicit-key slot and is left empty when the key was auto-derived and
/// still equals the cleaned source.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowRecord {
    pub index: usize,
    pub id: String,
    pub datatype: String,
    pub source_locale: String,
    pub source: String,
    pub target_locale: String,
    pub target: String,
    pub key: String,
    pub comment: String,
}

impl RowRecord {
    /// Column titles, in emission order.
    pub const COLUMNS: [&'static str; 9] = [
        "index",
        "id",
        "datatype",
        "sourceLocale",
        "source",
        "targetLocale",
        "target",
        "key",
        "comment",
    ];
}

/// Forward mapping: one decoded workbook row to a resource.
///
/// The key comes from the explicit `key` column if present, then the `id`
/// column, then the raw source, always unescaped. Target text and locale are
/// passed through untouched; no escaping is applied to translations.
pub fn resource_from_row(row: &RowRecord, path: &str, index: usize) -> Resource {
    let raw_key = if !row.key.is_empty() {
        row.key.as_str()
    } else if !row.id.is_empty() {
        row.id.as_str()
    } else {
        row.source.as_str()
    };
    let source_locale = if row.source_locale.is_empty() {
        DEFAULT_SOURCE_LOCALE
    } else {
        row.source_locale.as_str()
    };

    Resource {
        key: make_key(raw_key),
        source: clean_string(&row.source),
        source_locale: source_locale.to_string(),
        target: (!row.target.is_empty()).then(|| row.target.clone()),
        target_locale: (!row.target_locale.is_empty()).then(|| row.target_locale.clone()),
        datatype: DATATYPE.to_string(),
        path: path.to_string(),
        index,
        state: ResourceState::New,
        comment: (!row.comment.is_empty()).then(|| row.comment.clone()),
    }
}

/// Forward mapping: one accepted JSON document property to a resource.
///
/// The property value is both the key basis (unescaped) and, cleaned, the
/// source text, mirroring auto-key extraction from descriptor files.
pub fn resource_from_property(value: &str, source_locale: &str, path: &str, index: usize) -> Resource {
    let source_locale = if source_locale.is_empty() {
        DEFAULT_SOURCE_LOCALE
    } else {
        source_locale
    };

    Resource {
        key: make_key(value),
        source: clean_string(value),
        source_locale: source_locale.to_string(),
        target: None,
        target_locale: None,
        datatype: DATATYPE.to_string(),
        path: path.to_string(),
        index,
        state: ResourceState::New,
        comment: None,
    }
}

/// Inverse mapping: a resource back to a flat workbook row.
///
/// The explicit `key` column is emitted only when the key no longer equals
/// the cleaned source. The comparison is against `source`, not the unescaped
/// key basis.
pub fn row_from_resource(resource: &Resource) -> RowRecord {
    let source_locale = if resource.source_locale.is_empty() {
        DEFAULT_SOURCE_LOCALE.to_string()
    } else {
        resource.source_locale.clone()
    };

    RowRecord {
        index: resource.index,
        id: resource.key.clone(),
        datatype: resource.datatype.clone(),
        source_locale,
        source: resource.source.clone(),
        target_locale: resource.target_locale.clone().unwrap_or_default(),
        target: resource.target.clone().unwrap_or_default(),
        key: if resource.key == resource.source {
            String::new()
        } else {
            resource.key.clone()
        },
        comment: resource.comment.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(source: &str) -> RowRecord {
        RowRecord {
            source: source.to_string(),
            source_locale: "en-US".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_forward_auto_key_from_source() {
        let resource = resource_from_row(&row("Settings"), "ko-KR.xlsx", 0);
        assert_eq!(resource.key, "Settings");
        assert_eq!(resource.source, "Settings");
        assert_eq!(resource.source_locale, "en-US");
        assert_eq!(resource.datatype, DATATYPE);
        assert_eq!(resource.state, ResourceState::New);
        assert_eq!(resource.index, 0);
        assert!(resource.target.is_none());
        assert!(resource.comment.is_none());
    }

    #[test]
    fn test_forward_explicit_key_wins() {
        let mut r = row("Hello there");
        r.key = "greeting".to_string();
        let resource = resource_from_row(&r, "a.xlsx", 1);
        assert_eq!(resource.key, "greeting");
        assert_eq!(resource.source, "Hello there");
    }

    #[test]
    fn test_forward_id_fallback() {
        let mut r = row("Hello");
        r.id = "hello.id".to_string();
        let resource = resource_from_row(&r, "a.xlsx", 0);
        assert_eq!(resource.key, "hello.id");
    }

    #[test]
    fn test_forward_key_unescaped_source_cleaned() {
        // key keeps whitespace runs, source collapses them
        let resource = resource_from_row(&row("a  b\\tc"), "a.xlsx", 0);
        assert_eq!(resource.key, "a  b\\tc");
        assert_eq!(resource.source, "a b c");
    }

    #[test]
    fn test_forward_locale_fallback() {
        let mut r = row("Hello");
        r.source_locale = String::new();
        let resource = resource_from_row(&r, "a.xlsx", 0);
        assert_eq!(resource.source_locale, DEFAULT_SOURCE_LOCALE);
    }

    #[test]
    fn test_forward_target_passed_through() {
        let mut r = row("Hello");
        r.target = "안녕".to_string();
        r.target_locale = "ko".to_string();
        let resource = resource_from_row(&r, "a.xlsx", 0);
        assert_eq!(resource.target.as_deref(), Some("안녕"));
        assert_eq!(resource.target_locale.as_deref(), Some("ko"));
    }

    #[test]
    fn test_forward_from_property() {
        let resource = resource_from_property("Settings", "en-US", "appinfo.json", 2);
        assert_eq!(resource.key, "Settings");
        assert_eq!(resource.source, "Settings");
        assert_eq!(resource.index, 2);
        assert!(resource.comment.is_none());
    }

    #[test]
    fn test_inverse_key_omitted_when_auto() {
        let resource = resource_from_row(&row("Settings"), "a.xlsx", 0);
        let out = row_from_resource(&resource);
        assert_eq!(out.id, "Settings");
        assert_eq!(out.key, "");
    }

    #[test]
    fn test_inverse_key_emitted_when_explicit() {
        let mut r = row("Hello there");
        r.key = "greeting".to_string();
        let resource = resource_from_row(&r, "a.xlsx", 0);
        let out = row_from_resource(&resource);
        assert_eq!(out.key, "greeting");
    }

    #[test]
    fn test_inverse_empty_fields_for_absent_options() {
        let resource = resource_from_row(&row("Settings"), "a.xlsx", 0);
        let out = row_from_resource(&resource);
        assert_eq!(out.target, "");
        assert_eq!(out.target_locale, "");
        assert_eq!(out.comment, "");
    }

    #[test]
    fn test_round_trip_source_and_key_fixed_points() {
        let mut r = row("a  b with  runs");
        r.key = "explicit key".to_string();
        r.target = "translated".to_string();
        r.target_locale = "fr".to_string();
        let first = resource_from_row(&r, "a.xlsx", 3);
        let back = row_from_resource(&first);
        let second = resource_from_row(&back, "a.xlsx", 3);
        assert_eq!(second.source, first.source);
        assert_eq!(second.key, first.key);
        assert_eq!(second.target, first.target);
        assert_eq!(second.target_locale, first.target_locale);
    }
}
