// Central data model definitions for everything that crosses the
// renderer/core boundary. Keeping the wire types in one module makes the
// bridge schema easy to audit and easy to test.

use serde::{Deserialize, Serialize};

// -----------------------------------------------------------------------------
// FileFilter
// -----------------------------------------------------------------------------

/// One entry in a dialog's file-type filter list, e.g. `EPUB -> ["epub", "zip"]`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileFilter {
    pub name: String,
    pub extensions: Vec<String>,
}

// -----------------------------------------------------------------------------
// DialogProperty
// -----------------------------------------------------------------------------

/// Behavioral flags for an open dialog. Several are platform notes only
/// (macOS aliases, Windows recent-documents list); they are accepted on the
/// wire regardless so callers never have to branch per platform.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DialogProperty {
    OpenFile,
    OpenDirectory,
    MultiSelections,
    ShowHiddenFiles,
    CreateDirectory,
    PromptToCreate,
    NoResolveAliases,
    TreatPackageAsDirectory,
    DontAddToRecent,
}

// -----------------------------------------------------------------------------
// OpenDialogRequest
// -----------------------------------------------------------------------------

/// Payload for the `dialog:openFile` and `dialog:openDirectory` channels.
///
/// Every field is optional; an empty object is a valid request. Unknown
/// fields are rejected at the boundary so a malformed payload fails with a
/// channel-tagged error instead of silently reaching the host dialog.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OpenDialogRequest {
    pub title: Option<String>,
    pub default_path: Option<String>,
    pub button_label: Option<String>,
    /// macOS: message to display above the input boxes.
    pub message: Option<String>,
    /// macOS App Store: create security scoped bookmarks when packaged.
    pub security_scoped_bookmarks: Option<bool>,
    #[serde(default)]
    pub filters: Vec<FileFilter>,
    #[serde(default)]
    pub properties: Vec<DialogProperty>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_deserializes_to_default_request() {
        let request: OpenDialogRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request, OpenDialogRequest::default());
        assert!(request.filters.is_empty());
        assert!(request.properties.is_empty());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let request: OpenDialogRequest = serde_json::from_value(json!({
            "title": "Pick a book",
            "defaultPath": "/books",
            "buttonLabel": "Choose",
            "securityScopedBookmarks": true,
            "filters": [{ "name": "EPUB", "extensions": ["epub", "zip"] }],
            "properties": ["multiSelections", "showHiddenFiles", "dontAddToRecent"]
        }))
        .unwrap();

        assert_eq!(request.default_path.as_deref(), Some("/books"));
        assert_eq!(request.security_scoped_bookmarks, Some(true));
        assert_eq!(request.filters[0].extensions, vec!["epub", "zip"]);
        assert_eq!(
            request.properties,
            vec![
                DialogProperty::MultiSelections,
                DialogProperty::ShowHiddenFiles,
                DialogProperty::DontAddToRecent
            ]
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<OpenDialogRequest, _> =
            serde_json::from_value(json!({ "tittle": "typo" }));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_property_flag_is_rejected() {
        let result: Result<OpenDialogRequest, _> =
            serde_json::from_value(json!({ "properties": ["openEverything"] }));
        assert!(result.is_err());
    }
}
