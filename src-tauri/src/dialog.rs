//! Native open-dialog capabilities.
//!
//! Both entry points funnel into [`show_open_dialog`], which normalizes the
//! caller's request before it reaches the host: an "All Files" filter is
//! always appended, and the operation-defining property (open file vs. open
//! directory) is always appended, so a caller cannot disable the dialog's
//! fundamental mode. Cancellation is a normal outcome and resolves to `None`.

use tauri::{AppHandle, Manager, Runtime};
use tauri_plugin_dialog::{DialogExt, FilePath};
use tokio::sync::oneshot;

use crate::models::{DialogProperty, FileFilter, OpenDialogRequest};

/// Shows the native open dialog in single-file mode and resolves to the
/// first selected path, or `None` if the user cancelled.
pub async fn open_file_dialog<R: Runtime>(
    app: &AppHandle<R>,
    request: OpenDialogRequest,
) -> Option<String> {
    show_open_dialog(app, request, DialogProperty::OpenFile).await
}

/// Same contract as [`open_file_dialog`], but picking a directory.
pub async fn open_directory_dialog<R: Runtime>(
    app: &AppHandle<R>,
    request: OpenDialogRequest,
) -> Option<String> {
    show_open_dialog(app, request, DialogProperty::OpenDirectory).await
}

/// Appends the implicit "All Files" entry to the caller's filter list.
fn effective_filters(mut filters: Vec<FileFilter>) -> Vec<FileFilter> {
    filters.push(FileFilter {
        name: "All Files".to_string(),
        extensions: vec!["*".to_string()],
    });
    filters
}

/// Appends the operation-defining mode to the caller's property set.
fn effective_properties(
    mut properties: Vec<DialogProperty>,
    mode: DialogProperty,
) -> Vec<DialogProperty> {
    properties.push(mode);
    properties
}

/// First of possibly many selected paths; extra selections are discarded.
fn first_selection<T>(selected: Option<Vec<T>>) -> Option<T> {
    selected.and_then(|paths| paths.into_iter().next())
}

async fn show_open_dialog<R: Runtime>(
    app: &AppHandle<R>,
    request: OpenDialogRequest,
    mode: DialogProperty,
) -> Option<String> {
    let OpenDialogRequest {
        title,
        default_path,
        filters,
        properties,
        ..
    } = request;

    let filters = effective_filters(filters);
    let properties = effective_properties(properties, mode);

    let mut builder = app.dialog().file();
    if let Some(title) = title {
        builder = builder.set_title(title);
    }
    if let Some(path) = default_path {
        builder = builder.set_directory(path);
    }
    for filter in &filters {
        let extensions: Vec<&str> = filter.extensions.iter().map(String::as_str).collect();
        builder = builder.add_filter(filter.name.as_str(), &extensions);
    }
    if properties.contains(&DialogProperty::CreateDirectory) {
        builder = builder.set_can_create_directories(true);
    }

    // Associate the main window so the dialog behaves modally over it.
    #[cfg(desktop)]
    if let Some(window) = app.get_webview_window("main") {
        builder = builder.set_parent(&window);
    }

    let directory = mode == DialogProperty::OpenDirectory;
    let multi = properties.contains(&DialogProperty::MultiSelections);

    let (tx, rx) = oneshot::channel::<Option<FilePath>>();
    match (directory, multi) {
        (false, false) => builder.pick_file(move |path| {
            let _ = tx.send(path);
        }),
        (false, true) => builder.pick_files(move |paths| {
            let _ = tx.send(first_selection(paths));
        }),
        (true, false) => builder.pick_folder(move |path| {
            let _ = tx.send(path);
        }),
        (true, true) => builder.pick_folders(move |paths| {
            let _ = tx.send(first_selection(paths));
        }),
    }

    rx.await.ok().flatten().map(|path| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_files_filter_is_appended_to_an_empty_list() {
        let filters = effective_filters(Vec::new());
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].name, "All Files");
        assert_eq!(filters[0].extensions, vec!["*"]);
    }

    #[test]
    fn caller_filters_are_kept_ahead_of_the_all_files_entry() {
        let filters = effective_filters(vec![FileFilter {
            name: "EPUB".to_string(),
            extensions: vec!["epub".to_string(), "zip".to_string()],
        }]);
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[0].name, "EPUB");
        assert_eq!(filters[1].name, "All Files");
    }

    #[test]
    fn file_mode_is_appended_regardless_of_caller_properties() {
        let properties = effective_properties(
            vec![
                DialogProperty::MultiSelections,
                DialogProperty::ShowHiddenFiles,
            ],
            DialogProperty::OpenFile,
        );
        assert!(properties.contains(&DialogProperty::OpenFile));
        assert!(properties.contains(&DialogProperty::MultiSelections));
    }

    #[test]
    fn directory_mode_is_appended_to_an_empty_property_set() {
        let properties = effective_properties(Vec::new(), DialogProperty::OpenDirectory);
        assert_eq!(properties, vec![DialogProperty::OpenDirectory]);
    }

    #[test]
    fn cancellation_yields_no_selection() {
        assert_eq!(first_selection::<String>(None), None);
        assert_eq!(first_selection::<String>(Some(Vec::new())), None);
    }

    #[test]
    fn only_the_first_of_many_selections_is_used() {
        let picked = first_selection(Some(vec!["/a".to_string(), "/b".to_string()]));
        assert_eq!(picked.as_deref(), Some("/a"));
    }
}
