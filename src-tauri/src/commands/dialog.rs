//! Renderer-facing dialog façade.
//!
//! These commands are the only way the WebView reaches the native pickers.
//! Each one serializes its argument to plain JSON and forwards it through
//! the bridge registry under the channel's fixed name; the reply resolves to
//! the selected path, or `null` when the user cancelled.

use tauri::{AppHandle, Runtime, State};

use crate::bridge::{channels, BridgeRegistry};
use crate::models::OpenDialogRequest;

/// Opens the native file picker. Cancellation resolves to `None`.
#[tauri::command]
pub async fn open_file<R: Runtime>(
    app: AppHandle<R>,
    registry: State<'_, BridgeRegistry<R>>,
    request: Option<OpenDialogRequest>,
) -> Result<Option<String>, String> {
    forward(&app, &registry, channels::DIALOG_OPEN_FILE, request).await
}

/// Opens the native directory picker. Cancellation resolves to `None`.
#[tauri::command]
pub async fn open_directory<R: Runtime>(
    app: AppHandle<R>,
    registry: State<'_, BridgeRegistry<R>>,
    request: Option<OpenDialogRequest>,
) -> Result<Option<String>, String> {
    forward(&app, &registry, channels::DIALOG_OPEN_DIRECTORY, request).await
}

async fn forward<R: Runtime>(
    app: &AppHandle<R>,
    registry: &BridgeRegistry<R>,
    channel: &'static str,
    request: Option<OpenDialogRequest>,
) -> Result<Option<String>, String> {
    log::info!("dispatching dialog request on '{}'", channel);

    // The far side destructures an object, so a missing request must cross
    // the boundary as an empty one.
    let payload =
        serde_json::to_value(request.unwrap_or_default()).map_err(|e| e.to_string())?;
    let reply = registry.dispatch(app.clone(), channel, payload).await?;
    serde_json::from_value(reply).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn an_omitted_request_crosses_as_an_empty_object() {
        let crossing = serde_json::to_value(OpenDialogRequest::default()).unwrap();
        let parsed: OpenDialogRequest = serde_json::from_value(crossing).unwrap();
        let empty: OpenDialogRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(parsed, empty);
    }
}
