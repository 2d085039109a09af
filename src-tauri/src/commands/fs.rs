//! Renderer-facing filesystem query façade.

use tauri::{AppHandle, Runtime, State};

use crate::bridge::{channels, BridgeRegistry};

/// Checks whether `path` names an existing regular file.
#[tauri::command]
pub async fn is_a_file<R: Runtime>(
    app: AppHandle<R>,
    registry: State<'_, BridgeRegistry<R>>,
    path: String,
) -> Result<bool, String> {
    query(&app, &registry, channels::FS_IS_A_FILE, path).await
}

/// Checks whether `path` names an existing directory.
#[tauri::command]
pub async fn is_directory<R: Runtime>(
    app: AppHandle<R>,
    registry: State<'_, BridgeRegistry<R>>,
    path: String,
) -> Result<bool, String> {
    query(&app, &registry, channels::FS_IS_DIRECTORY, path).await
}

async fn query<R: Runtime>(
    app: &AppHandle<R>,
    registry: &BridgeRegistry<R>,
    channel: &'static str,
    path: String,
) -> Result<bool, String> {
    log::debug!("dispatching path query on '{}' for '{}'", channel, path);

    let reply = registry
        .dispatch(app.clone(), channel, serde_json::Value::String(path))
        .await?;
    serde_json::from_value(reply).map_err(|e| e.to_string())
}
