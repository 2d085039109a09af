//! Channel-keyed dispatch between the renderer façade and the host
//! capabilities.
//!
//! The registry is an explicit object built once by [`crate::run`] and owned
//! by the app through managed state; nothing registers channels after
//! startup. Every handler validates its JSON payload against the channel's
//! schema before any host service is touched, so a malformed payload fails
//! with a channel-tagged error instead of reaching a dialog or stat call.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tauri::{AppHandle, Manager, Runtime};

use crate::models::OpenDialogRequest;
use crate::state::DialogGate;
use crate::{dialog, fs_checks};

/// Fixed channel names. These strings are part of the wire protocol and
/// must match exactly what the renderer sends.
pub mod channels {
    pub const DIALOG_OPEN_FILE: &str = "dialog:openFile";
    pub const DIALOG_OPEN_DIRECTORY: &str = "dialog:openDirectory";
    pub const FS_IS_A_FILE: &str = "node:fs.statSync.isAFile";
    pub const FS_IS_DIRECTORY: &str = "node:fs.statSync.isDirectory";
}

type HandlerFuture = Pin<Box<dyn Future<Output = Result<Value, String>> + Send>>;
type ChannelHandler<R> = Box<dyn Fn(AppHandle<R>, Value) -> HandlerFuture + Send + Sync>;

/// Maps the closed set of channel names to their bound handlers.
pub struct BridgeRegistry<R: Runtime> {
    handlers: HashMap<&'static str, ChannelHandler<R>>,
}

impl<R: Runtime> Default for BridgeRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Runtime> BridgeRegistry<R> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Binds `handler` to `channel`. Binding is intended to happen exactly
    /// once, at startup; a duplicate bind keeps the latest handler.
    pub fn bind(&mut self, channel: &'static str, handler: ChannelHandler<R>) {
        if self.handlers.insert(channel, handler).is_some() {
            log::warn!(
                "channel '{}' bound more than once; keeping the latest handler",
                channel
            );
        }
    }

    /// The currently bound channel names, in no particular order.
    pub fn channels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }

    /// Forwards `payload` to the handler bound to `channel`. An unregistered
    /// channel name is an error; the renderer sees it as a rejected promise.
    pub async fn dispatch(
        &self,
        app: AppHandle<R>,
        channel: &str,
        payload: Value,
    ) -> Result<Value, String> {
        let handler = self
            .handlers
            .get(channel)
            .ok_or_else(|| format!("no handler registered for channel '{}'", channel))?;
        handler(app, payload).await
    }
}

/// Binds the fixed channel table. Runs once, at startup.
pub fn register_channels<R: Runtime>(registry: &mut BridgeRegistry<R>) {
    registry.bind(
        channels::DIALOG_OPEN_FILE,
        Box::new(|app, payload| {
            Box::pin(async move {
                let request: OpenDialogRequest =
                    parse_payload(channels::DIALOG_OPEN_FILE, payload)?;
                let gate = app.state::<DialogGate>();
                let _permit = gate.try_acquire().ok_or_else(busy)?;
                Ok(reply(dialog::open_file_dialog(&app, request).await))
            })
        }),
    );

    registry.bind(
        channels::DIALOG_OPEN_DIRECTORY,
        Box::new(|app, payload| {
            Box::pin(async move {
                let request: OpenDialogRequest =
                    parse_payload(channels::DIALOG_OPEN_DIRECTORY, payload)?;
                let gate = app.state::<DialogGate>();
                let _permit = gate.try_acquire().ok_or_else(busy)?;
                Ok(reply(dialog::open_directory_dialog(&app, request).await))
            })
        }),
    );

    registry.bind(
        channels::FS_IS_A_FILE,
        Box::new(|_app, payload| {
            Box::pin(async move {
                let path: String = parse_payload(channels::FS_IS_A_FILE, payload)?;
                Ok(Value::Bool(fs_checks::is_a_file(&path)))
            })
        }),
    );

    registry.bind(
        channels::FS_IS_DIRECTORY,
        Box::new(|_app, payload| {
            Box::pin(async move {
                let path: String = parse_payload(channels::FS_IS_DIRECTORY, payload)?;
                Ok(Value::Bool(fs_checks::is_directory(&path)))
            })
        }),
    );
}

fn parse_payload<T: DeserializeOwned>(channel: &str, payload: Value) -> Result<T, String> {
    serde_json::from_value(payload)
        .map_err(|e| format!("invalid payload for channel '{}': {}", channel, e))
}

/// Cancellation crosses the boundary as `null`, never as an error.
fn reply(picked: Option<String>) -> Value {
    picked.map(Value::String).unwrap_or(Value::Null)
}

fn busy() -> String {
    "another native dialog is already open".to_string()
}
