//! Browser capability bridge for `platform_host_web` service adapters.
//!
//! This module contains the WASM/JS interop layer and a non-WASM fallback shim for message
//! dispatch, battery status, and document navigation.

use platform_host::ContactMessage;

/// Outcome of a dispatch request as reported by the JS side.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct DispatchReply {
    /// Whether the HTTP status was in the 2xx range.
    pub ok: bool,
    /// HTTP status code.
    pub status: u16,
    /// Collaborator-provided `error` field, when the body carried one.
    pub error: Option<String>,
}

#[cfg(target_arch = "wasm32")]
mod imp {
    use super::*;
    use js_sys::Promise;
    use serde::Serialize;
    use serde_wasm_bindgen::{from_value, Serializer};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;

    #[wasm_bindgen(inline_js = r#"
async function readJsonBody(response) {
  try {
    return await response.json();
  } catch (_) {
    return null;
  }
}

export async function jsSendMessage(endpoint, payload) {
  const response = await fetch(endpoint, {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify(payload),
  });
  const body = await readJsonBody(response);
  const error = body && typeof body.error === 'string' ? body.error : null;
  return { ok: response.ok, status: response.status, error };
}

export async function jsBatteryLevel() {
  if (typeof navigator === 'undefined' || typeof navigator.getBattery !== 'function') {
    return null;
  }
  const battery = await navigator.getBattery();
  return battery.level;
}

export function jsOpenUrl(url) {
  const opened = window.open(url, '_blank', 'noopener,noreferrer');
  return opened !== null;
}

export function jsDownloadUrl(url, fileName) {
  const link = document.createElement('a');
  link.href = url;
  link.download = fileName;
  document.body.appendChild(link);
  link.click();
  document.body.removeChild(link);
}
"#)]
    extern "C" {
        #[wasm_bindgen(js_name = jsSendMessage)]
        fn js_send_message(endpoint: &str, payload: JsValue) -> Promise;
        #[wasm_bindgen(js_name = jsBatteryLevel)]
        fn js_battery_level() -> Promise;
        #[wasm_bindgen(js_name = jsOpenUrl, catch)]
        fn js_open_url(url: &str) -> Result<bool, JsValue>;
        #[wasm_bindgen(js_name = jsDownloadUrl, catch)]
        fn js_download_url(url: &str, file_name: &str) -> Result<(), JsValue>;
    }

    async fn await_promise(promise: Promise) -> Result<JsValue, String> {
        JsFuture::from(promise).await.map_err(js_error_to_string)
    }

    fn js_error_to_string(err: JsValue) -> String {
        if let Some(text) = err.as_string() {
            return text;
        }
        if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
            if let Some(text) = message.as_string() {
                return text;
            }
        }
        format!("{err:?}")
    }

    pub async fn send_message(
        endpoint: &str,
        message: &ContactMessage,
    ) -> Result<DispatchReply, String> {
        let payload = message
            .serialize(&Serializer::json_compatible())
            .map_err(|e| e.to_string())?;
        let value = await_promise(js_send_message(endpoint, payload)).await?;
        from_value(value).map_err(|e| e.to_string())
    }

    pub async fn battery_level() -> Result<Option<f64>, String> {
        let value = await_promise(js_battery_level()).await?;
        Ok(value.as_f64())
    }

    pub fn open_url(url: &str) -> Result<bool, String> {
        js_open_url(url).map_err(js_error_to_string)
    }

    pub fn download_url(url: &str, file_name: &str) -> Result<(), String> {
        js_download_url(url, file_name).map_err(js_error_to_string)
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use super::*;

    fn unsupported() -> String {
        "Browser APIs are only available when compiled for wasm32".to_string()
    }

    pub async fn send_message(
        _endpoint: &str,
        _message: &ContactMessage,
    ) -> Result<DispatchReply, String> {
        Err(unsupported())
    }

    pub async fn battery_level() -> Result<Option<f64>, String> {
        Ok(None)
    }

    pub fn open_url(_url: &str) -> Result<bool, String> {
        Err(unsupported())
    }

    pub fn download_url(_url: &str, _file_name: &str) -> Result<(), String> {
        Err(unsupported())
    }
}

pub async fn send_message(endpoint: &str, message: &ContactMessage) -> Result<DispatchReply, String> {
    imp::send_message(endpoint, message).await
}

pub async fn battery_level() -> Result<Option<f64>, String> {
    imp::battery_level().await
}

pub fn open_url(url: &str) -> Result<bool, String> {
    imp::open_url(url)
}

pub fn download_url(url: &str, file_name: &str) -> Result<(), String> {
    imp::download_url(url, file_name)
}
