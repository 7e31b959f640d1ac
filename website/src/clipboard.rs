//! Browser clipboard access
//!
//! The async Clipboard API is tried first; when it is missing or refuses,
//! the text goes through a hidden textarea and `execCommand("copy")`.

use restsec_app::{finish_copy, require_api, CopyPath};
use restsec_core::{Error, Result};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

pub async fn copy_text(text: &str) -> Result<CopyPath> {
    let primary = write_text(text).await;
    finish_copy(primary, || legacy_copy(text))
}

async fn write_text(text: &str) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| Error::clipboard("no window"))?;
    let navigator = window.navigator();
    require_api(has_clipboard(&navigator))?;
    let promise = navigator.clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| Error::clipboard(format!("{e:?}")))
}

/// `navigator.clipboard` is undefined on insecure origins and older browsers.
fn has_clipboard(navigator: &web_sys::Navigator) -> bool {
    js_sys::Reflect::get(navigator, &JsValue::from_str("clipboard"))
        .map(|api| !api.is_undefined() && !api.is_null())
        .unwrap_or(false)
}

fn legacy_copy(text: &str) -> Result<()> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| Error::clipboard("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| Error::clipboard("no body"))?;

    let textarea = document
        .create_element("textarea")
        .map_err(|e| Error::clipboard(format!("{e:?}")))?
        .dyn_into::<web_sys::HtmlTextAreaElement>()
        .map_err(|_| Error::clipboard("textarea cast failed"))?;
    textarea.set_value(text);
    let _ = textarea.set_attribute("style", "position:fixed;opacity:0;");
    body.append_child(&textarea)
        .map_err(|e| Error::clipboard(format!("{e:?}")))?;
    let _ = textarea.focus();
    textarea.select();

    let copied = document
        .dyn_into::<web_sys::HtmlDocument>()
        .map_err(|_| Error::clipboard("not an HTML document"))
        .and_then(|html| {
            html.exec_command("copy")
                .map_err(|e| Error::clipboard(format!("{e:?}")))
        });
    textarea.remove();

    match copied {
        Ok(true) => Ok(()),
        Ok(false) => Err(Error::clipboard("execCommand(\"copy\") refused")),
        Err(e) => Err(e),
    }
}
