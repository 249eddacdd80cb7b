//! Native file picker (`window.showOpenFilePicker`) interop.
//!
//! The File System Access API is not part of stable `web-sys`, so the picker
//! is reached through `Reflect`. Options are built with serde and converted
//! with `serde-wasm-bindgen`.

use std::collections::BTreeMap;

use js_sys::{Array, Function, Promise, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use super::dom;
use crate::config::IMAGE_EXTENSIONS;
use crate::core::error::PickerError;
use crate::models::AcceptFilter;

/// `showOpenFilePicker` options object.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PickerOptions {
    multiple: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    types: Vec<PickerFileType>,
    exclude_accept_all_option: bool,
}

/// One entry of the picker's `types` list.
#[derive(Debug, Serialize)]
struct PickerFileType {
    description: &'static str,
    accept: BTreeMap<&'static str, &'static [&'static str]>,
}

impl PickerOptions {
    fn for_filter(filter: AcceptFilter) -> Self {
        let types = if filter.restricts_types() {
            vec![PickerFileType {
                description: "Images",
                accept: BTreeMap::from([("image/*", IMAGE_EXTENSIONS)]),
            }]
        } else {
            Vec::new()
        };

        Self {
            multiple: true,
            exclude_accept_all_option: filter.restricts_types(),
            types,
        }
    }

    fn to_js(&self) -> Result<JsValue, PickerError> {
        self.serialize(&Serializer::json_compatible())
            .map_err(|e| PickerError::Rejected(e.to_string()))
    }
}

/// Turn a thrown value or rejected promise into a [`PickerError`].
fn exception_to_error(err: JsValue) -> PickerError {
    let field = |key: &str| {
        Reflect::get(&err, &key.into())
            .ok()
            .and_then(|v| v.as_string())
    };
    let name = field("name").unwrap_or_default();
    let message = field("message")
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));
    PickerError::from_exception_name(&name, message)
}

/// Get `window.showOpenFilePicker`, if the browser has it.
fn get_picker() -> Result<Function, PickerError> {
    let window = dom::window().ok_or(PickerError::Unsupported)?;
    Reflect::get(&window, &"showOpenFilePicker".into())
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
        .ok_or(PickerError::Unsupported)
}

/// Check if the native picker can be used at all.
pub fn is_available() -> bool {
    get_picker().is_ok()
}

/// Resolve a `FileSystemFileHandle` to its `File`.
async fn file_from_handle(handle: &JsValue) -> Result<File, PickerError> {
    let get_file = Reflect::get(handle, &"getFile".into())
        .map_err(|_| PickerError::InvalidHandle)?
        .dyn_into::<Function>()
        .map_err(|_| PickerError::InvalidHandle)?;

    let promise: Promise = get_file
        .call0(handle)
        .map_err(exception_to_error)?
        .into();

    JsFuture::from(promise)
        .await
        .map_err(exception_to_error)?
        .dyn_into::<File>()
        .map_err(|_| PickerError::InvalidHandle)
}

/// Open the native multi-file picker and return the chosen files in order.
pub async fn pick_files(filter: AcceptFilter) -> Result<Vec<File>, PickerError> {
    let picker = get_picker()?;
    let window = dom::window().ok_or(PickerError::Unsupported)?;
    let options = PickerOptions::for_filter(filter).to_js()?;

    let promise: Promise = picker
        .call1(&window, &options)
        .map_err(exception_to_error)?
        .into();

    let handles = JsFuture::from(promise)
        .await
        .map_err(exception_to_error)?
        .dyn_into::<Array>()
        .map_err(|_| PickerError::InvalidHandle)?;

    let mut files = Vec::with_capacity(handles.length() as usize);
    for handle in handles.iter() {
        files.push(file_from_handle(&handle).await?);
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_for_images() {
        let options = PickerOptions::for_filter(AcceptFilter::Images);
        assert!(options.multiple);
        assert!(options.exclude_accept_all_option);
        assert_eq!(options.types.len(), 1);
        assert_eq!(options.types[0].accept.get("image/*"), Some(&IMAGE_EXTENSIONS));
    }

    #[test]
    fn test_options_for_any() {
        let options = PickerOptions::for_filter(AcceptFilter::Any);
        assert!(options.multiple);
        assert!(!options.exclude_accept_all_option);
        assert!(options.types.is_empty());
    }
}
