//! Displayable image references.
//!
//! [`ObjectUrl`] owns a `blob:` URL for a picked file and revokes it on drop,
//! so removing an entry from the gallery (or unmounting the viewer) releases
//! the file bytes held by the browser.

use web_sys::{File, Url};

use crate::core::error::ObjectUrlError;

/// Anything the viewer can render as an `<img src>`.
pub trait ImageSource {
    /// URL usable as the `src` attribute.
    fn src(&self) -> &str;

    /// Human-readable name (file name), used for `alt` text.
    fn label(&self) -> &str;
}

/// Owned object URL created from a [`File`].
///
/// Not `Clone`: exactly one owner revokes the URL.
#[derive(Debug)]
pub struct ObjectUrl {
    url: String,
    name: String,
}

impl ObjectUrl {
    /// Create an object URL for the given file.
    pub fn from_file(file: &File) -> Result<Self, ObjectUrlError> {
        let name = file.name();
        let url = Url::create_object_url_with_blob(file).map_err(|_| ObjectUrlError {
            file_name: name.clone(),
        })?;

        Ok(Self { url, name })
    }
}

impl ImageSource for ObjectUrl {
    fn src(&self) -> &str {
        &self.url
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.url);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod web_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn test_file(name: &str) -> File {
        let parts = js_sys::Array::of1(&"not really a png".into());
        File::new_with_str_sequence(&parts, name).expect("file construction")
    }

    #[wasm_bindgen_test]
    fn test_object_url_from_file() {
        let image = ObjectUrl::from_file(&test_file("cat.png")).expect("object url");
        assert!(image.src().starts_with("blob:"));
        assert_eq!(image.label(), "cat.png");
    }

    #[wasm_bindgen_test]
    fn test_distinct_urls_per_file() {
        let file = test_file("dup.png");
        let a = ObjectUrl::from_file(&file).expect("object url");
        let b = ObjectUrl::from_file(&file).expect("object url");
        assert_ne!(a.src(), b.src());
    }
}
