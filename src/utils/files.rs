//! Conversion of browser file collections into gallery images.

use web_sys::{DataTransfer, File, FileList};

use crate::models::{AcceptFilter, ObjectUrl};

/// Collect a `FileList` into a `Vec`, preserving order.
pub fn file_list_to_vec(files: &FileList) -> Vec<File> {
    (0..files.length()).filter_map(|i| files.get(i)).collect()
}

/// Files carried by a drop event (empty for in-page drags).
pub fn dropped_files(transfer: &DataTransfer) -> Vec<File> {
    transfer
        .files()
        .map(|files| file_list_to_vec(&files))
        .unwrap_or_default()
}

/// Filter files and create an object URL for each accepted one.
///
/// Rejected and failed files are skipped with a console message.
pub fn to_object_urls(files: Vec<File>, filter: AcceptFilter) -> Vec<ObjectUrl> {
    files
        .into_iter()
        .filter(|file| {
            let admitted = filter.admits(&file.type_());
            if !admitted {
                web_sys::console::log_1(
                    &format!("Skipping {} ({})", file.name(), file.type_()).into(),
                );
            }
            admitted
        })
        .filter_map(|file| match ObjectUrl::from_file(&file) {
            Ok(image) => Some(image),
            Err(e) => {
                web_sys::console::warn_1(&e.to_string().into());
                None
            }
        })
        .collect()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod web_tests {
    use super::*;
    use crate::models::ImageSource;
    use wasm_bindgen_test::*;
    use web_sys::FilePropertyBag;

    wasm_bindgen_test_configure!(run_in_browser);

    fn typed_file(name: &str, mime: &str) -> File {
        let parts = js_sys::Array::of1(&"bytes".into());
        let options = FilePropertyBag::new();
        options.set_type(mime);
        File::new_with_str_sequence_and_options(&parts, name, &options).expect("file construction")
    }

    fn labels(images: &[ObjectUrl]) -> Vec<&str> {
        images.iter().map(|image| image.label()).collect()
    }

    #[wasm_bindgen_test]
    fn test_images_filter_skips_other_types() {
        let files = vec![
            typed_file("notes.txt", "text/plain"),
            typed_file("a.png", "image/png"),
            typed_file("b.jpg", "image/jpeg"),
        ];
        let images = to_object_urls(files, AcceptFilter::Images);
        assert_eq!(labels(&images), vec!["a.png", "b.jpg"]);
    }

    #[wasm_bindgen_test]
    fn test_any_filter_keeps_order() {
        let files = vec![
            typed_file("b.png", "image/png"),
            typed_file("notes.txt", "text/plain"),
        ];
        let images = to_object_urls(files, AcceptFilter::Any);
        assert_eq!(labels(&images), vec!["b.png", "notes.txt"]);
    }
}
