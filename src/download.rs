use crate::error::SketchResult;
use crate::export::ExportFormat;

/// Hand an encoded export to the user.
///
/// Natively this asks where to save with a file dialog (defaulting to
/// `canvas.<ext>`); cancelling is not an error. On the web it triggers a
/// browser download.
#[cfg(not(target_arch = "wasm32"))]
pub fn offer_download(format: ExportFormat, bytes: &[u8]) -> SketchResult<()> {
    let dialog = rfd::FileDialog::new()
        .set_title(format.button_label())
        .set_file_name(format.file_name())
        .add_filter(format.filter_name(), &[format.extension()]);

    match dialog.save_file() {
        Some(path) => write_export(&path, bytes),
        None => {
            log::info!("Export cancelled");
            Ok(())
        }
    }
}

/// Write exported bytes to a path picked by the user.
#[cfg(not(target_arch = "wasm32"))]
pub fn write_export(path: &std::path::Path, bytes: &[u8]) -> SketchResult<()> {
    std::fs::write(path, bytes)?;
    log::info!("Exported {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn offer_download(format: ExportFormat, bytes: &[u8]) -> SketchResult<()> {
    use crate::error::SketchError;
    use wasm_bindgen::{JsCast as _, JsValue};

    let js_err = |err: JsValue| SketchError::Download(format!("{err:?}"));
    let file_name = format.file_name();

    let window = web_sys::window().ok_or_else(|| SketchError::Download("No window".to_owned()))?;
    let document = window
        .document()
        .ok_or_else(|| SketchError::Download("No document".to_owned()))?;

    let uint8_array = js_sys::Uint8Array::from(bytes);
    let blob_parts = js_sys::Array::new();
    blob_parts.push(&uint8_array);

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(format.mime_type());
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&blob_parts, &options)
        .map_err(js_err)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| SketchError::Download("Created element is not an anchor".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(&file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_err)?;
    log::info!("Offered {} for download ({} bytes)", file_name, bytes.len());
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_export_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(ExportFormat::Png.file_name());

        write_export(&path, b"not really a png").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"not really a png");
    }

    #[test]
    fn test_write_export_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(ExportFormat::Jpeg.file_name());

        write_export(&path, b"first").unwrap();
        write_export(&path, b"second").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn test_write_export_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join(ExportFormat::Webp.file_name());

        let result = write_export(&path, b"");
        assert!(matches!(result, Err(crate::error::SketchError::Io(_))));
    }
}
