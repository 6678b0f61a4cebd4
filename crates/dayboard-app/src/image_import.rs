//! Turns a user-chosen picture into a `data:` URI.

use std::{path::PathBuf, sync::Arc};

use dayboard_core::data_uri::{self, DataUriError};

use crate::platform;

/// Where a picture comes from.
#[derive(Debug, Clone)]
pub(crate) enum ImageSource {
    /// Ask the user with the platform file picker.
    Picker,
    /// A file dropped onto the window, known by path.
    Path(PathBuf),
    /// A file dropped onto the window whose contents are already loaded.
    Bytes(Arc<[u8]>),
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum ImageImportError {
    #[display("no file was chosen")]
    Canceled,
    #[display("this image source is not available on this platform")]
    Unsupported,
    #[display("file is not a supported image")]
    NotAnImage,
    #[cfg(not(target_arch = "wasm32"))]
    #[display("failed to read image file: {_0}")]
    Io(#[from] std::io::Error),
    #[cfg(target_arch = "wasm32")]
    #[display("browser file access failed: {_0}")]
    Browser(#[error(not(source))] String),
    #[display("invalid data URI: {_0}")]
    DataUri(#[from] DataUriError),
}

/// Reads the picture and returns it as a base64 `data:` URI.
pub(crate) async fn import(source: ImageSource) -> Result<String, ImageImportError> {
    match source {
        ImageSource::Picker => {
            let uri = platform::pick_image().await?;
            let decoded = data_uri::decode(&uri)?;
            sniff(&decoded.bytes)?;
            Ok(uri)
        }
        ImageSource::Path(path) => {
            let bytes = platform::read_file(path).await?;
            encode(&bytes)
        }
        ImageSource::Bytes(bytes) => encode(&bytes),
    }
}

fn sniff(bytes: &[u8]) -> Result<image::ImageFormat, ImageImportError> {
    image::guess_format(bytes).map_err(|_| ImageImportError::NotAnImage)
}

fn encode(bytes: &[u8]) -> Result<String, ImageImportError> {
    let format = sniff(bytes)?;
    Ok(data_uri::encode(format.to_mime_type(), bytes))
}

#[cfg(test)]
mod tests {
    use std::{
        future::Future,
        pin::pin,
        sync::Arc,
        task::{Context, Poll, Waker},
    };

    use super::{ImageImportError, ImageSource, import};

    const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    fn ready<F: Future>(future: F) -> F::Output {
        let mut cx = Context::from_waker(Waker::noop());
        match pin!(future).poll(&mut cx) {
            Poll::Ready(output) => output,
            Poll::Pending => panic!("future was not immediately ready"),
        }
    }

    #[test]
    fn dropped_bytes_are_encoded_with_sniffed_mime() {
        let uri = ready(import(ImageSource::Bytes(Arc::from(PNG_HEADER)))).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn non_image_bytes_are_rejected() {
        let result = ready(import(ImageSource::Bytes(Arc::from(*b"hello, world"))));
        assert!(matches!(result, Err(ImageImportError::NotAnImage)));
    }
}
