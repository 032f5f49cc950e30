//! Exporting the canvas as a downloadable JPEG.
//!
//! An export works on a [`Snapshot`] taken when it was requested, so drawing
//! that happens while the encode is in flight never shows up in the file.

use chrono::{DateTime, Utc};
use futures::channel::oneshot;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::RgbImage;

use crate::config::EditorConfig;
use crate::error::ExportError;
use crate::util::time;

pub type ExportResult = Result<Delivered, ExportError>;

/// A frozen copy of the surface raster
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    image: RgbImage,
}

impl Snapshot {
    pub fn new(image: RgbImage) -> Self {
        Self { image }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }
}

/// Where a finished artifact ends up
#[derive(Debug, Clone, PartialEq)]
pub enum Destination {
    /// Kept in memory only
    Memory,
    /// Written into this directory
    #[cfg(not(target_arch = "wasm32"))]
    Directory(std::path::PathBuf),
    /// Offered to the user as a browser download
    #[cfg(target_arch = "wasm32")]
    Browser,
}

impl Destination {
    /// The platform's usual place for downloads
    pub fn platform_default(config: &EditorConfig) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let dir = config.export_dir.clone().unwrap_or_else(|| {
                directories::UserDirs::new()
                    .and_then(|dirs| dirs.download_dir().map(|dir| dir.to_path_buf()))
                    .unwrap_or_else(|| std::path::PathBuf::from("."))
            });
            Self::Directory(dir)
        }

        #[cfg(target_arch = "wasm32")]
        {
            let _ = config;
            Self::Browser
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    /// Side length of the output image in pixels
    pub size: u32,
    /// JPEG quality in (0, 1]
    pub quality: f32,
    pub destination: Destination,
}

impl ExportSettings {
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            size: config.export_size,
            quality: config.export_quality,
            destination: Destination::platform_default(config),
        }
    }

    /// Quality on the encoder's 1..=100 scale
    pub fn jpeg_quality(&self) -> u8 {
        (self.quality * 100.0).round().clamp(1.0, 100.0) as u8
    }
}

/// An encoded image, ready to be handed to the user
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
}

/// An artifact together with where it was delivered to
#[derive(Debug, Clone, PartialEq)]
pub struct Delivered {
    pub artifact: Artifact,
    pub location: String,
}

/// `pixel-art-<timestamp>.jpg`
pub fn artifact_file_name(at: &DateTime<Utc>) -> String {
    format!("pixel-art-{}.jpg", time::file_stamp(at))
}

/// Scales the snapshot to a `size` x `size` square. Nearest-neighbor keeps cell edges crisp.
pub fn resample(snapshot: &Snapshot, size: u32) -> Result<RgbImage, ExportError> {
    let image = snapshot.image();
    if image.width() == 0 || image.height() == 0 || size == 0 {
        return Err(ExportError::EmptySurface);
    }
    if image.width() == size && image.height() == size {
        return Ok(image.clone());
    }
    Ok(imageops::resize(image, size, size, FilterType::Nearest))
}

/// Resamples and encodes a snapshot. Depends only on its arguments.
pub fn encode_artifact(
    snapshot: &Snapshot,
    settings: &ExportSettings,
    at: DateTime<Utc>,
) -> Result<Artifact, ExportError> {
    let resized = resample(snapshot, settings.size)?;

    let mut bytes = Vec::new();
    resized.write_with_encoder(JpegEncoder::new_with_quality(&mut bytes, settings.jpeg_quality()))?;

    Ok(Artifact {
        file_name: artifact_file_name(&at),
        width: resized.width(),
        height: resized.height(),
        bytes,
    })
}

/// Encodes the snapshot and delivers the result to `settings.destination`
pub async fn export(snapshot: Snapshot, settings: ExportSettings) -> ExportResult {
    let artifact = encode_artifact(&snapshot, &settings, time::now())?;
    log::debug!(
        "Encoded {} ({}x{}, {} bytes)",
        artifact.file_name,
        artifact.width,
        artifact.height,
        artifact.bytes.len()
    );
    deliver(artifact, &settings.destination)
}

fn deliver(artifact: Artifact, destination: &Destination) -> ExportResult {
    match destination {
        Destination::Memory => Ok(Delivered {
            location: "memory".to_owned(),
            artifact,
        }),
        #[cfg(not(target_arch = "wasm32"))]
        Destination::Directory(dir) => {
            std::fs::create_dir_all(dir)?;
            let path = dir.join(&artifact.file_name);
            std::fs::write(&path, &artifact.bytes)?;
            Ok(Delivered {
                location: path.display().to_string(),
                artifact,
            })
        }
        #[cfg(target_arch = "wasm32")]
        Destination::Browser => {
            web::download(&artifact)?;
            Ok(Delivered {
                location: "browser download".to_owned(),
                artifact,
            })
        }
    }
}

/// An export running in the background
#[derive(Debug)]
pub struct ExportTask {
    id: u64,
    receiver: oneshot::Receiver<ExportResult>,
}

impl ExportTask {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the result once the export has finished
    pub fn poll(&mut self) -> Option<ExportResult> {
        match self.receiver.try_recv() {
            Ok(Some(result)) => Some(result),
            Ok(None) => None,
            Err(oneshot::Canceled) => Some(Err(ExportError::Cancelled)),
        }
    }

    /// Blocks until the export has finished
    #[cfg(not(target_arch = "wasm32"))]
    pub fn wait(self) -> ExportResult {
        futures::executor::block_on(self.receiver).unwrap_or(Err(ExportError::Cancelled))
    }
}

/// Starts an export without blocking the caller.
///
/// Native builds encode on a worker thread; web builds run on the browser's
/// event loop.
pub fn spawn_export(id: u64, snapshot: Snapshot, settings: ExportSettings) -> ExportTask {
    let (sender, receiver) = oneshot::channel();
    let job = async move {
        let result = export(snapshot, settings).await;
        // The receiver may be gone if the editor was dropped
        let _ = sender.send(result);
    };

    #[cfg(not(target_arch = "wasm32"))]
    std::thread::spawn(move || futures::executor::block_on(job));

    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(job);

    ExportTask { id, receiver }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::{JsCast, JsValue};

    use super::Artifact;
    use crate::error::ExportError;

    fn platform_err(value: JsValue) -> ExportError {
        ExportError::Platform(format!("{value:?}"))
    }

    /// Clicks a temporary link to a Blob URL holding the artifact
    pub(super) fn download(artifact: &Artifact) -> Result<(), ExportError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ExportError::Platform("no document".to_owned()))?;

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(artifact.bytes.as_slice()));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("image/jpeg");
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(platform_err)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(platform_err)?;

        let anchor: web_sys::HtmlAnchorElement = document
            .create_element("a")
            .map_err(platform_err)?
            .dyn_into()
            .map_err(|_| ExportError::Platform("not an anchor element".to_owned()))?;
        anchor.set_href(&url);
        anchor.set_download(&artifact.file_name);
        anchor.click();

        web_sys::Url::revoke_object_url(&url).map_err(platform_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn settings(size: u32) -> ExportSettings {
        ExportSettings {
            size,
            quality: 0.9,
            destination: Destination::Memory,
        }
    }

    #[test]
    fn test_file_name_pattern() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 13, 45, 9).unwrap();
        assert_eq!(artifact_file_name(&at), "pixel-art-2024-05-01T13-45-09.jpg");
    }

    #[test]
    fn test_jpeg_quality_scale() {
        assert_eq!(settings(1).jpeg_quality(), 90);
        let low = ExportSettings { quality: 0.001, ..settings(1) };
        assert_eq!(low.jpeg_quality(), 1);
    }

    #[test]
    fn test_resample_upscales_with_hard_edges() {
        let mut image = RgbImage::from_pixel(2, 2, image::Rgb([255, 255, 255]));
        image.put_pixel(0, 0, image::Rgb([255, 0, 0]));

        let resized = resample(&Snapshot::new(image), 8).unwrap();
        assert_eq!(resized.dimensions(), (8, 8));
        assert_eq!(*resized.get_pixel(3, 3), image::Rgb([255, 0, 0]));
        assert_eq!(*resized.get_pixel(4, 4), image::Rgb([255, 255, 255]));
    }

    #[test]
    fn test_empty_snapshot_fails() {
        let result = encode_artifact(&Snapshot::new(RgbImage::new(0, 0)), &settings(512), Utc::now());
        assert!(matches!(result, Err(ExportError::EmptySurface)));
    }
}
