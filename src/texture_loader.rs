use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use log::{debug, warn};
use raylib::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlideLoadError {
    #[error("failed to read slides directory {path:?}: {source}")]
    ReadDir { path: PathBuf, source: std::io::Error },
    #[error("failed to read {path:?}: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("failed to decode {path:?}: {message}")]
    Decode { path: PathBuf, message: String },
}

const SLIDE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Image files in `dir_path`, in file name order. Slide order is the order
/// of the names, so `01-intro.png` comes before `02-agenda.png`.
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>, SlideLoadError> {
    let read_dir_error = |source| SlideLoadError::ReadDir { path: dir_path.to_path_buf(), source };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir_path).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        if path.is_file() && SLIDE_EXTENSIONS.contains(&extension_of(&path).as_str()) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// EXIF orientation of a JPEG, 1 (upright) when absent or unreadable.
fn exif_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => match exif.get_field(Tag::Orientation, In::PRIMARY).map(|f| &f.value) {
            Some(Value::Short(values)) if !values.is_empty() => values[0],
            _ => 1,
        },
        Err(e) => {
            warn!("could not read EXIF data for {:?}: {}", image_path, e);
            1
        }
    }
}

/// Loads an image, applies its EXIF rotation and uploads it as a texture.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D, SlideLoadError> {
    let file_bytes = fs::read(image_path).map_err(|source| SlideLoadError::ReadFile {
        path: image_path.to_path_buf(),
        source,
    })?;

    let extension = extension_of(image_path);
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(image_path, &file_bytes)
    } else {
        1
    };

    let decode_error = |e: &dyn std::fmt::Display| SlideLoadError::Decode {
        path: image_path.to_path_buf(),
        message: e.to_string(),
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| decode_error(&e))?;

    // 3: upside down, 6: rotated left, 8: rotated right. Mirrored variants are ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!("applied EXIF orientation {} to {:?}", orientation, image_path);
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| decode_error(&e))
}
