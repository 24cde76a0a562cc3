pub mod image_helper {
    use crate::core_modules::pixel_grid::PixelGrid;
    use crate::error::{CleanupError, Result};
    use image::{ImageError, ImageFormat, ImageReader, RgbImage, RgbaImage};
    use std::fs;
    use std::io::Cursor;
    use std::path::{Path, PathBuf};

    fn decode(path: &Path) -> Result<image::DynamicImage> {
        let decode_error = |source: ImageError| CleanupError::Decode {
            path: path.to_path_buf(),
            source,
        };
        ImageReader::open(path)
            .map_err(|e| decode_error(ImageError::IoError(e)))?
            .with_guessed_format()
            .map_err(|e| decode_error(ImageError::IoError(e)))?
            .decode()
            .map_err(decode_error)
    }

    /// Decodes `path` into a 3-channel grid, dropping any alpha channel.
    pub fn load_rgb(path: &Path) -> Result<PixelGrid> {
        let rgb = decode(path)?.into_rgb8();
        log::debug!("Decoded {} ({}x{})", path.display(), rgb.width(), rgb.height());
        Ok(PixelGrid::from(&rgb))
    }

    /// Decodes `path` into an RGBA buffer. Images without alpha come back opaque.
    pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
        let rgba = decode(path)?.into_rgba8();
        log::debug!("Decoded {} ({}x{})", path.display(), rgba.width(), rgba.height());
        Ok(rgba)
    }

    /// The format implied by the extension of `path`.
    pub fn output_format(path: &Path) -> Result<ImageFormat> {
        ImageFormat::from_path(path).map_err(|_| CleanupError::UnsupportedFormat {
            path: path.to_path_buf(),
        })
    }

    /// Encodes `grid` as `format` and replaces `path` with the result.
    ///
    /// The whole image is encoded in memory before the filesystem is touched, so
    /// an encode failure never leaves a partial file behind.
    pub fn save(path: &Path, grid: &PixelGrid, format: ImageFormat) -> Result<()> {
        let mut encoded = Cursor::new(Vec::new());
        RgbImage::from(grid)
            .write_to(&mut encoded, format)
            .map_err(|source| CleanupError::Encode {
                path: path.to_path_buf(),
                source,
            })?;
        write_atomically(path, &encoded.into_inner())
    }

    /// Hidden sibling of `path` used as the staging file for a save.
    fn staging_path(path: &Path) -> PathBuf {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());
        let staging = format!(".{}.{}.tmp", name, std::process::id());
        match path.parent() {
            Some(dir) => dir.join(staging),
            None => PathBuf::from(staging),
        }
    }

    /// Writes `bytes` to a staging file next to `path`, then renames it over
    /// `path`. The staging file is removed if any step fails.
    ///
    /// An existing output is resolved through symlinks first, so the file the
    /// link points at is the one replaced, and its permissions carry over.
    fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
        let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        let permissions = fs::metadata(&target).ok().map(|m| m.permissions());
        let staging = staging_path(&target);
        log::debug!("Staging {} bytes at {}", bytes.len(), staging.display());

        let io_error = |source: std::io::Error| CleanupError::Io {
            path: path.to_path_buf(),
            source,
        };
        let written = fs::write(&staging, bytes)
            .and_then(|_| match permissions {
                Some(permissions) => fs::set_permissions(&staging, permissions),
                None => Ok(()),
            })
            .and_then(|_| fs::rename(&staging, &target));
        if let Err(e) = written {
            let _ = fs::remove_file(&staging);
            return Err(io_error(e));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::image_helper::*;
    use crate::core_modules::pixel::pixel::Pixel;
    use crate::core_modules::pixel_grid::{PixelGrid, Point};
    use crate::error::CleanupError;
    use image::ImageFormat;
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(prefix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock before epoch")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("{}_{}", prefix, nanos));
        fs::create_dir_all(&dir).expect("create temp dir failed");
        dir
    }

    fn dir_entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .expect("read temp dir failed")
            .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn save_then_load_gradient_file() {
        let dir = unique_temp_dir("backdrop_gradient");
        let path = dir.join("gradient_file.png");

        let mut grid = PixelGrid::new(64, 32, Pixel::default());
        for y in 0..32 {
            for x in 0..64 {
                grid.set(Point::new(x, y), Pixel::new((x * 4) as u8, (y * 8) as u8, 128));
            }
        }

        save(&path, &grid, ImageFormat::Png).expect("Error Saving File.");
        let loaded = load_rgb(&path).expect("Error Loading File.");

        assert_eq!(loaded, grid);
        assert_eq!(dir_entries(&dir), vec!["gradient_file.png".to_string()]);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn save_replaces_existing_file() {
        let dir = unique_temp_dir("backdrop_replace");
        let path = dir.join("white_file.png");

        save(&path, &PixelGrid::new(8, 8, Pixel::new(255, 255, 255)), ImageFormat::Png)
            .expect("Error Saving File.");
        save(&path, &PixelGrid::new(8, 8, Pixel::new(15, 15, 20)), ImageFormat::Png)
            .expect("Error Saving File.");

        let loaded = load_rgb(&path).expect("Error Loading File.");
        assert!(loaded.pixels().iter().all(|p| *p == Pixel::new(15, 15, 20)));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn load_rgba_keeps_alpha() {
        let dir = unique_temp_dir("backdrop_rgba");
        let path = dir.join("alpha.png");
        let rgba = image::RgbaImage::from_pixel(2, 2, image::Rgba([1, 2, 3, 4]));
        rgba.save(&path).expect("Error Saving File.");

        let loaded = load_rgba(&path).expect("Error Loading File.");
        assert_eq!(loaded, rgba);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_input_is_a_decode_error() {
        let dir = unique_temp_dir("backdrop_missing");
        let err = load_rgb(&dir.join("nope.png")).unwrap_err();
        assert!(matches!(err, CleanupError::Decode { .. }));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn garbage_input_is_a_decode_error() {
        let dir = unique_temp_dir("backdrop_garbage");
        let path = dir.join("garbage.png");
        fs::write(&path, b"definitely not a png").expect("write failed");

        let err = load_rgb(&path).unwrap_err();
        assert!(matches!(err, CleanupError::Decode { .. }));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn unwritable_output_leaves_no_staging_file() {
        let dir = unique_temp_dir("backdrop_unwritable");
        let path = dir.join("missing_subdir").join("out.png");

        let err = save(&path, &PixelGrid::new(2, 2, Pixel::default()), ImageFormat::Png)
            .unwrap_err();

        assert!(matches!(err, CleanupError::Io { .. }));
        assert!(dir_entries(&dir).is_empty());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn output_format_follows_extension() {
        assert_eq!(
            output_format(Path::new("hero/image.png")).expect("png"),
            ImageFormat::Png
        );
        assert!(matches!(
            output_format(Path::new("hero/image.unknown")),
            Err(CleanupError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn rejected_encoding_writes_nothing() {
        let dir = unique_temp_dir("backdrop_encode");
        let path = dir.join("image.hdr");

        // The HDR encoder only accepts 32-bit float RGB.
        let err = save(&path, &PixelGrid::new(2, 2, Pixel::new(1, 2, 3)), ImageFormat::Hdr)
            .unwrap_err();

        assert!(matches!(err, CleanupError::Encode { .. }));
        assert!(dir_entries(&dir).is_empty());
        fs::remove_dir_all(&dir).ok();
    }
}
