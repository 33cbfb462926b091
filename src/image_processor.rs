//! # Image Processing Module
//!
//! Questo modulo incapsula tutte le operazioni sul contenuto delle immagini
//! usando la crate `image` (decoder e encoder puri Rust, nessun tool esterno).
//!
//! ## Responsabilità:
//! - Lettura delle dimensioni dall'header, senza decodificare i pixel
//! - Decodifica completa dell'immagine per il resize
//! - Salvataggio con parametri specifici per formato
//!
//! ## Gestione risorse
//! Ogni operazione apre il file, lo usa e lo chiude prima di ritornare: nessun
//! handle resta aperto tra la misura e la decisione di fare backup o resize.
//!
//! ## Parametri di salvataggio
//!
//! | Formato | Encoder | Parametri |
//! |---------|---------|-----------|
//! | JPEG    | `JpegEncoder` | qualità 85, conversione a RGB8 |
//! | PNG     | `PngEncoder`  | compressione `Best`, filtro adattivo |
//! | GIF     | default | RGBA8 |
//! | BMP, WebP | default | RGB8 o RGBA8 |
//! | TIFF    | default | grigio+alpha convertito in RGBA |
//!
//! Il formato di salvataggio è scelto in base all'estensione del file, il
//! formato di lettura in base al contenuto.

use crate::error::{ResizeError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::{ColorType, DynamicImage, ImageFormat, ImageReader};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Quality used when re-encoding JPEG files.
pub const JPEG_QUALITY: u8 = 85;

/// Width and height of an image in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when both sides are at most `bound`.
    pub fn fits_within(&self, bound: u32) -> bool {
        self.width <= bound && self.height <= bound
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<&DynamicImage> for Dimensions {
    fn from(img: &DynamicImage) -> Self {
        Self::new(img.width(), img.height())
    }
}

/// Stateless wrapper around the `image` crate.
pub struct ImageProcessor;

impl ImageProcessor {
    /// Read width and height from the image header.
    pub fn read_dimensions(path: &Path) -> Result<Dimensions> {
        let (width, height) = ImageReader::open(path)?
            .with_guessed_format()?
            .into_dimensions()?;
        Ok(Dimensions::new(width, height))
    }

    /// Decode the whole image.
    pub fn load(path: &Path) -> Result<DynamicImage> {
        Ok(ImageReader::open(path)?.with_guessed_format()?.decode()?)
    }

    /// Encode `img` over `path`, picking the encoder from the file extension.
    pub fn save(img: &DynamicImage, path: &Path) -> Result<()> {
        let format = ImageFormat::from_path(path)
            .map_err(|_| ResizeError::UnsupportedFormat(path.display().to_string()))?;

        match format {
            ImageFormat::Jpeg => Self::write_with(path, |writer| {
                let rgb = Self::jpeg_compatible(img);
                rgb.write_with_encoder(JpegEncoder::new_with_quality(writer, JPEG_QUALITY))
            }),
            ImageFormat::Png => Self::write_with(path, |writer| {
                let encoder =
                    PngEncoder::new_with_quality(writer, CompressionType::Best, PngFilter::Adaptive);
                img.write_with_encoder(encoder)
            }),
            ImageFormat::Gif => Ok(DynamicImage::ImageRgba8(img.to_rgba8()).save_with_format(path, format)?),
            ImageFormat::Bmp | ImageFormat::WebP => {
                Ok(Self::rgb_or_rgba(img).save_with_format(path, format)?)
            }
            ImageFormat::Tiff => Ok(Self::tiff_compatible(img).save_with_format(path, format)?),
            other => Err(ResizeError::UnsupportedFormat(format!(
                "{:?} ({})",
                other,
                path.display()
            ))),
        }
    }

    fn write_with<F>(path: &Path, encode: F) -> Result<()>
    where
        F: FnOnce(&mut BufWriter<File>) -> image::ImageResult<()>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        encode(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    fn jpeg_compatible(img: &DynamicImage) -> DynamicImage {
        match img.color() {
            ColorType::L8 | ColorType::Rgb8 => img.clone(),
            _ => DynamicImage::ImageRgb8(img.to_rgb8()),
        }
    }

    // The TIFF encoder takes no gray+alpha layouts.
    fn tiff_compatible(img: &DynamicImage) -> DynamicImage {
        match img.color() {
            ColorType::La8 => DynamicImage::ImageRgba8(img.to_rgba8()),
            ColorType::La16 => DynamicImage::ImageRgba16(img.to_rgba16()),
            _ => img.clone(),
        }
    }

    fn rgb_or_rgba(img: &DynamicImage) -> DynamicImage {
        match img.color() {
            ColorType::Rgb8 | ColorType::Rgba8 => img.clone(),
            color if color.has_alpha() => DynamicImage::ImageRgba8(img.to_rgba8()),
            _ => DynamicImage::ImageRgb8(img.to_rgb8()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{create_test_image, create_test_jpeg};
    use image::{GrayAlphaImage, LumaA, Rgba, RgbaImage};
    use tempfile::TempDir;

    #[test]
    fn test_read_dimensions_of_synthetic_jpeg() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("test.jpg");
        create_test_jpeg(&path, 500, 300);

        let dims = ImageProcessor::read_dimensions(&path).unwrap();
        assert_eq!(dims, Dimensions::new(500, 300));
        assert!(!dims.fits_within(240));
    }

    #[test]
    fn test_read_dimensions_sniffs_content_not_extension() {
        let tmp = TempDir::new().unwrap();
        let png = tmp.path().join("real.png");
        create_test_image(&png, 64, 32);
        let misnamed = tmp.path().join("actually-png.jpg");
        std::fs::rename(&png, &misnamed).unwrap();

        assert_eq!(ImageProcessor::read_dimensions(&misnamed).unwrap(), Dimensions::new(64, 32));
    }

    #[test]
    fn test_read_dimensions_rejects_garbage() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        assert!(ImageProcessor::read_dimensions(&path).is_err());
        assert!(matches!(
            ImageProcessor::read_dimensions(&tmp.path().join("missing.png")),
            Err(ResizeError::Io(_))
        ));
    }

    #[test]
    fn test_fits_within_is_inclusive() {
        assert!(Dimensions::new(240, 240).fits_within(240));
        assert!(!Dimensions::new(241, 10).fits_within(240));
        assert!(!Dimensions::new(10, 241).fits_within(240));
        assert_eq!(Dimensions::new(240, 144).to_string(), "240x144");
    }

    #[test]
    fn test_save_jpeg_drops_alpha() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("alpha.jpg");
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(40, 20, Rgba([10, 20, 30, 128])));

        ImageProcessor::save(&img, &path).unwrap();
        let reloaded = ImageProcessor::load(&path).unwrap();
        assert_eq!(Dimensions::from(&reloaded), Dimensions::new(40, 20));
        assert!(!reloaded.color().has_alpha());
    }

    #[test]
    fn test_save_png_is_lossless() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("lossless.png");
        let img = DynamicImage::ImageRgba8(RgbaImage::from_fn(30, 30, |x, y| {
            Rgba([x as u8 * 8, y as u8 * 8, 7, 200])
        }));

        ImageProcessor::save(&img, &path).unwrap();
        let reloaded = ImageProcessor::load(&path).unwrap();
        assert_eq!(reloaded.to_rgba8(), img.to_rgba8());
    }

    #[test]
    fn test_save_other_formats_use_default_encoders() {
        let tmp = TempDir::new().unwrap();
        let img = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(12, 8, image::Rgb([1, 2, 3])));

        for name in ["out.bmp", "out.tiff", "out.gif", "out.webp"] {
            let path = tmp.path().join(name);
            ImageProcessor::save(&img, &path).unwrap();
            assert_eq!(
                ImageProcessor::read_dimensions(&path).unwrap(),
                Dimensions::new(12, 8),
                "{name}"
            );
        }
    }

    #[test]
    fn test_save_tiff_accepts_gray_alpha() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("gray.tiff");
        let img = DynamicImage::ImageLumaA8(GrayAlphaImage::from_pixel(16, 9, LumaA([90, 200])));

        ImageProcessor::save(&img, &path).unwrap();
        let reloaded = ImageProcessor::load(&path).unwrap();
        assert_eq!(Dimensions::from(&reloaded), Dimensions::new(16, 9));
        assert_eq!(reloaded.to_rgba8().get_pixel(3, 3).0, [90, 90, 90, 200]);
    }

    #[test]
    fn test_save_unknown_extension_fails() {
        let tmp = TempDir::new().unwrap();
        let img = DynamicImage::new_rgb8(4, 4);
        let result = ImageProcessor::save(&img, &tmp.path().join("out.xyz"));
        assert!(matches!(result, Err(ResizeError::UnsupportedFormat(_))));
    }
}
