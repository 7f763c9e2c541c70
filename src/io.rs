//! Decode and encode pixel matrices through the `image` crate.

use std::path::Path;

use image::{DynamicImage, GrayImage, ImageFormat, RgbImage};
use tracing::debug;

use crate::error::{Error, Result};
use crate::matrix::{Matrix, PixelMatrix};
use crate::pixels::SubPixel;

/// Rounds and clamps a channel value into a byte.
#[inline]
pub fn to_u8(x: SubPixel) -> u8 {
    x.round().clamp(0.0, 255.0) as u8
}

/// Converts any decoded image into an RGB matrix with values in [0, 255].
pub fn from_dynamic_image(image: &DynamicImage) -> Result<PixelMatrix> {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    let data = rgb.pixels().map(|p| p.0.map(SubPixel::from)).collect();
    Ok(PixelMatrix::Rgb(Matrix::new(data, height as usize, width as usize)?))
}

/// `(width, height)` as `image` expects them.
fn image_dimensions(height: usize, width: usize) -> Result<(u32, u32)> {
    let fits = |n: usize| {
        u32::try_from(n).map_err(|_| Error::shape(format!("{height}x{width} does not fit an image")))
    };
    Ok((fits(width)?, fits(height)?))
}

/// Converts a matrix into an 8 bit image. Single-channel matrices become
/// grayscale images.
pub fn to_dynamic_image(matrix: &PixelMatrix) -> Result<DynamicImage> {
    let (width, height) = image_dimensions(matrix.height(), matrix.width())?;
    let image = match matrix {
        PixelMatrix::Rgb(m) => {
            let bytes = m.as_slice().iter().flatten().map(|x| to_u8(*x)).collect();
            RgbImage::from_raw(width, height, bytes).map(DynamicImage::ImageRgb8)
        }
        PixelMatrix::Luma(m) => {
            let bytes = m.as_slice().iter().map(|x| to_u8(*x)).collect();
            GrayImage::from_raw(width, height, bytes).map(DynamicImage::ImageLuma8)
        }
    };
    image.ok_or_else(|| Error::shape(format!("{height}x{width} buffer does not fit an image")))
}

/// Reads an image file as an RGB matrix.
pub fn read_image(path: impl AsRef<Path>) -> Result<PixelMatrix> {
    let path = path.as_ref();
    let image = image::open(path)?;
    debug!(path = %path.display(), width = image.width(), height = image.height(), "decoded image");
    from_dynamic_image(&image)
}

/// Writes a matrix to `path` in the given format.
pub fn write_image(path: impl AsRef<Path>, matrix: &PixelMatrix, format: ImageFormat) -> Result<()> {
    let path = path.as_ref();
    let image = to_dynamic_image(matrix)?;
    image.save_with_format(path, format)?;
    debug!(path = %path.display(), ?format, channels = matrix.channels(), "encoded image");
    Ok(())
}

/// Picks an output format from the file extension.
pub fn format_from_path(path: impl AsRef<Path>) -> Result<ImageFormat> {
    Ok(ImageFormat::from_path(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_u8(){
        assert_eq!(to_u8(17.75), 18);
        assert_eq!(to_u8(-3.0), 0);
        assert_eq!(to_u8(300.0), 255);
        assert_eq!(to_u8(254.4), 254);
    }

    #[test]
    fn test_image_dimensions(){
        assert_eq!(image_dimensions(2, 3).unwrap(), (3, 2));
        let too_wide = u32::MAX as usize + 1;
        assert!(matches!(image_dimensions(1, too_wide), Err(Error::InvalidMatrixShape { .. })));
        assert!(matches!(image_dimensions(too_wide, 1), Err(Error::InvalidMatrixShape { .. })));
    }

    #[test]
    fn test_dynamic_image_round_trip(){
        let rows = vec![
            vec![[10.0, 20.0, 30.0], [40.0, 50.0, 60.0], [70.0, 80.0, 90.0]],
            vec![[0.0, 0.0, 0.0], [255.0, 255.0, 255.0], [1.0, 2.0, 3.0]],
        ];
        let m = PixelMatrix::Rgb(Matrix::from_rows(rows).unwrap());
        let image = to_dynamic_image(&m).unwrap();
        assert_eq!((image.width(), image.height()), (3, 2));
        assert_eq!(from_dynamic_image(&image).unwrap(), m);
    }

    #[test]
    fn test_luma_becomes_gray_image(){
        let m = PixelMatrix::Luma(Matrix::new(vec![0.0, 255.0], 1, 2).unwrap());
        let image = to_dynamic_image(&m).unwrap();
        assert!(matches!(image, DynamicImage::ImageLuma8(_)));

        // decoding always yields RGB
        let decoded = from_dynamic_image(&image).unwrap();
        assert_eq!(decoded.as_rgb().unwrap().as_slice(), &[[0.0; 3], [255.0; 3]]);
    }

    #[test]
    fn test_format_from_path(){
        assert_eq!(format_from_path("out.png").unwrap(), ImageFormat::Png);
        assert_eq!(format_from_path("out.jpg").unwrap(), ImageFormat::Jpeg);
        assert!(matches!(format_from_path("out.nope"), Err(Error::Image(_))));
    }
}
