use crate::error::Result;
use crate::matrix::{Matrix, PixelMatrix};
use crate::pixels::Rgb;

/// `(rows, cols)` of a matrix.
pub fn dimensions<P>(matrix: &Matrix<P>) -> (usize, usize) {
    (matrix.height(), matrix.width())
}

/// Mean of each channel over every pixel, as `(r, g, b)`.
pub fn mean_intensities(matrix: &Matrix<Rgb>) -> (f64, f64, f64) {
    let pixels = matrix.as_slice();
    let [r, g, b] = pixels.iter().fold([0.0_f64; 3], |[sr, sg, sb], [r, g, b]| {
        [sr + *r as f64, sg + *g as f64, sb + *b as f64]
    });
    let count = pixels.len() as f64;
    (r / count, g / count, b / count)
}

impl PixelMatrix {
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    /// Fails with `InvalidChannelArity` on a single-channel matrix.
    pub fn mean_intensities(&self) -> Result<(f64, f64, f64)> {
        Ok(mean_intensities(self.as_rgb()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn sample() -> Matrix<Rgb> {
        Matrix::from_rows(vec![
            vec![[10.0, 20.0, 30.0], [40.0, 50.0, 60.0]],
            vec![[70.0, 80.0, 90.0], [100.0, 110.0, 120.0]],
        ]).unwrap()
    }

    #[test]
    fn test_dimensions(){
        assert_eq!(dimensions(&sample()), (2, 2));

        let wide = Matrix::new(vec![0.0_f32; 12], 3, 4).unwrap();
        assert_eq!(dimensions(&wide), (3, 4));
    }

    #[test]
    fn test_mean_intensities(){
        assert_eq!(mean_intensities(&sample()), (55.0, 65.0, 75.0));
    }

    #[test]
    fn test_mean_single_pixel(){
        let m = Matrix::new(vec![[1.5, 2.5, 3.5]], 1, 1).unwrap();
        assert_eq!(mean_intensities(&m), (1.5, 2.5, 3.5));
    }

    #[test]
    fn test_mean_rejects_luma(){
        let m = PixelMatrix::Luma(Matrix::new(vec![1.0, 2.0], 1, 2).unwrap());
        assert!(matches!(
            m.mean_intensities(),
            Err(Error::InvalidChannelArity { expected: 3, found: 1 })
        ));
        assert_eq!(m.dimensions(), (1, 2));
    }
}
