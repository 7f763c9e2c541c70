use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::matrix::{Matrix, PixelMatrix};
use crate::pixels::{Luma, PixelOps, Rgb, BLACK, WHITE};

pub const DEFAULT_THRESHOLD: Luma = 128.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl FromStr for Channel {
    type Err = Error;

    fn from_str(label: &str) -> Result<Self> {
        match label.to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(Channel::Red),
            "g" | "green" => Ok(Channel::Green),
            "b" | "blue" => Ok(Channel::Blue),
            _ => Err(Error::InvalidChannelLabel(label.to_string())),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        };
        f.write_str(label)
    }
}

/// The set of channels a filter keeps.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct Channels {
    pub r: bool,
    pub g: bool,
    pub b: bool,
}

impl Channels {
    pub const ALL: Channels = Channels { r: true, g: true, b: true };
    pub const NONE: Channels = Channels { r: false, g: false, b: false };

    /// Parses labels such as `["R", "B"]`, failing on the first unknown one.
    pub fn from_labels<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        labels
            .into_iter()
            .map(|label| label.as_ref().parse::<Channel>())
            .collect()
    }

    pub fn contains(&self, channel: Channel) -> bool {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    pub fn insert(&mut self, channel: Channel) {
        match channel {
            Channel::Red => self.r = true,
            Channel::Green => self.g = true,
            Channel::Blue => self.b = true,
        }
    }
}

impl FromIterator<Channel> for Channels {
    fn from_iter<I: IntoIterator<Item = Channel>>(iter: I) -> Self {
        let mut channels = Channels::NONE;
        for channel in iter {
            channels.insert(channel);
        }
        channels
    }
}

impl TryFrom<Vec<String>> for Channels {
    type Error = Error;

    fn try_from(labels: Vec<String>) -> Result<Self> {
        Channels::from_labels(labels)
    }
}

/// Zeroes every channel not in `keep`.
pub fn filter_channels(matrix: &Matrix<Rgb>, keep: Channels) -> Matrix<Rgb> {
    let mask = [keep.r, keep.g, keep.b];
    matrix.map(|pixel| pixel.mask(mask))
}

/// Weighted sum `0.2989 R + 0.5870 G + 0.1140 B` per pixel.
///
/// The result is neither rounded nor clamped.
pub fn to_grayscale(matrix: &Matrix<Rgb>) -> Matrix<Luma> {
    matrix.map(|pixel| pixel.gray())
}

/// Binarizes the grayscale intensity: at or above `threshold` is white (0),
/// below is black (255).
pub fn to_monochrome(matrix: &Matrix<Rgb>, threshold: Luma) -> Matrix<Luma> {
    matrix.map(|pixel| if pixel.gray() >= threshold { WHITE } else { BLACK })
}

impl PixelMatrix {
    pub fn filter_channels(&self, keep: Channels) -> Result<PixelMatrix> {
        Ok(PixelMatrix::Rgb(filter_channels(self.as_rgb()?, keep)))
    }

    pub fn to_grayscale(&self) -> Result<PixelMatrix> {
        Ok(PixelMatrix::Luma(to_grayscale(self.as_rgb()?)))
    }

    pub fn to_monochrome(&self, threshold: Luma) -> Result<PixelMatrix> {
        Ok(PixelMatrix::Luma(to_monochrome(self.as_rgb()?, threshold)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix<Rgb> {
        Matrix::from_rows(vec![
            vec![[10.0, 20.0, 30.0], [40.0, 50.0, 60.0]],
            vec![[70.0, 80.0, 90.0], [100.0, 110.0, 120.0]],
        ]).unwrap()
    }

    #[test]
    fn test_channel_labels(){
        assert_eq!("R".parse::<Channel>().unwrap(), Channel::Red);
        assert_eq!("g".parse::<Channel>().unwrap(), Channel::Green);
        assert_eq!("Blue".parse::<Channel>().unwrap(), Channel::Blue);
        assert!(matches!("X".parse::<Channel>(), Err(Error::InvalidChannelLabel(l)) if l == "X"));
    }

    #[test]
    fn test_channels_from_labels(){
        let keep = Channels::from_labels(["R", "B"]).unwrap();
        assert_eq!(keep, Channels { r: true, g: false, b: true });
        assert!(keep.contains(Channel::Blue));
        assert!(!keep.contains(Channel::Green));

        let empty: [&str; 0] = [];
        assert_eq!(Channels::from_labels(empty).unwrap(), Channels::NONE);

        assert!(matches!(
            Channels::from_labels(["R", "Y"]),
            Err(Error::InvalidChannelLabel(_))
        ));
    }

    #[test]
    fn test_channels_deserialize_from_labels(){
        #[derive(Deserialize)]
        struct Keep {
            channels: Channels,
        }

        let keep: Keep = toml::from_str(r#"channels = ["R", "green"]"#).unwrap();
        assert_eq!(keep.channels, Channels { r: true, g: true, b: false });

        let result = toml::from_str::<Keep>(r#"channels = ["R", "Alpha"]"#);
        let message = result.err().unwrap().to_string();
        assert!(message.contains("invalid channel label"), "{message}");
    }

    #[test]
    fn test_filter_keeps_selected(){
        let keep = Channels::from_labels(["R", "B"]).unwrap();
        let filtered = filter_channels(&sample(), keep);
        assert_eq!(filtered.get(0, 0), Some(&[10.0, 0.0, 30.0]));
        assert_eq!(filtered.get(1, 1), Some(&[100.0, 0.0, 120.0]));
    }

    #[test]
    fn test_filter_all_is_identity(){
        assert_eq!(filter_channels(&sample(), Channels::ALL), sample());
    }

    #[test]
    fn test_filter_none_is_black(){
        let filtered = filter_channels(&sample(), Channels::NONE);
        assert!(filtered.as_slice().iter().all(|p| *p == [0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_grayscale(){
        let gray = to_grayscale(&sample());
        assert_eq!((gray.height(), gray.width()), (2, 2));
        assert!((gray.get(0, 0).unwrap() - 18.149).abs() < 1e-3);
    }

    #[test]
    fn test_grayscale_every_pixel(){
        let expected: [f32; 4] = [18.149, 48.146, 78.143, 108.14];
        let gray = to_grayscale(&sample());
        for (value, expected) in gray.as_slice().iter().zip(expected) {
            assert!((value - expected).abs() < 1e-3, "{value} != {expected}");
        }
        for (pixel, value) in sample().as_slice().iter().zip(gray.as_slice()) {
            let [r, g, b] = *pixel;
            assert_eq!(*value, 0.2989*r + 0.5870*g + 0.1140*b);
        }
    }

    #[test]
    fn test_monochrome_polarity(){
        // gray values: ~18.1, ~48.1, ~78.1, ~108.1
        let mono = to_monochrome(&sample(), 50.0);
        assert_eq!(mono.to_rows(), vec![vec![BLACK, BLACK], vec![WHITE, WHITE]]);
    }

    #[test]
    fn test_monochrome_threshold_is_inclusive(){
        let m = Matrix::new(vec![[100.0, 100.0, 100.0]], 1, 1).unwrap();
        let gray = to_grayscale(&m).as_slice()[0];
        assert_eq!(to_monochrome(&m, gray).as_slice(), &[WHITE]);
    }

    #[test]
    fn test_monochrome_default_threshold(){
        let m = Matrix::new(vec![[255.0, 255.0, 255.0], [0.0, 0.0, 0.0]], 1, 2).unwrap();
        assert_eq!(to_monochrome(&m, DEFAULT_THRESHOLD).as_slice(), &[WHITE, BLACK]);
    }

    #[test]
    fn test_color_ops_reject_luma(){
        let m = PixelMatrix::Luma(Matrix::new(vec![1.0], 1, 1).unwrap());
        assert!(matches!(m.filter_channels(Channels::ALL), Err(Error::InvalidChannelArity { .. })));
        assert!(matches!(m.to_grayscale(), Err(Error::InvalidChannelArity { .. })));
        assert!(matches!(m.to_monochrome(DEFAULT_THRESHOLD), Err(Error::InvalidChannelArity { .. })));
    }
}
