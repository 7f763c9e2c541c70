use serde::{Deserialize, Serialize};

use crate::color::{Channels, DEFAULT_THRESHOLD};
use crate::error::Result;
use crate::matrix::PixelMatrix;
use crate::pixels::Luma;

pub trait PipelineModule: Send + Sync {
    fn process(&self, image: PixelMatrix) -> Result<PixelMatrix>;
    fn get_name(&self) -> String;
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ReflectVertical {}

impl PipelineModule for ReflectVertical {
    fn process(&self, image: PixelMatrix) -> Result<PixelMatrix> {
        Ok(image.reflect_vertical())
    }

    fn get_name(&self) -> String {
        "ReflectVertical".to_string()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ReflectHorizontal {}

impl PipelineModule for ReflectHorizontal {
    fn process(&self, image: PixelMatrix) -> Result<PixelMatrix> {
        Ok(image.reflect_horizontal())
    }

    fn get_name(&self) -> String {
        "ReflectHorizontal".to_string()
    }
}

fn one_turn() -> u32 {
    1
}

/// Clockwise quarter turns.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Rotate {
    #[serde(default = "one_turn")]
    pub turns: u32,
}

impl Default for Rotate {
    fn default() -> Self {
        Rotate { turns: one_turn() }
    }
}

impl PipelineModule for Rotate {
    fn process(&self, image: PixelMatrix) -> Result<PixelMatrix> {
        let rotated = (0..self.turns % 4).fold(image, |image, _| image.rotate_clockwise_90());
        Ok(rotated)
    }

    fn get_name(&self) -> String {
        "Rotate".to_string()
    }
}

/// Labels as written in the config, e.g. `channels = ["R", "B"]`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RawFilterChannels {
    pub channels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterChannels {
    pub keep: Channels,
}

impl TryFrom<RawFilterChannels> for FilterChannels {
    type Error = crate::error::Error;

    fn try_from(raw: RawFilterChannels) -> Result<Self> {
        Ok(FilterChannels {
            keep: Channels::from_labels(raw.channels)?,
        })
    }
}

impl PipelineModule for FilterChannels {
    fn process(&self, image: PixelMatrix) -> Result<PixelMatrix> {
        image.filter_channels(self.keep)
    }

    fn get_name(&self) -> String {
        "FilterChannels".to_string()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Grayscale {}

impl PipelineModule for Grayscale {
    fn process(&self, image: PixelMatrix) -> Result<PixelMatrix> {
        image.to_grayscale()
    }

    fn get_name(&self) -> String {
        "Grayscale".to_string()
    }
}

fn default_threshold() -> Luma {
    DEFAULT_THRESHOLD
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Monochrome {
    #[serde(default = "default_threshold")]
    pub threshold: Luma,
}

impl Default for Monochrome {
    fn default() -> Self {
        Monochrome { threshold: default_threshold() }
    }
}

impl PipelineModule for Monochrome {
    fn process(&self, image: PixelMatrix) -> Result<PixelMatrix> {
        image.to_monochrome(self.threshold)
    }

    fn get_name(&self) -> String {
        "Monochrome".to_string()
    }
}
