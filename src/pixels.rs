pub type SubPixel = f32;
pub type Rgb = [SubPixel; CHANNELS_PER_PIXEL];
pub type Luma = SubPixel;

pub const CHANNELS_PER_PIXEL: usize = 3;
pub const R_GRAY_WEIGHT: SubPixel = 0.2989;
pub const G_GRAY_WEIGHT: SubPixel = 0.5870;
pub const B_GRAY_WEIGHT: SubPixel = 0.1140;

pub const WHITE: Luma = 0.0;
pub const BLACK: Luma = 255.0;

pub trait PixelOps {
    fn gray(self) -> Luma;
    fn mask(self, keep: [bool; CHANNELS_PER_PIXEL]) -> Self;
}

impl PixelOps for Rgb {
    fn gray(self) -> Luma {
        let [r, g, b] = self;
        R_GRAY_WEIGHT*r + G_GRAY_WEIGHT*g + B_GRAY_WEIGHT*b
    }

    fn mask(self, keep: [bool; CHANNELS_PER_PIXEL]) -> Self {
        let [r, g, b] = self;
        let [kr, kg, kb] = keep;
        [
            if kr { r } else { 0.0 },
            if kg { g } else { 0.0 },
            if kb { b } else { 0.0 },
        ]
    }
}
