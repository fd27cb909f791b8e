use crate::config::QrConfig;
use image::{ImageFormat, Rgb, RgbImage};
use qrcode::{types::QrError, Color, QrCode};
use std::io::Cursor;

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("payload is empty")]
    EmptyPayload,

    #[error("could not encode payload: {0:?}")]
    Encode(QrError),

    #[error("could not write png: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),

    #[error("image would exceed {}px per side", MAX_IMAGE_SIDE)]
    TooLarge,
}

/// Largest width or height of a rendered image.
pub const MAX_IMAGE_SIDE: u32 = 4096;

/// A rendered QR code.
#[derive(Clone, Debug, PartialEq)]
pub struct QrImage {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

pub trait QrRenderer: Send + Sync {
    fn render(&self, payload: &str) -> Result<QrImage, RenderError>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QrOptions {
    pub size: u32,
    pub margin: u32,
    pub dark: Rgb<u8>,
    pub light: Rgb<u8>,
}

impl QrOptions {
    pub fn from_config(config: &QrConfig) -> Result<Self, RenderError> {
        if config.size > MAX_IMAGE_SIDE || config.margin > MAX_IMAGE_SIDE {
            return Err(RenderError::TooLarge);
        }
        Ok(Self {
            size: config.size,
            margin: config.margin,
            dark: parse_color(&config.dark)?,
            light: parse_color(&config.light)?,
        })
    }
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            size: 256,
            margin: 2,
            dark: Rgb([0, 0, 0]),
            light: Rgb([255, 255, 255]),
        }
    }
}

fn parse_color(hex: &str) -> Result<Rgb<u8>, RenderError> {
    let invalid = || RenderError::InvalidColor(hex.to_string());
    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

/// Renders payloads as two-tone PNG images.
#[derive(Clone, Debug, Default)]
pub struct PngQrRenderer {
    options: QrOptions,
}

impl PngQrRenderer {
    pub fn new(options: QrOptions) -> Self {
        Self { options }
    }
}

impl QrRenderer for PngQrRenderer {
    fn render(&self, payload: &str) -> Result<QrImage, RenderError> {
        if payload.is_empty() {
            return Err(RenderError::EmptyPayload);
        }
        let code = QrCode::new(payload.as_bytes()).map_err(RenderError::Encode)?;
        let colors = code.to_colors();

        let QrOptions {
            size,
            margin,
            dark,
            light,
        } = self.options;
        let symbol_width = u32::try_from(code.width()).map_err(|_| RenderError::TooLarge)?;
        let modules = margin
            .checked_mul(2)
            .and_then(|quiet_zone| quiet_zone.checked_add(symbol_width))
            .ok_or(RenderError::TooLarge)?;
        // Smallest whole module size that reaches the requested size.
        let module_px = size.div_ceil(modules).max(1);
        let side = modules
            .checked_mul(module_px)
            .filter(|side| *side <= MAX_IMAGE_SIDE)
            .ok_or(RenderError::TooLarge)?;

        let canvas = RgbImage::from_fn(side, side, |x, y| {
            let (mx, my) = (x / module_px, y / module_px);
            let inside = (margin..margin + symbol_width).contains(&mx)
                && (margin..margin + symbol_width).contains(&my);
            if !inside {
                return light;
            }
            let index = ((my - margin) * symbol_width + (mx - margin)) as usize;
            match colors[index] {
                Color::Dark => dark,
                Color::Light => light,
            }
        });

        let mut png = Vec::new();
        canvas.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        Ok(QrImage {
            png,
            width: side,
            height: side,
        })
    }
}
