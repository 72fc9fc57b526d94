/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pixel access for the encoder and decoder
//!
//! The codec never owns pixels, it reads them from a [`PixelSurface`]
//! when encoding and writes them through a [`PixelSurfaceMut`] when decoding.
//! [`RgbSurface`] implements both for interleaved 8-bit buffers.
use zune_core::colorspace::ColorSpace;

/// Colorspaces an [`RgbSurface`] can read from
pub const SUPPORTED_COLORSPACES: [ColorSpace; 4] = [
    ColorSpace::RGB,
    ColorSpace::RGBA,
    ColorSpace::Luma,
    ColorSpace::LumaA
];

/// A read only grid of 24-bit RGB pixels
pub trait PixelSurface {
    /// Number of columns
    fn width(&self) -> usize;
    /// Number of rows
    fn height(&self) -> usize;
    /// Color of the pixel at `row`, `col`
    ///
    /// Callers guarantee that `row < height` and `col < width`
    fn pixel(&self, row: usize, col: usize) -> [u8; 3];
}

/// A grid of 24-bit RGB pixels that can be written to
pub trait PixelSurfaceMut: PixelSurface {
    fn set_pixel(&mut self, row: usize, col: usize, color: [u8; 3]);

    /// Paint a `width` by `height` box with `color`
    ///
    /// The box must lie inside the surface
    fn fill(&mut self, row: usize, col: usize, width: usize, height: usize, color: [u8; 3]) {
        for r in row..row + height {
            for c in col..col + width {
                self.set_pixel(r, c, color);
            }
        }
    }
}

impl<S: PixelSurface + ?Sized> PixelSurface for &S {
    fn width(&self) -> usize {
        (**self).width()
    }
    fn height(&self) -> usize {
        (**self).height()
    }
    fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        (**self).pixel(row, col)
    }
}

/// A surface over an interleaved 8-bit pixel buffer
///
/// Reading supports RGB, RGBA, Luma and LumaA buffers, alpha is
/// ignored and luma is replicated into all three channels.
/// Writing fills the color channels and sets alpha to 255.
pub struct RgbSurface<T> {
    data:       T,
    width:      usize,
    height:     usize,
    colorspace: ColorSpace
}

impl<T: AsRef<[u8]>> RgbSurface<T> {
    /// Wrap `data` as a `width` by `height` image in `colorspace`
    ///
    /// # Errors
    /// - The colorspace is not one of [`SUPPORTED_COLORSPACES`]
    /// - `data` does not hold exactly `width*height*components` bytes
    pub fn new(
        data: T, width: usize, height: usize, colorspace: ColorSpace
    ) -> Result<RgbSurface<T>, &'static str> {
        if !SUPPORTED_COLORSPACES.contains(&colorspace) {
            return Err("Unsupported colorspace for a SLIC surface");
        }
        let expected = width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(colorspace.num_components()))
            .ok_or("Image dimensions overflow")?;

        if data.as_ref().len() != expected {
            return Err("Buffer length does not match image dimensions");
        }
        Ok(RgbSurface {
            data,
            width,
            height,
            colorspace
        })
    }

    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    /// Return the underlying buffer
    pub fn into_inner(self) -> T {
        self.data
    }

    #[inline(always)]
    fn offset(&self, row: usize, col: usize) -> usize {
        (row * self.width + col) * self.colorspace.num_components()
    }
}

impl<T: AsRef<[u8]>> PixelSurface for RgbSurface<T> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        let offset = self.offset(row, col);
        let data = self.data.as_ref();

        if self.colorspace.is_grayscale() {
            [data[offset]; 3]
        } else {
            [data[offset], data[offset + 1], data[offset + 2]]
        }
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> PixelSurfaceMut for RgbSurface<T> {
    #[inline]
    fn set_pixel(&mut self, row: usize, col: usize, color: [u8; 3]) {
        let offset = self.offset(row, col);
        let components = self.colorspace.num_components();
        let pix = &mut self.data.as_mut()[offset..offset + components];

        match components {
            1 => pix[0] = color[0],
            2 => {
                pix[0] = color[0];
                pix[1] = 255;
            }
            3 => pix.copy_from_slice(&color),
            _ => {
                pix[..3].copy_from_slice(&color);
                pix[3] = 255;
            }
        }
    }

    fn fill(&mut self, row: usize, col: usize, width: usize, height: usize, color: [u8; 3]) {
        if self.colorspace != ColorSpace::RGB {
            for r in row..row + height {
                for c in col..col + width {
                    self.set_pixel(r, c, color);
                }
            }
            return;
        }
        let stride = self.width * 3;
        let data = self.data.as_mut();

        for r in row..row + height {
            let start = r * stride + col * 3;

            for pix in data[start..start + width * 3].chunks_exact_mut(3) {
                pix.copy_from_slice(&color);
            }
        }
    }
}
