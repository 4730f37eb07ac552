use std::io::Read;
use std::io::Write;

use thiserror::Error;

use crate::grid::Grid;
use crate::grid::GridError;

/// Pixel written for an alive cell
pub const ALIVE_RGBA: [u8; 4] = [255, 255, 255, 255];

/// Pixel written for a dead cell
pub const DEAD_RGBA: [u8; 4] = [0, 0, 0, 255];

pub type CodecResult<T> = Result<T, CodecError>;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Failed to decode PNG: {0}")]
    Decode(#[from] png::DecodingError),

    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("Unsupported color type {0:?}")]
    UnsupportedColor(png::ColorType),

    #[error("Image has no pixels")]
    EmptyImage,

    #[error("A {width}x{height} grid does not fit in a PNG")]
    TooLarge { width: usize, height: usize },

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// A decoded image, normalized to 8 bit RGBA.
struct DecodedImage {
    width: usize,
    height: usize,
    rgba: Vec<u8>,
}

impl DecodedImage {
    fn read<R: Read>(reader: R) -> CodecResult<Self> {
        let mut decoder = png::Decoder::new(reader);

        // Palette, low bit depth and tRNS are expanded, 16 bit channels are cut down to 8.
        decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

        let mut reader = decoder.read_info()?;
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf)?;

        let channels = match info.color_type {
            png::ColorType::Grayscale => 1,
            png::ColorType::GrayscaleAlpha => 2,
            png::ColorType::Rgb => 3,
            png::ColorType::Rgba => 4,
            // EXPAND turns palettes into RGB(A)
            c @ png::ColorType::Indexed => return Err(CodecError::UnsupportedColor(c)),
        };

        let (width, height) = (info.width as usize, info.height as usize);
        if width == 0 || height == 0 {
            return Err(CodecError::EmptyImage);
        }

        let mut rgba = Vec::with_capacity(width * height * 4);

        for line in buf[..info.buffer_size()].chunks(info.line_size).take(height) {
            for px in line[..width * channels].chunks_exact(channels) {
                let pixel = match *px {
                    [v] => [v, v, v, 255],
                    [v, a] => [v, v, v, a],
                    [r, g, b] => [r, g, b, 255],
                    [r, g, b, a] => [r, g, b, a],
                    _ => unreachable!("chunks_exact yields 1 to 4 channels"),
                };

                rgba.extend_from_slice(&pixel);
            }
        }

        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// A pixel is alive iff its red, green and blue channels are all non-zero. Alpha is ignored.
    fn to_grid(&self) -> CodecResult<Grid> {
        let cells = self
            .rgba
            .chunks_exact(4)
            .map(|px| px[0] != 0 && px[1] != 0 && px[2] != 0)
            .collect::<Vec<_>>();

        debug_assert_eq!(cells.len(), self.width * self.height);

        Ok(Grid::from_cells(self.width, cells)?)
    }
}

/// Decode a PNG into a [`Grid`].
pub fn decode_png<R: Read>(reader: R) -> CodecResult<Grid> {
    DecodedImage::read(reader)?.to_grid()
}

/// Render `grid` as row-major RGBA8 pixels, white for alive and opaque black for dead.
pub fn render_rgba(grid: &Grid) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(grid.len() * 4);

    for &alive in grid.cells() {
        rgba.extend_from_slice(if alive { &ALIVE_RGBA } else { &DEAD_RGBA });
    }

    rgba
}

/// Encode `grid` as an 8 bit RGBA PNG, one pixel per cell.
pub fn encode_png<W: Write>(grid: &Grid, writer: W) -> CodecResult<()> {
    let (width, height) = (grid.width(), grid.height());
    let too_large = || CodecError::TooLarge { width, height };

    let w = u32::try_from(width).map_err(|_| too_large())?;
    let h = u32::try_from(height).map_err(|_| too_large())?;

    let mut encoder = png::Encoder::new(writer, w, h);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&render_rgba(grid))?;
    writer.finish()?;

    Ok(())
}
