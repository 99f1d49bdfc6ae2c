//! # draw2d
//!
//! Interpreter for the EA979V3 2D drawing-command format.
//!
//! An input names a canvas size and then lists commands: clear, set color,
//! set or compose a 3×3 transform, and draw lines, polylines and polygon
//! outlines. Shapes are transformed into device coordinates, rasterized as
//! aliased single-pixel lines, and the canvas is written as a binary PPM
//! (`P6`) or, for the grayscale variant, PGM (`P5`) image.
//!
//! ## Pipeline
//!
//! 1. **Command**: one input line parsed into a typed [`Command`]
//! 2. **Transform**: model points mapped through a [`TransPerspective`]
//! 3. **Geometry**: shapes expanded into segments ([`geometry`])
//! 4. **Rasterizer**: midpoint line stepping ([`line_interpolator`])
//! 5. **Pixel format**: colors written into a [`RenderingBuffer`]
//!
//! ```
//! use draw2d::{render_str, RenderConfig};
//!
//! let canvas = render_str("EA979V3\n4 4\nL 0 0 3 3\n", RenderConfig::default()).unwrap();
//! assert_eq!(canvas.pixel(0, 3), &[0, 0, 0]);
//! assert_eq!(canvas.pixel(0, 0), &[255, 255, 255]);
//! ```

// Foundation
pub mod basics;
pub mod color;
pub mod config;
pub mod error;

// Canvas
pub mod pixfmt_gray;
pub mod pixfmt_rgb;
pub mod rendering_buffer;

// Transform & rasterization
pub mod geometry;
pub mod line_interpolator;
pub mod renderer_primitives;
pub mod trans_perspective;

// Interpreter & I/O
pub mod command;
pub mod interpreter;
pub mod ppm;

pub use basics::PointI;
pub use color::{Gray8, PixelColor, Rgb8};
pub use command::{parse_line, Command};
pub use config::{PixelKind, RenderConfig};
pub use error::{Error, NumberKind, Result};
pub use geometry::Shape;
pub use interpreter::{render_file, render_reader, render_session, render_str, RenderSession};
pub use ppm::{read_ppm, write_ppm};
pub use rendering_buffer::RenderingBuffer;
pub use trans_perspective::TransPerspective;
