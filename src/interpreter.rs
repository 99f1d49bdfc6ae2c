//! Command interpreter.
//!
//! A [`RenderSession`] owns everything one input produces: the canvas, the
//! current transform, and the draw and background colors. Commands are
//! applied one at a time, each completely before the next is read.
//!
//! The free functions read a whole EA979V3 input (magic line, dimension
//! line, commands) and return the finished canvas; [`render_file`] also
//! writes it out, creating the output file only once rendering succeeded.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read};
use std::path::Path;

use crate::basics::{MAGIC, TRANSFORM_N};
use crate::color::{Gray8, PixelColor, Rgb8};
use crate::command::{parse_line, Command};
use crate::config::{PixelKind, RenderConfig};
use crate::error::{Error, NumberKind, Result};
use crate::geometry::ShapeRenderer;
use crate::pixfmt_rgb::PixelFormat;
use crate::ppm::write_ppm;
use crate::rendering_buffer::RenderingBuffer;
use crate::trans_perspective::TransPerspective;

// ============================================================================
// RenderSession
// ============================================================================

/// Interpreter state for one input and one output image.
#[derive(Debug, Clone)]
pub struct RenderSession<C: PixelColor> {
    config: RenderConfig,
    canvas: RenderingBuffer,
    transform: TransPerspective,
    color: C,
    background: C,
}

impl<C: PixelColor> RenderSession<C> {
    /// Start a session on a white canvas with an identity transform and a
    /// black draw color.
    pub fn new(width: i64, height: i64, config: RenderConfig) -> Result<Self> {
        let max = config.max_size as i64;
        if width < 1 || width > max || height < 1 || height > max {
            return Err(Error::Dimensions {
                width,
                height,
                max: config.max_size,
            });
        }
        let background = C::WHITE;
        let mut canvas = RenderingBuffer::new(width as u32, height as u32, C::CHANNELS);
        C::pixfmt(&mut canvas).clear(&background);
        Ok(Self {
            config,
            canvas,
            transform: TransPerspective::new(),
            color: C::BLACK,
            background,
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn canvas(&self) -> &RenderingBuffer {
        &self.canvas
    }

    pub fn into_canvas(self) -> RenderingBuffer {
        self.canvas
    }

    pub fn transform(&self) -> &TransPerspective {
        &self.transform
    }

    pub fn color(&self) -> C {
        self.color
    }

    pub fn background(&self) -> C {
        self.background
    }

    /// Apply one command.
    pub fn execute(&mut self, cmd: &Command<C>) {
        match cmd {
            Command::Clear(c) => {
                self.background = *c;
                C::pixfmt(&mut self.canvas).clear(c);
            }
            Command::Color(c) => self.color = *c,
            Command::SetTransform(m) => {
                self.transform = TransPerspective::new_from_row_major(m);
            }
            Command::ComposeTransform(m) => {
                self.transform
                    .multiply(&TransPerspective::new_from_row_major(m));
            }
            Command::Draw(shape) => {
                let mut pf = C::pixfmt(&mut self.canvas);
                ShapeRenderer::new(&mut pf, self.transform, self.color).draw(shape);
            }
        }
    }

    /// Parse and apply one command line.
    ///
    /// The terminator must already be removed and the length checked, as
    /// the input reader does for every line.
    pub fn run_line(&mut self, line_n: usize, line: &str) -> Result<()> {
        if let Some(cmd) = parse_line::<C>(line_n, line)? {
            log::debug!("line {}: {:?}", line_n, cmd);
            self.execute(&cmd);
        }
        Ok(())
    }

    /// Current transform in the row-major order the `M` command takes.
    pub fn transform_row_major(&self) -> [f64; TRANSFORM_N] {
        let mut m = [0.0; TRANSFORM_N];
        self.transform.store_to(&mut m);
        m
    }
}

/// The limit counts characters, not bytes.
fn check_line_len(config: &RenderConfig, line_n: usize, line: &str) -> Result<()> {
    if line.chars().nth(config.max_line_len).is_some() {
        return Err(Error::LineTooLong { line: line_n });
    }
    Ok(())
}

// ============================================================================
// Input
// ============================================================================

/// Numbered lines of an input, terminators stripped and length checked.
struct InputLines<'c, R> {
    input: R,
    config: &'c RenderConfig,
    line_n: usize,
    buf: Vec<u8>,
}

impl<'c, R: BufRead> InputLines<'c, R> {
    fn new(input: R, config: &'c RenderConfig) -> Self {
        Self {
            input,
            config,
            line_n: 0,
            buf: Vec::new(),
        }
    }

    /// The next line with its number, or `None` at end of input.
    ///
    /// At most four bytes per allowed character (plus `\r\n`) are buffered,
    /// so an overlong line fails without being read whole.
    fn next_line(&mut self) -> Result<Option<(usize, &str)>> {
        self.line_n += 1;
        self.buf.clear();
        let limit = (self.config.max_line_len as u64)
            .saturating_add(2)
            .saturating_mul(4);
        let n = (&mut self.input).take(limit).read_until(b'\n', &mut self.buf)?;
        if n == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        } else if n as u64 == limit {
            return Err(Error::LineTooLong { line: self.line_n });
        }
        let line = std::str::from_utf8(&self.buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        check_line_len(self.config, self.line_n, line)?;
        Ok(Some((self.line_n, line)))
    }

    /// A header line that must be present.
    fn required_line(&mut self) -> Result<&str> {
        let line_n = self.line_n + 1;
        match self.next_line()? {
            Some((_, line)) => Ok(line),
            None => Err(Error::UnexpectedEof { line: line_n }),
        }
    }
}

/// Width and height from the second header line. Tokens after the first
/// two are ignored.
fn parse_dimensions(line: &str) -> Result<(i64, i64)> {
    let mut tokens = line.split_whitespace();
    let mut dim = |parameter| {
        tokens
            .next()
            .and_then(|t| t.parse::<i64>().ok())
            .ok_or_else(|| Error::InvalidNumber {
                line: 2,
                parameter,
                expected: NumberKind::Integer,
            })
    };
    let width = dim(1)?;
    let height = dim(2)?;
    Ok((width, height))
}

/// Read a complete input into a session of color type `C`.
pub fn render_session<C: PixelColor, R: BufRead>(
    input: R,
    config: RenderConfig,
) -> Result<RenderSession<C>> {
    let mut lines = InputLines::new(input, &config);

    if lines.required_line()? != MAGIC {
        return Err(Error::Format);
    }
    let (width, height) = parse_dimensions(lines.required_line()?)?;
    log::debug!("canvas {}x{}, {} channels", width, height, C::CHANNELS);

    let mut session = RenderSession::<C>::new(width, height, config)?;
    while let Some((line_n, line)) = lines.next_line()? {
        session.run_line(line_n, line)?;
    }
    Ok(session)
}

/// Render a complete input to a canvas laid out for `config.pixel_kind`.
pub fn render_reader<R: BufRead>(input: R, config: RenderConfig) -> Result<RenderingBuffer> {
    let canvas = match config.pixel_kind {
        PixelKind::Rgb => render_session::<Rgb8, _>(input, config)?.into_canvas(),
        PixelKind::Gray => render_session::<Gray8, _>(input, config)?.into_canvas(),
    };
    Ok(canvas)
}

/// Render an input held in memory.
pub fn render_str(input: &str, config: RenderConfig) -> Result<RenderingBuffer> {
    render_reader(input.as_bytes(), config)
}

/// Render the file at `input` and write the image to `output`.
///
/// Nothing is created at `output` unless the whole input rendered.
pub fn render_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    config: RenderConfig,
) -> Result<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    let file = File::open(input).map_err(|source| Error::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let canvas = render_reader(BufReader::new(file), config).map_err(|e| match e {
        Error::Io(source) => Error::Read {
            path: input.to_path_buf(),
            source,
        },
        e => e,
    })?;

    create_image(output, |out| write_ppm(out, &canvas))?;
    log::info!(
        "wrote {}x{} {} image to {}",
        canvas.width(),
        canvas.height(),
        config.pixel_kind.magic(),
        output.display()
    );
    Ok(())
}

/// Create `path` and fill it with `write`. A partly written file is
/// removed again.
fn create_image<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(BufWriter<File>) -> io::Result<()>,
{
    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_err)?;
    if let Err(source) = write(BufWriter::new(file)) {
        if let Err(e) = std::fs::remove_file(path) {
            log::warn!("could not remove partial image {}: {}", path.display(), e);
        }
        return Err(write_err(source));
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
