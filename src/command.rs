//! Drawing command parsing.
//!
//! One input line holds one command: a single-character opcode (the first
//! character of the line) followed by whitespace-separated parameters. The
//! opcode does not need to be followed by whitespace, so `L0 0 3 3` is the
//! same command as `L 0 0 3 3`.
//!
//! | Opcode | Parameters | Command |
//! |---|---|---|
//! | `#` | ignored | comment |
//! | `c` | one value per channel | [`Command::Clear`] |
//! | `C` | one value per channel | [`Command::Color`] |
//! | `M` | 9 decimals | [`Command::SetTransform`] |
//! | `m` | 9 decimals | [`Command::ComposeTransform`] |
//! | `L` | 4 integers | [`Command::Draw`] with [`Shape::Line`] |
//! | `P` | `N`, then `2N` integers | [`Command::Draw`] with [`Shape::Polyline`] |
//! | `R` | `N`, then `2N` integers | [`Command::Draw`] with [`Shape::Polygon`] |

use crate::basics::{PointI, TRANSFORM_N};
use crate::color::PixelColor;
use crate::error::{Error, NumberKind, Result};
use crate::geometry::Shape;

/// A parsed drawing command, generic over the canvas color type.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<C> {
    /// Fill the canvas and make `C` the background color.
    Clear(C),
    /// Set the draw color.
    Color(C),
    /// Replace the transform with a row-major 3×3 matrix.
    SetTransform([f64; TRANSFORM_N]),
    /// Post-multiply the transform by a row-major 3×3 matrix.
    ComposeTransform([f64; TRANSFORM_N]),
    /// Draw a shape with the current transform and color.
    Draw(Shape),
}

impl<C> Command<C> {
    /// Opcode character this command is written with.
    pub fn opcode(&self) -> char {
        match self {
            Command::Clear(_) => 'c',
            Command::Color(_) => 'C',
            Command::SetTransform(_) => 'M',
            Command::ComposeTransform(_) => 'm',
            Command::Draw(Shape::Line(..)) => 'L',
            Command::Draw(Shape::Polyline(_)) => 'P',
            Command::Draw(Shape::Polygon(_)) => 'R',
        }
    }
}

/// Parse one input line.
///
/// `line_n` is the 1-based line number used in errors. Returns `Ok(None)` for
/// blank lines and comments. The line must already be stripped of its
/// terminator and checked for length.
pub fn parse_line<C: PixelColor>(line_n: usize, line: &str) -> Result<Option<Command<C>>> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    let mut chars = line.chars();
    let opcode = match chars.next() {
        Some(c) => c,
        None => return Ok(None),
    };
    if opcode == '#' {
        return Ok(None);
    }
    let params = Params {
        line: line_n,
        command: opcode,
        tokens: chars.as_str().split_whitespace().collect(),
    };

    let cmd = match opcode {
        'c' => Command::Clear(params.color()?),
        'C' => Command::Color(params.color()?),
        'M' => Command::SetTransform(params.matrix()?),
        'm' => Command::ComposeTransform(params.matrix()?),
        'L' => {
            params.expect_count(4)?;
            Command::Draw(Shape::Line(params.point(0)?, params.point(1)?))
        }
        'P' => Command::Draw(Shape::Polyline(params.points()?)),
        'R' => Command::Draw(Shape::Polygon(params.points()?)),
        _ => {
            return Err(Error::UnknownCommand {
                line: line_n,
                command: opcode,
            })
        }
    };
    Ok(Some(cmd))
}

// ============================================================================
// Params
// ============================================================================

/// Parameter tokens of one command line.
struct Params<'a> {
    line: usize,
    command: char,
    tokens: Vec<&'a str>,
}

impl<'a> Params<'a> {
    fn expect_count(&self, expected: usize) -> Result<()> {
        if self.tokens.len() != expected {
            return Err(Error::ParameterCount {
                line: self.line,
                command: self.command,
                expected,
                got: self.tokens.len(),
            });
        }
        Ok(())
    }

    fn integer(&self, i: usize) -> Result<i64> {
        self.tokens[i].parse::<i64>().map_err(|_| Error::InvalidNumber {
            line: self.line,
            parameter: i + 1,
            expected: NumberKind::Integer,
        })
    }

    fn decimal(&self, i: usize) -> Result<f64> {
        self.tokens[i].parse::<f64>().map_err(|_| Error::InvalidNumber {
            line: self.line,
            parameter: i + 1,
            expected: NumberKind::Decimal,
        })
    }

    fn channel(&self, i: usize) -> Result<u8> {
        let v = self.tokens[i].parse::<i64>().map_err(|_| Error::InvalidNumber {
            line: self.line,
            parameter: i + 1,
            expected: NumberKind::Integer,
        })?;
        u8::try_from(v).map_err(|_| Error::ChannelRange {
            line: self.line,
            parameter: i + 1,
            value: v,
        })
    }

    fn color<C: PixelColor>(&self) -> Result<C> {
        self.expect_count(C::CHANNELS)?;
        let ch = (0..C::CHANNELS)
            .map(|i| self.channel(i))
            .collect::<Result<Vec<u8>>>()?;
        Ok(C::from_channels(&ch))
    }

    fn matrix(&self) -> Result<[f64; TRANSFORM_N]> {
        self.expect_count(TRANSFORM_N)?;
        let mut m = [0.0; TRANSFORM_N];
        for (i, v) in m.iter_mut().enumerate() {
            *v = self.decimal(i)?;
        }
        Ok(m)
    }

    /// The point stored at tokens `2k` and `2k + 1`, after `offset`.
    fn point_at(&self, offset: usize, k: usize) -> Result<PointI> {
        Ok(PointI::new(
            self.integer(offset + 2 * k)?,
            self.integer(offset + 2 * k + 1)?,
        ))
    }

    fn point(&self, k: usize) -> Result<PointI> {
        self.point_at(0, k)
    }

    /// `N` followed by `N` coordinate pairs.
    fn points(&self) -> Result<Vec<PointI>> {
        if self.tokens.is_empty() {
            return Err(Error::ParameterCount {
                line: self.line,
                command: self.command,
                expected: 1,
                got: 0,
            });
        }
        let n = self.tokens[0].parse::<i64>().map_err(|_| Error::InvalidNumber {
            line: self.line,
            parameter: 1,
            expected: NumberKind::Integer,
        })?;
        if n < 1 {
            return Err(Error::PointCount {
                line: self.line,
                command: self.command,
                count: n,
            });
        }
        let expected = usize::try_from(n)
            .ok()
            .and_then(|n| n.checked_mul(2))
            .and_then(|v| v.checked_add(1))
            .unwrap_or(usize::MAX);
        self.expect_count(expected)?;
        (0..expected / 2).map(|k| self.point_at(1, k)).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
