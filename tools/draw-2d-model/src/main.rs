// Renders a 2D model described in EA979V3 drawing commands.
//
// Usage:
//   draw-2d-model <input.dat> <output.ppm>
//   draw-2d-model --gray <input.dat> <output.pgm>

use std::path::PathBuf;
use std::process;

use clap::Parser;
use draw2d::{render_file, PixelKind, RenderConfig};

#[derive(Parser)]
#[command(
    name = "draw-2d-model",
    version,
    about = "Interprets the drawing instructions in the input file and renders \
             the output in the NETPBM PPM format"
)]
struct Cli {
    /// EA979V3 drawing-command file
    input: PathBuf,

    /// Image file to create
    output: PathBuf,

    /// Render a single-channel image and write it as PGM (P5)
    #[arg(long)]
    gray: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version go to stdout and succeed
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    let kind = if cli.gray {
        PixelKind::Gray
    } else {
        PixelKind::Rgb
    };
    let config = RenderConfig::default().with_pixel_kind(kind);
    log::debug!(
        "rendering {} -> {} ({:?})",
        cli.input.display(),
        cli.output.display(),
        kind
    );

    if let Err(e) = render_file(&cli.input, &cli.output, config) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
