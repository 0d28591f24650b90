use clap::{ArgGroup, Parser};
use std::path::PathBuf;
use std::process::ExitCode;

use panostitch::acquire::{self, Source};
use panostitch::{present, report, stitch};

#[derive(Parser)]
#[command(name = "panostitch")]
#[command(about = "Stitch overlapping images into a single panorama")]
#[command(group(ArgGroup::new("source").args(["camera", "select", "images", "video", "demo"])))]
struct Cli {
    /// Capture input frames interactively from the default camera
    #[arg(short, long)]
    camera: bool,

    /// Pick input images with a file select dialog
    #[arg(short, long)]
    select: bool,

    /// Input image files, stitched in the order given
    #[arg(short, long, value_name = "FILES", num_args = 1..)]
    images: Vec<PathBuf>,

    /// Sample frames from a video file
    #[arg(short, long, value_name = "FILE")]
    video: Option<PathBuf>,

    /// Fraction of the video to skip between samples (0 < FREQ < 1)
    #[arg(long, value_name = "FREQ", default_value_t = 0.1, requires = "video")]
    frequency: f64,

    /// Use one of the bundled demo image sets [0..10]
    #[arg(short, long, value_name = "INDEX")]
    demo: Option<usize>,

    /// Enable verbose output
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    /// The acquisition strategy selected on the command line, if any.
    /// The clap group guarantees at most one of these is present.
    fn source(&self) -> Option<Source> {
        if self.camera {
            Some(Source::Camera)
        } else if self.select {
            Some(Source::Select)
        } else if !self.images.is_empty() {
            Some(Source::Files(self.images.clone()))
        } else if let Some(path) = &self.video {
            Some(Source::Video {
                path: path.clone(),
                frequency: self.frequency,
            })
        } else {
            self.demo.map(Source::Demo)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(source) = cli.source() else {
        report::status("Use -h or --help for more information");
        return ExitCode::SUCCESS;
    };

    match run(source, cli.verbose) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(source: Source, verbose: bool) -> anyhow::Result<()> {
    let images = acquire::acquire(source, verbose)?;

    if !acquire::enough(&images) {
        anyhow::bail!("Not enough images provided");
    }

    present::present(stitch::compose(images, verbose)?)
}
