use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use uivert::{DrawCall, UiVertexStage};

use crate::cli::Cli;
use crate::draw_file::{DrawFile, ShadedFile};

/// Reads the draw, shades it, and writes the result where `cli` points.
pub fn run(cli: &Cli) -> Result<()> {
    let draw = match cli.input_path() {
        Some(path) => read_draw_file(path)?,
        None => read_draw(io::stdin().lock()).context("failed to read draw from stdin")?,
    };
    let shaded = shade(cli, &draw)?;

    match &cli.output {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("failed to create output {}", path.display()))?;
            write_shaded(io::BufWriter::new(file), &shaded, cli.pretty)
                .with_context(|| format!("failed to write output {}", path.display()))
        }
        None => write_shaded(io::stdout().lock(), &shaded, cli.pretty)
            .context("failed to write output to stdout"),
    }
}

fn shade(cli: &Cli, draw: &DrawFile) -> Result<ShadedFile> {
    let vertices = draw.vertex_inputs();
    let screen = draw.screen_size();
    let stage = UiVertexStage::new(cli.stage_config());
    log::info!(
        "shading {} vertices at {}x{} ({:?} validation)",
        vertices.len(),
        screen.width,
        screen.height,
        stage.config().validation
    );

    let outputs = stage
        .run(&DrawCall::new(screen, &vertices))
        .context("vertex stage rejected the draw")?;
    Ok(ShadedFile::new(&outputs))
}

pub fn read_draw_file(path: &Path) -> Result<DrawFile> {
    let file = fs::File::open(path)
        .with_context(|| format!("failed to read draw file {}", path.display()))?;
    read_draw(io::BufReader::new(file))
        .with_context(|| format!("failed to read draw file {}", path.display()))
}

pub fn read_draw(mut reader: impl Read) -> Result<DrawFile> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    serde_json::from_str(&text).context("draw is not valid JSON")
}

pub fn write_shaded(mut writer: impl Write, shaded: &ShadedFile, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, shaded)?;
    } else {
        serde_json::to_writer(&mut writer, shaded)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
