use seamfinding::config::transpose;
use seamfinding::picture::io::{ensure_parent_dir, load_picture, save_picture, write_json_file};
use seamfinding::picture::{OutputFormat, PictureView};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = transpose::load_config(Path::new(&config_path))?;

    let format = OutputFormat::from_path(&config.output.image).map_err(|e| e.to_string())?;
    let picture = load_picture(&config.input).map_err(|e| e.to_string())?;
    let view = picture.transposed();

    ensure_parent_dir(&config.output.image)?;
    save_picture(&view, &config.output.image).map_err(|e| e.to_string())?;
    println!(
        "Saved {}x{} transposed picture to {} ({})",
        view.width(),
        view.height(),
        config.output.image.display(),
        format.extension()
    );

    if let Some(summary_path) = &config.output.summary_json {
        let summary = TransposeSummary {
            input_width: picture.width(),
            input_height: picture.height(),
            output_width: view.width(),
            output_height: view.height(),
            format,
        };
        write_json_file(summary_path, &summary)?;
        println!("Saved summary to {}", summary_path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: transpose_tool <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TransposeSummary {
    input_width: u32,
    input_height: u32,
    output_width: u32,
    output_height: u32,
    format: OutputFormat,
}
