mod export;
mod plot;
mod text_render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use maze_core::{MazeSession, format_fingerprint, runtime_seed};

use crate::export::MazeExport;
use crate::plot::{PlotScene, render_plot, save_plot};
use crate::text_render::{TextScene, render_text};

#[derive(Parser)]
#[command(author, version, about = "Generate a maze and solve it with A*", long_about = None)]
struct Args {
    /// Maze width in cells
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,
    /// Maze height in cells
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,
    /// Seed for reproducible mazes; a fresh one is chosen and printed when omitted
    #[arg(short, long)]
    seed: Option<u64>,
    /// Print the maze as text instead of writing an SVG plot
    #[arg(long)]
    text: bool,
    /// Mark cells the search expanded
    #[arg(long)]
    show_explored: bool,
    /// Where the SVG plot is written
    #[arg(short, long, default_value = "maze.svg")]
    output: PathBuf,
    /// Also export the maze and search result as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(runtime_seed);
    let session = MazeSession::new(args.width as usize, args.height as usize, seed)
        .with_context(|| format!("Failed to generate a {}x{} maze", args.width, args.height))?;

    println!("Seed: {seed}");
    println!("Maze fingerprint: {}", format_fingerprint(session.maze().fingerprint()));
    match session.search().steps() {
        Some(steps) => println!("Path found! Length: {steps} steps"),
        None => println!("No path found between {} and {}", session.start(), session.end()),
    }
    println!("Explored {} cells", session.explored().len());

    let explored = args.show_explored.then(|| session.explored());
    if args.text {
        let scene = TextScene {
            maze: session.maze(),
            start: session.start(),
            end: session.end(),
            path: session.path(),
            explored,
        };
        print!("{}", render_text(&scene));
    } else {
        let scene = PlotScene {
            maze: session.maze(),
            start: session.start(),
            end: session.end(),
            path: session.path(),
            explored,
        };
        save_plot(&args.output, &render_plot(&scene))
            .with_context(|| format!("Failed to write plot: {}", args.output.display()))?;
        log::info!("wrote plot to {}", args.output.display());
    }

    if let Some(json_path) = &args.json {
        MazeExport::from_session(&session)
            .write_atomic(json_path)
            .with_context(|| format!("Failed to write JSON export: {}", json_path.display()))?;
        log::info!("wrote JSON export to {}", json_path.display());
    }

    Ok(())
}
