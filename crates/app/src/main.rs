mod frame_input;
mod ui_render;
mod ui_text;
mod window_config;

use macroquad::prelude::*;
use macroquad::window::Conf;
use maze_app::app_loop::AppState;
use maze_app::screen_layout::{compute_screen_layout, setup_layout};
use maze_app::seed::SeedChoice;
use maze_app::settings_file::ViewerSettingsFile;
use maze_core::MazeSession;
use taffy::TaffyTree;

use crate::frame_input::capture_frame_input;
use crate::ui_render::draw_frame;
use crate::window_config::{LaunchConfig, Startup, build_window_conf, display_cell_size_notice};

fn window_conf() -> Conf {
    build_window_conf(&Startup::get().launch)
}

fn save_settings(launch: &LaunchConfig, app: &AppState) {
    let Some(path) = ViewerSettingsFile::get_default_path() else {
        return;
    };
    let settings = launch.settings_to_save(app.show_exploration);
    if let Err(err) = settings.write_atomic(&path) {
        log::warn!("could not save viewer settings to {}: {err}", path.display());
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let Startup { args, launch } = Startup::get();
    log::info!("{}", display_cell_size_notice(launch));

    let seed_choice = SeedChoice::from_flag(args.seed);
    let mut session = match MazeSession::new(launch.width, launch.height, seed_choice.value()) {
        Ok(session) => session,
        Err(err) => {
            log::error!("cannot build maze: {err}");
            return;
        }
    };
    log::info!("starting with seed {} ({:?})", seed_choice.value(), seed_choice);

    let mut app =
        AppState::new(seed_choice.pinned(), seed_choice.value(), launch.show_exploration);
    let mut taffy = TaffyTree::new();
    let layout_nodes = setup_layout(&mut taffy);

    loop {
        let layout =
            compute_screen_layout(&mut taffy, &layout_nodes, screen_width(), screen_height());
        let geometry = layout.maze_geometry(session.width(), session.height(), launch.cell_size);

        let input = capture_frame_input();
        app.tick(&mut session, &geometry, &input);
        if app.settings_changed {
            save_settings(launch, &app);
        }
        if app.quit_requested {
            break;
        }

        draw_frame(&session, &app, &layout, &geometry);
        next_frame().await
    }

    save_settings(launch, &app);
}
