use anyhow::Result;
use log::{debug, info, warn};
use std::sync::Arc;
use tile_heroes::engine::assets::AssetLoader;
use tile_heroes::engine::clock::SystemClock;
use tile_heroes::engine::game_loop::GameLoop;
use tile_heroes::game::hero::{HeroRoster, HeroStyle, HeroTextures};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod demo;

/// Asset root, overridable with HEROES_ASSETS
const DEFAULT_ASSET_PATH: &str = "assets";

fn main() -> Result<()> {
    // Initialize logger, RUST_LOG overrides the default level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting Tile Heroes...");

    let asset_path =
        std::env::var("HEROES_ASSETS").unwrap_or_else(|_| DEFAULT_ASSET_PATH.to_string());
    let loader = AssetLoader::new(&asset_path);

    // A missing hero sheet is fatal
    let textures = Arc::new(HeroTextures::load(&loader)?);
    info!("Hero textures ready for {} players", textures.player_count());

    let style = HeroStyle::default();
    let mut roster = HeroRoster::new(textures, style.clone(), SystemClock::new());
    let mut script = demo::ScriptedMatch::new();
    for (id, meta) in script.initial() {
        roster.spawn(id, meta)?;
    }

    let mut game_loop = GameLoop::default();
    let mut commands = Vec::new();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Tile Heroes")
        .with_inner_size(winit::dpi::LogicalSize::new(
            12.0 * style.tile_size,
            8.0 * style.tile_size,
        ))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                for _ in 0..game_loop.begin_frame() {
                    for (id, meta) in script.next_turn() {
                        let consecutive = meta.from.is_some();
                        if let Err(err) =
                            roster.update(id, meta, game_loop.turn_duration(), consecutive)
                        {
                            warn!("Dropped snapshot for Hero{}: {}", id, err);
                        }
                    }
                }

                roster.render_all();

                commands.clear();
                roster.draw(&mut commands);
                if game_loop.frame_count() % 600 == 0 {
                    debug!(
                        "Frame {}: {} draw commands, {:.1} fps, turn {}",
                        game_loop.frame_count(),
                        commands.len(),
                        game_loop.fps(),
                        game_loop.turn_count()
                    );
                }
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
