use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use log::{debug, info, warn};
use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::{Fullscreen, WindowBuilder},
};

mod core;
mod engine;
mod game;

use crate::core::rng::GameRng;
use engine::assets::AssetLoader;
use engine::game_loop::GameLoop;
use engine::input::{Action, BindingsFile, InputManager, InputSource};
use engine::physics::{SCREEN_HEIGHT, SCREEN_WIDTH};
use game::{Match, QuestionBank, Ruleset};

#[derive(Parser, Debug)]
#[command(name = "mementos-melee")]
#[command(about = "2D arcade brawler with a trivia comeback mechanic")]
struct Cli {
    /// Rule set: single-knockout arcade or best-of-three rounds
    #[arg(long, value_enum, default_value_t = Ruleset::Arcade)]
    ruleset: Ruleset,

    /// JSON file of {"q": ..., "a": ...} trivia records
    #[arg(long, default_value = game::trivia::QUESTIONS_FILE)]
    questions: PathBuf,

    /// Seed for AI and question draws (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file of key binding overrides, e.g. {"player1": {"Jump": ["Space"]}}
    #[arg(long)]
    bindings: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    info!("Starting Mementos Melee...");

    let questions = load_questions(&cli.questions);
    let rng = match cli.seed {
        Some(seed) => GameRng::from_seed(seed),
        None => GameRng::from_entropy(),
    };
    let mut game = Match::new(cli.ruleset, questions, rng);
    let mut input = InputManager::new();
    if let Some(path) = &cli.bindings {
        if let Some(file) = load_bindings(path) {
            input.config_mut().apply(&file);
        }
    }
    let mut game_loop = GameLoop::new();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Mementos Melee")
        .with_inner_size(winit::dpi::LogicalSize::new(SCREEN_WIDTH, SCREEN_HEIGHT))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut title = String::new();

    // Main event loop
    event_loop.run(move |event, elwt| {
        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        let action = input.config().global_action(InputSource::key(code));
                        if action == Some(Action::ToggleFullscreen) {
                            let fullscreen = match window.fullscreen() {
                                Some(_) => None,
                                None => Some(Fullscreen::Borderless(None)),
                            };
                            info!("Fullscreen: {}", fullscreen.is_some());
                            window.set_fullscreen(fullscreen);
                        }
                    }
                }
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                // Releases that happen while unfocused never reach us
                input.reset_all();
            }
            Event::WindowEvent {
                event: WindowEvent::Resized(physical_size),
                ..
            } => {
                info!("Window resized to {:?}", physical_size);
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let steps = game_loop.begin_frame();
                for _ in 0..steps {
                    game.update(&input);
                    input.end_frame();
                }

                if game.exit_requested() {
                    info!("Exit requested, shutting down...");
                    elwt.exit();
                    return;
                }

                let hud = game.snapshot().hud_line();
                if hud != title {
                    window.set_title(&hud);
                    title = hud;
                }

                if game_loop.frame_count() % 600 == 0 {
                    debug!(
                        "FPS: {:.1}, steps: {}",
                        game_loop.fps(),
                        game_loop.step_count()
                    );
                }
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        }
    }).map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

/// Loader rooted at the directory of `path`, plus the file name inside it
fn split_asset_path(path: &Path) -> (AssetLoader, String) {
    let base = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    (AssetLoader::new(base), name)
}

/// Question bank from `path`, or the built-in fallback question
fn load_questions(path: &Path) -> QuestionBank {
    let (loader, name) = split_asset_path(path);
    QuestionBank::load_or_fallback(&loader, &name)
}

/// Binding overrides from `path`; a bad file leaves the default keys in place
fn load_bindings(path: &Path) -> Option<BindingsFile> {
    let (loader, name) = split_asset_path(path);
    match loader.load_json::<BindingsFile>(&name) {
        Ok(file) => {
            info!("Loaded key bindings from {}", path.display());
            Some(file)
        }
        Err(err) => {
            warn!("Ignoring key bindings: {}", err);
            None
        }
    }
}
