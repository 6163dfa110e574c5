//! Airspace Trainer.
//!
//! Interaktiver Trainer für Wegpunkte und Luftraumgrenzen: Ziel antippen,
//! Spaced Repetition entscheidet über die nächste Frage.

use std::sync::Arc;

use airspace_trainer::{
    app::GestureConfig, data, ui, AppController, AppIntent, AppState, FileStore,
    MemoryStore, ProgressRepository, SpacedRepetitionScheduler, SystemClock, TrainerOptions,
};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Airspace Trainer v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("Airspace Trainer"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Airspace Trainer",
            options,
            Box::new(|_cc| Ok(Box::new(TrainerApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct TrainerApp {
    state: AppState,
    controller: AppController,
    input: ui::CanvasInput,
    /// Canvas-Bereich des letzten Layouts
    canvas_rect: Option<egui::Rect>,
}

impl TrainerApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = TrainerOptions::config_path();
        let options = TrainerOptions::load_from_file(&config_path);

        let progress = match FileStore::open(&options.store_path) {
            Ok(store) => ProgressRepository::new(store),
            Err(e) => {
                log::warn!(
                    "Fortschritts-Speicher nicht verfügbar, nutze In-Memory-Store: {}",
                    e
                );
                ProgressRepository::new(MemoryStore::new())
            }
        };

        let input = ui::CanvasInput::new(GestureConfig::from_options(&options));
        let state = AppState::with_parts(
            options,
            progress,
            Box::new(SystemClock),
            SpacedRepetitionScheduler::new(),
        );

        let mut app = Self {
            state,
            controller: AppController::new(),
            input,
            canvas_rect: None,
        };
        app.load_dataset();
        app
    }

    fn load_dataset(&mut self) {
        let intent = match data::load_from_paths(
            &self.state.options.boundaries_path,
            &self.state.options.waypoints_path,
        ) {
            Ok(dataset) => AppIntent::DatasetLoaded {
                dataset: Arc::new(dataset),
            },
            Err(e) => {
                log::error!("Datensatz konnte nicht geladen werden: {}", e);
                AppIntent::DatasetLoadFailed {
                    message: format!("Laden fehlgeschlagen: {}", e),
                }
            }
        };
        self.process_events(vec![intent]);
    }
}

impl eframe::App for TrainerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = self.collect_ui_events(ctx);
        events.push(AppIntent::TimersElapsed);

        self.process_events(events);

        self.paint_canvas(ctx);

        self.schedule_repaint(ctx);
    }
}

impl TrainerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_regions_panel(ctx, &self.state));

        let now = self.state.clock.now();
        let mut canvas_rect = None;
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.push(AppIntent::ViewportResized {
                    size: [rect.width(), rect.height()],
                });
                events.extend(self.input.collect_canvas_intents(ui, rect, now));
                canvas_rect = Some(rect);
            });
        self.canvas_rect = canvas_rect;

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event-Verarbeitung fehlgeschlagen: {:#}", e);
            }
        }
    }

    /// Zeichnet die Szene mit dem Stand nach allen Events dieses Frames.
    fn paint_canvas(&self, ctx: &egui::Context) {
        let Some(rect) = self.canvas_rect else {
            return;
        };
        let scene = self.controller.build_render_scene(&self.state);
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Background,
            egui::Id::new("trainer_canvas"),
        ));
        ui::paint_scene(&painter.with_clip_rect(rect), rect, &scene);
    }

    /// Fordert höchstens einen Repaint pro Frame an.
    ///
    /// Laufende Timer (Reveal-Blinken, Feedback) planen den nächsten Frame
    /// zu ihrer frühesten Deadline.
    fn schedule_repaint(&mut self, ctx: &egui::Context) {
        if self.state.view.take_redraw_request() || self.input.is_dragging() {
            ctx.request_repaint();
            return;
        }
        if let Some(deadline) = self.state.session.next_deadline() {
            let wait = (deadline - self.state.clock.now())
                .to_std()
                .unwrap_or_default();
            ctx.request_repaint_after(wait);
        }
    }
}
