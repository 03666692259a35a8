//! Feature-Info-Demo.
//!
//! Hostet ein In-Memory-Zeichen-Widget mit Karte und Feature-Liste und hängt
//! die Info-Controls daran.

use anyhow::Context as _;
use eframe::egui;
use feature_info_controls::ui::{self, MapCanvas, MenuAction};
use feature_info_controls::{ControlOptions, DrawStore, FeatureCollection, InfoControl};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Feature-Info-Demo v{} startet...", env!("CARGO_PKG_VERSION"));

        // Ungültige Optionen verhindern den Start
        let config_path = ControlOptions::config_path();
        let control_options = ControlOptions::load_from_file(&config_path)
            .with_context(|| format!("Optionen ungültig: {}", config_path.display()))?;

        let collection = match std::env::args().nth(1) {
            Some(path) => load_collection(Path::new(&path))?,
            None => sample_collection(),
        };

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Feature Info Controls"),
            ..Default::default()
        };

        eframe::run_native(
            "Feature Info Controls",
            options,
            Box::new(move |_cc| Ok(Box::new(DemoApp::new(collection, control_options)))),
        )
        .map_err(|e| anyhow::anyhow!("eframe beendet mit Fehler: {e}"))
    }
}

fn load_collection(path: &Path) -> anyhow::Result<FeatureCollection> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("GeoJSON nicht lesbar: {}", path.display()))?;
    let collection = FeatureCollection::from_json(&content)
        .with_context(|| format!("GeoJSON ungültig: {}", path.display()))?;
    log::info!("GeoJSON geladen: {}", path.display());
    Ok(collection)
}

fn sample_collection() -> FeatureCollection {
    use feature_info_controls::Feature;
    FeatureCollection {
        features: vec![
            Feature::line_string(
                "spree-ufer",
                [[13.370, 52.518], [13.385, 52.520], [13.400, 52.517]],
            ),
            Feature::line_string("museumsinsel", [[13.402, 52.518], [13.410, 52.522]]),
            Feature::point("cafe", [13.392, 52.514]),
        ],
    }
}

/// Haupt-Anwendungsstruktur
struct DemoApp {
    store: DrawStore,
    control: InfoControl,
    canvas: MapCanvas,
    should_exit: bool,
}

impl DemoApp {
    fn new(collection: FeatureCollection, options: ControlOptions) -> Self {
        let mut store = DrawStore::new();
        let control = InfoControl::mount(&mut store, options);
        store.replace_all(collection);

        let mut canvas = MapCanvas::new();
        canvas.fit_to_store(&store);

        Self {
            store,
            control,
            canvas,
            should_exit: false,
        }
    }

    fn handle_menu(&mut self, action: MenuAction) -> anyhow::Result<()> {
        match action {
            MenuAction::OpenRequested => {
                let Some(path) = rfd::FileDialog::new()
                    .add_filter("GeoJSON", &["geojson", "json"])
                    .pick_file()
                else {
                    return Ok(());
                };
                let collection = load_collection(&path)?;
                self.store.replace_all(collection);
                self.canvas.fit_to_store(&self.store);
            }
            MenuAction::SaveAsRequested => {
                let Some(path) = rfd::FileDialog::new()
                    .add_filter("GeoJSON", &["geojson", "json"])
                    .set_file_name("features.geojson")
                    .save_file()
                else {
                    return Ok(());
                };
                let json = self.store.to_collection().to_json_pretty()?;
                std::fs::write(&path, json)
                    .with_context(|| format!("Speichern fehlgeschlagen: {}", path.display()))?;
                log::info!("GeoJSON gespeichert: {}", path.display());
            }
            MenuAction::FitViewRequested => self.canvas.fit_to_store(&self.store),
            MenuAction::DrawLineRequested => self.store.start_line(),
            MenuAction::ExitRequested => self.should_exit = true,
        }
        Ok(())
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        for action in ui::render_menu(ctx, &self.store) {
            if let Err(e) = self.handle_menu(action) {
                log::error!("Menü-Aktion fehlgeschlagen: {:#}", e);
            }
        }

        let unit = self.control.state().options.distance_units;
        ui::render_feature_list(ctx, &mut self.store, unit);

        let intents = ui::render_info_control(ctx, self.control.state());

        egui::CentralPanel::default().show(ctx, |ui| {
            self.canvas.show(ui, &mut self.store);
        });

        if let Err(e) = self.control.process_pending(&mut self.store) {
            log::error!("Benachrichtigung fehlgeschlagen: {:#}", e);
        }
        for intent in intents {
            if let Err(e) = self.control.handle_intent(&mut self.store, intent) {
                log::error!("Event handling failed: {:#}", e);
            }
        }

        if ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}
