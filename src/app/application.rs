//! Application - App Initialization and Headless Run
//!
//! Composition root: config → data source → store → page controller. The
//! binary renders the resulting views as plain text.

use std::fmt;
use std::sync::Arc;

use crate::app::entities::AppEntities;
use crate::domain::config::AppConfig;
use crate::error::Result;
use crate::features::vehicles::{ListView, MapView, PageController};
use crate::services::{VehicleApi, VehicleSource, block_on};
use crate::state::FetchOutcome;

/// The assembled application
pub struct Application {
    config: AppConfig,
    entities: AppEntities,
    page: PageController,
}

impl Application {
    /// Build the application against the configured HTTP endpoint
    pub fn new(config: AppConfig) -> Result<Self> {
        let api = VehicleApi::new(&config.api)?;
        tracing::info!("Using vehicle endpoint {}", api.url());
        Ok(Self::with_source(config, Arc::new(api)))
    }

    /// Build the application against any data source
    pub fn with_source(config: AppConfig, source: Arc<dyn VehicleSource>) -> Self {
        let entities = AppEntities::init(&config, source);
        let page = PageController::new(entities.clone());
        Self {
            config,
            entities,
            page,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn entities(&self) -> &AppEntities {
        &self.entities
    }

    pub fn page(&self) -> &PageController {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut PageController {
        &mut self.page
    }

    /// Load the remote baseline and wait for it
    pub async fn load(&self) -> Result<FetchOutcome> {
        self.entities.store.fetch_vehicles().await
    }

    /// Text rendering of the page header, list and map
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Write the text rendering into any formatter
    pub fn render_into(&self, out: &mut impl fmt::Write) -> fmt::Result {
        let page = &self.page;

        writeln!(out, "{}", page.title())?;
        writeln!(out, "{}", page.subtitle())?;
        let tabs: Vec<String> = page
            .tabs()
            .into_iter()
            .map(|item| {
                let marker = if item.active { "*" } else { " " };
                format!("{marker}[{}] {}", item.icon, item.label)
            })
            .collect();
        writeln!(out, "{}", tabs.join("  "))?;
        writeln!(out)?;

        match page.list().view() {
            ListView::Loading { message } | ListView::Error { message, .. } => {
                writeln!(out, "{message}")?;
            }
            ListView::Ready { title, rows } => {
                writeln!(out, "{title}")?;
                for row in rows {
                    writeln!(
                        out,
                        "  {:>6}  {:<16} {:<16} {:>4}  {:<8} {:>12}",
                        row.id, row.name, row.model, row.year, row.color, row.price
                    )?;
                }
            }
        }
        writeln!(out)?;

        match page.map().view() {
            MapView::Loading { message } => writeln!(out, "{message}")?,
            MapView::Empty { title, message } => writeln!(out, "{title}: {message}")?,
            MapView::Ready {
                title,
                center,
                markers,
                ..
            } => {
                writeln!(out, "{title} @ {:.4}, {:.4}", center.0, center.1)?;
                for marker in markers {
                    writeln!(out, "  {} ({})", marker.popup.title, marker.popup.coordinates)?;
                }
            }
        }

        Ok(())
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_into(f)
    }
}

/// Run the application headless: load once and print the views
pub fn run_app(config: AppConfig) -> Result<()> {
    let app = Application::new(config)?;
    let events = app.entities().store.subscribe();

    match block_on(app.load()) {
        Ok(FetchOutcome::Applied { count }) => tracing::info!("Startup load applied {} vehicles", count),
        Ok(FetchOutcome::Superseded) => tracing::debug!("Startup load superseded"),
        // Already logged by the store; render whatever state we have
        Err(_) => {}
    }

    for event in events.pending() {
        tracing::debug!("Store event: {:?}", event);
    }

    print!("{}", app.render());
    Ok(())
}
