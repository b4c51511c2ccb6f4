use anyhow::{Context, Result, anyhow};
use app::{AppBuilder, Application, BevyApp, LOG_MAIN};
use bevy::{log::LogPlugin, prelude::*};
use bevy_enhanced_input::prelude::*;
use bevy_tweening::TweeningPlugin;
use portfolio::{PortfolioPlugin, settings::register_sections};
use settings::AppSettingsExt;

pub struct Portfolio;

impl Application for Portfolio {
    const APP_ID: &'static str = "portfolio";
}

/// Paths, logging, settings and every plugin; the window opens on `run`.
pub fn init() -> Result<BevyApp<Portfolio>> {
    let builder = AppBuilder::<Portfolio>::new(env!("CARGO_PKG_VERSION"))
        .map_err(|err| anyhow!(err))
        .context("failed to set up paths and logging")?;

    builder.try_build_with_bevy(|mut app, context| -> Result<App> {
        let store = context
            .open_settings()
            .context("failed to open the settings file")?;

        app.add_plugins(
            DefaultPlugins
                .build()
                .disable::<LogPlugin>()
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Portfolio".to_string(),
                        ..default()
                    }),
                    ..default()
                }),
        );

        // Sections must be registered before the feature plugins seed defaults.
        app.insert_settings_store(store);
        register_sections(&mut app);

        app.add_plugins((EnhancedInputPlugin, TweeningPlugin, PortfolioPlugin));

        info!(
            target: LOG_MAIN,
            app_id = context.app_id(),
            version = context.version(),
            settings = %context.path_context().settings_file().display(),
            "portfolio configured"
        );
        Ok(app)
    })
}
