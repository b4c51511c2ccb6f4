mod paths;

pub use paths::PathContext;

use settings::{SettingsError, SettingsStore};
use std::marker::PhantomData;
#[cfg(debug_assertions)]
use std::path::PathBuf;
use tracing_subscriber::{
    Layer, filter::LevelFilter, filter::filter_fn, fmt, layer::SubscriberExt,
    util::SubscriberInitExt,
};

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub const LOG_MAIN: &str = "main";
pub const LOG_SCROLL: &str = "scroll";
pub const LOG_CAMERA: &str = "camera";
pub const LOG_UI: &str = "ui";
pub const LOG_LINKS: &str = "links";

/// Application infrastructure context.
///
/// Owns the path layout and keeps the log writer alive. Every binary needs
/// one, whether or not it runs Bevy.
pub struct AppContext {
    pub path_context: PathContext,
    pub version: &'static str,
    /// Dropping the guard stops the background log writer, so it lives as
    /// long as the context.
    _log_guard: tracing_appender::non_blocking::WorkerGuard,
}

impl AppContext {
    pub fn app_id(&self) -> &str {
        self.path_context.app_id()
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    pub fn path_context(&self) -> &PathContext {
        &self.path_context
    }

    /// Opens the settings store backed by this application's delta file.
    pub fn open_settings(&self) -> Result<SettingsStore, SettingsError> {
        SettingsStore::builder()
            .with_settings_file(self.path_context.settings_file())
            .build()
    }
}

/// Application identity. Only constants, no behavior.
pub trait Application: Sized + 'static {
    const APP_ID: &'static str;
    const STUDIO: &'static str = "nithish";
    const PROJECT_ID: &'static str = "portfolio";
}

/// Builds an [`AppContext`] and optionally a Bevy app on top of it.
pub struct AppBuilder<A: Application> {
    context: AppContext,
    _marker: PhantomData<A>,
}

impl<A: Application> AppBuilder<A> {
    /// Resolves paths, creates the directories and installs logging
    /// (non-blocking file + console).
    pub fn new(version: &'static str) -> Result<Self, BoxError> {
        #[cfg(debug_assertions)]
        let path_context = PathContext::with_base_path(
            PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("..")
                .join("..")
                .join(".out"),
            A::STUDIO,
            A::PROJECT_ID,
            A::APP_ID,
        );
        #[cfg(not(debug_assertions))]
        let path_context = PathContext::new(A::STUDIO, A::PROJECT_ID, A::APP_ID);

        path_context.ensure_directories()?;

        let log_file_path = path_context.log_file_now();
        let log_dir = log_file_path
            .parent()
            .ok_or("log file path has no parent directory")?;
        let log_filename = log_file_path
            .file_name()
            .ok_or("log file path has no file name")?;

        let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        #[cfg(debug_assertions)]
        let level = LevelFilter::INFO;

        #[cfg(not(debug_assertions))]
        let level = LevelFilter::WARN;

        let file_layer = fmt::Layer::default()
            .with_target(true)
            .with_ansi(false)
            .with_writer(non_blocking)
            .with_filter(filter_fn(move |metadata| metadata.level() <= &level));

        let console_layer = fmt::Layer::default()
            .with_target(true)
            .with_filter(filter_fn(move |metadata| metadata.level() <= &level));

        tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer)
            .with(tracing_error::ErrorLayer::default())
            .try_init()?;

        tracing::info!(
            target: LOG_MAIN,
            app_id = A::APP_ID,
            version,
            log_file = %log_file_path.display(),
            "logging initialized"
        );

        Ok(Self {
            context: AppContext {
                path_context,
                version,
                _log_guard: guard,
            },
            _marker: PhantomData,
        })
    }

    /// Hands a fresh Bevy `App` to `configure` and wraps the result.
    ///
    /// ```ignore
    /// let app = AppBuilder::<Portfolio>::new("0.1.0")?
    ///     .try_build_with_bevy(|mut app, ctx| {
    ///         app.add_plugins(DefaultPlugins);
    ///         Ok::<_, anyhow::Error>(app)
    ///     })?;
    /// ```
    #[cfg(feature = "bevy")]
    pub fn try_build_with_bevy<E>(
        self,
        configure: impl FnOnce(bevy::prelude::App, &AppContext) -> Result<bevy::prelude::App, E>,
    ) -> Result<BevyApp<A>, E> {
        let bevy_app = bevy::prelude::App::new();
        let configured_app = configure(bevy_app, &self.context)?;

        Ok(BevyApp {
            context: self.context,
            app: configured_app,
            _marker: PhantomData,
        })
    }
}

/// A configured Bevy app plus the context that keeps logging alive.
#[cfg(feature = "bevy")]
pub struct BevyApp<A: Application> {
    pub context: AppContext,
    pub app: bevy::prelude::App,
    _marker: PhantomData<A>,
}

#[cfg(feature = "bevy")]
impl<A: Application> BevyApp<A> {
    pub fn run(&mut self) -> bevy::app::AppExit {
        self.app.run()
    }
}
