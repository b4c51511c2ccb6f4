//! External links (contact cards, quick links, project links).
//!
//! Clicking a [`LinkButton`] writes an [`OpenLink`]; the URL is checked and
//! handed to the active [`LinkOpener`], which by default asks the operating
//! system to open it. Nothing is opened for unsupported schemes.

use app::LOG_LINKS;
use bevy::prelude::*;
use std::io;
use thiserror::Error;
use tracing::{info, warn};

pub struct LinksPlugin;

impl Plugin for LinksPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<ActiveLinkOpener>() {
            app.insert_resource(ActiveLinkOpener::system());
        }

        app.add_message::<OpenLink>()
            .add_systems(Update, (emit_link_clicks, open_links).chain());
    }
}

/// Request to open `url` outside the application.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct OpenLink {
    pub url: String,
}

/// Attach next to a `Button` to open `url` when pressed.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct LinkButton {
    pub url: String,
}

impl LinkButton {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("link is empty")]
    Empty,

    #[error("unsupported link scheme in {0:?}")]
    UnsupportedScheme(String),
}

/// A URL we know how to hand off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// `mailto:` opens the mail client.
    Mail(String),
    /// `tel:` opens the dialer where one exists.
    Phone(String),
    Web(String),
}

impl LinkTarget {
    pub fn classify(url: &str) -> Result<Self, LinkError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(LinkError::Empty);
        }

        let lower = url.to_ascii_lowercase();
        if lower.starts_with("mailto:") {
            Ok(Self::Mail(url.to_string()))
        } else if lower.starts_with("tel:") {
            Ok(Self::Phone(url.to_string()))
        } else if lower.starts_with("https://") || lower.starts_with("http://") {
            Ok(Self::Web(url.to_string()))
        } else {
            Err(LinkError::UnsupportedScheme(url.to_string()))
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Mail(url) | Self::Phone(url) | Self::Web(url) => url,
        }
    }
}

/// Opens URLs outside the app.
pub trait LinkOpener: Send + Sync + 'static {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Delegates to the platform's default handler.
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        open::that(url)
    }
}

/// Insert before [`LinksPlugin`] to replace the system opener.
#[derive(Resource)]
pub struct ActiveLinkOpener(pub Box<dyn LinkOpener>);

impl ActiveLinkOpener {
    pub fn new(opener: impl LinkOpener) -> Self {
        Self(Box::new(opener))
    }

    pub fn system() -> Self {
        Self::new(SystemLinkOpener)
    }
}

fn emit_link_clicks(
    buttons: Query<(&Interaction, &LinkButton), Changed<Interaction>>,
    mut links: MessageWriter<OpenLink>,
) {
    for (interaction, button) in &buttons {
        if *interaction == Interaction::Pressed {
            links.write(OpenLink {
                url: button.url.clone(),
            });
        }
    }
}

fn open_links(mut links: MessageReader<OpenLink>, opener: Res<ActiveLinkOpener>) {
    for link in links.read() {
        let target = match LinkTarget::classify(&link.url) {
            Ok(target) => target,
            Err(err) => {
                warn!(target: LOG_LINKS, "not opening link: {err}");
                continue;
            }
        };

        match opener.0.open(target.url()) {
            Ok(()) => info!(target: LOG_LINKS, url = target.url(), "opened link"),
            Err(err) => warn!(target: LOG_LINKS, url = target.url(), "failed to open link: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn classifies_contact_schemes() {
        assert_eq!(
            LinkTarget::classify("mailto:someone@example.com"),
            Ok(LinkTarget::Mail("mailto:someone@example.com".into()))
        );
        assert_eq!(
            LinkTarget::classify(" tel:+910000000000 "),
            Ok(LinkTarget::Phone("tel:+910000000000".into()))
        );
        assert_eq!(
            LinkTarget::classify("HTTPS://github.com"),
            Ok(LinkTarget::Web("HTTPS://github.com".into()))
        );
    }

    #[test]
    fn rejects_empty_and_unknown() {
        assert_eq!(LinkTarget::classify("   "), Err(LinkError::Empty));
        assert_eq!(
            LinkTarget::classify("javascript:alert(1)"),
            Err(LinkError::UnsupportedScheme("javascript:alert(1)".into()))
        );
        assert!(LinkTarget::classify("file:///etc/passwd").is_err());
    }
}
