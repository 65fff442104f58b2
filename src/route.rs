// Route table - maps location paths to the three top-level views
//
//   /                 -> Home
//   /collections      -> Collections
//   /chat[/{id}]      -> Chat, id optional and opaque

use crate::error::RouteError;
use crate::model::CollectionId;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

const COLLECTIONS_SEGMENT: &str = "collections";
const CHAT_SEGMENT: &str = "chat";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Home,
    Collections,
    Chat,
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Collections => "Collections",
            Self::Chat => "Chat",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    Collections,
    Chat(Option<CollectionId>),
}

impl Route {
    /// Matches a location against the route table.
    ///
    /// Static segments compare case-insensitively, one trailing slash is
    /// ignored and any query or fragment is dropped. The chat segment's id is
    /// taken verbatim.
    pub fn parse(location: &str) -> Result<Self, RouteError> {
        let location = location.trim();
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default();

        let Some(rest) = path.strip_prefix('/') else {
            return Err(RouteError::MissingLeadingSlash(location.to_string()));
        };
        if rest.is_empty() {
            return Ok(Self::Home);
        }

        let rest = rest.strip_suffix('/').unwrap_or(rest);
        let segments: Vec<&str> = rest.split('/').collect();
        match segments.as_slice() {
            [segment] if segment.eq_ignore_ascii_case(COLLECTIONS_SEGMENT) => Ok(Self::Collections),
            [segment] if segment.eq_ignore_ascii_case(CHAT_SEGMENT) => Ok(Self::Chat(None)),
            [segment, id] if segment.eq_ignore_ascii_case(CHAT_SEGMENT) && !id.is_empty() => {
                Ok(Self::Chat(Some(CollectionId::new(*id))))
            }
            _ => Err(RouteError::Unmatched(location.to_string())),
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Collections => format!("/{}", COLLECTIONS_SEGMENT),
            Self::Chat(None) => format!("/{}", CHAT_SEGMENT),
            Self::Chat(Some(id)) => format!("/{}/{}", CHAT_SEGMENT, id),
        }
    }

    pub fn view(&self) -> View {
        match self {
            Self::Home => View::Home,
            Self::Collections => View::Collections,
            Self::Chat(_) => View::Chat,
        }
    }

    /// Collection id embedded in the location, if any.
    pub fn chat_id(&self) -> Option<&CollectionId> {
        match self {
            Self::Chat(id) => id.as_ref(),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Route to open at launch. An unmatched start path falls back to home.
pub fn start_route(location: &str) -> Route {
    match Route::parse(location) {
        Ok(route) => route,
        Err(err) => {
            warn!(error = %err, "Ignoring start path, opening home");
            Route::Home
        }
    }
}
