//! Zellij plugin wrapper and entry point.
//!
//! This is the thin integration layer between the artscope library and the
//! Zellij plugin system. It maps host events onto library events, runs the
//! returned actions, and renders.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request web access; the first page is fetched once granted
//! 3. **Update**: Map keys and web request results, delegate to the library
//! 4. **Render**: Call the library render function
//!
//! # Requests
//!
//! Every fetch carries its [`FetchTag`] in the web request context. Results
//! whose context does not decode to a tag are ignored.
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Ctrl+p`: Move down / up
//!
//! List and detail screens:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `Enter`: Open the selected artwork
//! - `n`/`Right`, `p`/`Left`: Next / previous page
//! - `/`: Search, `c`: Pick a category, `x`: Clear the category
//! - `r`: Reload, `b`/`Esc`: Back from detail, `Tab`: Edit the comment form
//! - `q`: Close plugin
//!
//! While typing (search, category picker, comment form):
//! - `Enter`: Submit, `Esc`: Cancel, `Backspace`: Delete
//! - `Tab`: Next comment field

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use artscope::app::modes::InputMode;
use artscope::catalog::{FetchResponse, FetchTag};
use artscope::{handle_event, Action, Config, Event};

register_plugin!(State);

struct State {
    app: artscope::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: artscope::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        artscope::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = artscope::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", otel.name = %format!("plugin_update::{event_name}"), event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_result(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => Event::PermissionsResult {
                granted: matches!(status, PermissionStatus::Granted),
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        artscope::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, input_mode = ?self.app.input_mode, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        if self.app.input_mode != InputMode::Normal {
            return Some(match key.bare_key {
                BareKey::Enter => Event::Confirm,
                BareKey::Esc => Event::Escape,
                BareKey::Backspace => Event::Backspace,
                BareKey::Tab => Event::NextField,
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            });
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Right | BareKey::Char('n') => Event::NextPage,
            BareKey::Left | BareKey::Char('p') => Event::PreviousPage,
            BareKey::Enter => Event::Confirm,
            BareKey::Esc => Event::Escape,
            BareKey::Tab => Event::NextField,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('c') => Event::CategoryMode,
            BareKey::Char('x') => Event::ClearCategory,
            BareKey::Char('r') => Event::Reload,
            BareKey::Char('b') => Event::Back,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_web_result(status: u16, body: Vec<u8>, context: &BTreeMap<String, String>) -> Option<Event> {
        let Some(tag) = FetchTag::from_context(context) else {
            tracing::debug!(status, "ignoring web result without an artscope context");
            return None;
        };

        tracing::debug!(status, seq = tag.seq, kind = ?tag.kind, body_len = body.len(), "web request settled");
        Some(Event::FetchSettled(FetchResponse { tag, status, body }))
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::Fetch(request) => {
                tracing::debug!(url = %request.url, seq = request.tag.seq, "issuing web request");
                web_request(
                    &request.url,
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    request.tag.to_context(),
                );
            }
        }
    }
}
