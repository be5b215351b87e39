use leptos::prelude::*;

use crate::db::entities::{Session, UserRole};

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
const SESSION_KEY: &str = "inkwell_session";

/// Reactive handle on the logged-in user, shared through context.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<Option<Session>>,
    /// False until the browser has had a chance to read localStorage.
    pub loaded: RwSignal<bool>,
}

impl SessionContext {
    pub fn login(&self, session: Session) {
        store_session(&session);
        self.session.set(Some(session));
    }

    pub fn logout(&self) {
        clear_stored_session();
        self.session.set(None);
    }

    pub fn has_role(&self, role: UserRole) -> bool {
        self.session
            .get()
            .map(|session| session.role == role)
            .unwrap_or(false)
    }
}

/// Creates the session context and loads any saved session once hydrated.
pub fn provide_session_context() -> SessionContext {
    let context = SessionContext {
        session: RwSignal::new(None),
        loaded: RwSignal::new(false),
    };

    Effect::new(move |_| {
        context.session.set(load_stored_session());
        context.loaded.set(true);
    });

    provide_context(context);
    context
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

pub fn parse_session(raw: &str) -> Option<Session> {
    if raw.trim().is_empty() {
        return None;
    }
    serde_json::from_str::<Session>(raw).ok()
}

fn load_stored_session() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_namespace = localStorage)]
            fn getItem(key: &str) -> Option<String>;
        }

        if let Some(raw) = getItem(SESSION_KEY) {
            return parse_session(&raw);
        }
    }

    None
}

#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn store_session(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_namespace = localStorage)]
            fn setItem(key: &str, value: &str);
        }

        match serde_json::to_string(session) {
            Ok(raw) => setItem(SESSION_KEY, &raw),
            Err(e) => leptos::logging::error!("Could not save session: {}", e),
        }
    }
}

fn clear_stored_session() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_namespace = localStorage)]
            fn removeItem(key: &str);
        }

        removeItem(SESSION_KEY);
    }
}

/// Only same-site paths are allowed as post-login destinations. Browsers
/// read `\` as `/`, so a backslash anywhere or a control character disqualifies
/// the path.
pub fn safe_redirect(redirect: Option<String>, role: UserRole) -> String {
    match redirect {
        Some(path) if is_local_path(&path) => path,
        _ => role.home_path().to_string(),
    }
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && !path.contains('\\')
        && !path.chars().any(char::is_control)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_session() {
        let raw = r#"{"email":"alex@example.com","display_name":"Alex Rivera","role":"client"}"#;
        let session = parse_session(raw).unwrap();
        assert_eq!(session.role, UserRole::Client);
        assert_eq!(parse_session(""), None);
        assert_eq!(parse_session("not json"), None);
    }

    #[test]
    fn test_safe_redirect() {
        assert_eq!(safe_redirect(Some("/book?artist=2".into()), UserRole::Client), "/book?artist=2");
        assert_eq!(safe_redirect(Some("https://evil.example".into()), UserRole::Client), "/my-appointments");
        assert_eq!(safe_redirect(Some("//evil.example".into()), UserRole::Admin), "/admin/dashboard");
        assert_eq!(safe_redirect(Some("/\\evil.example".into()), UserRole::Client), "/my-appointments");
        assert_eq!(safe_redirect(Some("/\t/evil.example".into()), UserRole::Client), "/my-appointments");
        assert_eq!(safe_redirect(Some("/gallery\\x".into()), UserRole::Client), "/my-appointments");
        assert_eq!(safe_redirect(None, UserRole::Admin), "/admin/dashboard");
    }
}
