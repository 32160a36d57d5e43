use serde::{Deserialize, Serialize};

use crate::config::Config;

/// What the guard knows about the visitor. Supplied by the session layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub authenticated: bool,
    pub onboarding_complete: bool,
}

impl SessionState {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn signed_in(onboarding_complete: bool) -> Self {
        Self {
            authenticated: true,
            onboarding_complete,
        }
    }
}

/// Access rule attached to a group of routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteGuardRule {
    #[serde(default = "default_true")]
    pub require_auth: bool,
    #[serde(default)]
    pub require_onboarding: bool,
    /// Where signed-in visitors are sent from guest-only routes.
    #[serde(default)]
    pub redirect_to: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for RouteGuardRule {
    fn default() -> Self {
        Self {
            require_auth: true,
            require_onboarding: false,
            redirect_to: None,
        }
    }
}

impl RouteGuardRule {
    pub fn authenticated() -> Self {
        Self::default()
    }

    pub fn onboarded() -> Self {
        Self {
            require_onboarding: true,
            ..Self::default()
        }
    }

    pub fn guest_only(redirect_to: Option<&str>) -> Self {
        Self {
            require_auth: false,
            require_onboarding: false,
            redirect_to: redirect_to.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardPaths {
    pub login: String,
    pub onboarding: String,
    pub landing: String,
}

impl Default for GuardPaths {
    fn default() -> Self {
        Self {
            login: "/auth".to_string(),
            onboarding: "/onboarding".to_string(),
            landing: "/".to_string(),
        }
    }
}

impl GuardPaths {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            login: cfg.login_path.clone(),
            onboarding: cfg.onboarding_path.clone(),
            landing: cfg.landing_path.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "path", rename_all = "snake_case")]
pub enum GuardDecision {
    RenderChildren,
    Redirect(String),
    /// Already on the redirect target; render nothing instead of looping.
    RenderNothing,
}

/// Path the visitor must be sent to, if any.
pub fn redirect_target(
    rule: &RouteGuardRule,
    session: SessionState,
    paths: &GuardPaths,
) -> Option<String> {
    if !rule.require_auth {
        return session.authenticated.then(|| {
            rule.redirect_to
                .clone()
                .unwrap_or_else(|| paths.landing.clone())
        });
    }

    if !session.authenticated {
        return Some(paths.login.clone());
    }
    if rule.require_onboarding && !session.onboarding_complete {
        return Some(paths.onboarding.clone());
    }
    None
}

pub fn evaluate(
    rule: &RouteGuardRule,
    session: SessionState,
    paths: &GuardPaths,
    current_path: &str,
) -> GuardDecision {
    match redirect_target(rule, session, paths) {
        None => GuardDecision::RenderChildren,
        Some(target) if normalize_path(&target) == normalize_path(current_path) => {
            GuardDecision::RenderNothing
        }
        Some(target) => GuardDecision::Redirect(target),
    }
}

/// Strip query, fragment and trailing slashes; the root stays `/`.
pub fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or("");
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}
