use std::collections::HashMap;
use tracing::debug;

use crate::error::JournalError;
use crate::routing::guard::{
    evaluate, normalize_path, GuardDecision, GuardPaths, RouteGuardRule, SessionState,
};

const MAX_REDIRECTS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAccess {
    /// No guard: always rendered.
    Open,
    Guarded(RouteGuardRule),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub pattern: String,
    pub page: String,
    pub access: RouteAccess,
}

impl Route {
    pub fn new(pattern: &str, page: &str, access: RouteAccess) -> Self {
        Self {
            pattern: normalize_path(pattern).to_string(),
            page: page.to_string(),
            access,
        }
    }

    /// Captured `:param` segments when `path` matches, with the number of
    /// literal segments used to rank competing matches.
    fn match_path(&self, path: &str) -> Option<(usize, HashMap<String, String>)> {
        let pattern: Vec<&str> = segments(&self.pattern).collect();
        let actual: Vec<&str> = segments(path).collect();
        if pattern.len() != actual.len() {
            return None;
        }

        let mut literal = 0;
        let mut params = HashMap::new();
        for (p, a) in pattern.iter().zip(&actual) {
            if let Some(name) = p.strip_prefix(':') {
                params.insert(name.to_string(), a.to_string());
            } else if p == a {
                literal += 1;
            } else {
                return None;
            }
        }
        Some((literal, params))
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    pub params: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub matched: RouteMatch<'a>,
    pub decision: GuardDecision,
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    paths: GuardPaths,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>, paths: GuardPaths) -> Self {
        Self { routes, paths }
    }

    /// The journal's page map: the landing page is public, sign-in is for
    /// guests only, onboarding needs an account and every other page needs a
    /// completed onboarding.
    pub fn journal(paths: GuardPaths) -> Self {
        let onboarded = || RouteAccess::Guarded(RouteGuardRule::onboarded());
        let mut routes = vec![
            Route::new(&paths.landing, "landing", RouteAccess::Open),
            Route::new(
                &paths.login,
                "auth",
                RouteAccess::Guarded(RouteGuardRule::guest_only(Some("/dashboard"))),
            ),
            Route::new(
                &paths.onboarding,
                "onboarding",
                RouteAccess::Guarded(RouteGuardRule::authenticated()),
            ),
        ];
        for (pattern, page) in [
            ("/dashboard", "dashboard"),
            ("/insights", "insights"),
            ("/markets", "markets"),
            ("/markets/:symbol", "coin_detail"),
            ("/trades", "trades"),
            ("/trades/:tradeId", "trade_detail"),
            ("/trades/stats", "trade_stats"),
            ("/futures-stats", "futures_stats"),
            ("/community-trade-ideas", "community_trade_ideas"),
            ("/payments", "payments"),
            ("/notifications", "notifications"),
            ("/learn", "learn"),
            ("/learn/:articleId", "learn_detail"),
            ("/settings", "settings"),
            ("/billing", "billing"),
            ("/support", "support"),
        ] {
            routes.push(Route::new(pattern, page, onboarded()));
        }
        Self::new(routes, paths)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Best match for `path`; literal segments outrank parameters.
    pub fn find(&self, path: &str) -> Option<RouteMatch<'_>> {
        let path = normalize_path(path);
        self.routes
            .iter()
            .filter_map(|route| route.match_path(path).map(|(score, params)| (score, route, params)))
            .max_by_key(|(score, _, _)| *score)
            .map(|(_, route, params)| RouteMatch { route, params })
    }

    pub fn resolve(&self, path: &str, session: SessionState) -> Result<Resolution<'_>, JournalError> {
        let matched = self
            .find(path)
            .ok_or_else(|| JournalError::UnknownRoute(path.to_string()))?;

        let decision = match &matched.route.access {
            RouteAccess::Open => GuardDecision::RenderChildren,
            RouteAccess::Guarded(rule) => evaluate(rule, session, &self.paths, path),
        };
        Ok(Resolution { matched, decision })
    }

    /// Follow guard redirects from `path` and return where the visitor lands.
    pub fn follow(&self, path: &str, session: SessionState) -> Result<String, JournalError> {
        let mut current = normalize_path(path).to_string();

        for _ in 0..=MAX_REDIRECTS {
            let resolution = self.resolve(&current, session)?;
            match resolution.decision {
                GuardDecision::RenderChildren | GuardDecision::RenderNothing => return Ok(current),
                GuardDecision::Redirect(target) => {
                    debug!("Guard redirect {} -> {}", current, target);
                    current = normalize_path(&target).to_string();
                }
            }
        }

        Err(JournalError::RedirectLoop {
            start: path.to_string(),
            hops: MAX_REDIRECTS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::journal(GuardPaths::default())
    }

    #[test]
    fn literal_segment_beats_parameter() {
        let t = table();
        let stats = t.find("/trades/stats").unwrap();
        assert_eq!(stats.route.page, "trade_stats");
        assert!(stats.params.is_empty());

        let detail = t.find("/trades/42/").unwrap();
        assert_eq!(detail.route.page, "trade_detail");
        assert_eq!(detail.params.get("tradeId").map(String::as_str), Some("42"));

        let coin = t.find("/markets/BTC?range=1d").unwrap();
        assert_eq!(coin.params.get("symbol").map(String::as_str), Some("BTC"));
    }

    #[test]
    fn unknown_path_is_an_error() {
        assert_eq!(
            table().resolve("/nowhere", SessionState::signed_out()),
            Err(JournalError::UnknownRoute("/nowhere".to_string()))
        );
    }

    #[test]
    fn landing_page_is_open() {
        let t = table();
        for session in [SessionState::signed_out(), SessionState::signed_in(true)] {
            assert_eq!(
                t.resolve("/", session).unwrap().decision,
                GuardDecision::RenderChildren
            );
        }
    }

    #[test]
    fn visitor_lands_on_login() {
        assert_eq!(
            table().follow("/dashboard", SessionState::signed_out()).unwrap(),
            "/auth"
        );
    }

    #[test]
    fn new_account_lands_on_onboarding() {
        let t = table();
        assert_eq!(t.follow("/trades/7", SessionState::signed_in(false)).unwrap(), "/onboarding");
        // And signing in again from /auth goes via the dashboard to onboarding.
        assert_eq!(t.follow("/auth", SessionState::signed_in(false)).unwrap(), "/onboarding");
    }

    #[test]
    fn onboarded_user_reaches_page() {
        let t = table();
        assert_eq!(t.follow("/settings", SessionState::signed_in(true)).unwrap(), "/settings");
        assert_eq!(t.follow("/auth", SessionState::signed_in(true)).unwrap(), "/dashboard");
    }

    #[test]
    fn redirect_cycle_is_reported() {
        let t = RouteTable::new(
            vec![
                Route::new("/a", "a", RouteAccess::Guarded(RouteGuardRule::guest_only(Some("/b")))),
                Route::new("/b", "b", RouteAccess::Guarded(RouteGuardRule::guest_only(Some("/a")))),
            ],
            GuardPaths::default(),
        );
        assert_eq!(
            t.follow("/a", SessionState::signed_in(true)),
            Err(JournalError::RedirectLoop {
                start: "/a".to_string(),
                hops: MAX_REDIRECTS,
            })
        );
    }
}
