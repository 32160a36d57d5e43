use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::routing::guard::SessionState;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingAnswers {
    pub experience_level: String,
    pub investment_goal: String,
    pub risk_comfort: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answers: Option<OnboardingAnswers>,
    pub onboarding_complete: bool,
    #[serde(default)]
    pub is_subscribed: bool,
}

/// In-memory signed-in user shared across the app. Nothing is persisted;
/// the guard only ever sees [`SessionStore::snapshot`].
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    user: Arc<RwLock<Option<UserProfile>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn login(&self, email: &str) {
        let mut user = self.user.write().await;
        *user = Some(UserProfile {
            email: email.to_string(),
            answers: None,
            onboarding_complete: false,
            is_subscribed: false,
        });
        info!("Signed in {}", email);
    }

    /// Record onboarding answers. Returns false when nobody is signed in.
    pub async fn complete_onboarding(&self, answers: OnboardingAnswers) -> bool {
        let mut user = self.user.write().await;
        match user.as_mut() {
            Some(profile) => {
                profile.answers = Some(answers);
                profile.onboarding_complete = true;
                info!("Onboarding complete for {}", profile.email);
                true
            }
            None => false,
        }
    }

    pub async fn logout(&self) {
        if let Some(profile) = self.user.write().await.take() {
            info!("Signed out {}", profile.email);
        }
    }

    pub async fn user(&self) -> Option<UserProfile> {
        self.user.read().await.clone()
    }

    pub async fn snapshot(&self) -> SessionState {
        match self.user.read().await.as_ref() {
            Some(profile) => SessionState::signed_in(profile.onboarding_complete),
            None => SessionState::signed_out(),
        }
    }
}
