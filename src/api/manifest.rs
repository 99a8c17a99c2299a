// SPDX-License-Identifier: MIT
//
// Copyright (C) 2026 Beta Fun

//! Farcaster mini-app manifest.
//!
//! Served at `/.well-known/farcaster.json` so Farcaster clients can
//! discover the mini-app. Asset URLs are derived from the configured
//! public root URL.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{config::AccountAssociation, state::AppState};

/// Mini-app display name.
const APP_NAME: &str = "beta fun";

/// Manifest document, per the Farcaster mini-app specification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_association: Option<AccountAssociation>,
    pub miniapp: MiniAppManifest,
}

/// Mini-app metadata section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniAppManifest {
    pub version: String,
    pub name: String,
    pub subtitle: String,
    pub description: String,
    pub icon_url: String,
    pub splash_image_url: String,
    pub splash_background_color: String,
    pub home_url: String,
    pub webhook_url: String,
    pub primary_category: String,
    pub tags: Vec<String>,
    pub hero_image_url: String,
}

impl Manifest {
    pub fn build(root_url: &str, account_association: Option<AccountAssociation>) -> Self {
        let root_url = root_url.trim_end_matches('/');
        Self {
            account_association,
            miniapp: MiniAppManifest {
                version: "1".to_string(),
                name: APP_NAME.to_string(),
                subtitle: "Join the waitlist".to_string(),
                description: "Join our community and get rewarded with daily token claims."
                    .to_string(),
                icon_url: format!("{root_url}/blue-icon.png"),
                splash_image_url: format!("{root_url}/blue-hero.png"),
                splash_background_color: "#000000".to_string(),
                home_url: root_url.to_string(),
                webhook_url: format!("{root_url}/api/webhook"),
                primary_category: "social".to_string(),
                tags: vec![
                    "waitlist".to_string(),
                    "rewards".to_string(),
                    "quickstart".to_string(),
                ],
                hero_image_url: format!("{root_url}/hero.png"),
            },
        }
    }
}

/// Serve the mini-app manifest.
#[utoipa::path(
    get,
    path = "/.well-known/farcaster.json",
    tag = "Manifest",
    responses((status = 200, description = "Mini-app manifest"))
)]
pub async fn manifest(State(state): State<AppState>) -> Json<Manifest> {
    Json(Manifest::build(
        &state.config.public_url,
        state.config.account_association.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_derives_urls_from_root() {
        let manifest = Manifest::build("https://beta-fun.example/", None);
        assert_eq!(manifest.miniapp.home_url, "https://beta-fun.example");
        assert_eq!(
            manifest.miniapp.webhook_url,
            "https://beta-fun.example/api/webhook"
        );
        assert!(manifest.account_association.is_none());
    }

    #[test]
    fn manifest_omits_association_when_unset() {
        let manifest = Manifest::build("https://beta-fun.example", None);
        let json = serde_json::to_value(&manifest).unwrap();
        assert!(json.get("accountAssociation").is_none());
        assert_eq!(json["miniapp"]["name"], "beta fun");
    }

    #[test]
    fn manifest_includes_association_when_configured() {
        let manifest = Manifest::build(
            "https://beta-fun.example",
            Some(AccountAssociation {
                header: "h".into(),
                payload: "p".into(),
                signature: "s".into(),
            }),
        );
        let json = serde_json::to_value(&manifest).unwrap();
        assert_eq!(json["accountAssociation"]["signature"], "s");
    }
}
