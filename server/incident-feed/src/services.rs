//! Service-health catalog shown as cards on the dashboard.

use serde::{Deserialize, Serialize};

use crate::types::BadgeTone;

/// Ordered from healthiest to worst so `max` gives the overall status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
  Operational,
  Partial,
  Down,
}

impl ServiceStatus {
  pub fn badge_text(self) -> &'static str {
    match self {
      Self::Operational => "Operational",
      Self::Partial => "Partial",
      Self::Down => "Down",
    }
  }

  pub fn tone(self) -> BadgeTone {
    match self {
      Self::Operational => BadgeTone::Success,
      Self::Partial => BadgeTone::Warning,
      Self::Down => BadgeTone::Danger,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth {
  pub id: String,
  pub name: String,
  pub description: String,
  pub status: ServiceStatus,
  pub icon: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub href: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceCard {
  #[serde(flatten)]
  pub service: ServiceHealth,
  pub badge_text: String,
  pub tone: BadgeTone,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceBoard {
  pub overall: ServiceStatus,
  pub services: Vec<ServiceCard>,
}

/// Worst status across the catalog; an empty catalog is operational.
pub fn overall_status(services: &[ServiceHealth]) -> ServiceStatus {
  services
    .iter()
    .map(|s| s.status)
    .max()
    .unwrap_or(ServiceStatus::Operational)
}

pub fn board(services: &[ServiceHealth]) -> ServiceBoard {
  ServiceBoard {
    overall: overall_status(services),
    services: services
      .iter()
      .map(|s| ServiceCard {
        service: s.clone(),
        badge_text: s.status.badge_text().to_string(),
        tone: s.status.tone(),
      })
      .collect(),
  }
}

fn entry(id: &str, name: &str, description: &str, status: ServiceStatus, icon: &str, href: &str) -> ServiceHealth {
  ServiceHealth {
    id: id.into(),
    name: name.into(),
    description: description.into(),
    status,
    icon: icon.into(),
    href: Some(href.into()),
  }
}

/// Services of the platform as shown on the home page.
pub fn default_catalog() -> Vec<ServiceHealth> {
  vec![
    entry(
      "svc-users",
      "User Service",
      "Gestion des comptes, rôles et authentification",
      ServiceStatus::Operational,
      "User",
      "/users",
    ),
    entry(
      "svc-incidents",
      "Incident Service",
      "Création, suivi, assignation et timeline des incidents",
      ServiceStatus::Partial,
      "AlertTriangle",
      "/incidents",
    ),
    entry(
      "svc-comms",
      "Communication Service",
      "Annonces publiques, webhooks et abonnements email",
      ServiceStatus::Down,
      "Megaphone",
      "/comms",
    ),
    entry(
      "svc-csp",
      "CSP Ingestor",
      "Surveillance des status pages de fournisseurs cloud",
      ServiceStatus::Operational,
      "Cloud",
      "/csp",
    ),
    entry(
      "svc-flags",
      "Flags Service",
      "Feature flags et toggle pour fonctionnalités expérimentales",
      ServiceStatus::Operational,
      "Flag",
      "/flags",
    ),
  ]
}
