//! User-facing messages
//!
//! The engine returns a typed [`Message`]; rendering it into text happens
//! here so every surface shows the same wording. Portuguese (Brazil) is the
//! default locale.

use crate::error::{AppError, ErrorCode};
use crate::models::PlanType;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en")]
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::En => "en",
        }
    }
}

impl FromStr for Locale {
    type Err = AppError;

    /// Accepts `pt-BR`, `pt_BR`, `pt`, `en`, `en-US` and friends
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let language = lower.split(['-', '_']).next().unwrap_or_default();
        match language {
            "pt" => Ok(Locale::PtBr),
            "en" => Ok(Locale::En),
            _ => Err(AppError::with_message(
                ErrorCode::InvalidFormat,
                format!("Unsupported locale: {:?}", s),
            )),
        }
    }
}

/// Every user-visible reason the core can return
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    TableNotFound {
        table_number: u32,
    },
    AlreadySeated {
        table_number: u32,
    },
    TableFull {
        table_number: u32,
        occupied: u32,
        capacity: u32,
    },
    TableAvailable,
    EventLimitReached {
        plan: PlanType,
        limit: u32,
    },
    EventCreationAllowed,
    GuestLimitExceeded {
        plan: PlanType,
        limit: u32,
        proposed: u32,
    },
    GuestsWithinLimit,
    GuestNotFound,
    CheckedIn {
        name: String,
        table_number: Option<u32>,
    },
    AlreadyCheckedIn {
        name: String,
    },
}

impl Message {
    pub fn render(&self, locale: Locale) -> String {
        match locale {
            Locale::PtBr => self.render_pt_br(),
            Locale::En => self.render_en(),
        }
    }

    fn render_pt_br(&self) -> String {
        match self {
            Message::TableNotFound { table_number } => {
                format!("Mesa {} não existe", table_number)
            }
            Message::AlreadySeated { table_number } => {
                format!("Convidado já está na mesa {}", table_number)
            }
            Message::TableFull {
                table_number,
                occupied,
                capacity,
            } => format!(
                "Mesa {} está cheia ({}/{})",
                table_number, occupied, capacity
            ),
            Message::TableAvailable => "Mesa disponível".to_string(),
            Message::EventLimitReached { plan, limit } => format!(
                "O plano {} permite apenas {} evento(s) por período",
                plan, limit
            ),
            Message::EventCreationAllowed => "Evento pode ser criado".to_string(),
            Message::GuestLimitExceeded {
                plan,
                limit,
                proposed,
            } => format!(
                "O plano {} permite no máximo {} convidados ({} solicitados)",
                plan, limit, proposed
            ),
            Message::GuestsWithinLimit => "Convidados dentro do limite do plano".to_string(),
            Message::GuestNotFound => "Convidado não encontrado".to_string(),
            Message::CheckedIn {
                name,
                table_number: Some(n),
            } => format!("Bem-vindo(a), {}! Sua mesa é a {}", name, n),
            Message::CheckedIn {
                name,
                table_number: None,
            } => format!("Bem-vindo(a), {}! Sua mesa ainda não foi definida", name),
            Message::AlreadyCheckedIn { name } => format!("{} já fez check-in", name),
        }
    }

    fn render_en(&self) -> String {
        match self {
            Message::TableNotFound { table_number } => {
                format!("Table {} does not exist", table_number)
            }
            Message::AlreadySeated { table_number } => {
                format!("Guest is already seated at table {}", table_number)
            }
            Message::TableFull {
                table_number,
                occupied,
                capacity,
            } => format!("Table {} is full ({}/{})", table_number, occupied, capacity),
            Message::TableAvailable => "Table available".to_string(),
            Message::EventLimitReached { plan, limit } => format!(
                "The {} plan allows only {} event(s) per period",
                plan, limit
            ),
            Message::EventCreationAllowed => "Event can be created".to_string(),
            Message::GuestLimitExceeded {
                plan,
                limit,
                proposed,
            } => format!(
                "The {} plan allows at most {} guests ({} requested)",
                plan, limit, proposed
            ),
            Message::GuestsWithinLimit => "Guests within plan limit".to_string(),
            Message::GuestNotFound => "Guest not found".to_string(),
            Message::CheckedIn {
                name,
                table_number: Some(n),
            } => format!("Welcome, {}! Your table is {}", name, n),
            Message::CheckedIn {
                name,
                table_number: None,
            } => format!("Welcome, {}! Your table has not been assigned yet", name),
            Message::AlreadyCheckedIn { name } => format!("{} has already checked in", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse() {
        assert_eq!("pt-BR".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("pt_br".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("en-US".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::default(), Locale::PtBr);
    }

    #[test]
    fn test_locale_serde() {
        assert_eq!(serde_json::to_string(&Locale::PtBr).unwrap(), "\"pt-BR\"");
        let locale: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(locale, Locale::En);
    }

    #[test]
    fn test_table_full_cites_ratio() {
        let msg = Message::TableFull {
            table_number: 1,
            occupied: 1,
            capacity: 1,
        };
        assert_eq!(msg.render(Locale::PtBr), "Mesa 1 está cheia (1/1)");
        assert_eq!(msg.render(Locale::En), "Table 1 is full (1/1)");
    }

    #[test]
    fn test_guest_limit_cites_number() {
        let msg = Message::GuestLimitExceeded {
            plan: PlanType::Essential,
            limit: 200,
            proposed: 201,
        };
        let text = msg.render(Locale::PtBr);
        assert!(text.contains("200"));
        assert!(text.contains("ESSENTIAL"));
    }

    #[test]
    fn test_check_in_without_table() {
        let msg = Message::CheckedIn {
            name: "Ana".into(),
            table_number: None,
        };
        assert_eq!(
            msg.render(Locale::En),
            "Welcome, Ana! Your table has not been assigned yet"
        );
    }
}
