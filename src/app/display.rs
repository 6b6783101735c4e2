use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use strum::IntoEnumIterator;

use super::utils::format_brl;
use crate::{
    error::Result,
    models::{CurrencyPair, QuoteSnapshot},
};

pub const TITLE: &str = "Cotações em Tempo Real";
pub const BUTTON_IDLE: &str = "Atualizar Cotações";
pub const BUTTON_UPDATED: &str = "Cotações Atualizadas!";

/// How long the button keeps its acknowledgement after a successful fetch.
pub const ACK_DELAY: Duration = Duration::from_millis(2_000);

/// What the three value fields currently show.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldsState {
    Loading,
    Populated(QuoteSnapshot),
    Failed(String),
}

#[derive(Debug)]
pub struct DisplayState {
    fields: FieldsState,
    ack_until: Option<Instant>,
    last_updated: Option<DateTime<Local>>,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayState {
    pub fn new() -> Self {
        Self {
            fields: FieldsState::Loading,
            ack_until: None,
            last_updated: None,
        }
    }

    pub fn fields(&self) -> &FieldsState {
        &self.fields
    }

    pub fn last_updated(&self) -> Option<&DateTime<Local>> {
        self.last_updated.as_ref()
    }

    /// Replaces the fields with the outcome of a fetch completed at `now`.
    ///
    /// A success starts the acknowledgement unless one is already showing;
    /// later successes never push an earlier revert back.
    pub fn apply(&mut self, result: Result<QuoteSnapshot>, now: Instant) {
        match result {
            Ok(snapshot) => {
                self.fields = FieldsState::Populated(snapshot);
                self.last_updated = Some(Local::now());
                if self.ack_until.is_none() {
                    self.ack_until = Some(now + ACK_DELAY);
                }
            }
            Err(e) => self.fields = FieldsState::Failed(e.to_string()),
        }
    }

    /// Reverts the button label once its deadline has passed. Returns whether
    /// anything changed.
    pub fn expire_ack(&mut self, now: Instant) -> bool {
        match self.ack_until {
            Some(deadline) if deadline <= now => {
                self.ack_until = None;
                true
            }
            _ => false,
        }
    }

    pub fn ack_deadline(&self) -> Option<Instant> {
        self.ack_until
    }

    pub fn button_label(&self) -> &'static str {
        if self.ack_until.is_some() {
            BUTTON_UPDATED
        } else {
            BUTTON_IDLE
        }
    }

    pub fn field_text(&self, pair: CurrencyPair) -> String {
        match &self.fields {
            FieldsState::Loading => format!("{}: Carregando...", pair.label()),
            FieldsState::Populated(snapshot) => {
                format!("{}: {}", pair.label(), format_brl(snapshot.rate(pair)))
            }
            FieldsState::Failed(message) => format!("{}: Erro: {}", pair.label(), message),
        }
    }

    pub fn field_texts(&self) -> Vec<String> {
        CurrencyPair::iter().map(|p| self.field_text(p)).collect()
    }
}
