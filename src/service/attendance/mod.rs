//! Attendance recording workflow.
//!
//! A run walks through these stages, stopping at the first rejection:
//!
//! 1. The invoking channel must be a voice channel.
//! 2. At least `MINIMUM_ATTENDEES` members must be connected.
//! 3. The channel must not be inside its `COOLDOWN_HOURS` window.
//! 4. The requester must have a verified main-cohort address.
//! 5. At least one participant must own a character in some cohort.
//!
//! The badge drop is then submitted for the main-cohort character accounts, and the ledger
//! row is written only after the receipt reports success. Every rejection emits exactly one
//! notification. Infrastructure errors are returned to the caller, which reports them.

pub mod cooldown;
pub mod eligibility;
pub mod ledger;
pub mod port;
pub mod reward;

#[cfg(test)]
pub(crate) mod test;

use alloy::primitives::TxHash;
use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use std::{sync::Arc, time::Duration};

use crate::{
    error::AppError,
    model::{
        attendance::AttendanceRequest,
        cohort::{CharacterSheetsConfig, Cohort},
        notification::AttendanceNotification,
    },
};

use self::{
    cooldown::CooldownGate,
    eligibility::EligibilityResolver,
    ledger::LedgerRecorder,
    port::{BadgeDropper, CharacterDirectory, MemberRegistry, OperationalLog, ReplySink},
    reward::RewardSubmitter,
};

/// Length of the per-channel cooldown window.
pub const COOLDOWN_HOURS: i64 = 24;

/// Minimum number of connected voice members.
pub const MINIMUM_ATTENDEES: usize = 6;

/// Collaborators and settings shared by every run.
pub struct AttendanceDeps {
    pub registry: Arc<dyn MemberRegistry>,
    pub directory: Arc<dyn CharacterDirectory>,
    pub dropper: Arc<dyn BadgeDropper>,
    pub log: Arc<dyn OperationalLog>,
    pub character_sheets: CharacterSheetsConfig,
    pub confirmation_timeout: Duration,
}

/// Terminal state of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceOutcome {
    /// No explorer is configured for the main cohort; nothing was sent to the user.
    ExplorerUrlMissing,
    NotVoiceChannel,
    NotEnoughAttendees,
    OnCooldown {
        end_time: Option<DateTime<Utc>>,
    },
    NotAMember,
    NoCharactersFound,
    /// Characters exist, but none in the rewarded cohort.
    NothingToSubmit,
    TransactionFailed {
        tx_hash: TxHash,
    },
    Recorded {
        tx_hash: TxHash,
        /// Discord IDs of the rewarded voice members.
        rewarded: Vec<u64>,
    },
}

pub struct AttendanceService<'a> {
    db: &'a DatabaseConnection,
    deps: &'a AttendanceDeps,
}

impl<'a> AttendanceService<'a> {
    pub fn new(db: &'a DatabaseConnection, deps: &'a AttendanceDeps) -> Self {
        Self { db, deps }
    }

    /// Runs the attendance workflow for one invocation.
    ///
    /// # Arguments
    /// - `request` - Requester, invoking channel and voice snapshot
    /// - `sink` - Receives the run's user-facing notifications in order
    ///
    /// # Returns
    /// - `Ok(AttendanceOutcome)` - Terminal state reached, including business rejections
    /// - `Err(AppError)` - Ledger, registry, subgraph, chain or Discord failure. No ledger
    ///   row is written on this path.
    pub async fn record_attendance(
        &self,
        request: &AttendanceRequest,
        sink: &dyn ReplySink,
    ) -> Result<AttendanceOutcome, AppError> {
        let main = self.deps.character_sheets.get(Cohort::Main);

        if main.explorer_url.is_none() {
            let message = format!(
                "No explorer URL configured for the {} cohort on {:?}; attendance recording is disabled",
                Cohort::Main,
                self.deps.character_sheets.environment
            );
            tracing::error!("{}", message);
            self.deps.log.error(&message).await;
            return Ok(AttendanceOutcome::ExplorerUrlMissing);
        }

        let Some(session) = request.voice_session.as_ref() else {
            tracing::debug!(
                "{} invoked attendance recording outside a voice channel ({})",
                request.requester.tag,
                request.channel_id
            );
            sink.notify(AttendanceNotification::NotVoiceChannel).await?;
            return Ok(AttendanceOutcome::NotVoiceChannel);
        };

        tracing::info!(
            "{} requested attendance recording in channel {} with {} members",
            request.requester.tag,
            session.channel_id,
            session.members.len()
        );

        if !EligibilityResolver::has_quorum(session) {
            sink.notify(AttendanceNotification::NotEnoughAttendees {
                minimum: MINIMUM_ATTENDEES,
            })
            .await?;
            return Ok(AttendanceOutcome::NotEnoughAttendees);
        }

        let cooldown = CooldownGate::new(self.db)
            .check(session.channel_id, Utc::now())
            .await?;

        if cooldown.blocks(session.channel_id) {
            sink.notify(AttendanceNotification::CooldownActive {
                end_time: cooldown.cooldown_end_time,
            })
            .await?;
            return Ok(AttendanceOutcome::OnCooldown {
                end_time: cooldown.cooldown_end_time,
            });
        }

        let resolver = EligibilityResolver::new(
            self.deps.registry.as_ref(),
            self.deps.directory.as_ref(),
            &self.deps.character_sheets,
        );

        let identities = resolver.resolve_identities(&session.members).await?;

        if identities
            .address(Cohort::Main, &request.requester.tag)
            .is_none()
        {
            sink.notify(AttendanceNotification::NotAMember).await?;
            return Ok(AttendanceOutcome::NotAMember);
        }

        let eligibility = resolver.resolve_characters(identities).await?;

        if eligibility.all_accounts().is_empty() {
            sink.notify(AttendanceNotification::NoCharactersFound {
                member_ids: session.members.iter().map(|m| m.discord_id).collect(),
            })
            .await?;
            return Ok(AttendanceOutcome::NoCharactersFound);
        }

        let accounts = eligibility.reward_accounts();
        if accounts.is_empty() {
            tracing::warn!(
                "Channel {} has characters only outside the {} cohort; no badge drop submitted",
                session.channel_id,
                Cohort::Main
            );
            return Ok(AttendanceOutcome::NothingToSubmit);
        }

        sink.notify(AttendanceNotification::Recording).await?;

        let submitter = RewardSubmitter::new(
            self.deps.dropper.as_ref(),
            self.deps.confirmation_timeout,
        );
        let pending = submitter.submit(&accounts).await?;
        let tx_hash = pending.tx_hash();
        let tx_url = main
            .tx_url(&tx_hash)
            .unwrap_or_else(|| tx_hash.to_string());

        sink.notify(AttendanceNotification::TxPending {
            tx_url: tx_url.clone(),
        })
        .await?;

        if !submitter.confirm(pending).await? {
            tracing::warn!("Attendance badge drop {} reverted", tx_hash);
            sink.notify(AttendanceNotification::TxFailed { tx_url })
                .await?;
            return Ok(AttendanceOutcome::TransactionFailed { tx_hash });
        }

        LedgerRecorder::new(self.db)
            .record(
                session.channel_id,
                cooldown.last_sender_discord_id,
                &request.requester,
                main,
                tx_hash,
            )
            .await?;

        let rewarded = session
            .members
            .iter()
            .filter(|member| eligibility.is_rewarded(&member.tag))
            .map(|member| member.discord_id)
            .collect::<Vec<_>>();

        tracing::info!(
            "Recorded attendance in channel {} for {} members ({})",
            session.channel_id,
            rewarded.len(),
            tx_hash
        );

        sink.notify(AttendanceNotification::TxSucceeded {
            tx_url,
            sender_id: request.requester.discord_id,
            rewarded_ids: rewarded.clone(),
        })
        .await?;

        Ok(AttendanceOutcome::Recorded { tx_hash, rewarded })
    }
}
