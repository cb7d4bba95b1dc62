//! Create / update / reset-password / delete, submitted from the dialogs.
//!
//! A dialog validates its form, stores the request in [`MutationInput`] and
//! dispatches [`SubmitUserMutationCommand`]. Progress and failure are kept in
//! [`UserMutationCompute`], which only the dialogs read.

use std::any::Any;

use log::{info, warn};
use roster_states::{
    CancellationToken, Command, CommandFuture, CommandSnapshot, Compute, State, Updater,
};

use crate::api::{self, ApiError};
use crate::{BusinessConfig, CreateUserRequest, ResetPasswordRequest, UpdateUserRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    ResetPassword,
    Delete,
}

impl MutationKind {
    fn fallback_message(self) -> &'static str {
        match self {
            Self::Create => "Failed to create the user.",
            Self::Update => "Failed to update the user.",
            Self::ResetPassword => "Failed to reset the password.",
            Self::Delete => "Failed to delete the user.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserMutation {
    Create(CreateUserRequest),
    Update {
        user_id: i64,
        body: UpdateUserRequest,
    },
    ResetPassword {
        user_id: i64,
        body: ResetPasswordRequest,
    },
    Delete {
        user_id: i64,
    },
}

impl UserMutation {
    pub fn kind(&self) -> MutationKind {
        match self {
            Self::Create(_) => MutationKind::Create,
            Self::Update { .. } => MutationKind::Update,
            Self::ResetPassword { .. } => MutationKind::ResetPassword,
            Self::Delete { .. } => MutationKind::Delete,
        }
    }

    async fn send(&self, config: &BusinessConfig) -> Result<(), ApiError> {
        match self {
            Self::Create(body) => api::create_user(config, body).await,
            Self::Update { user_id, body } => api::update_user(config, *user_id, body).await,
            Self::ResetPassword { user_id, body } => {
                api::reset_password(config, *user_id, body).await
            }
            Self::Delete { user_id } => api::delete_user(config, *user_id).await,
        }
    }
}

/// The request the next [`SubmitUserMutationCommand`] sends.
#[derive(Debug, Clone, Default)]
pub struct MutationInput {
    pub pending: Option<UserMutation>,
}

impl State for MutationInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MutationStatus {
    #[default]
    Idle,
    InFlight(MutationKind),
    Succeeded(MutationKind),
    Failed {
        kind: MutationKind,
        message: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct UserMutationCompute {
    pub status: MutationStatus,
}

impl UserMutationCompute {
    pub fn is_in_flight(&self) -> bool {
        matches!(self.status, MutationStatus::InFlight(_))
    }

    pub fn succeeded(&self, kind: MutationKind) -> bool {
        self.status == MutationStatus::Succeeded(kind)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            MutationStatus::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl State for UserMutationCompute {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Compute for UserMutationCompute {}

#[derive(Debug, Default)]
pub struct SubmitUserMutationCommand;

impl Command for SubmitUserMutationCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: Updater,
        _cancel: CancellationToken,
    ) -> CommandFuture {
        let config = snap.state::<BusinessConfig>().clone();
        let pending = snap.state::<MutationInput>().pending.clone();

        Box::pin(async move {
            let Some(mutation) = pending else {
                warn!("SubmitUserMutationCommand dispatched without a pending mutation");
                return;
            };
            let kind = mutation.kind();

            updater.set(UserMutationCompute {
                status: MutationStatus::InFlight(kind),
            });

            let status = match mutation.send(&config).await {
                Ok(()) => {
                    info!("{kind:?} succeeded");
                    MutationStatus::Succeeded(kind)
                }
                Err(err) => {
                    warn!("{kind:?} failed: {err}");
                    MutationStatus::Failed {
                        kind,
                        message: err
                            .user_message()
                            .unwrap_or(kind.fallback_message())
                            .to_owned(),
                    }
                }
            };

            updater.set(UserMutationCompute { status });
        })
    }
}
