use log::info;
use roster_business::admin_users::workflow;
use roster_business::{AppConfig, BusinessConfig, CurrentUser, Session};
use roster_states::StateCtx;

/// The main application state.
pub struct State {
    /// Page states, computes and commands.
    pub ctx: StateCtx,
    /// `None` once the operator logged out.
    pub session: Option<Session>,
    config: BusinessConfig,
}

impl State {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_session(config.business_config(), config.session())
    }

    /// Requests are authorised with the session's token.
    pub fn with_session(config: BusinessConfig, session: Session) -> Self {
        let config = config.with_token(session.token.clone());
        Self {
            ctx: page_ctx(config.clone()),
            session: Some(session),
            config,
        }
    }

    /// State pointing at a mock server, signed in as a test operator.
    pub fn test(base_url: impl AsRef<str>) -> Self {
        Self::with_session(
            BusinessConfig::new(base_url),
            Session {
                current_user: CurrentUser {
                    name: "Test Admin".to_owned(),
                    emp_no: "A000".to_owned(),
                },
                token: Some("test_token".to_owned()),
            },
        )
    }

    /// Tear the page down and forget the session.
    ///
    /// In-flight requests are cancelled; their results are never applied.
    pub fn sign_out(&mut self) {
        if let Some(session) = self.session.take() {
            info!("{} logged out", session.current_user.display_name());
        }
        self.ctx.shutdown();
        self.ctx = page_ctx(self.config.clone().with_token(None));
    }
}

fn page_ctx(config: BusinessConfig) -> StateCtx {
    let mut ctx = StateCtx::new();
    workflow::register(&mut ctx, config);
    ctx
}
