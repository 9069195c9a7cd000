//! Which screen the site shows, as a value plus pure transitions.

use serde::Serialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::fixtures::Role;

#[derive(
    Serialize, EnumString, Display, VariantArray, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum View {
    #[default]
    Home,
    Portal,
    Admin,
    Funnel,
    Login,
    SignUp,
}

#[derive(Serialize, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub view: View,
    pub role: Role,
    pub login_target: Role,
}

impl Session {
    pub fn go_home(self) -> Self {
        Self {
            view: View::Home,
            ..self
        }
    }

    pub fn start_funnel(self) -> Self {
        Self {
            view: View::Funnel,
            ..self
        }
    }

    pub fn initiate_login(self, target: Role) -> Self {
        Self {
            view: View::Login,
            login_target: target,
            ..self
        }
    }

    /// Login always succeeds; the session takes the role it asked for.
    pub fn login_succeeded(self) -> Self {
        let view = match self.login_target {
            Role::Admin => View::Admin,
            _ => View::Portal,
        };

        Self {
            view,
            role: self.login_target,
            ..self
        }
    }

    pub fn start_sign_up(self) -> Self {
        Self {
            view: View::SignUp,
            ..self
        }
    }

    pub fn sign_up_succeeded(self) -> Self {
        Self {
            view: View::Portal,
            role: Role::Client,
            ..self
        }
    }

    pub fn logout(self) -> Self {
        Self {
            view: View::Home,
            role: Role::Guest,
            ..self
        }
    }
}
