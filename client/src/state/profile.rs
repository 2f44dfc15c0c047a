//! Profile page state, edit-form validation, and the plan catalog.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use super::reports::required;
use crate::net::error::ApiError;
use crate::net::types::{PlanId, ProfileUpdate, UserProfile};

pub const PASSWORD_MISMATCH: &str = "As senhas não coincidem";
pub const CURRENT_PASSWORD_REQUIRED: &str = "Senha atual é obrigatória para alterar a senha";

/// A subscription plan offered on the upgrade screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub id: PlanId,
    pub name: &'static str,
    /// Monthly price in centavos.
    pub price_cents: u32,
    pub reports_limit: u32,
    pub features: &'static [&'static str],
    pub popular: bool,
}

pub static PLANS: [Plan; 2] = [
    Plan {
        id: PlanId::Free,
        name: "Plano Gratuito",
        price_cents: 0,
        reports_limit: 5,
        features: &["5 relatórios por mês", "Relatórios básicos", "Suporte por email"],
        popular: false,
    },
    Plan {
        id: PlanId::Premium,
        name: "Plano Premium",
        price_cents: 2990,
        reports_limit: 100,
        features: &[
            "100 relatórios por mês",
            "Relatórios avançados",
            "Prioridade no processamento",
            "Suporte prioritário",
            "Exportação em PDF",
            "Histórico completo",
        ],
        popular: true,
    },
];

impl Plan {
    pub fn find(id: PlanId) -> &'static Plan {
        PLANS.iter().find(|p| p.id == id).unwrap_or(&PLANS[0])
    }

    /// Price as shown on the plan card, e.g. `R$ 29,90`.
    pub fn price_label(&self) -> String {
        if self.price_cents == 0 {
            "Grátis".to_owned()
        } else {
            format!("R$ {},{:02}", self.price_cents / 100, self.price_cents % 100)
        }
    }
}

/// Profile edit form as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ProfileForm {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self { name: profile.name.clone(), email: profile.email.clone(), ..Self::default() }
    }

    pub fn clear_passwords(&mut self) {
        self.current_password.clear();
        self.new_password.clear();
        self.confirm_password.clear();
    }

    /// Build the update payload, checking the password change locally.
    ///
    /// # Errors
    ///
    /// `Validation` for an empty name/email, mismatched confirmation, or a
    /// password change without the current password.
    pub fn validate(&self) -> Result<ProfileUpdate, ApiError> {
        let name = required(&self.name, "Informe seu nome.")?;
        let email = required(&self.email, "Informe seu email.")?;
        let mut update = ProfileUpdate { name, email, current_password: None, new_password: None };

        if !self.new_password.is_empty() {
            if self.new_password != self.confirm_password {
                return Err(ApiError::validation(PASSWORD_MISMATCH));
            }
            if self.current_password.is_empty() {
                return Err(ApiError::validation(CURRENT_PASSWORD_REQUIRED));
            }
            update.current_password = Some(self.current_password.clone());
            update.new_password = Some(self.new_password.clone());
        }
        Ok(update)
    }
}

/// Profile page state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileState {
    pub profile: Option<UserProfile>,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    pub show_plans: bool,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self { profile: None, loading: true, saving: false, error: None, success: None, show_plans: false }
    }
}

impl ProfileState {
    /// Apply a profile fetch; returns the form prefill when a profile arrived.
    pub fn finish_load(&mut self, result: Result<Option<UserProfile>, ApiError>) -> Option<ProfileForm> {
        self.loading = false;
        match result {
            Ok(Some(profile)) => {
                let form = ProfileForm::from_profile(&profile);
                self.profile = Some(profile);
                Some(form)
            }
            Ok(None) => None,
            Err(e) => {
                self.error = Some(e.user_message());
                None
            }
        }
    }

    pub fn begin_save(&mut self) {
        self.saving = true;
        self.error = None;
        self.success = None;
    }

    pub fn current_plan(&self) -> Option<&'static Plan> {
        self.profile.as_ref().map(|p| Plan::find(p.plan))
    }

    /// Upgrade is offered only to free accounts.
    pub fn can_upgrade(&self) -> bool {
        self.profile.as_ref().is_some_and(|p| p.plan == PlanId::Free)
    }
}
