//! Route-level access control.
//!
//! [`evaluate`] is a pure function of the session's loading flag, the current
//! role (if any) and the destination's [`Access`] requirement. A loading
//! session never redirects, so a stored session is not bounced to the login
//! screen before the startup read completes.

use crate::session::Role;

/// Who may open a destination
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Anyone, signed in or not
    Public,
    /// Any signed-in user
    Authenticated,
    /// Signed-in users whose role is listed
    Roles(&'static [Role]),
}

impl Access {
    pub const SALON_ONLY: Access = Access::Roles(&[Role::SalonOperator]);
    pub const CLIENT_ONLY: Access = Access::Roles(&[Role::Client]);

    pub fn permits(&self, role: Role) -> bool {
        match self {
            Access::Public | Access::Authenticated => true,
            Access::Roles(roles) => roles.contains(&role),
        }
    }
}

/// Where a denied navigation is sent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectTarget {
    /// Entry route, which shows the login screen when signed out
    Login,
    Unauthorized,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session not read yet: show a neutral placeholder
    Loading,
    Redirect(RedirectTarget),
    Render,
}

pub fn evaluate(loading: bool, role: Option<Role>, access: Access) -> GateDecision {
    if access == Access::Public {
        return GateDecision::Render;
    }
    if loading {
        return GateDecision::Loading;
    }
    match role {
        None => GateDecision::Redirect(RedirectTarget::Login),
        Some(role) if !access.permits(role) => {
            GateDecision::Redirect(RedirectTarget::Unauthorized)
        }
        Some(_) => GateDecision::Render,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_defers_every_protected_decision() {
        for role in [None, Some(Role::Client), Some(Role::SalonOperator)] {
            assert_eq!(
                evaluate(true, role, Access::Authenticated),
                GateDecision::Loading
            );
            assert_eq!(evaluate(true, role, Access::SALON_ONLY), GateDecision::Loading);
        }
    }

    #[test]
    fn public_destinations_always_render() {
        assert_eq!(evaluate(true, None, Access::Public), GateDecision::Render);
        assert_eq!(evaluate(false, None, Access::Public), GateDecision::Render);
    }

    #[test]
    fn signed_out_redirects_to_login() {
        assert_eq!(
            evaluate(false, None, Access::Authenticated),
            GateDecision::Redirect(RedirectTarget::Login)
        );
        assert_eq!(
            evaluate(false, None, Access::SALON_ONLY),
            GateDecision::Redirect(RedirectTarget::Login)
        );
    }

    #[test]
    fn role_mismatch_redirects_to_unauthorized() {
        assert_eq!(
            evaluate(false, Some(Role::Client), Access::SALON_ONLY),
            GateDecision::Redirect(RedirectTarget::Unauthorized)
        );
        assert_eq!(
            evaluate(false, Some(Role::SalonOperator), Access::CLIENT_ONLY),
            GateDecision::Redirect(RedirectTarget::Unauthorized)
        );
    }

    #[test]
    fn permitted_roles_render() {
        assert_eq!(
            evaluate(false, Some(Role::Client), Access::CLIENT_ONLY),
            GateDecision::Render
        );
        assert_eq!(
            evaluate(false, Some(Role::SalonOperator), Access::SALON_ONLY),
            GateDecision::Render
        );
        assert_eq!(
            evaluate(false, Some(Role::SalonOperator), Access::Roles(&Role::ALL)),
            GateDecision::Render
        );
    }
}
