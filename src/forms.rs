//! Form validation.
//!
//! Every submitted form is checked synchronously; a failure is shown as a
//! destructive toast and nothing changes. [`ValidationError::title`] and the
//! `Display` text are the toast title and description.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use thiserror::Error;

use crate::catalog::{self, ServiceItem, TeamMember};
use crate::config::AppConfig;
use crate::session::{Identity, Role};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

static VERIFICATION_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{6}$").expect("valid code regex"));

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Preencha todos os campos para continuar")]
    MissingFields,

    #[error("Informe um email válido")]
    InvalidEmail,

    #[error("A nova senha e a confirmação não correspondem")]
    PasswordMismatch,

    #[error("Digite o código de 6 dígitos recebido via SMS")]
    InvalidVerificationCode,

    #[error("Informe um preço válido, por exemplo 60 ou 59,90")]
    InvalidPrice,

    #[error("Escolha uma data válida")]
    InvalidDate,

    #[error("Escolha um horário válido")]
    InvalidTime,

    #[error("{day}: o horário de fechamento deve ser depois da abertura")]
    ClosesBeforeOpening { day: &'static str },

    #[error("{day}: o intervalo deve ficar dentro do horário de atendimento")]
    BreakOutsideHours { day: &'static str },
}

impl ValidationError {
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::MissingFields => "Campos obrigatórios",
            ValidationError::InvalidEmail => "Email inválido",
            ValidationError::PasswordMismatch => "Senhas diferentes",
            ValidationError::InvalidVerificationCode => "Código inválido",
            ValidationError::InvalidPrice => "Preço inválido",
            ValidationError::InvalidDate | ValidationError::InvalidTime => "Data inválida",
            ValidationError::ClosesBeforeOpening { .. }
            | ValidationError::BreakOutsideHours { .. } => "Horário inválido",
        }
    }
}

fn require(fields: &[&str]) -> Result<(), ValidationError> {
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(ValidationError::MissingFields);
    }
    Ok(())
}

fn require_email(email: &str) -> Result<(), ValidationError> {
    if !EMAIL_RE.is_match(email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Display name derived from an email's local part: "maria.souza@x" -> "Maria Souza"
fn name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    local
        .split(['.', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl LoginForm {
    /// Identity to sign in with. Demo credentials map to their prepared
    /// identity; any other credentials are accepted as-is.
    pub fn into_identity(self, config: &AppConfig) -> Result<Identity, ValidationError> {
        require(&[&self.email, &self.password])?;

        if let Some(account) = config.demo_account(&self.email, &self.password) {
            return Ok(account.identity.clone());
        }
        let email = self.email.trim().to_string();
        Ok(Identity::new(
            catalog::new_id(),
            name_from_email(&email),
            email,
            self.role,
        ))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: Role,
}

impl RegisterForm {
    pub fn into_identity(self) -> Result<Identity, ValidationError> {
        require(&[&self.name, &self.email, &self.phone, &self.password])?;
        Ok(Identity::new(
            catalog::new_id(),
            self.name.trim(),
            self.email.trim(),
            self.role,
        ))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PasswordChangeForm {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

impl PasswordChangeForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&[&self.current, &self.new, &self.confirm])?;
        if self.new != self.confirm {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }

    /// Validate and, on success, clear every field for the next change.
    pub fn submit(&mut self) -> Result<(), ValidationError> {
        self.validate()?;
        *self = Self::default();
        Ok(())
    }
}

/// Six-digit SMS code for two-factor setup
pub fn validate_verification_code(code: &str) -> Result<(), ValidationError> {
    if !VERIFICATION_CODE_RE.is_match(code.trim()) {
        return Err(ValidationError::InvalidVerificationCode);
    }
    Ok(())
}

/// Accepts "60", "59.90" and "59,90"
pub fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    let price: f64 = raw
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| ValidationError::InvalidPrice)?;
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::InvalidPrice);
    }
    Ok(price)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub duration: String,
    pub category: String,
}

impl ServiceForm {
    pub fn from_service(service: &ServiceItem) -> Self {
        Self {
            name: service.name.clone(),
            description: service.description.clone(),
            price: format!("{:.2}", service.price),
            duration: service.duration.clone(),
            category: service.category.clone(),
        }
    }

    /// Name, price and duration are required; description is optional.
    pub fn into_service(self, id: String) -> Result<ServiceItem, ValidationError> {
        require(&[&self.name, &self.price, &self.duration])?;
        let price = parse_price(&self.price)?;
        let category = if self.category.trim().is_empty() {
            catalog::SERVICE_CATEGORIES[1].to_string()
        } else {
            self.category
        };
        Ok(ServiceItem {
            id,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            duration: self.duration.trim().to_string(),
            category,
            image: None,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemberForm {
    pub name: String,
    pub position: String,
    pub email: String,
    pub phone: String,
}

impl MemberForm {
    pub fn from_member(member: &TeamMember) -> Self {
        Self {
            name: member.name.clone(),
            position: member.position.clone(),
            email: member.email.clone(),
            phone: member.phone.clone(),
        }
    }

    pub fn into_member(self, id: String) -> Result<TeamMember, ValidationError> {
        require(&[&self.name, &self.position, &self.email, &self.phone])?;
        require_email(&self.email)?;
        Ok(TeamMember {
            id,
            name: self.name.trim().to_string(),
            position: self.position.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
        })
    }
}

/// Date and time picked on the booking panel (`YYYY-MM-DD`, `HH:MM`)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingForm {
    pub date: String,
    pub time: String,
}

impl BookingForm {
    pub fn parse(&self) -> Result<(NaiveDate, NaiveTime), ValidationError> {
        require(&[&self.date, &self.time])?;
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate)?;
        let time = NaiveTime::parse_from_str(self.time.trim(), "%H:%M")
            .map_err(|_| ValidationError::InvalidTime)?;
        Ok((date, time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.into(),
            password: password.into(),
            role: Role::Client,
        }
    }

    #[test]
    fn login_requires_both_fields() {
        let config = AppConfig::default();
        assert_eq!(
            login("", "x").into_identity(&config),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            login("a@x.com", "  ").into_identity(&config),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn login_accepts_text_that_is_not_an_email() {
        let identity = login("ana", "x")
            .into_identity(&AppConfig::default())
            .unwrap();
        assert_eq!(identity.name, "Ana");
        assert_eq!(identity.email, "ana");
        assert_eq!(identity.role, Role::Client);
    }

    #[test]
    fn demo_credentials_map_to_prepared_identity() {
        let config = AppConfig::default();
        let identity = login("salao@salaozap.com", "demo123")
            .into_identity(&config)
            .unwrap();
        assert_eq!(identity.role, Role::SalonOperator);
        assert_eq!(identity.id, "demo-salon");
    }

    #[test]
    fn any_other_credentials_are_accepted() {
        let config = AppConfig::default();
        let mut form = login("joana.lima@gmail.com", "whatever");
        form.role = Role::SalonOperator;
        let identity = form.into_identity(&config).unwrap();
        assert_eq!(identity.name, "Joana Lima");
        assert_eq!(identity.email, "joana.lima@gmail.com");
        assert_eq!(identity.role, Role::SalonOperator);
    }

    #[test]
    fn register_requires_every_field() {
        let form = RegisterForm {
            name: "Bia".into(),
            email: "bia@x.com".into(),
            phone: String::new(),
            password: "123".into(),
            role: Role::Client,
        };
        assert_eq!(form.clone().into_identity(), Err(ValidationError::MissingFields));

        let identity = RegisterForm {
            phone: "(11) 90000-0000".into(),
            ..form
        }
        .into_identity()
        .unwrap();
        assert_eq!(identity.name, "Bia");
    }

    #[test]
    fn password_change_checks_confirmation() {
        let mut form = PasswordChangeForm {
            current: "old".into(),
            new: "new1".into(),
            confirm: "new2".into(),
        };
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));
        form.confirm = "new1".into();
        assert_eq!(form.validate(), Ok(()));
        form.current.clear();
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn password_submit_clears_only_on_success() {
        let mut form = PasswordChangeForm {
            current: "old".into(),
            new: "new1".into(),
            confirm: "new2".into(),
        };
        assert_eq!(form.submit(), Err(ValidationError::PasswordMismatch));
        assert_eq!(form.new, "new1");

        form.confirm = "new1".into();
        assert_eq!(form.submit(), Ok(()));
        assert_eq!(form, PasswordChangeForm::default());
    }

    #[test]
    fn verification_code_is_six_digits() {
        assert!(validate_verification_code("123456").is_ok());
        assert!(validate_verification_code("12345").is_err());
        assert!(validate_verification_code("12345a").is_err());
        assert!(validate_verification_code("").is_err());
    }

    #[test]
    fn prices_accept_comma_decimals() {
        assert_eq!(parse_price("59,90"), Ok(59.90));
        assert_eq!(parse_price(" 60 "), Ok(60.0));
        assert_eq!(parse_price("-1"), Err(ValidationError::InvalidPrice));
        assert_eq!(parse_price("abc"), Err(ValidationError::InvalidPrice));
    }

    #[test]
    fn service_form_requires_name_price_duration() {
        let form = ServiceForm {
            name: "Escova".into(),
            price: "50".into(),
            ..Default::default()
        };
        assert_eq!(
            form.clone().into_service("x".into()),
            Err(ValidationError::MissingFields)
        );
        let service = ServiceForm {
            duration: "40 min".into(),
            ..form
        }
        .into_service("x".into())
        .unwrap();
        assert_eq!(service.price, 50.0);
        assert_eq!(service.category, "Cabelo");
    }

    #[test]
    fn member_form_round_trips_existing_member() {
        let member = catalog::team_members().remove(0);
        let edited = MemberForm::from_member(&member)
            .into_member(member.id.clone())
            .unwrap();
        assert_eq!(edited, member);
    }

    #[test]
    fn booking_requires_date_and_time() {
        let form = BookingForm {
            date: "2024-03-10".into(),
            time: String::new(),
        };
        assert_eq!(form.parse(), Err(ValidationError::MissingFields));

        let form = BookingForm {
            date: "2024-02-30".into(),
            time: "10:00".into(),
        };
        assert_eq!(form.parse(), Err(ValidationError::InvalidDate));

        let form = BookingForm {
            date: "2024-03-10".into(),
            time: "14:30".into(),
        };
        let (date, time) = form.parse().unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert_eq!(time, NaiveTime::from_hms_opt(14, 30, 0).unwrap());
    }

    #[test]
    fn error_titles_match_toasts() {
        assert_eq!(ValidationError::MissingFields.title(), "Campos obrigatórios");
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "A nova senha e a confirmação não correspondem"
        );
    }
}
