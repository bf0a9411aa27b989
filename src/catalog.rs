//! Mock catalogs (services, salons, appointments, team) and browse filters.
//!
//! There is no backend: every page starts from these records and keeps its
//! edits in page state.

use chrono::{Datelike, NaiveDate, NaiveTime};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Category chip that disables category filtering
pub const ALL_CATEGORIES: &str = "Todos";

pub const SERVICE_CATEGORIES: &[&str] = &[
    ALL_CATEGORIES,
    "Cabelo",
    "Unhas",
    "Barba",
    "Estética",
    "Maquiagem",
];

/// Random lowercase identifier for records created in the UI
pub fn new_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect()
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Bookable service
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub duration: String,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl ServiceItem {
    pub fn price_label(&self) -> String {
        format_price(self.price)
    }
}

/// "R$ 60,00"
pub fn format_price(price: f64) -> String {
    format!("R$ {:.2}", price).replace('.', ",")
}

fn service(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    duration: &str,
    category: &str,
) -> ServiceItem {
    ServiceItem {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        price,
        duration: duration.into(),
        category: category.into(),
        image: None,
    }
}

pub fn services() -> Vec<ServiceItem> {
    vec![
        service("1", "Corte de Cabelo", "Corte profissional para todos os tipos de cabelo", 60.0, "45 min", "Cabelo"),
        service("2", "Coloração", "Tinturas de alta qualidade e durabilidade", 120.0, "1h 30min", "Cabelo"),
        service("3", "Manicure", "Tratamento completo para unhas", 45.0, "40 min", "Unhas"),
        service("4", "Hidratação", "Tratamento profundo para cabelos danificados", 80.0, "1h", "Cabelo"),
        service("5", "Barba Completa", "Tratamento e modelagem de barba", 35.0, "30 min", "Barba"),
        service("6", "Limpeza de Pele", "Tratamento completo de limpeza facial", 90.0, "50 min", "Estética"),
        service("7", "Maquiagem Social", "Maquiagem para eventos e ocasiões especiais", 120.0, "1h", "Maquiagem"),
    ]
}

/// Services offered by the signed-in salon (management page seed)
pub fn salon_services() -> Vec<ServiceItem> {
    vec![
        service("1", "Corte de Cabelo", "Corte feminino ou masculino com lavagem", 60.0, "45 min", "Cabelo"),
        service("2", "Coloração", "Coloração completa com produtos premium", 120.0, "1h 30min", "Cabelo"),
    ]
}

/// Category chip and free-text search (name or description, case-insensitive)
pub fn filter_services(services: &[ServiceItem], category: &str, term: &str) -> Vec<ServiceItem> {
    let term = term.trim().to_lowercase();
    services
        .iter()
        .filter(|s| category == ALL_CATEGORIES || s.category == category)
        .filter(|s| {
            term.is_empty() || contains_ci(&s.name, &term) || contains_ci(&s.description, &term)
        })
        .cloned()
        .collect()
}

/// Salon listed on the search page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalonItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub distance_km: f64,
    pub rating: f64,
    pub reviews: u32,
    pub services: Vec<String>,
    pub phone: String,
    pub open_now: bool,
}

impl SalonItem {
    pub fn distance_label(&self) -> String {
        format!("{:.1} km", self.distance_km)
    }
}

#[allow(clippy::too_many_arguments)]
fn salon(
    id: &str,
    name: &str,
    description: &str,
    address: &str,
    distance_km: f64,
    rating: f64,
    reviews: u32,
    services: &[&str],
    phone: &str,
    open_now: bool,
) -> SalonItem {
    SalonItem {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        address: address.into(),
        distance_km,
        rating,
        reviews,
        services: services.iter().map(|s| s.to_string()).collect(),
        phone: phone.into(),
        open_now,
    }
}

pub fn salons() -> Vec<SalonItem> {
    vec![
        salon(
            "1",
            "Salão Belle Hair",
            "Salão especializado em cortes femininos e coloração",
            "Rua das Flores, 123 - Centro",
            1.2,
            4.8,
            156,
            &["Corte", "Coloração", "Manicure"],
            "(11) 99876-5432",
            true,
        ),
        salon(
            "2",
            "Barbearia Vintage",
            "Barbearia tradicional com ambiente vintage",
            "Av. Paulista, 1578 - Bela Vista",
            2.5,
            4.6,
            98,
            &["Corte Masculino", "Barba", "Tratamento Capilar"],
            "(11) 99765-4321",
            true,
        ),
        salon(
            "3",
            "Studio Nail Art",
            "Especializado em unhas decoradas e tratamentos",
            "Rua Augusta, 789 - Consolação",
            3.8,
            4.9,
            203,
            &["Manicure", "Pedicure", "Nail Art"],
            "(11) 98765-4321",
            false,
        ),
        salon(
            "4",
            "Spa & Beauty Center",
            "Centro de estética e bem-estar completo",
            "Al. Santos, 456 - Jardim Paulista",
            4.1,
            4.7,
            175,
            &["Massagem", "Limpeza de Pele", "Hidratação"],
            "(11) 97654-3210",
            true,
        ),
    ]
}

/// Salon search filter tab
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SalonFilter {
    #[default]
    All,
    /// Ascending distance
    Nearby,
    /// Descending rating
    Rating,
    /// Open right now
    Open,
}

impl SalonFilter {
    pub const ALL: [SalonFilter; 4] = [
        SalonFilter::All,
        SalonFilter::Nearby,
        SalonFilter::Rating,
        SalonFilter::Open,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SalonFilter::All => "Todos",
            SalonFilter::Nearby => "Próximos",
            SalonFilter::Rating => "Avaliados",
            SalonFilter::Open => "Abertos",
        }
    }

    /// Completes "Mostrando salões ..."
    pub fn description(&self) -> &'static str {
        match self {
            SalonFilter::All => "todos",
            SalonFilter::Nearby => "mais próximos",
            SalonFilter::Rating => "melhor avaliados",
            SalonFilter::Open => "abertos agora",
        }
    }
}

/// Search by name, description or offered service, then apply the filter.
/// Returns a new list; the catalog order is left untouched.
pub fn search_salons(salons: &[SalonItem], term: &str, filter: SalonFilter) -> Vec<SalonItem> {
    let term = term.trim().to_lowercase();
    let mut found: Vec<SalonItem> = salons
        .iter()
        .filter(|s| {
            term.is_empty()
                || contains_ci(&s.name, &term)
                || contains_ci(&s.description, &term)
                || s.services.iter().any(|svc| contains_ci(svc, &term))
        })
        .filter(|s| filter != SalonFilter::Open || s.open_now)
        .cloned()
        .collect();

    match filter {
        SalonFilter::Nearby => found.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km)),
        SalonFilter::Rating => found.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SalonFilter::All | SalonFilter::Open => {}
    }
    found
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 3] = [
        AppointmentStatus::Upcoming,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
    ];

    pub fn tab_label(&self) -> &'static str {
        match self {
            AppointmentStatus::Upcoming => "Agendados",
            AppointmentStatus::Completed => "Concluídos",
            AppointmentStatus::Cancelled => "Cancelados",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            AppointmentStatus::Upcoming => "Agendado",
            AppointmentStatus::Completed => "Concluído",
            AppointmentStatus::Cancelled => "Cancelado",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            AppointmentStatus::Upcoming => "Nenhum agendamento futuro",
            AppointmentStatus::Completed => "Nenhum agendamento concluído",
            AppointmentStatus::Cancelled => "Nenhum agendamento cancelado",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub service: String,
    pub professional: String,
    pub location: String,
    pub status: AppointmentStatus,
}

impl Appointment {
    pub fn date_label(&self) -> String {
        format_date(self.date)
    }

    pub fn time_label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

const MONTHS: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho", "Julho", "Agosto", "Setembro",
    "Outubro", "Novembro", "Dezembro",
];

/// "12 de Junho, 2023"
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} de {}, {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

fn appointment(
    id: &str,
    (y, m, d): (i32, u32, u32),
    (h, min): (u32, u32),
    service: &str,
    professional: &str,
    status: AppointmentStatus,
) -> Option<Appointment> {
    Some(Appointment {
        id: id.into(),
        date: NaiveDate::from_ymd_opt(y, m, d)?,
        time: NaiveTime::from_hms_opt(h, min, 0)?,
        service: service.into(),
        professional: professional.into(),
        location: "Salão Beleza Natural".into(),
        status,
    })
}

pub fn appointments() -> Vec<Appointment> {
    use AppointmentStatus::*;
    [
        appointment("1", (2023, 6, 12), (14, 30), "Corte de Cabelo", "Ana Silva", Upcoming),
        appointment("2", (2023, 6, 15), (10, 0), "Manicure", "Carla Oliveira", Upcoming),
        appointment("3", (2023, 6, 5), (11, 30), "Hidratação", "Ana Silva", Completed),
        appointment("4", (2023, 6, 1), (16, 0), "Corte e Barba", "João Santos", Completed),
        appointment("5", (2023, 5, 8), (9, 30), "Coloração", "Ana Silva", Cancelled),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Appointments with a status, soonest first for upcoming, latest first otherwise
pub fn appointments_with_status(
    appointments: &[Appointment],
    status: AppointmentStatus,
) -> Vec<Appointment> {
    let mut found: Vec<Appointment> = appointments
        .iter()
        .filter(|a| a.status == status)
        .cloned()
        .collect();
    found.sort_by_key(|a| (a.date, a.time));
    if status != AppointmentStatus::Upcoming {
        found.reverse();
    }
    found
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    /// Job title, e.g. "Cabeleireira"
    pub position: String,
    pub email: String,
    pub phone: String,
}

pub fn team_members() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: "1".into(),
            name: "Ana Silva".into(),
            position: "Cabeleireira".into(),
            email: "ana@salaozap.com".into(),
            phone: "(11) 98765-4321".into(),
        },
        TeamMember {
            id: "2".into(),
            name: "Carlos Oliveira".into(),
            position: "Barbeiro".into(),
            email: "carlos@salaozap.com".into(),
            phone: "(11) 91234-5678".into(),
        },
    ]
}

/// Replace the record with the same id, or append it
pub fn upsert<T, F>(items: &mut Vec<T>, item: T, id_of: F)
where
    F: Fn(&T) -> &str,
{
    match items.iter().position(|existing| id_of(existing) == id_of(&item)) {
        Some(index) => items[index] = item,
        None => items.push(item),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<T>(items: &[T], name: impl Fn(&T) -> &str) -> Vec<String> {
        items.iter().map(|i| name(i).to_string()).collect()
    }

    #[test]
    fn services_filter_by_category_and_term() {
        let all = services();
        assert_eq!(filter_services(&all, ALL_CATEGORIES, "").len(), all.len());

        let hair = filter_services(&all, "Cabelo", "");
        assert_eq!(hair.len(), 3);

        let found = filter_services(&all, ALL_CATEGORIES, "UNHAS");
        assert_eq!(names(&found, |s| &s.name), ["Manicure"]);

        assert!(filter_services(&all, "Barba", "coloração").is_empty());
    }

    #[test]
    fn salon_search_matches_offered_services() {
        let found = search_salons(&salons(), "pedicure", SalonFilter::All);
        assert_eq!(names(&found, |s| &s.name), ["Studio Nail Art"]);
    }

    #[test]
    fn salon_filters_sort_without_touching_catalog() {
        let catalog = salons();
        let by_rating = search_salons(&catalog, "", SalonFilter::Rating);
        assert_eq!(by_rating[0].name, "Studio Nail Art");

        let nearby = search_salons(&catalog, "", SalonFilter::Nearby);
        assert!(nearby
            .windows(2)
            .all(|w| w[0].distance_km <= w[1].distance_km));

        assert_eq!(catalog, salons());
    }

    #[test]
    fn open_filter_composes_with_search() {
        let open = search_salons(&salons(), "", SalonFilter::Open);
        assert_eq!(open.len(), 3);
        assert!(search_salons(&salons(), "nail", SalonFilter::Open).is_empty());
    }

    #[test]
    fn appointments_grouped_by_status() {
        let all = appointments();
        assert_eq!(all.len(), 5);
        let upcoming = appointments_with_status(&all, AppointmentStatus::Upcoming);
        assert_eq!(names(&upcoming, |a| &a.id), ["1", "2"]);
        let completed = appointments_with_status(&all, AppointmentStatus::Completed);
        assert_eq!(names(&completed, |a| &a.id), ["3", "4"]);
    }

    #[test]
    fn dates_render_in_portuguese() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 12).unwrap();
        assert_eq!(format_date(date), "12 de Junho, 2023");
        assert_eq!(format_price(60.0), "R$ 60,00");
    }

    #[test]
    fn upsert_replaces_or_appends() {
        let mut members = team_members();
        let mut ana = members[0].clone();
        ana.position = "Colorista".into();
        upsert(&mut members, ana, |m| m.id.as_str());
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].position, "Colorista");

        let new = TeamMember {
            id: new_id(),
            name: "Bia".into(),
            position: "Manicure".into(),
            email: "bia@x.com".into(),
            phone: "1".into(),
        };
        upsert(&mut members, new, |m| m.id.as_str());
        assert_eq!(members.len(), 3);
    }

    #[test]
    fn new_ids_are_short_and_lowercase() {
        let id = new_id();
        assert_eq!(id.len(), 9);
        assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }
}
