//! Business hours editor (salon operators).

use chrono::Weekday;
use dioxus::prelude::*;

use crate::app::components::{PageHeader, SelectInput, ToggleInput};
use crate::app::toast::use_toast;
use crate::app::Route;
use crate::schedule::{
    day_name, format_time, parse_time, time_slots, DaySchedule, TimeField, WeekSchedule, WEEK,
};

/// Business hours page component.
#[component]
pub fn BusinessHours() -> Element {
    let toast = use_toast();
    let mut week = use_signal(WeekSchedule::default);

    let save = move |_: MouseEvent| {
        let result = week.read().validate();
        match result {
            Ok(()) => toast.show(
                "Horários salvos",
                format!("Seu salão abre {} dias por semana", week.read().open_days()),
            ),
            Err(e) => toast.error(&e),
        }
    };

    let days: Vec<(Weekday, DaySchedule)> = WEEK.iter().map(|&d| (d, *week.read().day(d))).collect();

    rsx! {
        PageHeader {
            title: "Horários de Atendimento".to_string(),
            back: Route::Settings {},
            subtitle: "Defina quando seu salão está aberto".to_string(),
        }

        for (day, schedule) in days {
            DayEditor {
                key: "{day:?}",
                day,
                schedule,
                on_toggle_day: move |d: Weekday| week.write().toggle_day(d),
                on_toggle_break: move |d: Weekday| week.write().toggle_break(d),
                on_time: move |(d, field, raw): (Weekday, TimeField, String)| {
                    if let Some(time) = parse_time(&raw) {
                        week.write().set_time(d, field, time);
                    }
                },
                on_copy: move |d: Weekday| {
                    week.write().copy_to_all(d);
                    toast.show("Horários copiados", format!("{} aplicado a todos os dias", day_name(d)));
                },
            }
        }

        button { class: "btn btn-primary w-full", onclick: save, "Salvar horários" }
    }
}

#[component]
fn DayEditor(
    day: Weekday,
    schedule: DaySchedule,
    on_toggle_day: EventHandler<Weekday>,
    on_toggle_break: EventHandler<Weekday>,
    on_time: EventHandler<(Weekday, TimeField, String)>,
    on_copy: EventHandler<Weekday>,
) -> Element {
    let name = day_name(day);
    let summary = schedule.summary();

    rsx! {
        article { class: "card day-schedule",
            header { class: "flex items-center justify-between",
                ToggleInput {
                    label: name,
                    checked: schedule.enabled,
                    on_change: move |_| on_toggle_day.call(day),
                }
                span { class: "text-muted", "{summary}" }
            }
            if schedule.enabled {
                div { class: "flex gap-2",
                    TimeSelect { label: "Abertura", day, field: TimeField::Open, schedule, on_time }
                    TimeSelect { label: "Fechamento", day, field: TimeField::Close, schedule, on_time }
                }
                ToggleInput {
                    label: "Intervalo",
                    checked: schedule.has_break,
                    on_change: move |_| on_toggle_break.call(day),
                }
                if schedule.has_break {
                    div { class: "flex gap-2",
                        TimeSelect { label: "Início", day, field: TimeField::BreakStart, schedule, on_time }
                        TimeSelect { label: "Fim", day, field: TimeField::BreakEnd, schedule, on_time }
                    }
                }
                button {
                    class: "btn btn-ghost btn-sm",
                    onclick: move |_| on_copy.call(day),
                    "Copiar para todos os dias"
                }
            }
        }
    }
}

#[component]
fn TimeSelect(
    label: &'static str,
    day: Weekday,
    field: TimeField,
    schedule: DaySchedule,
    on_time: EventHandler<(Weekday, TimeField, String)>,
) -> Element {
    let options: Vec<String> = time_slots().into_iter().map(format_time).collect();
    let selected = format_time(schedule.time(field));

    rsx! {
        SelectInput {
            label,
            options,
            selected,
            on_change: move |raw: String| on_time.call((day, field, raw)),
        }
    }
}
