use crate::shared::components::page_header::PageHeader;
use crate::shared::config::DashboardConfig;
use crate::shared::dialogs::alert;
use crate::shared::reporter::{use_reporter, DashboardEvent};
use crate::system::users::api::create_user;
use contracts::domain::a003_team_member::AccessLevel;
use contracts::system::users::{CreateUserDto, FieldError};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Labelled input bound to one field of the form state.
fn text_field(
    form: RwSignal<CreateUserDto>,
    errors: RwSignal<Vec<FieldError>>,
    label: &'static str,
    field: &'static str,
    input_type: &'static str,
    get: fn(&CreateUserDto) -> String,
    set: fn(&mut CreateUserDto, String),
) -> impl IntoView {
    let error = move || errors.with(|e| CreateUserDto::error_for(e, field));
    view! {
        <div class="form__group" class:form__group--error=move || error().is_some()>
            <label class="form__label" for=field>{label}</label>
            <input
                class="form__input"
                id=field
                type=input_type
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
            {move || error().map(|msg| view! { <div class="form__error">{msg}</div> })}
        </div>
    }
}

#[component]
pub fn CreateUserForm() -> impl IntoView {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let reporter = use_reporter();
    let base = config.api.base_url.clone();

    let form = RwSignal::new(CreateUserDto::default());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let (attempted, set_attempted) = signal(false);
    let (is_saving, set_is_saving) = signal(false);

    // After the first submit, errors follow the input.
    Effect::new(move |_| {
        let dto = form.get();
        if attempted.get_untracked() {
            errors.set(dto.validate());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_saving.get_untracked() {
            return;
        }

        let dto = form.get_untracked();
        let found = dto.validate();
        let valid = found.is_empty();
        set_attempted.set(true);
        errors.set(found);
        if !valid {
            return;
        }

        set_is_saving.set(true);
        let base = base.clone();
        let reporter = reporter.clone();
        spawn_local(async move {
            match create_user(&base, &dto).await {
                Ok(response) => {
                    reporter.report(DashboardEvent::UserCreated { id: response.id });
                    alert("User successfully created!");
                    form.try_set(CreateUserDto::default());
                    set_attempted.try_set(false);
                    errors.try_set(Vec::new());
                }
                Err(e) => {
                    reporter.report(DashboardEvent::UserCreateFailed {
                        error: e.to_string(),
                    });
                    alert("Failed to create user. Please try again.");
                }
            }
            set_is_saving.try_set(false);
        });
    };

    let access_error = move || errors.with(|e| CreateUserDto::error_for(e, "accessLevel"));

    view! {
        <div class="page">
            <PageHeader title="Create User" subtitle="Create a new user profile".to_string() />

            <form class="form form--grid" on:submit=on_submit novalidate=true>
                {text_field(form, errors, "First Name", "firstName", "text",
                    |f| f.first_name.clone(), |f, v| f.first_name = v)}
                {text_field(form, errors, "Last Name", "lastName", "text",
                    |f| f.last_name.clone(), |f, v| f.last_name = v)}
                {text_field(form, errors, "E-mail", "email", "email",
                    |f| f.email.clone(), |f, v| f.email = v)}
                {text_field(form, errors, "Contact Number", "contact", "tel",
                    |f| f.contact.clone(), |f, v| f.contact = v)}
                {text_field(form, errors, "Role", "role", "text",
                    |f| f.role.clone(), |f, v| f.role = v)}

                <div class="form__group" class:form__group--error=move || access_error().is_some()>
                    <label class="form__label" for="accessLevel">"Access Level"</label>
                    <select
                        class="form__input"
                        id="accessLevel"
                        prop:value=move || form.with(|f| f.access_level.clone())
                        on:change=move |ev| form.update(|f| f.access_level = event_target_value(&ev))
                    >
                        <option value="">"Select..."</option>
                        {AccessLevel::ALL
                            .into_iter()
                            .map(|level| view! { <option value=level.as_str()>{level.as_str()}</option> })
                            .collect_view()}
                    </select>
                    {move || access_error().map(|msg| view! { <div class="form__error">{msg}</div> })}
                </div>

                <div class="form__actions">
                    <button type="submit" class="button button--primary" disabled=move || is_saving.get()>
                        {move || if is_saving.get() { "Saving..." } else { "Create New User" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
