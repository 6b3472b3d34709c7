//! Validated lead forms with a simulated submission.

use leptos::ev::SubmitEvent;
use leptos::logging::log;
use leptos::prelude::*;

use crate::core::form::{
    self, ERROR_CLASS, FieldEntry, FieldStatus, FormData, FormKind, SubmitOutcome,
    VALIDATION_MESSAGE, field_element_id,
};
use crate::core::timing::TaskHandle;
use crate::ui::dom;

/// Static description of one form control
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub placeholder: &'static str,
    pub required: bool,
    pub multiline: bool,
}

impl FieldSpec {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            input_type: "text",
            placeholder: "",
            required: false,
            multiline: false,
        }
    }

    pub const fn email(name: &'static str, label: &'static str) -> Self {
        Self {
            input_type: "email",
            ..Self::text(name, label)
        }
    }

    pub const fn textarea(name: &'static str, label: &'static str) -> Self {
        Self {
            multiline: true,
            ..Self::text(name, label)
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }
}

/// Live state of a rendered field
#[derive(Clone, Copy)]
struct FieldState {
    spec: FieldSpec,
    value: RwSignal<String>,
    invalid: RwSignal<bool>,
}

/// Acknowledge a submission after [`form::SUBMIT_DELAY_MS`].
///
/// Nothing is sent anywhere. The alert is skipped if `handle` was cancelled
/// in the meantime.
pub fn simulate_submission(kind: FormKind, data: FormData, handle: TaskHandle) {
    log!("Simulating {} submission with {} fields", kind, data.len());

    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            TimeoutFuture::new(form::SUBMIT_DELAY_MS).await;
            handle.run_if_active(|| dom::alert(form::submission_message(&kind)));
        });
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (kind, handle);
    }
}

#[component]
pub fn LeadForm(
    /// Declared form type (`data-type`); contact when absent
    #[prop(optional)]
    kind: Option<&'static str>,
    /// Prefix for control ids; defaults to the form kind
    #[prop(optional)]
    id: Option<&'static str>,
    fields: Vec<FieldSpec>,
    #[prop(default = "Submit")]
    submit_label: &'static str,
    #[prop(default = "lead-form")]
    class: &'static str,
) -> impl IntoView {
    let scope = id
        .map(str::to_string)
        .unwrap_or_else(|| FormKind::from_declared(kind).to_string());

    let states: Vec<FieldState> = fields
        .into_iter()
        .map(|spec| FieldState {
            spec,
            value: RwSignal::new(String::new()),
            invalid: RwSignal::new(false),
        })
        .collect();

    let handle = TaskHandle::new();
    {
        let handle = handle.clone();
        on_cleanup(move || handle.cancel());
    }

    let submit_states = states.clone();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let entries: Vec<FieldEntry> = submit_states
            .iter()
            .map(|f| FieldEntry::new(f.spec.name, f.value.get_untracked(), f.spec.required))
            .collect();

        let outcome = form::process_submit(FormKind::from_declared(kind), &entries);
        let report = match &outcome {
            SubmitOutcome::Rejected(report) | SubmitOutcome::Accepted { report, .. } => report,
        };
        for state in &submit_states {
            let failed = report.status_of(state.spec.name) == Some(FieldStatus::Invalid);
            state.invalid.set(failed);
        }

        match outcome {
            SubmitOutcome::Rejected(_) => dom::alert(VALIDATION_MESSAGE),
            SubmitOutcome::Accepted { kind, data, .. } => {
                simulate_submission(kind, data, handle.clone())
            }
        }
    };

    view! {
        <form class=class data-type=kind on:submit=on_submit novalidate=true>
            {states
                .into_iter()
                .map(|state| {
                    let field_id = field_element_id(&scope, state.spec.name);
                    view! { <FormField state=state field_id=field_id /> }
                })
                .collect_view()}
            <button type="submit" class="btn btn--primary btn--full-width">
                {submit_label}
            </button>
        </form>
    }
}

#[component]
fn FormField(state: FieldState, field_id: String) -> impl IntoView {
    let FieldState {
        spec,
        value,
        invalid,
    } = state;

    let control = if spec.multiline {
        view! {
            <textarea
                id=field_id.clone()
                name=spec.name
                class="form-control"
                class=(ERROR_CLASS, move || invalid.get())
                placeholder=spec.placeholder
                required=spec.required
                rows=4
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
        .into_any()
    } else {
        view! {
            <input
                id=field_id.clone()
                type=spec.input_type
                name=spec.name
                class="form-control"
                class=(ERROR_CLASS, move || invalid.get())
                placeholder=spec.placeholder
                required=spec.required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <div class="form-group">
            <label class="form-label" for=field_id>
                {spec.label}
                {spec.required.then(|| view! { <span class="form-required">"*"</span> })}
            </label>
            {control}
        </div>
    }
}
