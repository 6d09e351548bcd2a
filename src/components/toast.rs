use gloo_timers::callback::Timeout;
use yew::prelude::*;

const TOAST_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// A transient notification. Every network outcome the user must see goes
/// through one of these; nothing is fatal.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            variant: ToastVariant::Default,
        }
    }

    /// Success toast with no description line.
    pub fn brief(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: ToastVariant::Default,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Ошибка".to_string(),
            description: Some(description.into()),
            variant: ToastVariant::Destructive,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub toast: Option<Toast>,
    pub on_dismiss: Callback<()>,
}

/// Renders the current toast and dismisses it after a few seconds. Replacing
/// the toast restarts the timer; the previous one is cancelled on drop.
#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.toast.clone(), move |toast| {
            let timeout = toast
                .as_ref()
                .map(|_| Timeout::new(TOAST_DISMISS_MS, move || on_dismiss.emit(())));
            move || drop(timeout)
        });
    }

    let Some(toast) = &props.toast else {
        return Html::default();
    };

    let variant_class = match toast.variant {
        ToastVariant::Default => "toast-default",
        ToastVariant::Destructive => "toast-destructive",
    };
    let dismiss_click = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class={classes!("toast", variant_class)} onclick={dismiss_click}>
            <div class="toast-title">{ &toast.title }</div>
            if let Some(description) = &toast.description {
                <div class="toast-description">{ description }</div>
            }
        </div>
    }
}
