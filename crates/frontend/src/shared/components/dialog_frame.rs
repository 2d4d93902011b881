use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Рамка диалога: оверлей, заголовок с кнопкой закрытия и тело.
///
/// Кнопки действий рендерит сам диалог через [`DialogFooter`].
#[component]
pub fn DialogFrame(
    #[prop(into)]
    title: String,
    /// Закрытие по крестику или клику по оверлею
    on_close: Callback<()>,
    /// Extra style for the modal surface (`div.modal`).
    #[prop(optional, into)]
    modal_style: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Закрываем, только если и нажатие, и отпускание были на самом оверлее
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // Оверлей нельзя удалять синхронно внутри его же обработчика
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let modal_style_full = move || match modal_style.get() {
        Some(extra) if !extra.is_empty() => format!("position: relative; {extra}"),
        _ => "position: relative;".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            style="z-index: 1000;"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class="modal" style=modal_style_full on:click=stop_propagation>
                <div class="modal-header">
                    <h3 class="modal-title">{title}</h3>
                    <button
                        class="button button--ghost"
                        title="Close"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Кнопки Cancel / подтверждения внизу диалога
#[component]
pub fn DialogFooter(
    #[prop(into)]
    confirm_label: String,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
    /// Подтверждение недоступно, пока форма невалидна
    #[prop(optional, into)]
    confirm_disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <div class="modal-footer">
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                "Cancel"
            </Button>
            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || confirm_disabled.get().unwrap_or(false))
                on_click=move |_| on_confirm.run(())
            >
                {confirm_label}
            </Button>
        </div>
    }
}

/// Диалог подтверждения действия над одной записью
#[component]
pub fn ConfirmDialog(
    #[prop(into)]
    title: String,
    #[prop(into)]
    message: String,
    #[prop(into)]
    confirm_label: String,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <DialogFrame title=title on_close=on_cancel>
            <p>{message}</p>
            <DialogFooter confirm_label=confirm_label on_cancel=on_cancel on_confirm=on_confirm />
        </DialogFrame>
    }
}

/// Сообщение об ошибке формы под полями
pub fn form_error(error: RwSignal<Option<String>>) -> impl IntoView {
    move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })
}
