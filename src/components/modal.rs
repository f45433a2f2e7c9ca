use leptos::prelude::*;

/// Overlay dialog closed by the backdrop, the close button, or Escape.
///
/// Locks body scroll while open. The keydown listener lives on the
/// document so Escape works without the dialog holding focus; both the
/// listener and the scroll lock are undone on unmount.
#[component]
pub fn Modal(#[prop(into)] title: String, on_close: Callback<()>, children: Children) -> impl IntoView {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let handler = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Escape" {
                    on_close.run(());
                }
            },
        );

        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document
                .add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref());
            if let Some(body) = document.body() {
                let _ = body.style().set_property("overflow", "hidden");
            }
        }

        // The closure has to outlive the listener registration, so it
        // parks in a thread-local slot until cleanup drops it.
        let slot = StoredValue::new_local(Some(handler));
        on_cleanup(move || {
            slot.try_update_value(|slot| {
                if let Some(handler) = slot.take() {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            handler.as_ref().unchecked_ref(),
                        );
                        if let Some(body) = document.body() {
                            let _ = body.style().remove_property("overflow");
                        }
                    }
                }
            });
        });
    }

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <header class="dialog__header">
                    <h2>{title}</h2>
                    <button class="dialog__close" on:click=move |_| on_close.run(())>
                        "\u{d7}"
                    </button>
                </header>
                {children()}
            </div>
        </div>
    }
}
