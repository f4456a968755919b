use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::generation::client;

/// Nav badge showing whether the video service answered its health check.
#[function_component(ServiceStatus)]
pub fn service_status() -> Html {
    let online = use_state(|| None::<bool>);

    {
        let online = online.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    online.set(Some(client::check_health().await));
                });
                || ()
            },
            (),
        );
    }

    let (class, label) = match *online {
        None => ("status-dot pending", "Checking service..."),
        Some(true) => ("status-dot online", "Service online"),
        Some(false) => ("status-dot offline", "Service offline"),
    };

    html! {
        <span class="service-status">
            <style>
                {r#"
                    .service-status {
                        display: flex;
                        align-items: center;
                        gap: 0.4rem;
                        font-size: 0.8rem;
                        color: #9ca3af;
                    }
                    .status-dot {
                        width: 8px;
                        height: 8px;
                        border-radius: 50%;
                        background: #6b7280;
                    }
                    .status-dot.online {
                        background: #34D399;
                    }
                    .status-dot.offline {
                        background: #f87171;
                    }
                "#}
            </style>
            <span class={class}></span>
            {label}
        </span>
    }
}
