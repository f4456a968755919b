use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::generation::client;
use crate::generation::models::SceneCode;

#[derive(Properties, PartialEq)]
pub struct SceneSourceProps {
    pub scene_id: String,
}

/// Collapsible view of the animation source behind a generated video.
/// Fetched on first expand; failures stay local to this panel.
#[function_component(SceneSource)]
pub fn scene_source(props: &SceneSourceProps) -> Html {
    let expanded = use_state(|| false);
    let loading = use_state(|| false);
    let scene = use_state(|| None::<Result<SceneCode, String>>);

    let on_toggle = {
        let expanded = expanded.clone();
        let loading = loading.clone();
        let scene = scene.clone();
        let scene_id = props.scene_id.clone();
        Callback::from(move |_: MouseEvent| {
            expanded.set(!*expanded);
            if scene.is_some() || *loading {
                return;
            }
            loading.set(true);
            let loading = loading.clone();
            let scene = scene.clone();
            let scene_id = scene_id.clone();
            spawn_local(async move {
                let result = client::fetch_scene_code(&scene_id).await;
                if let Err(e) = &result {
                    log::warn!("Could not load scene {}: {}", scene_id, e);
                }
                scene.set(Some(result));
                loading.set(false);
            });
        })
    };

    html! {
        <div class="scene-source">
            <style>
                {r#"
                    .scene-source {
                        margin-top: 1rem;
                        text-align: left;
                    }
                    .scene-toggle {
                        background: none;
                        border: none;
                        color: #60a5fa;
                        cursor: pointer;
                        font-size: 0.875rem;
                        padding: 0;
                    }
                    .scene-toggle:hover {
                        text-decoration: underline;
                    }
                    .scene-code {
                        margin-top: 0.75rem;
                        max-height: 24rem;
                        overflow: auto;
                        background: rgba(0, 0, 0, 0.4);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 8px;
                        padding: 1rem;
                        font-size: 0.8rem;
                        color: #e5e7eb;
                    }
                    .scene-error {
                        margin-top: 0.75rem;
                        color: #f87171;
                        font-size: 0.875rem;
                    }
                "#}
            </style>
            <button class="scene-toggle" onclick={on_toggle}>
                if *expanded {
                    {"Hide Scene Code"}
                } else {
                    {"View Scene Code"}
                }
            </button>
            if *expanded {
                if *loading {
                    <p class="loading-hint">{"Loading scene code..."}</p>
                } else {
                    {
                        match &*scene {
                            Some(Ok(code)) => html! {
                                <pre class="scene-code" title={code.scene_id.clone()}><code>{code.code.clone()}</code></pre>
                            },
                            Some(Err(message)) => html! {
                                <p class="scene-error">{message.clone()}</p>
                            },
                            None => html! {},
                        }
                    }
                }
            }
        </div>
    }
}
