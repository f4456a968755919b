use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::scene_source::SceneSource;
use crate::generation::client;
use crate::generation::models::VideoDuration;
use crate::generation::state::{GeneratorAction, GeneratorState, Submission};

/// Anchor the "Get Started" button scrolls to.
pub const QUESTION_ANCHOR: &str = "ask";

fn spinner(class: &'static str) -> Html {
    html! {
        <svg class={classes!("spinner", class)} fill="none" viewBox="0 0 24 24">
            <circle class="spinner-track" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
            <path class="spinner-head" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"></path>
        </svg>
    }
}

#[function_component(VideoGenerator)]
pub fn video_generator() -> Html {
    let state = use_reducer(GeneratorState::default);

    let on_question_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            state.dispatch(GeneratorAction::SetQuestion(input.value()));
        })
    };

    let on_duration_change = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match VideoDuration::from_option_value(&select.value()) {
                Some(duration) => state.dispatch(GeneratorAction::SetDuration(duration)),
                None => log::warn!("Ignoring unknown duration option: {}", select.value()),
            }
        })
    };

    let on_generate = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let request = match state.submission() {
                Submission::Send(request) => request,
                Submission::Reject(err) => {
                    state.dispatch(GeneratorAction::Reject(err));
                    return;
                }
                Submission::Busy => return,
            };
            state.dispatch(GeneratorAction::Start);
            let state = state.clone();
            spawn_local(async move {
                log::info!("Requesting a {}s video", request.duration);
                let outcome = client::generate_video(&request).await;
                if let Err(e) = &outcome {
                    log::error!("Video generation failed: {}", e);
                }
                state.dispatch(GeneratorAction::Finish(outcome));
            });
        })
    };

    let on_reset = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(GeneratorAction::Reset))
    };

    let generating = state.is_generating();
    let video = state.video().cloned();

    html! {
        <>
            <style>
                {r#"
                    .generator {
                        max-width: 56rem;
                        margin: 0 auto 1.5rem auto;
                    }
                    .prompt-box {
                        background: linear-gradient(135deg, rgba(17, 24, 39, 0.5), rgba(31, 41, 55, 0.5));
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 16px;
                        padding: 0.375rem;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                        backdrop-filter: blur(4px);
                    }
                    .prompt-box textarea {
                        width: 100%;
                        box-sizing: border-box;
                        background: transparent;
                        color: #fff;
                        border: none;
                        padding: 0.75rem 1.5rem;
                        border-radius: 12px;
                        resize: none;
                        font-size: 1rem;
                        font-family: inherit;
                    }
                    .prompt-box textarea:focus {
                        outline: none;
                    }
                    .prompt-box textarea::placeholder {
                        color: #6b7280;
                    }
                    .prompt-controls {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 0.375rem 0.75rem;
                    }
                    .prompt-options {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .pill {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: rgba(31, 41, 55, 0.8);
                        color: #fff;
                        border: none;
                        padding: 0.375rem 0.75rem;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        cursor: pointer;
                        transition: background-color 0.2s ease;
                    }
                    .pill:hover:not(:disabled) {
                        background: #374151;
                    }
                    .send-button {
                        background: #2563eb;
                        color: #fff;
                        border: none;
                        padding: 0.5rem;
                        border-radius: 9999px;
                        cursor: pointer;
                        display: flex;
                        transition: background-color 0.2s ease;
                    }
                    .send-button:hover:not(:disabled) {
                        background: #1d4ed8;
                    }
                    .send-button:disabled {
                        background: #4b5563;
                        cursor: not-allowed;
                    }
                    .icon {
                        width: 1rem;
                        height: 1rem;
                    }
                    .spinner {
                        animation: spin 1s linear infinite;
                    }
                    .spinner-track {
                        opacity: 0.25;
                    }
                    .spinner-head {
                        opacity: 0.75;
                    }
                    .spinner.large {
                        width: 1.5rem;
                        height: 1.5rem;
                    }
                    @keyframes spin {
                        to { transform: rotate(360deg); }
                    }
                    .panel {
                        max-width: 56rem;
                        margin: 0 auto 1.5rem auto;
                        border-radius: 12px;
                    }
                    .error-panel {
                        background: rgba(127, 29, 29, 0.2);
                        border: 1px solid rgba(239, 68, 68, 0.3);
                        padding: 1rem;
                        color: #f87171;
                    }
                    .loading-panel {
                        background: rgba(30, 58, 138, 0.2);
                        border: 1px solid rgba(59, 130, 246, 0.3);
                        padding: 1.5rem;
                    }
                    .loading-row {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.75rem;
                        color: #93c5fd;
                    }
                    .loading-hint {
                        color: #9ca3af;
                        font-size: 0.875rem;
                        margin-top: 0.5rem;
                    }
                    .result-panel {
                        background: linear-gradient(135deg, rgba(17, 24, 39, 0.5), rgba(31, 41, 55, 0.5));
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 16px;
                        padding: 1rem;
                    }
                    .result-panel video {
                        width: 100%;
                        border-radius: 12px;
                    }
                    .result-actions {
                        margin-top: 1rem;
                        display: flex;
                        gap: 0.5rem;
                    }
                    .result-actions button {
                        flex: 1;
                        color: #fff;
                        border: none;
                        padding: 0.5rem 1rem;
                        border-radius: 8px;
                        cursor: pointer;
                        transition: background-color 0.2s ease;
                    }
                    .download-button {
                        background: #2563eb;
                    }
                    .download-button:hover {
                        background: #1d4ed8;
                    }
                    .new-video-button {
                        background: #374151;
                    }
                    .new-video-button:hover {
                        background: #4b5563;
                    }
                "#}
            </style>
            <div class="generator" id={QUESTION_ANCHOR}>
                <div class="prompt-box">
                    <textarea
                        placeholder="Ask a question (will generate video)..."
                        rows="2"
                        value={state.question.clone()}
                        oninput={on_question_input}
                        disabled={generating}
                    />
                    <div class="prompt-controls">
                        <div class="prompt-options">
                            <button class="pill" disabled={generating}>
                                <span>{"➕"}</span>
                                <span>{"Upload"}</span>
                            </button>
                            <select class="pill" onchange={on_duration_change} disabled={generating}>
                                { for VideoDuration::ALL.iter().map(|d| html! {
                                    <option
                                        value={d.seconds().to_string()}
                                        selected={*d == state.duration}
                                    >
                                        {d.label()}
                                    </option>
                                }) }
                            </select>
                            <button class="pill" disabled={generating}>
                                <span>{"🌐"}</span>
                                <span>{"English"}</span>
                            </button>
                        </div>
                        <button
                            class="send-button"
                            onclick={on_generate}
                            disabled={!state.can_submit()}
                        >
                            if generating {
                                { spinner("icon") }
                            } else {
                                <svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 10l7-7m0 0l7 7m-7-7v18" />
                                </svg>
                            }
                        </button>
                    </div>
                </div>
            </div>

            if let Some(err) = state.error() {
                <div class="panel error-panel">
                    <p>{err.to_string()}</p>
                </div>
            }

            if generating {
                <div class="panel loading-panel">
                    <div class="loading-row">
                        { spinner("large") }
                        <p>{"Generating your educational video..."}</p>
                    </div>
                    <p class="loading-hint">{"This may take 30-60 seconds"}</p>
                </div>
            }

            if let Some(video) = video {
                <div class="panel result-panel">
                    <video controls=true autoplay=true>
                        <source src={video.url.clone()} type="video/mp4" />
                        {"Your browser does not support the video tag."}
                    </video>
                    <div class="result-actions">
                        <button class="download-button" onclick={
                            let url = video.url.clone();
                            Callback::from(move |_: MouseEvent| {
                                if let Some(window) = web_sys::window() {
                                    if let Err(e) = window.open_with_url_and_target(&url, "_blank") {
                                        log::error!("Failed to open video: {:?}", e);
                                    }
                                }
                            })
                        }>
                            {"Download Video"}
                        </button>
                        <button class="new-video-button" onclick={on_reset}>
                            {"Generate New Video"}
                        </button>
                    </div>
                    if let Some(scene_id) = video.scene_id.clone() {
                        <SceneSource {scene_id} />
                    }
                </div>
            }

            if !generating && state.video().is_none() {
                <div class="cta-row">
                    <button class="cta-button">
                        {"Watch AI-Generated Video Explanations"}
                    </button>
                </div>
            }
        </>
    }
}
