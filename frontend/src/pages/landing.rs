use crate::components::service_status::ServiceStatus;
use crate::components::video_generator::{VideoGenerator, QUESTION_ANCHOR};
use crate::generation::models::VideoDuration;
use yew::prelude::*;

struct Step {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const STEPS: [Step; 3] = [
    Step {
        icon: "📝",
        title: "1. Ask Your Question",
        body: "Type any concept you want to understand - math, science, coding, or any topic",
    },
    Step {
        icon: "🤖",
        title: "2. AI Creates Video",
        body: "Our AI generates custom animations and explanations tailored to your question",
    },
    Step {
        icon: "🎬",
        title: "3. Watch & Learn",
        body: "Get a personalized video explanation with visual animations in seconds",
    },
];

fn duration_blurb(duration: VideoDuration) -> &'static str {
    match duration {
        VideoDuration::HalfMinute => "A quick definition with a single animation.",
        VideoDuration::OneMinute => "The default: intuition first, then one worked example.",
        VideoDuration::MinuteAndHalf => "Room for a derivation or a second example.",
        VideoDuration::TwoMinutes => "A full walkthrough for multi-step problems.",
    }
}

fn scroll_to_question() {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(QUESTION_ANCHOR));
    match element {
        Some(element) => element.scroll_into_view(),
        None => log::warn!("Question box #{} not found", QUESTION_ANCHOR),
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let landing_css = r#"
        .landing-page {
            min-height: 100vh;
            background: #0a0a0a;
            color: #fff;
            font-family: system-ui, -apple-system, sans-serif;
        }
        .top-nav {
            position: fixed;
            top: 0;
            width: 100%;
            background: rgba(10, 10, 10, 0.8);
            backdrop-filter: blur(12px);
            border-bottom: 1px solid rgba(255, 255, 255, 0.1);
            z-index: 50;
        }
        .nav-inner {
            max-width: 80rem;
            margin: 0 auto;
            padding: 1rem 1.5rem;
            display: flex;
            align-items: center;
            justify-content: space-between;
        }
        .nav-logo {
            font-size: 1.5rem;
            font-weight: 700;
        }
        .nav-links {
            display: flex;
            align-items: center;
            gap: 1.5rem;
        }
        .nav-links a {
            color: #fff;
            text-decoration: none;
            transition: color 0.2s ease;
        }
        .nav-links a:hover {
            color: #60a5fa;
        }
        .nav-cta {
            background: #2563eb;
            color: #fff;
            border: none;
            padding: 0.5rem 1.5rem;
            border-radius: 9999px;
            cursor: pointer;
        }
        .nav-cta:hover {
            background: #1d4ed8;
        }
        .hero {
            padding: 8rem 1.5rem 5rem 1.5rem;
            min-height: 100vh;
            display: flex;
            align-items: center;
            box-sizing: border-box;
        }
        .hero-content {
            max-width: 64rem;
            margin: 0 auto;
            width: 100%;
            text-align: center;
        }
        .hero-title {
            font-size: 4.5rem;
            font-weight: 700;
            line-height: 1.1;
            margin-bottom: 1.5rem;
        }
        .hero-title .gradient {
            background: linear-gradient(90deg, #fff, #dbeafe, #93c5fd);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .hero-subtitle {
            font-size: 1.5rem;
            color: #9ca3af;
            margin-bottom: 2.5rem;
        }
        .hero-subtitle strong {
            color: #fff;
        }
        .cta-row {
            display: flex;
            justify-content: center;
            margin: 1.5rem 0;
        }
        .cta-button {
            background: linear-gradient(90deg, #1f2937, #111827);
            color: #fff;
            border: 1px solid rgba(255, 255, 255, 0.1);
            padding: 1rem 2rem;
            border-radius: 9999px;
            font-size: 1.125rem;
            font-weight: 600;
            cursor: pointer;
            transition: transform 0.2s ease;
        }
        .cta-button:hover {
            transform: scale(1.05);
        }
        .trust-badge {
            color: #6b7280;
            font-size: 0.875rem;
            margin-bottom: 5rem;
        }
        .steps-section,
        .durations-section {
            padding: 5rem 1.5rem;
        }
        .steps-section {
            background: linear-gradient(180deg, #0a0a0a, #111827);
        }
        .durations-section {
            background: #111827;
        }
        .section-inner {
            max-width: 80rem;
            margin: 0 auto;
        }
        .section-header {
            text-align: center;
            margin-bottom: 4rem;
        }
        .section-header h2 {
            font-size: 2.75rem;
            font-weight: 700;
            margin-bottom: 1rem;
        }
        .section-header p {
            color: #9ca3af;
            font-size: 1.125rem;
        }
        .card-grid {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 2rem;
        }
        .card-grid.four {
            grid-template-columns: repeat(4, 1fr);
        }
        .card {
            background: rgba(17, 24, 39, 0.5);
            border: 1px solid rgba(255, 255, 255, 0.1);
            border-radius: 16px;
            padding: 2rem;
        }
        .card-icon {
            font-size: 2.25rem;
            margin-bottom: 1rem;
        }
        .card h3 {
            font-size: 1.5rem;
            margin-bottom: 0.75rem;
        }
        .card p {
            color: #9ca3af;
        }
        .site-footer {
            border-top: 1px solid rgba(255, 255, 255, 0.1);
            padding: 2rem 1.5rem;
            text-align: center;
            color: #6b7280;
            font-size: 0.875rem;
        }
        @media (max-width: 768px) {
            .hero-title {
                font-size: 3rem;
            }
            .hero-subtitle {
                font-size: 1.2rem;
            }
            .card-grid,
            .card-grid.four {
                grid-template-columns: 1fr;
            }
            .nav-links {
                gap: 0.75rem;
            }
        }
    "#;

    html! {
        <div class="landing-page">
            <style>{landing_css}</style>
            <nav class="top-nav">
                <div class="nav-inner">
                    <div class="nav-logo">{"PIYX AI"}</div>
                    <div class="nav-links">
                        <ServiceStatus />
                        <a href="#features">{"Features"}</a>
                        <a href="#how-it-works">{"How it Works"}</a>
                        <button class="nav-cta" onclick={Callback::from(|_: MouseEvent| scroll_to_question())}>
                            {"Get Started"}
                        </button>
                    </div>
                </div>
            </nav>

            <header class="hero">
                <div class="hero-content">
                    <h1 class="hero-title">
                        <span class="gradient">{"Live Audio-Video"}</span>
                        <br/>
                        {"Explanation"}
                    </h1>
                    <p class="hero-subtitle">
                        {"Where "}<strong>{"prompts"}</strong>{" become "}<strong>{"professors"}</strong>
                    </p>
                    <VideoGenerator />
                    <p class="trust-badge">
                        {"Join 10,000+ students preparing with AI-powered video explanations"}
                    </p>
                </div>
            </header>

            <section id="features" class="steps-section">
                <div class="section-inner">
                    <div class="section-header">
                        <h2>{"Your Personal Video Tutor in 3 Steps"}</h2>
                        <p>{"From question to crystal-clear video explanation in just 30 seconds"}</p>
                    </div>
                    <div class="card-grid">
                        { for STEPS.iter().map(|step| html! {
                            <div class="card">
                                <div class="card-icon">{step.icon}</div>
                                <h3>{step.title}</h3>
                                <p>{step.body}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="how-it-works" class="durations-section">
                <div class="section-inner">
                    <div class="section-header">
                        <h2>{"Pick the Depth You Need"}</h2>
                        <p>{"Choose a length before you ask. Longer videos cover more ground."}</p>
                    </div>
                    <div class="card-grid four">
                        { for VideoDuration::ALL.iter().map(|d| html! {
                            <div class="card">
                                <h3>{d.label()}</h3>
                                <p>{duration_blurb(*d)}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <footer class="site-footer">
                {"© PIYX AI. Videos are generated on demand and are not stored by this page."}
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_duration_has_a_blurb() {
        for duration in VideoDuration::ALL {
            assert!(!duration_blurb(duration).is_empty());
        }
    }
}
