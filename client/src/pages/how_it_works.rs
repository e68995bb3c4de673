//! Step-by-step explanation of a verification.

use leptos::prelude::*;

struct Step {
    title: &'static str,
    desc: &'static str,
    icon: &'static str,
    tone: &'static str,
}

const STEPS: [Step; 3] = [
    Step {
        title: "Paste or Upload",
        desc: "User pastes news text or uploads an image/video/audio for verification.",
        icon: "📥",
        tone: "blue",
    },
    Step {
        title: "AI Analysis",
        desc: "The AI model analyzes the content across multiple languages and formats.",
        icon: "🤖",
        tone: "green",
    },
    Step {
        title: "Results",
        desc: "Output shows whether news is Fact, Fake, or Needs Proof, backed by sources.",
        icon: "✅",
        tone: "purple",
    },
];

#[component]
pub fn HowItWorksPage() -> impl IntoView {
    view! {
        <section class="page page--muted">
            <h1 class="page__title">"How It Works"</h1>
            <p class="page__lead">
                "Verifying news is simple. Follow these quick steps to check if content is "
                <strong>"real or fake"</strong> "."
            </p>
            <ol class="steps">
                {STEPS
                    .iter()
                    .enumerate()
                    .map(|(index, step)| {
                        view! {
                            <li class="steps__item">
                                <div class=format!("steps__icon steps__icon--{}", step.tone) aria-hidden="true">
                                    {step.icon}
                                </div>
                                <span class="steps__number">{format!("Step {}", index + 1)}</span>
                                <h3 class="steps__title">{step.title}</h3>
                                <p class="steps__desc">{step.desc}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}
