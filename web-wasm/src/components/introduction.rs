//! 導入画面

use leptos::prelude::*;

const PILLARS: [(&str, &str); 3] = [
    (
        "Build The Machine",
        "Treat image generation as a manufacturing process. Identify the \"Brain\", \"Eyes\", and \"Hands\" of your automaton.",
    ),
    (
        "Flow of Energy",
        "Understand the color-coded \"fluids\" (Data Types) that flow through the wires. Connect the right ports to avoid catastrophic failure.",
    ),
    (
        "Component Logic",
        "Demystify the spaghetti. Learn the function of every node in the Parts Bin, from Checkpoints to KSamplers.",
    ),
];

#[component]
pub fn Introduction<FE>(on_enter: FE) -> impl IntoView
where
    FE: Fn(()) + 'static + Clone + Send,
{
    view! {
        <section class="introduction">
            <div class="module-intro">
                <h2>"The Artificer's Handbook"</h2>
                <p class="text-muted">
                    "Welcome to the Workshop. We are moving past the era of static \"black-box\" appliances. "
                    "You are no longer just a prompter; you are an engineer."
                </p>
            </div>

            <div class="pillar-grid">
                {PILLARS
                    .into_iter()
                    .map(|(title, body)| view! {
                        <div class="pillar">
                            <h3>{title}</h3>
                            <p class="text-muted">{body}</p>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="mission">
                <h3>"Your Mission"</h3>
                <p>
                    "By the end of this handbook, you will possess the knowledge to visualize a \"Scout\" (Text-to-Image), "
                    "a \"Mimic\" (Img2Img), or a \"Surgeon\" (Inpainting) on an empty canvas."
                </p>
                <button class="btn btn-primary" on:click=move |_| on_enter(())>
                    "Enter the Workshop"
                </button>
            </div>
        </section>
    }
}
