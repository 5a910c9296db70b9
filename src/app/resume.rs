use leptos::prelude::*;

use crate::content::{RESUME_PDF, RESUME_PREVIEW};

#[component]
pub fn Resume() -> impl IntoView {
    let button_class = "px-10 py-3 rounded-xl border border-purple-500/50 text-purple-400 hover:bg-purple-500/10 transition-all text-center";
    view! {
        <section id="resume">
            <h2 class="title-halo text-3xl mb-10">"Resume"</h2>
            <div class="w-full max-w-4xl mx-auto mb-8 rounded-2xl overflow-hidden border border-purple-500/40 glow">
                <img src=RESUME_PREVIEW alt="Resume Preview" class="w-full h-auto object-contain" />
            </div>
            <div class="flex flex-col sm:flex-row gap-4 justify-center">
                <a href=RESUME_PDF target="_blank" class=button_class>
                    "View Resume"
                </a>
                <a href=RESUME_PDF download="" class=button_class>
                    "Download Resume"
                </a>
            </div>
        </section>
    }
}
