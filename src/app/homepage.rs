use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    contact::ContactSection,
    hero::Hero,
    mount_gate::MountGate,
    resume::Resume,
    showcase::{Projects, Skills},
    toaster::Toaster,
};
use crate::content::OWNER;

static BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <MountGate>
            <main class="min-h-screen text-white relative bg-gradient-to-br from-[#12001f] via-black to-[#1a0033] stars-big">
                <Toaster />
                <div class="max-w-6xl mx-auto px-6 py-20 space-y-32">
                    <Hero />
                    <Skills />
                    <Projects />
                    <Resume />
                    <ContactSection />
                </div>
                <footer class="py-8 text-center text-xs text-gray-500">
                    {format!("© {OWNER}")} " · built " {BUILD_TIME}
                </footer>
            </main>
        </MountGate>
    }
}
