use leptos::{ev::MouseEvent, prelude::*};
use wasm_bindgen::JsCast;

use crate::{
    content::{HERO_IMAGE, INTRO, OWNER, ROLES, SOCIAL_LINKS},
    tilt::{BoundingBox, TiltState},
    typewriter::Typewriter,
};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="flex flex-col md:flex-row items-center md:items-start justify-between gap-10 md:gap-12 md:-ml-4">
            <div class="space-y-8 max-w-xl">
                <h1 class="text-4xl md:text-5xl font-bold min-h-[72px]">
                    {OWNER} " | " <span class="text-purple-400">
                        <RoleTypewriter />
                    </span>
                </h1>
                <p class="text-gray-400 mt-12 leading-relaxed">{INTRO}</p>
                <div class="flex gap-7 pt-2">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-3xl hover:text-purple-400 transition"
                                    aria-label=link.label
                                >
                                    <i class=link.icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <TiltImage src=HERO_IMAGE alt="Desk" />
        </section>
    }
}

#[component]
fn RoleTypewriter() -> impl IntoView {
    let typewriter = StoredValue::new(Typewriter::new(ROLES));
    let (text, set_text) = signal(String::new());

    Effect::new(move |_| type_next(typewriter, set_text));

    view! {
        <span>{text}</span>
        <span class="animate-pulse">"|"</span>
    }
}

fn type_next(typewriter: StoredValue<Typewriter>, set_text: WriteSignal<String>) {
    // the stored value is gone once the hero unmounts, which ends the loop
    let Some(delay) = typewriter.try_update_value(|tw| {
        let delay = tw.tick();
        set_text.set(tw.text().to_string());
        delay
    }) else {
        return;
    };
    set_timeout(move || type_next(typewriter, set_text), delay);
}

/// Image that leans toward the pointer while hovered.
#[component]
pub fn TiltImage(src: &'static str, alt: &'static str) -> impl IntoView {
    let (tilt, set_tilt) = signal(TiltState::default());

    let on_move = move |ev: MouseEvent| {
        let Some(el) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let bounds = BoundingBox {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        };
        set_tilt.set(TiltState::from_pointer(
            ev.client_x() as f64,
            ev.client_y() as f64,
            bounds,
        ));
    };

    view! {
        <div
            on:mousemove=on_move
            on:mouseleave=move |_| set_tilt.update(|t| t.reset())
            class="w-[230px] h-[220px] md:w-[350px] md:h-[310px] mt-8 md:mt-0 md:ml-12"
            style="perspective: 1000px"
        >
            <img
                src=src
                alt=alt
                class="w-full h-full object-cover rounded-xl transition-transform duration-200 cursor-pointer"
                style:transform=move || tilt.get().transform()
            />
        </div>
    }
}
