use leptos::ev::{PointerEvent, SubmitEvent};
use leptos::prelude::*;

use crate::composer::{self, Block};
use crate::content::{self, FieldKind, FormField};
use crate::icon::Icon;
use crate::transition::{self, HoverState, FADE_UP, FADE_ZOOM, PROJECT_HOVER, SKILL_HOVER};

const GRADIENT_TEXT: &str = "bg-gradient-to-r from-teal-300 to-blue-400 bg-clip-text text-transparent";
const FIELD_CLASS: &str =
    "p-3 border border-white/20 bg-white/5 rounded-xl focus:border-teal-300 transition";

#[component]
pub fn NavBar() -> impl IntoView {
    let entries = composer::compose(&content::NAV_ITEMS, |position, item| {
        (composer::nav_block(position, item), item.href())
    });

    view! {
        <header class="p-6 bg-black/40 backdrop-blur-md sticky top-0 z-50 border-b border-white/10">
            <nav class="max-w-6xl mx-auto flex justify-between items-center">
                <h1 class="text-3xl font-bold tracking-tight bg-gradient-to-r from-blue-400 to-teal-300 bg-clip-text text-transparent">
                    {content::BRAND}
                </h1>
                <ul class="flex gap-8 font-medium text-gray-300">
                    {entries
                        .into_iter()
                        .map(|(block, href)| {
                            view! {
                                <li data-block=block.kind.as_str() data-position=block.position.to_string() class="hover:text-teal-300 cursor-pointer transition">
                                    <a href=href>{block.label}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="px-6 py-24 max-w-6xl mx-auto grid md:grid-cols-2 gap-14 items-center">
            <div style=FADE_UP.animation()>
                <h2 class="text-6xl font-extrabold leading-tight mb-4">
                    <span class=GRADIENT_TEXT>{content::HERO_HEADING}</span>
                </h2>
                <p class="mt-4 text-gray-400 text-lg max-w-md">{content::HERO_TAGLINE}</p>
                <div class="mt-8 flex gap-4">
                    <button class="px-7 py-3 rounded-xl bg-gradient-to-r from-blue-500 to-teal-400 text-black font-semibold shadow-xl hover:opacity-90 transition">
                        {content::HERO_PRIMARY_ACTION}
                    </button>
                    <button class="px-7 py-3 rounded-xl border border-teal-400 text-teal-300 hover:bg-teal-400/10 transition font-semibold">
                        {content::HERO_SECONDARY_ACTION}
                    </button>
                </div>
            </div>
            <div style=FADE_ZOOM.animation()>
                <div class="w-72 h-72 rounded-3xl bg-gradient-to-br from-blue-500/30 to-teal-400/30 border border-white/10 backdrop-blur-md shadow-2xl mx-auto"></div>
            </div>
        </section>
    }
}

#[component]
pub fn SkillCard(block: Block) -> impl IntoView {
    let hover = HoverState::new(SKILL_HOVER);

    view! {
        <div
            data-block=block.kind.as_str()
            data-position=block.position.to_string()
            class="p-6 bg-white/5 backdrop-blur-md rounded-xl shadow-lg text-center font-semibold border border-white/10 hover:border-teal-300/40 transition"
            style=move || hover.style()
            on:pointerenter={hover.handler::<PointerEvent>(true)}
            on:pointerleave={hover.handler::<PointerEvent>(false)}
        >
            {block.label}
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="px-6 py-20">
            <h3 class=format!("text-4xl font-bold mb-14 text-center {GRADIENT_TEXT}")>
                {content::SKILLS_HEADING}
            </h3>
            <div class="grid md:grid-cols-4 gap-8 max-w-6xl mx-auto">
                {composer::compose(&content::SKILLS, composer::skill_block)
                    .into_iter()
                    .map(|block| view! { <SkillCard block=block /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ProjectCard(block: Block, description: &'static str) -> impl IntoView {
    let hover = HoverState::new(PROJECT_HOVER);

    view! {
        <div
            data-block=block.kind.as_str()
            data-position=block.position.to_string()
            class="p-6 bg-white/5 backdrop-blur-xl shadow-xl rounded-2xl border border-white/10 hover:border-teal-300/40 transition"
            style=move || hover.style()
            on:pointerenter={hover.handler::<PointerEvent>(true)}
            on:pointerleave={hover.handler::<PointerEvent>(false)}
        >
            <div class="h-44 bg-gradient-to-br from-gray-700 to-black rounded-xl shadow-md mb-5"></div>
            <h4 class="text-xl font-semibold mb-2">{block.label}</h4>
            <p class="text-gray-400 mb-5 text-sm">{description}</p>
            <button class="text-teal-300 font-medium hover:underline">{content::PROJECT_ACTION}</button>
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let cards = composer::compose(&content::PROJECTS, |position, project| {
        (composer::project_block(position, project), project.description)
    });

    view! {
        <section id="projects" class="px-6 py-20 bg-black/40 backdrop-blur-md">
            <h3 class="text-4xl font-bold mb-14 text-center bg-gradient-to-r from-blue-400 to-teal-300 bg-clip-text text-transparent">
                {content::PROJECTS_HEADING}
            </h3>
            <div class="grid md:grid-cols-3 gap-10 max-w-6xl mx-auto">
                {cards
                    .into_iter()
                    .map(|(block, description)| view! { <ProjectCard block=block description=description /> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// An event whose default browser action can be cancelled.
pub trait Cancelable {
    fn cancel(&self);
}

impl Cancelable for SubmitEvent {
    fn cancel(&self) {
        self.prevent_default();
    }
}

// Nothing is sent anywhere: the browser must not fall back to its own
// submission either, which would reload the page.
pub fn ignore_submission<E: Cancelable>(ev: E) {
    ev.cancel();
    log::debug!("contact form submitted, ignoring it");
}

fn form_field(field: &FormField) -> AnyView {
    match field.kind {
        FieldKind::Input => view! {
            <input class=FIELD_CLASS placeholder=field.placeholder />
        }
        .into_any(),
        FieldKind::TextArea { rows } => view! {
            <textarea class=FIELD_CLASS placeholder=field.placeholder rows=rows.to_string()></textarea>
        }
        .into_any(),
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="px-6 py-20">
            <h3 class=format!("text-4xl font-bold mb-10 text-center {GRADIENT_TEXT}")>
                {content::CONTACT_HEADING}
            </h3>
            <div class="max-w-xl mx-auto text-center">
                <p class="text-gray-400 mb-8 text-lg">{content::CONTACT_TAGLINE}</p>
                <form class="grid gap-5" on:submit={ignore_submission::<SubmitEvent>}>
                    {content::CONTACT_FIELDS.iter().map(form_field).collect_view()}
                    <button
                        type="submit"
                        class="px-7 py-3 bg-gradient-to-r from-blue-500 to-teal-400 text-black rounded-xl font-semibold shadow-xl hover:opacity-90 transition"
                    >
                        {content::CONTACT_SUBMIT}
                    </button>
                </form>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="p-8 bg-black/60 backdrop-blur-xl border-t border-white/10 text-center text-gray-400">
            <div class="flex justify-center gap-8 mb-4">
                {composer::compose(&content::SOCIAL_ICONS, composer::icon_block)
                    .into_iter()
                    .map(|block| view! { <Icon path=block.label /> })
                    .collect_view()}
            </div>
            <p>
                <a href="#top">{content::FOOTER_NOTE}</a>
            </p>
        </footer>
    }
}

/// Keyframes backing the mount transitions used by the sections above.
#[component]
pub fn TransitionStyles() -> impl IntoView {
    view! { <style>{transition::stylesheet()}</style> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct FakeSubmit {
        cancelled: Cell<u32>,
    }

    impl Cancelable for &FakeSubmit {
        fn cancel(&self) {
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }

    #[test]
    fn submitting_the_contact_form_is_cancelled() {
        let submit = FakeSubmit::default();
        ignore_submission(&submit);
        assert_eq!(1, submit.cancelled.get());
        ignore_submission(&submit);
        assert_eq!(2, submit.cancelled.get());
    }
}
