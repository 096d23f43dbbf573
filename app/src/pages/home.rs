use leptos::prelude::*;

use crate::components::{Contact, Footer, Hero, NavBar, Projects, Skills, TransitionStyles};

#[component]
pub fn Index() -> impl IntoView {
    view! {
        <TransitionStyles />
        <div class="min-h-screen bg-gradient-to-br from-gray-950 via-gray-900 to-black text-gray-200 font-sans">
            <NavBar />
            <main>
                <Hero />
                <Skills />
                <Projects />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
