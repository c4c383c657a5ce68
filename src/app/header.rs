use leptos::prelude::*;

use crate::portfolio::header_class;

use super::content::OWNER;

/// Fixed page header; turns opaque once the page has scrolled.
#[component]
pub fn Header(#[prop(into)] scrolled: Signal<bool>) -> impl IntoView {
    view! {
        <header class=move || header_class(scrolled.get())>
            <div class="max-w-6xl mx-auto flex justify-between items-center p-4">
                <h1 class="text-2xl font-bold">{OWNER}</h1>
                <nav class="flex space-x-4">
                    <a
                        href="#"
                        class="hover:text-blue-400 transition-colors"
                        aria-label="LinkedIn Profile"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                    <a
                        href="#"
                        class="hover:text-blue-400 transition-colors"
                        aria-label="Resume"
                    >
                        <i class="extra-download"></i>
                    </a>
                </nav>
            </div>
        </header>
    }
}
