use leptos::prelude::*;
use leptos_meta::Title;

use crate::portfolio::{tab_button_class, Store, Tab};

use super::{content::OWNER, header::Header, panels::TabPanel, state::SignalStore};

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let store = SignalStore::new();

    // timers and the scroll listener only exist in the browser
    #[cfg(feature = "hydrate")]
    {
        use std::rc::Rc;

        use super::browser::{BrowserHost, MathRandomPicker};
        use crate::portfolio::{PortfolioView, Timings};

        let mounted = StoredValue::new_local(None::<PortfolioView<BrowserHost, SignalStore>>);
        Effect::watch(
            || (),
            move |_, _, _| {
                match PortfolioView::mount(
                    Rc::new(BrowserHost),
                    store,
                    MathRandomPicker,
                    Timings::default(),
                ) {
                    Ok(view) => mounted.set_value(Some(view)),
                    Err(e) => log::error!("couldn't start page effects: {e}"),
                }
            },
            true,
        );
        on_cleanup(move || {
            mounted.try_update_value(|view| {
                if let Some(view) = view.take() {
                    view.unmount();
                }
            });
        });
    }

    view! {
        <Title text="Portfolio" />
        <div class="bg-gradient-to-br from-gray-900 via-blue-900 to-gray-900 min-h-screen text-white font-sans">
            <Header scrolled=store.scrolled />
            <main class="pt-24 pb-12">
                <div class="max-w-6xl mx-auto px-4">
                    <section class="bg-white/10 backdrop-blur-lg rounded-xl shadow-2xl p-8 mb-12 hover:scale-105 transition-transform duration-300">
                        <h2 class="text-4xl font-bold mb-4 bg-gradient-to-r from-blue-400 to-purple-500 text-transparent bg-clip-text">
                            "Securing the Digital Frontier"
                        </h2>
                        <p class="text-xl mb-6 leading-relaxed">
                            "Cybersecurity analyst dedicated to protecting digital assets and mitigating risks. Bridging GRC and technical cybersecurity for comprehensive security solutions."
                        </p>
                        <div class="flex flex-wrap gap-4">
                            {Tab::ALL
                                .into_iter()
                                .map(|tab| view! { <TabButton tab store /> })
                                .collect_view()}
                        </div>
                    </section>
                    <section class="bg-white/10 backdrop-blur-lg rounded-xl shadow-2xl p-8 mb-12">
                        {move || {
                            let tab = store.selected.get();
                            view! { <TabPanel tab /> }
                        }}
                    </section>
                </div>
            </main>
            <footer class="bg-black/50 text-center p-4">
                <p>{format!("© {BUILD_YEAR} {OWNER}. All rights reserved.")}</p>
            </footer>
            <TipPopup store />
        </div>
    }
}

#[component]
fn TabButton(tab: Tab, store: SignalStore) -> impl IntoView {
    view! {
        <button
            class=move || tab_button_class(store.selected.get() == tab)
            on:click=move |_| store.select_tab(tab)
        >
            <span>{tab.icon()}</span>
            <span class="ml-2">{tab.label()}</span>
        </button>
    }
}

#[component]
pub(super) fn TipPopup(store: SignalStore) -> impl IntoView {
    move || {
        store
            .tip
            .get()
            .text()
            .map(|text| {
                view! {
                    <div class="fixed bottom-4 right-4 bg-blue-600 text-white p-4 rounded-lg shadow-lg max-w-sm">
                        <h4 class="font-bold mb-2">"Security Tip:"</h4>
                        <p>{text}</p>
                    </div>
                }
            })
    }
}
