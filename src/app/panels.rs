use leptos::{either::EitherOf5, prelude::*};

use crate::portfolio::Tab;

use super::{
    content::{METRICS, PROJECTS, SKILLS},
    widgets::{ProjectCard, SecurityMetric, SkillBar},
};

const PANEL_HEADING: &str = "text-3xl font-bold mb-4 bg-gradient-to-r from-blue-400 to-purple-500 text-transparent bg-clip-text";

/// Renders only the panel for `tab`; the other panels are not in the output at all.
#[component]
pub fn TabPanel(tab: Tab) -> impl IntoView {
    match tab {
        Tab::About => EitherOf5::A(view! { <AboutPanel /> }),
        Tab::Skills => EitherOf5::B(view! { <SkillsPanel /> }),
        Tab::Projects => EitherOf5::C(view! { <ProjectsPanel /> }),
        Tab::Education => EitherOf5::D(view! { <PlaceholderPanel tab /> }),
        Tab::Contact => EitherOf5::E(view! { <PlaceholderPanel tab /> }),
    }
}

#[component]
fn AboutPanel() -> impl IntoView {
    view! {
        <div class="space-y-6" id="panel-about">
            <h3 class=PANEL_HEADING>"About Me"</h3>
            <p class="text-lg leading-relaxed">
                "As a dedicated cybersecurity analyst, I'm committed to safeguarding digital infrastructures and empowering organizations to navigate the complex landscape of cyber threats. With expertise in both Governance, Risk, and Compliance (GRC) and technical cybersecurity, I bring a holistic approach to identifying vulnerabilities and implementing robust security measures."
            </p>
            <p class="text-lg leading-relaxed">
                "My passion for cybersecurity is fueled by the dynamic nature of digital threats and the critical importance of protecting sensitive information in our interconnected world. I continuously expand my knowledge and skills to stay ahead of emerging threats and contribute meaningfully to the evolving field of cybersecurity."
            </p>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4 mt-8">
                {METRICS
                    .iter()
                    .map(|metric| view! { <SecurityMetric metric=*metric /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn SkillsPanel() -> impl IntoView {
    view! {
        <div class="space-y-6" id="panel-skills">
            <h3 class=PANEL_HEADING>"Technical Skills"</h3>
            <div>
                {SKILLS
                    .iter()
                    .map(|s| view! { <SkillBar skill=s.name level=s.level /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ProjectsPanel() -> impl IntoView {
    view! {
        <div class="space-y-6" id="panel-projects">
            <h3 class=PANEL_HEADING>"Projects"</h3>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {PROJECTS
                    .iter()
                    .map(|p| {
                        view! {
                            <ProjectCard title=p.title description=p.description tags=p.tags />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Panels with no content written yet.
#[component]
fn PlaceholderPanel(tab: Tab) -> impl IntoView {
    view! {
        <div class="space-y-6" id=format!("panel-{}", tab.id())>
            <h3 class=PANEL_HEADING>{tab.label()}</h3>
            <p class="text-lg text-gray-300">"This section is still being written."</p>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos_meta::provide_meta_context;

    use super::*;
    use crate::{
        app::{homepage::PortfolioPage, homepage::TipPopup, SignalStore},
        portfolio::{Store, TipState, SECURITY_TIPS},
    };

    fn render(tab: Tab) -> String {
        let owner = Owner::new();
        owner.with(|| view! { <TabPanel tab /> }.to_html())
    }

    fn panel_marker(tab: Tab) -> String {
        format!("id=\"panel-{}\"", tab.id())
    }

    #[test]
    fn test_only_active_panel_rendered() {
        for tab in Tab::ALL {
            let html = render(tab);
            for other in Tab::ALL {
                let marker = panel_marker(other);
                assert_eq!(html.contains(&marker), other == tab, "{tab} rendering {other}");
            }
        }
    }

    #[test]
    fn test_skills_panel_replaces_about() {
        let html = render(Tab::Skills);
        assert!(html.contains("Technical Skills"));
        assert!(html.contains("width: 90%"));
        assert!(!html.contains("About Me"));
    }

    #[test]
    fn test_unwritten_panels_show_placeholder() {
        for tab in [Tab::Education, Tab::Contact] {
            let html = render(tab);
            assert!(html.contains(tab.label()));
            assert!(html.contains("still being written"));
        }
    }

    #[test]
    fn test_page_renders_about_by_default() {
        let owner = Owner::new();
        let html = owner.with(|| {
            provide_meta_context();
            view! { <PortfolioPage /> }.to_html()
        });
        assert!(html.contains(&panel_marker(Tab::About)));
        for tab in [Tab::Skills, Tab::Projects, Tab::Education, Tab::Contact] {
            assert!(!html.contains(&panel_marker(tab)), "{tab} panel rendered");
        }
        assert!(!html.contains("Security Tip:"));
    }

    #[test]
    fn test_page_links_are_placeholders() {
        let owner = Owner::new();
        let html = owner.with(|| {
            provide_meta_context();
            view! { <PortfolioPage /> }.to_html()
        });
        assert!(html.contains("href=\"#\""));
        assert!(!html.contains("linkedin.com"));
        assert!(!html.contains(".pdf"));
        assert!(!html.contains("mailto:"));
    }

    #[test]
    fn test_tip_popup_follows_tip_state() {
        let owner = Owner::new();
        owner.with(|| {
            let store = SignalStore::new();
            let hidden = view! { <TipPopup store /> }.to_html();
            assert!(!hidden.contains("Security Tip:"));

            store.set_tip(TipState::Visible {
                text: SECURITY_TIPS[1],
            });
            let shown = view! { <TipPopup store /> }.to_html();
            assert!(shown.contains("Security Tip:"));
            assert!(shown.contains(SECURITY_TIPS[1]));
        });
    }
}
