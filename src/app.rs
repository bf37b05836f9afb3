mod decor;
mod hero;
mod hooks;
mod nav;
mod reveal;
mod sections;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{
    content::{person_json_ld, SectionId, PROFILE},
    state::{CursorPos, NavState, SectionTracker},
};

use decor::{CursorGlow, NoiseOverlay};
use hero::Hero;
use nav::{MobileMenu, NavBar};
use sections::{About, Contact, Design, Footer, Photography, Projects, Skills, Social};

const BUILD_TIME: &str = env!("BUILD_TIME");
const FONTS_URL: &str = "https://fonts.googleapis.com/css2?family=Cormorant+Garamond:ital,wght@0,300;0,400;0,600;1,300;1,400&family=Courier+Prime:wght@400;700&family=Cinzel:wght@400;600&display=swap";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let json_ld = match person_json_ld() {
        Ok(json) => Some(json),
        Err(e) => {
            log::warn!("skipping structured data: {e}");
            None
        }
    };
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta name="build-time" content=BUILD_TIME />
                <link rel="shortcut icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link rel="stylesheet" href=FONTS_URL />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                // without scripts nothing would ever reveal
                <noscript>
                    <style>
                        ".section { opacity: 1; transform: none; } .skill-fill { width: var(--level) !important; }"
                    </style>
                </noscript>
                {json_ld
                    .map(|json| {
                        view! { <script type="application/ld+json" inner_html=json></script> }
                    })}
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.full_name()) />
        <Meta name="description" content=PROFILE.role_line() />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// View state owned by the page root and shared with every child view.
#[derive(Debug, Clone, Copy)]
pub struct PageState {
    tracker: RwSignal<SectionTracker>,
    nav: RwSignal<NavState>,
    pub active: Memo<SectionId>,
    pub menu_open: Memo<bool>,
    pub scrolled: Memo<bool>,
    pub cursor: Signal<CursorPos>,
}

impl PageState {
    fn new() -> Self {
        let tracker = RwSignal::new(SectionTracker::default());
        let active = Memo::new(move |_| tracker.with(SectionTracker::active));

        // effects only run in the browser, after hydration
        Effect::new(move |_| match hooks::fragment_section() {
            Ok(Some(id)) => tracker.set(SectionTracker::new(id)),
            Ok(None) => {}
            Err(e) => log::debug!("ignoring location fragment: {e}"),
        });

        let nav = RwSignal::new(NavState::default());
        hooks::use_nav_scroll(nav);

        Self {
            tracker,
            nav,
            active,
            menu_open: Memo::new(move |_| nav.with(NavState::menu_open)),
            scrolled: Memo::new(move |_| nav.with(NavState::scrolled)),
            cursor: hooks::use_cursor(),
        }
    }

    /// Records a visibility report for one section.
    pub fn record_visibility(&self, id: SectionId, is_intersecting: bool, ratio: f64) {
        self.tracker
            .maybe_update(|t| t.record(id, is_intersecting, ratio));
    }

    /// Smooth-scrolls to a section and closes the mobile menu.
    pub fn navigate_to(&self, id: SectionId) {
        self.nav.update(NavState::on_navigate);
        if let Err(e) = hooks::scroll_to_section(id) {
            log::warn!("cannot scroll to {id}: {e}");
        }
    }

    pub fn toggle_menu(&self) {
        self.nav.update(NavState::toggle_menu);
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    let state = PageState::new();
    provide_context(state);

    view! {
        <Title text="Portfolio" />
        <div class="page">
            <CursorGlow />
            <NoiseOverlay />
            <NavBar />
            <MobileMenu />
            <Hero />
            <About />
            <Skills />
            <Projects />
            <Design />
            <Photography />
            <Social />
            <Contact />
            <Footer />
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not Found" />
        <div class="page not-found">
            <div class="section-label">"✦ 404"</div>
            <h1 class="section-title">"Page not " <em>"found"</em></h1>
            <a class="btn btn-outline" href="/">
                "Back to the portfolio"
            </a>
        </div>
    }
}
