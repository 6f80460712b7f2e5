use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_prefs::{PrefsStore, WebPrefsStore};
use resume_model::sample_resume;
use terminal_app::TerminalApp;

use crate::home::HomePage;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Avery Quinn" />
        <Meta name="description" content="Personal site with an interactive terminal-style resume." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=HomePage />
                    <Route path="/terminal" view=TerminalPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn TerminalPage() -> impl IntoView {
    let prefs: Rc<dyn PrefsStore> = Rc::new(WebPrefsStore);

    view! { <TerminalApp resume=sample_resume() prefs=prefs /> }
}
